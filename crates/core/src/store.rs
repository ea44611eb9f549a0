//! In-memory owner of the mutable collections
//!
//! A [`Store`] holds the todo and blog post collections in insertion order
//! together with their id counters. Counters only ever move forward, so an id
//! freed by a delete is never handed out again.

use crate::blog::{seed_blog_posts, BlogPost, NewBlogPost};
use crate::error::ApiError;
use crate::timestamp::newest_first;
use crate::todo::{seed_todos, NewTodo, Todo, TodoPatch};

#[derive(Debug, Clone)]
pub struct Store {
    todos: Vec<Todo>,
    blog_posts: Vec<BlogPost>,
    next_todo_id: u64,
    next_blog_post_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Store {
    /// Store with the three seed records per collection, counters at 4
    pub fn seeded() -> Self {
        Self::with_records(seed_todos(), seed_blog_posts())
    }

    /// Store over arbitrary records
    ///
    /// Each counter starts one past the highest id present (1 when empty).
    pub fn with_records(todos: Vec<Todo>, blog_posts: Vec<BlogPost>) -> Self {
        let next_todo_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let next_blog_post_id = blog_posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        Self {
            todos,
            blog_posts,
            next_todo_id,
            next_blog_post_id,
        }
    }

    /// All todos, newest first
    pub fn list_todos(&self) -> Vec<Todo> {
        newest_first(&self.todos)
    }

    pub fn create_todo(&mut self, new_todo: NewTodo, created_at: String) -> Todo {
        let todo = Todo {
            id: self.next_todo_id,
            text: new_todo.text,
            completed: new_todo.completed,
            created_at,
        };

        self.next_todo_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Set `completed` on the todo with `id`; nothing else is writable
    pub fn update_todo(&mut self, id: u64, patch: TodoPatch) -> Result<Todo, ApiError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::TodoNotFound)?;

        todo.completed = patch.completed;
        Ok(todo.clone())
    }

    /// Remove the todo with `id`, returning it
    pub fn delete_todo(&mut self, id: u64) -> Result<Todo, ApiError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(ApiError::TodoNotFound)?;

        Ok(self.todos.remove(index))
    }

    /// All blog posts, newest first
    pub fn list_blog_posts(&self) -> Vec<BlogPost> {
        newest_first(&self.blog_posts)
    }

    pub fn blog_post(&self, id: u64) -> Result<BlogPost, ApiError> {
        self.blog_posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::BlogPostNotFound)
    }

    pub fn create_blog_post(&mut self, new_post: NewBlogPost, created_at: String) -> BlogPost {
        let post = BlogPost {
            id: self.next_blog_post_id,
            title: new_post.title,
            content: new_post.content,
            excerpt: new_post.excerpt,
            category: new_post.category,
            created_at,
        };

        self.next_blog_post_id += 1;
        self.blog_posts.push(post.clone());
        post
    }
}
