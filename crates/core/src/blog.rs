use crate::error::ApiError;
use crate::fields::{require_all, string_field, Fields};
use crate::timestamp::CreatedAt;
use serde::{Deserialize, Serialize};

/// Fields `POST /api/blog-posts` must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "content", "excerpt", "category"];

/// An article record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub created_at: String,
}

impl CreatedAt for BlogPost {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Validated body of `POST /api/blog-posts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
}

impl NewBlogPost {
    /// Presence of every field is checked before any type check, so the
    /// error always names the first absent field in [`REQUIRED_FIELDS`] order.
    pub fn from_fields(fields: &Fields) -> Result<Self, ApiError> {
        require_all(fields, &REQUIRED_FIELDS)?;

        Ok(Self {
            title: string_field(fields, "title")?,
            content: string_field(fields, "content")?,
            excerpt: string_field(fields, "excerpt")?,
            category: string_field(fields, "category")?,
        })
    }
}

/// The three posts every fresh store starts with
pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Getting Started with Web Development".to_string(),
            content: "Web development has been an incredible journey for me. Starting with HTML and CSS, I quickly discovered the power of creating interactive experiences. JavaScript opened up a whole new world of possibilities, allowing me to build dynamic applications that respond to user input. The key to success in web development is consistent practice and staying curious about new technologies.".to_string(),
            excerpt: "My journey into web development and the lessons learned along the way.".to_string(),
            category: "Development".to_string(),
            created_at: "2024-07-09T10:00:00Z".to_string(),
        },
        BlogPost {
            id: 2,
            title: "My Journey in Computer Science".to_string(),
            content: "Computer science is more than just coding - it's about problem-solving, logical thinking, and understanding how technology can improve people's lives. As a high school student passionate about this field, I've explored various aspects from algorithms to software engineering principles. Each project teaches me something new about efficiency, user experience, and the importance of clean, maintainable code.".to_string(),
            excerpt: "Exploring the fascinating world of computer science as a student.".to_string(),
            category: "Education".to_string(),
            created_at: "2024-07-09T09:30:00Z".to_string(),
        },
        BlogPost {
            id: 3,
            title: "Tips for Young Developers".to_string(),
            content: "Starting your development journey can feel overwhelming, but here are some tips that have helped me: 1) Start with the basics and build a strong foundation, 2) Practice coding every day, even if it's just for 30 minutes, 3) Build projects that solve real problems, 4) Don't be afraid to ask questions and seek help from the community, 5) Stay updated with industry trends but focus on mastering fundamentals first.".to_string(),
            excerpt: "Practical advice for aspiring developers just starting their journey.".to_string(),
            category: "Tips".to_string(),
            created_at: "2024-07-09T09:00:00Z".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::parse_body;

    #[test]
    fn test_new_blog_post_complete() {
        let fields = parse_body(
            br#"{"title": "T", "content": "C", "excerpt": "E", "category": "Rust"}"#,
        );
        let post = NewBlogPost::from_fields(&fields).unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.category, "Rust");
    }

    #[test]
    fn test_new_blog_post_missing_category() {
        let fields = parse_body(br#"{"title": "T", "content": "C", "excerpt": "E"}"#);
        assert_eq!(
            NewBlogPost::from_fields(&fields),
            Err(ApiError::MissingField("category"))
        );
    }

    #[test]
    fn test_new_blog_post_reports_first_missing_field() {
        let fields = parse_body(br#"{"category": "Rust"}"#);
        assert_eq!(
            NewBlogPost::from_fields(&fields),
            Err(ApiError::MissingField("title"))
        );
    }

    #[test]
    fn test_missing_field_wins_over_wrong_type() {
        let fields = parse_body(br#"{"title": 1, "content": "C", "excerpt": "E"}"#);
        assert_eq!(
            NewBlogPost::from_fields(&fields),
            Err(ApiError::MissingField("category"))
        );
    }

    #[test]
    fn test_seed_blog_posts() {
        let posts = seed_blog_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].category, "Development");
        assert_eq!(posts[1].created_at, "2024-07-09T09:30:00Z");
    }
}
