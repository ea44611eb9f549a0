use super::{now, path_id, AppState};
use crate::prelude::*;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use portfolio_core::blog::{BlogPost, NewBlogPost};
use portfolio_core::fields::parse_body;

pub async fn list(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    let posts = state.store.lock().await.list_blog_posts();
    log::debug!("listing {} blog posts", posts.len());
    Json(posts)
}

pub async fn show(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<BlogPost>, Error> {
    let id = path_id(id)?;
    let post = state.store.lock().await.blog_post(id)?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BlogPost>), Error> {
    let new_post = NewBlogPost::from_fields(&parse_body(&body))?;

    let post = state.store.lock().await.create_blog_post(new_post, now());
    log::info!("created blog post {} ({})", post.id, post.category);

    Ok((StatusCode::CREATED, Json(post)))
}
