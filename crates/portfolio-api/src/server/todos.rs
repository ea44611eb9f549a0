use super::{now, path_id, AppState};
use crate::prelude::*;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use portfolio_core::fields::parse_body;
use portfolio_core::todo::{NewTodo, Todo, TodoPatch};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = state.store.lock().await.list_todos();
    log::debug!("listing {} todos", todos.len());
    Json(todos)
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), Error> {
    let new_todo = NewTodo::from_fields(&parse_body(&body))?;

    let todo = state.store.lock().await.create_todo(new_todo, now());
    log::info!("created todo {}", todo.id);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Only `completed` is read from the body; any other field is ignored.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, Error> {
    let id = path_id(id)?;
    let patch = TodoPatch::from_fields(&parse_body(&body))?;

    let todo = state.store.lock().await.update_todo(id, patch)?;
    log::info!("todo {} marked completed={}", todo.id, todo.completed);

    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, Error> {
    let id = path_id(id)?;

    let removed = state.store.lock().await.delete_todo(id)?;
    log::info!("deleted todo {}", removed.id);

    Ok(StatusCode::NO_CONTENT)
}
