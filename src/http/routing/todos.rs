use axum::{extract::{Path, State}, routing::get, Router, Json};
use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;

use crate::{
    application::todo_service::TodoService,
    domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo},
    http::types::ApiError,
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>).delete(delete_all_todos::<S>))
        .route("/todos/:id", get(get_todo::<S>).patch(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Json(payload): Json<CreateTodo>) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// An unknown id is a successful empty response, not a 404.
async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    match state.service.get(id).await? {
        Some(t) => Ok(Json(t).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, Json(payload): Json<UpdateTodo>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    state.service.update(id, payload).await?.map(Json).ok_or_else(ApiError::not_found)
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.service.delete(id).await? { Ok(StatusCode::OK) } else { Err(ApiError::bad_request("no such todo")) }
}

async fn delete_all_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<StatusCode, ApiError> {
    state.service.delete_all().await?;
    Ok(StatusCode::OK)
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> { s.parse().map_err(|_| ApiError::bad_request("invalid id")) }
