use async_trait::async_trait;
use thiserror::Error;

use super::todo::{Todo, TodoId, UpdateTodo, ValidationError};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failures a repository can report. A missing record is not one of them:
/// lookups return `None` and deletes return `false`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Canonical store of todos. Every method must be safe to call concurrently.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, title: String, order: Option<i64>, url_prefix: &str) -> RepoResult<Todo>;
    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    /// Snapshot of live records in creation order.
    async fn list(&self) -> RepoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> RepoResult<bool>;
    async fn delete_all(&self) -> RepoResult<()>;
}
