use crate::domain::repository::{RepoResult, TodoRepository};
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> RepoResult<Todo>;
    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    async fn list(&self) -> RepoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> RepoResult<bool>;
    async fn delete_all(&self) -> RepoResult<()>;
}

/// Routes calls to the repository, stamping new records with the configured url prefix.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
    url_prefix: String,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R, url_prefix: impl Into<String>) -> Self { Self { repo, url_prefix: url_prefix.into() } }

    pub fn url_prefix(&self) -> &str { &self.url_prefix }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> RepoResult<Todo> {
        let todo = self.repo.create(input.title, input.order, &self.url_prefix).await?;
        tracing::info!(id = %todo.id, title = %todo.title, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> { self.repo.get(id).await }

    async fn list(&self) -> RepoResult<Vec<Todo>> { self.repo.list().await }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>> {
        let updated = self.repo.update(id, input).await?;
        match &updated {
            Some(t) => tracing::debug!(id = %t.id, completed = ?t.completed, "todo updated"),
            None => tracing::debug!(%id, "update target missing"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let deleted = self.repo.delete(id).await?;
        tracing::debug!(%id, deleted, "todo delete");
        Ok(deleted)
    }

    async fn delete_all(&self) -> RepoResult<()> {
        self.repo.delete_all().await?;
        tracing::info!("all todos deleted");
        Ok(())
    }
}
