use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    repository::{RepoResult, TodoRepository},
    todo::{validate_title, Todo, TodoId, UpdateTodo},
};

/// Records keyed by insertion sequence so `list` comes out in creation order,
/// plus an id index into that map. Both live under one lock.
#[derive(Default)]
struct Store {
    next_seq: u64,
    records: BTreeMap<u64, Todo>,
    index: HashMap<TodoId, u64>,
}

impl Store {
    fn fresh_id(&self) -> TodoId {
        loop {
            let id = TodoId::new();
            if !self.index.contains_key(&id) { return id; }
        }
    }

    fn get_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        let seq = self.index.get(id)?;
        self.records.get_mut(seq)
    }
}

/// In-process repository guarded by a single coarse `RwLock`. Writers hold the
/// lock for their whole read-modify-write, readers share it.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, title: String, order: Option<i64>, url_prefix: &str) -> RepoResult<Todo> {
        validate_title(&title)?;
        let mut store = self.store.write().await;
        let id = store.fresh_id();
        let todo = Todo { id, title, order, url: format!("{url_prefix}{id}"), completed: None };
        let seq = store.next_seq;
        store.next_seq += 1;
        store.records.insert(seq, todo.clone());
        store.index.insert(id, seq);
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let store = self.store.read().await;
        Ok(store.index.get(&id).and_then(|seq| store.records.get(seq)).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.records.values().cloned().collect())
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>> {
        input.validate()?;
        let mut store = self.store.write().await;
        let Some(todo) = store.get_mut(&id) else { return Ok(None) };
        input.apply(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let mut store = self.store.write().await;
        let Some(seq) = store.index.remove(&id) else { return Ok(false) };
        Ok(store.records.remove(&seq).is_some())
    }

    async fn delete_all(&self) -> RepoResult<()> {
        let mut store = self.store.write().await;
        store.records.clear();
        store.index.clear();
        Ok(())
    }
}
