use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Memo, User},
    repositories::{MemoRepository, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(())
    }
}

// A Vec keeps list() in insertion order without an extra sequence column.
#[derive(Default)]
pub struct InMemoryMemoRepository {
    memos: Arc<RwLock<Vec<Memo>>>,
}

impl InMemoryMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoRepository for InMemoryMemoRepository {
    async fn insert(
        &self,
        title: String,
        content: String,
        owner_id: Uuid,
    ) -> anyhow::Result<Memo> {
        let memo = Memo {
            id: Uuid::new_v4(),
            title,
            content,
            owner_id,
            created_at: Utc::now(),
        };
        let mut memos = self.memos.write().await;
        memos.push(memo.clone());
        Ok(memo)
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Memo>> {
        let memos = self.memos.read().await;
        Ok(memos.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Memo>> {
        let memos = self.memos.read().await;
        Ok(memos.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> anyhow::Result<Option<Memo>> {
        let mut memos = self.memos.write().await;
        if let Some(memo) = memos.iter_mut().find(|m| m.id == id) {
            memo.title = title;
            memo.content = content;
            return Ok(Some(memo.clone()));
        }
        Ok(None)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut memos = self.memos.write().await;
        let before = memos.len();
        memos.retain(|m| m.id != id);
        Ok(memos.len() < before)
    }
}
