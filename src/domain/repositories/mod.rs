use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Memo, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
    async fn upsert(&self, user: &User) -> anyhow::Result<()>;
}

#[async_trait]
pub trait MemoRepository: Send + Sync {
    async fn insert(
        &self,
        title: String,
        content: String,
        owner_id: Uuid,
    ) -> anyhow::Result<Memo>;

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Memo>>;

    /// All memos in insertion order.
    async fn list(&self) -> anyhow::Result<Vec<Memo>>;

    /// Mutates title and content only. Returns `None` when the memo is absent.
    async fn update(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> anyhow::Result<Option<Memo>>;

    /// Returns `false` when the memo is absent.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
