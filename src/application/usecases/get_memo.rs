use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Memo, repositories::MemoRepository};

pub struct GetMemoUseCase {
    repo: Arc<dyn MemoRepository>,
}

impl GetMemoUseCase {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    /// Any authenticated user may view any memo; there is no per-memo read
    /// restriction.
    pub async fn execute(&self, memo_id: Uuid) -> Result<Memo, DomainError> {
        self.repo
            .get(memo_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("memo {memo_id}")))
    }
}
