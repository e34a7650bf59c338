use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    authorization::require_owner, errors::DomainError, repositories::MemoRepository,
};

pub struct DeleteMemoUseCase {
    repo: Arc<dyn MemoRepository>,
}

pub struct DeleteMemoRequest {
    pub memo_id: Uuid,
    pub requester_id: Uuid,
}

impl DeleteMemoUseCase {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: DeleteMemoRequest) -> Result<(), DomainError> {
        let memo = self
            .repo
            .get(request.memo_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("memo {}", request.memo_id)))?;
        require_owner(request.requester_id, &memo)?;

        if !self.repo.delete(request.memo_id).await? {
            return Err(DomainError::NotFound(format!("memo {}", request.memo_id)));
        }
        Ok(())
    }
}
