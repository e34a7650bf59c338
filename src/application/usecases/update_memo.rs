use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::usecases::create_memo::validate_fields,
    domain::{
        authorization::require_owner, errors::DomainError, models::Memo,
        repositories::MemoRepository,
    },
};

pub struct UpdateMemoUseCase {
    repo: Arc<dyn MemoRepository>,
}

pub struct UpdateMemoRequest {
    pub memo_id: Uuid,
    pub requester_id: Uuid,
    pub title: String,
    pub content: String,
}

impl UpdateMemoUseCase {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateMemoRequest) -> Result<Memo, DomainError> {
        let memo = self
            .repo
            .get(request.memo_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("memo {}", request.memo_id)))?;
        require_owner(request.requester_id, &memo)?;

        let (title, content) = validate_fields(&request.title, &request.content)?;
        self.repo
            .update(request.memo_id, title, content)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("memo {}", request.memo_id)))
    }
}
