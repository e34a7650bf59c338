use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Memo, repositories::MemoRepository};

pub struct CreateMemoUseCase {
    repo: Arc<dyn MemoRepository>,
}

pub struct CreateMemoRequest {
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
}

impl CreateMemoUseCase {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateMemoRequest) -> Result<Memo, DomainError> {
        let (title, content) = validate_fields(&request.title, &request.content)?;
        let memo = self.repo.insert(title, content, request.owner_id).await?;
        Ok(memo)
    }
}

pub(crate) fn validate_fields(
    title: &str,
    content: &str,
) -> Result<(String, String), DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidArgument(
            "title must not be empty".to_string(),
        ));
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::InvalidArgument(
            "content must not be empty".to_string(),
        ));
    }
    Ok((title.to_string(), content.to_string()))
}
