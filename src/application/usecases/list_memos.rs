use std::sync::Arc;

use crate::domain::{errors::DomainError, models::Memo, repositories::MemoRepository};

pub struct ListMemosUseCase {
    repo: Arc<dyn MemoRepository>,
}

impl ListMemosUseCase {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Memo>, DomainError> {
        Ok(self.repo.list().await?)
    }
}
