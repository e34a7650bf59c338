use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::services::jwt::JwtServiceConfig;
use crate::application::usecases::{
    authenticate_user::AuthenticateUserUseCase, create_memo::CreateMemoUseCase,
    delete_memo::DeleteMemoUseCase, get_memo::GetMemoUseCase, list_memos::ListMemosUseCase,
    update_memo::UpdateMemoUseCase,
};
use crate::domain::errors::DomainError;

#[derive(Clone)]
pub struct ApiState {
    pub auth_usecase: Arc<AuthenticateUserUseCase>,
    pub list_memos_usecase: Arc<ListMemosUseCase>,
    pub get_memo_usecase: Arc<GetMemoUseCase>,
    pub create_memo_usecase: Arc<CreateMemoUseCase>,
    pub update_memo_usecase: Arc<UpdateMemoUseCase>,
    pub delete_memo_usecase: Arc<DeleteMemoUseCase>,
    pub jwt_config: JwtServiceConfig,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Memos,
}

pub(crate) fn domain_error(err: DomainError) -> poem::Error {
    use poem::http::StatusCode;

    let status = match &err {
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    poem::Error::from_string(err.to_string(), status)
}
