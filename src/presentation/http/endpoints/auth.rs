use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::authenticate_user::AuthRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::LoginRequestDto,
        responses::LoginResponseDto,
    },
};

/// Passwordless login: finds or creates the account for an email address and
/// issues the bearer token the memo routes require.
#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    #[oai(path = "/auth/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(
        &self,
        request: Json<LoginRequestDto>,
    ) -> poem::Result<Json<LoginResponseDto>> {
        let LoginRequestDto {
            email,
            display_name,
        } = request.0;

        let response = self
            .state
            .auth_usecase
            .execute(AuthRequest {
                email: email.0,
                display_name,
            })
            .await
            .map_err(|err| {
                poem::Error::from_string(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
            })?;

        Ok(Json(LoginResponseDto {
            token: response.token,
        }))
    }
}
