use poem::{Error as PoemError, Result as PoemResult, http::StatusCode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use uuid::Uuid;

use crate::application::services::jwt::{JwtService, JwtServiceConfig};

/// Bearer JWT scheme guarding the memo routes. A missing header is rejected
/// by the scheme itself; a bad token is rejected here. Verification yields
/// the requester's user id only — ownership checks happen in the use cases.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct JwtAuth(pub Bearer);

impl JwtAuth {
    pub fn requester_id(self, config: &JwtServiceConfig) -> PoemResult<Uuid> {
        let service = JwtService::new(config.clone());
        match service.verify(&self.0.token) {
            Ok(claims) => Ok(claims.sub),
            Err(_) => Err(PoemError::from_string(
                "invalid or expired memo API token",
                StatusCode::UNAUTHORIZED,
            )),
        }
    }
}
