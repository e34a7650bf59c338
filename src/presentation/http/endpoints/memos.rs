use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::{
        create_memo::CreateMemoRequest, delete_memo::DeleteMemoRequest,
        update_memo::UpdateMemoRequest,
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags, domain_error},
        mappers::map_memo,
        requests::{CreateMemoRequestDto, UpdateMemoRequestDto},
        responses::{MemoDto, MemoListDto},
        security::JwtAuth,
    },
};

#[derive(Clone)]
pub struct MemosEndpoints {
    state: Arc<ApiState>,
}

impl MemosEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl MemosEndpoints {
    #[oai(
        path = "/memos",
        method = "get",
        tag = EndpointsTags::Memos,
    )]
    pub async fn list_memos(&self, auth: JwtAuth) -> PoemResult<Json<MemoListDto>> {
        let _requester = auth.requester_id(&self.state.jwt_config)?;

        let memos = self
            .state
            .list_memos_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(MemoListDto {
            memos: memos.iter().map(map_memo).collect(),
        }))
    }

    #[oai(
        path = "/memos/:memo_id",
        method = "get",
        tag = EndpointsTags::Memos,
    )]
    pub async fn get_memo(&self, auth: JwtAuth, memo_id: Path<Uuid>) -> PoemResult<Json<MemoDto>> {
        let _requester = auth.requester_id(&self.state.jwt_config)?;

        let memo = self
            .state
            .get_memo_usecase
            .execute(memo_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_memo(&memo)))
    }

    #[oai(
        path = "/memos",
        method = "post",
        tag = EndpointsTags::Memos,
    )]
    pub async fn create_memo(
        &self,
        auth: JwtAuth,
        request: Json<CreateMemoRequestDto>,
    ) -> PoemResult<Json<MemoDto>> {
        let requester_id = auth.requester_id(&self.state.jwt_config)?;

        let memo = self
            .state
            .create_memo_usecase
            .execute(CreateMemoRequest {
                owner_id: requester_id,
                title: request.title.clone(),
                content: request.content.clone(),
            })
            .await
            .map_err(domain_error)?;

        Ok(Json(map_memo(&memo)))
    }

    #[oai(
        path = "/memos/:memo_id",
        method = "put",
        tag = EndpointsTags::Memos,
    )]
    pub async fn update_memo(
        &self,
        auth: JwtAuth,
        memo_id: Path<Uuid>,
        request: Json<UpdateMemoRequestDto>,
    ) -> PoemResult<Json<MemoDto>> {
        let requester_id = auth.requester_id(&self.state.jwt_config)?;

        let memo = self
            .state
            .update_memo_usecase
            .execute(UpdateMemoRequest {
                memo_id: memo_id.0,
                requester_id,
                title: request.title.clone(),
                content: request.content.clone(),
            })
            .await
            .map_err(domain_error)?;

        Ok(Json(map_memo(&memo)))
    }

    #[oai(
        path = "/memos/:memo_id",
        method = "delete",
        tag = EndpointsTags::Memos,
    )]
    pub async fn delete_memo(&self, auth: JwtAuth, memo_id: Path<Uuid>) -> PoemResult<()> {
        let requester_id = auth.requester_id(&self.state.jwt_config)?;

        self.state
            .delete_memo_usecase
            .execute(DeleteMemoRequest {
                memo_id: memo_id.0,
                requester_id,
            })
            .await
            .map_err(domain_error)?;

        Ok(())
    }
}
