use poem_openapi::Object;
use uuid::Uuid;

#[derive(Object)]
pub struct LoginResponseDto {
    pub token: String,
}

#[derive(Object)]
pub struct MemoDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_id: Uuid,
    pub created_at: String,
}

#[derive(Object)]
pub struct MemoListDto {
    pub memos: Vec<MemoDto>,
}
