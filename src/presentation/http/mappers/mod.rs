use crate::{domain::models::Memo, presentation::http::responses::MemoDto};

pub fn map_memo(memo: &Memo) -> MemoDto {
    MemoDto {
        id: memo.id,
        title: memo.title.clone(),
        content: memo.content.clone(),
        owner_id: memo.owner_id,
        created_at: memo.created_at.to_rfc3339(),
    }
}
