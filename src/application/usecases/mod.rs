pub mod authenticate_user;
pub mod create_memo;
pub mod delete_memo;
pub mod get_memo;
pub mod list_memos;
pub mod update_memo;
