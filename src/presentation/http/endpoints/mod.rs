pub mod auth;
pub mod health;
pub mod memos;
pub mod root;
