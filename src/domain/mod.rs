pub mod authorization;
pub mod errors;
pub mod models;
pub mod repositories;
