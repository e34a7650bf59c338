use poem_openapi::{Object, types::Email};

#[derive(Object, Debug)]
pub struct LoginRequestDto {
    pub email: Email,
    pub display_name: Option<String>,
}

#[derive(Object, Debug)]
pub struct CreateMemoRequestDto {
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,
    #[oai(validator(min_length = 1))]
    pub content: String,
}

#[derive(Object, Debug)]
pub struct UpdateMemoRequestDto {
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,
    #[oai(validator(min_length = 1))]
    pub content: String,
}
