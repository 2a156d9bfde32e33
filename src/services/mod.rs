pub mod repository;
pub mod token_service;

pub use repository::Repository;
pub use token_service::{Claims, TokenService, TOKEN_COOKIE};
