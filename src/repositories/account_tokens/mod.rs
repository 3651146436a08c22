pub mod account_token_repo;

pub use account_token_repo::{AccountTokenRepository, AccountTokenStore};
