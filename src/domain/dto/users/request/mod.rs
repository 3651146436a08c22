pub mod auth_request;
pub mod account_request;

pub use account_request::{ForgotPasswordRequest, ResetPasswordRequest, VerifyEmailRequest};
pub use auth_request::{LoginRequest, RefreshTokenRequest, SignupRequest};
