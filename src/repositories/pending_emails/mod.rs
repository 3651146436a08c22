pub mod pending_email_repo;

pub use pending_email_repo::{PendingEmailRepository, PendingEmailStore};
