pub mod authorize;
pub mod check_session;
pub mod config;
pub mod revoke_session;
pub mod token;

pub use authorize::{AuthorizeInput, AuthorizeOutput, AuthorizeUseCase};
pub use check_session::{CheckSessionUseCase, SessionStatus};
pub use revoke_session::RevokeSessionUseCase;
