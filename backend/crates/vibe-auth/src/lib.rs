pub mod bearer;
pub mod claims;
pub mod error;
pub mod session_token_service;

pub use bearer::parse_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use session_token_service::SessionTokenService;
