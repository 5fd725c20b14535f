use error_location::ErrorLocation;
use thiserror::Error;

/// Every variant means the caller's session credential is unusable.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer <token>' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Message safe to hand back to a client (no locations, no key material)
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "Missing authorization header",
            Self::InvalidScheme { .. } => "Authorization header must be 'Bearer <token>'",
            Self::TokenExpired { .. } => "Session token expired",
            Self::JwtEncode { .. } => "Failed to issue session token",
            Self::InvalidToken { .. } | Self::JwtDecode { .. } | Self::InvalidClaim { .. } => {
                "Invalid session token"
            }
        }
    }

    /// Signing failures are server faults; everything else is a bad credential.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, Self::JwtEncode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
