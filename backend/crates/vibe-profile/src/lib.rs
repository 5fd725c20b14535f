pub mod account;
pub mod aggregator;
pub mod error;
pub mod playback;
pub mod synchronizer;
pub mod token_refresh;

pub use account::{AccountService, LoginOutcome, LoginRequest};
pub use aggregator::ProfileAggregator;
pub use error::{ProfileError, Result};
pub use playback::{PlaybackService, PlaybackUpdate};
pub use synchronizer::ProfileSynchronizer;
pub use token_refresh::TokenRefreshCoordinator;
