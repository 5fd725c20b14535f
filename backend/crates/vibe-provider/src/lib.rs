pub mod current_track;
pub mod error;
pub mod provider;
pub mod spotify_client;
pub mod token_grant;

pub use current_track::CurrentTrack;
pub use error::{ProviderError, Result};
pub use provider::DelegatedProvider;
pub use spotify_client::{SpotifyClient, SpotifyClientConfig};
pub use token_grant::TokenGrant;
