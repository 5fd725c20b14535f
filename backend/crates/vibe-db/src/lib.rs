pub mod connection;
pub mod error;
pub mod repositories;

mod decode;


pub use connection::pool::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::artist_repository::ArtistRepository;
pub use repositories::image_repository::ImageRepository;
pub use repositories::interest_rating_repository::InterestRatingRepository;
pub use repositories::interest_repository::InterestRepository;
pub use repositories::playlist_repository::PlaylistRepository;
pub use repositories::prompt_repository::PromptRepository;
pub use repositories::song_repository::SongRepository;
pub use repositories::user_repository::UserRepository;
