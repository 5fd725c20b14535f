pub mod artist_repository;
pub mod image_repository;
pub mod interest_rating_repository;
pub mod interest_repository;
pub mod playlist_repository;
pub mod prompt_repository;
pub mod song_repository;
pub mod user_repository;
