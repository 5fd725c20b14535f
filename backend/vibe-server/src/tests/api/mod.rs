mod error;
mod extractors;
mod profile;
