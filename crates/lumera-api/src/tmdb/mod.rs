//! TMDB v3 REST client.

mod client;
mod error;
pub mod types;

pub use client::{TmdbClient, BACKDROP_BASE_URL, POSTER_BASE_URL, PROFILE_BASE_URL};
pub use error::TmdbError;
