//! API clients for Lumera: the TMDB metadata catalog and the GitHub
//! release feed used by the update check.

pub mod release;
pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
