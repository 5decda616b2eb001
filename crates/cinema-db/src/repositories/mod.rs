//! Explicit data-access layer. Handlers never build queries themselves.

mod director;
mod genre;
mod movie;

pub use director::DirectorRepository;
pub use genre::GenreRepository;
pub use movie::{MovieFilter, MovieRecord, MovieRepository, NewMovie};
