pub mod catalog;

pub use catalog::{CatalogError, Movie, MovieCatalog, MovieUpdate, NewMovie, RatedMovie};
