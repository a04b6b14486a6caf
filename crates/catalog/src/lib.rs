//! # Catalog Crate
//!
//! This crate holds the movie domain model and loads it from disk.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, SimilarityEdge, Catalog)
//! - **parser**: Parse .dat files into Rust structs
//! - **index**: Build and validate the id-indexed catalog arena
//! - **query**: Lookups by genre, actor and rating, and depth-bounded walks
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data/catalog"))?;
//!
//! let movie = catalog.get_movie(3).unwrap();
//! for edge in &movie.similar {
//!     println!("{} -> {} ({:.2})", movie.title, edge.target, edge.weight);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod query;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Genre, Movie, MovieId, SimilarityEdge};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_movie() {
        let mut catalog = Catalog::new();

        let movie = Movie::new(1, "Memento")
            .with_year(2000)
            .with_duration(113)
            .with_rating(8.4)
            .with_genres(["Mystery", "Thriller", "Mystery"]);

        catalog.insert_movie(movie).unwrap();

        let retrieved = catalog.get_movie(1).unwrap();
        assert_eq!(retrieved.year, 2000);
        assert_eq!(retrieved.genres.len(), 2);
        assert!(retrieved.has_genre("Thriller"));
    }

    #[test]
    fn test_movie_identity_is_id() {
        let a = Movie::new(1, "A").with_rating(1.0);
        let b = Movie::new(1, "Another title").with_rating(9.0);
        assert_eq!(a, b);

        let set: std::collections::HashSet<Movie> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();
        assert!(catalog.get_movie(999).is_none());
        assert!(!catalog.contains(999));
        assert!(catalog.movies().is_empty());
    }
}
