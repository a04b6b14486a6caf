//! Catalog building and validation.
//!
//! Movies and similarity edges arrive separately (two files, or two
//! collections built in memory). This module stitches them into the arena
//! and enforces the invariants the algorithms rely on:
//! - movie ids are unique
//! - every edge joins two movies of the catalog
//! - edge weights are strictly positive and finite
//! - ratings are finite and non-negative

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a directory holding `movies.dat` and
    /// `similarities.dat`.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert movies (rejecting duplicate ids)
    /// 3. Attach similarity edges to their source movies
    /// 4. Validate the whole graph
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", data_dir);

        let movies_path = data_dir.join("movies.dat");
        let similarities_path = data_dir.join("similarities.dat");

        // Rayon's `join` runs the two parsers in parallel
        let (movies, similarities) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_similarities(&similarities_path),
        );
        let movies = movies?;
        let similarities = similarities?;

        info!(
            "Parsed {} movies and {} similarity edges",
            movies.len(),
            similarities.len()
        );

        let mut catalog = Catalog::from_movies(movies)?;
        for (source, edge) in similarities {
            catalog.add_similarity(source, edge)?;
        }
        catalog.validate()?;

        info!("Catalog successfully built and validated");
        Ok(catalog)
    }

    /// Build a catalog from fully materialized movies (edges already embedded).
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie)?;
        }
        Ok(catalog)
    }

    /// Insert a movie into the arena.
    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if self.positions.contains_key(&movie.id) {
            return Err(CatalogError::DuplicateMovie { id: movie.id });
        }
        self.positions.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        Ok(())
    }

    /// Attach an outgoing similarity edge to `source`.
    ///
    /// The target is not checked here: edges may be loaded before the
    /// movies they point at. [`Catalog::validate`] checks targets.
    pub fn add_similarity(&mut self, source: MovieId, edge: SimilarityEdge) -> Result<()> {
        let pos = *self
            .positions
            .get(&source)
            .ok_or_else(|| CatalogError::MissingReference {
                entity: "Movie".to_string(),
                id: source,
            })?;
        self.movies[pos].similar.push(edge);
        Ok(())
    }

    /// Validate data integrity
    ///
    /// Returns Ok(()) if valid, Err on the first issue found
    pub fn validate(&self) -> Result<()> {
        for movie in &self.movies {
            if movie.title.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "movie {} has an empty title",
                    movie.id
                )));
            }
            if !movie.rating.is_finite() || movie.rating < 0.0 {
                return Err(CatalogError::InvalidValue {
                    field: "rating".to_string(),
                    value: movie.rating.to_string(),
                });
            }
            for edge in &movie.similar {
                if !self.positions.contains_key(&edge.target) {
                    return Err(CatalogError::MissingReference {
                        entity: "Movie".to_string(),
                        id: edge.target,
                    });
                }
                if !edge.weight.is_finite() || edge.weight <= 0.0 {
                    return Err(CatalogError::InvalidValue {
                        field: "weight".to_string(),
                        value: edge.weight.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
