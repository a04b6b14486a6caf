//! Core domain types for the movie catalog.
//!
//! The similarity graph is cyclic (movie -> edge -> movie -> ...), so edges
//! never hold movies. They hold a [`MovieId`] and the [`Catalog`] arena
//! resolves ids back to movies on traversal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Genre
// =============================================================================

/// A genre, identified by its name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Genre {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// Similarity Edge
// =============================================================================

/// Directed similarity relationship owned by its source movie.
///
/// Higher `weight` means more similar. Weights are strictly positive in a
/// validated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEdge {
    pub target: MovieId,
    pub weight: f64,
    pub shared_genres: u32,
}

impl SimilarityEdge {
    pub fn new(target: MovieId, weight: f64, shared_genres: u32) -> Self {
        Self {
            target,
            weight,
            shared_genres,
        }
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie with its genres and outgoing similarity edges.
///
/// Numeric fields are already normalized: a catalog entry with no duration
/// or no rating carries `0` here, so algorithms never branch on absence.
/// Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year, `0` when unknown
    pub year: u16,
    /// Running time in minutes
    pub duration: u32,
    /// Average rating, never negative
    pub rating: f64,
    /// Genres in first-seen order, without duplicates
    pub genres: Vec<Genre>,
    /// Cast names, without duplicates
    #[serde(default)]
    pub actors: Vec<String>,
    /// Outgoing similarity edges
    pub similar: Vec<SimilarityEdge>,
}

impl Movie {
    /// Creates a movie with only an id and a title.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: 0,
            duration: 0,
            rating: 0.0,
            genres: Vec::new(),
            actors: Vec::new(),
            similar: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Adds genres by name, skipping any the movie already has.
    pub fn with_genres<I, G>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Genre>,
    {
        for genre in genres {
            self.add_genre(genre.into());
        }
        self
    }

    /// Adds cast members by name, skipping any already listed.
    pub fn with_actors<I, A>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        for actor in actors {
            let actor = actor.into();
            if !self.actors.contains(&actor) {
                self.actors.push(actor);
            }
        }
        self
    }

    pub fn with_similar(mut self, target: MovieId, weight: f64, shared_genres: u32) -> Self {
        self.similar
            .push(SimilarityEdge::new(target, weight, shared_genres));
        self
    }

    pub fn add_genre(&mut self, genre: Genre) {
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
    }

    pub fn has_genre(&self, name: &str) -> bool {
        self.genres.iter().any(|g| g.name() == name)
    }

    pub fn has_actor(&self, name: &str) -> bool {
        self.actors.iter().any(|a| a == name)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Catalog - the movie arena
// =============================================================================

/// Id-indexed arena holding every movie of a catalog.
///
/// Movies keep their insertion order, which is the order algorithms see
/// through [`Catalog::movies`]. Lookups by id go through a position index.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) positions: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.positions.get(&id).map(|&pos| &self.movies[pos])
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.positions.contains_key(&id)
    }

    /// All movies, in insertion order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get counts for debugging/validation: (movies, similarity edges)
    pub fn counts(&self) -> (usize, usize) {
        let edges = self.movies.iter().map(|m| m.similar.len()).sum();
        (self.movies.len(), edges)
    }
}
