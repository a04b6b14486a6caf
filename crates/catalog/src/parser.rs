//! Parser for catalog data files.
//!
//! Two `::`-separated files make up a catalog:
//! - movies.dat: movieId::title::year::duration::rating::Genre1|Genre2[::Actor1|Actor2]
//! - similarities.dat: sourceId::targetId::weight::sharedGenres
//!
//! The actors field is optional. Year, duration, rating and shared-genre
//! fields may be empty. An empty
//! field is an absent value and is normalized to zero here, so nothing
//! downstream ever deals with missing numbers.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;
use std::str::{FromStr, Split};

const MOVIES_FILE: &str = "movies.dat";
const SIMILARITIES_FILE: &str = "similarities.dat";

/// Read a file and return its non-blank lines with their 1-based numbers.
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty())
        .collect())
}

/// Pull the next `::` field or report which one is missing.
fn next_field<'a>(
    parts: &mut Split<'a, &'static str>,
    file: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts
        .next()
        .map(str::trim)
        .ok_or_else(|| CatalogError::Parse {
            file: file.to_string(),
            line,
            reason: format!("Missing {}", name),
        })
}

fn parse_required<T>(value: &str, file: &str, line: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| CatalogError::Parse {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", name, e),
    })
}

/// Parse a field that may be empty; empty means absent and becomes the default.
fn parse_optional<T>(value: &str, file: &str, line: usize, name: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    if value.is_empty() {
        Ok(T::default())
    } else {
        parse_required(value, file, line, name)
    }
}

/// Parse the movies.dat file
///
/// Example line: `3::Memento::2000::113::8.4::Mystery|Thriller`
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (line_no, line) in read_lines(path)? {
        let mut parts = line.split("::");

        let id = next_field(&mut parts, MOVIES_FILE, line_no, "movieId")?;
        let title = next_field(&mut parts, MOVIES_FILE, line_no, "title")?;
        let year = next_field(&mut parts, MOVIES_FILE, line_no, "year")?;
        let duration = next_field(&mut parts, MOVIES_FILE, line_no, "duration")?;
        let rating = next_field(&mut parts, MOVIES_FILE, line_no, "rating")?;
        let genres = next_field(&mut parts, MOVIES_FILE, line_no, "genres")?;
        let actors = parts.next().map(str::trim).unwrap_or("");

        if title.is_empty() {
            return Err(CatalogError::Parse {
                file: MOVIES_FILE.to_string(),
                line: line_no,
                reason: "Empty title".to_string(),
            });
        }

        let movie = Movie::new(parse_required(id, MOVIES_FILE, line_no, "movieId")?, title)
            .with_year(parse_optional(year, MOVIES_FILE, line_no, "year")?)
            .with_duration(parse_optional(duration, MOVIES_FILE, line_no, "duration")?)
            .with_rating(parse_optional(rating, MOVIES_FILE, line_no, "rating")?)
            .with_genres(parse_genres(genres))
            .with_actors(parse_pipe_list(actors));

        movies.push(movie);
    }
    Ok(movies)
}

/// Parse the similarities.dat file into `(source, edge)` pairs
///
/// Example line: `3::7::0.85::2`
pub fn parse_similarities(path: &Path) -> Result<Vec<(MovieId, SimilarityEdge)>> {
    let mut edges = Vec::new();

    for (line_no, line) in read_lines(path)? {
        let mut parts = line.split("::");

        let source = next_field(&mut parts, SIMILARITIES_FILE, line_no, "sourceId")?;
        let target = next_field(&mut parts, SIMILARITIES_FILE, line_no, "targetId")?;
        let weight = next_field(&mut parts, SIMILARITIES_FILE, line_no, "weight")?;
        // Older exports stop after the weight
        let shared = parts.next().map(str::trim).unwrap_or("");

        let source: MovieId = parse_required(source, SIMILARITIES_FILE, line_no, "sourceId")?;
        let edge = SimilarityEdge::new(
            parse_required(target, SIMILARITIES_FILE, line_no, "targetId")?,
            parse_required(weight, SIMILARITIES_FILE, line_no, "weight")?,
            parse_optional(shared, SIMILARITIES_FILE, line_no, "sharedGenres")?,
        );

        edges.push((source, edge));
    }
    Ok(edges)
}

/// Parse pipe-separated genres
///
/// Example: "Drama|Thriller" -> [Genre("Drama"), Genre("Thriller")]
fn parse_genres(s: &str) -> Vec<Genre> {
    parse_pipe_list(s).map(Genre::new).collect()
}

fn parse_pipe_list(s: &str) -> impl Iterator<Item = &str> {
    s.split('|').map(str::trim).filter(|name| !name.is_empty())
}
