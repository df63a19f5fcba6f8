//! TSPLIB instance and tour-file loading.
//!
//! Reads the two file formats the search consumes:
//! - `.tsp` files with a `NODE_COORD_SECTION` of 2-D coordinates
//! - `.opt.tour` / `.tour` files with a `TOUR_SECTION` of 1-indexed point
//!   ids, terminated by `-1` or `EOF`
//!
//! Tour files are converted to the engine's 0-indexed representation here,
//! at the boundary; everything past this module is 0-indexed.

use std::path::Path;

use crate::error::{SearchError, SearchResult};
use crate::matrix::{DistanceMatrix, Point};
use crate::tour::Tour;

/// A parsed TSPLIB instance: a name and its point coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TsplibInstance {
    /// Instance name from the `NAME` field, if present.
    pub name: String,
    /// Point coordinates in file order.
    pub points: Vec<Point>,
}

impl TsplibInstance {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the instance has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build the Euclidean distance matrix for this instance.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInstance`] if any coordinate is not
    /// finite.
    pub fn distance_matrix(&self) -> SearchResult<DistanceMatrix> {
        DistanceMatrix::from_coords(&self.points)
    }
}

/// Parse a TSPLIB instance from its text content.
///
/// Recognizes `NAME`, `DIMENSION`, and the `NODE_COORD_SECTION` body of
/// `<id> <x> <y>` lines, ending at `EOF` or end of input. When `DIMENSION`
/// is present it must match the number of coordinate lines.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] on malformed headers, coordinate lines,
/// or a dimension mismatch.
pub fn parse_tsplib(text: &str) -> SearchResult<TsplibInstance> {
    let mut name = String::new();
    let mut dimension: Option<usize> = None;
    let mut points = Vec::new();
    let mut in_coords = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if in_coords {
            if line == "EOF" {
                break;
            }
            let mut fields = line.split_whitespace();
            let (Some(_id), Some(x), Some(y), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(SearchError::parse(format!(
                    "malformed coordinate line: {line:?}"
                )));
            };
            let x: f64 = x
                .parse()
                .map_err(|_| SearchError::parse(format!("bad x coordinate in line: {line:?}")))?;
            let y: f64 = y
                .parse()
                .map_err(|_| SearchError::parse(format!("bad y coordinate in line: {line:?}")))?;
            points.push(Point::new(x, y));
        } else if line.starts_with("NAME") {
            name = header_value(line).to_string();
        } else if line.starts_with("DIMENSION") {
            let value = header_value(line);
            let parsed = value
                .parse()
                .map_err(|_| SearchError::parse(format!("bad DIMENSION value: {value:?}")))?;
            dimension = Some(parsed);
        } else if line.starts_with("NODE_COORD_SECTION") {
            in_coords = true;
        }
    }

    if points.is_empty() {
        return Err(SearchError::parse("no NODE_COORD_SECTION coordinates found"));
    }
    if let Some(expected) = dimension {
        if points.len() != expected {
            return Err(SearchError::parse(format!(
                "DIMENSION is {expected} but {} coordinates were found",
                points.len()
            )));
        }
    }

    Ok(TsplibInstance { name, points })
}

/// Load and parse a TSPLIB instance file.
///
/// # Errors
///
/// Returns [`SearchError::Io`] if the file cannot be read, or a parse
/// error per [`parse_tsplib`].
pub fn load_tsplib<P: AsRef<Path>>(path: P) -> SearchResult<TsplibInstance> {
    let content = std::fs::read_to_string(path)?;
    parse_tsplib(&content)
}

/// Parse a reference tour from `.tour` / `.opt.tour` text content.
///
/// Reads the 1-indexed ids in the `TOUR_SECTION`, stopping at `-1` or
/// `EOF`, and converts them to a 0-indexed [`Tour`].
///
/// # Errors
///
/// Returns [`SearchError::Parse`] on malformed entries, or
/// [`SearchError::InvalidTour`] if the ids do not form a permutation.
pub fn parse_opt_tour(text: &str) -> SearchResult<Tour> {
    let mut order = Vec::new();
    let mut in_tour = false;

    'lines: for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "TOUR_SECTION" {
            in_tour = true;
            continue;
        }
        if !in_tour {
            continue;
        }
        if line == "EOF" {
            break;
        }

        for field in line.split_whitespace() {
            if field == "-1" {
                break 'lines;
            }
            let id: usize = field
                .parse()
                .map_err(|_| SearchError::parse(format!("bad tour entry: {field:?}")))?;
            order.push(id);
        }
    }

    if order.is_empty() {
        return Err(SearchError::parse("no TOUR_SECTION entries found"));
    }
    Tour::from_one_indexed(&order)
}

/// Load and parse a reference tour file.
///
/// # Errors
///
/// Returns [`SearchError::Io`] if the file cannot be read, or a parse
/// error per [`parse_opt_tour`].
pub fn load_opt_tour<P: AsRef<Path>>(path: P) -> SearchResult<Tour> {
    let content = std::fs::read_to_string(path)?;
    parse_opt_tour(&content)
}

fn header_value(line: &str) -> &str {
    line.split(':').next_back().unwrap_or("").trim()
}
