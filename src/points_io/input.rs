use crate::error::{Error, Result};
use crate::models::Point;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one point per line, skipping blank lines
///
/// # Errors
/// [`Error::Parse`] with the 1-based line number of the first malformed
/// line, or [`Error::Io`] if reading fails.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let point = line.parse::<Point>().map_err(|_| Error::Parse {
            line: index + 1,
            content: line.clone(),
        })?;
        points.push(point);
    }

    Ok(points)
}

/// Loads a point list from `path`
///
/// Duplicate coordinates are kept (they become zero-distance pairs) but
/// are reported with a warning.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::input(path, e))?;
    let points = read_points(BufReader::new(file))?;

    let unique: HashSet<&Point> = points.iter().collect();
    if unique.len() != points.len() {
        log::warn!(
            "{} contains {} duplicate points; they will pair at distance 0",
            path.display(),
            points.len() - unique.len()
        );
    }

    log::debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
