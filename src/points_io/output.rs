use crate::error::{Error, Result};
use crate::models::{Pair, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes items one per line using their `Display` form
fn write_lines<W, T>(mut writer: W, items: &[T]) -> std::io::Result<()>
where
    W: Write,
    T: std::fmt::Display,
{
    for item in items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()
}

fn save_lines<T: std::fmt::Display>(path: &Path, items: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file(path, e))?;
    write_lines(BufWriter::new(file), items).map_err(|e| Error::file(path, e))
}

/// Writes points as `(x,y)`, one per line
pub fn write_points<W: Write>(writer: W, points: &[Point]) -> Result<()> {
    Ok(write_lines(writer, points)?)
}

/// Writes pairs as `distance, (x1,y1), (x2,y2)`, one per line
pub fn write_pairs<W: Write>(writer: W, pairs: &[Pair]) -> Result<()> {
    Ok(write_lines(writer, pairs)?)
}

/// Saves a point list to `path`, replacing any existing file
pub fn save_points(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    save_lines(path, points)?;
    log::debug!("Saved {} points to {}", points.len(), path.display());
    Ok(())
}

/// Saves the selected pairs to `path`, replacing any existing file
pub fn save_pairs(path: impl AsRef<Path>, pairs: &[Pair]) -> Result<()> {
    let path = path.as_ref();
    save_lines(path, pairs)?;
    log::debug!("Saved {} pairs to {}", pairs.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_written_one_per_line() {
        let mut out = Vec::new();
        write_points(&mut out, &[Point::new(1, 2), Point::new(-3, 4)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(1,2)\n(-3,4)\n");
    }

    #[test]
    fn pairs_use_the_distance_first_format() {
        let mut out = Vec::new();
        let pairs = [
            Pair::between(Point::new(0, 0), Point::new(0, 1)),
            Pair::between(Point::new(0, 0), Point::new(1, 1)),
        ];
        write_pairs(&mut out, &pairs).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1, (0,0), (0,1)\n2, (0,0), (1,1)\n"
        );
    }

    #[test]
    fn nothing_to_write_is_an_empty_file() {
        let mut out = Vec::new();
        write_pairs(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
