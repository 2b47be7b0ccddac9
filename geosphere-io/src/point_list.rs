//! Point list files: one coordinate triple per line
//!
//! Lines use the same syntax as [`parse_coordinates`]. Blank lines and lines
//! starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use geosphere_core::{Error, GeodesicSession, Point3d, Result};
use log::info;

use crate::coords::parse_coordinates;

/// Parse a whole point list from text
pub fn parse_point_list(text: &str) -> Result<Vec<[f64; 3]>> {
    parse_lines(text.lines().map(|line| Ok(line.to_string())))
}

/// Read a point list file
pub fn read_point_list<P: AsRef<Path>>(path: P) -> Result<Vec<[f64; 3]>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let coords = parse_lines(reader.lines().map(|line| line.map_err(Error::from)))?;
    info!("read {} points from {}", coords.len(), path.display());
    Ok(coords)
}

/// Read a point list file and append it to `session` as one batch
pub fn load_point_list<P: AsRef<Path>>(session: &mut GeodesicSession, path: P) -> Result<usize> {
    let coords = read_point_list(path)?;
    session.add_points(coords)
}

/// Write points in the point list syntax, one per line
pub fn write_point_list<W: Write>(points: &[Point3d], mut writer: W) -> Result<()> {
    for p in points {
        writeln!(writer, "{},{},{}", p.x, p.y, p.z)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_lines<I>(lines: I) -> Result<Vec<[f64; 3]>>
where
    I: Iterator<Item = Result<String>>,
{
    let mut coords = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let triple = parse_coordinates(trimmed).map_err(|e| at_line(e, index + 1))?;
        coords.push(triple);
    }
    Ok(coords)
}

fn at_line(error: Error, line: usize) -> Error {
    match error {
        Error::Format(msg) => Error::Format(format!("line {}: {}", line, msg)),
        Error::Numeric(msg) => Error::Numeric(format!("line {}: {}", line, msg)),
        other => other,
    }
}
