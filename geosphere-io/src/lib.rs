//! I/O for geosphere sessions
//!
//! This crate covers the text boundary around the core:
//! - parsing typed `x,y,z` coordinates
//! - point list files for batch loading
//! - CSV, OBJ and JSON export of points and arcs, optionally with the
//!   session's sphere settings

pub mod coords;
pub mod export;
pub mod point_list;
pub mod serialization;

pub use coords::parse_coordinates;
pub use export::{write_arcs, ArcWriter, CsvArcWriter, ObjArcWriter};
pub use point_list::{load_point_list, parse_point_list, read_point_list, write_point_list};
pub use serialization::{write_arcs_json, write_session_json, ExportDocument};

use geosphere_core::{GeodesicSession, Point3d, Result};

/// Parse coordinate text and add the point to `session`.
///
/// Parsing errors leave the session untouched, as do normalization errors.
pub fn add_point_from_text(session: &mut GeodesicSession, text: &str) -> Result<Point3d> {
    let [x, y, z] = parse_coordinates(text)?;
    session.add_point(x, y, z)
}
