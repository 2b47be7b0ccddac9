//! Arc export: CSV rows and OBJ polylines

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geosphere_core::{Error, GeodesicArc, Point3d, Result};

use crate::serialization::write_arcs_json;

/// Writes a sequence of arcs (and the points they join) to a byte stream
pub trait ArcWriter {
    fn write_arcs<W: Write>(
        points: &[Point3d],
        arcs: &[GeodesicArc],
        writer: W,
    ) -> Result<()>;
}

/// `arc,index,x,y,z` rows, one per interpolated point
pub struct CsvArcWriter;

/// Wavefront OBJ with one `l` polyline per arc and the user points as `p`
pub struct ObjArcWriter;

impl ArcWriter for CsvArcWriter {
    fn write_arcs<W: Write>(
        _points: &[Point3d],
        arcs: &[GeodesicArc],
        mut writer: W,
    ) -> Result<()> {
        writeln!(writer, "arc,index,x,y,z")?;
        for (arc_index, arc) in arcs.iter().enumerate() {
            for (i, p) in arc.iter().enumerate() {
                writeln!(writer, "{},{},{},{},{}", arc_index, i, p.x, p.y, p.z)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

impl ArcWriter for ObjArcWriter {
    fn write_arcs<W: Write>(
        points: &[Point3d],
        arcs: &[GeodesicArc],
        mut writer: W,
    ) -> Result<()> {
        writeln!(writer, "# geosphere geodesic arcs")?;
        writeln!(writer, "# {} points, {} arcs", points.len(), arcs.len())?;

        // OBJ indices are 1-based and global across the file
        let mut next_index = 1usize;

        if !points.is_empty() {
            writeln!(writer, "o points")?;
            for p in points {
                writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
            }
            let indices: Vec<String> = (next_index..next_index + points.len())
                .map(|i| i.to_string())
                .collect();
            writeln!(writer, "p {}", indices.join(" "))?;
            next_index += points.len();
        }

        for (arc_index, arc) in arcs.iter().enumerate() {
            writeln!(writer, "o arc_{}", arc_index)?;
            for p in arc {
                writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
            }
            let indices: Vec<String> = (next_index..next_index + arc.len())
                .map(|i| i.to_string())
                .collect();
            writeln!(writer, "l {}", indices.join(" "))?;
            next_index += arc.len();
        }

        writer.flush()?;
        Ok(())
    }
}

/// Auto-detect format from the extension and write arcs to a file
pub fn write_arcs<P: AsRef<Path>>(
    path: P,
    points: &[Point3d],
    arcs: &[GeodesicArc],
) -> Result<()> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str());
    if !matches!(extension, Some("csv" | "obj" | "json")) {
        return Err(Error::Format(format!(
            "unsupported export format: {:?}",
            path.extension()
        )));
    }

    let writer = BufWriter::new(File::create(path)?);
    match extension {
        Some("csv") => CsvArcWriter::write_arcs(points, arcs, writer),
        Some("obj") => ObjArcWriter::write_arcs(points, arcs, writer),
        _ => write_arcs_json(points, arcs, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geosphere_core::GeodesicSession;

    fn session() -> GeodesicSession {
        let mut session = GeodesicSession::new(
            geosphere_core::SphereConfig::default().with_resolution(3),
        )
        .unwrap();
        session.add_points([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        session
    }

    #[test]
    fn test_csv_rows() {
        let session = session();
        let mut out = Vec::new();
        let (points, arcs) = (session.points().as_slice(), session.arcs().as_slice());
        CsvArcWriter::write_arcs(points, arcs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "arc,index,x,y,z");
        assert_eq!(lines.len(), 1 + 2 * 3);
        assert_eq!(lines[1], "0,0,1,0,0");
        assert!(lines[6].starts_with("1,2,"));
    }

    #[test]
    fn test_obj_polylines() {
        let session = session();
        let mut out = Vec::new();
        let (points, arcs) = (session.points().as_slice(), session.arcs().as_slice());
        ObjArcWriter::write_arcs(points, arcs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3 + 2 * 3);
        assert!(text.contains("p 1 2 3\n"));
        assert!(text.contains("l 4 5 6\n"));
        assert!(text.contains("l 7 8 9\n"));
    }

    #[test]
    fn test_write_arcs_json_file() {
        let session = session();
        let path =
            std::env::temp_dir().join(format!("geosphere_export_{}.json", std::process::id()));
        write_arcs(&path, session.points().as_slice(), session.arcs().as_slice()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 3);
        assert_eq!(value["arcs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_arcs_rejects_unknown_extension() {
        let result = write_arcs("arcs.xyz", &[], &[]);
        assert!(matches!(result, Err(Error::Format(_))));
    }
}
