//! JSON export of points and arcs
//!
//! Write-only: the documents are for downstream tools, nothing here reads
//! a session back.

use std::io::Write;

use geosphere_core::{Error, GeodesicArc, GeodesicSession, Point3d, Result, SphereConfig};
use serde::Serialize;

/// Serialized form of the points and arcs, with the sphere settings
/// when a whole session is exported
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<SphereConfig>,
    pub points: &'a [Point3d],
    pub arcs: Vec<&'a [Point3d]>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(points: &'a [Point3d], arcs: &'a [GeodesicArc]) -> Self {
        Self {
            config: None,
            points,
            arcs: arcs.iter().map(GeodesicArc::points).collect(),
        }
    }

    /// Capture a session, config included
    pub fn from_session(session: &'a GeodesicSession) -> Self {
        Self {
            config: Some(session.config()),
            ..Self::new(session.points().as_slice(), session.arcs().as_slice())
        }
    }

    /// Pretty-print to `writer` and flush it
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

/// Points, arcs and sphere settings of a session as JSON
pub fn write_session_json<W: Write>(session: &GeodesicSession, writer: W) -> Result<()> {
    ExportDocument::from_session(session).write(writer)
}

/// Points and arcs only, for exports that have no session at hand
pub fn write_arcs_json<W: Write>(
    points: &[Point3d],
    arcs: &[GeodesicArc],
    writer: W,
) -> Result<()> {
    ExportDocument::new(points, arcs).write(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts every write, fails on flush
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device full"))
        }
    }

    fn session() -> GeodesicSession {
        let config = SphereConfig::default().with_radius(2.0).with_resolution(5);
        let mut session = GeodesicSession::new(config).unwrap();
        session.add_points([[0.0, 0.0, 1.0], [0.0, 0.0, -1.0], [1.0, 1.0, 0.0]]).unwrap();
        session
    }

    #[test]
    fn test_session_json_shape() {
        let session = session();
        let mut buffer = Vec::new();
        write_session_json(&session, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["config"]["radius"], 2.0);
        assert_eq!(value["config"]["resolution"], 5);
        assert_eq!(value["points"].as_array().unwrap().len(), 3);
        assert_eq!(value["points"][0], serde_json::json!([0.0, 0.0, 2.0]));
        assert_eq!(value["arcs"].as_array().unwrap().len(), 2);
        assert_eq!(value["arcs"][1].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_arcs_json_has_no_config() {
        let session = session();
        let mut buffer = Vec::new();
        let (points, arcs) = (session.points().as_slice(), session.arcs().as_slice());
        write_arcs_json(points, arcs, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(value.get("config").is_none());
        assert_eq!(value["arcs"][0].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_empty_session_json() {
        let mut buffer = Vec::new();
        write_session_json(&GeodesicSession::default(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["points"], serde_json::json!([]));
        assert_eq!(value["arcs"], serde_json::json!([]));
    }

    #[test]
    fn test_flush_error_is_reported() {
        let session = session();
        let result = write_session_json(&session, FailingFlush(Vec::new()));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
