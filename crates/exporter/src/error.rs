//! Error types for the export run.
//!
//! `ExportError` covers both per-object conditions (the run records them and
//! keeps going) and destination-level failures that abort the run.
//! `ExportError::is_fatal` tells them apart.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a `MeshExporter`.
#[derive(Debug, Error)]
pub enum MeshExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index buffer length {len} is not a multiple of 3")]
    MalformedIndices { len: usize },

    #[error("vertex index {index} out of range (vertex count: {vertex_count})")]
    InvalidIndex { index: u32, vertex_count: usize },
}

/// Errors raised while exporting a scene.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A second object shares an already admitted name
    #[error("duplicate object name: {name}")]
    NameCollision { name: String },

    /// The object's mesh file would land outside the destination directory
    #[error("object name {name:?} is not a plain file name")]
    UnsafeObjectName { name: String },

    /// A property record carries a tag no record kind matches
    #[error("unknown property type '{tag}' on object {object}")]
    UnknownPropertyType { object: String, tag: String },

    /// The mesh exporter failed for one object
    #[error("mesh export failed for object {object}: {source}")]
    MeshExport {
        object: String,
        #[source]
        source: MeshExportError,
    },

    #[error("cannot create destination directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write descriptor {}: {source}", path.display())]
    WriteDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Destination-level failures abort the run; everything else skips one unit of work.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExportError::CreateDirectory { .. } | ExportError::WriteDescriptor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let collision = ExportError::NameCollision { name: "Wall".into() };
        assert!(!collision.is_fatal());

        let unknown = ExportError::UnknownPropertyType {
            object: "Wall".into(),
            tag: "FOO".into(),
        };
        assert!(!unknown.is_fatal());

        let write = ExportError::WriteDescriptor {
            path: PathBuf::from("out/model.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(write.is_fatal());
    }

    #[test]
    fn test_messages() {
        let e = ExportError::UnknownPropertyType {
            object: "Floor".into(),
            tag: "CONVECTION".into(),
        };
        assert_eq!(e.to_string(), "unknown property type 'CONVECTION' on object Floor");

        let e = MeshExportError::InvalidIndex { index: 9, vertex_count: 3 };
        assert_eq!(e.to_string(), "vertex index 9 out of range (vertex count: 3)");
    }
}
