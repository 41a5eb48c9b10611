//! Mesh export collaborator.
//!
//! The assembler only knows the `MeshExporter` trait; `StlExporter` is the
//! implementation used by the binary. It writes the object's `TriangleMesh` as
//! ASCII or binary STL with per-facet normals computed from the vertex order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use shared::{SceneObject, TriangleMesh};

use crate::error::MeshExportError;

/// Parameters of one mesh export call
#[derive(Debug, Clone, PartialEq)]
pub struct MeshExportRequest {
    /// Destination file (overwritten if present)
    pub path: PathBuf,
    pub ascii: bool,
    /// Export the object's own geometry only, not modifier-evaluated geometry
    pub use_selection: bool,
    pub global_scale: f32,
}

impl MeshExportRequest {
    /// ASCII STL at unit scale
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ascii: true,
            use_selection: true,
            global_scale: 1.0,
        }
    }
}

/// Writes one object's geometry to a file.
pub trait MeshExporter {
    fn export_mesh(&mut self, object: &SceneObject, request: &MeshExportRequest) -> Result<(), MeshExportError>;
}

/// STL writer for `SceneObject::mesh`
#[derive(Debug, Default, Clone, Copy)]
pub struct StlExporter;

impl MeshExporter for StlExporter {
    fn export_mesh(&mut self, object: &SceneObject, request: &MeshExportRequest) -> Result<(), MeshExportError> {
        check_indices(&object.mesh)?;

        let file = File::create(&request.path)?;
        let mut writer = BufWriter::new(file);
        if request.ascii {
            write_ascii_stl(&object.name, &object.mesh, request.global_scale, &mut writer)?;
        } else {
            write_binary_stl(&object.mesh, request.global_scale, &mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Reject index buffers that cannot be read as in-range triangles.
pub fn check_indices(mesh: &TriangleMesh) -> Result<(), MeshExportError> {
    if mesh.indices.len() % 3 != 0 {
        return Err(MeshExportError::MalformedIndices {
            len: mesh.indices.len(),
        });
    }
    let vertex_count = mesh.vertices.len();
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshExportError::InvalidIndex { index, vertex_count });
    }
    Ok(())
}

fn scaled(v: [f32; 3], scale: f32) -> [f32; 3] {
    [v[0] * scale, v[1] * scale, v[2] * scale]
}

/// Iterate triangles as scaled vertex triples. Indices must already be checked.
fn triangles(mesh: &TriangleMesh, scale: f32) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    mesh.indices.chunks_exact(3).map(move |tri| {
        [
            scaled(mesh.vertices[tri[0] as usize], scale),
            scaled(mesh.vertices[tri[1] as usize], scale),
            scaled(mesh.vertices[tri[2] as usize], scale),
        ]
    })
}

/// Unit facet normal from counter-clockwise winding; zero for degenerate facets.
fn facet_normal(tri: &[[f32; 3]; 3]) -> [f32; 3] {
    let [a, b, c] = tri;
    let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        e1[1] * e2[2] - e1[2] * e2[1],
        e1[2] * e2[0] - e1[0] * e2[2],
        e1[0] * e2[1] - e1[1] * e2[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 1e-12 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 0.0]
    }
}

/// Write `mesh` as ASCII STL.
pub fn write_ascii_stl<W: Write>(name: &str, mesh: &TriangleMesh, scale: f32, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "solid {}", name)?;
    for tri in triangles(mesh, scale) {
        let n = facet_normal(&tri);
        writeln!(writer, "facet normal {:e} {:e} {:e}", n[0], n[1], n[2])?;
        writeln!(writer, "  outer loop")?;
        for v in &tri {
            writeln!(writer, "    vertex {:e} {:e} {:e}", v[0], v[1], v[2])?;
        }
        writeln!(writer, "  endloop")?;
        writeln!(writer, "endfacet")?;
    }
    writeln!(writer, "endsolid {}", name)?;
    Ok(())
}

/// Write `mesh` as binary STL: 80-byte header, triangle count, 50 bytes per facet.
pub fn write_binary_stl<W: Write>(mesh: &TriangleMesh, scale: f32, writer: &mut W) -> std::io::Result<()> {
    let mut header = [0u8; 80];
    let text = b"Binary STL exported for Stardis";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;
    for tri in triangles(mesh, scale) {
        let n = facet_normal(&tri);
        for component in n.iter().chain(tri.iter().flatten()) {
            writer.write_all(&component.to_le_bytes())?;
        }
        // Attribute byte count (unused)
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> TriangleMesh {
        TriangleMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_ascii_structure() {
        let mut buf = Vec::new();
        write_ascii_stl("Tri", &triangle_mesh(), 1.0, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("solid Tri\n"));
        assert!(text.trim_end().ends_with("endsolid Tri"));
        assert_eq!(text.matches("facet normal").count(), 1);
        assert_eq!(text.matches("vertex").count(), 3);
        assert!(text.contains("facet normal 0e0 0e0 1e0"));
    }

    #[test]
    fn test_ascii_scale_applied() {
        let mut buf = Vec::new();
        write_ascii_stl("Tri", &triangle_mesh(), 2.0, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("vertex 2e0 0e0 0e0"));
    }

    #[test]
    fn test_binary_size() {
        let cube = TriangleMesh::unit_cube();
        let mut buf = Vec::new();
        write_binary_stl(&cube, 1.0, &mut buf).unwrap();
        assert_eq!(buf.len(), 80 + 4 + 12 * 50);
        assert_eq!(u32::from_le_bytes([buf[80], buf[81], buf[82], buf[83]]), 12);
    }

    #[test]
    fn test_degenerate_facet_has_zero_normal() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
        assert_eq!(facet_normal(&tri), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_check_indices() {
        assert!(check_indices(&triangle_mesh()).is_ok());
        assert!(check_indices(&TriangleMesh::default()).is_ok());

        let mut bad = triangle_mesh();
        bad.indices.push(0);
        assert!(matches!(
            check_indices(&bad),
            Err(MeshExportError::MalformedIndices { len: 4 })
        ));

        let mut out_of_range = triangle_mesh();
        out_of_range.indices = vec![0, 1, 7];
        assert!(matches!(
            check_indices(&out_of_range),
            Err(MeshExportError::InvalidIndex { index: 7, vertex_count: 3 })
        ));
    }

    #[test]
    fn test_stl_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut object = SceneObject::new_mesh("Cube");
        object.mesh = TriangleMesh::unit_cube();
        let request = MeshExportRequest::new(dir.path().join("Cube.stl"));

        StlExporter.export_mesh(&object, &request).unwrap();

        let text = std::fs::read_to_string(dir.path().join("Cube.stl")).unwrap();
        assert_eq!(text.matches("endfacet").count(), 12);
    }

    #[test]
    fn test_stl_exporter_rejects_bad_mesh_before_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut object = SceneObject::new_mesh("Broken");
        object.mesh.indices = vec![0, 1, 2];
        let path = dir.path().join("Broken.stl");

        let result = StlExporter.export_mesh(&object, &MeshExportRequest::new(path.clone()));
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
