//! Scene export: walks the scene, writes one mesh file per admitted object and
//! assembles the Stardis descriptor.
//!
//! Per-object problems (duplicate names, unknown property types, mesh export
//! failures) are logged, recorded in the `ExportReport` and skipped. Only
//! failures on the destination itself abort the run.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use shared::{SceneObject, StardisScene};

use crate::classify::classify;
use crate::document::ExportDocument;
use crate::error::ExportError;
use crate::format::{environment_line, format_record, mesh_file_name, record_id, DESCRIPTOR_FILE};
use crate::mesh::{MeshExportRequest, MeshExporter};
use crate::registry::IdentifierRegistry;

/// Outcome of a completed export run
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Path of the written descriptor
    pub descriptor: PathBuf,
    /// Names of objects whose mesh file was written, in scan order
    pub exported: Vec<String>,
    pub media_count: usize,
    pub boundary_count: usize,
    /// Recoverable problems, in the order they were hit
    pub skipped: Vec<ExportError>,
}

/// Export `scene` into `destination`.
///
/// Creates the directory if needed, writes `<name>.stl` for every mesh
/// object that carries at least one property record, then writes
/// `model.txt`. The descriptor goes through a temporary file in the same
/// directory, so an I/O failure never leaves a truncated one behind.
pub fn export_scene(
    scene: &StardisScene,
    destination: &Path,
    exporter: &mut dyn MeshExporter,
) -> Result<ExportReport, ExportError> {
    std::fs::create_dir_all(destination).map_err(|source| ExportError::CreateDirectory {
        path: destination.to_path_buf(),
        source,
    })?;

    let mut registry = IdentifierRegistry::new();
    let mut document = ExportDocument::new();
    let mut report = ExportReport::default();

    if scene.environment.use_env_radiation {
        document.environment = Some(environment_line(&scene.environment));
    }

    for object in &scene.objects {
        if !object.is_mesh() || object.properties.is_empty() {
            tracing::debug!("Skipping {}: not a mesh with Stardis properties", object.name);
            continue;
        }

        if !is_plain_file_name(&mesh_file_name(&object.name)) {
            skip(&mut report, ExportError::UnsafeObjectName {
                name: object.name.clone(),
            });
            continue;
        }

        if !registry.admit(&object.name) {
            skip(&mut report, ExportError::NameCollision {
                name: object.name.clone(),
            });
            continue;
        }

        if let Err(e) = export_object(object, destination, exporter, &mut document, &mut report) {
            skip(&mut report, e);
        }
    }

    report.media_count = document.media.len();
    report.boundary_count = document.boundaries.len();
    report.descriptor = destination.join(DESCRIPTOR_FILE);
    write_descriptor(&report.descriptor, &document.render())?;

    tracing::info!(
        "Exported {} objects ({} media, {} boundary conditions) to {}",
        report.exported.len(),
        report.media_count,
        report.boundary_count,
        destination.display()
    );
    Ok(report)
}

fn skip(report: &mut ExportReport, error: ExportError) {
    tracing::warn!("Skipped: {error}");
    report.skipped.push(error);
}

/// Export one admitted object: mesh file first, then its records.
///
/// A failed mesh export drops all of the object's records, so the descriptor
/// never points at a missing file. An unknown record type drops only that record.
fn export_object(
    object: &SceneObject,
    destination: &Path,
    exporter: &mut dyn MeshExporter,
    document: &mut ExportDocument,
    report: &mut ExportReport,
) -> Result<(), ExportError> {
    let mesh_file = mesh_file_name(&object.name);
    let request = MeshExportRequest::new(destination.join(&mesh_file));

    exporter
        .export_mesh(object, &request)
        .map_err(|source| ExportError::MeshExport {
            object: object.name.clone(),
            source,
        })?;
    tracing::debug!("Wrote {}", request.path.display());
    report.exported.push(object.name.clone());

    for record in &object.properties {
        match classify(&object.name, record) {
            Ok(classified) => {
                let id = record_id(&object.name, classified.kind);
                let line = format_record(&id, &classified, &mesh_file);
                document.push(classified.kind.section(), line);
            }
            Err(e) => skip(report, e),
        }
    }
    Ok(())
}

/// A mesh file name must stay inside the destination: one plain component,
/// no separators, no `..`, no root.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn write_descriptor(path: &Path, contents: &str) -> Result<(), ExportError> {
    let write_error = |source: std::io::Error| ExportError::WriteDescriptor {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
