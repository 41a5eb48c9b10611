//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `SceneObject`, `PropertyRecord`,
//! `StardisScene` and a recording `MeshExporter` for unit and integration tests.

use shared::*;

use crate::error::MeshExportError;
use crate::mesh::{MeshExportRequest, MeshExporter};

// ── Property records ────────────────────────────────────────────

/// Solid record with default values (AUTO delta, UNKNOWN imposed temperature).
pub fn solid_record() -> PropertyRecord {
    PropertyRecord::Solid(SolidPayload::default())
}

/// Solid record with numeric delta and known imposed temperature.
pub fn solid_record_explicit(conductivity: f64, delta: f64, imposed_temp: f64) -> PropertyRecord {
    PropertyRecord::Solid(SolidPayload {
        conductivity,
        delta,
        delta_auto: false,
        imposed_temp,
        imposed_temp_unknown: false,
        ..SolidPayload::default()
    })
}

pub fn dirichlet_record(temp: f64) -> PropertyRecord {
    PropertyRecord::Dirichlet(DirichletPayload { temp })
}

pub fn robin_solid_record(hc: f64) -> PropertyRecord {
    PropertyRecord::RobinSolid(RobinPayload {
        hc,
        ..RobinPayload::default()
    })
}

pub fn robin_fluid_record(hc: f64) -> PropertyRecord {
    PropertyRecord::RobinFluid(RobinPayload {
        hc,
        ..RobinPayload::default()
    })
}

pub fn unknown_record(tag: &str) -> PropertyRecord {
    PropertyRecord::Unknown { tag: tag.to_string() }
}

// ── Objects and scenes ──────────────────────────────────────────

/// Mesh object shaped as a unit cube, with the given records.
pub fn mesh_object(name: &str, properties: Vec<PropertyRecord>) -> SceneObject {
    SceneObject {
        name: name.to_string(),
        kind: ObjectKind::Mesh,
        properties,
        mesh: TriangleMesh::unit_cube(),
    }
}

pub fn environment(use_env_radiation: bool, temperature: f64, reference_temperature: f64) -> SceneEnvironment {
    SceneEnvironment {
        use_env_radiation,
        temperature,
        reference_temperature,
    }
}

/// Scene without environment radiation.
pub fn scene(objects: Vec<SceneObject>) -> StardisScene {
    StardisScene {
        environment: SceneEnvironment::default(),
        objects,
    }
}

/// Small room: two walls with a solid and a boundary each, air with a fluid
/// boundary, and a lamp that is not a mesh.
pub fn scene_room() -> StardisScene {
    let mut lamp = mesh_object("Lamp", vec![solid_record()]);
    lamp.kind = ObjectKind::Other;
    StardisScene {
        environment: environment(true, 310.0, 290.0),
        objects: vec![
            mesh_object("Outer Wall", vec![solid_record_explicit(1.5, 0.05, 293.0), dirichlet_record(273.15)]),
            mesh_object("Inner Wall", vec![solid_record(), robin_solid_record(8.0)]),
            mesh_object("Air", vec![robin_fluid_record(2.5)]),
            lamp,
        ],
    }
}

// ── Mesh exporter double ────────────────────────────────────────

/// Records every request; fails for the names in `fail_for` without writing.
#[derive(Debug, Default)]
pub struct RecordingExporter {
    pub requests: Vec<(String, MeshExportRequest)>,
    pub fail_for: Vec<String>,
}

impl RecordingExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            requests: Vec::new(),
            fail_for: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Object names in the order they were exported
    pub fn exported_names(&self) -> Vec<&str> {
        self.requests.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl MeshExporter for RecordingExporter {
    fn export_mesh(&mut self, object: &SceneObject, request: &MeshExportRequest) -> Result<(), MeshExportError> {
        self.requests.push((object.name.clone(), request.clone()));
        if self.fail_for.iter().any(|n| n == &object.name) {
            return Err(MeshExportError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated encoder failure",
            )));
        }
        Ok(())
    }
}
