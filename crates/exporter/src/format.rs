//! Record formatting for the Stardis descriptor.
//!
//! Every line is `KEYWORD <id> <fields...> <mesh_file>`, space-joined. Floats are
//! fixed-point with a per-field precision that Stardis expects; the precision is
//! part of the file format, not cosmetics.

use shared::{DirichletPayload, RobinPayload, SceneEnvironment, SolidPayload};

use crate::classify::{Classified, Payload, RecordKind};

/// Fractional digits for temperatures, material constants, powers and coefficients
const VALUE_PRECISION: usize = 3;
/// Fractional digits for the solid's delta
const DELTA_PRECISION: usize = 7;

/// File name of the descriptor inside the destination directory
pub const DESCRIPTOR_FILE: &str = "model.txt";
/// Extension of per-object mesh files
pub const MESH_EXTENSION: &str = "stl";

const AUTO: &str = "AUTO";
const UNKNOWN: &str = "UNKNOWN";

fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn value(v: f64) -> String {
    fixed(v, VALUE_PRECISION)
}

/// `"{object_name}_{TAG}"` with spaces replaced by `-`.
pub fn record_id(object_name: &str, kind: RecordKind) -> String {
    format!("{}_{}", object_name, kind.tag()).replace(' ', "-")
}

/// Name of the mesh file written for an object, relative to the destination directory.
pub fn mesh_file_name(object_name: &str) -> String {
    format!("{}.{}", object_name, MESH_EXTENSION)
}

/// Render one classified record as a descriptor line (no trailing newline).
pub fn format_record(record_id: &str, record: &Classified<'_>, mesh_file: &str) -> String {
    let mut fields = vec![record.kind.keyword().to_string(), record_id.to_string()];
    match record.payload {
        Payload::Solid(solid) => solid_fields(solid, &mut fields),
        Payload::Dirichlet(dirichlet) => dirichlet_fields(dirichlet, &mut fields),
        Payload::Robin(robin) => robin_fields(robin, &mut fields),
    }
    fields.push(mesh_file.to_string());
    fields.join(" ")
}

fn solid_fields(solid: &SolidPayload, out: &mut Vec<String>) {
    out.push(value(solid.conductivity));
    out.push(value(solid.rho));
    out.push(value(solid.capacity));

    if solid.delta_auto {
        out.push(AUTO.to_string());
    } else {
        out.push(fixed(solid.delta, DELTA_PRECISION));
    }

    // Unknown imposed temperature: the initial temperature takes its slot
    // and the imposed slot becomes the sentinel.
    if solid.imposed_temp_unknown {
        out.push(value(solid.initial_temp));
        out.push(UNKNOWN.to_string());
    } else {
        out.push(value(solid.imposed_temp));
        out.push(value(solid.imposed_temp));
    }

    out.push(value(solid.volumic_power));
    out.push(solid.triangle_sides.as_str().to_string());
}

fn dirichlet_fields(dirichlet: &DirichletPayload, out: &mut Vec<String>) {
    out.push(value(dirichlet.temp));
}

fn robin_fields(robin: &RobinPayload, out: &mut Vec<String>) {
    out.extend(
        [
            robin.reference_temperature,
            robin.emissivity,
            robin.specular_fraction,
            robin.hc,
            robin.outside_temp,
        ]
        .into_iter()
        .map(value),
    );
}

/// `TRAD <temperature> <reference_temperature>`, same precision as other temperatures.
pub fn environment_line(env: &SceneEnvironment) -> String {
    format!("TRAD {} {}", value(env.temperature), value(env.reference_temperature))
}
