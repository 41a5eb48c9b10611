//! Property classification: maps a `PropertyRecord` onto the descriptor
//! record kind it produces, borrowing the typed payload.

use shared::{tags, DirichletPayload, PropertyRecord, RobinPayload, SolidPayload};

use crate::error::ExportError;

/// Descriptor section a record lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Media,
    Boundary,
}

/// Kind of a classified property record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Solid,
    Dirichlet,
    RobinSolid,
    RobinFluid,
}

impl RecordKind {
    /// Type tag, as used in the scene JSON and in record ids
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Solid => tags::SOLID,
            RecordKind::Dirichlet => tags::DIRICHLET,
            RecordKind::RobinSolid => tags::ROBIN_SOLID,
            RecordKind::RobinFluid => tags::ROBIN_FLUID,
        }
    }

    /// Keyword that opens the descriptor line
    pub fn keyword(&self) -> &'static str {
        match self {
            RecordKind::Solid => "SOLID",
            RecordKind::Dirichlet => "T_BOUNDARY_FOR_SOLID",
            RecordKind::RobinSolid => "H_BOUNDARY_FOR_SOLID",
            RecordKind::RobinFluid => "H_BOUNDARY_FOR_FLUID",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            RecordKind::Solid => Section::Media,
            _ => Section::Boundary,
        }
    }
}

/// Payload of a classified record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Solid(&'a SolidPayload),
    Dirichlet(&'a DirichletPayload),
    Robin(&'a RobinPayload),
}

/// A property record resolved to its kind and payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classified<'a> {
    pub kind: RecordKind,
    pub payload: Payload<'a>,
}

/// Classify one record. `object` is only used for the error report.
pub fn classify<'a>(object: &str, record: &'a PropertyRecord) -> Result<Classified<'a>, ExportError> {
    let (kind, payload) = match record {
        PropertyRecord::Solid(p) => (RecordKind::Solid, Payload::Solid(p)),
        PropertyRecord::Dirichlet(p) => (RecordKind::Dirichlet, Payload::Dirichlet(p)),
        PropertyRecord::RobinSolid(p) => (RecordKind::RobinSolid, Payload::Robin(p)),
        PropertyRecord::RobinFluid(p) => (RecordKind::RobinFluid, Payload::Robin(p)),
        PropertyRecord::Unknown { tag } => {
            return Err(ExportError::UnknownPropertyType {
                object: object.to_string(),
                tag: tag.clone(),
            })
        }
    };
    Ok(Classified { kind, payload })
}
