// Library crate: the export engine. The binary in main.rs is a thin invoking
// surface around `export::export_scene`.

pub mod classify;
pub mod document;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod format;
pub mod mesh;
pub mod registry;
pub mod settings;

pub use error::{ExportError, MeshExportError};
pub use export::{export_scene, ExportReport};
pub use mesh::{MeshExportRequest, MeshExporter, StlExporter};
pub use settings::ExportSettings;
