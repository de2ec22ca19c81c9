//! Project detection: root location, marker-file classification, and entry
//! point resolution.

pub mod classifier;
pub mod entry_point;
pub mod locator;
pub mod types;

pub use classifier::classify;
pub use entry_point::resolve_entry_point;
pub use locator::{locate_project_root, MARKER_FILES};
pub use types::{
    DetectionReport, FrontendDetails, FrontendFramework, ProjectClassification, ProjectKind,
};
