/// Report views and pipeline
pub mod views;

pub use views::{ArtifactKind, ReportBuilder, View};
