/// Label text, weight and color derivation
pub mod formatter;

pub use formatter::{ColorClass, Emphasis, Label, LabelFit, format};
