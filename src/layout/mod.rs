/// Row-major flat grid planning
pub mod grid;
/// Grid planning with one row block per group
pub mod grouped;

pub use grid::{CellContent, GridCell, GridPlan, plan};
pub use grouped::{GroupOverflow, GroupedGridPlan, plan_grouped};
