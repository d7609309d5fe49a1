//! Renderer-neutral description of a laid-out grid
//!
//! Both plan kinds are flattened into the same shape: a rows x columns
//! lattice of cells, each either hidden or showing a borrowed image with
//! its label.

use crate::dataset::sampler::Sample;
use crate::labels::formatter::Label;
use crate::layout::grid::{GridCell, GridPlan};
use crate::layout::grouped::{GroupBlock, GroupedGridPlan};
use image::RgbImage;

/// A cell ready to be painted
#[derive(Debug, Clone)]
pub struct CanvasCell<'a> {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
    /// Picture and title, `None` for hidden cells
    pub content: Option<(&'a RgbImage, Label)>,
}

/// Complete drawing instructions for one artifact
#[derive(Debug, Clone)]
pub struct Canvas<'a> {
    /// Artifact title
    pub title: String,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Every cell of the lattice in row-major order
    pub cells: Vec<CanvasCell<'a>>,
}

impl<'a> Canvas<'a> {
    /// Resolve a flat plan against its samples
    pub fn from_plan<F>(title: &str, plan: &GridPlan, samples: &'a [Sample], label_fn: F) -> Self
    where
        F: Fn(usize, &Sample) -> Label,
    {
        Self {
            title: title.to_string(),
            rows: plan.rows(),
            columns: plan.columns(),
            cells: plan
                .cells()
                .iter()
                .map(|cell| resolve(cell, samples, &label_fn))
                .collect(),
        }
    }

    /// Resolve a grouped plan against its samples
    ///
    /// `label_fn` receives the cell's group block so that the first cell of
    /// a group can carry a heading.
    pub fn from_grouped<K, F>(
        title: &str,
        plan: &GroupedGridPlan<K>,
        samples: &'a [Sample],
        label_fn: F,
    ) -> Self
    where
        F: Fn(&GroupBlock<K>, &GridCell, &Sample) -> Label,
    {
        let cells = plan
            .groups()
            .iter()
            .flat_map(|group| {
                group
                    .cells
                    .iter()
                    .map(|cell| resolve(cell, samples, |_, sample| label_fn(group, cell, sample)))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            title: title.to_string(),
            rows: plan.rows(),
            columns: plan.columns(),
            cells,
        }
    }

    /// Cells that show a picture
    pub fn visible(&self) -> impl Iterator<Item = &CanvasCell<'a>> {
        self.cells.iter().filter(|cell| cell.content.is_some())
    }
}

fn resolve<'a, F>(cell: &GridCell, samples: &'a [Sample], label_fn: F) -> CanvasCell<'a>
where
    F: Fn(usize, &Sample) -> Label,
{
    let content = cell.sample_index().and_then(|index| {
        samples
            .get(index)
            .map(|sample| (&sample.image, label_fn(index, sample)))
    });

    CanvasCell {
        row: cell.row,
        col: cell.col,
        content,
    }
}
