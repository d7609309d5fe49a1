//! Report views and the scan, sample, plan, label, render pipeline
//!
//! A [`ReportBuilder`] owns the single seeded random stream of a run. Views
//! built one after another through the same builder draw from that stream
//! in order, so a fixed seed and dataset reproduce every artifact.

use crate::dataset::loader::{FsImageLoader, ImageLoader};
use crate::dataset::sampler::{Sample, Sampler};
use crate::dataset::scanner::{Category, CategoryScanner, ScanOutcome};
use crate::dataset::taxon::plant_key;
use crate::io::configuration::{
    ALL_CATEGORIES_COLUMNS, ALL_CATEGORIES_OUTPUT, BY_PLANT_MAX_COLUMNS, BY_PLANT_OUTPUT,
    COMPARISON_COLUMNS, COMPARISON_IMAGE_SIZE, COMPARISON_OUTPUT, COMPARISON_ROWS,
    DEFAULT_COMPARISON_CATEGORIES, OVERVIEW_IMAGE_SIZE, SAMPLE_GRID_CLASSES, SAMPLE_GRID_COLUMNS,
    SAMPLE_GRID_IMAGE_SIZE, SAMPLE_GRID_OUTPUT, SAMPLE_GRID_PER_CLASS,
};
use crate::io::error::{Diagnostics, ReportError, Result};
use crate::io::progress::ProgressManager;
use crate::labels::formatter::{Joiner, LabelFit, LabelSize, format_with};
use crate::layout::grid::plan;
use crate::layout::grouped::{GroupOverflow, plan_grouped_with};
use crate::render::canvas::Canvas;
use crate::render::raster::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// One kind of report artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// First `classes` categories, `per_class` images each, flat grid
    SampleGrid {
        /// Number of leading categories shown
        classes: usize,
        /// Images drawn per category
        per_class: usize,
        /// Grid columns
        columns: usize,
    },
    /// Every category once, flat grid
    AllCategories {
        /// Grid columns
        columns: usize,
    },
    /// Named categories side by side
    Comparison {
        /// Category identifiers in display order
        categories: Vec<String>,
    },
    /// Every category once, one row block per plant
    ByPlant {
        /// Column bound
        max_columns: usize,
        /// Handling of plants with more categories than columns
        overflow: GroupOverflow,
    },
}

impl View {
    /// Sample grid with default parameters
    pub const fn sample_grid() -> Self {
        Self::SampleGrid {
            classes: SAMPLE_GRID_CLASSES,
            per_class: SAMPLE_GRID_PER_CLASS,
            columns: SAMPLE_GRID_COLUMNS,
        }
    }

    /// All-categories grid with default parameters
    pub const fn all_categories() -> Self {
        Self::AllCategories {
            columns: ALL_CATEGORIES_COLUMNS,
        }
    }

    /// Comparison of the default healthy/diseased pairs
    pub fn comparison() -> Self {
        Self::Comparison {
            categories: DEFAULT_COMPARISON_CATEGORIES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// By-plant grid with default parameters
    pub const fn by_plant() -> Self {
        Self::ByPlant {
            max_columns: BY_PLANT_MAX_COLUMNS,
            overflow: GroupOverflow::Truncate,
        }
    }

    /// Artifact title
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SampleGrid { .. } => "Plant disease dataset samples",
            Self::AllCategories { .. } => "All dataset categories",
            Self::Comparison { .. } => "Healthy and diseased plants compared",
            Self::ByPlant { .. } => "Categories grouped by plant",
        }
    }

    /// Default artifact file name
    pub const fn default_output(&self) -> &'static str {
        match self {
            Self::SampleGrid { .. } => SAMPLE_GRID_OUTPUT,
            Self::AllCategories { .. } => ALL_CATEGORIES_OUTPUT,
            Self::Comparison { .. } => COMPARISON_OUTPUT,
            Self::ByPlant { .. } => BY_PLANT_OUTPUT,
        }
    }

    /// Edge length pictures are resized to
    pub const fn image_size(&self) -> u32 {
        match self {
            Self::SampleGrid { .. } => SAMPLE_GRID_IMAGE_SIZE,
            Self::Comparison { .. } => COMPARISON_IMAGE_SIZE,
            Self::AllCategories { .. } | Self::ByPlant { .. } => OVERVIEW_IMAGE_SIZE,
        }
    }

    /// Long-label strategy: grid-wide views shrink, comparison views truncate
    pub const fn label_fit(&self) -> LabelFit {
        match self {
            Self::SampleGrid { .. } | Self::Comparison { .. } => LabelFit::Truncate,
            Self::AllCategories { .. } | Self::ByPlant { .. } => LabelFit::Shrink,
        }
    }

    /// Whether a view with no loadable samples still writes a placeholder
    ///
    /// Overview grids always leave an artifact behind; comparison and
    /// by-plant views write nothing when every sample failed.
    pub const fn placeholder_when_empty(&self) -> bool {
        matches!(self, Self::SampleGrid { .. } | Self::AllCategories { .. })
    }

    const fn per_class(&self) -> usize {
        match self {
            Self::SampleGrid { per_class, .. } => *per_class,
            _ => 1,
        }
    }

    fn select<'s>(&self, scan: &'s ScanOutcome, diagnostics: &mut Diagnostics) -> Vec<&'s Category> {
        match self {
            Self::SampleGrid { classes, .. } => scan.categories.iter().take(*classes).collect(),
            Self::AllCategories { .. } | Self::ByPlant { .. } => scan.categories.iter().collect(),
            Self::Comparison { categories } => categories
                .iter()
                .filter_map(|id| {
                    let found = scan.find(id);
                    if found.is_none() {
                        diagnostics.record(ReportError::UnknownCategory {
                            category: id.clone(),
                        });
                    }
                    found
                })
                .collect(),
        }
    }
}

/// Shape of a composed artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    /// Pictures placed
    pub placed: usize,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub columns: usize,
    /// Blank cells
    pub hidden: usize,
    /// Samples left out of the display
    pub dropped: usize,
}

/// What a build left at its output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The composed grid
    Grid,
    /// Titled placeholder, no sample could be loaded
    Placeholder,
    /// Nothing written, no sample could be loaded
    Skipped,
}

/// Outcome of building one view
#[derive(Debug)]
pub struct ArtifactSummary {
    /// Samples decoded for the view
    pub samples: usize,
    /// Layout of the rendered grid
    pub layout: LayoutStats,
    /// Kind of artifact written
    pub artifact: ArtifactKind,
    /// Non-fatal problems met while selecting and sampling
    pub diagnostics: Diagnostics,
}

/// Place `samples` according to `view` and attach labels
///
/// # Errors
///
/// Returns an error if the view is configured with zero columns
pub fn compose<'a>(view: &View, samples: &'a [Sample]) -> Result<(Canvas<'a>, LayoutStats)> {
    let fit = view.label_fit();
    match view {
        View::SampleGrid { columns, .. } | View::AllCategories { columns } => {
            let joiner = if matches!(view, View::SampleGrid { .. }) {
                Joiner::Dash
            } else {
                Joiner::Newline
            };
            let grid = plan(samples, *columns)?;
            let canvas = Canvas::from_plan(view.title(), &grid, samples, |_, sample| {
                format_with(&sample.category, joiner).fit(fit)
            });
            let stats = LayoutStats {
                placed: samples.len(),
                rows: grid.rows(),
                columns: grid.columns(),
                hidden: grid.hidden_count(),
                dropped: 0,
            };
            Ok((canvas, stats))
        }
        View::Comparison { .. } => {
            let capacity = COMPARISON_ROWS * COMPARISON_COLUMNS;
            let shown = samples.get(..capacity).unwrap_or(samples);
            let grid = plan(shown, COMPARISON_COLUMNS)?;
            let canvas = Canvas::from_plan(view.title(), &grid, shown, |_, sample| {
                format_with(&sample.category, Joiner::Dash).fit(fit)
            });
            let stats = LayoutStats {
                placed: shown.len(),
                rows: grid.rows(),
                columns: grid.columns(),
                hidden: grid.hidden_count(),
                dropped: samples.len() - shown.len(),
            };
            Ok((canvas, stats))
        }
        View::ByPlant {
            max_columns,
            overflow,
        } => {
            let grouped = plan_grouped_with(
                samples,
                |sample: &Sample| plant_key(&sample.category),
                *max_columns,
                *overflow,
            )?;
            let canvas =
                Canvas::from_grouped(view.title(), &grouped, samples, |block, cell, sample| {
                    let label = format_with(&sample.category, Joiner::ConditionOnly);
                    if cell.row == block.first_row && cell.col == 0 {
                        let mut headed = label.with_heading(&block.key);
                        headed.size = LabelSize::Small;
                        headed
                    } else {
                        label.fit(fit)
                    }
                });
            let dropped = grouped.dropped_count();
            for group in grouped.groups().iter().filter(|g| !g.dropped.is_empty()) {
                tracing::debug!(
                    "Plant {} shows {} of {} categories",
                    group.key,
                    group.placed(),
                    group.placed() + group.dropped.len()
                );
            }
            let stats = LayoutStats {
                placed: samples.len() - dropped,
                rows: grouped.rows(),
                columns: grouped.columns(),
                hidden: grouped.cells().filter(|cell| cell.is_hidden()).count(),
                dropped,
            };
            Ok((canvas, stats))
        }
    }
}

/// Runs views against a scanned dataset with one shared random stream
pub struct ReportBuilder<R> {
    scanner: CategoryScanner,
    rng: R,
    progress: Option<ProgressManager>,
}

impl ReportBuilder<StdRng> {
    /// Create a builder whose stream is seeded once with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(CategoryScanner::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReportBuilder<R> {
    /// Create a builder from an explicit scanner and random source
    pub const fn new(scanner: CategoryScanner, rng: R) -> Self {
        Self {
            scanner,
            rng,
            progress: None,
        }
    }

    /// Show a progress bar while sampling
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Enumerate the dataset
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RootNotFound`] if `root` is missing or unreadable
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        self.scanner.scan(root)
    }

    /// Draw and decode the samples a view needs, in display order
    pub fn collect<L: ImageLoader>(
        &mut self,
        view: &View,
        scan: &ScanOutcome,
        loader: L,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Sample> {
        let categories = view.select(scan, diagnostics);
        if let Some(ref mut progress) = self.progress {
            progress.start_view(view.title(), categories.len());
        }

        let sampler = Sampler::new(loader);
        let mut samples = Vec::new();
        for category in categories {
            samples.extend(sampler.sample(category, view.per_class(), &mut self.rng, diagnostics));
            if let Some(ref progress) = self.progress {
                progress.advance(&category.id);
            }
        }

        if let Some(ref mut progress) = self.progress {
            progress.finish();
        }
        samples
    }

    /// Sample, lay out and render one view of an already scanned dataset
    ///
    /// When no sample loads, see [`View::placeholder_when_empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the view parameters are invalid or the renderer
    /// fails to write the artifact
    pub fn build<Rd: Renderer>(
        &mut self,
        view: &View,
        scan: &ScanOutcome,
        renderer: &Rd,
        output: &Path,
    ) -> Result<ArtifactSummary> {
        let loader = FsImageLoader::new(view.image_size())?;
        self.build_with_loader(view, scan, loader, renderer, output)
    }

    /// Same as [`ReportBuilder::build`] with an explicit image loader
    ///
    /// # Errors
    ///
    /// Returns an error if the view parameters are invalid or the renderer
    /// fails to write the artifact
    pub fn build_with_loader<L: ImageLoader, Rd: Renderer>(
        &mut self,
        view: &View,
        scan: &ScanOutcome,
        loader: L,
        renderer: &Rd,
        output: &Path,
    ) -> Result<ArtifactSummary> {
        let mut diagnostics = Diagnostics::new();
        let samples = self.collect(view, scan, loader, &mut diagnostics);
        let (canvas, layout) = compose(view, &samples)?;

        let artifact = match (samples.is_empty(), view.placeholder_when_empty()) {
            (false, _) => {
                renderer.render(&canvas, output)?;
                ArtifactKind::Grid
            }
            (true, true) => {
                renderer.render_placeholder(view.title(), output)?;
                ArtifactKind::Placeholder
            }
            (true, false) => {
                tracing::warn!(
                    "{}: no samples loaded, nothing written to {}",
                    view.title(),
                    output.display()
                );
                ArtifactKind::Skipped
            }
        };

        Ok(ArtifactSummary {
            samples: samples.len(),
            layout,
            artifact,
            diagnostics,
        })
    }
}
