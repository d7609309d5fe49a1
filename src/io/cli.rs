//! Command-line interface: root probing, view selection and artifact output

use crate::io::configuration::{
    ALL_CATEGORIES_COLUMNS, BY_PLANT_MAX_COLUMNS, DEFAULT_CANDIDATE_ROOTS, DEFAULT_SEED,
    SAMPLE_GRID_CLASSES, SAMPLE_GRID_COLUMNS, SAMPLE_GRID_PER_CLASS,
};
use crate::io::error::{ReportError, Result};
use crate::io::progress::ProgressManager;
use crate::layout::grouped::GroupOverflow;
use crate::render::raster::{RasterRenderer, RenderConfig, Renderer};
use crate::report::views::{ReportBuilder, View};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plantgrid")]
#[command(
    author,
    version,
    about = "Render stratified sample grids of a directory-per-category image dataset"
)]
/// Command-line arguments for the report generator
pub struct Cli {
    /// Dataset root; repeat to give fallbacks, the first existing one is used
    #[arg(short, long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory artifacts are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Write a placeholder artifact when no dataset root exists
    #[arg(short, long)]
    pub placeholder: bool,

    /// Only log errors and hide progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Artifact to produce
    #[command(subcommand)]
    pub command: Command,
}

/// Report views available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Grid of the first categories in canonical order
    Samples {
        /// Number of leading categories
        #[arg(long, default_value_t = SAMPLE_GRID_CLASSES)]
        classes: usize,
        /// Images drawn per category
        #[arg(long, default_value_t = SAMPLE_GRID_PER_CLASS)]
        per_class: usize,
        /// Grid columns
        #[arg(long, default_value_t = SAMPLE_GRID_COLUMNS)]
        columns: usize,
        /// Output file name
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Grid of every category
    All {
        /// Grid columns
        #[arg(long, default_value_t = ALL_CATEGORIES_COLUMNS)]
        columns: usize,
        /// Output file name
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Side-by-side comparison of named categories
    Compare {
        /// Category identifier; repeat for more, defaults to healthy/diseased pairs
        #[arg(long = "category", value_name = "ID")]
        categories: Vec<String>,
        /// Output file name
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Every category with one row per plant
    ByPlant {
        /// Column bound
        #[arg(long, default_value_t = BY_PLANT_MAX_COLUMNS)]
        max_columns: usize,
        /// Wrap plants with more categories than columns instead of truncating
        #[arg(long)]
        wrap: bool,
        /// Output file name
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Sample grid then comparison, sharing one random stream
    Report,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Candidate roots in probing order
    pub fn candidate_roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            DEFAULT_CANDIDATE_ROOTS.iter().map(PathBuf::from).collect()
        } else {
            self.roots.clone()
        }
    }

    /// Views to build with their output paths, in build order
    pub fn views(&self) -> Vec<(View, PathBuf)> {
        let at = |view: View, output: Option<&PathBuf>| {
            let name = output.map_or_else(|| PathBuf::from(view.default_output()), Clone::clone);
            (view, self.output_dir.join(name))
        };

        match &self.command {
            Command::Samples {
                classes,
                per_class,
                columns,
                output,
            } => vec![at(
                View::SampleGrid {
                    classes: *classes,
                    per_class: *per_class,
                    columns: *columns,
                },
                output.as_ref(),
            )],
            Command::All { columns, output } => {
                vec![at(View::AllCategories { columns: *columns }, output.as_ref())]
            }
            Command::Compare { categories, output } => {
                let view = if categories.is_empty() {
                    View::comparison()
                } else {
                    View::Comparison {
                        categories: categories.clone(),
                    }
                };
                vec![at(view, output.as_ref())]
            }
            Command::ByPlant {
                max_columns,
                wrap,
                output,
            } => {
                let overflow = if *wrap {
                    GroupOverflow::Wrap
                } else {
                    GroupOverflow::Truncate
                };
                vec![at(
                    View::ByPlant {
                        max_columns: *max_columns,
                        overflow,
                    },
                    output.as_ref(),
                )]
            }
            Command::Report => vec![
                at(View::sample_grid(), None),
                at(View::comparison(), None),
            ],
        }
    }
}

/// First candidate that is an existing directory
pub fn resolve_root(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|candidate| candidate.is_dir())
}

/// Orchestrates root probing, scanning and building the requested views
pub struct ReportProcessor {
    cli: Cli,
}

impl ReportProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build every requested view
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RootNotFound`] when no candidate root exists,
    /// or any fatal error raised while building a view
    pub fn process(&self) -> Result<()> {
        let views = self.cli.views();
        let candidates = self.cli.candidate_roots();

        let Some(root) = resolve_root(&candidates) else {
            let probed = candidates
                .last()
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            tracing::error!(
                "No dataset root found among {} candidates",
                candidates.len()
            );
            if self.cli.placeholder {
                for (view, output) in &views {
                    let renderer = RasterRenderer::new(RenderConfig::with_cell_size(
                        view.image_size(),
                    ));
                    renderer.render_placeholder(view.title(), output)?;
                }
            }
            return Err(ReportError::RootNotFound {
                path: probed,
                source: None,
            });
        };

        tracing::info!("Dataset root: {}", root.display());

        let mut builder = ReportBuilder::seeded(self.cli.seed);
        if self.cli.should_show_progress() {
            builder = builder.with_progress(ProgressManager::new());
        }

        let scan = builder.scan(root)?;
        for (view, output) in &views {
            let renderer = RasterRenderer::new(RenderConfig::with_cell_size(view.image_size()));
            let summary = builder.build(view, &scan, &renderer, output)?;
            tracing::info!(
                "{} ({:?}): {} samples in {}x{} grid, {} hidden, {} dropped, {} diagnostics",
                view.title(),
                summary.artifact,
                summary.samples,
                summary.layout.rows,
                summary.layout.columns,
                summary.layout.hidden,
                summary.layout.dropped,
                summary.diagnostics.len()
            );
        }

        Ok(())
    }
}
