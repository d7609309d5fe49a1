//! Tests for view composition and the sampling pipeline

#[cfg(test)]
mod tests {
    use crate::write_dataset;
    use image::RgbImage;
    use plantgrid::ReportError;
    use plantgrid::dataset::loader::ImageLoader;
    use plantgrid::dataset::sampler::Sample;
    use plantgrid::io::error::Diagnostics;
    use plantgrid::labels::formatter::{LabelFit, LabelSize};
    use plantgrid::layout::grouped::GroupOverflow;
    use plantgrid::render::canvas::Canvas;
    use plantgrid::render::raster::Renderer;
    use plantgrid::report::views::{ArtifactKind, ReportBuilder, View, compose};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn samples(categories: &[&str]) -> Vec<Sample> {
        categories
            .iter()
            .map(|category| Sample {
                image: RgbImage::new(2, 2),
                category: (*category).to_string(),
                source: PathBuf::from("x.png"),
            })
            .collect()
    }

    fn texts(canvas: &Canvas<'_>) -> Vec<String> {
        canvas
            .visible()
            .filter_map(|c| c.content.as_ref().map(|(_, l)| l.text.clone()))
            .collect()
    }

    /// Loader producing blank pictures without touching the disk
    struct BlankLoader;

    impl ImageLoader for BlankLoader {
        fn load(&self, _path: &Path) -> plantgrid::Result<RgbImage> {
            Ok(RgbImage::new(3, 3))
        }
    }

    /// Renderer that records what it was asked to draw
    #[derive(Default)]
    struct RecordingRenderer {
        grids: RefCell<Vec<(usize, usize, Vec<String>)>>,
        placeholders: RefCell<Vec<String>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, canvas: &Canvas<'_>, _output: &Path) -> plantgrid::Result<()> {
            self.grids
                .borrow_mut()
                .push((canvas.rows, canvas.columns, texts(canvas)));
            Ok(())
        }

        fn render_placeholder(&self, title: &str, _output: &Path) -> plantgrid::Result<()> {
            self.placeholders.borrow_mut().push(title.to_string());
            Ok(())
        }
    }

    // Tests per-view label strategies
    // Verified by shrinking labels in the comparison view
    #[test]
    fn test_label_fit_per_view() {
        assert_eq!(View::sample_grid().label_fit(), LabelFit::Truncate);
        assert_eq!(View::comparison().label_fit(), LabelFit::Truncate);
        assert_eq!(View::all_categories().label_fit(), LabelFit::Shrink);
        assert_eq!(View::by_plant().label_fit(), LabelFit::Shrink);
    }

    // Tests the sample grid joins plant and condition with a dash
    // Verified by using the newline joiner for every flat view
    #[test]
    fn test_compose_sample_grid() -> plantgrid::Result<()> {
        let drawn = samples(&["Apple___healthy", "Tomato___Tomato_Yellow_Leaf_Curl_Virus"]);
        let (canvas, stats) = compose(&View::sample_grid(), &drawn)?;

        assert_eq!(
            texts(&canvas),
            ["Apple - healthy", "Tomato - Tomato Yellow Leaf..."]
        );
        assert_eq!((stats.rows, stats.columns, stats.hidden), (1, 4, 2));
        Ok(())
    }

    // Tests the all-categories grid stacks plant and condition
    // Verified by using the dash joiner
    #[test]
    fn test_compose_all_categories() -> plantgrid::Result<()> {
        let drawn = samples(&["Apple___healthy"; 7]);
        let (canvas, stats) = compose(&View::all_categories(), &drawn)?;

        assert!(texts(&canvas).iter().all(|t| t == "Apple\nhealthy"));
        assert_eq!((stats.rows, stats.columns, stats.hidden), (2, 6, 5));
        Ok(())
    }

    // Tests the comparison grid holds at most two rows of three
    // Verified by removing the capacity cap
    #[test]
    fn test_compose_comparison_caps_cells() -> plantgrid::Result<()> {
        let drawn = samples(&["A___healthy"; 8]);
        let (_, stats) = compose(&View::comparison(), &drawn)?;

        assert_eq!((stats.rows, stats.columns), (2, 3));
        assert_eq!((stats.placed, stats.dropped, stats.hidden), (6, 2, 0));
        Ok(())
    }

    // Tests the by-plant view heads each group with the plant name
    // Verified by heading every cell
    #[test]
    fn test_compose_by_plant() -> plantgrid::Result<()> {
        let drawn = samples(&[
            "Apple___Apple_scab",
            "Apple___healthy",
            "Corn_(maize)___Common_rust_",
        ]);
        let (canvas, stats) = compose(&View::by_plant(), &drawn)?;

        assert_eq!(texts(&canvas), ["Apple\nApple scab", "healthy", "Corn\nCommon rust"]);
        assert_eq!((stats.rows, stats.columns, stats.hidden), (2, 2, 1));

        let first = canvas.cells.first().and_then(|c| c.content.as_ref());
        assert_eq!(first.map(|(_, l)| l.size), Some(LabelSize::Small));
        Ok(())
    }

    // Tests truncation statistics in the by-plant view
    // Verified by reporting zero dropped samples
    #[test]
    fn test_compose_by_plant_truncation() -> plantgrid::Result<()> {
        let drawn = samples(&["A___1", "A___2", "A___3", "B___1"]);
        let view = View::ByPlant {
            max_columns: 2,
            overflow: GroupOverflow::Truncate,
        };
        let (_, stats) = compose(&view, &drawn)?;

        assert_eq!((stats.placed, stats.dropped, stats.rows), (3, 1, 2));
        Ok(())
    }

    // Tests comparison requests for missing categories are diagnostics
    // Verified by failing the view on unknown categories
    #[test]
    fn test_collect_skips_unknown_categories() -> plantgrid::Result<()> {
        let dir = TempDir::new()?;
        write_dataset(dir.path(), &[("Apple___healthy", &["a.png", "b.png"])])?;

        let mut builder = ReportBuilder::seeded(42);
        let scan = builder.scan(dir.path())?;
        let view = View::Comparison {
            categories: vec!["Missing___x".to_string(), "Apple___healthy".to_string()],
        };
        let mut diagnostics = Diagnostics::new();
        let drawn = builder.collect(&view, &scan, BlankLoader, &mut diagnostics);

        assert_eq!(drawn.len(), 1);
        assert!(matches!(
            diagnostics.entries().first(),
            Some(ReportError::UnknownCategory { category }) if category == "Missing___x"
        ));
        Ok(())
    }

    // Tests one builder reproduces the same picks for the same seed
    // Verified by reseeding the stream per view
    #[test]
    fn test_builder_is_reproducible() -> plantgrid::Result<()> {
        let dir = TempDir::new()?;
        write_dataset(
            dir.path(),
            &[
                ("A___healthy", &["1.png", "2.png", "3.png", "4.png"]),
                ("B___rot", &["1.png", "2.png", "3.png"]),
            ],
        )?;

        let run = || -> plantgrid::Result<Vec<PathBuf>> {
            let mut builder = ReportBuilder::seeded(42);
            let scan = builder.scan(dir.path())?;
            let mut diagnostics = Diagnostics::new();
            let view = View::SampleGrid {
                classes: 2,
                per_class: 2,
                columns: 4,
            };
            let mut picks = Vec::new();
            for _ in 0..2 {
                let drawn = builder.collect(&view, &scan, BlankLoader, &mut diagnostics);
                picks.extend(drawn.into_iter().map(|s| s.source));
            }
            Ok(picks)
        };

        let first = run()?;
        assert_eq!(first.len(), 8);
        assert_eq!(first, run()?);
        Ok(())
    }

    // Tests build hands the composed grid to the renderer
    // Verified by skipping the render call
    #[test]
    fn test_build_renders_composed_grid() -> plantgrid::Result<()> {
        let dir = TempDir::new()?;
        write_dataset(
            dir.path(),
            &[("Apple___healthy", &["a.png"]), ("Apple___scab", &["corrupt.png"])],
        )?;

        let mut builder = ReportBuilder::seeded(42);
        let scan = builder.scan(dir.path())?;
        let renderer = RecordingRenderer::default();
        let summary = builder.build_with_loader(
            &View::all_categories(),
            &scan,
            plantgrid::dataset::loader::FsImageLoader::new(4)?,
            &renderer,
            Path::new("unused.png"),
        )?;

        assert_eq!(summary.samples, 1);
        assert_eq!(summary.diagnostics.len(), 2);
        assert_eq!(
            renderer.grids.borrow().as_slice(),
            [(1, 6, vec!["Apple\nhealthy".to_string()])]
        );
        Ok(())
    }

    // Tests composing views without samples yields empty grids
    // Verified by planning one row for empty input
    #[test]
    fn test_compose_without_samples() -> plantgrid::Result<()> {
        let (canvas, stats) = compose(&View::by_plant(), &[])?;
        assert!(canvas.cells.is_empty());
        assert_eq!((stats.rows, stats.columns, stats.placed, stats.hidden), (0, 0, 0, 0));

        let (canvas, stats) = compose(&View::all_categories(), &[])?;
        assert_eq!(canvas.visible().count(), 0);
        assert_eq!((stats.rows, stats.columns, stats.hidden), (0, 6, 0));
        Ok(())
    }

    // Tests overview grids fall back to a placeholder when nothing loads
    // Verified by rendering the empty grid instead
    #[test]
    fn test_build_without_samples_writes_placeholder() -> plantgrid::Result<()> {
        let dir = TempDir::new()?;
        write_dataset(dir.path(), &[("Apple___healthy", &["corrupt.png"])])?;

        let mut builder = ReportBuilder::seeded(42);
        let scan = builder.scan(dir.path())?;
        let renderer = RecordingRenderer::default();
        let view = View::all_categories();
        let summary = builder.build_with_loader(
            &view,
            &scan,
            plantgrid::dataset::loader::FsImageLoader::new(4)?,
            &renderer,
            Path::new("unused.png"),
        )?;

        assert_eq!(summary.artifact, ArtifactKind::Placeholder);
        assert_eq!(summary.samples, 0);
        assert!(renderer.grids.borrow().is_empty());
        assert_eq!(renderer.placeholders.borrow().as_slice(), [view.title()]);
        Ok(())
    }

    // Tests comparison and by-plant views write nothing when nothing loads
    // Verified by writing a placeholder for every view
    #[test]
    fn test_build_without_samples_skips_grouped_views() -> plantgrid::Result<()> {
        let dir = TempDir::new()?;
        write_dataset(dir.path(), &[("Apple___healthy", &["corrupt.png"])])?;

        let mut builder = ReportBuilder::seeded(42);
        let scan = builder.scan(dir.path())?;
        let renderer = RecordingRenderer::default();
        for view in [View::by_plant(), View::comparison()] {
            let summary = builder.build_with_loader(
                &view,
                &scan,
                plantgrid::dataset::loader::FsImageLoader::new(4)?,
                &renderer,
                Path::new("unused.png"),
            )?;
            assert_eq!(summary.artifact, ArtifactKind::Skipped);
        }

        assert!(renderer.grids.borrow().is_empty());
        assert!(renderer.placeholders.borrow().is_empty());
        Ok(())
    }

    // Tests which views keep an artifact when every sample fails
    // Verified by flipping the flag for the comparison view
    #[test]
    fn test_placeholder_when_empty_per_view() {
        assert!(View::sample_grid().placeholder_when_empty());
        assert!(View::all_categories().placeholder_when_empty());
        assert!(!View::comparison().placeholder_when_empty());
        assert!(!View::by_plant().placeholder_when_empty());
    }
}
