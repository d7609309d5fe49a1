//! Report constants and runtime configuration defaults

// Dataset layout
/// File extensions accepted as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Separator between the plant and condition parts of a category identifier
pub const TAXON_DELIMITER: &str = "___";

/// Word separator inside identifier segments
pub const WORD_SEPARATOR: char = '_';

/// Token marking a condition as healthy (compared case-insensitively)
pub const HEALTHY_TOKEN: &str = "healthy";

/// Cosmetic qualifiers removed from plant names when grouping by plant
pub const PLANT_SUFFIXES: [&str; 3] = ["(including_sour)", "(maize)", ",_bell"];

// Candidate dataset roots probed in order when none is given
/// Default dataset root search list
pub const DEFAULT_CANDIDATE_ROOTS: [&str; 3] = [
    "../plantvillage dataset/color",
    "../../plantvillage dataset/color",
    "plantvillage dataset/color",
];

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Categories shown in the sample grid
pub const SAMPLE_GRID_CLASSES: usize = 12;
/// Images drawn per category in the sample grid
pub const SAMPLE_GRID_PER_CLASS: usize = 1;
/// Columns of the sample grid
pub const SAMPLE_GRID_COLUMNS: usize = 4;
/// Edge length of sample grid images in pixels
pub const SAMPLE_GRID_IMAGE_SIZE: u32 = 224;

/// Columns of the all-categories grid
pub const ALL_CATEGORIES_COLUMNS: usize = 6;
/// Edge length of all-categories and by-plant images in pixels
pub const OVERVIEW_IMAGE_SIZE: u32 = 200;

/// Column bound of the by-plant grid
pub const BY_PLANT_MAX_COLUMNS: usize = 6;

/// Columns of the comparison grid
pub const COMPARISON_COLUMNS: usize = 3;
/// Rows of the comparison grid; samples beyond rows x columns are dropped
pub const COMPARISON_ROWS: usize = 2;
/// Edge length of comparison images in pixels
pub const COMPARISON_IMAGE_SIZE: u32 = 300;
/// Categories compared when none are requested
pub const DEFAULT_COMPARISON_CATEGORIES: [&str; 6] = [
    "Apple___healthy",
    "Apple___Apple_scab",
    "Tomato___healthy",
    "Tomato___Bacterial_spot",
    "Corn_(maize)___healthy",
    "Corn_(maize)___Common_rust_",
];

// Label fitting
/// Display text longer than this is shrunk or truncated
pub const LABEL_LENGTH_THRESHOLD: usize = 30;
/// Characters kept before the ellipsis when truncating
pub const LABEL_TRUNCATED_LENGTH: usize = 27;
/// Suffix appended to truncated labels
pub const LABEL_ELLIPSIS: &str = "...";

// Output settings
/// Default sample grid artifact name
pub const SAMPLE_GRID_OUTPUT: &str = "sample_images_grid.png";
/// Default all-categories artifact name
pub const ALL_CATEGORIES_OUTPUT: &str = "all_categories_grid.png";
/// Default comparison artifact name
pub const COMPARISON_OUTPUT: &str = "category_comparison.png";
/// Default by-plant artifact name
pub const BY_PLANT_OUTPUT: &str = "categories_by_plant.png";

// Raster layout
/// Gap between cells and around the canvas in pixels
pub const CELL_PADDING: u32 = 8;
/// Height of the caption band under each image in pixels
pub const CAPTION_HEIGHT: u32 = 18;
/// Height of the title band at the top of the canvas in pixels
pub const TITLE_HEIGHT: u32 = 32;
/// Stroke of a regular caption underline in pixels
pub const REGULAR_STROKE: u32 = 3;
/// Canvas size of the placeholder artifact (width, height)
pub const PLACEHOLDER_SIZE: (u32, u32) = (1200, 800);
