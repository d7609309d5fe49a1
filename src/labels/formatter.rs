//! Human-readable titles for grid cells derived from category identifiers

use crate::dataset::taxon::{Taxon, humanize};
use crate::io::configuration::{LABEL_ELLIPSIS, LABEL_LENGTH_THRESHOLD, LABEL_TRUNCATED_LENGTH};

/// Color class of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Condition names a healthy state
    Healthy,
    /// Any other condition, or no condition at all
    Diseased,
}

/// Font weight of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Bold weight, used for healthy categories
    Bold,
    /// Regular weight
    Regular,
}

/// Font size class of a label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelSize {
    /// Default size
    #[default]
    Regular,
    /// Reduced size for long labels
    Small,
}

/// How plant and condition are combined into the display text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Joiner {
    /// `Apple healthy`
    #[default]
    Space,
    /// `Apple - healthy`
    Dash,
    /// Plant and condition on separate lines
    Newline,
    /// Condition only, plant stripped
    ConditionOnly,
}

impl Joiner {
    const fn separator(self) -> &'static str {
        match self {
            Self::Space | Self::ConditionOnly => " ",
            Self::Dash => " - ",
            Self::Newline => "\n",
        }
    }
}

/// Strategy for labels above the length threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFit {
    /// Keep the text, switch to the small size class (grid-wide views)
    Shrink,
    /// Cut the text and append an ellipsis (single-row comparison views)
    Truncate,
}

/// Title drawn above a grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Display text
    pub text: String,
    /// Weight
    pub emphasis: Emphasis,
    /// Color class
    pub color: ColorClass,
    /// Size class
    pub size: LabelSize,
}

impl Label {
    /// Apply a fitting strategy to labels longer than the threshold
    #[must_use]
    pub fn fit(mut self, fit: LabelFit) -> Self {
        if self.text.chars().count() <= LABEL_LENGTH_THRESHOLD {
            return self;
        }
        match fit {
            LabelFit::Shrink => self.size = LabelSize::Small,
            LabelFit::Truncate => {
                let mut cut: String = self.text.chars().take(LABEL_TRUNCATED_LENGTH).collect();
                cut.push_str(LABEL_ELLIPSIS);
                self.text = cut;
            }
        }
        self
    }

    /// Put a heading line above the text, e.g. the plant name of a group
    #[must_use]
    pub fn with_heading(mut self, heading: &str) -> Self {
        self.text = format!("{heading}\n{}", self.text);
        self
    }
}

/// Title for a category identifier: `Apple___healthy` -> `Apple healthy`
pub fn format(identifier: &str) -> Label {
    format_with(identifier, Joiner::Space)
}

/// Title for a category identifier with an explicit joiner
///
/// Identifiers without the plant/condition delimiter are shown whole (word
/// separators still become spaces) and are never classed as healthy.
pub fn format_with(identifier: &str, joiner: Joiner) -> Label {
    let taxon = Taxon::parse(identifier);
    let text = match taxon.condition {
        None => humanize(identifier),
        Some(condition) if joiner == Joiner::ConditionOnly => humanize(condition),
        Some(condition) => {
            format!(
                "{}{}{}",
                humanize(taxon.plant),
                joiner.separator(),
                humanize(condition)
            )
        }
    };

    let (emphasis, color) = if taxon.is_healthy() {
        (Emphasis::Bold, ColorClass::Healthy)
    } else {
        (Emphasis::Regular, ColorClass::Diseased)
    };

    Label {
        text,
        emphasis,
        color,
        size: LabelSize::Regular,
    }
}
