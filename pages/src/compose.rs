//! Page composition - content in, visual tree out.
//!
//! [`compose`] validates a [`PageContent`] and lays it out as three regions
//! in fixed order: heading, introduction, feature grid. It is a pure function;
//! rendering the tree to HTML is a separate step (see [`crate::render_page`]).
//!
//! # Example
//!
//! ```rust
//! use page_leptos::compose::compose;
//! use page_leptos::types::{Accent, FeatureCard, PageContent};
//!
//! let content = PageContent {
//!     title: "Welcome".into(),
//!     introduction: "A platform for X.".into(),
//!     sections: vec![FeatureCard::new("A", "desc A", Accent::Primary)],
//! };
//!
//! let page = compose(&content).unwrap();
//! assert_eq!(page.heading.text, "Welcome");
//! assert_eq!(page.grid.slots[0].heading, "A");
//! ```

use serde::Serialize;

use crate::error::{ContentIssue, PageError};
use crate::types::{Accent, CardTheme, PageContent};

/// Viewport width (px) from which the grid switches to the wide layout.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Columns on wide viewports.
pub const DEFAULT_WIDE_COLUMNS: usize = 3;

/// Columns below the breakpoint. Not configurable.
pub const NARROW_COLUMNS: usize = 1;

/// Responsive grid rules.
///
/// Narrow viewports always get [`NARROW_COLUMNS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    /// Columns at or above the breakpoint
    pub wide_columns: usize,
    /// Breakpoint in CSS pixels
    pub breakpoint_px: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            wide_columns: DEFAULT_WIDE_COLUMNS,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl GridLayout {
    /// Layout with a custom wide column count and breakpoint.
    pub fn new(wide_columns: usize, breakpoint_px: u32) -> Self {
        Self {
            wide_columns: wide_columns.max(1),
            breakpoint_px,
        }
    }

    /// Columns below the breakpoint.
    pub fn narrow_columns(&self) -> usize {
        NARROW_COLUMNS
    }

    /// Rows needed to hold `slots` cards in the wide layout.
    pub fn rows_for(&self, slots: usize) -> usize {
        slots.div_ceil(self.wide_columns.max(1))
    }
}

/// Primary heading region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingRegion {
    /// Heading text, exactly as supplied
    pub text: String,
}

/// Lower-emphasis paragraph under the heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntroductionRegion {
    /// Paragraph text, possibly empty
    pub text: String,
}

/// One occupied cell of the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridSlot {
    /// Position in the source `sections`
    pub index: usize,
    /// Row in the wide layout (row-major)
    pub row: usize,
    /// Column in the wide layout
    pub column: usize,
    /// Card sub-heading
    pub heading: String,
    /// Card text
    pub body: String,
    /// Resolved accent
    pub accent: Accent,
    /// Treatment for `accent`
    pub theme: CardTheme,
}

/// The feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridRegion {
    /// Responsive rules the grid was laid out with
    pub layout: GridLayout,
    /// Number of rows in the wide layout
    pub rows: usize,
    /// Cards in slot order
    pub slots: Vec<GridSlot>,
}

impl GridRegion {
    /// True when there are no cards to show.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Composed page: heading, then introduction, then grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// Title block
    pub heading: HeadingRegion,
    /// Introductory paragraph
    pub introduction: IntroductionRegion,
    /// Feature cards
    pub grid: GridRegion,
}

/// Compose `content` with the default [`GridLayout`].
pub fn compose(content: &PageContent) -> Result<RenderedPage, PageError> {
    compose_with(content, &GridLayout::default())
}

/// Compose `content` against a specific grid layout.
///
/// Fails with [`PageError::InvalidContent`] when the title is empty or a
/// card has no heading. Empty introduction and empty sections are fine.
pub fn compose_with(content: &PageContent, layout: &GridLayout) -> Result<RenderedPage, PageError> {
    validate(content)?;

    let layout = GridLayout::new(layout.wide_columns, layout.breakpoint_px);
    let slots = content
        .sections
        .iter()
        .enumerate()
        .map(|(index, card)| GridSlot {
            index,
            row: index / layout.wide_columns,
            column: index % layout.wide_columns,
            heading: card.heading.clone(),
            body: card.body.clone(),
            accent: card.accent,
            theme: card.accent.theme(),
        })
        .collect::<Vec<_>>();

    Ok(RenderedPage {
        heading: HeadingRegion {
            text: content.title.clone(),
        },
        introduction: IntroductionRegion {
            text: content.introduction.clone(),
        },
        grid: GridRegion {
            layout,
            rows: layout.rows_for(slots.len()),
            slots,
        },
    })
}

fn validate(content: &PageContent) -> Result<(), PageError> {
    if content.title.is_empty() {
        return Err(PageError::InvalidContent(ContentIssue::EmptyTitle));
    }
    if let Some(index) = content
        .sections
        .iter()
        .position(|card| card.heading.is_empty())
    {
        return Err(PageError::InvalidContent(
            ContentIssue::EmptyCardHeading { index },
        ));
    }
    Ok(())
}
