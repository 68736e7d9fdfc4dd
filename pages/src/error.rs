//! Composition errors.

use thiserror::Error;

/// Why a [`PageContent`](crate::types::PageContent) was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContentIssue {
    /// Title is the empty string
    #[error("title is empty")]
    EmptyTitle,
    /// A placeholder stands where a card should be
    #[error("sections[{index}] is not a feature card")]
    MissingCard {
        /// Position in `sections`
        index: usize,
    },
    /// A card has no heading
    #[error("sections[{index}] has an empty heading")]
    EmptyCardHeading {
        /// Position in `sections`
        index: usize,
    },
}

/// Error returned by composition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Content violates its structural invariants
    #[error("invalid page content: {0}")]
    InvalidContent(ContentIssue),
}

impl PageError {
    /// The underlying content problem.
    pub fn issue(&self) -> ContentIssue {
        match self {
            PageError::InvalidContent(issue) => *issue,
        }
    }
}
