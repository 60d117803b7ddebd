//! Request-side types: query parameter sets and submission payloads.
//!
//! Responses are passed through as raw JSON, so only what the client sends
//! is modelled here.

mod submission;

use anyhow::Result;
use std::fmt;

pub use submission::{
    AnswerSelection, FreeTextSubmission, QuestionnaireSubmission, UserStudyAnswerItem,
    UserStudySubmission,
};

/// Default number of entries skipped when listing plants.
pub const DEFAULT_SKIP: u32 = 0;

/// Default page size when listing plants.
pub const DEFAULT_LIMIT: u32 = 600;

/// Default number of recommendations requested per fit category.
pub const DEFAULT_FIT_COUNT: u32 = 3;

/// Pagination bounds for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Fills in whichever bound is missing with its default.
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(DEFAULT_SKIP),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// How many perfect, good and bad fits to ask the recommender for.
///
/// Unset counts are sent as [`DEFAULT_FIT_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecommendationCounts {
    pub num_perfect_fits: Option<u32>,
    pub num_good_fits: Option<u32>,
    pub num_bad_fits: Option<u32>,
}

impl RecommendationCounts {
    pub fn new(perfect: Option<u32>, good: Option<u32>, bad: Option<u32>) -> Self {
        Self {
            num_perfect_fits: perfect,
            num_good_fits: good,
            num_bad_fits: bad,
        }
    }

    pub fn query(&self) -> [(&'static str, String); 3] {
        let count = |n: Option<u32>| n.unwrap_or(DEFAULT_FIT_COUNT).to_string();
        [
            ("num_perfect_fits", count(self.num_perfect_fits)),
            ("num_good_fits", count(self.num_good_fits)),
            ("num_bad_fits", count(self.num_bad_fits)),
        ]
    }
}

/// A recommendation rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            anyhow::bail!(
                "Invalid rating {}. Expected a value between {} and {}.",
                value,
                Self::MIN,
                Self::MAX
            )
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
