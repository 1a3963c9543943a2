//! Results of table load requests.

use std::fmt;

use crate::Error;
use crate::types::Offset;

/// What happened when the table was asked for more records.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A page was fetched and appended.
    Loaded {
        /// Offset the page was fetched from.
        offset: Offset,
        /// Number of records appended.
        count: usize,
        /// True if this page was the last one.
        exhausted: bool,
    },

    /// Nothing was requested.
    Skipped(SkipReason),

    /// The fetch failed. The table is unchanged apart from the in-flight
    /// flag being released; no retry is scheduled.
    Failed(Error),
}

impl LoadOutcome {
    /// Returns true if records were appended.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// Number of records appended by this load.
    pub fn count(&self) -> usize {
        match self {
            LoadOutcome::Loaded { count, .. } => *count,
            _ => 0,
        }
    }
}

/// Why a load request did not reach the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another fetch is still outstanding.
    InFlight,
    /// A previous page came back short; there is nothing more to fetch.
    Exhausted,
    /// The initial page was already requested.
    AlreadyMounted,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InFlight => write!(f, "fetch already in flight"),
            SkipReason::Exhausted => write!(f, "no more pages"),
            SkipReason::AlreadyMounted => write!(f, "already mounted"),
        }
    }
}

/// Indicator state for the end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// A fetch is outstanding.
    Loading,
    /// More pages can be requested.
    HasMore,
    /// The last page has been loaded.
    Exhausted,
}

impl TableStatus {
    /// Message shown below the rows.
    pub fn message(self) -> Option<&'static str> {
        match self {
            TableStatus::Loading => Some("Loading more cities..."),
            TableStatus::HasMore => None,
            TableStatus::Exhausted => Some("No more cities to show"),
        }
    }
}
