//! Page and offset types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CityRecord;

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Start index of a page in the remote result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Offset(u32);

impl Offset {
    /// Offset of the first page.
    pub const ZERO: Offset = Offset(0);

    /// Offset of the page with the given zero-based index.
    pub fn for_page(page: u32) -> Self {
        Self(page.saturating_mul(PAGE_SIZE))
    }

    /// Raw start index.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fetched batch of city records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Records in remote order. Never more than [`PAGE_SIZE`].
    pub records: Vec<CityRecord>,
}

impl Page {
    /// Wrap fetched records, dropping anything past [`PAGE_SIZE`].
    pub fn new(mut records: Vec<CityRecord>) -> Self {
        records.truncate(PAGE_SIZE as usize);
        Self { records }
    }

    /// Number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A short page means the remote result set has no further pages.
    pub fn exhausted(&self) -> bool {
        self.records.len() < PAGE_SIZE as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(n: usize) -> Vec<CityRecord> {
        (0..n)
            .map(|i| CityRecord::new(Some(format!("City {i}")), None, None, None))
            .collect()
    }

    #[test]
    fn offsets_step_by_page_size() {
        assert_eq!(Offset::for_page(0), Offset::ZERO);
        assert_eq!(Offset::for_page(3).get(), 60);
        assert_eq!(Offset::for_page(1).get(), 20);
    }

    #[test]
    fn full_page_is_not_exhausted() {
        let page = Page::new(cities(20));
        assert_eq!(page.len(), 20);
        assert!(!page.exhausted());
    }

    #[test]
    fn short_page_is_exhausted() {
        assert!(Page::new(cities(5)).exhausted());
        assert!(Page::new(Vec::new()).exhausted());
    }

    #[test]
    fn oversized_page_is_truncated() {
        let page = Page::new(cities(25));
        assert_eq!(page.len(), 20);
        assert_eq!(page.records[19].name, "City 19");
    }
}
