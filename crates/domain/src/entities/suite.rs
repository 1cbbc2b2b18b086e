//! MockupSuite - The full set of records produced by one batch

use serde::{Deserialize, Serialize};

use super::mockup::{Mockup, MockupStatus};
use crate::ids::{BatchId, MockupId};
use crate::value_objects::ProductTemplate;

/// The current job set, replaced wholesale when a new batch starts.
///
/// `version` increases on every mutation so observers can tell snapshots apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockupSuite {
    pub batch_id: Option<BatchId>,
    pub version: u64,
    pub mockups: Vec<Mockup>,
}

impl MockupSuite {
    /// Build one queued record per template, in catalog order.
    pub fn from_catalog(templates: &[ProductTemplate]) -> Self {
        Self {
            batch_id: Some(BatchId::new()),
            version: 0,
            mockups: templates.iter().map(Mockup::queued).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mockups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mockups.len()
    }

    pub fn get(&self, id: MockupId) -> Option<&Mockup> {
        self.mockups.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MockupId) -> Option<&mut Mockup> {
        self.mockups.iter_mut().find(|m| m.id == id)
    }

    pub fn ids(&self) -> Vec<MockupId> {
        self.mockups.iter().map(|m| m.id).collect()
    }

    /// Ready records in catalog order.
    pub fn ready_mockups(&self) -> impl Iterator<Item = &Mockup> {
        self.mockups
            .iter()
            .filter(|m| m.status() == MockupStatus::Ready)
    }

    pub fn stats(&self) -> SuiteStats {
        SuiteStats::from_mockups(&self.mockups)
    }
}

/// Counts and progress for the current job set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuiteStats {
    pub total: usize,
    pub queued: usize,
    pub generating: usize,
    pub ready: usize,
    pub errors: usize,
    /// Percent of records that are ready or errored, rounded.
    pub progress: u8,
}

impl SuiteStats {
    pub fn from_mockups(mockups: &[Mockup]) -> Self {
        let mut stats = Self {
            total: mockups.len(),
            ..Self::default()
        };
        for mockup in mockups {
            match mockup.status() {
                MockupStatus::Queued => stats.queued += 1,
                MockupStatus::Generating => stats.generating += 1,
                MockupStatus::Ready => stats.ready += 1,
                MockupStatus::Error => stats.errors += 1,
            }
        }
        stats.progress = progress_percent(stats.ready + stats.errors, stats.total);
        stats
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.ready + self.errors == self.total
    }
}

// Errors count as done. Halves round up.
fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * done + total) / (2 * total);
    percent.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{product_catalog, ImageData, ProductType};

    fn suite_of(n: usize) -> MockupSuite {
        let templates: Vec<_> = (0..n)
            .map(|_| ProductTemplate::new(ProductType::Cap, "cap"))
            .collect();
        MockupSuite::from_catalog(&templates)
    }

    fn finish(mockup: &mut Mockup, ok: bool) {
        mockup.start_generating().unwrap();
        if ok {
            mockup
                .complete(&ImageData::from_bytes("image/png", &[1, 2, 3]))
                .unwrap();
        } else {
            mockup.fail().unwrap();
        }
    }

    #[test]
    fn from_catalog_preserves_order() {
        let catalog = product_catalog();
        let suite = MockupSuite::from_catalog(&catalog);
        let products: Vec<_> = suite.mockups.iter().map(|m| m.product).collect();
        let expected: Vec<_> = catalog.iter().map(|t| t.product).collect();
        assert_eq!(products, expected);
        assert!(suite
            .mockups
            .iter()
            .all(|m| m.status() == MockupStatus::Queued && !m.has_image()));
    }

    #[test]
    fn empty_suite_has_zero_progress() {
        let stats = MockupSuite::default().stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress, 0);
        assert!(!stats.is_complete());
    }

    #[test]
    fn errors_count_toward_progress() {
        let mut suite = suite_of(3);
        finish(&mut suite.mockups[0], true);
        finish(&mut suite.mockups[1], false);

        let stats = suite.stats();
        assert_eq!(stats.ready, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.queued, 1);
        assert_eq!(stats.progress, 67);

        finish(&mut suite.mockups[2], false);
        let stats = suite.stats();
        assert_eq!(stats.progress, 100);
        assert!(stats.is_complete());
    }

    #[test]
    fn progress_rounds_half_up() {
        assert_eq!(progress_percent(1, 8), 13); // 12.5
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(7, 7), 100);
    }

    #[test]
    fn ready_mockups_skips_failures() {
        let mut suite = suite_of(3);
        finish(&mut suite.mockups[0], false);
        finish(&mut suite.mockups[2], true);
        let ready: Vec<_> = suite.ready_mockups().map(|m| m.id).collect();
        assert_eq!(ready, vec![suite.mockups[2].id]);
    }
}
