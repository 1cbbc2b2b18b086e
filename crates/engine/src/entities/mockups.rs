//! Mockup table - the single owner of every Job Record in the session.
//!
//! All mutations go through `replace_all` or `update`, which apply under the
//! channel's lock and bump the suite version. Observers read snapshots or
//! subscribe for changes.

use merchmagic_domain::{DomainError, Mockup, MockupId, MockupSuite, SuiteStats};
use tokio::sync::watch;

pub struct MockupStore {
    tx: watch::Sender<MockupSuite>,
}

impl Default for MockupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockupStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(MockupSuite::default());
        Self { tx }
    }

    /// Replace the whole job set. Returns the new version.
    pub fn replace_all(&self, suite: MockupSuite) -> u64 {
        let mut version = 0;
        self.tx.send_modify(|current| {
            version = current.version + 1;
            *current = suite;
            current.version = version;
        });
        version
    }

    /// Apply `f` to one record.
    ///
    /// `f` runs against a copy; the stored record is replaced only when it
    /// returns `Ok`, so a rejected transition leaves the table untouched.
    pub fn update<T>(
        &self,
        id: MockupId,
        f: impl FnOnce(&mut Mockup) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut outcome = None;
        self.tx.send_if_modified(|suite| {
            let Some(mockup) = suite.get_mut(id) else {
                return false;
            };
            let mut candidate = mockup.clone();
            match f(&mut candidate) {
                Ok(value) => {
                    *mockup = candidate;
                    suite.version += 1;
                    outcome = Some(Ok(value));
                    true
                }
                Err(e) => {
                    outcome = Some(Err(e));
                    false
                }
            }
        });
        outcome.unwrap_or_else(|| Err(DomainError::not_found("Mockup", id.to_string())))
    }

    pub fn snapshot(&self) -> MockupSuite {
        self.tx.borrow().clone()
    }

    pub fn get(&self, id: MockupId) -> Option<Mockup> {
        self.tx.borrow().get(id).cloned()
    }

    pub fn version(&self) -> u64 {
        self.tx.borrow().version
    }

    pub fn stats(&self) -> SuiteStats {
        self.tx.borrow().stats()
    }

    pub fn subscribe(&self) -> watch::Receiver<MockupSuite> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merchmagic_domain::{ImageData, MockupStatus, ProductTemplate, ProductType};

    fn suite() -> MockupSuite {
        MockupSuite::from_catalog(&[
            ProductTemplate::new(ProductType::Hoodie, "hoodie"),
            ProductTemplate::new(ProductType::Cap, "cap"),
        ])
    }

    #[test]
    fn replace_all_bumps_version() {
        let store = MockupStore::new();
        assert_eq!(store.version(), 0);
        assert_eq!(store.replace_all(suite()), 1);
        assert_eq!(store.replace_all(suite()), 2);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn update_applies_successful_mutation() {
        let store = MockupStore::new();
        store.replace_all(suite());
        let id = store.snapshot().mockups[0].id;

        store.update(id, |m| m.start_generating()).unwrap();
        assert_eq!(store.get(id).unwrap().status(), MockupStatus::Generating);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn failed_update_leaves_record_and_version_untouched() {
        let store = MockupStore::new();
        store.replace_all(suite());
        let id = store.snapshot().mockups[0].id;
        store.update(id, |m| {
            m.set_draft("keep me");
            Ok(())
        })
        .unwrap();
        let before = store.snapshot();

        let result = store.update(id, |m| {
            m.clear_draft();
            m.complete(&ImageData::from_bytes("image/png", &[1]))
        });

        assert!(matches!(result, Err(DomainError::InvalidStateTransition { .. })));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = MockupStore::new();
        store.replace_all(suite());
        let result = store.update(MockupId::new(), |_| Ok(()));
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = MockupStore::new();
        let mut rx = store.subscribe();
        store.replace_all(suite());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().version, 1);
    }
}
