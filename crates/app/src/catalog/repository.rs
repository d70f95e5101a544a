//! In-memory catalog repository.

use jiff::Timestamp;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::{
    errors::CatalogError,
    records::{CatalogRecord, RecordId},
};

/// Sole owner of the record collection for one resource type.
///
/// Records are held in insertion order. Mutations (create, update,
/// delete) run under the write lock, so two concurrent creates can
/// never share an identifier and a delete racing an update resolves
/// whole-operation last-writer-wins. Reads (list, get, search) run
/// under the read lock and return cloned snapshots, never references
/// into the collection.
///
/// No lock is held across I/O; repository methods perform none.
#[derive(Debug)]
pub struct CatalogRepository<T> {
    inner: RwLock<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: CatalogRecord> Inner<T> {
    fn insert(&mut self, draft: T::Draft) -> Result<T, CatalogError> {
        // Validate before touching any state so a rejected draft
        // leaves the collection and the id counter unchanged.
        T::validate(&draft)?;

        let record = T::from_draft(self.next_id, Timestamp::now(), draft);

        self.next_id = self.next_id.next();
        self.records.push(record.clone());

        Ok(record)
    }

    fn position(&self, id: RecordId) -> Result<usize, CatalogError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(CatalogError::NotFound)
    }
}

impl<T: CatalogRecord> CatalogRepository<T> {
    /// An empty repository whose first record will get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: RecordId::FIRST,
            }),
        }
    }

    /// A repository pre-populated from drafts.
    ///
    /// Seeds go through the same insertion path as [`create`], so the
    /// id counter is monotonic from the first request onwards.
    ///
    /// [`create`]: CatalogRepository::create
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRequiredFields`] when a seed
    /// draft fails the schema's required-field validation.
    pub fn seeded(drafts: impl IntoIterator<Item = T::Draft>) -> Result<Self, CatalogError> {
        let mut inner = Inner {
            records: Vec::new(),
            next_id: RecordId::FIRST,
        };

        for draft in drafts {
            inner.insert(draft)?;
        }

        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    /// Looks up one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record has `id`.
    pub async fn get(&self, id: RecordId) -> Result<T, CatalogError> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Validates the draft, assigns the next id, stamps the creation
    /// time, and appends the new record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRequiredFields`] when a required
    /// field is absent or empty; nothing is mutated in that case.
    pub async fn create(&self, draft: T::Draft) -> Result<T, CatalogError> {
        let mut inner = self.inner.write().await;
        let record = inner.insert(draft)?;

        debug!(resource = T::RESOURCE, id = %record.id(), "created record");

        Ok(record)
    }

    /// Merges the patch into the record with `id`.
    ///
    /// Only fields present and non-empty in the patch overwrite stored
    /// values; everything else is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record has `id`.
    pub async fn update(&self, id: RecordId, patch: T::Patch) -> Result<T, CatalogError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        let record = inner
            .records
            .get_mut(index)
            .ok_or(CatalogError::NotFound)?;

        record.apply(patch);

        let updated = record.clone();

        debug!(resource = T::RESOURCE, id = %id, "updated record");

        Ok(updated)
    }

    /// Removes the record with `id` permanently; survivors keep their
    /// insertion order and no tombstone is retained.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record has `id`,
    /// including when it was already deleted.
    pub async fn delete(&self, id: RecordId) -> Result<(), CatalogError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        inner.records.remove(index);

        debug!(resource = T::RESOURCE, id = %id, "deleted record");

        Ok(())
    }

    /// Case-insensitive substring search over the schema's searchable
    /// fields, preserving insertion order.
    ///
    /// An empty query behaves exactly like [`list`].
    ///
    /// [`list`]: CatalogRepository::list
    pub async fn search(&self, query: &str) -> Vec<T> {
        if query.is_empty() {
            return self.list().await;
        }

        let needle = query.to_lowercase();

        self.inner
            .read()
            .await
            .records
            .iter()
            .filter(|record| record.matches(&needle))
            .cloned()
            .collect()
    }
}

impl<T: CatalogRecord> Default for CatalogRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}
