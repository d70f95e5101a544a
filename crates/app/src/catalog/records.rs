//! Record identity and the schema seam the repository is generic over.

use std::{fmt, num::ParseIntError, str::FromStr};

use jiff::Timestamp;

use crate::catalog::errors::CatalogError;

/// Identifier assigned by a [`CatalogRepository`] when a record is
/// created.
///
/// Unique within one repository and monotonically increasing across
/// the process lifetime; identifiers of deleted records are never
/// reused.
///
/// [`CatalogRepository`]: crate::catalog::CatalogRepository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// The first identifier a fresh repository hands out.
    pub(crate) const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse().map(Self)
    }
}

/// Schema description of one catalog resource type.
///
/// The repository owns the lifecycle; implementations only describe
/// how a record is validated, built, merged, and searched.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Payload accepted by create.
    type Draft: Send;

    /// Payload accepted by update. Fields absent or empty in the patch
    /// leave the stored value untouched.
    type Patch: Send;

    /// Resource name used in messages and logs, e.g. `"Product"`.
    const RESOURCE: &'static str;

    /// Checks the draft for this schema's required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRequiredFields`] when a required
    /// field is absent or empty.
    fn validate(draft: &Self::Draft) -> Result<(), CatalogError>;

    /// Builds a record from a validated draft.
    fn from_draft(id: RecordId, created_at: Timestamp, draft: Self::Draft) -> Self;

    /// The repository-assigned identifier.
    fn id(&self) -> RecordId;

    /// Merges the patch into the record in place.
    fn apply(&mut self, patch: Self::Patch);

    /// Whether any searchable field contains `needle`, which callers
    /// pass already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

/// Overwrites `target` only when `value` is present and non-empty.
///
/// This is the merge rule shared by every string field: an absent or
/// empty patch value means "keep", never "clear".
pub fn merge_field(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *target = value;
    }
}
