//! A record with a validated display name and an optional list of numbers.

use crate::errors::CoreError;

/// The name a fresh record starts with.
pub const DEFAULT_NAME: &str = "Unknown";

/// A display name plus an optional, lazily created list of integers.
///
/// ## Invariants
/// - `name` is never empty or whitespace-only; writes go through [`NamedRecord::set_name`].
/// - `numbers` stays `None` until first requested, then persists for the life of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecord {
    name: String,
    numbers: Option<Vec<i32>>,
}

impl Default for NamedRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            numbers: None,
        }
    }
}

impl NamedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record and immediately set its name.
    ///
    /// ## Errors
    /// - `InvalidArgument` under the same rule as [`NamedRecord::set_name`].
    pub fn with_name(value: impl AsRef<str>) -> Result<Self, CoreError> {
        let mut record = Self::new();
        record.set_name(value)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate, trim and store a new name.
    ///
    /// ## Errors
    /// - `InvalidArgument: Name cannot be empty` if `value` is empty or whitespace-only. The stored name is
    ///   left unchanged.
    pub fn set_name(&mut self, value: impl AsRef<str>) -> Result<(), CoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            tracing::debug!(rejected = value.as_ref(), "name failed validation");
            return Err(CoreError::empty_name());
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    /// Return the list of numbers, creating an empty one first if absent.
    ///
    /// Later calls return the same list; it is allocated at most once.
    pub fn ensure_numbers(&mut self) -> &mut Vec<i32> {
        self.numbers.get_or_insert_with(Vec::new)
    }

    /// The numbers, or `None` if the list was never created.
    pub fn numbers(&self) -> Option<&[i32]> {
        self.numbers.as_deref()
    }

    /// Replace the whole optional list, returning the previous one.
    pub fn replace_numbers(&mut self, numbers: Option<Vec<i32>>) -> Option<Vec<i32>> {
        std::mem::replace(&mut self.numbers, numbers)
    }
}
