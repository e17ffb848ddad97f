use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;

/// Memoised boundary extrapolations, keyed by `(column, index)`.
///
/// Sprague interpolation near an edge asks for the same virtual points
/// (`-2`, `-1`, `n`, `n+1`) over and over. The cache belongs to exactly one
/// sample array; it must be cleared if that array changes. Cloning yields an
/// empty cache so two owners never share entries.
#[derive(Debug, Default)]
pub struct BoundaryCache {
    entries: Mutex<HashMap<(usize, isize), f64>>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(usize, isize), f64>> {
        // Entries are plain floats; a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached value for `(column, index)`, computing and storing it on a miss.
    pub fn get_or_try_insert_with<F>(&self, column: usize, index: isize, compute: F) -> Result<f64>
    where
        F: FnOnce() -> Result<f64>,
    {
        if let Some(value) = self.lock().get(&(column, index)) {
            return Ok(*value);
        }
        let value = compute()?;
        log::trace!("boundary cache fill: column {column}, index {index} = {value}");
        self.lock().insert((column, index), value);
        Ok(value)
    }

    pub fn contains(&self, column: usize, index: isize) -> bool {
        self.lock().contains_key(&(column, index))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.lock();
        if !entries.is_empty() {
            log::trace!("boundary cache cleared ({} entries)", entries.len());
        }
        entries.clear();
    }
}

impl Clone for BoundaryCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}
