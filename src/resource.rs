//! Build-once, read-many holders for process-wide language resources.

use std::sync::{Mutex, OnceLock};

use crate::types::WordfreqResult;

/// A lazily built, immutable resource.
///
/// Concurrent first callers serialize on the build lock, so the builder runs at
/// most once per successful load. A failed build is not cached: the next caller
/// retries.
pub struct LazyResource<T> {
    name: &'static str,
    cell: OnceLock<T>,
    build_lock: Mutex<()>,
}

impl<T> LazyResource<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    /// Return the loaded value, building it with `build` on first use.
    pub fn get_or_try_load<F>(&self, build: F) -> WordfreqResult<&T>
    where
        F: FnOnce() -> WordfreqResult<T>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        // A poisoned lock only means another builder panicked; the cell is still consistent.
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let value = build()?;
        log::info!("Loaded language resource: {}", self.name);
        Ok(self.cell.get_or_init(|| value))
    }
}
