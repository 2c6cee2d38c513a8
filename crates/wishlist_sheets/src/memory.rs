use std::sync::{Mutex, MutexGuard, PoisonError};

use wishlist_logging::wishlist_debug;

use crate::{FailureKind, SheetClient, SheetError};

/// Worksheet kept in process memory. Used for offline runs and tests.
#[derive(Debug, Default)]
pub struct InMemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
    failure: Mutex<Option<FailureKind>>,
}

impl InMemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            failure: Mutex::new(None),
        }
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<Vec<String>> {
        lock(&self.rows).clone()
    }

    /// Makes every following call fail with `kind` until reset with `None`.
    pub fn set_failure(&self, kind: Option<FailureKind>) {
        *lock(&self.failure) = kind;
    }

    fn check_failure(&self) -> Result<(), SheetError> {
        match lock(&self.failure).clone() {
            Some(kind) => Err(SheetError::new(kind, "simulated failure")),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl SheetClient for InMemorySheet {
    async fn append_row(&self, cells: &[String]) -> Result<(), SheetError> {
        self.check_failure()?;
        let mut rows = lock(&self.rows);
        rows.push(cells.to_vec());
        wishlist_debug!("in-memory sheet now has {} rows", rows.len());
        Ok(())
    }

    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        self.check_failure()?;
        Ok(self.rows())
    }
}
