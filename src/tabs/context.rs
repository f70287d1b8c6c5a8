use crate::tabs::error::TabsError;
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the active-tab state owned by a tabs container.
///
/// Clones share the same cell, so every selector and the panel collection
/// built from one container observe the same active index. The handle is
/// `!Send`: all reads and writes happen on the UI thread.
#[derive(Debug, Clone)]
pub struct TabsContext {
    inner: Rc<Shared>,
}

#[derive(Debug)]
struct Shared {
    active: Cell<usize>,
    revision: Cell<u64>,
    len: usize,
}

impl TabsContext {
    /// Creates a handle for `len` tabs with the first tab active.
    pub fn new(len: usize) -> Self {
        TabsContext {
            inner: Rc::new(Shared {
                active: Cell::new(0),
                revision: Cell::new(0),
                len,
            }),
        }
    }

    pub fn active_index(&self) -> usize {
        self.inner.active.get()
    }

    /// Number of tabs this handle was created for.
    pub fn len(&self) -> usize {
        self.inner.len
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == index
    }

    /// Bumped once per effective change of the active index.
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Makes `index` the active tab.
    ///
    /// Returns `Ok(true)` when the active index changed and `Ok(false)` when
    /// `index` was already active. An index outside `0..len` is rejected and
    /// the state is left untouched.
    pub fn set_active_index(&self, index: usize) -> Result<bool, TabsError> {
        if index >= self.inner.len {
            tracing::warn!(index, len = self.inner.len, "rejected tab selection");
            return Err(TabsError::IndexOutOfRange {
                index,
                len: self.inner.len,
            });
        }

        let previous = self.inner.active.replace(index);
        if previous == index {
            tracing::trace!(index, "tab already active");
            return Ok(false);
        }

        self.inner.revision.set(self.inner.revision.get() + 1);
        tracing::debug!(from = previous, to = index, "active tab changed");
        Ok(true)
    }
}
