use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::NavigationError;
use crate::model::{Payload, Tree};
use crate::navigator::{Mode, NavigationView, TreeNavigator};

/// Cloneable handle to one navigator shared between several callers.
///
/// Every operation and every [`SharedNavigator::with_view`] call holds the
/// lock for its whole duration, so a path is never observed together with a
/// level resolved from a different path.
#[derive(Debug)]
pub struct SharedNavigator<P = Payload> {
    inner: Arc<Mutex<TreeNavigator<P>>>,
}

impl<P> Clone for SharedNavigator<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedNavigator<P> {
    pub fn create(tree: Arc<Tree<P>>, mode: Mode) -> Self {
        Self::from(TreeNavigator::create(tree, mode))
    }

    /// Run `f` against a snapshot taken under the lock.
    pub fn with_view<R>(
        &self,
        f: impl FnOnce(&NavigationView<'_, P>) -> R,
    ) -> R {
        let navigator = self.lock();
        f(&navigator.view())
    }

    /// Apply one operation as an indivisible unit.
    pub fn apply<R>(&self, f: impl FnOnce(&mut TreeNavigator<P>) -> R) -> R {
        let mut navigator = self.lock();
        f(&mut *navigator)
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode()
    }

    pub fn select(&self, name: Option<&str>) -> Result<(), NavigationError> {
        self.apply(|navigator| navigator.select(name))
    }

    pub fn drill_in(&self) -> Result<(), NavigationError> {
        self.apply(TreeNavigator::drill_in)
    }

    pub fn drill_out(&self) -> Result<(), NavigationError> {
        self.apply(TreeNavigator::drill_out)
    }

    pub fn set_mode(&self, mode: Mode) {
        self.apply(|navigator| navigator.set_mode(mode));
    }

    // Operations commit in a single assignment, so state behind a poisoned
    // lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, TreeNavigator<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> From<TreeNavigator<P>> for SharedNavigator<P> {
    fn from(navigator: TreeNavigator<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(navigator)),
        }
    }
}
