//! Ambient service directory scope
//!
//! Nested activations find the directory of the enclosing activation here
//! without it being threaded through every call. Entering a scope pushes a
//! directory onto a thread-local stack; dropping the guard pops it, on
//! every exit path including early returns and unwinding.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

use activa_domain::ports::ServiceDirectory;

thread_local! {
    static SCOPES: RefCell<Vec<Arc<dyn ServiceDirectory>>> = const { RefCell::new(Vec::new()) };
}

/// Guard for one entry on the thread's service directory stack
#[must_use = "the scope ends when the guard is dropped"]
pub struct ServiceScope {
    // Guards must be dropped on the thread that created them
    _thread_bound: PhantomData<*const ()>,
}

impl ServiceScope {
    /// Make `directory` the current directory until the guard drops
    pub fn enter(directory: Arc<dyn ServiceDirectory>) -> Self {
        SCOPES.with(|scopes| scopes.borrow_mut().push(directory));
        Self {
            _thread_bound: PhantomData,
        }
    }

    /// Innermost directory entered on this thread
    pub fn current() -> Option<Arc<dyn ServiceDirectory>> {
        SCOPES.with(|scopes| scopes.borrow().last().cloned())
    }

    /// Number of scopes entered on this thread
    pub fn depth() -> usize {
        SCOPES.with(|scopes| scopes.borrow().len())
    }
}

impl Drop for ServiceScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

impl std::fmt::Debug for ServiceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceScope")
            .field("depth", &Self::depth())
            .finish()
    }
}
