//! Incremental module indexes
//!
//! A [`LazyIndex`] publishes immutable snapshots of an index through
//! `ArcSwap`. Readers check whether the snapshot has seen every registered
//! module; if not, the first reader to take the sync lock indexes the new
//! modules into a copy and publishes it. Steady-state reads never lock.

use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError};

use activa_domain::entities::ModuleDescriptor;
use arc_swap::ArcSwap;

use super::ModuleSet;

/// Index that can absorb modules one at a time
pub trait ModuleIndex: Clone + Default + Send + Sync + 'static {
    fn index_module(&mut self, module: &ModuleDescriptor);
}

/// Published state of a [`LazyIndex`]
#[derive(Debug, Default)]
pub struct IndexSnapshot<I> {
    scanned: usize,
    index: I,
}

impl<I> IndexSnapshot<I> {
    /// Number of modules folded into this snapshot
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

impl<I> Deref for IndexSnapshot<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.index
    }
}

/// Copy-on-write index over a [`ModuleSet`]
pub struct LazyIndex<I> {
    modules: Arc<ModuleSet>,
    state: ArcSwap<IndexSnapshot<I>>,
    sync: Mutex<()>,
}

impl<I: ModuleIndex> LazyIndex<I> {
    pub fn new(modules: Arc<ModuleSet>) -> Self {
        Self {
            modules,
            state: ArcSwap::from_pointee(IndexSnapshot::default()),
            sync: Mutex::new(()),
        }
    }

    pub fn modules(&self) -> &Arc<ModuleSet> {
        &self.modules
    }

    /// Snapshot covering every module registered so far
    pub fn load(&self) -> Arc<IndexSnapshot<I>> {
        let current = self.state.load_full();
        if current.scanned == self.modules.len() {
            return current;
        }
        self.sync()
    }

    /// Snapshot as last published, without scanning new modules
    pub fn peek(&self) -> Arc<IndexSnapshot<I>> {
        self.state.load_full()
    }

    /// Index any pending modules and publish the result
    pub fn sync(&self) -> Arc<IndexSnapshot<I>> {
        let _guard = self.sync.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.state.load_full();
        let modules = self.modules.snapshot();
        if current.scanned >= modules.len() {
            return current;
        }

        let mut index = current.index.clone();
        for module in &modules[current.scanned..] {
            index.index_module(module);
        }
        let next = Arc::new(IndexSnapshot {
            scanned: modules.len(),
            index,
        });
        self.state.store(Arc::clone(&next));
        next
    }
}

impl<I> std::fmt::Debug for LazyIndex<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyIndex")
            .field("scanned", &self.state.load().scanned)
            .field("modules", &self.modules.len())
            .finish()
    }
}
