//! Persistence hook pipeline: named pre-save/create steps.
//!
//! Instead of subclassing a repository to override its save lifecycle,
//! repositories carry an explicit pipeline of named steps. Save steps run on
//! every save, in registration order; create steps run only on the first
//! persistence of a record, before the save steps. A failing step aborts the
//! whole save and nothing is stored.

use std::sync::Arc;

use crate::error::DomainResult;

/// A named step applied to a record on every save.
pub trait SaveHook<T>: Send + Sync {
    /// Stable step name, used for logging and ordering diagnostics.
    fn name(&self) -> &'static str;

    fn apply(&self, record: &mut T) -> DomainResult<()>;
}

/// A named step applied to a record on its first persistence only.
pub trait CreateHook<T>: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, record: &mut T) -> DomainResult<()>;
}

/// Ordered pipeline of create and save steps for one record type.
pub struct HookPipeline<T> {
    create_hooks: Vec<Arc<dyn CreateHook<T>>>,
    save_hooks: Vec<Arc<dyn SaveHook<T>>>,
}

impl<T> HookPipeline<T> {
    pub fn new() -> Self {
        Self {
            create_hooks: Vec::new(),
            save_hooks: Vec::new(),
        }
    }

    pub fn on_create(mut self, hook: Arc<dyn CreateHook<T>>) -> Self {
        self.create_hooks.push(hook);
        self
    }

    pub fn on_save(mut self, hook: Arc<dyn SaveHook<T>>) -> Self {
        self.save_hooks.push(hook);
        self
    }

    /// Run the pipeline for one save. `is_new` selects whether the create
    /// steps run before the save steps.
    pub fn run(&self, record: &mut T, is_new: bool) -> DomainResult<()> {
        if is_new {
            for hook in &self.create_hooks {
                tracing::debug!(step = hook.name(), "running create hook");
                hook.apply(record)?;
            }
        }
        for hook in &self.save_hooks {
            tracing::debug!(step = hook.name(), "running save hook");
            hook.apply(record)?;
        }
        Ok(())
    }
}

impl<T> Default for HookPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
