use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Changeset;

/// A predicate consulted before each stage is applied.
///
/// Returning `true` stops the staged reload: the remaining stages are never applied and
/// the driver falls back to installing the final snapshot with a full reload.
pub type Interrupt<C> = Arc<dyn Fn(&Changeset<C>) -> bool + Send + Sync>;

/// A one-shot callback fired when a reload finishes.
///
/// The argument is `true` when every stage committed, `false` when the driver took the
/// fallback path (detached surface or interrupt).
pub type Completion = Box<dyn FnOnce(bool) + Send>;

/// A handle that schedules a closure on the execution context owning the surface.
///
/// The concurrent driver uses this to deliver the final completion on the same context
/// that dispatched the stages (e.g. a main/UI queue).
pub type OwnerExecutor = Arc<dyn Fn(Box<dyn FnOnce() + Send>) + Send + Sync>;

/// Animation options for the three animatable operation kinds of a stage.
///
/// Moves carry no option: surfaces animate relocations with their own fixed style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageAnimations<A> {
    pub delete: A,
    pub insert: A,
    pub update: A,
}

impl<A> StageAnimations<A> {
    pub fn new(delete: A, insert: A, update: A) -> Self {
        Self {
            delete,
            insert,
            update,
        }
    }

    /// Uses one animation option for all three kinds.
    pub fn uniform(animation: A) -> Self
    where
        A: Clone,
    {
        Self {
            delete: animation.clone(),
            insert: animation.clone(),
            update: animation,
        }
    }

    pub fn with_delete(mut self, delete: A) -> Self {
        self.delete = delete;
        self
    }

    pub fn with_insert(mut self, insert: A) -> Self {
        self.insert = insert;
        self
    }

    pub fn with_update(mut self, update: A) -> Self {
        self.update = update;
        self
    }
}
