use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{Completion, OwnerExecutor};

/// A concurrency-safe outstanding-count latch gating a deferred completion.
///
/// The latch starts with one outstanding token held by the dispatch phase. Each
/// dispatched batch calls `enter` before dispatch and `leave` from its completion
/// callback; the dispatch phase calls `leave` once every batch has been dispatched.
/// Whichever `leave` drains the count schedules `completion(true)` on the owner
/// executor, so the completion can never fire while later stages are still being
/// dispatched.
///
/// `cancel` fires `completion(false)` immediately and turns every later `leave` into
/// a no-op; signals from batches that were already dispatched are discarded.
pub(crate) struct CompletionLatch {
    outstanding: AtomicUsize,
    executor: OwnerExecutor,
    completion: Mutex<Option<Completion>>,
}

impl CompletionLatch {
    pub(crate) fn new(executor: OwnerExecutor, completion: Completion) -> Arc<Self> {
        Arc::new(Self {
            outstanding: AtomicUsize::new(1),
            executor,
            completion: Mutex::new(Some(completion)),
        })
    }

    pub(crate) fn enter(&self) {
        let prev = self.outstanding.fetch_add(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "latch entered after drain (prev={prev})");
    }

    pub(crate) fn leave(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            rtrace!("latch drained");
            if let Some(completion) = self.take_completion() {
                (self.executor)(Box::new(move || completion(true)));
            }
        }
    }

    pub(crate) fn cancel(&self) {
        if let Some(completion) = self.take_completion() {
            completion(false);
        }
    }

    fn take_completion(&self) -> Option<Completion> {
        // The one-shot contract lives here: the first taker wins, whether that is a
        // draining `leave` or a `cancel`.
        match self.completion.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}
