use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::latch::CompletionLatch;
use crate::{AsyncSurface, Changeset, Completion, Interrupt, StagedChangeset};

/// Applies a staged changeset to a surface whose batch mutation is an asynchronous
/// animated operation.
///
/// Stages are dispatched back-to-back without waiting for their animations, which may
/// overlap in time. When `completion` is provided, an outstanding-count latch defers
/// `completion(true)` until every dispatched batch has signaled done, delivered on the
/// surface's owner executor; when it is `None`, no latch is allocated and no completion
/// bookkeeping occurs at all.
///
/// Detached-surface and interrupt handling match [`crate::sequential::reload`]:
/// the final snapshot is installed synchronously with a full reload and
/// `completion(false)` fires immediately. On interrupt the driver returns without
/// waiting for already-dispatched batches; their signals are discarded.
///
/// The caller must invoke this on the execution context owning the surface, and must
/// not start another reload on the same surface while one is in flight.
pub fn reload<S, C>(
    surface: &mut S,
    staged: StagedChangeset<C>,
    interrupt: Option<Interrupt<C>>,
    completion: Option<Completion>,
    mut set_data: impl FnMut(C),
) where
    S: AsyncSurface,
{
    let mut stages = staged.into_stages();
    rdebug!(stages = stages.len(), "concurrent reload");

    let Some(last) = stages.pop() else {
        if let Some(completion) = completion {
            completion(true);
        }
        return;
    };

    if !surface.is_attached() {
        rdebug!("surface detached, installing final snapshot");
        set_data(last.data);
        surface.reload_data();
        if let Some(completion) = completion {
            completion(false);
        }
        return;
    }

    let latch =
        completion.map(|completion| CompletionLatch::new(surface.owner_executor(), completion));

    for stage in stages {
        if interrupt.as_ref().is_some_and(|f| f(&stage)) {
            interrupt_now(surface, last.data, latch, &mut set_data);
            return;
        }
        dispatch_stage(surface, stage, latch.as_ref(), &mut set_data);
    }

    if interrupt.as_ref().is_some_and(|f| f(&last)) {
        interrupt_now(surface, last.data, latch, &mut set_data);
        return;
    }
    dispatch_stage(surface, last, latch.as_ref(), &mut set_data);

    // Releases the dispatch-phase token. If every batch already signaled, this is the
    // drain that schedules the completion.
    if let Some(latch) = latch {
        latch.leave();
    }
}

fn interrupt_now<S, C>(
    surface: &mut S,
    data: C,
    latch: Option<Arc<CompletionLatch>>,
    set_data: &mut impl FnMut(C),
) where
    S: AsyncSurface,
{
    rdebug!("reload interrupted, installing final snapshot");
    set_data(data);
    surface.reload_data();
    // Already-dispatched batches may still finish in the background; cancelling the
    // latch discards their signals relative to the caller-visible contract.
    if let Some(latch) = latch {
        latch.cancel();
    }
}

fn dispatch_stage<S, C>(
    surface: &mut S,
    stage: Changeset<C>,
    latch: Option<&Arc<CompletionLatch>>,
    set_data: &mut impl FnMut(C),
) where
    S: AsyncSurface,
{
    rtrace!(changes = stage.change_count(), "dispatching stage");

    let batch_completion = latch.map(|latch| {
        latch.enter();
        let latch = Arc::clone(latch);
        Box::new(move |_finished: bool| latch.leave()) as Completion
    });

    let Changeset {
        data,
        section_deleted,
        section_inserted,
        section_updated,
        section_moved,
        element_deleted,
        element_inserted,
        element_updated,
        element_moved,
    } = stage;

    surface.perform_batch(
        |surface| {
            // The backing data must be swapped before any structural request: the
            // surface reads it while computing the batch's animation.
            set_data(data);

            if !section_deleted.is_empty() {
                surface.delete_sections(&section_deleted);
            }
            if !section_inserted.is_empty() {
                surface.insert_sections(&section_inserted);
            }
            if !section_updated.is_empty() {
                surface.update_sections(&section_updated);
            }
            for (from, to) in section_moved {
                surface.move_section(from, to);
            }

            if !element_deleted.is_empty() {
                surface.delete_elements(&element_deleted);
            }
            if !element_inserted.is_empty() {
                surface.insert_elements(&element_inserted);
            }
            if !element_updated.is_empty() {
                surface.update_elements(&element_updated);
            }
            for (from, to) in element_moved {
                surface.move_element(from, to);
            }
        },
        batch_completion,
    );
}
