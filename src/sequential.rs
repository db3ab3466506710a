use crate::{Changeset, Completion, Interrupt, StageAnimations, StagedChangeset, SyncSurface};

/// Applies a staged changeset to a surface with synchronous batch semantics.
///
/// Stages are applied strictly in order; each stage commits one structural transaction
/// containing, in fixed order: the backing-data swap, section delete/insert/update/move,
/// element delete/insert/update/move. The ordering is load-bearing: surfaces interpret
/// insertion/update/move indices relative to the post-deletion state of the transaction.
///
/// - A detached surface installs the final snapshot with a full reload instead;
///   `completion(false)` fires and no structural operation is issued.
/// - When `interrupt` returns `true` for a stage, that stage and all later ones are
///   never applied and the same fallback runs.
/// - After the last stage commits, `completion(true)` fires.
///
/// The caller must invoke this on the execution context owning the surface, and must
/// not start another reload on the same surface while one is in flight.
pub fn reload<S, C>(
    surface: &mut S,
    staged: StagedChangeset<C>,
    animations: &StageAnimations<S::Animation>,
    interrupt: Option<Interrupt<C>>,
    completion: Option<Completion>,
    mut set_data: impl FnMut(C),
) where
    S: SyncSurface,
{
    let mut stages = staged.into_stages();
    rdebug!(stages = stages.len(), "sequential reload");

    // An empty staged changeset has no final snapshot to install, so there is no
    // fallback to take either; the reload trivially succeeds.
    let Some(last) = stages.pop() else {
        if let Some(completion) = completion {
            completion(true);
        }
        return;
    };

    if !surface.is_attached() {
        rdebug!("surface detached, installing final snapshot");
        install_final(surface, last.data, completion, &mut set_data);
        return;
    }

    for stage in stages {
        if interrupt.as_ref().is_some_and(|f| f(&stage)) {
            rdebug!("reload interrupted, installing final snapshot");
            install_final(surface, last.data, completion, &mut set_data);
            return;
        }
        apply_stage(surface, stage, animations, &mut set_data);
    }

    if interrupt.as_ref().is_some_and(|f| f(&last)) {
        rdebug!("reload interrupted at final stage, installing final snapshot");
        install_final(surface, last.data, completion, &mut set_data);
        return;
    }
    apply_stage(surface, last, animations, &mut set_data);

    if let Some(completion) = completion {
        completion(true);
    }
}

/// Fallback shared by the detached and interrupted paths: swap in the final snapshot,
/// force a full reload, and report the reload as not animated.
fn install_final<S, C>(
    surface: &mut S,
    data: C,
    completion: Option<Completion>,
    set_data: &mut impl FnMut(C),
) where
    S: SyncSurface,
{
    set_data(data);
    surface.reload_data();
    if let Some(completion) = completion {
        completion(false);
    }
}

fn apply_stage<S, C>(
    surface: &mut S,
    stage: Changeset<C>,
    animations: &StageAnimations<S::Animation>,
    set_data: &mut impl FnMut(C),
) where
    S: SyncSurface,
{
    rtrace!(changes = stage.change_count(), "applying stage");

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

    surface.perform_batch(|surface| {
        // The backing data must be swapped before any structural request: the surface
        // reads it while computing the transaction's animation.
        set_data(data);

        if !section_deleted.is_empty() {
            surface.delete_sections(&section_deleted, &animations.delete);
        }
        if !section_inserted.is_empty() {
            surface.insert_sections(&section_inserted, &animations.insert);
        }
        if !section_updated.is_empty() {
            surface.update_sections(&section_updated, &animations.update);
        }
        for (from, to) in section_moved {
            surface.move_section(from, to);
        }

        if !element_deleted.is_empty() {
            surface.delete_elements(&element_deleted, &animations.delete);
        }
        if !element_inserted.is_empty() {
            surface.insert_elements(&element_inserted, &animations.insert);
        }
        if !element_updated.is_empty() {
            surface.update_elements(&element_updated, &animations.update);
        }
        for (from, to) in element_moved {
            surface.move_element(from, to);
        }
    });
}
