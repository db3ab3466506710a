use crate::{Completion, ElementPath, OwnerExecutor};

/// An addressable two-level rendering surface with synchronous batch semantics.
///
/// The driver is headless: it never touches UI objects directly. An adapter implements
/// this trait on top of the surface's native batch-mutation primitives (e.g. a table
/// view's begin/end updates). All structural calls between `perform_batch` entering and
/// returning belong to one transaction and commit atomically.
///
/// The driver performs no bounds validation: out-of-range sections or paths are
/// forwarded as-is, and the surface's own fault behavior governs the outcome.
pub trait SyncSurface {
    /// The surface's animation option for delete/insert/update operations.
    type Animation;

    /// Whether the surface is currently attached to a rendering target.
    ///
    /// A detached surface short-circuits the staged reload into a plain data swap.
    fn is_attached(&self) -> bool;

    /// Forces an unconditional full reload from the backing data.
    fn reload_data(&mut self);

    /// Runs `updates` inside one structural transaction and commits it synchronously.
    fn perform_batch(&mut self, updates: impl FnOnce(&mut Self));

    fn delete_sections(&mut self, sections: &[usize], animation: &Self::Animation);
    fn insert_sections(&mut self, sections: &[usize], animation: &Self::Animation);
    fn update_sections(&mut self, sections: &[usize], animation: &Self::Animation);
    fn move_section(&mut self, from: usize, to: usize);

    fn delete_elements(&mut self, paths: &[ElementPath], animation: &Self::Animation);
    fn insert_elements(&mut self, paths: &[ElementPath], animation: &Self::Animation);
    fn update_elements(&mut self, paths: &[ElementPath], animation: &Self::Animation);
    fn move_element(&mut self, from: ElementPath, to: ElementPath);
}

/// A rendering surface whose batch mutation is itself an asynchronous animated
/// operation (e.g. a collection view's animated batch updates).
///
/// `perform_batch` must run `updates` synchronously at the call site; the animation
/// completes later and the surface signals it by invoking `completion(finished)` on the
/// surface's owning execution context. Structural operations carry no animation option:
/// the batch supplies one implicit animation context.
pub trait AsyncSurface {
    fn is_attached(&self) -> bool;

    fn reload_data(&mut self);

    /// Dispatches one animated structural transaction.
    ///
    /// `updates` is applied synchronously; `completion`, when present, fires once the
    /// batch's animation has finished. Passing `None` must not allocate any completion
    /// bookkeeping in the surface.
    fn perform_batch(&mut self, updates: impl FnOnce(&mut Self), completion: Option<Completion>);

    /// A handle scheduling closures on the execution context that owns this surface.
    fn owner_executor(&self) -> OwnerExecutor;

    fn delete_sections(&mut self, sections: &[usize]);
    fn insert_sections(&mut self, sections: &[usize]);
    fn update_sections(&mut self, sections: &[usize]);
    fn move_section(&mut self, from: usize, to: usize);

    fn delete_elements(&mut self, paths: &[ElementPath]);
    fn insert_elements(&mut self, paths: &[ElementPath]);
    fn update_elements(&mut self, paths: &[ElementPath]);
    fn move_element(&mut self, from: ElementPath, to: ElementPath);
}
