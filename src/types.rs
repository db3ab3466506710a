use alloc::vec::Vec;

/// A two-level coordinate addressing one position in the rendering surface's hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementPath {
    pub section: usize,
    pub element: usize,
}

impl ElementPath {
    pub const fn new(section: usize, element: usize) -> Self {
        Self { section, element }
    }
}

/// One stage of a precomputed diff sequence.
///
/// `data` is the snapshot the surface's backing data must hold once this stage commits.
/// The structural deltas describe how to get there from the state established by the
/// previous stage; the producer of the staged changeset guarantees that consistency.
///
/// Indices in each delta are interpreted by the surface relative to the fixed
/// intra-stage order: sections before elements, delete → insert → update → move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Changeset<C> {
    pub data: C,

    pub section_deleted: Vec<usize>,
    pub section_inserted: Vec<usize>,
    pub section_updated: Vec<usize>,
    pub section_moved: Vec<(usize, usize)>,

    pub element_deleted: Vec<ElementPath>,
    pub element_inserted: Vec<ElementPath>,
    pub element_updated: Vec<ElementPath>,
    /// Source → target relocations.
    pub element_moved: Vec<(ElementPath, ElementPath)>,
}

impl<C> Changeset<C> {
    /// Creates a stage with no structural changes.
    pub fn new(data: C) -> Self {
        Self {
            data,
            section_deleted: Vec::new(),
            section_inserted: Vec::new(),
            section_updated: Vec::new(),
            section_moved: Vec::new(),
            element_deleted: Vec::new(),
            element_inserted: Vec::new(),
            element_updated: Vec::new(),
            element_moved: Vec::new(),
        }
    }

    /// Total number of structural operations in this stage.
    pub fn change_count(&self) -> usize {
        self.section_deleted.len()
            + self.section_inserted.len()
            + self.section_updated.len()
            + self.section_moved.len()
            + self.element_deleted.len()
            + self.element_inserted.len()
            + self.element_updated.len()
            + self.element_moved.len()
    }

    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }
}

/// An ordered sequence of [`Changeset`] stages.
///
/// The last stage's `data` equals the overall target snapshot. Stages are applied
/// strictly in order; the driver never reorders or batches operations across stage
/// boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagedChangeset<C> {
    stages: Vec<Changeset<C>>,
}

impl<C> StagedChangeset<C> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Changeset<C>> {
        self.stages.iter()
    }

    /// The final snapshot, if any stage exists.
    pub fn final_data(&self) -> Option<&C> {
        self.stages.last().map(|stage| &stage.data)
    }

    pub fn into_stages(self) -> Vec<Changeset<C>> {
        self.stages
    }
}

impl<C> From<Vec<Changeset<C>>> for StagedChangeset<C> {
    fn from(stages: Vec<Changeset<C>>) -> Self {
        Self { stages }
    }
}

impl<C> FromIterator<Changeset<C>> for StagedChangeset<C> {
    fn from_iter<I: IntoIterator<Item = Changeset<C>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<C> IntoIterator for StagedChangeset<C> {
    type Item = Changeset<C>;
    type IntoIter = alloc::vec::IntoIter<Changeset<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a StagedChangeset<C> {
    type Item = &'a Changeset<C>;
    type IntoIter = core::slice::Iter<'a, Changeset<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
