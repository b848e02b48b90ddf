use thiserror::Error;

/// Violations reported by the strict insertion variants.
///
/// The silent operations treat both cases as no-ops; see
/// [`crate::TreeMap::try_add_root`] and [`crate::TreeMap::try_grow_branch`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("value is already present in the forest")]
    DuplicateValue,

    #[error("anchor value has no leaf in the forest")]
    AnchorNotFound,
}

pub type TreeResult<T> = Result<T, TreeError>;
