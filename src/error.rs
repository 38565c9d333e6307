//! Failure types raised by the list containers.

use derive_more::{Display, Error};

/// Error returned by index-addressed operations when the index falls outside
/// the live region `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of bounds for length {len}")]
pub struct OutOfBounds {
    /// Requested index.
    pub index: usize,

    /// Container length at the time of the call.
    pub len: usize,
}

/// Error returned by `sub_list` when the `[start, end)` pair is inverted or
/// reaches past the end of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("range {start}..{end} out of bounds for length {len}")]
pub struct InvalidRange {
    /// Inclusive lower bound of the requested range.
    pub start: usize,

    /// Exclusive upper bound of the requested range.
    pub end: usize,

    /// Container length at the time of the call.
    pub len: usize,
}

/// Error returned by `pop_front`/`pop_back` on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("list is empty")]
pub struct Empty;
