//! The error taxonomy described in §7.

/// Errors the clipping core's public entry points can report.
///
/// A ring with fewer than three distinct vertices (an "empty polygon" per
/// §7) is *not* an error to the three top-level drivers
/// ([`crate::ops::intersection`], [`crate::ops::union`],
/// [`crate::ops::difference`]): it has a well-defined, non-failing
/// absorbing/identity outcome, handled before any woven list is built.
/// [`Error::EmptyInput`] is reserved for the one precondition narrower than
/// that: a ring with literally zero points, which [`crate::ring::Ring`]'s
/// own constructor never produces from a non-empty input but a caller could
/// still hand in directly. [`Error::FullyOnBoundary`] exists for callers of
/// `C4`'s labeller directly; the top-level drivers recognize that case and
/// return the hard-coded identical-rings result instead (§7).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A ring has no points at all, so even a single representative vertex
    /// ([`crate::ring::Ring::first_point`]) can't be produced for it.
    #[error("polygon ring has fewer than 3 distinct vertices")]
    EmptyInput,

    /// C4 could not find a vertex unambiguously inside or outside the
    /// opposite ring: every vertex of the list lies on the opposite
    /// boundary. This only escapes to a caller of [`crate::label`]
    /// directly; the top-level drivers recognize this case and return
    /// the hard-coded identical-rings result instead (§7).
    #[error("could not find a vertex unambiguously inside or outside the opposite ring; rings are coincident")]
    FullyOnBoundary,

    /// The requested operation is not supported for the given inputs.
    #[error("unsupported operation between the given geometry types")]
    UnsupportedOperation,
}
