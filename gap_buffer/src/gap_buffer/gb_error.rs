// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned by [`GapBuffer`] operations. See [`GapBufferError`] for details.
//!
//! [`GapBuffer`]: super::GapBuffer

/// Errors from the fallible [`GapBuffer`] operations.
///
/// Every error is reported synchronously to the caller of the operation that triggered
/// it, and the buffer is left exactly as it was before the call (no partial mutation,
/// no allocation).
///
/// | Variant              | Cause                                                   |
/// | :------------------- | :------------------------------------------------------ |
/// | [`OutOfBounds`]      | A position falls outside `[0, len]`                     |
/// | [`InvalidCapacity`]  | Construction capacity is smaller than the seed          |
/// | [`InvalidArgument`]  | Growth request would shrink the gap or overflow `usize` |
///
/// [`GapBuffer`]: super::GapBuffer
/// [`OutOfBounds`]: Self::OutOfBounds
/// [`InvalidCapacity`]: Self::InvalidCapacity
/// [`InvalidArgument`]: Self::InvalidArgument
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GapBufferError {
    /// The position is not in `[0, len]`.
    #[error("Position {position} is out of bounds for buffer of length {len}")]
    #[diagnostic(
        code(r3bl_gap_buffer::out_of_bounds),
        help("Valid positions are 0 through {len} (inclusive)")
    )]
    OutOfBounds {
        /// The rejected position.
        position: usize,
        /// Logical length of the buffer at the time of the call.
        len: usize,
    },

    /// The requested capacity can't hold the seed content.
    #[error("Capacity {capacity} is too small to hold a seed of {seed_len} units")]
    #[diagnostic(
        code(r3bl_gap_buffer::invalid_capacity),
        help("Pass a capacity of at least {seed_len}")
    )]
    InvalidCapacity { capacity: usize, seed_len: usize },

    /// The gap can't be resized to the requested size.
    #[error("Can't grow gap to {additional} units (current capacity {capacity})")]
    #[diagnostic(
        code(r3bl_gap_buffer::invalid_argument),
        help(
            "The new gap must be at least as large as the current one, and the \
             resulting capacity must fit in a usize"
        )
    )]
    InvalidArgument { additional: usize, capacity: usize },
}

/// Shorthand for results of [`GapBuffer`] operations.
///
/// [`GapBuffer`]: super::GapBuffer
pub type GapBufferResult<T> = Result<T, GapBufferError>;
