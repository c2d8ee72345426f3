// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gap relocation and gap growth for [`GapBuffer`].
//!
//! These two primitives carry all of the buffer's index arithmetic. Insert and delete
//! (in [`super::gb_edit_ops`]) are thin wrappers that relocate the gap and then move one
//! of its bounds.
//!
//! # Relocation
//!
//! Moving the gap right by `delta` copies the `delta` units just after the gap to just
//! before it. Moving it left copies the `delta` units just before the gap to just after
//! it. Either way the copied span "jumps over" the gap, and nothing else moves:
//!
//! ```text
//! shift_gap(4), gap_start = 2, delta = 2
//!
//! before: [a b _ _ _ c d e]     after: [a b c d _ _ _ e]
//!              ^     ^                          ^     ^
//!              2     5                          4     7
//! ```
//!
//! # Growth
//!
//! Growth reallocates storage so the gap at the cursor becomes larger. Pre-gap content
//! stays where it is, and post-gap content is copied to the tail of the new storage.
//! The amount added is picked by the buffer's [`GrowthPolicy`], which doubles the
//! capacity by default.
//!
//! [`GrowthPolicy`]: super::GrowthPolicy

use super::{GapBuffer, GapBufferError, GapBufferResult};
use crate::DEBUG_GAP_BUFFER;

impl<T: Copy + Default> GapBuffer<T> {
    /// Move the cursor (the gap) to `position` without changing the content.
    ///
    /// Costs `O(|position - cursor|)`.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfBounds`] if `position > len`. The buffer is left
    /// untouched.
    pub fn set_cursor(&mut self, position: usize) -> GapBufferResult<()> {
        self.check_position(position)?;
        self.shift_gap(position);
        Ok(())
    }

    /// Move the cursor one unit towards the start.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfBounds`] if the cursor is already at `0`.
    pub fn move_left(&mut self) -> GapBufferResult<()> {
        let Some(position) = self.gap_start.checked_sub(1) else {
            return Err(GapBufferError::OutOfBounds {
                position: self.gap_start,
                len: self.len(),
            });
        };
        self.shift_gap(position);
        Ok(())
    }

    /// Move the cursor one unit towards the end.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfBounds`] if the cursor is already at `len`.
    pub fn move_right(&mut self) -> GapBufferResult<()> {
        let position = self.gap_start + 1;
        self.check_position(position)?;
        self.shift_gap(position);
        Ok(())
    }

    /// Make sure the gap can absorb at least `additional` units without another
    /// reallocation. Does nothing if it already can.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::InvalidArgument`] if the resulting capacity would
    /// overflow `usize`.
    pub fn reserve(&mut self, additional: usize) -> GapBufferResult<()> {
        if self.gap_len() >= additional {
            return Ok(());
        }
        self.grow(additional)
    }

    /// Relocate the gap so that `gap_start == target`, preserving the content and its
    /// order. Callers must have validated `target <= len`.
    pub(super) fn shift_gap(&mut self, target: usize) {
        debug_assert!(target <= self.len(), "shift_gap target {target} past end");

        let from = self.gap_start;
        if target > self.gap_start {
            // Gap moves right: post-gap units jump back over the gap.
            let delta = target - self.gap_start;
            self.storage
                .copy_within(self.gap_end..self.gap_end + delta, self.gap_start);
            self.gap_start += delta;
            self.gap_end += delta;
        } else if target < self.gap_start {
            // Gap moves left: pre-gap units jump forward over the gap.
            let delta = self.gap_start - target;
            self.storage
                .copy_within(target..self.gap_start, self.gap_end - delta);
            self.gap_start -= delta;
            self.gap_end -= delta;
        } else {
            return;
        }

        DEBUG_GAP_BUFFER.then(|| {
            tracing::trace!(
                message = "🔀 shift gap",
                from,
                to = target,
                delta = from.abs_diff(target),
                gap_end = self.gap_end
            );
        });
        self.debug_assert_invariants();
    }

    /// Reallocate so the gap at the cursor is exactly `additional` units long.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::InvalidArgument`] if `additional` is smaller than the
    /// current gap (this would shrink the buffer), or the new capacity overflows
    /// `usize`. Nothing is allocated in either case.
    pub(super) fn grow(&mut self, additional: usize) -> GapBufferResult<()> {
        let old_capacity = self.capacity();
        let invalid = || GapBufferError::InvalidArgument {
            additional,
            capacity: old_capacity,
        };

        if additional < self.gap_len() {
            return Err(invalid());
        }
        let new_capacity = self
            .len()
            .checked_add(additional)
            .ok_or_else(invalid)?;

        let post_gap_len = old_capacity - self.gap_end;
        let new_gap_end = new_capacity - post_gap_len;

        let mut new_storage = Vec::with_capacity(new_capacity);
        new_storage.extend_from_slice(&self.storage[..self.gap_start]);
        new_storage.resize(new_gap_end, T::default());
        new_storage.extend_from_slice(&self.storage[self.gap_end..]);

        self.storage = new_storage;
        self.gap_end = new_gap_end;

        DEBUG_GAP_BUFFER.then(|| {
            tracing::debug!(
                message = "📈 grow gap",
                old_capacity,
                new_capacity,
                gap_start = self.gap_start,
                gap_end = self.gap_end
            );
        });
        self.debug_assert_invariants();
        Ok(())
    }

    /// Grow according to the growth policy until the gap holds at least `needed` units.
    /// Used by the insert operations when the gap is exhausted.
    pub(super) fn ensure_gap(&mut self, needed: usize) -> GapBufferResult<()> {
        if self.gap_len() >= needed {
            return Ok(());
        }
        let next_gap_len = self
            .growth_policy
            .next_gap_len(self.capacity() - self.gap_len())
            .max(needed);
        self.grow(next_gap_len)
    }
}
