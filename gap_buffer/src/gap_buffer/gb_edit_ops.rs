// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Insert and delete operations for [`GapBuffer`].
//!
//! There are two flavors:
//! - Positional: [`insert`], [`insert_slice`], [`push`], [`delete`]. These move the
//!   cursor to the given position first.
//! - Cursor relative: [`insert_at_cursor`], [`delete_before_cursor`],
//!   [`delete_after_cursor`]. These never move the gap, which makes them `O(1)`
//!   (amortized, for inserts).
//!
//! Deletion never reallocates and never erases anything. It just widens the gap over
//! the deleted units.
//!
//! [`insert`]: GapBuffer::insert
//! [`insert_slice`]: GapBuffer::insert_slice
//! [`push`]: GapBuffer::push
//! [`delete`]: GapBuffer::delete
//! [`insert_at_cursor`]: GapBuffer::insert_at_cursor
//! [`delete_before_cursor`]: GapBuffer::delete_before_cursor
//! [`delete_after_cursor`]: GapBuffer::delete_after_cursor

use super::{GapBuffer, GapBufferResult};

impl<T: Copy + Default> GapBuffer<T> {
    /// Insert `unit` so that it becomes the logical element at `position`. The cursor
    /// ends up right after it.
    ///
    /// If the gap is exhausted, the buffer grows first according to its
    /// [`GrowthPolicy`](super::GrowthPolicy).
    ///
    /// # Errors
    ///
    /// - [`OutOfBounds`] if `position > len`. Nothing changes (not even capacity).
    /// - [`InvalidArgument`] if growing would overflow `usize`.
    ///
    /// [`OutOfBounds`]: super::GapBufferError::OutOfBounds
    /// [`InvalidArgument`]: super::GapBufferError::InvalidArgument
    pub fn insert(&mut self, position: usize, unit: T) -> GapBufferResult<()> {
        self.check_position(position)?;
        self.ensure_gap(1)?;
        self.shift_gap(position);
        self.insert_at_cursor_unchecked(unit);
        Ok(())
    }

    /// Insert all of `units` starting at `position`, in order. Grows at most once.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn insert_slice(&mut self, position: usize, units: &[T]) -> GapBufferResult<()> {
        self.check_position(position)?;
        if units.is_empty() {
            return Ok(());
        }
        self.ensure_gap(units.len())?;
        self.shift_gap(position);
        self.storage[self.gap_start..self.gap_start + units.len()].copy_from_slice(units);
        self.gap_start += units.len();
        self.debug_assert_invariants();
        Ok(())
    }

    /// Append `unit` at the logical end.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](super::GapBufferError::InvalidArgument) if growing
    /// would overflow `usize`.
    pub fn push(&mut self, unit: T) -> GapBufferResult<()> { self.insert(self.len(), unit) }

    /// Insert `unit` right before the cursor, without moving the gap.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](super::GapBufferError::InvalidArgument) if growing
    /// would overflow `usize`.
    pub fn insert_at_cursor(&mut self, unit: T) -> GapBufferResult<()> {
        self.ensure_gap(1)?;
        self.insert_at_cursor_unchecked(unit);
        Ok(())
    }

    /// Remove `count` units starting at `position`. The removal is clamped at the end
    /// of the buffer, so asking for more units than exist removes what is there.
    ///
    /// The removed units are not erased. The gap simply grows over them.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](super::GapBufferError::OutOfBounds) if
    /// `position > len`. Nothing changes in that case.
    pub fn delete(&mut self, position: usize, count: usize) -> GapBufferResult<()> {
        self.check_position(position)?;
        self.shift_gap(position);
        self.gap_end = self.gap_end.saturating_add(count).min(self.storage.len());
        self.debug_assert_invariants();
        Ok(())
    }

    /// Backspace. Removes the unit just before the cursor and returns it, or `None`
    /// when the cursor is at the start.
    pub fn delete_before_cursor(&mut self) -> Option<T> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        self.debug_assert_invariants();
        Some(self.storage[self.gap_start])
    }

    /// Forward delete. Removes the unit just after the cursor and returns it, or
    /// `None` when the cursor is at the end.
    pub fn delete_after_cursor(&mut self) -> Option<T> {
        if self.gap_end == self.storage.len() {
            return None;
        }
        let unit = self.storage[self.gap_end];
        self.gap_end += 1;
        self.debug_assert_invariants();
        Some(unit)
    }

    fn insert_at_cursor_unchecked(&mut self, unit: T) {
        debug_assert!(self.gap_len() > 0, "no room in gap");
        self.storage[self.gap_start] = unit;
        self.gap_start += 1;
        self.debug_assert_invariants();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GapBufferError;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_insert_at_front_grows_on_exhausted_gap() {
        let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
        let mut capacities = vec![buffer.capacity()];

        for unit in ['A', 'B', 'C', 'D', 'E', 'F'] {
            buffer.insert(0, unit).unwrap();
            if capacities.last() != Some(&buffer.capacity()) {
                capacities.push(buffer.capacity());
            }
        }

        assert_eq!(buffer.to_string(), "FEDCBA");
        assert_eq!(capacities, vec![2, 4, 8]);
    }

    #[test]
    fn test_insert_fills_gap_before_growing() {
        let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
        buffer.insert(0, 'A').unwrap();
        assert_eq!(buffer.to_string(), "A");
        buffer.insert(0, 'B').unwrap();
        assert_eq!(buffer.to_string(), "BA");
        assert_eq!(buffer.gap_len(), 0);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_insert_into_zero_capacity() {
        let mut buffer = GapBuffer::<u8>::try_new(0, &[]).unwrap();
        buffer.insert(0, b'x').unwrap();
        buffer.insert(1, b'y').unwrap();
        assert_eq!(buffer.to_string(), "xy");
        assert_eq!(buffer.capacity(), 2);
    }

    #[test_case(0, "_abc")]
    #[test_case(1, "a_bc")]
    #[test_case(2, "ab_c")]
    #[test_case(3, "abc_")]
    fn test_insert_splices_at_position(position: usize, expected: &str) {
        let mut buffer = GapBuffer::try_new(4, &chars("abc")).unwrap();
        buffer.set_cursor(1).unwrap();
        buffer.insert(position, '_').unwrap();
        assert_eq!(buffer.to_string(), expected);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.cursor(), position + 1);
    }

    #[test]
    fn test_insert_out_of_bounds_does_not_grow() {
        let mut buffer = GapBuffer::try_new(3, &chars("abc")).unwrap();
        let result = buffer.insert(4, 'x');
        assert_eq!(
            result,
            Err(GapBufferError::OutOfBounds {
                position: 4,
                len: 3
            })
        );
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_insert_slice() {
        let mut buffer = GapBuffer::try_new(6, &chars("held")).unwrap();
        buffer.insert_slice(3, &chars("lo wor")).unwrap();
        assert_eq!(buffer.to_string(), "hello world");
        assert_eq!(buffer.cursor(), 9);
        // Grows once, straight to a gap that fits the whole slice.
        assert_eq!(buffer.capacity(), 4 + 6);
    }

    #[test]
    fn test_insert_slice_empty_is_noop() {
        let mut buffer = GapBuffer::try_new(2, &chars("ab")).unwrap();
        buffer.insert_slice(1, &[]).unwrap();
        assert_eq!(buffer.cursor(), 2);
        assert!(buffer.insert_slice(3, &[]).is_err());
    }

    #[test]
    fn test_push_appends() {
        let mut buffer = GapBuffer::from_seed(&chars("ab"));
        buffer.set_cursor(0).unwrap();
        buffer.push('c').unwrap();
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_delete_after_exhausted_gap() {
        let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
        buffer.insert(0, 'A').unwrap();
        buffer.insert(0, 'B').unwrap();

        buffer.delete(0, 1).unwrap();

        assert_eq!(buffer.to_string(), "A");
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test_case(0, 2, "cdef")]
    #[test_case(2, 2, "abef")]
    #[test_case(4, 10, "abcd")]
    #[test_case(6, 1, "abcdef")]
    #[test_case(3, 0, "abcdef")]
    fn test_delete_range(position: usize, count: usize, expected: &str) {
        let mut buffer = GapBuffer::try_new(8, &chars("abcdef")).unwrap();
        buffer.set_cursor(3).unwrap();
        buffer.delete(position, count).unwrap();
        assert_eq!(buffer.to_string(), expected);
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn test_delete_huge_count_is_clamped() {
        let mut buffer = GapBuffer::try_new(4, &chars("abc")).unwrap();
        buffer.delete(1, usize::MAX).unwrap();
        assert_eq!(buffer.to_string(), "a");
        assert_eq!(buffer.gap_end(), buffer.capacity());
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let mut buffer = GapBuffer::try_new(4, &chars("abc")).unwrap();
        assert!(buffer.delete(4, 1).is_err());
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_cursor_deletes_keep_gap_inside_storage() {
        let mut buffer = GapBuffer::try_new(5, &chars("abcd")).unwrap();
        buffer.set_cursor(2).unwrap();

        while buffer.delete_before_cursor().is_some() {
            assert!(buffer.gap_end() <= buffer.capacity());
        }
        while buffer.delete_after_cursor().is_some() {
            assert!(buffer.gap_start() <= buffer.gap_end());
        }

        assert!(buffer.is_empty());
        assert_eq!((buffer.gap_start(), buffer.gap_end()), (0, 5));
    }

    #[test]
    fn test_cursor_relative_editing() {
        let mut buffer = GapBuffer::try_new(4, &chars("helo")).unwrap();
        buffer.set_cursor(3).unwrap();

        buffer.insert_at_cursor('l').unwrap();
        assert_eq!(buffer.to_string(), "hello");
        assert_eq!(buffer.cursor(), 4);

        assert_eq!(buffer.delete_after_cursor(), Some('o'));
        assert_eq!(buffer.delete_after_cursor(), None);
        assert_eq!(buffer.delete_before_cursor(), Some('l'));
        assert_eq!(buffer.to_string(), "hel");

        buffer.set_cursor(0).unwrap();
        assert_eq!(buffer.delete_before_cursor(), None);
        assert_eq!(buffer.to_string(), "hel");
    }
}
