// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read access to the logical content of a [`GapBuffer`].
//!
//! Nothing in here mutates the buffer or moves the gap. Reads skip over the gap by
//! translating logical indices to storage indices:
//!
//! ```text
//! logical index i  ->  i               if i < gap_start
//!                  ->  i + gap_len     otherwise
//! ```

use std::{fmt::{Display, Formatter},
          iter::Chain,
          ops::Index,
          slice};

use super::GapBuffer;

/// Iterator over the logical content of a [`GapBuffer`], front to back (or back to
/// front, since it is double ended).
pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// Units that can be turned into text, for [`Display`] and
/// [`GapBuffer::render_with_gap`].
///
/// [`char`] maps one to one. [`u8`] is treated as UTF-8, and invalid sequences are
/// replaced with `U+FFFD`. The buffer itself never looks at encodings.
pub trait RenderUnit: Copy {
    fn render(units: &[Self]) -> String;
}

impl RenderUnit for char {
    fn render(units: &[Self]) -> String { units.iter().collect() }
}

impl RenderUnit for u8 {
    fn render(units: &[Self]) -> String { String::from_utf8_lossy(units).into_owned() }
}

impl<T> GapBuffer<T> {
    /// Return the content before the cursor and the content after it.
    #[must_use]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (
            &self.storage[..self.gap_start],
            &self.storage[self.gap_end..],
        )
    }

    /// Iterate over the logical content, skipping the gap.
    pub fn iter(&self) -> Iter<'_, T> {
        let (before, after) = self.as_slices();
        before.iter().chain(after.iter())
    }

    /// Unit at logical `index`, or `None` if `index >= len`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let physical = if index < self.gap_start {
            index
        } else {
            index + self.gap_len()
        };
        self.storage.get(physical)
    }
}

impl<T: Copy> GapBuffer<T> {
    /// Copy the logical content out into a new [`Vec`]. This is a snapshot for display
    /// or export; the buffer is not changed.
    #[must_use]
    pub fn materialize(&self) -> Vec<T> {
        let (before, after) = self.as_slices();
        let mut it = Vec::with_capacity(before.len() + after.len());
        it.extend_from_slice(before);
        it.extend_from_slice(after);
        it
    }
}

impl<T: RenderUnit> GapBuffer<T> {
    /// Render the content with the gap shown as `_` inside square brackets. Handy for
    /// debugging and for the `gbd` CLI.
    ///
    /// ```
    /// use r3bl_gap_buffer::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::try_new(6, b"abcd").unwrap();
    /// buffer.set_cursor(1).unwrap();
    /// assert_eq!(buffer.render_with_gap(), "a[__]bcd");
    /// ```
    #[must_use]
    pub fn render_with_gap(&self) -> String {
        let (before, after) = self.as_slices();
        format!(
            "{}[{}]{}",
            T::render(before),
            "_".repeat(self.gap_len()),
            T::render(after)
        )
    }
}

/// Prints the logical content only. Use [`GapBuffer::render_with_gap`] to see the gap.
impl<T: RenderUnit> Display for GapBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (before, after) = self.as_slices();
        write!(f, "{}{}", T::render(before), T::render(after))
    }
}

/// # Panics
///
/// Panics if `index >= len`, like indexing a [`Vec`]. Use [`GapBuffer::get`] for a
/// checked version.
impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len();
        match self.get(index) {
            Some(it) => it,
            None => panic!("index {index} out of range for gap buffer of length {len}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl From<&str> for GapBuffer<char> {
    fn from(text: &str) -> Self {
        let seed: Vec<char> = text.chars().collect();
        Self::from_seed(&seed)
    }
}

impl From<&str> for GapBuffer<u8> {
    fn from(text: &str) -> Self { Self::from_seed(text.as_bytes()) }
}

impl<T: Copy + Default> FromIterator<T> for GapBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let seed: Vec<T> = iter.into_iter().collect();
        Self::from_seed(&seed)
    }
}
