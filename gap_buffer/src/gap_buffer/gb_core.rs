// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`GapBuffer`] struct, its constructors, and layout accessors.
//!
//! # Storage layout
//!
//! ```text
//! storage: [--- before cursor ---][===== gap =====][--- after cursor ---]
//!           ^                      ^                ^                    ^
//!           0                      gap_start        gap_end              capacity
//! ```
//!
//! The logical content is `storage[..gap_start]` followed by `storage[gap_end..]`. The
//! units inside the gap are leftovers from earlier edits (or `T::default()`) and are
//! never read as content.

use super::{DEFAULT_CAPACITY, DEFAULT_SEED_GAP, GapBufferConfig, GapBufferError,
            GapBufferResult, GrowthPolicy};

/// A contiguous gap buffer holding units of type `T` (usually [`u8`] or [`char`]).
///
/// Edits are cheap near the gap: inserting writes into the gap and deleting widens it.
/// Moving the gap costs `O(distance)`, so runs of edits clustered around one location
/// are fast, while edits that keep jumping across the buffer pay for the travel.
///
/// The buffer is exclusively owned. Every mutating operation takes `&mut self`, and
/// [`Clone`] makes a deep copy, so two buffers never share storage.
///
/// ```
/// use r3bl_gap_buffer::GapBuffer;
///
/// let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
/// buffer.insert(0, 'A').unwrap();
/// buffer.insert(0, 'B').unwrap();
/// assert_eq!(buffer.to_string(), "BA");
/// assert_eq!(buffer.gap_len(), 0);
///
/// buffer.delete(0, 1).unwrap();
/// assert_eq!(buffer.to_string(), "A");
/// assert_eq!(buffer.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GapBuffer<T> {
    /// `[pre-gap content | gap | post-gap content]`. Its length is the capacity.
    pub(super) storage: Vec<T>,
    /// First unit of the gap. This is also the cursor.
    pub(super) gap_start: usize,
    /// First unit after the gap.
    pub(super) gap_end: usize,
    pub(super) growth_policy: GrowthPolicy,
}

impl<T: Copy + Default> GapBuffer<T> {
    /// Create a buffer with `capacity` units of storage, with `seed` copied to the
    /// front and the gap filling the rest. The cursor ends up right after the seed.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::InvalidCapacity`] if `capacity < seed.len()`. Nothing
    /// is allocated in that case.
    pub fn try_new(capacity: usize, seed: &[T]) -> GapBufferResult<Self> {
        Self::with_config(
            GapBufferConfig {
                initial_capacity: capacity,
                growth_policy: GrowthPolicy::default(),
            },
            seed,
        )
    }

    /// Same as [`try_new`](Self::try_new), but also picks the [`GrowthPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::InvalidCapacity`] if the configured capacity is
    /// smaller than `seed`.
    pub fn with_config(config: GapBufferConfig, seed: &[T]) -> GapBufferResult<Self> {
        let GapBufferConfig {
            initial_capacity: capacity,
            growth_policy,
        } = config;

        if capacity < seed.len() {
            return Err(GapBufferError::InvalidCapacity {
                capacity,
                seed_len: seed.len(),
            });
        }

        let mut storage = vec![T::default(); capacity];
        storage[..seed.len()].copy_from_slice(seed);

        Ok(Self {
            storage,
            gap_start: seed.len(),
            gap_end: capacity,
            growth_policy,
        })
    }

    /// Empty buffer with [`DEFAULT_CAPACITY`] units of gap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: vec![T::default(); DEFAULT_CAPACITY],
            gap_start: 0,
            gap_end: DEFAULT_CAPACITY,
            growth_policy: GrowthPolicy::default(),
        }
    }

    /// Buffer holding `seed` followed by a gap of [`DEFAULT_SEED_GAP`] units. The
    /// cursor is at the end of the seed.
    #[must_use]
    pub fn from_seed(seed: &[T]) -> Self {
        let capacity = seed.len() + DEFAULT_SEED_GAP;
        let mut storage = Vec::with_capacity(capacity);
        storage.extend_from_slice(seed);
        storage.resize(capacity, T::default());
        Self {
            storage,
            gap_start: seed.len(),
            gap_end: capacity,
            growth_policy: GrowthPolicy::default(),
        }
    }

    /// Drop all content. The capacity is kept and the gap spans all of it.
    pub fn clear(&mut self) {
        self.gap_start = 0;
        self.gap_end = self.storage.len();
    }
}

impl<T> GapBuffer<T> {
    /// Logical length, i.e. the number of units excluding the gap.
    #[must_use]
    pub fn len(&self) -> usize { self.storage.len() - self.gap_len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Total number of units allocated, content plus gap.
    #[must_use]
    pub fn capacity(&self) -> usize { self.storage.len() }

    /// Number of units the buffer can absorb before it has to reallocate.
    #[must_use]
    pub fn gap_len(&self) -> usize { self.gap_end - self.gap_start }

    #[must_use]
    pub fn gap_start(&self) -> usize { self.gap_start }

    #[must_use]
    pub fn gap_end(&self) -> usize { self.gap_end }

    /// Logical position of the cursor. Always equal to [`gap_start`](Self::gap_start).
    #[must_use]
    pub fn cursor(&self) -> usize { self.gap_start }

    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy { self.growth_policy }

    pub fn set_growth_policy(&mut self, growth_policy: GrowthPolicy) {
        self.growth_policy = growth_policy;
    }

    /// Fails with [`GapBufferError::OutOfBounds`] unless `position` is in `[0, len]`.
    pub(super) fn check_position(&self, position: usize) -> GapBufferResult<()> {
        let len = self.len();
        if position > len {
            return Err(GapBufferError::OutOfBounds { position, len });
        }
        Ok(())
    }

    /// Layout invariant, checked in debug builds after every mutation.
    pub(super) fn debug_assert_invariants(&self) {
        debug_assert!(
            self.gap_start <= self.gap_end && self.gap_end <= self.storage.len(),
            "gap [{}, {}) escapes storage of {} units",
            self.gap_start,
            self.gap_end,
            self.storage.len()
        );
    }
}

impl<T: Copy + Default> Default for GapBuffer<T> {
    fn default() -> Self { Self::new() }
}

/// Two buffers are equal when their logical content is equal, regardless of where the
/// gap sits or how much capacity each one has.
impl<T: PartialEq> PartialEq for GapBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GapBuffer<T> {}
