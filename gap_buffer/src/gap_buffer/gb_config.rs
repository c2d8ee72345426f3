// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Construction time configuration for [`GapBuffer`].
//!
//! [`GapBuffer`]: super::GapBuffer

use std::str::FromStr;

/// Capacity used by [`GapBuffer::new`] and [`GapBufferConfig::default`].
///
/// [`GapBuffer::new`]: super::GapBuffer::new
pub const DEFAULT_CAPACITY: usize = 32;

/// Size of the gap that [`GapBuffer::from_seed`] leaves after the seed content.
///
/// [`GapBuffer::from_seed`]: super::GapBuffer::from_seed
pub const DEFAULT_SEED_GAP: usize = 8;

/// How many units of gap to add when an insert finds the gap exhausted.
///
/// Both policies always add at least one unit, so a buffer created with zero capacity
/// can still accept inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Add as many units as the buffer currently holds, doubling its capacity. Gives
    /// amortized O(1) inserts over a long run of typing.
    #[default]
    Doubling,
    /// Add a fixed number of units every time.
    Fixed(usize),
}

impl GrowthPolicy {
    /// Size of the next gap for a buffer holding `len` units of content. When the gap
    /// is exhausted `len` is also the capacity.
    #[must_use]
    pub fn next_gap_len(self, len: usize) -> usize {
        match self {
            GrowthPolicy::Doubling => len.max(1),
            GrowthPolicy::Fixed(amount) => amount.max(1),
        }
    }
}

/// Parses `doubling` or `fixed:<n>`. Used by the `gbd` CLI.
impl FromStr for GrowthPolicy {
    type Err = miette::Report;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once(':') {
            None if input.eq_ignore_ascii_case("doubling") => Ok(GrowthPolicy::Doubling),
            Some((kind, amount)) if kind.eq_ignore_ascii_case("fixed") => {
                let amount = amount.parse::<usize>().map_err(|err| {
                    miette::miette!("Invalid fixed growth amount '{amount}': {err}")
                })?;
                Ok(GrowthPolicy::Fixed(amount))
            }
            _ => Err(miette::miette!(
                help = "Use `doubling` or `fixed:<n>`",
                "Unknown growth policy '{input}'"
            )),
        }
    }
}

/// Knobs for building a [`GapBuffer`] with [`GapBuffer::with_config`].
///
/// ```
/// use r3bl_gap_buffer::{GapBuffer, GapBufferConfig, GrowthPolicy};
///
/// let config = GapBufferConfig {
///     initial_capacity: 4,
///     growth_policy: GrowthPolicy::Fixed(16),
/// };
/// let buffer = GapBuffer::with_config(config, &['a', 'b']).unwrap();
/// assert_eq!(buffer.capacity(), 4);
/// assert_eq!(buffer.len(), 2);
/// ```
///
/// [`GapBuffer`]: super::GapBuffer
/// [`GapBuffer::with_config`]: super::GapBuffer::with_config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapBufferConfig {
    pub initial_capacity: usize,
    pub growth_policy: GrowthPolicy,
}

impl Default for GapBufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_policy: GrowthPolicy::default(),
        }
    }
}

impl From<GrowthPolicy> for GapBufferConfig {
    fn from(growth_policy: GrowthPolicy) -> Self {
        Self {
            growth_policy,
            ..Default::default()
        }
    }
}
