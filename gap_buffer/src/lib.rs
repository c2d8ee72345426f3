// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_gap_buffer
//!
//! A contiguous gap buffer for text editing. Content lives in one allocation, with an
//! unused region (the gap) parked at the cursor. Edits at the cursor write into the gap
//! or widen it, so typing and backspacing are `O(1)`. Moving the cursor costs the
//! distance moved. When an insert finds the gap exhausted the storage grows, by
//! doubling unless configured otherwise.
//!
//! ```
//! use r3bl_gap_buffer::GapBuffer;
//!
//! let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
//! for unit in ['A', 'B', 'C', 'D', 'E', 'F'] {
//!     buffer.insert(0, unit).unwrap();
//! }
//! assert_eq!(buffer.to_string(), "FEDCBA");
//! assert_eq!(buffer.capacity(), 8);
//! ```
//!
//! The buffer is generic over its unit type. Use `u8` for bytes or `char` for code
//! points. It never interprets encodings, so a multi-byte sequence in a `u8` buffer is
//! just several units.
//!
//! # Modules
//!
//! - [`gap_buffer`] - [`GapBuffer`], its configuration and its errors.
//! - [`log`] - [`TracingConfig`] to route the buffer's `tracing` events to the display
//!   or a file.
//! - [`session`] - [`EditCommand`] and [`EditSession`], the scripted editing that backs
//!   the `gbd` binary.
//!
//! # Errors
//!
//! Buffer operations return [`GapBufferResult`]. [`GapBufferError`] implements
//! [`miette::Diagnostic`], so it can be returned straight from a
//! `miette::Result` returning function with `?`.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enables or disables `tracing` events for the gap relocation, growth, and edit
/// session code paths. The events are still filtered by the installed subscriber.
pub const DEBUG_GAP_BUFFER: bool = true;

// Attach sources.
pub mod gap_buffer;
pub mod log;
pub mod session;

// Re-export.
pub use gap_buffer::*;
pub use log::*;
pub use session::*;
