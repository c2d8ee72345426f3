// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Contiguous gap buffer for cursor-local editing.
//!
//! A [`GapBuffer`] keeps all of its content in one [`Vec`], split in two by an unused
//! region (the gap) that sits at the cursor. Inserting at the cursor writes into the
//! gap, deleting at the cursor widens it. Neither moves any other content.
//!
//! # Module Architecture
//!
//! - `gb_core` - The struct, constructors, and layout accessors
//! - `gb_gap_ops` - Gap relocation (`shift_gap`) and growth (`grow`), plus the cursor
//!   movement built on them
//! - `gb_edit_ops` - Insert and delete, positional and cursor relative
//! - `gb_access` - Read only access: materialize, indexing, iteration, rendering
//! - `gb_config` - [`GrowthPolicy`] and [`GapBufferConfig`]
//! - `gb_error` - [`GapBufferError`]
//!
//! # Invariants
//!
//! After every public operation:
//! 1. `0 <= gap_start <= gap_end <= capacity`.
//! 2. The units in `[gap_start, gap_end)` are never read as content.
//! 3. Moving the gap never reorders, duplicates or drops a unit of content.
//! 4. The length only changes through insert and delete. The capacity only changes
//!    through growth, which happens when an insert finds the gap exhausted, or through
//!    an explicit [`GapBuffer::reserve`].
//!
//! Debug builds check the first invariant after every mutation.
//!
//! # Cost model
//!
//! | Operation                       | Cost                                  |
//! | :------------------------------ | :------------------------------------ |
//! | insert / delete at the cursor   | `O(1)`, amortized for insert          |
//! | moving the cursor by `d` units  | `O(d)`                                |
//! | growth                          | `O(capacity)`, `O(log k)` times for `k` inserts |
//! | random access                   | `O(1)`                                |

// Attach sources.
pub mod gb_access;
pub mod gb_config;
pub mod gb_core;
pub mod gb_edit_ops;
pub mod gb_error;
pub mod gb_gap_ops;

// Re-export.
pub use gb_access::*;
pub use gb_config::*;
pub use gb_core::*;
pub use gb_error::*;
