// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scripted editing of a `char` [`GapBuffer`](crate::GapBuffer), as used by the `gbd`
//! binary. Commands are parsed from short strings like `insert:0:A`, applied one at a
//! time, and each step is recorded with the gap made visible.

// Attach sources.
pub mod edit_command;
pub mod edit_session;

// Re-export.
pub use edit_command::*;
pub use edit_session::*;
