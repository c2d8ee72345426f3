// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_GAP_BUFFER, EditCommand, GapBuffer, GapBufferResult};

/// A `char` [`GapBuffer`] plus a transcript of its layout after every edit. This is
/// what drives the `gbd` CLI.
///
/// ```
/// use r3bl_gap_buffer::{EditSession, GapBuffer};
///
/// let mut session = EditSession::new(GapBuffer::try_new(2, &[]).unwrap());
/// session.apply(&"insert:0:A".parse().unwrap()).unwrap();
/// session.apply(&"insert:0:B".parse().unwrap()).unwrap();
///
/// assert_eq!(session.transcript().last().unwrap(), "insert:0:B  B[]A  gap_start=1, gap_end=1");
/// ```
#[derive(Debug, Clone)]
pub struct EditSession {
    buffer: GapBuffer<char>,
    transcript: Vec<String>,
}

impl EditSession {
    #[must_use]
    pub fn new(buffer: GapBuffer<char>) -> Self {
        let transcript = vec![describe_layout("start", &buffer)];
        Self { buffer, transcript }
    }

    #[must_use]
    pub fn buffer(&self) -> &GapBuffer<char> { &self.buffer }

    /// One line per step, starting with the initial layout.
    #[must_use]
    pub fn transcript(&self) -> &[String] { &self.transcript }

    /// Apply `command` and record the resulting layout. Returns the recorded line.
    ///
    /// # Errors
    ///
    /// Returns the buffer error. Nothing is recorded in that case.
    pub fn apply(&mut self, command: &EditCommand) -> GapBufferResult<&str> {
        if let Err(err) = command.apply(&mut self.buffer) {
            DEBUG_GAP_BUFFER.then(|| {
                // % is Display, ? is Debug.
                tracing::warn!(message = "⛔ edit rejected", command = %command, err = ?err);
            });
            return Err(err);
        }

        let line = describe_layout(&command.to_string(), &self.buffer);
        DEBUG_GAP_BUFFER.then(|| {
            tracing::debug!(message = "✏️ edit applied", line = %line);
        });
        self.transcript.push(line);
        Ok(self.transcript.last().map_or("", String::as_str))
    }

    /// Apply every command in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first buffer error. Commands before it stay applied.
    pub fn apply_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a EditCommand>,
    ) -> GapBufferResult<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn into_buffer(self) -> GapBuffer<char> { self.buffer }
}

/// `<label>  <content with gap>  gap_start=<n>, gap_end=<n>`.
#[must_use]
pub fn describe_layout(label: &str, buffer: &GapBuffer<char>) -> String {
    format!(
        "{label}  {}  gap_start={}, gap_end={}",
        buffer.render_with_gap(),
        buffer.gap_start(),
        buffer.gap_end()
    )
}
