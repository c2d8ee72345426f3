// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Formatter, str::FromStr};

use strum_macros::{Display, EnumString};

use crate::{GapBuffer, GapBufferResult};

/// The verb at the front of an [`EditCommand`], eg: `insert` in `insert:0:A`.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommandVerb {
    Insert,
    Type,
    Delete,
    Cursor,
}

/// One edit applied to a `char` [`GapBuffer`]. The textual form is what the `gbd` CLI
/// accepts on its command line:
///
/// | Text                   | Command                                   |
/// | :--------------------- | :---------------------------------------- |
/// | `insert:<pos>:<char>`  | [`GapBuffer::insert`]                     |
/// | `type:<pos>:<text>`    | [`GapBuffer::insert_slice`]               |
/// | `delete:<pos>:<count>` | [`GapBuffer::delete`]                     |
/// | `cursor:<pos>`         | [`GapBuffer::set_cursor`]                 |
///
/// ```
/// use r3bl_gap_buffer::EditCommand;
///
/// let command: EditCommand = "type:0:a:b".parse().unwrap();
/// assert_eq!(
///     command,
///     EditCommand::Type { position: 0, text: "a:b".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert { position: usize, unit: char },
    Type { position: usize, text: String },
    Delete { position: usize, count: usize },
    Cursor { position: usize },
}

impl EditCommand {
    #[must_use]
    pub fn verb(&self) -> CommandVerb {
        match self {
            EditCommand::Insert { .. } => CommandVerb::Insert,
            EditCommand::Type { .. } => CommandVerb::Type,
            EditCommand::Delete { .. } => CommandVerb::Delete,
            EditCommand::Cursor { .. } => CommandVerb::Cursor,
        }
    }

    /// Run this command against `buffer`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying [`GapBuffer`] operation returns. The buffer is left
    /// unchanged on error.
    pub fn apply(&self, buffer: &mut GapBuffer<char>) -> GapBufferResult<()> {
        match self {
            EditCommand::Insert { position, unit } => buffer.insert(*position, *unit),
            EditCommand::Type { position, text } => {
                let units: Vec<char> = text.chars().collect();
                buffer.insert_slice(*position, &units)
            }
            EditCommand::Delete { position, count } => buffer.delete(*position, *count),
            EditCommand::Cursor { position } => buffer.set_cursor(*position),
        }
    }
}

impl std::fmt::Display for EditCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verb = self.verb();
        match self {
            EditCommand::Insert { position, unit } => write!(f, "{verb}:{position}:{unit}"),
            EditCommand::Type { position, text } => write!(f, "{verb}:{position}:{text}"),
            EditCommand::Delete { position, count } => {
                write!(f, "{verb}:{position}:{count}")
            }
            EditCommand::Cursor { position } => write!(f, "{verb}:{position}"),
        }
    }
}

impl FromStr for EditCommand {
    type Err = miette::Report;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (verb, args) = input.split_once(':').ok_or_else(|| malformed(input))?;
        let verb = CommandVerb::from_str(verb).map_err(|err: strum::ParseError| {
            miette::miette!(
                help = "Known commands are `insert`, `type`, `delete`, and `cursor`",
                "Unknown command '{verb}' in '{input}': {err}"
            )
        })?;

        match verb {
            CommandVerb::Insert => {
                let (position, unit) = args.split_once(':').ok_or_else(|| malformed(input))?;
                let mut chars = unit.chars();
                let (Some(unit), None) = (chars.next(), chars.next()) else {
                    return Err(miette::miette!(
                        help = "Use `type:<pos>:<text>` to insert more than one character",
                        "Expected exactly one character in '{input}'"
                    ));
                };
                Ok(EditCommand::Insert {
                    position: parse_number(position, input)?,
                    unit,
                })
            }
            CommandVerb::Type => {
                let (position, text) = args.split_once(':').ok_or_else(|| malformed(input))?;
                Ok(EditCommand::Type {
                    position: parse_number(position, input)?,
                    text: text.to_string(),
                })
            }
            CommandVerb::Delete => {
                let (position, count) = args.split_once(':').ok_or_else(|| malformed(input))?;
                Ok(EditCommand::Delete {
                    position: parse_number(position, input)?,
                    count: parse_number(count, input)?,
                })
            }
            CommandVerb::Cursor => Ok(EditCommand::Cursor {
                position: parse_number(args, input)?,
            }),
        }
    }
}

fn malformed(input: &str) -> miette::Report {
    miette::miette!(
        help = "Use `insert:<pos>:<char>`, `type:<pos>:<text>`, `delete:<pos>:<count>`, or `cursor:<pos>`",
        "Malformed command '{input}'"
    )
}

fn parse_number(text: &str, input: &str) -> miette::Result<usize> {
    text.parse::<usize>()
        .map_err(|err| miette::miette!("Invalid number '{text}' in '{input}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("insert:0:A", EditCommand::Insert { position: 0, unit: 'A' })]
    #[test_case("INSERT:3:é", EditCommand::Insert { position: 3, unit: 'é' })]
    #[test_case("insert:1::", EditCommand::Insert { position: 1, unit: ':' })]
    #[test_case("type:2:hello world", EditCommand::Type { position: 2, text: "hello world".to_string() })]
    #[test_case("type:0:", EditCommand::Type { position: 0, text: String::new() })]
    #[test_case("delete:0:1", EditCommand::Delete { position: 0, count: 1 })]
    #[test_case("cursor:7", EditCommand::Cursor { position: 7 })]
    fn test_parse(input: &str, expected: EditCommand) {
        assert_eq!(input.parse::<EditCommand>().unwrap(), expected);
    }

    #[test_case("insert")]
    #[test_case("insert:0")]
    #[test_case("insert:0:AB")]
    #[test_case("insert:x:A")]
    #[test_case("delete:0")]
    #[test_case("delete:-1:2")]
    #[test_case("cursor:")]
    #[test_case("jump:3")]
    fn test_parse_rejects(input: &str) {
        assert!(input.parse::<EditCommand>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for input in ["insert:0:A", "type:2:a b", "delete:4:10", "cursor:1"] {
            let command: EditCommand = input.parse().unwrap();
            assert_eq!(command.to_string(), input);
        }
    }

    #[test]
    fn test_apply() {
        let mut buffer = GapBuffer::<char>::try_new(2, &[]).unwrap();
        for input in ["insert:0:A", "insert:0:B", "type:2:CD", "delete:0:1", "cursor:0"] {
            let command: EditCommand = input.parse().unwrap();
            command.apply(&mut buffer).unwrap();
        }
        assert_eq!(buffer.to_string(), "ACD");
        assert_eq!(buffer.cursor(), 0);

        let result = EditCommand::Cursor { position: 4 }.apply(&mut buffer);
        assert!(result.is_err());
    }
}
