//! Event scripts replayed by `sliceroute route`.
//!
//! One event per line:
//!
//! ```text
//! # comment
//! intermediates 1
//! wires 2
//! select 0 0
//! select 4 3
//! segment
//! select 5 3
//! undo
//! clear
//! ```

use sliceroute_common::SiteCoord;
use sliceroute_path::SketchEvent;

/// A script line that could not be understood.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The first word is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number.
        line: usize,
        /// The offending word.
        command: String,
    },
    /// A command got the wrong number of arguments.
    #[error("line {line}: '{command}' takes {expected} argument(s), got {found}")]
    WrongArity {
        /// 1-based line number.
        line: usize,
        /// The command word.
        command: String,
        /// Arguments the command takes.
        expected: usize,
        /// Arguments present.
        found: usize,
    },
    /// An argument is not a non-negative integer in range.
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending argument.
        value: String,
    },
}

/// An event together with the line it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based line number.
    pub line: usize,
    /// The parsed event.
    pub event: SketchEvent,
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let event = parse_line(line, content)?;
        steps.push(ScriptStep { line, event });
    }
    Ok(steps)
}

fn parse_line(line: usize, content: &str) -> Result<SketchEvent, ScriptError> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let arity = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::WrongArity {
                line,
                command: command.to_string(),
                expected,
                found: args.len(),
            })
        }
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "select" => {
            arity(2)?;
            let x = number(line, args[0])?;
            let y = number(line, args[1])?;
            SketchEvent::Select(SiteCoord::new(x, y))
        }
        "undo" => {
            arity(0)?;
            SketchEvent::Undo
        }
        "segment" => {
            arity(0)?;
            SketchEvent::NewSegment
        }
        "clear" => {
            arity(0)?;
            SketchEvent::Clear
        }
        "intermediates" => {
            arity(1)?;
            SketchEvent::SetIntermediateCount(number(line, args[0])?)
        }
        "wires" => {
            arity(1)?;
            SketchEvent::SetParallelWires(number(line, args[0])?)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            })
        }
    };
    Ok(event)
}

fn number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}
