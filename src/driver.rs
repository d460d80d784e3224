//! The demo script.
//!
//! Runs a fixed sequence of steps over one [`NamedRecord`], the sequence extensions and a byte view,
//! writing one line of output per step. The sink is any [`Write`], so tests can capture the whole run.
//!
//! ## Steps
//!
//! `Init → NameSet → NumbersInitialized → NumbersAppended → ExtensionsDemoed → SumComputed → Done`
//!
//! There is no branching, retry or cancellation. The first error ends the run; lines already written stay
//! written.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::{self, Write};

use miette::Diagnostic;
use thiserror::Error;

use showcase_core::{CoreError, NamedRecord, get_at, is_empty, sum_bytes, unbound_type_name};

/// First line of the output.
pub const BANNER: &str = "=== C# 13 Console Demo ===";
/// Last line of the output.
pub const COMPLETE: &str = "Demo complete.";

/// Errors that end a demo run.
#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] CoreError),

    #[error("failed to write demo output: {0}")]
    #[diagnostic(code(showcase::io))]
    Io(#[from] io::Error),
}

/// Position of the driver in its fixed script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Init,
    NameSet,
    NumbersInitialized,
    NumbersAppended,
    ExtensionsDemoed,
    SumComputed,
    Done,
}

impl Step {
    /// The step that follows this one, or `None` at `Done`.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Init => Some(Step::NameSet),
            Step::NameSet => Some(Step::NumbersInitialized),
            Step::NumbersInitialized => Some(Step::NumbersAppended),
            Step::NumbersAppended => Some(Step::ExtensionsDemoed),
            Step::ExtensionsDemoed => Some(Step::SumComputed),
            Step::SumComputed => Some(Step::Done),
            Step::Done => None,
        }
    }
}

/// Literal inputs fed to the script.
///
/// The binary always uses [`DemoScript::default`]. The builders exist so tests can drive the failure path.
#[derive(Debug, Clone)]
pub struct DemoScript {
    /// Raw name passed to `set_name` (before trimming)
    pub name: String,
    /// Value appended to the record's numbers
    pub number: i32,
    /// Words fed to the sequence extensions
    pub words: Vec<String>,
    /// Position looked up with `get_at`
    pub word_index: i64,
    /// Bytes lent to the summation routine
    pub buffer: Vec<u8>,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            name: "   Alice   ".to_string(),
            number: 42,
            words: ["zero", "one", "two"].map(String::from).to_vec(),
            word_index: 1,
            buffer: vec![1, 2, 3, 4, 5],
        }
    }
}

impl DemoScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the words and the looked-up position
    pub fn with_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>, index: i64) -> Self {
        self.words = words.into_iter().map(Into::into).collect();
        self.word_index = index;
        self
    }

    /// Set the byte buffer
    pub fn with_buffer(mut self, buffer: impl Into<Vec<u8>>) -> Self {
        self.buffer = buffer.into();
        self
    }
}

/// Run the default script, writing its output to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> Result<(), DemoError> {
    run_script(&DemoScript::default(), out)
}

/// Run `script`, writing its output to `out`.
///
/// ## Errors
/// - [`DemoError::Core`] if the name fails validation or the word lookup is out of range.
/// - [`DemoError::Io`] if writing to `out` fails.
#[tracing::instrument(skip_all, fields(word_count = script.words.len(), buffer_len = script.buffer.len()))]
pub fn run_script<W: Write>(script: &DemoScript, out: &mut W) -> Result<(), DemoError> {
    let mut demo = Demo { out, step: Step::Init };
    demo.run(script)?;
    demo.out.flush()?;
    Ok(())
}

struct Demo<'w, W: Write> {
    out: &'w mut W,
    step: Step,
}

impl<W: Write> Demo<'_, W> {
    fn advance(&mut self, to: Step) {
        debug_assert_eq!(self.step.next(), Some(to), "steps run in a fixed order");
        tracing::debug!(from = ?self.step, to = ?to, "step");
        self.step = to;
    }

    fn run(&mut self, script: &DemoScript) -> Result<(), DemoError> {
        writeln!(self.out, "{BANNER}\n")?;

        let seq_name = unbound_type_name::<Vec<i32>>();
        writeln!(self.out, "nameof({seq_name}<>) => {seq_name}")?;

        let mut record = NamedRecord::with_name(&script.name)?;
        self.advance(Step::NameSet);
        writeln!(self.out, "Normalized Name: '{}'", record.name())?;

        let numbers = record.ensure_numbers();
        self.advance(Step::NumbersInitialized);
        numbers.push(script.number);
        self.advance(Step::NumbersAppended);
        let joined = record.numbers().map(join_numbers).unwrap_or_default();
        writeln!(self.out, "Numbers: {joined}")?;

        writeln!(self.out, "IsEmpty: {}", display_bool(is_empty(&script.words)))?;
        let word = get_at(&script.words, script.word_index)?;
        writeln!(self.out, "words[{}] => {word}", script.word_index)?;
        self.advance(Step::ExtensionsDemoed);

        print_sum(&mut *self.out, &script.buffer)?;
        self.advance(Step::SumComputed);

        writeln!(self.out, "\n{COMPLETE}")?;
        self.advance(Step::Done);
        Ok(())
    }
}

fn print_sum<W: Write>(out: &mut W, data: &[u8]) -> io::Result<()> {
    writeln!(out, "Sum of bytes = {}", sum_bytes(data))
}

fn join_numbers(numbers: &[i32]) -> String {
    numbers.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
}

/// Booleans print capitalized (`True`/`False`).
fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
