//! Scripted walkthrough of [`SinglyLinkedList`] operations.
//!
//! The walkthrough builds a list from the configured values and then
//! prepends, deletes, reverses, searches and inserts, logging each step
//! and recording the rendered list after it.
//!
//! # Example
//!
//! ```rust
//! use walkthrough::{Config, Style, run};
//!
//! let config = Config {
//!     values: vec![1, 2, 3],
//!     style: Style::Brackets,
//!     json: false,
//! };
//! let lines = run(&config).unwrap();
//! assert_eq!(lines.last().map(String::as_str), Some("[3, 9, 1, 0]"));
//! ```

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use singly::linked::{InsertError, SinglyLinkedList};

/// Value inserted by the positional steps.
const INSERTED: i32 = 9;
/// Value looked up to demonstrate a failed search.
const MISSING: i32 = 99;
/// Position requested by the rejected insertion step.
const FAR_POSITION: usize = 99;

/// How the list is rendered after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// `[1, 2, 3]`
    Brackets,
    /// `1 -> 2 -> 3 -> None`
    #[default]
    Arrows,
}

impl Style {
    /// Renders `list` in this style.
    pub fn render<T: Display>(self, list: &SinglyLinkedList<T>) -> String {
        match self {
            Self::Brackets => list.to_string(),
            Self::Arrows => list.arrows().to_string(),
        }
    }
}

/// Command line configuration of the walkthrough.
#[derive(Debug, Clone, Parser)]
#[command(name = "walkthrough")]
#[command(about = "Replays the singly linked list operations step by step")]
pub struct Config {
    /// Initial values, appended in order
    #[arg(long, value_delimiter = ',', default_value = "1,2,3", allow_hyphen_values = true)]
    pub values: Vec<i32>,

    /// Rendering style of the list
    #[arg(long, value_enum, default_value_t = Style::Arrows)]
    pub style: Style,

    /// Emit logs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the walkthrough and returns the rendering after every mutating step.
///
/// # Errors
///
/// Returns an error if an insertion that is always in bounds for the
/// current list is rejected.
pub fn run(config: &Config) -> Result<Vec<String>> {
    let style = config.style;
    let mut lines = Vec::new();
    let mut record = |step: &str, list: &SinglyLinkedList<i32>| {
        let rendered = style.render(list);
        tracing::info!(step, list = %rendered, "step complete");
        lines.push(rendered);
    };

    let mut list = SinglyLinkedList::new();
    for &value in &config.values {
        list.append(value);
    }
    record("append", &list);

    list.prepend(0);
    record("prepend", &list);

    if let Some(value) = config.values.get(1) {
        let removed = list.delete(value);
        tracing::debug!(value, removed = removed.is_some(), "delete");
    }
    record("delete", &list);

    list.reverse();
    record("reverse", &list);

    tracing::info!(size = list.size(), "size");
    if let Some(first) = config.values.first() {
        tracing::info!(value = first, found = list.find(first), "find");
    }
    tracing::info!(value = MISSING, found = list.find(&MISSING), "find");

    list.insert_at_position(1, INSERTED)
        .context("inserting after the head of a non-empty list")?;
    record("insert", &list);

    match list.insert_at_position(FAR_POSITION, INSERTED) {
        Ok(()) => tracing::debug!(position = FAR_POSITION, "insert accepted"),
        Err(error @ InsertError::OutOfBounds { .. }) => {
            tracing::warn!(%error, "insert rejected");
        }
    }
    record("insert_far", &list);

    if let Some(lowest) = list.lowest() {
        tracing::info!(lowest, "lowest");
    }

    Ok(lines)
}
