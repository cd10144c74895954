//! In-session audit trail of mutating operations.

use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::{DateTime, Local};
use std::fmt;

const MAX_OP_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Del,
    Clear,
    Export,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Del => "del",
            Operation::Clear => "clear",
            Operation::Export => "export",
        }
    }

    fn colour(&self) -> Colour {
        match self {
            Operation::Add => Colour::Green,
            Operation::Del => Colour::Red,
            Operation::Clear => Colour::RGB(255, 153, 51),
            Operation::Export => Colour::Blue,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub at: DateTime<Local>,
    pub operation: Operation,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        operation: Operation,
        target: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.records.push(HistoryRecord {
            at: Local::now(),
            operation,
            target: target.into(),
            message: message.into(),
        });
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render one line per record, operation coloured and padded to a common width.
    pub fn render(&self) -> Vec<String> {
        let rows: Vec<(usize, String, Operation, String, &str)> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let op_target = if r.target.is_empty() {
                    r.operation.to_string()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                (
                    i + 1,
                    r.at.format("%FT%T%:z").to_string(),
                    r.operation,
                    op_target,
                    r.message.as_str(),
                )
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows.len().to_string().len();

        rows.into_iter()
            .map(|(id, date, op, op_target, message)| {
                let visible = truncate(&op_target, MAX_OP_WIDTH);
                let coloured = match visible.split_once(' ') {
                    Some((word, rest)) => format!("{} {}", op.colour().paint(word), rest),
                    None => op.colour().paint(visible.as_str()).to_string(),
                };
                let visible_w = strip_ansi(&coloured).chars().count();
                let padding = " ".repeat(op_w.saturating_sub(visible_w));

                format!("{id:>id_w$}: {date} | {coloured}{padding} => {message}")
            })
            .collect()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
