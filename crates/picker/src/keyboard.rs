//! Keyboard descriptor handed to the bot transport.

use serde::Serialize;

/// One button: the visible label and the callback token it sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Visible text.
    pub label: String,
    /// Encoded callback token.
    pub token: String,
}

impl Button {
    /// Creates a button.
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Ordered rows of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Creates an empty keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row.
    pub fn push_row(&mut self, row: Vec<Button>) {
        self.rows.push(row);
    }

    /// Appends several rows.
    pub fn extend_rows(&mut self, rows: impl IntoIterator<Item = Vec<Button>>) {
        self.rows.extend(rows);
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Consumes the keyboard, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<Button>> {
        self.rows
    }

    /// Iterates over every button, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Returns the last row (the navigation row of a page without
    /// additional rows).
    pub fn last_row(&self) -> Option<&[Button]> {
        self.rows.last().map(Vec::as_slice)
    }
}

/// Lays `buttons` into rows of `width`; the last row may be shorter.
pub fn rows(buttons: impl IntoIterator<Item = Button>, width: usize) -> Vec<Vec<Button>> {
    let width = width.max(1);
    let mut out: Vec<Vec<Button>> = Vec::new();
    for button in buttons {
        match out.last_mut() {
            Some(row) if row.len() < width => row.push(button),
            _ => {
                let mut row = Vec::with_capacity(width);
                row.push(button);
                out.push(row);
            }
        }
    }
    out
}
