//! Numbered single-line inputs with focus management.
//!
//! The widget holds labels and focus only; the text itself lives in the
//! session's [`FormSnapshot`](crate::model::FormSnapshot) and is passed in
//! at draw time.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single input row within a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label shown to the left of the input.
    pub label: String,
    /// Hint shown in place of an empty value.
    pub placeholder: String,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }
}

/// A column of inputs with one focused row.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Creates `count` fields labelled `1.` through `count.`.
    pub fn numbered(count: usize) -> Self {
        let fields = (1..=count)
            .map(|n| FormField::new(format!("{n}."), format!("Enter line {n}...")))
            .collect();
        Self::new(fields)
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus `delta` rows down (negative moves up), wrapping at both ends.
    pub fn step_focus(&mut self, delta: isize) {
        let Ok(len) = isize::try_from(self.fields.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        // `focus < len`, so the cast back cannot truncate.
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    /// Moves focus to `index`. Out-of-bounds indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders the form within `area`, one row per field.
///
/// `values[i]` is shown in row `i`; missing values render as empty.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, values: &[String], frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let rows = Layout::vertical(form.fields.iter().map(|_| Constraint::Length(1))).split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let Some(&row) = rows.get(i) else { break };
        let is_focused = i == form.focus;
        let value = values.get(i).map(String::as_str).unwrap_or("");

        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>label_width$} ", field.label),
            label_style,
        )];
        if value.is_empty() && !is_focused {
            spans.push(Span::styled(
                field.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(value));
        }
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}
