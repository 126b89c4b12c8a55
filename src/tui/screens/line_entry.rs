//! Line entry screen: the numbered inputs, status, and key help.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::{FormSnapshot, Status};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{Form, draw_form, draw_status_bar};

const TITLE: &str = "Project Data Entry";
const SUBTITLE: &str = "Your progress is saved automatically. Feel free to quit and come back.";
const KEY_HELP: &str = "Tab/↓ next  Shift+Tab/↑ prev  Enter submit  Ctrl+R clear  Esc quit";

/// State for the line entry screen.
#[derive(Debug, Clone)]
pub struct LineEntryState {
    form: Form,
}

impl LineEntryState {
    /// Creates the screen for `line_count` lines, focused on the first.
    pub fn new(line_count: usize) -> Self {
        Self {
            form: Form::numbered(line_count),
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns focus to the first line.
    pub fn reset_focus(&mut self) {
        self.form.set_focus(0);
    }

    /// Appends `ch` to the focused line.
    fn insert_char(&self, ch: char, lines: &FormSnapshot) -> Action {
        let index = self.form.focus();
        let Some(current) = lines.line(index) else {
            return Action::None;
        };
        let mut value = current.to_string();
        value.push(ch);
        Action::Edit { index, value }
    }

    /// Removes the last character of the focused line.
    ///
    /// An already-empty line produces no edit.
    fn delete_char(&self, lines: &FormSnapshot) -> Action {
        let index = self.form.focus();
        match lines.line(index) {
            Some(current) if !current.is_empty() => {
                let mut value = current.to_string();
                value.pop();
                Action::Edit { index, value }
            }
            _ => Action::None,
        }
    }
}

impl ScreenState for LineEntryState {
    fn handle_key(&mut self, key: KeyEvent, lines: &FormSnapshot) -> Action {
        // AltGr arrives as Ctrl+Alt and carries a printable character.
        let is_control = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        if is_control {
            return match key.code {
                KeyCode::Char('r') => Action::Clear,
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.step_focus(1);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.step_focus(-1);
                Action::None
            }
            KeyCode::Backspace => self.delete_char(lines),
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) => self.insert_char(ch, lines),
            _ => Action::None,
        }
    }
}

/// Renders the line entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_line_entry(
    state: &LineEntryState,
    lines: &FormSnapshot,
    status: Status,
    frame: &mut Frame,
    area: Rect,
) {
    let form_height = u16::try_from(state.form.fields().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let [title_area, subtitle_area, status_area, form_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Max(form_height),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        subtitle_area,
    );
    draw_status_bar(status, frame, status_area);
    draw_form(&state.form, lines.lines(), frame, form_area);
    frame.render_widget(
        Paragraph::new(Line::styled(KEY_HELP, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn lines() -> FormSnapshot {
        FormSnapshot::blank(3).with_line(0, "ab")
    }

    #[test]
    fn char_appends_to_focused_line() {
        let mut state = LineEntryState::new(3);
        let action = state.handle_key(press(KeyCode::Char('c')), &lines());
        assert_eq!(
            action,
            Action::Edit {
                index: 0,
                value: "abc".into()
            }
        );
    }

    #[test]
    fn char_on_other_line_edits_that_line() {
        let mut state = LineEntryState::new(3);
        state.handle_key(press(KeyCode::Tab), &lines());
        let action = state.handle_key(press(KeyCode::Char('z')), &lines());
        assert_eq!(
            action,
            Action::Edit {
                index: 1,
                value: "z".into()
            }
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut state = LineEntryState::new(3);
        let action = state.handle_key(press(KeyCode::Backspace), &lines());
        assert_eq!(
            action,
            Action::Edit {
                index: 0,
                value: "a".into()
            }
        );
    }

    #[test]
    fn backspace_on_empty_line_is_noop() {
        let mut state = LineEntryState::new(3);
        state.handle_key(press(KeyCode::Down), &lines());
        assert_eq!(
            state.handle_key(press(KeyCode::Backspace), &lines()),
            Action::None
        );
    }

    #[test]
    fn navigation_keys_move_focus() {
        let mut state = LineEntryState::new(3);
        state.handle_key(press(KeyCode::Down), &lines());
        state.handle_key(press(KeyCode::Tab), &lines());
        assert_eq!(state.form().focus(), 2);
        state.handle_key(press(KeyCode::Up), &lines());
        assert_eq!(state.form().focus(), 1);
        state.handle_key(press(KeyCode::BackTab), &lines());
        state.handle_key(press(KeyCode::BackTab), &lines());
        assert_eq!(state.form().focus(), 2);
    }

    #[test]
    fn enter_submits() {
        let mut state = LineEntryState::new(3);
        assert_eq!(
            state.handle_key(press(KeyCode::Enter), &lines()),
            Action::Submit
        );
    }

    #[test]
    fn ctrl_r_clears() {
        let mut state = LineEntryState::new(3);
        assert_eq!(state.handle_key(ctrl('r'), &lines()), Action::Clear);
    }

    #[test]
    fn altgr_character_is_typed() {
        let mut state = LineEntryState::new(3);
        let altgr = KeyEvent {
            code: KeyCode::Char('@'),
            modifiers: KeyModifiers::CONTROL | KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            state.handle_key(altgr, &lines()),
            Action::Edit {
                index: 0,
                value: "ab@".into()
            }
        );
    }

    #[test]
    fn ctrl_other_is_ignored() {
        let mut state = LineEntryState::new(3);
        assert_eq!(state.handle_key(ctrl('x'), &lines()), Action::None);
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut state = LineEntryState::new(3);
        assert_eq!(state.handle_key(press(KeyCode::Esc), &lines()), Action::Quit);
        assert_eq!(state.handle_key(ctrl('c'), &lines()), Action::Quit);
    }

    #[test]
    fn reset_focus_returns_to_first_line() {
        let mut state = LineEntryState::new(3);
        state.handle_key(press(KeyCode::Tab), &lines());
        state.reset_focus();
        assert_eq!(state.form().focus(), 0);
    }

    #[test]
    fn draw_shows_title_status_and_lines() {
        let state = LineEntryState::new(3);
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| draw_line_entry(&state, &lines(), Status::Saved, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Project Data Entry"));
        assert!(output.contains("Status: Progress saved automatically."));
        assert!(output.contains("1. ab"));
        assert!(output.contains("Enter line 3..."));
    }
}
