use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Margin;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::{Frame, Terminal};

use crate::session::FormSession;
use crate::storage::KeyValueStore;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{LineEntryState, draw_line_entry};

/// Top-level application state.
pub struct App<S> {
    session: FormSession<S>,
    line_entry: LineEntryState,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates a new `App` around an initialized session.
    pub fn new(session: FormSession<S>) -> Self {
        let line_entry = LineEntryState::new(session.line_count());
        Self {
            session,
            line_entry,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .title(" linedraft ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, area);

        draw_line_entry(
            &self.line_entry,
            self.session.snapshot(),
            self.session.status(),
            frame,
            area.inner(Margin::new(2, 1)),
        );
    }

    /// Handles a key event by applying the screen's [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self.line_entry.handle_key(key, self.session.snapshot());
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Edit { index, value } => self.session.edit_field(index, value),
            Action::Submit => {
                self.session.submit();
            }
            Action::Clear => {
                self.session.clear_form();
                self.line_entry.reset_focus();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the session the app edits.
    pub fn session(&self) -> &FormSession<S> {
        &self.session
    }
}
