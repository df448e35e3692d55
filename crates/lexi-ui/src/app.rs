use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use lexi_core::LookupState;
use lexi_types::AppEvent;
use ratatui::layout::{Position, Rect};

use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    SearchButton,
}

/// UI-side state: the lookup widget plus terminal-only concerns
pub struct UiApp {
    pub lookup: LookupState,
    pub input: InputState,
    pub focus: Focus,
    pub placeholder: String,
    pub backend_ready: bool,

    // Hit areas from the last draw
    pub input_area: Rect,
    pub button_area: Rect,

    pub should_quit: bool,
}

impl UiApp {
    pub fn new(placeholder: String) -> Self {
        Self {
            lookup: LookupState::new(),
            input: InputState::default(),
            focus: Focus::Input,
            placeholder,
            backend_ready: false,
            input_area: Rect::default(),
            button_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Handle a key press; returns an event for the backend, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.quit();
            }
            KeyCode::Esc => return self.quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::SearchButton,
                    Focus::SearchButton => Focus::Input,
                };
                return None;
            }
            KeyCode::Enter => return self.submit(),
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::SearchButton => match key.code {
                KeyCode::Char(' ') => self.submit(),
                _ => None,
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c);
                true
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => {
                self.input.left();
                false
            }
            KeyCode::Right => {
                self.input.right();
                false
            }
            KeyCode::Home => {
                self.input.home();
                false
            }
            KeyCode::End => {
                self.input.end();
                false
            }
            _ => false,
        };

        if changed {
            self.lookup.input_changed(self.input.text.clone());
        }

        None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<AppEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let position = Position::new(mouse.column, mouse.row);
        if self.button_area.contains(position) {
            self.focus = Focus::SearchButton;
            return self.submit();
        }
        if self.input_area.contains(position) {
            self.focus = Focus::Input;
        }

        None
    }

    /// Apply an event coming from the backend
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::LookupFinished { id, outcome } => {
                if !self.lookup.complete(id, outcome) {
                    tracing::debug!("[UI] Ignored superseded result {}", id);
                }
            }
            AppEvent::BackendReady => {
                self.backend_ready = true;
            }
            AppEvent::Quit => {
                self.should_quit = true;
            }
            AppEvent::Lookup(_) => {}
        }
    }

    fn submit(&mut self) -> Option<AppEvent> {
        let request = self.lookup.submit()?;
        tracing::debug!("[UI] Submitting {} '{}'", request.id, request.word);
        Some(AppEvent::Lookup(request))
    }

    fn quit(&mut self) -> Option<AppEvent> {
        self.should_quit = true;
        Some(AppEvent::Quit)
    }
}
