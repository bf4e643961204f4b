//! Keyboard and paste handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};
use crate::models::{AnswerValue, Field, FieldKind};
use crate::state::ViewPhase;

impl App {
    /// Handle a key press. Every key marks the app dirty.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Loading | Screen::NotFound => {
                if is_quit_key(&key) {
                    self.quit();
                }
            }
            Screen::Wizard => match self.phase() {
                Some(ViewPhase::Active) => self.handle_wizard_key(key),
                Some(ViewPhase::Submitted) => self.handle_submitted_key(key),
                Some(ViewPhase::Closed(_)) | None => {
                    if is_quit_key(&key) {
                        self.quit();
                    }
                }
            },
        }
    }

    /// Bracketed paste goes into the focused text field, filtered like typing.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Wizard || self.submitting {
            return;
        }
        if self.phase() != Some(ViewPhase::Active) {
            return;
        }
        let Some(field) = self.focused_field() else {
            return;
        };
        if !field.kind.is_typed() {
            return;
        }

        let accepted: String = text
            .chars()
            .map(|c| if c == '\r' { '\n' } else { c })
            .filter(|c| field.kind.accepts_char(*c))
            .collect();
        if !accepted.is_empty() {
            self.edit_text(&field, |value| value.push_str(&accepted));
            self.mark_dirty();
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.code == KeyCode::Esc {
            self.quit();
            return;
        }
        if self.submitting {
            return;
        }

        let field_count = self.current_fields().len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next_field(field_count),
            KeyCode::BackTab | KeyCode::Up => self.focus.prev_field(field_count),
            KeyCode::PageDown => self.advance(),
            KeyCode::PageUp => self.back(),
            KeyCode::Char('n') if ctrl => self.advance(),
            KeyCode::Char('b') if ctrl => self.back(),
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::Enter => match self.focused_field() {
                Some(field) if field.kind == FieldKind::LongText => {
                    self.edit_text(&field, |value| value.push('\n'));
                }
                _ => self.request_submit(),
            },
            KeyCode::Left => self.move_option(false),
            KeyCode::Right => self.move_option(true),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field().filter(|f| f.kind.is_typed()) {
                    self.edit_text(&field, |value| {
                        value.pop();
                    });
                }
            }
            KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focused_field() {
                    if field.kind.is_typed() && field.kind.accepts_char(c) {
                        self.edit_text(&field, |value| value.push(c));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let link = self
                    .session
                    .as_ref()
                    .and_then(|s| s.definition().success_link.clone());
                match link {
                    Some(url) => {
                        if let Err(e) = open::that(&url) {
                            tracing::warn!("Could not open {}: {}", url, e);
                        }
                    }
                    None => self.quit(),
                }
            }
            _ if is_quit_key(&key) => self.quit(),
            _ => {}
        }
    }

    /// Space: pick the highlighted radio option, flip a choice or toggle,
    /// step a select, or type a space into a text field.
    fn activate_focused(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let option = field.kind.options().get(self.focus.option).cloned();

        match &field.kind {
            FieldKind::Radio { .. } => {
                if let Some(option) = option {
                    self.set_answer(&field.label, AnswerValue::Text(option));
                }
            }
            FieldKind::MultiChoice { .. } => {
                if let Some(option) = option {
                    let checked = self
                        .answer_for(&field)
                        .is_some_and(|value| value.contains_choice(&option));
                    if let Some(session) = self.session.as_mut() {
                        session.set_choice(&field.label, &option, !checked);
                    }
                }
            }
            FieldKind::Toggle => {
                let current = self
                    .answer_for(&field)
                    .and_then(AnswerValue::as_flag)
                    .unwrap_or(false);
                self.set_answer(&field.label, AnswerValue::Flag(!current));
            }
            FieldKind::Select { .. } => self.cycle_select(&field, true),
            FieldKind::ShortText | FieldKind::LongText => {
                self.edit_text(&field, |value| value.push(' '));
            }
            FieldKind::Number | FieldKind::Date => {}
        }
    }

    fn move_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match &field.kind {
            FieldKind::Select { .. } => self.cycle_select(&field, forward),
            FieldKind::Radio { options } | FieldKind::MultiChoice { options } => {
                if forward {
                    self.focus.next_option(options.len());
                } else {
                    self.focus.prev_option(options.len());
                }
            }
            _ => {}
        }
    }

    /// Step a select through the empty placeholder and its options.
    fn cycle_select(&mut self, field: &Field, forward: bool) {
        let options = field.kind.options();
        if options.is_empty() {
            return;
        }
        let current = self
            .answer_for(field)
            .and_then(AnswerValue::as_text)
            .unwrap_or("");

        // Slot 0 is the placeholder.
        let slots = options.len() + 1;
        let index = options
            .iter()
            .position(|option| option == current)
            .map_or(0, |i| i + 1);
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };
        self.set_answer(&field.label, AnswerValue::Text(value));
    }

    fn answer_for(&self, field: &Field) -> Option<&AnswerValue> {
        self.session.as_ref().and_then(|s| s.answer(&field.label))
    }

    fn set_answer(&mut self, label: &str, value: AnswerValue) {
        if let Some(session) = self.session.as_mut() {
            session.set_answer(label, value);
        }
    }

    fn edit_text(&mut self, field: &Field, edit: impl FnOnce(&mut String)) {
        let mut text = self
            .answer_for(field)
            .and_then(AnswerValue::as_text)
            .unwrap_or_default()
            .to_string();
        edit(&mut text);
        self.set_answer(&field.label, AnswerValue::Text(text));
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
}
