use crate::{config::MenuConfig, key::MenuKey};

/// What the session loop should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Exact text of the highlighted candidate.
    Confirmed(String),
    Aborted,
}

/// Mutable part of a selector session: the query and the highlighted row of
/// the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    query: String,
    highlighted: usize,
}

impl MenuState {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            query: config.sanitized_initial_query(),
            highlighted: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Apply one key to the state. `filtered` is the view the user was
    /// looking at when the key was pressed.
    pub fn dispatch(&mut self, key: MenuKey, filtered: &[&str], config: &MenuConfig) -> Outcome {
        match key {
            MenuKey::Confirm => match filtered.get(self.highlighted) {
                Some(line) => Outcome::Confirmed((*line).to_string()),
                None => Outcome::Continue,
            },
            MenuKey::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                Outcome::Continue
            }
            MenuKey::Down => {
                if self.highlighted + 1 < filtered.len() {
                    self.highlighted += 1;
                }
                Outcome::Continue
            }
            MenuKey::Backspace => {
                self.query.pop();
                self.highlighted = 0;
                Outcome::Continue
            }
            MenuKey::Char(c) if config.is_printable(c) => {
                if self.query.chars().count() < config.max_query_len {
                    self.query.push(c);
                    self.highlighted = 0;
                }
                Outcome::Continue
            }
            MenuKey::Abort | MenuKey::Interrupt => Outcome::Aborted,
            MenuKey::Char(_) | MenuKey::Other => Outcome::Continue,
        }
    }
}
