use std::ops::RangeInclusive;

pub const MAX_QUERY_LENGTH: usize = 60;
pub const PRINTABLE_CHARS: RangeInclusive<char> = ' '..='~';
pub const SEARCH_LABEL: &str = "[Search]: ";

/// Settings for one selector session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Longest query the user can type; further keystrokes are dropped.
    pub max_query_len: usize,
    /// Characters accepted as query input.
    pub printable: RangeInclusive<char>,
    /// Text drawn before the query on the header row.
    pub search_label: String,
    pub initial_query: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_query_len: MAX_QUERY_LENGTH,
            printable: PRINTABLE_CHARS,
            search_label: SEARCH_LABEL.to_string(),
            initial_query: String::new(),
        }
    }
}

impl MenuConfig {
    pub fn with_initial_query(mut self, query: &str) -> Self {
        self.initial_query = query.to_string();
        self
    }

    pub fn with_max_query_len(mut self, len: usize) -> Self {
        self.max_query_len = len;
        self
    }

    pub fn is_printable(&self, c: char) -> bool {
        self.printable.contains(&c)
    }

    /// The initial query as the session will see it: printable characters
    /// only, capped at `max_query_len`.
    pub fn sanitized_initial_query(&self) -> String {
        self.initial_query
            .chars()
            .filter(|c| self.is_printable(*c))
            .take(self.max_query_len)
            .collect()
    }
}
