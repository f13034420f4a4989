use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header row: the search label followed by the query, in bold.
pub fn search_header<'a>(label: &'a str, query: &'a str) -> Paragraph<'a> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    Paragraph::new(Line::from(vec![
        Span::styled(label, bold),
        Span::styled(query, bold),
    ]))
}

/// One candidate row. Only the text itself is reversed when highlighted,
/// the rest of the row stays blank.
pub fn candidate_row(text: &str, highlighted: bool) -> Paragraph<'_> {
    let span = if highlighted {
        Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::raw(text)
    };
    Paragraph::new(Line::from(span))
}
