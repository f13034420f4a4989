use anyhow::Result;
use pmenu_core::{filter_candidates, MenuConfig, MenuState, Outcome, Viewport};
use ratatui::{backend::Backend, layout::Rect, text::Span, Frame, Terminal};

use crate::{
    keys::KeySource,
    widgets::{candidate_row, search_header},
};

/// What a single frame managed to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub viewport: Viewport,
    pub drawn: usize,
    /// Rows whose text was cut at the right edge.
    pub clipped: usize,
}

/// Draw the header and the visible window of `filtered`.
///
/// Never fails: text that does not fit is cut by the buffer and counted in
/// the report.
pub fn render_menu(
    frame: &mut Frame,
    filtered: &[&str],
    state: &MenuState,
    config: &MenuConfig,
) -> RenderReport {
    let area = frame.area();
    let viewport = Viewport::compute(area.height as usize, filtered.len(), state.highlighted());
    let mut report = RenderReport {
        viewport,
        ..Default::default()
    };

    for (row, index) in viewport.rows(filtered.len()).enumerate() {
        let text = filtered[index];
        // viewport height is at most area.height - 1
        let row_area = Rect::new(area.x, area.y + 1 + row as u16, area.width, 1);
        if Span::raw(text).width() > area.width as usize {
            report.clipped += 1;
        }
        frame.render_widget(candidate_row(text, index == state.highlighted()), row_area);
        report.drawn += 1;
    }

    if area.height > 0 {
        let header_area = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(search_header(&config.search_label, state.query()), header_area);

        let typed = Span::raw(config.search_label.as_str()).width() + state.query().len();
        let cursor_x = (typed as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((area.x + cursor_x, area.y));
    }

    report
}

/// Run the selector until the user confirms or aborts.
///
/// Returns the exact text of the confirmed candidate, or `None` on Esc or
/// Ctrl-C.
pub fn run_menu<B: Backend, K: KeySource>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    candidates: &[String],
    config: &MenuConfig,
) -> Result<Option<String>> {
    let mut state = MenuState::new(config);
    tracing::debug!(candidates = candidates.len(), "menu opened");
    // anything already on screen is unknown to the frame diff
    terminal.clear()?;

    loop {
        let filtered = filter_candidates(candidates, state.query());

        let mut report = RenderReport::default();
        terminal.draw(|f| report = render_menu(f, &filtered, &state, config))?;
        if report.clipped > 0 {
            tracing::trace!(clipped = report.clipped, "rows wider than terminal");
        }

        let key = keys.next_key()?;
        match state.dispatch(key, &filtered, config) {
            Outcome::Continue => {}
            Outcome::Confirmed(line) => {
                tracing::debug!(query = state.query(), "selection confirmed");
                return Ok(Some(line));
            }
            Outcome::Aborted => {
                tracing::debug!(?key, "menu aborted");
                return Ok(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use pmenu_core::MenuKey;
    use ratatui::{backend::TestBackend, buffer::Cell, style::Modifier};

    struct ScriptedKeys(VecDeque<MenuKey>);

    impl ScriptedKeys {
        fn new(keys: &[MenuKey]) -> Self {
            Self(keys.iter().copied().collect())
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<MenuKey> {
            self.0
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("ran out of scripted keys"))
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
        text.trim_end().to_string()
    }

    fn is_reversed(terminal: &Terminal<TestBackend>, x: u16, y: u16) -> bool {
        terminal.backend().buffer()[(x, y)]
            .modifier
            .contains(Modifier::REVERSED)
    }

    fn run(
        terminal: &mut Terminal<TestBackend>,
        candidates: &[String],
        keys: &[MenuKey],
    ) -> Result<Option<String>> {
        run_menu(
            terminal,
            &mut ScriptedKeys::new(keys),
            candidates,
            &MenuConfig::default(),
        )
    }

    #[test]
    fn test_first_frame_shows_everything() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        let candidates = lines(&["apple", "banana", "cherry"]);

        let result = run(&mut terminal, &candidates, &[MenuKey::Abort]).unwrap();
        assert_eq!(result, None);

        assert_eq!(row_text(&terminal, 0), "[Search]:");
        assert_eq!(row_text(&terminal, 1), "apple");
        assert_eq!(row_text(&terminal, 2), "banana");
        assert_eq!(row_text(&terminal, 3), "cherry");
        assert_eq!(row_text(&terminal, 4), "");
        assert!(is_reversed(&terminal, 0, 1));
        assert!(!is_reversed(&terminal, 0, 2));
        assert!(terminal.backend().buffer()[(0, 0)]
            .modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_stale_screen_content_cleared() {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        let mut stray = Cell::default();
        stray.set_symbol("X");
        terminal
            .backend_mut()
            .draw([(25u16, 0u16, &stray), (30, 2, &stray)].into_iter())
            .unwrap();

        let candidates = lines(&["apple"]);
        assert_eq!(run(&mut terminal, &candidates, &[MenuKey::Abort]).unwrap(), None);
        assert_eq!(row_text(&terminal, 0), "[Search]:");
        assert_eq!(row_text(&terminal, 2), "");
    }

    #[test]
    fn test_typing_filters_and_confirms() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        let candidates = lines(&["apple", "banana", "cherry"]);

        let result = run(
            &mut terminal,
            &candidates,
            &[MenuKey::Char('a'), MenuKey::Char('n'), MenuKey::Confirm],
        )
        .unwrap();
        assert_eq!(result, Some("banana".to_string()));
        assert_eq!(row_text(&terminal, 0), "[Search]: an");
        assert_eq!(row_text(&terminal, 1), "banana");
        assert_eq!(row_text(&terminal, 2), "");
    }

    #[test]
    fn test_down_then_confirm() {
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        let candidates = lines(&["a", "b", "c"]);

        let keys = [MenuKey::Down, MenuKey::Down, MenuKey::Down, MenuKey::Confirm];
        assert_eq!(run(&mut terminal, &candidates, &keys).unwrap(), Some("c".into()));
        assert!(is_reversed(&terminal, 0, 3));
    }

    #[test]
    fn test_scrolls_to_keep_highlight_visible() {
        // 4 rows: header + 3 candidates
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let candidates = numbered(10);

        let mut keys = vec![MenuKey::Down; 5];
        keys.push(MenuKey::Abort);
        assert_eq!(run(&mut terminal, &candidates, &keys).unwrap(), None);

        assert_eq!(row_text(&terminal, 1), "item3");
        assert_eq!(row_text(&terminal, 2), "item4");
        assert_eq!(row_text(&terminal, 3), "item5");
        assert!(is_reversed(&terminal, 0, 3));
    }

    #[test]
    fn test_scrolls_back_up() {
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let candidates = numbered(10);

        let mut keys = vec![MenuKey::Down; 5];
        keys.extend([MenuKey::Up; 4]);
        keys.push(MenuKey::Confirm);
        assert_eq!(
            run(&mut terminal, &candidates, &keys).unwrap(),
            Some("item1".into())
        );
        assert_eq!(row_text(&terminal, 1), "item0");
        assert!(is_reversed(&terminal, 0, 2));
    }

    #[test]
    fn test_confirm_with_no_matches_keeps_running() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let candidates = lines(&["apple", "banana"]);

        let keys = [
            MenuKey::Char('q'),
            MenuKey::Confirm,
            MenuKey::Backspace,
            MenuKey::Down,
            MenuKey::Confirm,
        ];
        assert_eq!(
            run(&mut terminal, &candidates, &keys).unwrap(),
            Some("banana".into())
        );
    }

    #[test]
    fn test_interrupt_returns_none() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let candidates = lines(&["apple", "banana"]);

        let keys = [MenuKey::Down, MenuKey::Char('b'), MenuKey::Interrupt];
        assert_eq!(run(&mut terminal, &candidates, &keys).unwrap(), None);
    }

    #[test]
    fn test_key_source_errors_propagate() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let candidates = lines(&["apple"]);
        assert!(run(&mut terminal, &candidates, &[MenuKey::Down]).is_err());
    }

    #[test]
    fn test_initial_query_applied() {
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        let candidates = lines(&["apple", "banana", "cherry"]);
        let config = MenuConfig::default().with_initial_query("err");

        let result = run_menu(
            &mut terminal,
            &mut ScriptedKeys::new(&[MenuKey::Confirm]),
            &candidates,
            &config,
        )
        .unwrap();
        assert_eq!(result, Some("cherry".into()));
        assert_eq!(row_text(&terminal, 0), "[Search]: err");
    }

    #[test]
    fn test_narrow_terminal_clips_rows() {
        let mut terminal = Terminal::new(TestBackend::new(6, 3)).unwrap();
        let candidates = lines(&["a rather long line", "ok"]);
        let state = MenuState::default();
        let config = MenuConfig::default();
        let filtered = filter_candidates(&candidates, "");

        let mut report = RenderReport::default();
        terminal
            .draw(|f| report = render_menu(f, &filtered, &state, &config))
            .unwrap();

        assert_eq!(report.drawn, 2);
        assert_eq!(report.clipped, 1);
        assert_eq!(row_text(&terminal, 1), "a rath");
        assert_eq!(row_text(&terminal, 2), "ok");
    }

    #[test]
    fn test_header_only_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        let candidates = numbered(3);
        let filtered = filter_candidates(&candidates, "");
        let config = MenuConfig::default();

        let mut report = RenderReport::default();
        terminal
            .draw(|f| report = render_menu(f, &filtered, &MenuState::default(), &config))
            .unwrap();

        assert_eq!(report.drawn, 0);
        assert_eq!(report.viewport.height, 0);
        assert_eq!(row_text(&terminal, 0), "[Search]:");
    }

    #[test]
    fn test_viewport_reported() {
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let candidates = numbered(10);
        let filtered = filter_candidates(&candidates, "");
        let config = MenuConfig::default();
        let mut state = MenuState::default();
        for _ in 0..7 {
            state.dispatch(MenuKey::Down, &filtered, &config);
        }

        let mut report = RenderReport::default();
        terminal
            .draw(|f| report = render_menu(f, &filtered, &state, &config))
            .unwrap();

        assert_eq!(report.viewport, Viewport { offset: 5, height: 3 });
        assert_eq!(row_text(&terminal, 3), "item7");
    }
}
