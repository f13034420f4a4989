pub mod keys;
pub mod menu;
pub mod session;
pub mod widgets;

use anyhow::Result;
use pmenu_core::MenuConfig;

pub use keys::{KeySource, TerminalKeys};
pub use menu::{render_menu, run_menu, RenderReport};
pub use session::{restore_terminal, TuiSession, INTERRUPTED_EXIT_CODE};

/// Show the selector on the terminal and return the chosen line, or `None`
/// if the user backed out.
pub fn pmenu(lines: &[String]) -> Result<Option<String>> {
    pmenu_with_config(lines, &MenuConfig::default())
}

/// Like [`pmenu`], with custom session settings.
pub fn pmenu_with_config(lines: &[String], config: &MenuConfig) -> Result<Option<String>> {
    let mut session = TuiSession::new()?;
    run_menu(&mut *session, &mut TerminalKeys, lines, config)
}
