/// Keys the selector reacts to, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Confirm,
    Up,
    Down,
    Backspace,
    Char(char),
    Abort,
    /// Ctrl-C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
    Other,
}
