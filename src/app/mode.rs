#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the source pane
    Edit,
    /// Command deck open at the bottom of the screen
    Command,
    /// Help overlay
    Help,
    Quit,
}
