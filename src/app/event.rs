/// Application events produced by key handling and the command deck
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    PasteClipboard,
    CopyOutput,
    /// The one-shot flow: read the clipboard, transform, write the result
    /// back to the clipboard
    AutoClipboard,
    Reset,
    InsertSample,
    /// Switch to mask mode, optionally with a new placeholder width
    UseMask(Option<usize>),
    UseRemove,
    SetWidth(usize),
    AdjustWidth(i32),
    Quit,
    Help,
    InvalidCommand(String),
}
