use super::editor::EditorState;
use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::{transform, MaskConfig, TransformMode};
use crate::input::{self, LoadError};

/// Built-in demo paragraph, handy for trying the tool out without hunting
/// for text first.
pub const SAMPLE_TEXT: &str = "If you're looking for random paragraphs, you've come to the right place. When a random word or a random sentence isn't quite enough, the next logical step is to find a random paragraph. We created the Random Paragraph Generator with you in mind. The process is quite simple. Choose the number of random paragraphs you'd like to see and click the button. Your chosen number of paragraphs will instantly appear.";

pub struct App {
    pub mode: AppMode,
    pub editor: EditorState,
    /// Transformed text, regenerated after every change to the source or
    /// the settings
    pub output: String,
    pub mask_enabled: bool,
    pub mask: MaskConfig,
    pub status: Option<String>,
    pub command_buffer: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Edit,
            editor: EditorState::new(),
            output: String::new(),
            mask_enabled: true,
            mask: MaskConfig::default(),
            status: None,
            command_buffer: String::new(),
        }
    }

    pub fn transform_mode(&self) -> TransformMode {
        if self.mask_enabled {
            TransformMode::Mask {
                width: self.mask.width,
            }
        } else {
            TransformMode::Remove
        }
    }

    /// Re-run the transformer over the current source text.
    pub fn refresh_output(&mut self) {
        self.output = transform(&self.editor.text(), self.transform_mode());
    }

    /// Replace the source text with the outcome of a clipboard or file
    /// read. A failed read leaves the source untouched and only sets the
    /// status line.
    pub fn apply_loaded_text(&mut self, result: Result<String, LoadError>) {
        match result {
            Ok(text) => {
                self.editor.set_text(&text);
                self.refresh_output();
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Edit,
                    _ => AppMode::Help,
                };
            }
            AppEvent::LoadFile(path) => {
                let result = input::load_path(&path).map(|doc| doc.text);
                self.apply_loaded_text(result);
                if self.status.is_none() {
                    self.status = Some(format!("Loaded {}", path));
                }
            }
            AppEvent::PasteClipboard => {
                self.apply_loaded_text(input::clipboard::read());
            }
            AppEvent::CopyOutput => {
                self.status = Some(match input::clipboard::write(&self.output) {
                    Ok(()) => "Result copied to clipboard".to_string(),
                    Err(e) => e.to_string(),
                });
            }
            AppEvent::AutoClipboard => self.auto_clipboard(),
            AppEvent::Reset => {
                self.editor.clear();
                self.refresh_output();
                self.status = None;
            }
            AppEvent::InsertSample => {
                self.editor.set_text(SAMPLE_TEXT);
                self.refresh_output();
            }
            AppEvent::UseMask(width) => {
                self.mask_enabled = true;
                if let Some(width) = width {
                    self.mask.set_width(width);
                }
                self.refresh_output();
            }
            AppEvent::UseRemove => {
                self.mask_enabled = false;
                self.refresh_output();
            }
            AppEvent::SetWidth(width) => {
                self.mask.set_width(width);
                self.refresh_output();
            }
            AppEvent::AdjustWidth(delta) => {
                self.mask.adjust_width(delta);
                self.refresh_output();
            }
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
        }
    }

    /// Clipboard round trip: read, transform, write the result back. The
    /// raw clipboard text goes through the transformer directly, so `\r\n`
    /// endings survive into the copied result even though the editor
    /// normalizes its own buffer.
    fn auto_clipboard(&mut self) {
        let text = match input::clipboard::read() {
            Ok(text) => text,
            Err(e) => {
                self.status = Some(e.to_string());
                return;
            }
        };
        let transformed = transform(&text, self.transform_mode());
        self.status = Some(match input::clipboard::write(&transformed) {
            Ok(()) => "Clipboard transformed in place".to_string(),
            Err(e) => e.to_string(),
        });
        self.editor.set_text(&text);
        self.output = transformed;
    }
}
