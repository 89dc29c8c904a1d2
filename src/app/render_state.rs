use super::app::App;
use super::mode::AppMode;

/// Snapshot of everything the UI needs for one frame
pub struct RenderState {
    pub mode: AppMode,
    pub input_lines: Vec<String>,
    /// Cursor as (row, display column) within the source text
    pub cursor: (usize, usize),
    pub output: String,
    pub mask_enabled: bool,
    pub width: usize,
    pub status: Option<String>,
    pub command_buffer: String,
}

impl RenderState {
    pub fn from_app(app: &App) -> Self {
        let (row, _) = app.editor.cursor();
        Self {
            mode: app.mode,
            input_lines: app.editor.lines().to_vec(),
            cursor: (row, app.editor.cursor_display_col()),
            output: app.output.clone(),
            mask_enabled: app.mask_enabled,
            width: app.mask.width,
            status: app.status.clone(),
            command_buffer: app.command_buffer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;

    #[test]
    fn test_render_state_snapshot() {
        let mut app = App::new();
        app.editor.set_text("the cat");
        app.refresh_output();
        app.apply_event(AppEvent::SetWidth(2));

        let state = RenderState::from_app(&app);
        assert_eq!(state.input_lines, vec!["the cat".to_string()]);
        assert_eq!(state.output, "__ cat");
        assert!(state.mask_enabled);
        assert_eq!(state.width, 2);
        assert_eq!(state.cursor, (0, 7));
    }
}
