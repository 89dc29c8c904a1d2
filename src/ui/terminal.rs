use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(1000 / 30);

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release {
                        handle_key(app, key);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = RenderState::from_app(app);

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(area);

            frame.render_widget(view::render_settings_bar(&state), rows[0]);

            if state.mode == AppMode::Help {
                frame.render_widget(view::render_help(), rows[1]);
            } else {
                let panes = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[1]);

                // Keep the cursor inside the bordered pane by scrolling
                let inner_height = panes[0].height.saturating_sub(2).max(1) as usize;
                let inner_width = panes[0].width.saturating_sub(2).max(1) as usize;
                let (row, col) = state.cursor;
                let v_scroll = (row + 1).saturating_sub(inner_height) as u16;
                let h_scroll = (col + 1).saturating_sub(inner_width) as u16;

                frame.render_widget(
                    view::render_source_pane(&state, (v_scroll, h_scroll)),
                    panes[0],
                );
                frame.render_widget(view::render_result_pane(&state), panes[1]);

                if state.mode == AppMode::Edit {
                    let cursor_x = panes[0].x + 1 + (col as u16).saturating_sub(h_scroll);
                    let cursor_y = panes[0].y + 1 + (row as u16).saturating_sub(v_scroll);
                    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
                }
            }

            frame.render_widget(view::render_status_line(&state), rows[2]);
        })?;

        Ok(())
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        AppMode::Quit => {}
        AppMode::Help => {
            // Any key closes the overlay
            app.mode = AppMode::Edit;
        }
        AppMode::Command => match key.code {
            KeyCode::Esc => {
                app.command_buffer.clear();
                app.mode = AppMode::Edit;
            }
            KeyCode::Enter => {
                let command = parse_command(&app.command_buffer);
                app.command_buffer.clear();
                app.mode = AppMode::Edit;
                app.apply_event(command_to_app_event(command));
            }
            KeyCode::Backspace => {
                app.command_buffer.pop();
            }
            KeyCode::Char(c) => app.command_buffer.push(c),
            _ => {}
        },
        AppMode::Edit => handle_edit_key(app, key),
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('q') = key.code {
            app.apply_event(AppEvent::Quit);
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.mode = AppMode::Command,
        KeyCode::F(1) => app.apply_event(AppEvent::Help),
        KeyCode::F(2) => {
            let toggled = if app.mask_enabled {
                AppEvent::UseRemove
            } else {
                AppEvent::UseMask(None)
            };
            app.apply_event(toggled);
        }
        KeyCode::F(3) => app.apply_event(AppEvent::AdjustWidth(-1)),
        KeyCode::F(4) => app.apply_event(AppEvent::AdjustWidth(1)),
        KeyCode::F(5) => app.apply_event(AppEvent::PasteClipboard),
        KeyCode::F(6) => app.apply_event(AppEvent::CopyOutput),
        KeyCode::F(7) => app.apply_event(AppEvent::AutoClipboard),
        KeyCode::F(8) => app.apply_event(AppEvent::Reset),
        KeyCode::Char(c) => {
            app.editor.insert_char(c);
            app.refresh_output();
        }
        KeyCode::Enter => {
            app.editor.insert_newline();
            app.refresh_output();
        }
        KeyCode::Backspace => {
            app.editor.backspace();
            app.refresh_output();
        }
        KeyCode::Delete => {
            app.editor.delete();
            app.refresh_output();
        }
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Up => app.editor.move_up(),
        KeyCode::Down => app.editor.move_down(),
        KeyCode::Home => app.editor.move_home(),
        KeyCode::End => app.editor.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_regenerates_output() {
        let mut app = App::new();
        for c in "the cat".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.output, "___ cat");
    }

    #[test]
    fn test_mode_toggle_key() {
        let mut app = App::new();
        for c in "the cat".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::F(2)));
        assert_eq!(app.output, "cat");
        handle_key(&mut app, press(KeyCode::F(2)));
        assert_eq!(app.output, "___ cat");
    }

    #[test]
    fn test_width_keys() {
        let mut app = App::new();
        for c in "the cat".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::F(4)));
        assert_eq!(app.output, "____ cat");
        handle_key(&mut app, press(KeyCode::F(3)));
        handle_key(&mut app, press(KeyCode::F(3)));
        assert_eq!(app.output, "__ cat");
    }

    #[test]
    fn test_command_deck_round_trip() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Command);
        for c in ":width 6".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, AppMode::Edit);
        assert_eq!(app.mask.width, 6);
    }

    #[test]
    fn test_command_deck_escape_discards_buffer() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Esc));
        handle_key(&mut app, press(KeyCode::Char('q')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Edit);
        assert!(app.command_buffer.is_empty());
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = App::new();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_ctrl_chord_does_not_insert() {
        let mut app = App::new();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
        );
        assert!(app.editor.is_empty());
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::F(1)));
        assert_eq!(app.mode, AppMode::Help);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.mode, AppMode::Edit);
        assert!(app.editor.is_empty());
    }
}
