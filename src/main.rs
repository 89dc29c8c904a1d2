use cloze::app::App;
use cloze::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // Run the main TUI event loop; all input, clipboard and file loading
    // is driven from inside it
    tui.run_event_loop(&mut app)?;

    Ok(())
}
