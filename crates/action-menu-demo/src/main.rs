use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
            Event, KeyEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod app;
mod dispatcher;
mod logger;
mod menu;
mod reducer;
mod state;
mod theme;
mod view_models;
mod views;

use action_menu_config::AppConfig;
use actions::AppAction;
use app::App;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting action-menu-demo, logging to {}", log_file.display());

    let config = AppConfig::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting action-menu-demo");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if !app.is_running() {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.dispatch(AppAction::KeyPressed(key));
                }
                Event::Mouse(mouse) => app.dispatch(AppAction::Mouse(mouse)),
                Event::FocusLost => app.dispatch(AppAction::FocusLost),
                _ => {}
            }
        }

        app.process_pending();
    }

    Ok(())
}
