//! debuff_tui - Interactive debuff chance calculator

mod app;
mod simulation;
mod ui;

use app::{App, Tab};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = start_logging(&log_directory());

    // Load presets before the terminal switches to the alternate screen
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::F(n), _) => app.set_tab(usize::from(n).saturating_sub(1)),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::PageUp, _) => app.on_page_up(),
                    (KeyCode::PageDown, _) => app.on_page_down(),
                    (KeyCode::Enter, _) => app.on_enter(),
                    (KeyCode::Char(' '), _) => app.on_space(),
                    (KeyCode::Backspace, _) => app.on_backspace(),
                    (KeyCode::Delete, _) => app.on_delete(),
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('x'), _) => app.export_curve(),
                    (KeyCode::Char('c'), _) if app.current_tab == Tab::Rolls => app.simulation.clear(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    (KeyCode::Char(c), _) => app.on_char(c),
                    _ => {}
                }
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}

/// Logging is optional; the calculator runs without a subscriber
fn start_logging(log_dir: &Path) -> Option<WorkerGuard> {
    match setup_logging(log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "Warning: could not open log directory {}: {}. Continuing without logs.",
                log_dir.display(),
                e
            );
            None
        }
    }
}

/// Log to a file; the terminal belongs to the UI
fn setup_logging(log_dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "debuff_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

/// `DEBUFF_LOG_DIR`, or a directory under the system temp dir
fn log_directory() -> PathBuf {
    std::env::var_os("DEBUFF_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("debuff_tui"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unusable_log_dir_does_not_abort() {
        let blocker = std::env::temp_dir().join(format!("debuff_tui_blocker_{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();

        // A directory cannot be created below a regular file
        let guard = start_logging(&blocker.join("logs"));
        assert!(guard.is_none());

        fs::remove_file(&blocker).unwrap();
    }
}
