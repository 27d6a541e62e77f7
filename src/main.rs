//! Landing TUI - partner program landing page in the terminal
//!
//! A Ratatui-based TUI that renders the landing page sections and
//! validates the partner registration form.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::LandingConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset.
///
/// Logs go to stderr, which shares the terminal with the UI, so events raised
/// while the page is on screen stay below this level.
const DEFAULT_LOG_FILTER: &str = "landing_tui=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // A broken config file should not keep the page from opening
    let (config, config_error) = match LandingConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Failed to load config: {err}");
            (LandingConfig::default(), Some(err.to_string()))
        }
    };
    let mouse_capture = config.mouse_capture();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    if let Some(message) = config_error {
        app.state.push_error(message);
    }
    let size = terminal.size()?;
    app.terminal_size = Some((size.height, size.width));
    app.apply_start_anchor();

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while scrolling or a toast is sliding
        let poll_duration = if app.is_animating(now) {
            LandingConfig::ANIMATION_TICK_RATE
        } else {
            app.config.tick_rate()
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    // Keep the offset valid for the new viewport
                    app.terminal_size = Some((height, width));
                    app.state.scroll.clamp(app.max_offset());
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
