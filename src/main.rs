//! Contact form TUI entry point

use anyhow::Result;
use contact_form::app::App;
use contact_form::config::FormConfig;
use contact_form::transport::SimulatedTransport;
use contact_form::ui;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load()?;
    let transport = SimulatedTransport::new(config.submit_latency())
        .failing(config.simulate_failure());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, Arc::new(transport));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while toasts or a submission are on screen (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Let the transport task make progress between frames
        tokio::task::yield_now().await;

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
