use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use soundwave_preview::cli::Args;
use soundwave_preview::config::PreviewConfig;
use soundwave_preview::controller::PreviewController;
use soundwave_preview::logging;
use soundwave_preview::random::SeededRandom;
use soundwave_preview::view::PreviewView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        print!("{}", PreviewConfig::default().to_toml()?);
        return Ok(());
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== SoundWave Preview Starting ===");

    let config = args.resolve_config()?;
    tracing::info!(
        seed = ?config.seed,
        auto_start = config.rotation.auto_start,
        period_ms = config.rotation.period_ms,
        headless = args.headless,
        "Configuration loaded"
    );

    let rng = SeededRandom::new(config.seed);
    let controller = PreviewController::new(config, Box::new(rng));

    let res = if args.headless {
        run_headless(&controller, Duration::from_secs(args.duration_secs)).await
    } else {
        run_terminal(&controller).await
    };

    controller.unmount().await;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Preview error");
    }

    tracing::info!("SoundWave Preview shutting down");
    res
}

/// Print every published snapshot as one JSON line until `duration` elapses
async fn run_headless(controller: &PreviewController, duration: Duration) -> Result<()> {
    let mut state_rx = controller.subscribe();
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);

    controller.mount().await;

    let mut stdout = io::stdout().lock();
    loop {
        let line = serde_json::to_string(&*state_rx.borrow_and_update())?;
        writeln!(stdout, "{}", line)?;

        tokio::select! {
            _ = &mut deadline => break,
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

async fn run_terminal(controller: &PreviewController) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    controller.mount().await;
    let res = run_app(&mut terminal, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &PreviewController,
) -> Result<()> {
    let mut state_rx = controller.subscribe();
    let mut reader = EventStream::new();

    loop {
        let state = state_rx.borrow_and_update().clone();
        if state.should_quit {
            break;
        }

        terminal.draw(|f| {
            PreviewView::render(f, &state, controller.catalog());
        })?;

        // Redraw on any state change or terminal event
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            event = reader.next() => match event {
                Some(Ok(Event::Key(key))) => controller.handle_key_event(key).await?,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}
