//! TUI Application module

mod async_ops;
mod events;
mod state;
mod ui;

pub use state::AppState;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::demo;
use crate::images;

use async_ops::{AsyncCommand, AsyncHandle, AsyncResult, spawn_worker};
use state::FetchState;

/// Run the TUI application
pub fn run() -> Result<()> {
    // Create tokio runtime
    let rt = Runtime::new()?;

    // Load config
    let config = Config::load()?;

    // Spawn async worker
    let async_handle = rt.block_on(async { spawn_worker(&config.api_base_url) });

    // Probe terminal graphics support before entering raw mode
    images::init_picker();

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app state
    let mut state = AppState::new(config);

    // Kick off the one collection fetch of the session
    let _ = async_handle.cmd_tx.blocking_send(AsyncCommand::FetchAll);
    state.fetch = FetchState::Pending;
    state.set_status("Loading countries...");

    // Main loop
    let result = run_app(&mut terminal, &mut state, async_handle, &rt);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    mut async_handle: AsyncHandle,
    _rt: &Runtime,
) -> Result<()> {
    loop {
        // Process any async results
        while let Ok(result) = async_handle.result_rx.try_recv() {
            handle_async_result(state, result);
        }

        // Draw UI
        terminal.draw(|frame| ui::render(frame, state))?;

        // Handle events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && let Some(cmd) = events::handle_key(state, key)
        {
            let _ = async_handle.cmd_tx.blocking_send(cmd);
        }

        // Queue artwork downloads for what is on screen
        let images_to_load = state.images_to_load();
        if !images_to_load.is_empty() {
            state.mark_images_loading(&images_to_load);
            for url in images_to_load {
                let _ = async_handle
                    .cmd_tx
                    .blocking_send(AsyncCommand::LoadImage { url });
            }
        }

        // Tick for animations
        state.tick();

        if state.should_quit {
            // Shutdown async worker
            let _ = async_handle.cmd_tx.blocking_send(AsyncCommand::Shutdown);
            break;
        }
    }

    // Save config on exit
    state.config.save()?;

    Ok(())
}

fn handle_async_result(state: &mut AppState, result: AsyncResult) {
    match result {
        AsyncResult::CountriesFetched { countries } => {
            let count = countries.len();
            state.set_countries(countries);
            state.set_status(format!("Loaded {count} countries"));
        }
        AsyncResult::CountriesFailed { message } => {
            state.fetch = FetchState::Error(message.clone());
            state.set_status(format!("❌ {message}"));
        }
        AsyncResult::CountryFetched { country } => {
            // Ignore results for a detail view we already left
            if state.detail.name == country.name.common {
                state.detail.country = Some(*country);
                state.detail.fetch = FetchState::Success;
            }
        }
        AsyncResult::CountryFailed { name, message } => {
            if state.detail.name == name {
                state.detail.fetch = FetchState::Error(message);
            }
        }
        AsyncResult::ImageLoaded { url, image } => {
            state.loading_images.remove(&url);
            state.insert_image(&url, image);
            // No status message - images load quietly
        }
        AsyncResult::ImageFailed { url, error } => {
            state.loading_images.remove(&url);
            tracing::warn!("Failed to load image {}: {}", url, error);
            // Don't show error in status bar - would be too noisy
        }
        AsyncResult::Status { message } => {
            state.set_status(message);
        }
    }
}

/// Run the TUI in demo mode with bundled data (for screenshots)
pub fn run_demo() -> Result<()> {
    // Load config
    let config = Config::load()?;

    images::init_picker();

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app state with demo data
    let mut state = AppState::new(config);
    state.set_countries(demo::demo_countries());
    // Use Dracula theme for screenshots
    state.theme = crate::theme::Theme(ratatui_themes::ThemeName::Dracula);
    state.set_status(format!(
        "Demo mode | {} countries | Press ? for help | q to quit",
        state.country_count()
    ));

    // Main loop (simpler, no async)
    loop {
        // Draw UI
        terminal.draw(|frame| ui::render(frame, &mut state))?;

        // Handle events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Network commands are dropped in demo mode
            if let Some(AsyncCommand::FetchCountry { name }) = events::handle_key(&mut state, key) {
                // Detail data comes from the bundled set instead
                let country = demo::demo_countries()
                    .into_iter()
                    .find(|c| c.name.common == name);
                if let Some(country) = country {
                    state.detail.country = Some(country);
                    state.detail.fetch = FetchState::Success;
                } else {
                    state.detail.fetch = FetchState::Error("Not in demo data".to_string());
                }
            }
        }

        // Tick for animations
        state.tick();

        if state.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save config on exit
    state.config.save()?;

    Ok(())
}
