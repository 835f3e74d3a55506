use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::fetch::FetchHandle;
use crate::logo::{LogoCache, LogoLoader};

/// Poll interval while background work is in flight.
const BUSY_POLL_MS: u64 = 50;
const IDLE_POLL_MS: u64 = 250;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        // Create the picker BEFORE initializing the terminal (queries stdio)
        let picker = if self.logos_enabled {
            crate::logo::create_picker(self.force_half_cell)
        } else {
            None
        };

        let fetch = FetchHandle::spawn(self.source.clone());
        tracing::info!(source = %self.source.label(), "fetching job listing");

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; jobdeck requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(self.source.label(), (size.width, size.height))
            .with_logos(LogoCache::new(picker));
        model.board.set_search_text(self.initial_search.clone());
        model.initial_page = self.initial_page;
        model.theme = self.theme;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        let result = Self::event_loop(&mut terminal, &mut model, fetch);

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        mut fetch: FetchHandle,
    ) -> Result<()> {
        let logo_loader = model.logos.is_enabled().then(LogoLoader::spawn);
        execute!(stdout(), EnableMouseCapture)?;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if let Some(jobs) = fetch.take_ready() {
                Self::dispatch(model, Message::JobsLoaded(jobs));
                needs_render = true;
            }

            if let Some(loader) = &logo_loader {
                let results = loader.drain();
                if !results.is_empty() {
                    model.apply_logo_results(results);
                    needs_render = true;
                }
            }

            let poll_ms = if needs_render {
                0
            } else if !fetch.is_done() || model.logos.has_pending() {
                BUSY_POLL_MS
            } else {
                IDLE_POLL_MS
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }
                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::ZERO)? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                if let Some(loader) = &logo_loader {
                    Self::request_logos(model, loader);
                }
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(model: &mut Model, msg: Message) {
        if !matches!(msg, Message::JobsLoaded(_)) {
            tracing::debug!(?msg, "message");
        }
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}
