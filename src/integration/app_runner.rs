use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::HomeComponent,
};

/// Composition root: connects the runtime to a terminal and drives the loop
///
/// One cycle pulls a single host event, translates it, runs the update
/// cycle, executes the generated commands and renders when asked to. The
/// state value never leaves the runtime except as a clone for rendering.
pub struct AppRunner {
    runtime: Runtime,
    events: EventSource,
    // In tests or non-interactive environments, the TUI is absent.
    tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
    // Presentation component (stateless/pure rendering)
    home: HomeComponent,
}

impl AppRunner {
    /// Create an AppRunner for an interactive terminal session
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Self {
        Self::new_with_tui(config, tui)
    }

    /// Create an AppRunner around any TUI implementation
    pub fn new_with_tui(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self {
            runtime: Runtime::new(AppState::new_with_config(config)),
            events: EventSource::real(Arc::clone(&tui)),
            tui: Some(tui),
            home: HomeComponent::new(),
        }
    }

    /// Create an AppRunner without a terminal (used by tests)
    pub fn new_headless(config: Config) -> Self {
        Self {
            runtime: Runtime::new(AppState::new_with_config(config)),
            events: EventSource::test(std::iter::empty()),
            tui: None,
            home: HomeComponent::new(),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Replace the event source (used by tests to inject scripted events)
    pub fn set_event_source_for_tests(&mut self, events: EventSource) {
        self.events = events;
    }

    /// Run the main loop: handle TUI events, update state and render.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("starting main loop");

        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }

        loop {
            self.run_one_cycle().await?;

            // Check quit condition from core state
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }

        tracing::info!("main loop finished");
        Ok(())
    }

    /// Run a single cycle (exposed for integration tests)
    pub async fn run_one_cycle_for_tests(&mut self) -> Result<()> {
        self.run_one_cycle().await
    }

    async fn run_one_cycle(&mut self) -> Result<()> {
        let mut needs_render = false;

        if let Some(e) = self.events.next().await {
            match e {
                tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                tui::Event::Render => needs_render = true,
                tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                tui::Event::Paste(s) => self.runtime.send_raw_msg(RawMsg::Paste(s)),
                tui::Event::Error => log::error!("terminal event stream error"),
                tui::Event::Init
                | tui::Event::Closed
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Mouse(_) => {}
            }
        } else if self.tui.is_none() {
            // Scripted event queue is drained; yield briefly to avoid a busy loop
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }

        // Process the update cycle and execute generated commands
        let commands = self.runtime.process_all_messages();
        for cmd in commands {
            match cmd {
                Cmd::Tui(TuiCommand::Resize { width, height }) => {
                    if let Some(tui) = &self.tui {
                        tui.lock()
                            .await
                            .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                        needs_render = true;
                    }
                }
                Cmd::None => {}
            }
        }

        // Hand the terminal back to the shell while suspended
        if self.runtime.state().system.should_suspend {
            if let Some(tui) = &self.tui {
                let mut guard = tui.lock().await;
                guard.suspend()?;
                // Execution continues here once the process is foregrounded again
                guard.enter()?;
            }
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.runtime.process_all_messages();
            needs_render = true;
        }

        if needs_render {
            self.render().await?;
        }

        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        if let Some(tui) = &self.tui {
            let home = &self.home;
            tui.lock().await.draw(&mut |frame| {
                home.view(&state, frame, frame.area());
            })?;
        }
        Ok(())
    }
}
