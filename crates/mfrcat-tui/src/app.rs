//! Application core — event loop, action dispatch, overlays.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use mfrcat_core::{Browser, LoadState};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::manufacturers::ManufacturersScreen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// The single catalog screen.
    screen: ManufacturersScreen,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Search overlay visibility.
    search_active: bool,
    /// Current search query.
    search_query: String,
    /// Latest load state, for the status bar indicator.
    load_status: LoadState,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// The catalog browser.
    browser: Browser,
    /// Cancellation token for the browser bridge task.
    bridge_cancel: CancellationToken,
}

impl App {
    pub fn new(browser: Browser) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: ManufacturersScreen::new(),
            running: true,
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            load_status: LoadState::default(),
            action_tx,
            action_rx,
            browser,
            bridge_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.screen.init(self.action_tx.clone())?;
        self.screen.set_focused(true);

        // Spawn the browser bridge — it starts the catalog load.
        {
            let browser = self.browser.clone();
            let tx = self.action_tx.clone();
            let cancel = self.bridge_cancel.clone();
            tokio::spawn(async move {
                crate::browser_bridge::run_browser_bridge(browser, tx, cancel).await;
            });
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Cancel the bridge and clean up
        self.bridge_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Search overlay captures all input
        if self.search_active {
            return match key.code {
                KeyCode::Esc => {
                    self.search_query.clear();
                    Ok(Some(Action::CloseSearch))
                }
                KeyCode::Enter => Ok(Some(Action::SearchSubmit)),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                _ => Ok(None),
            };
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }
        // '?' and '/' arrive with a SHIFT modifier on some layouts — match codes only.
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            KeyCode::Char('/') => return Ok(Some(Action::OpenSearch)),
            _ => {}
        }

        // Delegate to the screen component
        self.screen.handle_key_event(key)
    }

    /// Process a single action — update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenSearch => {
                self.search_active = true;
                self.search_query.clear();
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search_query.clear();
                self.forward(action)?;
            }

            // Search accepted: close the overlay, keep the filter applied.
            Action::SearchSubmit => {
                self.search_active = false;
            }

            Action::LoadStateChanged(state) => {
                self.load_status = state.clone();
                self.forward(action)?;
            }

            // ── Browser commands ──────────────────────────────────────
            Action::SelectManufacturer(id) => {
                self.browser.spawn_select(*id);
                self.forward(action)?;
            }

            Action::ClearDetail => {
                self.browser.clear_selection();
            }

            Action::RetryLoad => {
                self.browser.spawn_load();
            }

            Action::Render | Action::Resize(..) => {}

            // Everything else goes to the screen
            other => {
                self.forward(other)?;
            }
        }

        Ok(())
    }

    fn forward(&mut self, action: &Action) -> Result<()> {
        if let Some(follow_up) = self.screen.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.screen.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom status bar with load status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::AMBER)),
                Span::styled(&self.search_query, Style::default().fg(theme::STEEL_BLUE)),
                Span::styled("█", Style::default().fg(theme::STEEL_BLUE)),
                Span::styled("  Esc cancel  Enter submit", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let status = match &self.load_status {
            LoadState::Idle => Span::styled("○ idle", theme::key_hint()),
            LoadState::Loading => {
                Span::styled("◐ loading catalog", Style::default().fg(theme::AMBER))
            }
            LoadState::Loaded { count } => Span::styled(
                format!("● {count} manufacturers"),
                Style::default().fg(theme::MINT),
            ),
            LoadState::Failed { .. } => Span::styled("✗ load failed", theme::error_style()),
        };

        let hints = Span::styled(" │ ? help  / search  q quit", theme::key_hint());

        let line = Line::from(vec![Span::raw(" "), status, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 16u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_PANEL)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let entry = |keys: &str, desc: &str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::key_hint_key()),
                Span::styled(desc.to_owned(), theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            entry("j/k ↑/↓", "Move up/down"),
            entry("g/G", "Top / bottom"),
            entry("Ctrl+d/u", "Page down / up"),
            entry("Enter", "Show manufacturer details"),
            entry("Esc", "Close popup / overlay"),
            Line::from(""),
            entry("/", "Search by name"),
            entry("t / Tab", "Cycle vehicle-type filter"),
            entry("r", "Retry a failed load"),
            Line::from(""),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
