//! Manufacturers screen — the filtered catalog table plus the detail popup.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;

use mfrcat_core::{DetailState, FilterState, LoadState, Manufacturer, compute_view};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct ManufacturersScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    /// Full list snapshot from the browser. Never mutated here.
    manufacturers: Arc<Vec<Manufacturer>>,
    load_state: LoadState,
    detail: DetailState,
    detail_open: bool,
    search_query: String,
    /// Active vehicle-type filter, `None` = all types.
    type_filter: Option<String>,
    /// Distinct type names across the full list, first-seen order.
    type_options: Vec<String>,
    /// Filtered manufacturers for the current inputs.
    cached_view: Vec<Manufacturer>,
    table_state: TableState,
    throbber: ThrobberState,
}

impl ManufacturersScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            action_tx: None,
            manufacturers: Arc::new(Vec::new()),
            load_state: LoadState::default(),
            detail: DetailState::default(),
            detail_open: false,
            search_query: String::new(),
            type_filter: None,
            type_options: Vec::new(),
            cached_view: Vec::new(),
            table_state: TableState::default(),
            throbber: ThrobberState::default(),
        }
    }

    // ── Derived state ────────────────────────────────────────────────

    fn recompute(&mut self) {
        let filter = FilterState {
            search_term: self.search_query.clone(),
            vehicle_type: self.type_filter.clone(),
        };
        let view = compute_view(&self.manufacturers, &filter);
        self.cached_view = view.manufacturers;
        self.type_options = view.type_options;

        // A list update can retire the active type filter.
        if let Some(active) = &self.type_filter {
            if !self.type_options.iter().any(|t| t == active) {
                self.type_filter = None;
                let filter = FilterState {
                    search_term: self.search_query.clone(),
                    vehicle_type: None,
                };
                self.cached_view = compute_view(&self.manufacturers, &filter).manufacturers;
            }
        }
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.cached_view.len();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.cached_view.len();
        if len == 0 {
            return;
        }
        let current = self.selected_index() as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.select(next as usize);
    }

    /// Advance the type filter: All → first option → ... → last → All.
    fn cycle_type_filter(&mut self) {
        self.type_filter = match &self.type_filter {
            None => self.type_options.first().cloned(),
            Some(current) => match self.type_options.iter().position(|t| t == current) {
                Some(i) if i + 1 < self.type_options.len() => {
                    self.type_options.get(i + 1).cloned()
                }
                _ => None,
            },
        };
        self.recompute();
        self.select(0);
    }

    fn type_filter_label(&self) -> String {
        self.type_filter
            .clone()
            .unwrap_or_else(|| "All".to_owned())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("  Type ", theme::key_hint()),
            Span::styled(self.type_filter_label(), Style::default().fg(theme::STEEL_BLUE)),
        ];
        if !self.search_query.is_empty() {
            spans.push(Span::styled("   Search ", theme::key_hint()));
            spans.push(Span::styled(
                &self.search_query,
                Style::default().fg(theme::AMBER),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            Cell::from("ID").style(theme::table_header()),
            Cell::from("Name").style(theme::table_header()),
            Cell::from("Country").style(theme::table_header()),
            Cell::from("Vehicle Types").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = self
            .cached_view
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸" } else { " " };

                let name_style = Style::default()
                    .fg(theme::STEEL_BLUE)
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });

                let row_style = if is_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };

                Row::new(vec![
                    Cell::from(format!("{prefix}{}", m.id)),
                    Cell::from(m.name.clone()).style(name_style),
                    Cell::from(m.country.clone().unwrap_or_else(|| "─".into())),
                    Cell::from(m.type_summary()),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(3),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let throbber = Throbber::default()
            .label("Loading manufacturer catalog…")
            .style(Style::default().fg(theme::AMBER));
        let line_area = Rect {
            x: area.x + 2,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        let mut state = self.throbber.clone();
        frame.render_stateful_widget(throbber, line_area, &mut state);
    }

    fn render_load_failure(&self, frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Could not load the catalog: {message}"),
                theme::error_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  r ", theme::key_hint_key()),
                Span::styled("retry", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Centered detail popup, rendered over the table.
    fn render_detail_popup(&self, frame: &mut Frame, area: Rect) {
        let width = 62u16.min(area.width.saturating_sub(4));
        let height = 12u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(area.x + x, area.y + y, width, height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_PANEL)),
            popup_area,
        );

        let title = match &self.detail {
            DetailState::Loaded(detail) if !detail.name.is_empty() => {
                format!(" {} ", detail.name)
            }
            _ => " Manufacturer ".to_owned(),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let body: Vec<Line> = match &self.detail {
            DetailState::None => vec![],
            DetailState::Fetching { id } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  Fetching details for manufacturer {id}…"),
                    Style::default().fg(theme::FOG),
                )),
            ],
            DetailState::Loaded(detail) => {
                let field = |label: &str, value: Option<&str>| {
                    Line::from(vec![
                        Span::styled(format!("  {label:<18}"), theme::key_hint()),
                        Span::styled(
                            value.unwrap_or("─").to_owned(),
                            Style::default().fg(theme::FOG),
                        ),
                    ])
                };
                let head = detail.current_head.as_ref().map(|head| {
                    match &detail.current_head_title {
                        Some(title) => format!("{head} ({title})"),
                        None => head.clone(),
                    }
                });
                let location = detail.location_line();
                vec![
                    Line::from(""),
                    field("Registered Name", detail.registered_name.as_deref()),
                    field("Current Head", head.as_deref()),
                    field("Address", detail.address.as_deref()),
                    field(
                        "Location",
                        (!location.is_empty()).then_some(location.as_str()),
                    ),
                ]
            }
            DetailState::Failed { id, message } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  Details for manufacturer {id} unavailable:"),
                    theme::error_style(),
                )),
                Line::from(Span::styled(format!("  {message}"), theme::error_style())),
            ],
        };
        frame.render_widget(Paragraph::new(body), layout[0]);

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::key_hint_key()),
            Span::styled("close", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }
}

impl Component for ManufacturersScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail_open {
            return match key.code {
                KeyCode::Esc => {
                    self.detail_open = false;
                    Ok(Some(Action::ClearDetail))
                }
                _ => Ok(None),
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('G') => {
                let len = self.cached_view.len();
                if len > 0 {
                    self.select(len - 1);
                }
                Ok(None)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_selection(10);
                Ok(None)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_selection(-10);
                Ok(None)
            }
            KeyCode::Char('t') | KeyCode::Tab => {
                self.cycle_type_filter();
                Ok(None)
            }
            KeyCode::Char('r') => Ok(Some(Action::RetryLoad)),
            KeyCode::Enter => {
                let id = self.cached_view.get(self.selected_index()).map(|m| m.id);
                if let Some(id) = id {
                    self.detail_open = true;
                    Ok(Some(Action::SelectManufacturer(id)))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ManufacturersUpdated(list) => {
                self.manufacturers = Arc::clone(list);
                self.recompute();
                let len = self.cached_view.len();
                if len > 0 && self.selected_index() >= len {
                    self.select(len - 1);
                }
            }
            Action::LoadStateChanged(state) => {
                self.load_state = state.clone();
            }
            Action::DetailChanged(state) => {
                self.detail = state.clone();
                // A cleared slot closes the popup; anything else keeps it open.
                self.detail_open = !matches!(state, DetailState::None);
            }
            Action::SearchInput(query) => {
                self.search_query.clone_from(query);
                self.recompute();
                self.select(0);
            }
            Action::CloseSearch => {
                self.search_query.clear();
                self.recompute();
            }
            Action::Tick => {
                let busy = matches!(self.load_state, LoadState::Loading)
                    || matches!(self.detail, DetailState::Fetching { .. });
                if busy {
                    self.throbber.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let shown = self.cached_view.len();
        let total = self.manufacturers.len();

        let title = format!(" Manufacturers ({shown}/{total}) ");
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.load_state {
            LoadState::Loading | LoadState::Idle => {
                self.render_loading(frame, inner);
                return;
            }
            LoadState::Failed { message } => {
                self.render_load_failure(frame, inner, message);
                return;
            }
            LoadState::Loaded { .. } => {}
        }

        let layout = Layout::vertical([
            Constraint::Length(1), // filter bar
            Constraint::Min(1),    // table
            Constraint::Length(1), // hints
        ])
        .split(inner);

        self.render_filter_bar(frame, layout[0]);
        self.render_table(frame, layout[1]);

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("t ", theme::key_hint_key()),
            Span::styled("type filter  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);

        if self.detail_open {
            self.render_detail_popup(frame, area);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
