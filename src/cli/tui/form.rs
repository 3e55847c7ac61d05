//! Network configuration form
//!
//! A single-screen form: interface selector, DHCP toggles, static address
//! inputs and the OK / Cancel / Show Network Config buttons. Submitting goes
//! through [`ConfigWriter`]; failures are shown in place so the input can be
//! corrected and submitted again.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::core::form::FormValues;
use crate::core::netplan::NetplanDocument;
use crate::core::writer::ConfigWriter;
use crate::error::{InterfaceError, SubmitError};
use crate::infra::interfaces::list_interfaces;

/// Source of interface names, re-queried whenever the form restarts
pub type InterfaceSource = fn() -> Result<Vec<String>, InterfaceError>;

const LABEL_WIDTH: usize = 32;
const MODAL_PAGE: u16 = 10;

/// Form application state
pub struct NetworkFormTui {
    /// Writes and applies the document
    writer: ConfigWriter,
    /// Where interface names come from
    interface_source: InterfaceSource,
    /// Interface names offered by the selector
    interfaces: Vec<String>,
    /// Selector position (meaningless when `interfaces` is empty)
    selected: usize,
    /// Current field values
    values: FormValues,
    /// Document currently on disk, used for pre-filling
    existing: Option<NetplanDocument>,
    /// Focused field
    focus: Field,
    /// Current view mode
    view_mode: ViewMode,
    /// Text shown in the config modal
    modal_text: String,
    /// First visible line of the modal
    modal_scroll: u16,
    /// Last result or error
    status: Option<StatusMessage>,
}

/// View mode for the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The form itself
    Form,
    /// Read-only view of the file on disk
    ConfigModal,
}

/// Focusable form elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Interface,
    Dhcp4,
    Dhcp6,
    Address,
    Gateway,
    Nameservers,
    Confirm,
    Cancel,
    ShowConfig,
}

impl Field {
    const ORDER: [Field; 9] = [
        Field::Interface,
        Field::Dhcp4,
        Field::Dhcp6,
        Field::Address,
        Field::Gateway,
        Field::Nameservers,
        Field::Confirm,
        Field::Cancel,
        Field::ShowConfig,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn is_button(self) -> bool {
        matches!(self, Field::Confirm | Field::Cancel | Field::ShowConfig)
    }

    fn is_text(self) -> bool {
        matches!(self, Field::Address | Field::Gateway | Field::Nameservers)
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing beyond the state change already made
    None,
    /// Write and apply the configuration
    Submit,
    /// Open the config modal
    ShowConfig,
    /// Leave without writing
    Quit,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Message shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl NetworkFormTui {
    /// Create the form, querying interfaces from the OS
    pub fn new(writer: ConfigWriter) -> Result<Self, InterfaceError> {
        Self::with_interface_source(writer, list_interfaces)
    }

    /// Create the form with a custom interface source
    pub fn with_interface_source(
        writer: ConfigWriter,
        interface_source: InterfaceSource,
    ) -> Result<Self, InterfaceError> {
        let mut tui = Self {
            writer,
            interface_source,
            interfaces: Vec::new(),
            selected: 0,
            values: FormValues::default(),
            existing: None,
            focus: Field::Interface,
            view_mode: ViewMode::Form,
            modal_text: String::new(),
            modal_scroll: 0,
            status: None,
        };
        tui.restart()?;
        Ok(tui)
    }

    /// Current field values
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Focused field
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Last status message
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Text shown by the config modal
    pub fn modal_text(&self) -> &str {
        &self.modal_text
    }

    /// First line of the modal text currently shown
    pub fn modal_scroll(&self) -> u16 {
        self.modal_scroll
    }

    /// Run the form until the user quits
    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop
    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.handle_key(key) {
                FormAction::None => {}
                FormAction::Quit => return Ok(()),
                FormAction::ShowConfig => self.open_config_modal(),
                FormAction::Submit => {
                    // The applier blocks, so show progress before calling it
                    self.status = Some(StatusMessage::new(StatusKind::Info, "Applying..."));
                    terminal.draw(|f| self.draw(f))?;
                    self.submit()?;
                }
            }
        }
    }

    /// Re-enumerate interfaces, reload the file and pre-fill the fields
    ///
    /// Keeps the previously selected interface when it still exists.
    pub fn restart(&mut self) -> Result<(), InterfaceError> {
        let previous = self.selected_interface().map(String::from);

        self.interfaces = (self.interface_source)()?;
        self.selected = previous
            .and_then(|name| self.interfaces.iter().position(|i| *i == name))
            .unwrap_or(0);

        self.existing = match self.writer.load_current() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Ignoring existing configuration: {e}");
                None
            }
        };

        self.values = FormValues::for_interface(self.selected_interface().map(String::from));
        self.prefill();
        self.focus = Field::Interface;
        self.view_mode = ViewMode::Form;
        Ok(())
    }

    /// Name under the selector, `None` when there are no interfaces
    pub fn selected_interface(&self) -> Option<&str> {
        self.interfaces.get(self.selected).map(String::as_str)
    }

    /// Point the values at the selected interface
    ///
    /// Fields are overwritten only when the file on disk has an entry for it;
    /// otherwise whatever was typed is kept.
    fn prefill(&mut self) {
        let interface = self.selected_interface().map(String::from);
        if let Some(settings) = interface
            .as_deref()
            .and_then(|name| self.existing.as_ref()?.interface(name))
        {
            self.values.fill_from(settings);
        }
        self.values.interface = interface;
    }

    /// Write and apply the current values
    ///
    /// Only a failure to re-enumerate interfaces afterwards is returned;
    /// submission errors become the status message.
    pub fn submit(&mut self) -> Result<(), InterfaceError> {
        match self.writer.submit(&self.values) {
            Ok(outcome) => {
                let mut text = format!("Configuration written to {}", outcome.path.display());
                match outcome.apply_output.as_deref().map(str::trim) {
                    Some("") => text.push_str(" and applied."),
                    Some(output) => text.push_str(&format!(" and applied.\n{output}")),
                    None => text.push('.'),
                }
                self.restart()?;
                self.status = Some(StatusMessage::new(StatusKind::Success, text));
            }
            Err(e) => {
                tracing::warn!("Submit failed: {e}");
                self.status = Some(StatusMessage::new(StatusKind::Error, describe_error(&e)));
            }
        }
        Ok(())
    }

    /// Load the file on disk into the modal
    pub fn open_config_modal(&mut self) {
        self.modal_text = match self.writer.read_current() {
            Ok(content) => content,
            Err(e) => e.to_string(),
        };
        self.modal_scroll = 0;
        self.view_mode = ViewMode::ConfigModal;
    }

    /// Apply a key press to the form state
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return FormAction::Quit;
        }

        match self.view_mode {
            ViewMode::ConfigModal => {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                        self.view_mode = ViewMode::Form;
                    }
                    KeyCode::Up | KeyCode::Char('k') => self.scroll_modal_up(1),
                    KeyCode::Down | KeyCode::Char('j') => self.scroll_modal_down(1),
                    KeyCode::PageUp => self.scroll_modal_up(MODAL_PAGE),
                    KeyCode::PageDown => self.scroll_modal_down(MODAL_PAGE),
                    KeyCode::Home => self.modal_scroll = 0,
                    _ => {}
                }
                FormAction::None
            }
            ViewMode::Form => self.handle_form_key(key),
        }
    }

    fn scroll_modal_up(&mut self, lines: u16) {
        self.modal_scroll = self.modal_scroll.saturating_sub(lines);
    }

    /// Scrolling stops with the last line of the file at the top
    fn scroll_modal_down(&mut self, lines: u16) {
        let last = u16::try_from(self.modal_text.lines().count().saturating_sub(1))
            .unwrap_or(u16::MAX);
        self.modal_scroll = self.modal_scroll.saturating_add(lines).min(last);
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return FormAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return FormAction::None;
            }
            _ => {}
        }

        match self.focus {
            Field::Interface => self.handle_selector_key(key.code),
            Field::Dhcp4 | Field::Dhcp6 => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    let flag = if self.focus == Field::Dhcp4 {
                        &mut self.values.dhcp4
                    } else {
                        &mut self.values.dhcp6
                    };
                    *flag = !*flag;
                }
                FormAction::None
            }
            field if field.is_text() => {
                self.handle_text_key(key);
                FormAction::None
            }
            _ => self.handle_button_key(key.code),
        }
    }

    fn handle_selector_key(&mut self, code: KeyCode) -> FormAction {
        if self.interfaces.is_empty() {
            return FormAction::None;
        }

        let len = self.interfaces.len();
        let new_index = match code {
            KeyCode::Left => (self.selected + len - 1) % len,
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => (self.selected + 1) % len,
            _ => return FormAction::None,
        };

        if new_index != self.selected {
            self.selected = new_index;
            self.prefill();
        }
        FormAction::None
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let buffer = match self.focus {
            Field::Address => &mut self.values.address,
            Field::Gateway => &mut self.values.gateway,
            Field::Nameservers => &mut self.values.nameservers,
            _ => return,
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn handle_button_key(&mut self, code: KeyCode) -> FormAction {
        match code {
            KeyCode::Left if self.focus != Field::Confirm => {
                self.focus = self.focus.prev();
                FormAction::None
            }
            KeyCode::Right if self.focus != Field::ShowConfig => {
                self.focus = self.focus.next();
                FormAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Field::Confirm => FormAction::Submit,
                Field::Cancel => FormAction::Quit,
                Field::ShowConfig => FormAction::ShowConfig,
                _ => FormAction::None,
            },
            _ => FormAction::None,
        }
    }

    /// Draw the form
    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Form
                Constraint::Length(5), // Status message
                Constraint::Length(3), // Help
            ])
            .split(f.area());

        self.draw_title(f, chunks[0]);
        self.draw_form(f, chunks[1]);
        self.draw_status(f, chunks[2]);
        self.draw_help(f, chunks[3]);

        if self.view_mode == ViewMode::ConfigModal {
            self.draw_config_modal(f, f.area());
        }
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title_block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan));

        let title_text = Paragraph::new("Configure Networking")
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .block(title_block);

        f.render_widget(title_text, area);
    }

    fn draw_form(&self, f: &mut Frame, area: Rect) {
        let interface = match self.selected_interface() {
            Some(name) if self.interfaces.len() > 1 => format!("< {name} >"),
            Some(name) => name.to_string(),
            None => "(no interfaces found)".to_string(),
        };
        let checkbox = |on: bool| String::from(if on { "[x]" } else { "[ ]" });

        let mut lines = vec![
            self.field_line(Field::Interface, "Interface Name", interface, false),
            self.field_line(Field::Dhcp4, "DHCP", checkbox(self.values.dhcp4), false),
            self.field_line(Field::Dhcp6, "DHCPv6", checkbox(self.values.dhcp6), false),
            self.field_line(
                Field::Address,
                "IPv4 Address (cidr format)",
                self.values.address.clone(),
                self.values.dhcp4,
            ),
            self.field_line(
                Field::Gateway,
                "Gateway",
                self.values.gateway.clone(),
                self.values.dhcp4,
            ),
            self.field_line(
                Field::Nameservers,
                "DNS Servers (comma separated)",
                self.values.nameservers.clone(),
                self.values.dhcp4,
            ),
            Line::from(""),
        ];

        let buttons: Vec<Span> = [
            (Field::Confirm, "OK"),
            (Field::Cancel, "Cancel"),
            (Field::ShowConfig, "Show Network Config"),
        ]
        .into_iter()
        .flat_map(|(field, label)| {
            let style = if self.focus == field {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            [Span::raw("  "), Span::styled(format!("[ {label} ]"), style)]
        })
        .collect();
        lines.push(Line::from(buttons));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Network Interface ({})", self.writer.path().display()));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn field_line(&self, field: Field, label: &str, value: String, disabled: bool) -> Line<'static> {
        let focused = self.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let value = if focused && field.is_text() {
            format!("{value}_")
        } else {
            value
        };

        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::styled(value, value_style),
        ])
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match &self.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => Color::Cyan,
                    StatusKind::Success => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                (status.text.as_str(), Style::default().fg(color))
            }
            None => ("", Style::default()),
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status"));

        f.render_widget(paragraph, area);
    }

    fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help = match self.view_mode {
            ViewMode::ConfigModal => "↑↓/PgUp/PgDn: Scroll • Enter/Esc: Close • Ctrl+C: Quit",
            ViewMode::Form if self.focus == Field::Interface => {
                "←→: Change interface • Tab/↑↓: Move • Esc: Cancel • Ctrl+C: Quit"
            }
            ViewMode::Form if self.focus.is_button() => {
                "Enter: Activate • ←→/Tab: Move • Esc: Cancel • Ctrl+C: Quit"
            }
            ViewMode::Form => {
                "Space: Toggle • Type to edit • Tab/↑↓: Move • Esc: Cancel • Ctrl+C: Quit"
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::DarkGray));

        f.render_widget(Paragraph::new(help).block(block), area);
    }

    fn draw_config_modal(&self, f: &mut Frame, area: Rect) {
        let modal_area = centered_rect(80, 80, area);

        let mut lines: Vec<Line> = self
            .modal_text
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[ OK ]",
            Style::default().bg(Color::Blue).fg(Color::White),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.writer.path().display().to_string())
            .style(Style::default().fg(Color::White));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.modal_scroll, 0))
            .block(block);

        f.render_widget(Clear, modal_area);
        f.render_widget(paragraph, modal_area);
    }
}

/// Status text for a failed submission
fn describe_error(error: &SubmitError) -> String {
    match error {
        SubmitError::Validation(e) => format!("Invalid input: {e}"),
        SubmitError::Document(_) | SubmitError::Io(_) => error.to_string(),
        SubmitError::Apply(e) => format!("Configuration written but not applied: {e}"),
    }
}

/// Rectangle of the given percentage size centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
