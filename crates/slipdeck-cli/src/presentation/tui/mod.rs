//! Full-screen presenter.
//!
//! Owns the terminal (raw mode, alternate screen, mouse capture) and
//! the loop that turns crossterm events into session intents. All
//! navigation semantics live in the engine; this layer only
//! normalizes events, draws frames, and manages local chrome state
//! (the jump prompt, the note overlay, transient notices).

mod events;
mod views;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use slipdeck_engine::{
    DeckSession, Edge, InputContext, NavIntent, RawInput, RenderDecision, Viewport, map_input,
};

use crate::config::ViewerConfig;
use events::PointerTracker;
use views::{BodyView, NoteOverlayView, StatusBarView, StatusModel, TopbarView};

/// How long a boundary notice stays on the status bar.
const NOTICE_TTL: Duration = Duration::from_millis(1500);

pub fn run(session: DeckSession, config: &ViewerConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut presenter = Presenter::new(session, config.clone(), size.width, size.height);

    let result = presenter.event_loop(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Presenter state: the session plus terminal-local chrome.
struct Presenter {
    session: DeckSession,
    config: ViewerConfig,
    started: Instant,
    viewport: Viewport,
    status_row: u16,
    pointer: PointerTracker,
    notice: Option<(String, Instant)>,
    /// Digits typed into the jump prompt; `Some` means the prompt is
    /// open and owns the keyboard.
    jump_entry: Option<String>,
    note_visible: bool,
    last_title: String,
    error: Option<String>,
    should_quit: bool,
}

impl Presenter {
    fn new(session: DeckSession, config: ViewerConfig, cols: u16, rows: u16) -> Self {
        let mut presenter = Self {
            session,
            config,
            started: Instant::now(),
            viewport: Viewport::new(0.0, 0.0),
            status_row: rows.saturating_sub(1),
            pointer: PointerTracker::default(),
            notice: None,
            jump_entry: None,
            note_visible: false,
            last_title: String::new(),
            error: None,
            should_quit: false,
        };
        presenter.resize(cols, rows);
        presenter
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.expire_notice();
            terminal.draw(|f| self.render(f))?;

            if let Some(title) = self.pending_title() {
                execute!(terminal.backend_mut(), SetTitle(title.as_str()))?;
                self.last_title = title;
            }

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    Event::Resize(cols, rows) => self.resize(cols, rows),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(
            cols as f64 * self.config.cell_width_px,
            rows as f64 * self.config.cell_height_px,
        );
        self.status_row = rows.saturating_sub(1);
        self.session.set_viewport_height(self.viewport.height_px);
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The open jump prompt owns every keystroke.
        if self.jump_entry.is_some() {
            self.handle_prompt_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('g') => {
                self.jump_entry = Some(String::new());
            }
            KeyCode::Char('n') => {
                self.note_visible = !self.note_visible;
            }
            _ => {
                if let Some(raw) = events::map_key_event(&key) {
                    self.apply_raw(raw);
                }
            }
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(entry) = self.jump_entry.as_mut() {
                    entry.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(entry) = self.jump_entry.as_mut() {
                    entry.pop();
                }
            }
            KeyCode::Enter => {
                let entry = self.jump_entry.take().unwrap_or_default();
                self.submit_jump(&entry);
            }
            KeyCode::Esc => {
                self.jump_entry = None;
            }
            _ => {}
        }
    }

    /// Resolve a typed 1-based slide number into a jump intent.
    fn submit_jump(&mut self, entry: &str) {
        match entry.parse::<usize>() {
            Ok(locator) if locator >= 1 => {
                self.apply_intent(NavIntent::JumpTo(locator - 1));
            }
            _ => {
                self.set_notice("Not a slide number");
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let Some(raw) = self.pointer.feed(&mouse, &self.config, self.status_row) {
            self.apply_raw(raw);
        }
    }

    fn apply_raw(&mut self, raw: RawInput) {
        let ctx = InputContext {
            text_entry_active: self.jump_entry.is_some(),
        };
        if let Some(intent) = map_input(&raw, &ctx) {
            self.apply_intent(intent);
        }
    }

    fn apply_intent(&mut self, intent: NavIntent) {
        match self.session.handle(intent, self.now_ms()) {
            RenderDecision::Redraw => {
                // Next iteration draws the new slide.
            }
            RenderDecision::Boundary(Edge::Start) => self.set_notice("Start of deck"),
            RenderDecision::Boundary(Edge::End) => self.set_notice("End of deck"),
            RenderDecision::None => {}
        }
    }

    fn set_notice(&mut self, message: &str) {
        self.notice = Some((message.to_string(), Instant::now()));
    }

    fn expire_notice(&mut self) {
        if let Some((_, since)) = &self.notice
            && since.elapsed() >= NOTICE_TTL
        {
            self.notice = None;
        }
    }

    fn pending_title(&self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        let frame = self.session.frame(&self.viewport).ok()?;
        (frame.window_title != self.last_title).then(|| frame.window_title)
    }

    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let frame = match self.session.frame(&self.viewport) {
            Ok(frame) => frame,
            Err(err) => {
                // Loud failure: show the error and stop presenting.
                self.error = Some(err.to_string());
                self.should_quit = true;
                let paragraph = Paragraph::new(Span::styled(
                    self.error.as_deref().unwrap_or_default().to_string(),
                    Style::default().fg(Color::Red),
                ))
                .block(Block::default().title("Error").borders(Borders::ALL));
                f.render_widget(paragraph, size);
                return;
            }
        };

        // Main layout: [Topbar | Stage | Status bar]
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

        f.render_widget(TopbarView::new(&frame.topbar), chunks[0]);
        f.render_widget(BodyView::new(&frame), chunks[1]);

        if self.note_visible
            && let Some(note) = &frame.speaker_note
        {
            let overlay = Layout::vertical([Constraint::Min(0), Constraint::Length(5)])
                .split(chunks[1]);
            f.render_widget(NoteOverlayView::new(note), overlay[1]);
        }

        let status = StatusModel {
            locator: self.session.locator(),
            total: self.session.total(),
            notice: self.notice.as_ref().map(|(text, _)| text.clone()),
            jump_entry: self.jump_entry.clone(),
            has_note: frame.speaker_note.is_some(),
        };
        f.render_widget(StatusBarView::new(&status), chunks[2]);
    }
}
