//! Terminal UI demo using crossterm and ratatui.
//!
//! Draws the on-screen keyboard in the terminal. Move the selection with the
//! arrow keys, actuate with Enter, quit with Esc.
//! Run with: cargo run --example tui_keyboard

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ropey::Rope;
use softboard::{Keyboard, KeyboardLayout, Signal, Surface};
use std::cell::RefCell;
use std::io;
use std::ops::Range;
use std::rc::Rc;

/// Terminal rendering of the key tree
struct TuiSurface {
    faces: Vec<String>,
    active: Vec<bool>,
    rows: Vec<Range<usize>>,
    visible: bool,
}

impl TuiSurface {
    fn new() -> Self {
        Self {
            faces: Vec::new(),
            active: Vec::new(),
            rows: Vec::new(),
            visible: false,
        }
    }
}

impl Surface for TuiSurface {
    fn mount(&mut self, layout: &KeyboardLayout) {
        self.faces = layout
            .keys()
            .iter()
            .map(|k| match k.icon {
                Some(icon) => icon.symbol().to_string(),
                None => k.label.clone(),
            })
            .collect();
        self.active = vec![false; layout.len()];
        self.rows = layout.rows();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn relabel(&mut self, index: usize, label: &str) {
        self.faces[index] = label.to_string();
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }
}

/// Single-line editor that interprets the keyboard's sentinels
struct EditorField {
    rope: Rope,
    cursor: usize,
}

impl EditorField {
    fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self { rope, cursor }
    }

    fn apply(&mut self, value: &str) {
        match value {
            "Backspace" => {
                if self.cursor > 0 {
                    self.rope.remove(self.cursor - 1..self.cursor);
                    self.cursor -= 1;
                }
            }
            "Left" => self.cursor = self.cursor.saturating_sub(1),
            "Right" => self.cursor = (self.cursor + 1).min(self.rope.len_chars()),
            "Tab" => self.insert("\t"),
            // Remaining multi-char values are named keys with no text
            v if v.chars().count() == 1 => self.insert(v),
            _ => {}
        }
    }

    fn insert(&mut self, text: &str) {
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }
}

struct App {
    keyboard: Keyboard<TuiSurface>,
    field: Rc<RefCell<EditorField>>,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let mut app = Self {
            keyboard: Keyboard::new(TuiSurface::new()),
            field: Rc::new(RefCell::new(EditorField::new("root@target:~# "))),
            selected: 0,
            message: String::new(),
            should_quit: false,
        };
        app.open_keyboard();
        app
    }

    fn open_keyboard(&mut self) {
        let field = Rc::clone(&self.field);
        let initial = field.borrow().rope.to_string();
        self.keyboard
            .open_with(&initial, move |value| field.borrow_mut().apply(value));
    }

    fn row_of(&self, index: usize) -> usize {
        let rows = &self.keyboard.surface().rows;
        rows.iter()
            .position(|r| r.contains(&index))
            .unwrap_or(0)
    }

    fn move_vertical(&mut self, down: bool) {
        let rows = self.keyboard.surface().rows.clone();
        let row = self.row_of(self.selected);
        let target = if down {
            (row + 1).min(rows.len().saturating_sub(1))
        } else {
            row.saturating_sub(1)
        };
        let col = self.selected - rows[row].start;
        let target_row = &rows[target];
        self.selected = (target_row.start + col).min(target_row.end - 1);
    }

    fn handle_key(&mut self, code: CKeyCode) {
        if !self.keyboard.is_visible() {
            match code {
                CKeyCode::Enter => self.open_keyboard(),
                CKeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let last = self.keyboard.layout().len().saturating_sub(1);
        match code {
            CKeyCode::Left => self.selected = self.selected.saturating_sub(1),
            CKeyCode::Right => self.selected = (self.selected + 1).min(last),
            CKeyCode::Up => self.move_vertical(false),
            CKeyCode::Down => self.move_vertical(true),
            CKeyCode::Esc => self.should_quit = true,
            CKeyCode::Enter => match self.keyboard.press(self.selected) {
                Ok(Signal::Input(v)) => self.message = format!("last key: {v:?}"),
                Ok(Signal::Close) => {
                    self.message = "keyboard hidden, Enter to reopen".to_string()
                }
                Err(e) => self.message = e.to_string(),
            },
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.size());

    let field = app.field.borrow();
    let text = field.rope.to_string();
    let (before, after) = text.split_at(
        text.char_indices()
            .nth(field.cursor)
            .map(|(i, _)| i)
            .unwrap_or(text.len()),
    );
    let editor = Paragraph::new(Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled("|", Style::default().fg(Color::Yellow)),
        Span::raw(after.to_string()),
    ]))
    .block(Block::default().borders(Borders::ALL).title("field"));
    f.render_widget(editor, chunks[0]);

    let surface = app.keyboard.surface();
    if surface.visible {
        let mut lines = vec![];
        for row in &surface.rows {
            let mut spans = vec![];
            for index in row.clone() {
                let mut style = Style::default();
                if surface.active[index] {
                    style = style.fg(Color::Green);
                }
                if index == app.selected {
                    style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("[{}]", surface.faces[index]), style));
            }
            lines.push(Line::from(spans));
        }
        let keys = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("softboard"));
        f.render_widget(keys, chunks[1]);
    }

    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    let res = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &app)) {
            break Err(e);
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Ok(_) => {}
            Err(e) => break Err(e),
        }
        if app.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}
