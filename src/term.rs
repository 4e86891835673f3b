use std::{io::{Stdout, Write, stdout}, time::Duration};

use crate::board::{Board, Cell};
use crate::draw::{Drawable, Renderer, Sprite};
use crate::error::GameError;
use crate::game::{InputEvent, InputSource};
use crate::snake::Direction;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, warn};

// Each cell is two characters wide so squares look square
const CELL_CHARS: &str = "[]";
const EMPTY_CHARS: &str = "  ";

const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const TEXT_COLOR: Color = Color::Rgb { r: 255, g: 255, b: 255 };

type TermPos = (u16, u16);

pub struct TermManager {
    board: Board,
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new(board: Board) -> Self {
        TermManager { board, stdout: stdout(), active: false }
    }

    /// Terminal size needed to show the whole board and its border.
    pub fn required_size(board: Board) -> TermPos {
        (board.width() * 2 + 2, board.height() + 2)
    }

    pub fn setup(&mut self) -> Result<(), GameError> {
        let needed = Self::required_size(self.board);
        let actual = terminal::size()?;
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(GameError::TerminalTooSmall { needed, actual });
        }

        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        debug!("terminal set up, size {:?}", actual);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), GameError> {
        if !self.active {
            return Ok(());
        }

        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> Result<(), GameError> {
        let (width, height) = Self::required_size(self.board);
        let end_x = width - 1;
        let end_y = height - 1;

        queue!(self.stdout, style::SetForegroundColor(BORDER_COLOR), style::SetBackgroundColor(BACKGROUND_COLOR))?;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        Ok(())
    }

    fn term_pos(&self, cell: Cell) -> TermPos {
        (cell.x * 2 + 1, cell.y + 1)
    }

    fn paint_cell(&mut self, cell: Cell, fill: Option<Color>) -> Result<(), GameError> {
        let pos = self.term_pos(cell);
        match fill {
            Some(color) => queue!(
                self.stdout,
                cursor::MoveTo(pos.0, pos.1),
                style::SetBackgroundColor(color),
                style::SetForegroundColor(BORDER_COLOR),
                style::Print(CELL_CHARS)
            )?,
            None => queue!(
                self.stdout,
                cursor::MoveTo(pos.0, pos.1),
                style::SetBackgroundColor(BACKGROUND_COLOR),
                style::Print(EMPTY_CHARS)
            )?,
        }

        Ok(())
    }

    fn show_message(&mut self, lines: &[String]) -> Result<(), GameError> {
        let (width, height) = Self::required_size(self.board);
        let msg_width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 2;
        let left = width.saturating_sub(msg_width) / 2;
        let top = height.saturating_sub(lines.len() as u16) / 2;

        queue!(self.stdout, style::SetBackgroundColor(BACKGROUND_COLOR), style::SetForegroundColor(TEXT_COLOR))?;
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            queue!(self.stdout, cursor::MoveTo(left, top + i as u16), style::Print(padded_line))?;
        }

        self.stdout.flush().map_err(crossterm::ErrorKind::from)?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("could not restore terminal: {}", e);
        }
    }
}

impl Renderer for TermManager {
    fn clear(&mut self) -> Result<(), GameError> {
        queue!(self.stdout, style::SetBackgroundColor(BACKGROUND_COLOR), terminal::Clear(ClearType::All))?;
        self.draw_borders()?;
        self.stdout.flush().map_err(crossterm::ErrorKind::from)?;
        Ok(())
    }

    fn draw_frame(&mut self, items: &[&dyn Drawable], vacated: Option<Cell>) -> Result<(), GameError> {
        if let Some(cell) = vacated {
            self.paint_cell(cell, None)?;
        }

        for item in items {
            let color = match item.sprite() {
                Sprite::Apple => APPLE_COLOR,
                Sprite::SnakeSegment => SNAKE_COLOR,
            };
            for cell in item.cells() {
                self.paint_cell(cell, Some(color))?;
            }
        }

        self.stdout.flush().map_err(crossterm::ErrorKind::from)?;
        Ok(())
    }

    fn show_scores(&mut self, score: u32, ranking: &[u32], won: bool) -> Result<(), GameError> {
        self.clear()?;

        let mut lines = vec![
            if won {"You won!".to_owned()} else {"Game over!".to_owned()},
            format!("Score: {}", score),
            String::new(),
            "High scores".to_owned(),
        ];
        lines.extend(ranking.iter().enumerate().map(|(i, s)| format!("{:>2}. {:>4}", i + 1, s)));

        self.show_message(&lines)
    }
}

/// Keyboard events from the terminal. Only useful once a `TermManager` has
/// switched it to raw mode.
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>, GameError> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError> {
        Ok(self.read_key_events_queue()?.iter().map(key_to_input).collect())
    }
}

fn key_to_input(ev: &KeyEvent) -> InputEvent {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => InputEvent::Quit,
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Esc => InputEvent::Quit,
            KeyCode::Char('w') | KeyCode::Up => InputEvent::Turn(Direction::Up),
            KeyCode::Char('a') | KeyCode::Left => InputEvent::Turn(Direction::Left),
            KeyCode::Char('s') | KeyCode::Down => InputEvent::Turn(Direction::Down),
            KeyCode::Char('d') | KeyCode::Right => InputEvent::Turn(Direction::Right),
            _ => InputEvent::Other,
        }
    }
}
