use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Write;

use super::plant::Garden;
use super::player::{Direction, Player};
use super::render::{draw, render};

/// What a keystroke asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Quit,
    /// Unbound key: nothing changes, but the screen is still redrawn.
    Idle,
}

impl Action {
    /// `w`/`k` up, `s`/`j` down, `a`/`h` left, `d`/`l` right, `q` quits.
    /// Letters are case-insensitive and only count without Ctrl/Alt; arrow
    /// keys move and `Ctrl-C` quits too.
    pub fn from_key(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(_) if !KeyModifiers::SHIFT.contains(key.modifiers) => Action::Idle,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' | 'k' => Action::Move(Direction::Up),
                's' | 'j' => Action::Move(Direction::Down),
                'a' | 'h' => Action::Move(Direction::Left),
                'd' | 'l' => Action::Move(Direction::Right),
                'q' => Action::Quit,
                _ => Action::Idle,
            },
            KeyCode::Up => Action::Move(Direction::Up),
            KeyCode::Down => Action::Move(Direction::Down),
            KeyCode::Left => Action::Move(Direction::Left),
            KeyCode::Right => Action::Move(Direction::Right),
            _ => Action::Idle,
        }
    }
}

/// A blocking source of keystrokes.
pub trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Keystrokes from the terminal via crossterm. Blocks until a key is pressed.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }
}

/// Draw the garden, then read one key at a time until quit, redrawing after
/// every key (moves and unbound keys alike).
pub fn walk<K: KeySource, W: Write>(
    garden: &Garden,
    player: &mut Player,
    keys: &mut K,
    out: &mut W,
) -> Result<()> {
    draw(out, &render(garden, player))?;
    loop {
        let key = keys.next_key()?;
        match Action::from_key(&key) {
            Action::Quit => return Ok(()),
            Action::Move(dir) => player.step(dir),
            Action::Idle => {}
        }
        draw(out, &render(garden, player))?;
    }
}
