//! Keyboard input handling
//!
//! Most terminals only report key presses (plus auto-repeat), never
//! releases. A pressed key is therefore treated as held for a few frames
//! after its last press or repeat. Terminals that do report releases switch
//! the tracker to exact press/release tracking.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{Key, KeySource};

/// Frames a key stays down after a press without a matching release
pub const HOLD_FRAMES: u32 = 8;

/// Map a terminal key to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::LeftDown),
        KeyCode::Up => Some(Key::RightUp),
        KeyCode::Down => Some(Key::RightDown),
        KeyCode::Char(' ') => Some(Key::Serve),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
        _ => None,
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks which game keys count as held this frame
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashMap<Key, u32>, // frames left; ignored once releases are seen
    releases_seen: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &KeyEvent) {
        if event.kind != KeyEventKind::Release && is_quit(event) {
            self.quit = true;
            return;
        }

        let Some(key) = map_key(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(key, HOLD_FRAMES);
            }
            KeyEventKind::Release => {
                self.releases_seen = true;
                self.held.remove(&key);
            }
        }
    }

    /// Age held keys by one frame
    pub fn end_frame(&mut self) {
        if self.releases_seen {
            return;
        }
        self.held.retain(|_, frames| {
            *frames = frames.saturating_sub(1);
            *frames > 0
        });
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl KeySource for KeyTracker {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }
}
