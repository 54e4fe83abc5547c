//! Logical keys and per-frame input snapshot

/// Keys the game cares about, independent of the physical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Serve,
    Restart,
}

/// Anything that can answer "is this key held right now"
pub trait KeySource {
    fn is_down(&self, key: Key) -> bool;
}

/// Keys held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub serve: bool,
    pub restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every key from `source`
    pub fn poll(source: &impl KeySource) -> Self {
        Self {
            left_up: source.is_down(Key::LeftUp),
            left_down: source.is_down(Key::LeftDown),
            right_up: source.is_down(Key::RightUp),
            right_down: source.is_down(Key::RightDown),
            serve: source.is_down(Key::Serve),
            restart: source.is_down(Key::Restart),
        }
    }

    /// -1 = up, 0 = stop, 1 = down; opposite keys cancel
    pub fn left_dir(&self) -> i8 {
        axis(self.left_up, self.left_down)
    }

    pub fn right_dir(&self) -> i8 {
        axis(self.right_up, self.right_down)
    }
}

fn axis(up: bool, down: bool) -> i8 {
    match (up, down) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}
