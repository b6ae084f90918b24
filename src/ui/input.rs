//! Input dispatch: terminal events to replay commands
//!
//! Every event maps to exactly one [`Command`]. Anything without a binding,
//! including key releases, mouse and resize events, becomes
//! [`Command::Unknown`] and is ignored by the app.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rustc_hash::FxHashMap;

/// What an input event asks the replay to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Reset,
    Next,
    Previous,
    Unknown,
}

/// Key bindings
#[derive(Debug, Clone)]
pub struct KeyMap {
    plain: FxHashMap<KeyCode, Command>,
    ctrl: FxHashMap<KeyCode, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut plain = FxHashMap::default();
        plain.insert(KeyCode::Char('q'), Command::Quit);
        plain.insert(KeyCode::Char('Q'), Command::Quit);
        plain.insert(KeyCode::Esc, Command::Quit);
        plain.insert(KeyCode::Char('r'), Command::Reset);
        plain.insert(KeyCode::Char('R'), Command::Reset);
        plain.insert(KeyCode::Char(' '), Command::Next);
        plain.insert(KeyCode::Right, Command::Next);
        plain.insert(KeyCode::Backspace, Command::Previous);
        plain.insert(KeyCode::Left, Command::Previous);

        // Raw mode swallows SIGINT, so these stand in for closing the window
        let mut ctrl = FxHashMap::default();
        ctrl.insert(KeyCode::Char('c'), Command::Quit);
        ctrl.insert(KeyCode::Char('d'), Command::Quit);

        KeyMap { plain, ctrl }
    }
}

impl KeyMap {
    pub fn dispatch(&self, event: &Event) -> Command {
        match event {
            Event::Key(key) => self.dispatch_key(key),
            _ => Command::Unknown,
        }
    }

    fn dispatch_key(&self, key: &KeyEvent) -> Command {
        if key.kind != KeyEventKind::Press {
            return Command::Unknown;
        }
        let table = if key.modifiers.contains(KeyModifiers::CONTROL) {
            &self.ctrl
        } else {
            &self.plain
        };
        table.get(&key.code).copied().unwrap_or(Command::Unknown)
    }
}
