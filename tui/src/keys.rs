//! Key event sources and their mapping onto menu keys.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;

use saaty_core::MenuKey;
use saaty_types::SaatyError;

/// A blocking stream of raw terminal events.
pub trait KeySource {
    fn next_event(&mut self) -> Result<Event, SaatyError>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_event(&mut self) -> Result<Event, SaatyError> {
        (**self).next_event()
    }
}

/// Reads events from the terminal via crossterm. Blocks until one arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_event(&mut self) -> Result<Event, SaatyError> {
        event::read().map_err(|err| SaatyError::input_unavailable(err.to_string()))
    }
}

/// Replays a fixed sequence of events; fails once the sequence runs out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    events: VecDeque<Event>,
}

impl ScriptedKeys {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Key presses with no modifiers.
    pub fn presses(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            codes
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<Event, SaatyError> {
        self.events
            .pop_front()
            .ok_or_else(|| SaatyError::input_unavailable("key script exhausted"))
    }
}

/// What the navigator should do with one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Menu(MenuKey),
    /// Re-render without a state change (terminal resized).
    Redraw,
    /// Ctrl+C: raw mode swallows SIGINT, so the menu raises it instead.
    Interrupt,
    Ignore,
}

#[must_use]
pub fn classify(event: &Event) -> KeyAction {
    match event {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => KeyAction::Ignore,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Interrupt,
        Event::Key(KeyEvent { code, .. }) => KeyAction::Menu(match code {
            KeyCode::Up => MenuKey::Previous,
            KeyCode::Down => MenuKey::Next,
            KeyCode::Enter => MenuKey::Confirm,
            _ => MenuKey::Other,
        }),
        Event::Resize(..) => KeyAction::Redraw,
        _ => KeyAction::Ignore,
    }
}
