//! Input adapter
//!
//! Raw pointer, touch and keyboard events become game commands. No debouncing
//! here: the simulation drops fire requests while a shot is in flight.

/// A raw input event, already stripped of platform types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Click/tap on the playfield
    PointerDown,
    /// Touch start on the playfield
    TouchStart,
    /// Key pressed (`KeyboardEvent.code`, e.g. "Space")
    Key(String),
    /// Click on the win panel
    WinPanelClick,
}

/// What the game should do about an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire,
    Restart,
    ToggleAutopilot,
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub fire: String,
    pub autopilot: String,
}

impl KeyBindings {
    pub fn from_settings(settings: &crate::settings::Settings) -> Self {
        Self {
            fire: settings.fire_key.clone(),
            autopilot: settings.autopilot_key.clone(),
        }
    }
}

/// Map an event to a command. `None` means the event is not ours and its
/// default browser action should be left alone.
pub fn translate(event: &InputEvent, keys: &KeyBindings) -> Option<Command> {
    match event {
        InputEvent::PointerDown | InputEvent::TouchStart => Some(Command::Fire),
        InputEvent::WinPanelClick => Some(Command::Restart),
        InputEvent::Key(code) if *code == keys.fire => Some(Command::Fire),
        InputEvent::Key(code) if !keys.autopilot.is_empty() && *code == keys.autopilot => {
            Some(Command::ToggleAutopilot)
        }
        InputEvent::Key(_) => None,
    }
}
