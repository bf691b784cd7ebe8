/// Keys the slide view reacts to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// Clickable controls.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Start,
    PlayPause,
    Previous,
    Next,
    DecreaseDuration,
    IncreaseDuration,
    LoopToggle,
    SpeechToggle,
    ThemeToggle,
}

/// Result of offering a key press to the controller. `suppress_default` is
/// for hosts where the key also has a built-in action, such as page scrolling
/// in a browser; raylib has none, so the window frontend only logs it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct KeyOutcome {
    pub handled: bool,
    /// The host should skip its default action (e.g. scrolling).
    pub suppress_default: bool,
}

impl KeyOutcome {
    pub const IGNORED: KeyOutcome = KeyOutcome { handled: false, suppress_default: false };

    pub fn handled(suppress_default: bool) -> Self {
        Self { handled: true, suppress_default }
    }
}
