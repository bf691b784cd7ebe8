#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    Idle,    // Start screen shown, nothing scheduled
    Playing, // Auto-advance timer running
    Paused,  // Slides visible, timer cancelled
}

/// What happens when forward navigation runs past the last slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WrapMode {
    Loop,
    Stop,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Marker applied to the rendered document root.
    pub fn marker(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Optional controls layered on top of the shared navigation core.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Features {
    /// Loop toggle; forward navigation may stop at the last slide.
    Loop { wrap_mode: WrapMode },
    /// Speech and theme toggles; navigation always wraps.
    SpeechTheme { speech_enabled: bool, theme: Theme },
}

impl Features {
    pub fn looping() -> Self {
        Features::Loop { wrap_mode: WrapMode::Loop }
    }

    pub fn speech_theme() -> Self {
        Features::SpeechTheme { speech_enabled: false, theme: Theme::Light }
    }

    pub fn speech_enabled(&self) -> bool {
        matches!(self, Features::SpeechTheme { speech_enabled: true, .. })
    }

    pub fn theme(&self) -> Theme {
        match self {
            Features::SpeechTheme { theme, .. } => *theme,
            Features::Loop { .. } => Theme::Light,
        }
    }
}
