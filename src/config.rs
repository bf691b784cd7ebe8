use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use crate::constants::*;
use crate::duration::SlideDuration;
use crate::state::{Features, Theme, WrapMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Loop toggle, playback may stop on the last slide
    Loop,
    /// Speech and theme toggles, playback always wraps
    Speech,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Accessible text slideshow", long_about = None)]
pub struct Args {
    /// Text file with one slide per paragraph (blank-line separated).
    /// The built-in sample deck is used when omitted.
    pub deck: Option<PathBuf>,

    /// Which set of extra controls to show
    #[arg(long, value_enum, default_value_t = Variant::Loop)]
    pub variant: Variant,

    /// Seconds each slide stays up while playing (1 to 15, half-second steps)
    #[arg(short, long, default_value_t = DEFAULT_DURATION)]
    pub duration: f32,

    /// Stop on the last slide instead of looping (loop variant)
    #[arg(long)]
    pub no_loop: bool,

    /// Read slides aloud from the start (speech variant)
    #[arg(long)]
    pub speech: bool,

    /// Start with the dark theme (speech variant)
    #[arg(long)]
    pub dark: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Run without a window for the given number of simulated seconds,
    /// printing announcements to stdout
    #[arg(long, value_name = "SECONDS")]
    pub headless: Option<f32>,
}

impl Args {
    pub fn features(&self) -> Features {
        match self.variant {
            Variant::Loop => Features::Loop {
                wrap_mode: if self.no_loop { WrapMode::Stop } else { WrapMode::Loop },
            },
            Variant::Speech => Features::SpeechTheme {
                speech_enabled: self.speech,
                theme: if self.dark { Theme::Dark } else { Theme::Light },
            },
        }
    }

    pub fn slide_duration(&self) -> SlideDuration {
        SlideDuration::from_secs(self.duration)
    }
}
