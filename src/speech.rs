use tracing::{debug, warn};

/// Text-to-speech capability provided by the host.
pub trait SpeechSynthesizer {
    fn is_available(&self) -> bool;
    /// Starts speaking `text`, interrupting anything still in flight.
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
}

impl<T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

/// Host without speech support; every request is skipped.
#[derive(Debug, Default)]
pub struct NoSpeech;

impl SpeechSynthesizer for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str) {}

    fn cancel(&mut self) {}
}

/// Platform speech engine (speech-dispatcher, SAPI/WinRT, AVFoundation).
#[cfg(feature = "tts")]
pub struct TtsSpeech {
    tts: tts::Tts,
}

#[cfg(feature = "tts")]
impl TtsSpeech {
    pub fn new() -> Result<Self, tts::Error> {
        let tts = tts::Tts::default()?;
        debug!("Initialized speech synthesis.");
        Ok(Self { tts })
    }
}

#[cfg(feature = "tts")]
impl SpeechSynthesizer for TtsSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        debug!("Speaking: {:?}", text);
        let interrupt = true;
        if let Err(err) = self.tts.speak(text, interrupt) {
            warn!("Failed to speak: {}", err);
        }
    }

    fn cancel(&mut self) {
        if let Err(err) = self.tts.stop() {
            warn!("Failed to stop speech: {}", err);
        }
    }
}

/// The host's speech engine, or `NoSpeech` when none can be loaded.
#[cfg(feature = "tts")]
pub fn host_speech() -> Box<dyn SpeechSynthesizer> {
    match TtsSpeech::new() {
        Ok(speech) => Box::new(speech),
        Err(err) => {
            warn!("Failed to load speech synthesis: {}", err);
            Box::new(NoSpeech)
        }
    }
}

#[cfg(not(feature = "tts"))]
pub fn host_speech() -> Box<dyn SpeechSynthesizer> {
    warn!("Built without the `tts` feature; slides will not be read aloud.");
    Box::new(NoSpeech)
}
