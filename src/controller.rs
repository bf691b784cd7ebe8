use std::time::Duration;
use tracing::debug;

use crate::announcer::Announcer;
use crate::duration::SlideDuration;
use crate::input::{Control, Key, KeyOutcome};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::slide::Deck;
use crate::speech::SpeechSynthesizer;
use crate::state::{Features, PlaybackState, Theme, WrapMode};
use crate::view::{ButtonView, Screen, SlideView};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

/// Owns the slide deck and every piece of navigation state. All mutation goes
/// through its methods; time, announcements and speech are injected.
pub struct PresentationController<S, A, V>
where
    S: Scheduler,
    A: Announcer,
    V: SpeechSynthesizer,
{
    deck: Deck,
    scheduler: S,
    announcer: A,
    speech: V,

    state: PlaybackState,
    current_slide_index: usize,
    duration: SlideDuration,
    features: Features,
    timer: Option<TimerHandle>,
}

impl<S, A, V> PresentationController<S, A, V>
where
    S: Scheduler,
    A: Announcer,
    V: SpeechSynthesizer,
{
    pub fn new(
        deck: Deck,
        features: Features,
        duration: SlideDuration,
        scheduler: S,
        announcer: A,
        speech: V,
    ) -> Self {
        Self {
            deck,
            scheduler,
            announcer,
            speech,
            state: PlaybackState::Idle,
            current_slide_index: 0,
            duration,
            features,
            timer: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn duration(&self) -> SlideDuration {
        self.duration
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    /// True while an auto-advance timer is registered with the scheduler.
    pub fn timer_active(&self) -> bool {
        self.timer.is_some_and(|handle| self.scheduler.is_active(handle))
    }

    // --- Navigation ---

    pub fn start(&mut self) {
        if self.state != PlaybackState::Idle {
            debug!("start ignored, slideshow already {:?}", self.state);
            return;
        }
        self.show_slide(0);
        self.state = PlaybackState::Playing;
        self.start_timer();
        self.announcer.announce("Slideshow started");
    }

    pub fn next_slide(&mut self) {
        self.advance(Direction::Forward);
    }

    pub fn prev_slide(&mut self) {
        self.advance(Direction::Backward);
    }

    pub fn advance(&mut self, direction: Direction) {
        let last = self.deck.len() - 1;
        let next_index = match direction {
            Direction::Forward if self.current_slide_index < last => self.current_slide_index + 1,
            Direction::Forward if self.stops_at_end() => {
                self.stop_at_end();
                return;
            }
            Direction::Forward => 0,
            // Backward always wraps, whatever the wrap mode
            Direction::Backward if self.current_slide_index == 0 => last,
            Direction::Backward => self.current_slide_index - 1,
        };

        self.show_slide(next_index);
        if self.is_playing() {
            // Manual navigation restarts the countdown from the full duration
            self.start_timer();
        }
    }

    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Idle => debug!("play/pause ignored before start"),
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                self.start_timer();
                self.announcer.announce("Slideshow resumed");
            }
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                self.stop_timer();
                self.announcer.announce("Slideshow paused");
            }
        }
    }

    fn stops_at_end(&self) -> bool {
        matches!(self.features, Features::Loop { wrap_mode: WrapMode::Stop })
    }

    fn stop_at_end(&mut self) {
        debug!("reached last slide with looping disabled");
        self.stop_timer();
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
        self.announcer.announce("End of slideshow");
    }

    fn show_slide(&mut self, index: usize) {
        let index = index.min(self.deck.len() - 1);
        self.current_slide_index = index;

        let Some(slide) = self.deck.get(index) else {
            return;
        };
        let message = format!("Slide {} of {}: {}", index + 1, self.deck.len(), slide.content);
        self.announcer.announce(&message);

        if self.features.speech_enabled() && self.speech.is_available() {
            self.speech.cancel();
            self.speech.speak(&slide.content);
        }
    }

    // --- Timer ---

    fn start_timer(&mut self) {
        self.stop_timer();
        let handle = self.scheduler.schedule_repeating(self.duration.as_duration());
        debug!("auto-advance every {}s ({:?})", self.duration, handle);
        self.timer = Some(handle);
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Moves time forward by `elapsed`, advancing once for every timer fire.
    pub fn tick(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.now() + elapsed;
        while let Some(handle) = self.scheduler.fire_next(deadline) {
            self.on_timer_fired(handle);
        }
    }

    pub fn on_timer_fired(&mut self, handle: TimerHandle) {
        if self.timer == Some(handle) && self.is_playing() {
            self.advance(Direction::Forward);
        } else {
            debug!("dropping stale timer {:?}", handle);
            self.scheduler.cancel(handle);
        }
    }

    pub fn increase_duration(&mut self) {
        if let Some(duration) = self.duration.increased() {
            self.set_duration(duration);
            self.announce_duration();
        }
    }

    pub fn decrease_duration(&mut self) {
        if let Some(duration) = self.duration.decreased() {
            self.set_duration(duration);
            self.announce_duration();
        }
    }

    /// Slider moved; the announcement waits for `slider_change`.
    pub fn slider_input(&mut self, seconds: f32) {
        self.set_duration(SlideDuration::from_secs(seconds));
    }

    /// Slider released.
    pub fn slider_change(&mut self) {
        self.announce_duration();
    }

    // A running timer keeps its interval until the next reschedule
    fn set_duration(&mut self, duration: SlideDuration) {
        self.duration = duration;
    }

    fn announce_duration(&mut self) {
        let message = format!("Slide duration set to {} seconds", self.duration);
        self.announcer.announce(&message);
    }

    // --- Feature toggles ---

    /// Returns false when the loop toggle is not part of this feature set.
    pub fn toggle_loop(&mut self) -> bool {
        let Features::Loop { wrap_mode } = &mut self.features else {
            return false;
        };
        *wrap_mode = match wrap_mode {
            WrapMode::Loop => WrapMode::Stop,
            WrapMode::Stop => WrapMode::Loop,
        };
        let message = if *wrap_mode == WrapMode::Loop { "Looping enabled" } else { "Looping disabled" };
        self.announcer.announce(message);
        true
    }

    pub fn toggle_speech(&mut self) -> bool {
        let Features::SpeechTheme { speech_enabled, .. } = &mut self.features else {
            return false;
        };
        *speech_enabled = !*speech_enabled;
        let enabled = *speech_enabled;
        if !enabled {
            self.speech.cancel();
        }
        self.announcer.announce(if enabled {
            "Speech synthesis enabled"
        } else {
            "Speech synthesis disabled"
        });
        true
    }

    pub fn toggle_theme(&mut self) -> bool {
        let Features::SpeechTheme { theme, .. } = &mut self.features else {
            return false;
        };
        *theme = match theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        let message = match theme {
            Theme::Dark => "Dark theme enabled",
            Theme::Light => "Light theme enabled",
        };
        self.announcer.announce(message);
        true
    }

    // --- Input ---

    /// Keys only act while the slide view is visible.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.state == PlaybackState::Idle {
            return KeyOutcome::IGNORED;
        }
        match key {
            Key::Space => {
                self.toggle_play_pause();
                KeyOutcome::handled(true)
            }
            Key::ArrowLeft => {
                self.decrease_duration();
                KeyOutcome::handled(false)
            }
            Key::ArrowRight => {
                self.increase_duration();
                KeyOutcome::handled(false)
            }
            Key::ArrowUp => {
                self.prev_slide();
                KeyOutcome::handled(true)
            }
            Key::ArrowDown => {
                self.next_slide();
                KeyOutcome::handled(true)
            }
        }
    }

    pub fn handle_click(&mut self, control: Control) {
        if control != Control::Start && self.state == PlaybackState::Idle {
            debug!("{:?} clicked before start", control);
            return;
        }
        match control {
            Control::Start => self.start(),
            Control::PlayPause => self.toggle_play_pause(),
            Control::Previous => self.prev_slide(),
            Control::Next => self.next_slide(),
            Control::DecreaseDuration => self.decrease_duration(),
            Control::IncreaseDuration => self.increase_duration(),
            Control::LoopToggle => {
                self.toggle_loop();
            }
            Control::SpeechToggle => {
                self.toggle_speech();
            }
            Control::ThemeToggle => {
                self.toggle_theme();
            }
        }
    }

    // --- Rendering ---

    pub fn view(&self) -> SlideView {
        let content = self
            .deck
            .get(self.current_slide_index)
            .map(|slide| slide.content.clone())
            .unwrap_or_default();

        let play_pause = if self.is_playing() {
            ButtonView {
                label: "Pause slideshow".to_string(),
                pressed: false,
                icon: "⏸",
                text: "Pause".to_string(),
            }
        } else {
            ButtonView {
                label: "Play slideshow".to_string(),
                pressed: true,
                icon: "▶",
                text: "Play".to_string(),
            }
        };

        let (loop_toggle, speech_toggle, theme_toggle) = match self.features {
            Features::Loop { wrap_mode } => {
                let looping = wrap_mode == WrapMode::Loop;
                let button = ButtonView {
                    label: "Toggle looping".to_string(),
                    pressed: looping,
                    icon: "🔁",
                    text: if looping { "Loop: On" } else { "Loop: Off" }.to_string(),
                };
                (Some(button), None, None)
            }
            Features::SpeechTheme { speech_enabled, theme } => {
                let speech = ButtonView {
                    label: if speech_enabled { "Disable speech synthesis" } else { "Enable speech synthesis" }
                        .to_string(),
                    pressed: speech_enabled,
                    icon: if speech_enabled { "🔊" } else { "🔇" },
                    text: if speech_enabled { "Speech: On" } else { "Speech: Off" }.to_string(),
                };
                let dark = theme == Theme::Dark;
                let theme = ButtonView {
                    label: if dark { "Switch to light theme" } else { "Switch to dark theme" }.to_string(),
                    pressed: dark,
                    icon: if dark { "☾" } else { "☀" },
                    text: if dark { "Dark theme" } else { "Light theme" }.to_string(),
                };
                (None, Some(speech), Some(theme))
            }
        };

        SlideView {
            screen: if self.state == PlaybackState::Idle { Screen::Start } else { Screen::Slides },
            slide_count: self.deck.len(),
            slide_number: format!("Slide {} of {}", self.current_slide_index + 1, self.deck.len()),
            content,
            duration_text: self.duration.display_text(),
            slider_value: self.duration.as_secs_f32(),
            play_pause,
            loop_toggle,
            speech_toggle,
            theme_toggle,
            theme: self.features.theme(),
            announcement: self.announcer.current().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::FrameClock;
    use crate::slide::Slide;

    #[derive(Default)]
    struct Recorder {
        messages: Vec<String>,
    }

    impl Recorder {
        fn count(&self, message: &str) -> usize {
            self.messages.iter().filter(|m| m.as_str() == message).count()
        }

        fn last(&self) -> &str {
            self.messages.last().map(String::as_str).unwrap_or("")
        }
    }

    impl Announcer for Recorder {
        fn announce(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn current(&self) -> &str {
            self.last()
        }
    }

    #[derive(Debug, PartialEq)]
    enum Utterance {
        Spoke(String),
        Cancelled,
    }

    struct FakeSpeech {
        available: bool,
        log: Vec<Utterance>,
    }

    impl FakeSpeech {
        fn available() -> Self {
            Self { available: true, log: Vec::new() }
        }

        fn unavailable() -> Self {
            Self { available: false, log: Vec::new() }
        }

        fn spoken(&self) -> Vec<&str> {
            self.log
                .iter()
                .filter_map(|u| match u {
                    Utterance::Spoke(text) => Some(text.as_str()),
                    Utterance::Cancelled => None,
                })
                .collect()
        }
    }

    impl SpeechSynthesizer for FakeSpeech {
        fn is_available(&self) -> bool {
            self.available
        }

        fn speak(&mut self, text: &str) {
            self.log.push(Utterance::Spoke(text.to_string()));
        }

        fn cancel(&mut self) {
            self.log.push(Utterance::Cancelled);
        }
    }

    type TestController = PresentationController<FrameClock, Recorder, FakeSpeech>;

    fn controller(features: Features) -> TestController {
        PresentationController::new(
            Deck::sample(),
            features,
            SlideDuration::default(),
            FrameClock::new(),
            Recorder::default(),
            FakeSpeech::available(),
        )
    }

    fn stopping() -> Features {
        Features::Loop { wrap_mode: WrapMode::Stop }
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn start_shows_first_slide_and_schedules_timer() {
        let mut c = controller(Features::looping());
        assert_eq!(c.view().screen, Screen::Start);

        c.start();
        let view = c.view();
        assert_eq!(view.screen, Screen::Slides);
        assert_eq!(c.current_index(), 0);
        assert_eq!(view.content, "Welcome to the presentation");
        assert_eq!(view.slide_number, "Slide 1 of 5");
        assert_eq!(view.announcement, "Slideshow started");
        assert_eq!(
            c.announcer.messages,
            vec!["Slide 1 of 5: Welcome to the presentation", "Slideshow started"]
        );
        assert!(c.is_playing());
        assert!(c.timer_active());
        assert_eq!(c.scheduler.active_count(), 1);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut c = controller(Features::looping());
        c.start();
        c.next_slide();
        c.start();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.announcer.count("Slideshow started"), 1);
        assert_eq!(c.scheduler.active_count(), 1);
    }

    #[test]
    fn timer_advances_while_playing() {
        let mut c = controller(Features::looping());
        c.start();

        c.tick(secs(4.9));
        assert_eq!(c.current_index(), 0);
        c.tick(secs(0.1));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.announcer.last(), "Slide 2 of 5: This is slide two");

        c.tick(secs(10.0));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn arrow_down_walk_wraps_when_looping() {
        let mut c = controller(Features::looping());
        c.start();
        c.handle_key(Key::Space);
        assert!(!c.is_playing());

        for _ in 0..3 {
            c.handle_key(Key::ArrowDown);
        }
        assert_eq!(c.current_index(), 3);

        c.handle_key(Key::ArrowDown);
        c.handle_key(Key::ArrowDown);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.view().slide_number, "Slide 1 of 5");
    }

    #[test]
    fn arrow_down_walk_stops_at_end_when_not_looping() {
        let mut c = controller(stopping());
        c.start();
        c.handle_key(Key::Space);

        for _ in 0..4 {
            c.handle_key(Key::ArrowDown);
        }
        assert_eq!(c.current_index(), 4);

        c.handle_key(Key::ArrowDown);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.state(), PlaybackState::Paused);
        assert_eq!(c.announcer.count("End of slideshow"), 1);
        assert_eq!(c.announcer.last(), "End of slideshow");
    }

    #[test]
    fn playing_past_the_end_pauses_once() {
        let mut c = controller(stopping());
        c.start();

        c.tick(secs(20.0));
        assert_eq!(c.current_index(), 4);
        assert!(c.is_playing());

        c.tick(secs(5.0));
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.state(), PlaybackState::Paused);
        assert!(!c.timer_active());
        assert_eq!(c.scheduler.active_count(), 0);

        c.tick(secs(60.0));
        assert_eq!(c.announcer.count("End of slideshow"), 1);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn looping_past_the_end_wraps_to_first() {
        let mut c = controller(Features::looping());
        c.start();
        c.tick(secs(25.0));
        assert_eq!(c.current_index(), 0);
        assert!(c.is_playing());
    }

    #[test]
    fn backward_from_first_slide_wraps_in_both_modes() {
        for features in [Features::looping(), stopping(), Features::speech_theme()] {
            let mut c = controller(features);
            c.start();
            c.handle_key(Key::ArrowUp);
            assert_eq!(c.current_index(), 4);
            assert_eq!(c.announcer.last(), "Slide 5 of 5: Thank you for watching");
        }
    }

    #[test]
    fn speech_theme_variant_always_wraps_forward() {
        let mut c = controller(Features::speech_theme());
        c.start();
        c.handle_key(Key::Space);
        for _ in 0..5 {
            c.next_slide();
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.announcer.count("End of slideshow"), 0);
    }

    #[test]
    fn arrow_right_clamps_duration_at_fifteen() {
        let mut c = controller(Features::looping());
        c.start();

        for _ in 0..25 {
            let outcome = c.handle_key(Key::ArrowRight);
            assert_eq!(outcome, KeyOutcome::handled(false));
        }
        assert_eq!(c.duration().as_secs_f32(), 15.0);
        assert_eq!(c.announcer.count("Slide duration set to 15 seconds"), 1);
        let duration_messages = c
            .announcer
            .messages
            .iter()
            .filter(|m| m.starts_with("Slide duration set to"))
            .count();
        assert_eq!(duration_messages, 20);
        assert_eq!(c.view().duration_text, "15 seconds");
    }

    #[test]
    fn arrow_left_clamps_duration_at_one() {
        let mut c = controller(Features::looping());
        c.start();
        for _ in 0..12 {
            c.handle_key(Key::ArrowLeft);
        }
        assert_eq!(c.duration().as_secs_f32(), 1.0);
        assert_eq!(c.announcer.count("Slide duration set to 1 seconds"), 1);
        assert_eq!(c.view().duration_text, "1 second");
    }

    #[test]
    fn duration_change_applies_at_next_reschedule() {
        let mut c = controller(Features::looping());
        c.start();
        c.tick(secs(1.0));
        c.increase_duration();
        assert_eq!(c.announcer.last(), "Slide duration set to 5.5 seconds");

        // Running timer keeps its 5s interval
        c.tick(secs(4.0));
        assert_eq!(c.current_index(), 1);

        // The advance rescheduled with 5.5s
        c.tick(secs(5.0));
        assert_eq!(c.current_index(), 1);
        c.tick(secs(0.5));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn manual_navigation_restarts_countdown() {
        let mut c = controller(Features::looping());
        c.start();
        c.tick(secs(4.0));
        c.next_slide();
        assert_eq!(c.current_index(), 1);

        c.tick(secs(4.0));
        assert_eq!(c.current_index(), 1);
        c.tick(secs(1.0));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn only_one_timer_is_ever_active() {
        let mut c = controller(Features::looping());
        c.start();
        for _ in 0..3 {
            c.next_slide();
            c.prev_slide();
            c.toggle_play_pause();
            c.toggle_play_pause();
            assert_eq!(c.scheduler.active_count(), 1);
        }

        // A single 5s tick fires exactly once
        c.tick(secs(5.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn toggling_play_pause_twice_is_identity() {
        let mut c = controller(Features::looping());
        c.start();
        c.next_slide();

        c.toggle_play_pause();
        assert_eq!(c.announcer.last(), "Slideshow paused");
        assert!(!c.timer_active());
        c.toggle_play_pause();
        assert_eq!(c.announcer.last(), "Slideshow resumed");

        assert!(c.is_playing());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn play_pause_button_reflects_state() {
        let mut c = controller(Features::looping());
        c.start();
        let button = c.view().play_pause;
        assert_eq!(button.label, "Pause slideshow");
        assert!(!button.pressed);
        assert_eq!(button.text, "Pause");
        assert_eq!(button.visible_text(), "⏸ Pause");

        c.toggle_play_pause();
        let button = c.view().play_pause;
        assert_eq!(button.label, "Play slideshow");
        assert!(button.pressed);
        assert_eq!(button.text, "Play");
        assert_eq!(button.visible_text(), "▶ Play");
    }

    #[test]
    fn slider_announces_only_on_change() {
        let mut c = controller(Features::looping());
        c.start();
        let before = c.announcer.messages.len();

        c.slider_input(7.0);
        c.slider_input(8.2);
        assert_eq!(c.announcer.messages.len(), before);
        assert_eq!(c.view().duration_text, "8 seconds");

        c.slider_change();
        assert_eq!(c.announcer.last(), "Slide duration set to 8 seconds");
        assert_eq!(c.announcer.messages.len(), before + 1);
    }

    #[test]
    fn keys_are_ignored_before_start() {
        let mut c = controller(Features::looping());
        for key in [Key::Space, Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp, Key::ArrowDown] {
            assert_eq!(c.handle_key(key), KeyOutcome::IGNORED);
        }
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.current_index(), 0);
        assert!(c.announcer.messages.is_empty());
    }

    #[test]
    fn navigation_keys_suppress_default() {
        let mut c = controller(Features::looping());
        c.handle_click(Control::Start);
        assert_eq!(c.handle_key(Key::Space), KeyOutcome::handled(true));
        assert_eq!(c.handle_key(Key::ArrowUp), KeyOutcome::handled(true));
        assert_eq!(c.handle_key(Key::ArrowDown), KeyOutcome::handled(true));
        assert_eq!(c.handle_key(Key::ArrowLeft), KeyOutcome::handled(false));
    }

    #[test]
    fn duration_keys_leave_default_action_alone() {
        let mut c = controller(Features::looping());
        c.start();
        for key in [Key::ArrowLeft, Key::ArrowRight] {
            let outcome = c.handle_key(key);
            assert!(outcome.handled);
            assert!(!outcome.suppress_default);
        }
        let outcome = c.handle_key(Key::Space);
        assert!(outcome.handled && outcome.suppress_default);
    }

    #[test]
    fn loop_toggle_flips_wrap_mode() {
        let mut c = controller(Features::looping());
        c.handle_click(Control::Start);
        assert!(c.view().loop_toggle.unwrap().pressed);

        c.handle_click(Control::LoopToggle);
        assert_eq!(c.features, stopping());
        assert_eq!(c.announcer.last(), "Looping disabled");
        assert!(!c.view().loop_toggle.unwrap().pressed);

        assert!(c.toggle_loop());
        assert_eq!(c.announcer.last(), "Looping enabled");
    }

    #[test]
    fn toggles_of_other_variant_do_nothing() {
        let mut c = controller(Features::looping());
        c.start();
        let before = c.announcer.messages.len();
        assert!(!c.toggle_speech());
        assert!(!c.toggle_theme());
        assert_eq!(c.announcer.messages.len(), before);

        let mut c = controller(Features::speech_theme());
        c.start();
        assert!(!c.toggle_loop());
        assert!(c.view().loop_toggle.is_none());
    }

    #[test]
    fn speech_reads_each_new_slide_when_enabled() {
        let mut c = controller(Features::speech_theme());
        c.start();
        assert!(c.speech.log.is_empty());

        c.handle_click(Control::SpeechToggle);
        assert_eq!(c.announcer.last(), "Speech synthesis enabled");
        c.next_slide();
        assert_eq!(
            c.speech.log,
            vec![Utterance::Cancelled, Utterance::Spoke("This is slide two".to_string())]
        );

        c.handle_click(Control::SpeechToggle);
        assert_eq!(c.announcer.last(), "Speech synthesis disabled");
        assert_eq!(c.speech.log.last(), Some(&Utterance::Cancelled));
        c.next_slide();
        assert_eq!(c.speech.spoken(), vec!["This is slide two"]);
    }

    #[test]
    fn unavailable_speech_is_skipped() {
        let mut c = PresentationController::new(
            Deck::sample(),
            Features::SpeechTheme { speech_enabled: true, theme: Theme::Light },
            SlideDuration::default(),
            FrameClock::new(),
            Recorder::default(),
            FakeSpeech::unavailable(),
        );
        c.start();
        c.next_slide();
        assert!(c.speech.spoken().is_empty());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn theme_toggle_updates_marker_and_label() {
        let mut c = controller(Features::speech_theme());
        c.start();
        assert_eq!(c.view().theme, Theme::Light);

        c.handle_click(Control::ThemeToggle);
        let view = c.view();
        assert_eq!(view.theme.marker(), "dark");
        let button = view.theme_toggle.unwrap();
        assert!(button.pressed);
        assert_eq!(button.label, "Switch to light theme");
        assert_eq!(c.announcer.last(), "Dark theme enabled");

        c.handle_click(Control::ThemeToggle);
        assert_eq!(c.view().theme, Theme::Light);
        assert_eq!(c.announcer.last(), "Light theme enabled");
    }

    #[test]
    fn index_stays_in_range_for_any_input_sequence() {
        let deck = Deck::new(vec![Slide::new("a"), Slide::new("b"), Slide::new("c")]).unwrap();
        let keys = [Key::ArrowDown, Key::ArrowUp, Key::Space, Key::ArrowRight, Key::ArrowLeft];

        for features in [Features::looping(), stopping(), Features::speech_theme()] {
            let mut c = PresentationController::new(
                deck.clone(),
                features,
                SlideDuration::from_secs(1.0),
                FrameClock::new(),
                Recorder::default(),
                FakeSpeech::available(),
            );
            c.start();
            // Deterministic mixing of keys, loop toggles and elapsed time
            let mut seed: u32 = 7;
            for step in 0..500 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                c.handle_key(keys[(seed >> 16) as usize % keys.len()]);
                if step % 37 == 0 {
                    c.toggle_loop();
                }
                c.tick(secs(((seed >> 8) % 300) as f32 / 100.0));
                assert!(c.current_index() < c.slide_count());
                assert!(c.scheduler.active_count() <= 1);
                assert_eq!(c.timer_active(), c.is_playing());
            }
        }
    }

    #[test]
    fn single_slide_deck_wraps_onto_itself() {
        let deck = Deck::new(vec![Slide::new("only")]).unwrap();
        let mut c = PresentationController::new(
            deck,
            Features::looping(),
            SlideDuration::default(),
            FrameClock::new(),
            Recorder::default(),
            FakeSpeech::available(),
        );
        c.start();
        c.next_slide();
        c.prev_slide();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.announcer.last(), "Slide 1 of 1: only");
    }
}
