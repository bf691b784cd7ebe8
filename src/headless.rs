use std::time::Duration;
use anyhow::{ensure, Result};
use tracing::info;
use crate::announcer::Announcer;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::scheduler::Scheduler;
use crate::speech::SpeechSynthesizer;

/// Starts the slideshow and plays it for a fixed stretch of simulated time,
/// one frame step at a time.
pub struct HeadlessEngine {
    seconds: f32,
}

impl HeadlessEngine {
    pub fn new(seconds: f32) -> Self {
        Self { seconds }
    }
}

impl crate::engine::Engine for HeadlessEngine {
    fn run<S, A, V>(&mut self, controller: &mut PresentationController<S, A, V>) -> Result<()>
    where
        S: Scheduler,
        A: Announcer,
        V: SpeechSynthesizer,
    {
        ensure!(
            self.seconds.is_finite() && (0.0..=MAX_HEADLESS_SECONDS).contains(&self.seconds),
            "headless run time must be between 0 and {} seconds, got {}",
            MAX_HEADLESS_SECONDS,
            self.seconds
        );

        let frames = (self.seconds / FRAME_TIME).ceil() as u64;
        let frame = Duration::from_secs_f32(FRAME_TIME);
        info!("Simulating {}s ({} frames)", self.seconds, frames);

        controller.start();
        for _ in 0..frames {
            controller.tick(frame);
        }

        let view = controller.view();
        info!(
            "Finished on slide {} of {} ({:?}, {} per slide, button {:?}, timer active: {})",
            controller.current_index() + 1,
            controller.slide_count(),
            controller.state(),
            controller.duration().display_text(),
            view.play_pause.visible_text(),
            controller.timer_active()
        );
        Ok(())
    }
}
