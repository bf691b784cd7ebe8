use anyhow::Result;
use crate::announcer::Announcer;
use crate::controller::PresentationController;
use crate::scheduler::Scheduler;
use crate::speech::SpeechSynthesizer;

/// Drives a controller: feeds it input and elapsed time, and presents its view.
pub trait Engine {
    fn run<S, A, V>(&mut self, controller: &mut PresentationController<S, A, V>) -> Result<()>
    where
        S: Scheduler,
        A: Announcer,
        V: SpeechSynthesizer;
}
