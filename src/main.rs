use std::process;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod announcer;
mod config;
mod constants;
mod controller;
mod duration;
mod engine;
mod headless;
mod input;
mod scheduler;
mod slide;
mod speech;
mod state;
mod view;
mod window;

use crate::announcer::{Announcer, ConsoleAnnouncer, LiveRegion};
use crate::config::{Args, Variant};
use crate::controller::PresentationController;
use crate::engine::Engine;
use crate::headless::HeadlessEngine;
use crate::scheduler::FrameClock;
use crate::slide::Deck;
use crate::speech::{NoSpeech, SpeechSynthesizer};
use crate::window::WindowEngine;

type Controller<A> = PresentationController<FrameClock, A, Box<dyn SpeechSynthesizer>>;

fn build_controller<A: Announcer>(args: &Args, deck: Deck, announcer: A) -> Controller<A> {
    // Only the speech variant can ever ask for an utterance
    let speech: Box<dyn SpeechSynthesizer> = match args.variant {
        Variant::Speech => speech::host_speech(),
        Variant::Loop => Box::new(NoSpeech),
    };
    PresentationController::new(
        deck,
        args.features(),
        args.slide_duration(),
        FrameClock::new(),
        announcer,
        speech,
    )
}

fn run(args: Args) -> Result<()> {
    let deck = match &args.deck {
        Some(path) => Deck::load(path).with_context(|| format!("Failed to load slides from {}", path.display()))?,
        None => Deck::sample(),
    };
    info!(
        "Loaded {} slides ({:?} variant, {} per slide)",
        deck.len(),
        args.variant,
        args.slide_duration().display_text()
    );

    match args.headless {
        Some(seconds) => {
            let mut controller = build_controller(&args, deck, ConsoleAnnouncer::default());
            HeadlessEngine::new(seconds).run(&mut controller)
        }
        None => {
            let mut controller = build_controller(&args, deck, LiveRegion::new());
            WindowEngine::new(args.width, args.height).run(&mut controller)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}
