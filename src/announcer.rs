use tracing::info;

/// Side channel that voices state changes for assistive technology.
pub trait Announcer {
    fn announce(&mut self, message: &str);

    /// Text currently held by the channel.
    fn current(&self) -> &str;
}

/// Polite live region: the newest message replaces the previous one.
#[derive(Debug, Default)]
pub struct LiveRegion {
    text: String,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Announcer for LiveRegion {
    fn announce(&mut self, message: &str) {
        info!(target: "announcer", "{}", message);
        self.text.clear();
        self.text.push_str(message);
    }

    fn current(&self) -> &str {
        &self.text
    }
}

/// Writes each announcement to stdout as it arrives, for headless runs.
#[derive(Debug, Default)]
pub struct ConsoleAnnouncer {
    last: String,
}

impl Announcer for ConsoleAnnouncer {
    fn announce(&mut self, message: &str) {
        println!("{}", message);
        self.last = message.to_string();
    }

    fn current(&self) -> &str {
        &self.last
    }
}
