pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const MIN_DURATION: f32 = 1.0;            // Shortest time a slide stays up (seconds)
pub const MAX_DURATION: f32 = 15.0;           // Longest time a slide stays up (seconds)
pub const DURATION_STEP: f32 = 0.5;           // Increment used by buttons, keys and slider
pub const DEFAULT_DURATION: f32 = 5.0;        // Duration at startup (seconds)

pub const MAX_HEADLESS_SECONDS: f32 = 86_400.0; // Longest simulated headless run (one day)
