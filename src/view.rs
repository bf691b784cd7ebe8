use crate::state::Theme;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Start,
    Slides,
}

/// Accessible state of a toggle button. `label` is what assistive technology
/// reads; `text` is what is drawn.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ButtonView {
    pub label: String,
    pub pressed: bool,
    /// Decorative glyph shown before `text`; not part of `label`.
    pub icon: &'static str,
    pub text: String,
}

impl ButtonView {
    /// Icon and text as shown on the control, e.g. "⏸ Pause".
    pub fn visible_text(&self) -> String {
        format!("{} {}", self.icon, self.text)
    }
}

/// Snapshot of everything a frontend needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SlideView {
    pub screen: Screen,
    pub slide_count: usize,
    pub slide_number: String,
    pub content: String,
    pub duration_text: String,
    pub slider_value: f32,
    pub play_pause: ButtonView,
    pub loop_toggle: Option<ButtonView>,
    pub speech_toggle: Option<ButtonView>,
    pub theme_toggle: Option<ButtonView>,
    pub theme: Theme,
    pub announcement: String,
}
