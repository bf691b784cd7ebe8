use std::time::Duration;
use anyhow::Result;
use raylib::prelude::*;
use tracing::{debug, info};

use crate::announcer::Announcer;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::input::{Control, Key};
use crate::scheduler::Scheduler;
use crate::speech::SpeechSynthesizer;
use crate::state::Theme;
use crate::view::{ButtonView, Screen, SlideView};

const TITLE_SIZE: i32 = 24;
const CONTENT_SIZE: i32 = 48;
const BUTTON_SIZE: i32 = 20;
const STATUS_SIZE: i32 = 18;

const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_GAP: f32 = 16.0;
const SLIDER_WIDTH: f32 = 280.0;

// raylib's default font advances roughly this much per character
const GLYPH_WIDTH_RATIO: f32 = 0.6;

struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    button: Color,
    pressed: Color,
    outline: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => Palette {
                background: Color::RAYWHITE,
                text: Color::new(20, 20, 20, 255),
                muted: Color::DARKGRAY,
                button: Color::LIGHTGRAY,
                pressed: Color::SKYBLUE,
                outline: Color::DARKGRAY,
            },
            Theme::Dark => Palette {
                background: Color::new(24, 24, 28, 255),
                text: Color::RAYWHITE,
                muted: Color::GRAY,
                button: Color::new(60, 60, 70, 255),
                pressed: Color::new(40, 90, 160, 255),
                outline: Color::LIGHTGRAY,
            },
        }
    }
}

/// Screen placement of every interactive element for one frame.
pub struct Layout {
    pub buttons: Vec<(Control, Rectangle)>,
    pub slider: Option<Rectangle>,
}

impl Layout {
    pub fn compute(view: &SlideView, width: f32, height: f32) -> Layout {
        if view.screen == Screen::Start {
            let start = Rectangle::new(width * 0.5 - 120.0, height * 0.5 - 35.0, 240.0, 70.0);
            return Layout { buttons: vec![(Control::Start, start)], slider: None };
        }

        let mut buttons = Vec::new();

        // Row 1: previous, play/pause, next
        let row1_y = height - 170.0;
        let nav_width = 150.0;
        let row1_total = nav_width * 3.0 + BUTTON_GAP * 2.0;
        let mut x = (width - row1_total) * 0.5;
        for control in [Control::Previous, Control::PlayPause, Control::Next] {
            buttons.push((control, Rectangle::new(x, row1_y, nav_width, BUTTON_HEIGHT)));
            x += nav_width + BUTTON_GAP;
        }

        // Row 2: duration stepper with slider, then the feature toggles
        let row2_y = height - 105.0;
        let toggles: Vec<Control> = [
            view.loop_toggle.as_ref().map(|_| Control::LoopToggle),
            view.speech_toggle.as_ref().map(|_| Control::SpeechToggle),
            view.theme_toggle.as_ref().map(|_| Control::ThemeToggle),
        ]
        .into_iter()
        .flatten()
        .collect();
        let toggle_width = 170.0;
        let row2_total = BUTTON_HEIGHT * 2.0 + SLIDER_WIDTH + BUTTON_GAP * 2.0
            + toggles.len() as f32 * (toggle_width + BUTTON_GAP);
        let mut x = ((width - row2_total) * 0.5).max(BUTTON_GAP);

        buttons.push((Control::DecreaseDuration, Rectangle::new(x, row2_y, BUTTON_HEIGHT, BUTTON_HEIGHT)));
        x += BUTTON_HEIGHT + BUTTON_GAP * 0.5;
        let slider = Rectangle::new(x, row2_y + BUTTON_HEIGHT * 0.5 - 10.0, SLIDER_WIDTH, 20.0);
        x += SLIDER_WIDTH + BUTTON_GAP * 0.5;
        buttons.push((Control::IncreaseDuration, Rectangle::new(x, row2_y, BUTTON_HEIGHT, BUTTON_HEIGHT)));
        x += BUTTON_HEIGHT + BUTTON_GAP;

        for control in toggles {
            buttons.push((control, Rectangle::new(x, row2_y, toggle_width, BUTTON_HEIGHT)));
            x += toggle_width + BUTTON_GAP;
        }

        Layout { buttons, slider: Some(slider) }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(rect, point))
            .map(|(control, _)| *control)
    }

    pub fn slider_hit(&self, point: Vector2) -> bool {
        // Generous vertical grab area around the thin track
        self.slider
            .map(|track| contains(&Rectangle::new(track.x, track.y - 10.0, track.width, track.height + 20.0), point))
            .unwrap_or(false)
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.width && point.y >= rect.y && point.y <= rect.y + rect.height
}

/// Maps a horizontal position on the slider track to seconds.
pub fn slider_value_at(track: &Rectangle, x: f32) -> f32 {
    let t = ((x - track.x) / track.width).clamp(0.0, 1.0);
    MIN_DURATION + t * (MAX_DURATION - MIN_DURATION)
}

/// Greedy word wrap to at most `max_chars` characters per line. Words longer
/// than a line are left whole.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn text_width(text: &str, size: i32) -> i32 {
    (text.chars().count() as f32 * size as f32 * GLYPH_WIDTH_RATIO) as i32
}

fn pressed_keys(rl: &RaylibHandle) -> Vec<Key> {
    [
        (KeyboardKey::KEY_SPACE, Key::Space),
        (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
        (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        (KeyboardKey::KEY_UP, Key::ArrowUp),
        (KeyboardKey::KEY_DOWN, Key::ArrowDown),
    ]
    .into_iter()
    .filter(|(raylib_key, _)| rl.is_key_pressed(*raylib_key))
    .map(|(_, key)| key)
    .collect()
}

/// Desktop window frontend.
pub struct WindowEngine {
    width: i32,
    height: i32,
    dragging_slider: bool,
}

impl WindowEngine {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, dragging_slider: false }
    }

    fn handle_mouse<S, A, V>(&mut self, rl: &RaylibHandle, layout: &Layout, controller: &mut PresentationController<S, A, V>)
    where
        S: Scheduler,
        A: Announcer,
        V: SpeechSynthesizer,
    {
        let mouse = rl.get_mouse_position();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.slider_hit(mouse) {
                self.dragging_slider = true;
            } else if let Some(control) = layout.hit_test(mouse) {
                debug!("clicked {:?}", control);
                controller.handle_click(control);
            }
        }

        if self.dragging_slider {
            if let Some(track) = &layout.slider {
                if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
                    controller.slider_input(slider_value_at(track, mouse.x));
                }
            }
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                self.dragging_slider = false;
                controller.slider_change();
            }
        }
    }
}

impl crate::engine::Engine for WindowEngine {
    fn run<S, A, V>(&mut self, controller: &mut PresentationController<S, A, V>) -> Result<()>
    where
        S: Scheduler,
        A: Announcer,
        V: SpeechSynthesizer,
    {
        let (mut rl, thread) = raylib::init()
            .size(self.width, self.height)
            .title("Accessible Slideshow")
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        info!("Window opened ({}x{})", self.width, self.height);
        let mut theme = Theme::Light;
        rl.set_window_title(&thread, &format!("Accessible Slideshow [{}]", theme.marker()));

        while !rl.window_should_close() {
            let dt = rl.get_frame_time();
            let width = rl.get_screen_width() as f32;
            let height = rl.get_screen_height() as f32;

            // --- Input ---
            let layout = Layout::compute(&controller.view(), width, height);
            self.handle_mouse(&rl, &layout, controller);
            for key in pressed_keys(&rl) {
                let outcome = controller.handle_key(key);
                debug!("key {:?} handled: {}", key, outcome.handled);
            }

            // --- Timers ---
            controller.tick(Duration::from_secs_f32(dt.max(0.0)));

            // --- Render ---
            let view = controller.view();
            let layout = Layout::compute(&view, width, height);
            let palette = Palette::for_theme(view.theme);
            if view.theme != theme {
                theme = view.theme;
                rl.set_window_title(&thread, &format!("Accessible Slideshow [{}]", theme.marker()));
            }
            let mouse = rl.get_mouse_position();
            let hovered = layout.hit_test(mouse);

            let mut d = rl.begin_drawing(&thread);
            d.clear_background(palette.background);
            match view.screen {
                Screen::Start => draw_start_screen(&mut d, &view, &layout, &palette, width, height),
                Screen::Slides => {
                    draw_slides(&mut d, &view, &layout, &palette, width, height);
                    if let Some(label) = hovered.and_then(|control| accessible_label(&view, control)) {
                        draw_tooltip(&mut d, label, mouse, &palette);
                    }
                }
            }
            draw_status(&mut d, &view, &palette, height);
        }

        Ok(())
    }
}

fn draw_start_screen(d: &mut RaylibDrawHandle, view: &SlideView, layout: &Layout, palette: &Palette, width: f32, height: f32) {
    let title = "Accessible Slideshow";
    d.draw_text(
        title,
        (width as i32 - text_width(title, CONTENT_SIZE)) / 2,
        (height * 0.3) as i32,
        CONTENT_SIZE,
        palette.text,
    );
    let hint = format!("{} slides, {} each", view.slide_count, view.duration_text);
    d.draw_text(
        &hint,
        (width as i32 - text_width(&hint, TITLE_SIZE)) / 2,
        (height * 0.3) as i32 + CONTENT_SIZE + 12,
        TITLE_SIZE,
        palette.muted,
    );

    for (control, rect) in &layout.buttons {
        if *control == Control::Start {
            draw_button(d, rect, "Start slideshow", false, palette);
        }
    }
}

fn draw_slides(d: &mut RaylibDrawHandle, view: &SlideView, layout: &Layout, palette: &Palette, width: f32, height: f32) {
    d.draw_text(&view.slide_number, 32, 28, TITLE_SIZE, palette.muted);

    // Content is centred in the area above the controls
    let max_chars = ((width - 120.0) / (CONTENT_SIZE as f32 * GLYPH_WIDTH_RATIO)).max(8.0) as usize;
    let lines = wrap_text(&view.content, max_chars);
    let line_height = CONTENT_SIZE + 12;
    let block_height = lines.len() as i32 * line_height;
    let area_bottom = height - 190.0;
    let mut y = ((area_bottom as i32) - block_height) / 2 + 20;
    for line in &lines {
        d.draw_text(line, (width as i32 - text_width(line, CONTENT_SIZE)) / 2, y, CONTENT_SIZE, palette.text);
        y += line_height;
    }

    for (control, rect) in &layout.buttons {
        match control {
            Control::Previous => draw_button(d, rect, "Previous", false, palette),
            Control::Next => draw_button(d, rect, "Next", false, palette),
            Control::PlayPause => draw_toggle(d, rect, &view.play_pause, palette),
            Control::DecreaseDuration => draw_button(d, rect, "-", false, palette),
            Control::IncreaseDuration => draw_button(d, rect, "+", false, palette),
            Control::LoopToggle => {
                if let Some(button) = &view.loop_toggle {
                    draw_toggle(d, rect, button, palette);
                }
            }
            Control::SpeechToggle => {
                if let Some(button) = &view.speech_toggle {
                    draw_toggle(d, rect, button, palette);
                }
            }
            Control::ThemeToggle => {
                if let Some(button) = &view.theme_toggle {
                    draw_toggle(d, rect, button, palette);
                }
            }
            Control::Start => {}
        }
    }

    if let Some(track) = &layout.slider {
        d.draw_rectangle_rec(*track, palette.button);
        d.draw_rectangle_lines_ex(*track, 1.0, palette.outline);
        let t = (view.slider_value - MIN_DURATION) / (MAX_DURATION - MIN_DURATION);
        let knob_x = track.x + t * track.width;
        d.draw_circle(knob_x as i32, (track.y + track.height * 0.5) as i32, 12.0, palette.pressed);
        d.draw_text(
            &view.duration_text,
            track.x as i32,
            (track.y - 26.0) as i32,
            STATUS_SIZE,
            palette.muted,
        );
    }
}

fn accessible_label(view: &SlideView, control: Control) -> Option<&str> {
    let button = match control {
        Control::PlayPause => Some(&view.play_pause),
        Control::LoopToggle => view.loop_toggle.as_ref(),
        Control::SpeechToggle => view.speech_toggle.as_ref(),
        Control::ThemeToggle => view.theme_toggle.as_ref(),
        _ => None,
    };
    button.map(|button| button.label.as_str())
}

fn draw_tooltip(d: &mut RaylibDrawHandle, label: &str, at: Vector2, palette: &Palette) {
    let width = text_width(label, STATUS_SIZE) + 16;
    let rect = Rectangle::new(at.x + 12.0, at.y - 34.0, width as f32, STATUS_SIZE as f32 + 12.0);
    d.draw_rectangle_rec(rect, palette.background);
    d.draw_rectangle_lines_ex(rect, 1.0, palette.outline);
    d.draw_text(label, rect.x as i32 + 8, rect.y as i32 + 6, STATUS_SIZE, palette.text);
}

// Live region text sits on the bottom line of the window
fn draw_status(d: &mut RaylibDrawHandle, view: &SlideView, palette: &Palette, height: f32) {
    if !view.announcement.is_empty() {
        d.draw_text(&view.announcement, 32, height as i32 - 36, STATUS_SIZE, palette.muted);
    }
}

// The icon glyphs are outside raylib's default font; only the text is drawn
fn draw_toggle(d: &mut RaylibDrawHandle, rect: &Rectangle, button: &ButtonView, palette: &Palette) {
    draw_button(d, rect, &button.text, button.pressed, palette);
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, text: &str, pressed: bool, palette: &Palette) {
    d.draw_rectangle_rec(*rect, if pressed { palette.pressed } else { palette.button });
    d.draw_rectangle_lines_ex(*rect, 2.0, palette.outline);
    let x = rect.x as i32 + (rect.width as i32 - text_width(text, BUTTON_SIZE)) / 2;
    let y = rect.y as i32 + (rect.height as i32 - BUTTON_SIZE) / 2;
    d.draw_text(text, x, y, BUTTON_SIZE, palette.text);
}
