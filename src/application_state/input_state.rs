//! # Input State
//!
//! Per-frame input snapshots handed to the active state. Raw pressed/released booleans
//! from two consecutive frames are turned into transitions, so states can react to a
//! click once (`Pressed`) or keep acting while a button is down (`Held`).

use std::collections::HashMap;

use winit::{event::MouseButton, keyboard::KeyCode};

/// Transition of a key or button between the previous and the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Up in both frames
    #[default]
    NotPressed,
    /// Went down this frame
    Pressed,
    /// Down in both frames
    Held,
    /// Went up this frame
    Released,
}

impl RawInputState {
    /// Down this frame, whether newly or still.
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// Input of one frame, as seen by application states.
#[derive(Debug, Clone, Default)]
pub struct ProcessedInputState {
    pub keyboard_states: HashMap<KeyCode, RawInputState>,
    pub mouse_button_states: HashMap<MouseButton, RawInputState>,
    /// Mouse movement since the last frame
    pub mouse_delta: Option<(f64, f64)>,
    /// Scroll since the last frame in lines, positive when scrolling up
    pub scroll_lines: f32,
}

impl ProcessedInputState {
    pub fn key(&self, key: KeyCode) -> RawInputState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    pub fn mouse_button(&self, button: MouseButton) -> RawInputState {
        self.mouse_button_states.get(&button).copied().unwrap_or_default()
    }

    pub fn mouse_delta(&self) -> Option<(f64, f64)> {
        self.mouse_delta
    }

    /// Scroll direction of the frame: `1` up, `-1` down, `0` none.
    pub fn scroll_steps(&self) -> i32 {
        if self.scroll_lines > 0.0 {
            1
        } else if self.scroll_lines < 0.0 {
            -1
        } else {
            0
        }
    }
}

/// Raw mouse state accumulated between frames.
#[derive(Debug, Default)]
pub struct MouseInput {
    pub mouse_button_inputs_old: HashMap<MouseButton, bool>,
    pub mouse_button_inputs_new: HashMap<MouseButton, bool>,
    pub scroll_lines: f32,
    pub mouse_delta: Option<(f64, f64)>,
}
