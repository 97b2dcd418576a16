//! # Input Manager
//!
//! Collects keyboard, mouse button, scroll and motion input between frames and turns it
//! into a [`ProcessedInputState`] once per frame. Window events are fed in through
//! [`InputManager::intake_input`]; hosts without a window can drive the same state with
//! [`InputManager::set_key`], [`InputManager::set_mouse_button`] and
//! [`InputManager::add_scroll`].

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{MouseInput, ProcessedInputState, RawInputState};

/// Keys the engine reacts to.
pub const KEY_CODES: [KeyCode; 9] = [
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
    KeyCode::Space,
    KeyCode::ShiftLeft,
    KeyCode::Tab,
    KeyCode::KeyC,
    KeyCode::Escape,
];

const MOUSE_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Pixels of touchpad scrolling counted as one line.
const PIXELS_PER_LINE: f64 = 20.0;

/// Tracks raw input between frames.
#[derive(Debug)]
pub struct InputManager {
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,
    pub mouse_inputs: MouseInput,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a manager with every tracked key and button released.
    pub fn new() -> Self {
        let keys: HashMap<KeyCode, bool> = KEY_CODES.iter().map(|key| (*key, false)).collect();
        let buttons: HashMap<MouseButton, bool> =
            MOUSE_BUTTONS.iter().map(|button| (*button, false)).collect();

        Self {
            keyboard_inputs_old: keys.clone(),
            keyboard_inputs_new: keys,
            mouse_inputs: MouseInput {
                mouse_button_inputs_old: buttons.clone(),
                mouse_button_inputs_new: buttons,
                scroll_lines: 0.0,
                mouse_delta: None,
            },
        }
    }

    /// Records a window event. Events for untracked keys and buttons are ignored.
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => self.set_key(*key, *state == ElementState::Pressed),
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
                };
                self.add_scroll(lines);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.set_mouse_button(*button, *state == ElementState::Pressed)
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(key_state) = self.keyboard_inputs_new.get_mut(&key) {
            *key_state = pressed;
        }
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(button_state) = self.mouse_inputs.mouse_button_inputs_new.get_mut(&button) {
            *button_state = pressed;
        }
    }

    /// Adds scrolled lines, positive when scrolling up.
    pub fn add_scroll(&mut self, lines: f32) {
        self.mouse_inputs.scroll_lines += lines;
    }

    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        let (x, y) = self.mouse_inputs.mouse_delta.unwrap_or((0.0, 0.0));
        self.mouse_inputs.mouse_delta = Some((x + delta.0, y + delta.1));
    }

    /// Releases every key and button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keyboard_inputs_new.values_mut().for_each(|state| *state = false);
        self.mouse_inputs
            .mouse_button_inputs_new
            .values_mut()
            .for_each(|state| *state = false);
    }

    /// Builds the input of the current frame from the previous and current raw states.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let keyboard_states = self
            .keyboard_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        let mouse_button_states = self
            .mouse_inputs
            .mouse_button_inputs_new
            .iter()
            .map(|(button, &new_state)| {
                let old_state = self
                    .mouse_inputs
                    .mouse_button_inputs_old
                    .get(button)
                    .copied()
                    .unwrap_or(false);
                (*button, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        ProcessedInputState {
            keyboard_states,
            mouse_button_states,
            mouse_delta: self.mouse_inputs.mouse_delta,
            scroll_lines: self.mouse_inputs.scroll_lines,
        }
    }

    /// Returns the input of the current frame and starts the next one.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.reset_inputs();
        processed_input
    }

    /// Carries current states over as the previous frame and clears motion and scroll.
    pub fn reset_inputs(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }
        for (button, new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_inputs.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }

        self.mouse_inputs.scroll_lines = 0.0;
        self.mouse_inputs.mouse_delta = None;
    }
}
