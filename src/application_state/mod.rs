//! # Application State Management
//!
//! The application runs a stack of states. Only the front state receives events and
//! updates; pushing a state pauses the current one and popping resumes the next.
//!
//! The [`StateManager`] is an ordinary value owned by whoever drives the frame loop and
//! passed to the code that needs it.

pub mod input_manager;
pub mod input_state;
pub mod playing;

use std::collections::VecDeque;

use log::{debug, info};
use winit::event::WindowEvent;

use input_state::ProcessedInputState;

/// A screen or mode of the application.
pub trait State {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Called once when the state is pushed, before its first update.
    fn setup(&mut self);

    /// Called for every window event while the state is in front.
    fn event(&mut self, _event: &WindowEvent) {}

    /// Called once per frame while the state is in front.
    fn update(&mut self, input: &ProcessedInputState, elapsed: f32);

    /// Called when another state is pushed in front of this one.
    fn pause(&mut self) {}

    /// Called when this state is in front again after the one before it was popped.
    fn resume(&mut self) {}
}

/// Stack of application states, front first.
#[derive(Default)]
pub struct StateManager {
    states: VecDeque<Box<dyn State>>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses the current state, then sets up `state` and makes it current.
    pub fn push(&mut self, mut state: Box<dyn State>) {
        if let Some(current) = self.states.front_mut() {
            debug!("Pausing state {}", current.name());
            current.pause();
        }

        info!("Entering state {}", state.name());
        state.setup();
        self.states.push_front(state);
    }

    /// Removes the current state and resumes the next one.
    pub fn pop(&mut self) -> Option<Box<dyn State>> {
        let popped = self.states.pop_front()?;
        info!("Leaving state {}", popped.name());

        if let Some(next) = self.states.front_mut() {
            debug!("Resuming state {}", next.name());
            next.resume();
        }
        Some(popped)
    }

    pub fn current(&self) -> Option<&dyn State> {
        self.states.front().map(|state| state.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn State + 'static)> {
        self.states.front_mut().map(|state| state.as_mut())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forwards a window event to the current state.
    pub fn event(&mut self, event: &WindowEvent) {
        if let Some(state) = self.states.front_mut() {
            state.event(event);
        }
    }

    /// Updates the current state.
    pub fn update(&mut self, input: &ProcessedInputState, elapsed: f32) {
        if let Some(state) = self.states.front_mut() {
            state.update(input, elapsed);
        }
    }
}
