//! Input events and the per-frame snapshot built from them

use crate::sim::TickInput;

/// Logical input signals delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space / Up pressed
    ThrustDown,
    /// Space / Up released
    ThrustUp,
    /// Mouse button or touch started; same as thrust
    PointerDown,
    /// Mouse button or touch ended
    PointerUp,
    /// Enter pressed
    Restart,
    /// Window closed
    Quit,
}

/// Folds edge-triggered events into held state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    thrust_held: bool,
    restart_pending: bool,
    quit: bool,
}

impl InputState {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::ThrustDown | InputEvent::PointerDown => self.thrust_held = true,
            InputEvent::ThrustUp | InputEvent::PointerUp => self.thrust_held = false,
            InputEvent::Restart => self.restart_pending = true,
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn thrust_held(&self) -> bool {
        self.thrust_held
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Snapshot for this frame; a pending restart is consumed
    pub fn snapshot(&mut self) -> TickInput {
        TickInput {
            thrust: self.thrust_held,
            restart: std::mem::take(&mut self.restart_pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrust_is_held_until_release() {
        let mut input = InputState::default();
        input.apply(InputEvent::ThrustDown);
        assert!(input.snapshot().thrust);
        assert!(input.snapshot().thrust);
        input.apply(InputEvent::ThrustUp);
        assert!(!input.snapshot().thrust);
    }

    #[test]
    fn test_pointer_is_thrust() {
        let mut input = InputState::default();
        input.apply(InputEvent::PointerDown);
        assert!(input.thrust_held());
        input.apply(InputEvent::PointerUp);
        assert!(!input.thrust_held());
    }

    #[test]
    fn test_restart_is_consumed_once() {
        let mut input = InputState::default();
        input.apply(InputEvent::Restart);
        assert!(input.snapshot().restart);
        assert!(!input.snapshot().restart);
    }

    #[test]
    fn test_quit_sticks() {
        let mut input = InputState::default();
        input.apply(InputEvent::Quit);
        input.snapshot();
        assert!(input.quit_requested());
    }
}
