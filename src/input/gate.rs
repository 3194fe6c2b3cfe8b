//! Decides whether user input ends a fullscreen session.

use std::time::Duration;

use log::debug;

use crate::model::constants::{INPUT_DEBOUNCE_MS, MOUSE_MOVE_THRESHOLD};

/// Input the fullscreen window procedure forwards to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key,
    MouseButton,
    /// Cursor position in screen coordinates.
    MouseMove { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Still inside the startup window.
    Debounce,
    /// The foreground window belongs to another process.
    NotFocused,
    /// Movement below the threshold on both axes.
    Jitter,
    /// First movement with no known origin; it became the origin.
    OriginCaptured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Exit,
    Ignore(IgnoreReason),
}

impl GateDecision {
    pub fn is_exit(self) -> bool {
        self == GateDecision::Exit
    }
}

/// Startup debounce, focus check and mouse jitter filter.
#[derive(Debug, Clone)]
pub struct InputGate {
    debounce: Duration,
    threshold: i32,
    origin: Option<(i32, i32)>,
}

impl Default for InputGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(INPUT_DEBOUNCE_MS), MOUSE_MOVE_THRESHOLD)
    }
}

impl InputGate {
    pub fn new(debounce: Duration, threshold: i32) -> Self {
        Self {
            debounce,
            threshold: threshold.max(0),
            origin: None,
        }
    }

    /// Measure movement against `origin`, normally the cursor position at
    /// start.
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin = Some((x, y));
        self
    }

    pub fn origin(&self) -> Option<(i32, i32)> {
        self.origin
    }

    /// Classify `event`, received `since_start` after the session began.
    /// `focused` is true when the foreground window is ours.
    pub fn on_input(&mut self, event: InputEvent, since_start: Duration, focused: bool) -> GateDecision {
        let decision = self.classify(event, since_start, focused);
        if let GateDecision::Ignore(reason) = decision {
            if reason != IgnoreReason::Jitter {
                debug!("input {:?} ignored: {:?}", event, reason);
            }
        } else {
            debug!("input {:?} ends the session", event);
        }
        decision
    }

    fn classify(&mut self, event: InputEvent, since_start: Duration, focused: bool) -> GateDecision {
        if since_start < self.debounce {
            return GateDecision::Ignore(IgnoreReason::Debounce);
        }
        if !focused {
            return GateDecision::Ignore(IgnoreReason::NotFocused);
        }
        match event {
            InputEvent::Key | InputEvent::MouseButton => GateDecision::Exit,
            InputEvent::MouseMove { x, y } => {
                let Some((ox, oy)) = self.origin else {
                    self.origin = Some((x, y));
                    return GateDecision::Ignore(IgnoreReason::OriginCaptured);
                };
                let dx = x.saturating_sub(ox).saturating_abs();
                let dy = y.saturating_sub(oy).saturating_abs();
                if dx >= self.threshold || dy >= self.threshold {
                    GateDecision::Exit
                } else {
                    GateDecision::Ignore(IgnoreReason::Jitter)
                }
            }
        }
    }
}
