//! Windows runtime state management.
//!
//! Window procedures run re-entrantly inside the message pump, so they only
//! touch the small queues here. Surfaces are owned by the frame loop.

use std::cell::{Cell, RefCell};
use std::time::Instant;

use log::debug;
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetForegroundWindow, GetWindowThreadProcessId, PostQuitMessage,
};

use crate::input::{GateDecision, IgnoreReason, InputEvent, InputGate};
use crate::model::Size;
use crate::render::{ResizeQueue, WindowId};

/// Input gate plus the instant the fullscreen session began.
pub struct InputSession {
    gate: InputGate,
    started: Instant,
}

thread_local! {
    /// Resize requests posted by window procedures.
    pub static PENDING_RESIZES: RefCell<ResizeQueue> = RefCell::new(ResizeQueue::default());
    /// Present only while a fullscreen session is running.
    pub static SESSION: RefCell<Option<InputSession>> = const { RefCell::new(None) };
    /// Cleared when the frame loop should stop.
    pub static RUNNING: Cell<bool> = const { Cell::new(false) };
}

pub fn queue_resize(id: WindowId, size: Size) {
    PENDING_RESIZES.with(|q| q.borrow_mut().push(id, size));
}

pub fn take_resizes() -> Vec<(WindowId, Size)> {
    PENDING_RESIZES.with(|q| q.borrow_mut().take())
}

/// Start gating input. Movement is measured from the current cursor
/// position when it can be read.
pub fn begin_session() {
    let mut gate = InputGate::default();
    let mut pt = POINT::default();
    if unsafe { GetCursorPos(&mut pt) }.is_ok() {
        gate = gate.with_origin(pt.x, pt.y);
    }
    SESSION.with(|s| {
        *s.borrow_mut() = Some(InputSession {
            gate,
            started: Instant::now(),
        })
    });
    RUNNING.with(|r| r.set(true));
}

pub fn end_session() {
    SESSION.with(|s| *s.borrow_mut() = None);
    RUNNING.with(|r| r.set(false));
}

pub fn is_running() -> bool {
    RUNNING.with(|r| r.get())
}

/// Stop the frame loop and wake the message pump.
pub fn request_stop() {
    if is_running() {
        RUNNING.with(|r| r.set(false));
        unsafe { PostQuitMessage(0) };
    }
}

/// True when the foreground window belongs to this process.
pub fn has_focus() -> bool {
    unsafe {
        let fg: HWND = GetForegroundWindow();
        if fg.is_invalid() {
            return false;
        }
        let mut pid = 0u32;
        GetWindowThreadProcessId(fg, Some(&mut pid));
        pid == std::process::id()
    }
}

/// Feed `event` through the session gate. Without a session input is
/// ignored.
pub fn gate_input(event: InputEvent) -> GateDecision {
    let focused = has_focus();
    SESSION.with(|s| match s.borrow_mut().as_mut() {
        Some(session) => session
            .gate
            .on_input(event, session.started.elapsed(), focused),
        None => {
            debug!("input {:?} with no session", event);
            GateDecision::Ignore(IgnoreReason::Debounce)
        }
    })
}
