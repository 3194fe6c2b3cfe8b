//! Fullscreen and preview windows, and the frame loop that drives them.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use windows::core::{w, BOOL, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, EndPaint, EnumDisplayMonitors, FillRect, GetStockObject, ValidateRect,
    BLACK_BRUSH, HBRUSH, HDC, HMONITOR, PAINTSTRUCT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetClientRect,
    GetCursorPos, GetSystemMetrics, IsWindow, LoadCursorW, MoveWindow, PeekMessageW,
    RegisterClassW, SetCursor, ShowCursor, TranslateMessage, CS_HREDRAW, CS_VREDRAW, HCURSOR,
    IDC_ARROW, MSG, PM_REMOVE, SM_CXSCREEN, SM_CYSCREEN, WINDOW_EX_STYLE, WM_CLOSE, WM_CREATE,
    WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_LBUTTONDOWN, WM_MBUTTONDOWN, WM_MOUSEMOVE,
    WM_PAINT, WM_QUIT, WM_RBUTTONDOWN, WM_SETCURSOR, WM_SIZE, WM_SYSKEYDOWN, WM_XBUTTONDOWN,
    WNDCLASSW, WNDPROC, WS_CHILD, WS_EX_TOPMOST, WS_POPUP, WS_VISIBLE,
};

use crate::app::FrameClock;
use crate::error::{Error, Result};
use crate::input::InputEvent;
use crate::model::constants::{FULLSCREEN_FRAME_SLEEP_MS, PREVIEW_FRAME_SLEEP_MS};
use crate::model::{Settings, Size};
use crate::platform::windows::app::state::{
    begin_session, end_session, gate_input, is_running, queue_resize, request_stop, take_resizes,
};
use crate::platform::windows::{size_from_lparam, window_id};
use crate::render::{Surface, SurfaceRegistry};

use super::target::ScreenTarget;

const FULL_CLASS: PCWSTR = w!("StarfieldFullscreen");
const PREVIEW_CLASS: PCWSTR = w!("StarfieldPreview");

type Screens = SurfaceRegistry<ScreenTarget>;

unsafe fn register_class(class_name: PCWSTR, proc: WNDPROC, cursor: Option<HCURSOR>) -> Result<HINSTANCE> {
    let instance: HINSTANCE = GetModuleHandleW(None)?.into();
    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: proc,
        hInstance: instance,
        hCursor: cursor.unwrap_or_default(),
        hbrBackground: HBRUSH(GetStockObject(BLACK_BRUSH).0),
        lpszClassName: class_name,
        ..Default::default()
    };
    if RegisterClassW(&wc) == 0 {
        debug!("window class already registered or registration failed");
    }
    Ok(instance)
}

fn client_size(hwnd: HWND) -> Result<Size> {
    let mut rc = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rc)? };
    Ok(Size::from_extent(rc.right - rc.left, rc.bottom - rc.top))
}

unsafe extern "system" fn collect_monitor(
    _monitor: HMONITOR,
    _hdc: HDC,
    rect: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let rects = &mut *(data.0 as *mut Vec<RECT>);
    if let Some(r) = rect.as_ref() {
        rects.push(*r);
    }
    true.into()
}

/// Bounds of every monitor in virtual-screen coordinates.
fn monitor_rects() -> Vec<RECT> {
    let mut rects: Vec<RECT> = Vec::new();
    unsafe {
        let _ = EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(&mut rects as *mut Vec<RECT> as isize),
        );
    }
    if rects.is_empty() {
        warn!("monitor enumeration returned nothing, using the primary screen");
        let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        rects.push(RECT {
            left: 0,
            top: 0,
            right: w,
            bottom: h,
        });
    }
    rects
}

/// Pump messages, apply resizes, then draw every surface once per frame.
/// Stops on `WM_QUIT` or when `keep_going` returns false.
fn run_frames(screens: &mut Screens, sleep_ms: u64, mut keep_going: impl FnMut() -> bool) {
    let mut clock = FrameClock::new();
    let mut msg = MSG::default();
    'frames: while keep_going() {
        unsafe {
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                if msg.message == WM_QUIT {
                    debug!("WM_QUIT received");
                    break 'frames;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        screens.apply_resizes(take_resizes());
        let frame = clock.tick(Instant::now());
        for (_, surface) in screens.iter_mut() {
            surface.render_frame(frame.dt, frame.twinkle_time());
        }
        thread::sleep(Duration::from_millis(sleep_ms));
    }
}

/// Cover every monitor with a star field until input ends the session.
pub fn run_fullscreen(settings: &Settings) -> Result<()> {
    let instance = unsafe { register_class(FULL_CLASS, Some(fullscreen_wnd_proc), None)? };
    let monitors = monitor_rects();
    info!("fullscreen: {} monitor(s)", monitors.len());

    let mut screens = Screens::new();
    for rc in &monitors {
        let (w, h) = (rc.right - rc.left, rc.bottom - rc.top);
        info!("monitor at ({}, {}) size {}x{}", rc.left, rc.top, w, h);
        let created = unsafe {
            CreateWindowExW(
                WS_EX_TOPMOST,
                FULL_CLASS,
                w!("Starfield"),
                WS_POPUP | WS_VISIBLE,
                rc.left,
                rc.top,
                w,
                h,
                None,
                None,
                Some(instance),
                None,
            )
        };
        let hwnd = match created {
            Ok(h) => h,
            Err(e) => {
                warn!("failed to create fullscreen window: {}", e);
                continue;
            }
        };
        let size = client_size(hwnd).unwrap_or(Size::from_extent(w, h));
        let target = ScreenTarget::acquire(hwnd, size);
        debug!("window {:?} uses {}", hwnd, target.strategy());
        screens.insert(window_id(hwnd), Surface::new(target, *settings));
    }

    if screens.is_empty() {
        return Err(Error::Window("no fullscreen window could be created".into()));
    }

    unsafe { ShowCursor(false) };
    begin_session();
    run_frames(&mut screens, FULLSCREEN_FRAME_SLEEP_MS, is_running);
    end_session();

    let ids: Vec<_> = screens.ids().collect();
    drop(screens.drain());
    for id in ids {
        unsafe {
            let _ = DestroyWindow(HWND(id.0 as *mut _));
        }
    }
    unsafe { ShowCursor(true) };
    info!("fullscreen session finished");
    Ok(())
}

/// Draw into a child of `parent` until the host destroys it.
pub fn run_preview(parent: HWND, settings: &Settings) -> Result<()> {
    if !unsafe { IsWindow(Some(parent)) }.as_bool() {
        return Err(Error::Window(format!("preview parent {:?} is not a window", parent)));
    }
    let arrow = unsafe { LoadCursorW(None, IDC_ARROW).ok() };
    let instance = unsafe { register_class(PREVIEW_CLASS, Some(preview_wnd_proc), arrow)? };

    let mut parent_size = client_size(parent)?;
    let child = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PREVIEW_CLASS,
            w!(""),
            WS_CHILD | WS_VISIBLE,
            0,
            0,
            parent_size.width as i32,
            parent_size.height as i32,
            Some(parent),
            None,
            Some(instance),
            None,
        )?
    };
    info!(
        "preview: child {:?} in {:?}, {}x{}",
        child, parent, parent_size.width, parent_size.height
    );

    let size = client_size(child)?;
    let mut screens = Screens::new();
    screens.insert(window_id(child), Surface::new(ScreenTarget::acquire(child, size), *settings));

    run_frames(&mut screens, PREVIEW_FRAME_SLEEP_MS, || unsafe {
        if !IsWindow(Some(child)).as_bool() {
            return false;
        }
        // Follow the host thumbnail if it changes size.
        if let Ok(now) = client_size(parent) {
            if now != parent_size {
                parent_size = now;
                let _ = MoveWindow(child, 0, 0, now.width as i32, now.height as i32, true);
            }
        }
        true
    });

    drop(screens.drain());
    unsafe {
        if IsWindow(Some(child)).as_bool() {
            let _ = DestroyWindow(child);
        }
    }
    info!("preview finished");
    Ok(())
}

fn gate(event: InputEvent) -> LRESULT {
    if gate_input(event).is_exit() {
        info!("input ends the session");
        request_stop();
    }
    LRESULT(0)
}

unsafe extern "system" fn fullscreen_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => LRESULT(0),

        WM_SIZE => {
            queue_resize(window_id(hwnd), size_from_lparam(lparam));
            LRESULT(0)
        }

        WM_KEYDOWN | WM_SYSKEYDOWN => gate(InputEvent::Key),

        WM_LBUTTONDOWN | WM_RBUTTONDOWN | WM_MBUTTONDOWN | WM_XBUTTONDOWN => {
            gate(InputEvent::MouseButton)
        }

        WM_MOUSEMOVE => {
            let mut pt = POINT::default();
            if GetCursorPos(&mut pt).is_ok() {
                gate(InputEvent::MouseMove { x: pt.x, y: pt.y })
            } else {
                LRESULT(0)
            }
        }

        WM_SETCURSOR => {
            SetCursor(None);
            LRESULT(1)
        }

        WM_ERASEBKGND => LRESULT(1),

        WM_PAINT => {
            let _ = ValidateRect(Some(hwnd), None);
            LRESULT(0)
        }

        WM_CLOSE => {
            request_stop();
            LRESULT(0)
        }

        WM_DESTROY => {
            debug!("fullscreen window {:?} destroyed", hwnd);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe extern "system" fn preview_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_SIZE => {
            queue_resize(window_id(hwnd), size_from_lparam(lparam));
            LRESULT(0)
        }

        WM_ERASEBKGND => LRESULT(1),

        // Black until the first frame is presented.
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(hwnd, &mut ps);
            FillRect(hdc, &ps.rcPaint, HBRUSH(GetStockObject(BLACK_BRUSH).0));
            let _ = EndPaint(hwnd, &ps);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
