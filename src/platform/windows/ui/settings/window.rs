//! Settings form for Windows.
//!
//! Embedded as a child of the host's owner window when it is large enough,
//! otherwise shown as a centered popup. OK validates and saves, Cancel
//! discards.

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::Dialogs::{ChooseColorW, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
    GetClientRect, GetDlgItem, GetMessageW, GetSystemMetrics, GetWindowTextW, IsDialogMessageW,
    IsWindow, LoadCursorW, RegisterClassW, SendMessageW, SetForegroundWindow, ShowWindow,
    TranslateMessage, CS_HREDRAW, CS_VREDRAW, HMENU, IDC_ARROW, MSG, SM_CXSCREEN, SM_CYSCREEN,
    SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_CREATE, WM_DESTROY,
    WNDCLASSW, WS_CAPTION, WS_CHILD, WS_EX_CLIENTEDGE, WS_EX_CONTROLPARENT, WS_OVERLAPPED,
    WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use crate::error::{Error, Result};
use crate::model::{Rgb, Settings};
use crate::platform::windows::wide;
use crate::storage::ConfigStore;
use crate::ui::settings::{centered, choose_placement, Extent, SettingsForm, SettingsPlacement};

// Control IDs
const ID_OK: i32 = 1;
const ID_CANCEL: i32 = 2;
const ID_STARS_EDIT: i32 = 101;
const ID_SPEED_EDIT: i32 = 102;
const ID_TWINKLE_EDIT: i32 = 103;
const ID_COLOR_COMBO: i32 = 104;
const ID_COLOR_BUTTON: i32 = 105;

// ComboBox messages
const CB_ADDSTRING: u32 = 0x0143;
const CB_SETCURSEL: u32 = 0x014E;
const CB_GETCURSEL: u32 = 0x0147;
const CBN_SELCHANGE: u32 = 1;

// Edit style: digits only
const ES_NUMBER: u32 = 0x2000;

// Form client size
const FORM_WIDTH: i32 = 320;
const FORM_HEIGHT: i32 = 200;
const FORM_EXTENT: Extent = Extent {
    width: FORM_WIDTH,
    height: FORM_HEIGHT,
};

// Layout constants
const MARGIN: i32 = 16;
const ROW_HEIGHT: i32 = 34;
const LABEL_WIDTH: i32 = 130;
const EDIT_WIDTH: i32 = 80;
const COMBO_WIDTH: i32 = 110;
const BUTTON_WIDTH: i32 = 80;

/// Grace period before re-checking that the owner still fits the form.
const EMBED_SETTLE: Duration = Duration::from_millis(60);

const FORM_CLASS: PCWSTR = w!("StarfieldSettings");

struct FormSession {
    form: SettingsForm,
    store: ConfigStore,
    saved: bool,
}

thread_local! {
    static FORM_STATE: RefCell<Option<FormSession>> = const { RefCell::new(None) };
}

/// Show the settings form and block until it closes. Returns true when new
/// settings were saved.
pub fn run_settings(owner: Option<HWND>, settings: Settings, store: ConfigStore) -> Result<bool> {
    FORM_STATE.with(|s| {
        *s.borrow_mut() = Some(FormSession {
            form: SettingsForm::new(settings),
            store,
            saved: false,
        })
    });

    let result = open(owner);
    let saved = FORM_STATE
        .with(|s| s.borrow_mut().take())
        .is_some_and(|session| session.saved);
    result.map(|_| saved)
}

fn is_window(hwnd: HWND) -> bool {
    unsafe { IsWindow(Some(hwnd)) }.as_bool()
}

fn client_extent(hwnd: HWND) -> Result<Extent> {
    let mut rc = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rc)? };
    Ok(Extent::new(rc.right - rc.left, rc.bottom - rc.top))
}

fn open(owner: Option<HWND>) -> Result<()> {
    let owner = owner.filter(|h| is_window(*h));
    let owner_client = owner.and_then(|h| match client_extent(h) {
        Ok(e) => Some(e),
        Err(e) => {
            warn!("settings: cannot read owner client area: {}", e);
            None
        }
    });

    match (owner, choose_placement(owner_client, FORM_EXTENT)) {
        (Some(owner), SettingsPlacement::Embedded { x, y }) => {
            run_embedded(owner, x, y).or_else(|e| {
                warn!("settings: embedding failed ({}), using popup", e);
                run_popup()
            })
        }
        _ => run_popup(),
    }
}

unsafe fn register_class() -> Result<HINSTANCE> {
    let hinstance: HINSTANCE = GetModuleHandleW(None)?.into();
    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(settings_wnd_proc),
        hInstance: hinstance,
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
        lpszClassName: FORM_CLASS,
        ..Default::default()
    };
    let _ = RegisterClassW(&wc);
    Ok(hinstance)
}

fn run_embedded(owner: HWND, x: i32, y: i32) -> Result<()> {
    unsafe {
        let form = embed_form(owner, x, y)?;
        info!("settings: embedded form {:?} in {:?}", form, owner);
        pump_until_closed(form, Some(owner));
    }
    Ok(())
}

/// Create the form inside `owner`, then confirm the owner still fits it.
/// Any failure after creation destroys the form before returning.
unsafe fn embed_form(owner: HWND, x: i32, y: i32) -> Result<HWND> {
    let hinstance = register_class()?;
    let form = CreateWindowExW(
        WS_EX_CONTROLPARENT,
        FORM_CLASS,
        w!("Starfield Settings"),
        WS_CHILD | WS_VISIBLE,
        x,
        y,
        FORM_WIDTH,
        FORM_HEIGHT,
        Some(owner),
        None,
        Some(hinstance),
        None,
    )?;

    thread::sleep(EMBED_SETTLE);
    let checked = client_extent(owner).and_then(|now| {
        if now.too_small_to_embed() {
            Err(Error::Window(format!(
                "owner shrank to {}x{} after embedding",
                now.width, now.height
            )))
        } else {
            Ok(now)
        }
    });
    match checked {
        Ok(_) => Ok(form),
        Err(e) => {
            let _ = DestroyWindow(form);
            Err(e)
        }
    }
}

fn run_popup() -> Result<()> {
    unsafe {
        let hinstance = register_class()?;
        let style = WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU;
        let mut rc = RECT {
            left: 0,
            top: 0,
            right: FORM_WIDTH,
            bottom: FORM_HEIGHT,
        };
        AdjustWindowRectEx(&mut rc, style, false, WS_EX_CONTROLPARENT)?;
        let outer = Extent::new(rc.right - rc.left, rc.bottom - rc.top);
        let screen = Extent::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN));
        let (x, y) = centered(0, 0, screen, outer);

        let form = CreateWindowExW(
            WS_EX_CONTROLPARENT,
            FORM_CLASS,
            w!("Starfield Settings"),
            style,
            x.max(0),
            y.max(0),
            outer.width,
            outer.height,
            None,
            None,
            Some(hinstance),
            None,
        )?;
        let _ = ShowWindow(form, SW_SHOW);
        let _ = SetForegroundWindow(form);

        info!("settings: popup form {:?}", form);
        pump_until_closed(form, None);
    }
    Ok(())
}

unsafe fn pump_until_closed(form: HWND, owner: Option<HWND>) {
    let mut msg = MSG::default();
    while is_window(form)
        && owner.is_none_or(is_window)
        && GetMessageW(&mut msg, None, 0, 0).as_bool()
    {
        if !IsDialogMessageW(form, &msg).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    info!("settings: form closed");
}

unsafe extern "system" fn settings_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_controls(hwnd);
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            handle_command(hwnd, control_id, notification, lparam);
            LRESULT(0)
        }

        WM_CLOSE => {
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => LRESULT(0),

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_controls(hwnd: HWND) {
    let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();
    let Some((initial, selected)) = FORM_STATE.with(|s| {
        s.borrow()
            .as_ref()
            .map(|session| (*session.form.initial(), session.form.selected_index()))
    }) else {
        return;
    };

    let edit_x = MARGIN + LABEL_WIDTH;
    let mut y = MARGIN;

    create_label(hwnd, hinstance, MARGIN, y, "Stars (10-5000)");
    create_edit(hwnd, hinstance, edit_x, y, ID_STARS_EDIT, initial.star_count);
    y += ROW_HEIGHT;

    create_label(hwnd, hinstance, MARGIN, y, "Speed % (10-300)");
    create_edit(hwnd, hinstance, edit_x, y, ID_SPEED_EDIT, initial.speed_pct);
    y += ROW_HEIGHT;

    create_label(hwnd, hinstance, MARGIN, y, "Twinkle % (0-100)");
    create_edit(hwnd, hinstance, edit_x, y, ID_TWINKLE_EDIT, initial.twinkle_pct);
    y += ROW_HEIGHT;

    create_label(hwnd, hinstance, MARGIN, y, "Color");
    let combo = create_combobox(hwnd, hinstance, edit_x, y, ID_COLOR_COMBO);
    for label in SettingsForm::combo_labels() {
        let text = wide(label);
        SendMessageW(combo, CB_ADDSTRING, None, Some(LPARAM(text.as_ptr() as isize)));
    }
    SendMessageW(combo, CB_SETCURSEL, Some(WPARAM(selected)), None);
    create_button(
        hwnd,
        hinstance,
        edit_x + COMBO_WIDTH + 8,
        y,
        "Pick...",
        ID_COLOR_BUTTON,
        FORM_WIDTH - MARGIN - (edit_x + COMBO_WIDTH + 8),
    );

    let button_y = FORM_HEIGHT - MARGIN - 26;
    create_button(
        hwnd,
        hinstance,
        FORM_WIDTH - MARGIN - 2 * BUTTON_WIDTH - 8,
        button_y,
        "OK",
        ID_OK,
        BUTTON_WIDTH,
    );
    create_button(
        hwnd,
        hinstance,
        FORM_WIDTH - MARGIN - BUTTON_WIDTH,
        button_y,
        "Cancel",
        ID_CANCEL,
        BUTTON_WIDTH,
    );
}

unsafe fn create_label(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str) {
    let text_wide = wide(text);
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("STATIC"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE,
        x,
        y + 4,
        LABEL_WIDTH,
        20,
        Some(hwnd),
        None,
        Some(hinstance),
        None,
    );
}

unsafe fn create_edit(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32, value: u32) {
    let text_wide = wide(&value.to_string());
    let _ = CreateWindowExW(
        WS_EX_CLIENTEDGE,
        w!("EDIT"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(ES_NUMBER),
        x,
        y,
        EDIT_WIDTH,
        24,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    );
}

unsafe fn create_button(
    hwnd: HWND,
    hinstance: HINSTANCE,
    x: i32,
    y: i32,
    text: &str,
    id: i32,
    width: i32,
) {
    let text_wide = wide(text);
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        width,
        26,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    );
}

unsafe fn create_combobox(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    // CBS_DROPDOWNLIST = 0x0003
    CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("COMBOBOX"),
        None,
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(0x0003),
        x,
        y,
        COMBO_WIDTH,
        140, // Height includes dropdown area
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default()
}

unsafe fn field_text(hwnd: HWND, id: i32) -> String {
    let Ok(ctrl) = GetDlgItem(Some(hwnd), id) else {
        return String::new();
    };
    let mut buf = [0u16; 32];
    let len = GetWindowTextW(ctrl, &mut buf).max(0) as usize;
    String::from_utf16_lossy(&buf[..len.min(buf.len())])
}

unsafe fn handle_command(hwnd: HWND, control_id: i32, notification: u32, lparam: LPARAM) {
    match control_id {
        ID_OK => {
            confirm(hwnd);
            let _ = DestroyWindow(hwnd);
        }
        ID_CANCEL => {
            info!("settings: cancelled");
            let _ = DestroyWindow(hwnd);
        }
        ID_COLOR_BUTTON => {
            show_color_picker(hwnd);
        }
        ID_COLOR_COMBO => {
            if notification == CBN_SELCHANGE {
                let combo_hwnd = HWND(lparam.0 as *mut _);
                let selection = SendMessageW(combo_hwnd, CB_GETCURSEL, None, None).0;
                if selection >= 0 {
                    FORM_STATE.with(|s| {
                        if let Some(session) = s.borrow_mut().as_mut() {
                            session.form.select_index(selection as usize);
                        }
                    });
                }
            }
        }
        _ => {}
    }
}

/// Validate the fields and persist. Unparsable text keeps the old value.
unsafe fn confirm(hwnd: HWND) {
    let stars = field_text(hwnd, ID_STARS_EDIT);
    let speed = field_text(hwnd, ID_SPEED_EDIT);
    let twinkle = field_text(hwnd, ID_TWINKLE_EDIT);

    FORM_STATE.with(|s| {
        let mut state = s.borrow_mut();
        let Some(session) = state.as_mut() else {
            return;
        };
        let settings = session.form.commit(&stars, &speed, &twinkle);
        match session.store.save(&settings) {
            Ok(()) => {
                session.saved = true;
                info!("settings: saved {:?}", settings);
            }
            Err(e) => error!("settings: save failed: {}", e),
        }
    });
}

unsafe fn show_color_picker(hwnd: HWND) {
    let Some((current, swatches)) = FORM_STATE.with(|s| {
        s.borrow()
            .as_ref()
            .map(|session| (session.form.color(), session.form.swatches()))
    }) else {
        return;
    };

    let mut custom_colors = swatches.map(|c| COLORREF(c.to_colorref()));

    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: hwnd,
        rgbResult: COLORREF(current.to_colorref()),
        lpCustColors: custom_colors.as_mut_ptr(),
        Flags: CC_FULLOPEN | CC_RGBINIT,
        ..Default::default()
    };

    // The chooser runs its own modal loop; no state borrow may be held here.
    let accepted = ChooseColorW(&mut cc).as_bool();
    let edited = custom_colors.map(|c| Rgb::from_colorref(c.0));
    let selected = FORM_STATE.with(|s| {
        s.borrow_mut().as_mut().and_then(|session| {
            session.form.keep_swatches(edited);
            if !accepted {
                return None;
            }
            session.form.set_color(Rgb::from_colorref(cc.rgbResult.0));
            Some(session.form.selected_index())
        })
    });
    if let (Some(index), Ok(combo)) = (selected, GetDlgItem(Some(hwnd), ID_COLOR_COMBO)) {
        SendMessageW(combo, CB_SETCURSEL, Some(WPARAM(index)), None);
    }
}
