//! Windows entry point: pick the launch mode and run it.
//!
//! Every mode exits with code 0. Failures fall back to a simpler mode and
//! are logged.

use log::{error, info, warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};

use starfield::app::LaunchMode;
use starfield::logging;
use starfield::platform::windows::ui::{run_fullscreen, run_preview, run_settings};
use starfield::storage::ConfigStore;

/// Main entry point for Windows.
pub fn run() {
    logging::init();
    info!(
        "starting {} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );

    let mode = LaunchMode::from_os_args(std::env::args_os().skip(1));
    info!("mode: {}", mode);

    unsafe {
        // Physical pixels so each monitor rect maps 1:1 to the render target
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
        if let Err(e) = CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok() {
            warn!("COM initialization failed: {}", e);
        }
    }

    let store = ConfigStore::open_default();
    match mode {
        LaunchMode::Configure { owner } => {
            let settings = store.load();
            let owner = owner.map(to_hwnd);
            match run_settings(owner, settings, store) {
                Ok(true) => info!("settings saved"),
                Ok(false) => info!("settings closed without saving"),
                Err(e) => error!("settings form failed: {}", e),
            }
        }
        LaunchMode::Preview { parent } => {
            let settings = store.load();
            if let Err(e) = run_preview(to_hwnd(parent), &settings) {
                warn!("preview failed: {}", e);
            }
        }
        LaunchMode::Fullscreen => {
            let settings = store.load();
            if let Err(e) = run_fullscreen(&settings) {
                error!("fullscreen failed: {}", e);
            }
        }
    }

    unsafe { CoUninitialize() };
    info!("exiting");
}

fn to_hwnd(handle: u64) -> HWND {
    HWND(handle as usize as *mut _)
}
