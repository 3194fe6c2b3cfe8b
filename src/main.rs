#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        starfield::logging::init();
        log::error!("starfield only runs on Windows");
        eprintln!("starfield only runs on Windows");
    }
}
