fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Version info shown in the screensaver file properties
        let _ = embed_resource::compile("resources/windows/starfield.rc", embed_resource::NONE);
    }
}
