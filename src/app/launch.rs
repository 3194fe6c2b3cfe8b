//! Screensaver command line: `/s`, `/p HWND`, `/c[:HWND]`.

use std::ffi::OsString;
use std::fmt;

/// How the process was asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Show the settings form, embedded in `owner` when possible.
    Configure { owner: Option<u64> },
    /// Draw into a child of the host's thumbnail window.
    Preview { parent: u64 },
    /// Cover every monitor until input ends the session.
    Fullscreen,
}

impl LaunchMode {
    /// Parse raw OS arguments. Text that is not valid Unicode is replaced
    /// lossily and then fails to match any switch or handle.
    pub fn from_os_args<I>(args: I) -> LaunchMode
    where
        I: IntoIterator<Item = OsString>,
    {
        LaunchMode::parse(args.into_iter().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Parse the arguments after the program name.
    pub fn parse<I, S>(args: I) -> LaunchMode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let Some(first) = args.next() else {
            return LaunchMode::Fullscreen;
        };
        let first = first.as_ref().trim();

        let mut chars = first.chars();
        if !matches!(chars.next(), Some('/') | Some('-')) {
            return LaunchMode::Fullscreen;
        }
        let Some(letter) = chars.next().map(|c| c.to_ascii_lowercase()) else {
            return LaunchMode::Fullscreen;
        };

        let handle = match first.find(':') {
            Some(colon) => parse_handle(&first[colon + 1..]),
            None => args.next().and_then(|a| parse_separate_handle(a.as_ref())),
        };

        match (letter, handle) {
            ('c', owner) => LaunchMode::Configure { owner },
            ('p', Some(parent)) => LaunchMode::Preview { parent },
            _ => LaunchMode::Fullscreen,
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Configure { owner: Some(h) } => write!(f, "configure (owner 0x{:X})", h),
            LaunchMode::Configure { owner: None } => write!(f, "configure (no owner)"),
            LaunchMode::Preview { parent } => write!(f, "preview (parent 0x{:X})", parent),
            LaunchMode::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Decimal or `0x` hex. Zero means no window.
fn parse_handle(text: &str) -> Option<u64> {
    let t = text.trim();
    let value = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => t.parse::<u64>().ok()?,
    };
    (value != 0).then_some(value)
}

/// A handle given as its own argument must be all decimal digits.
fn parse_separate_handle(text: &str) -> Option<u64> {
    let t = text.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_handle(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn not_unicode(prefix: &str) -> OsString {
        use std::os::unix::ffi::OsStringExt;
        let mut bytes = prefix.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        OsString::from_vec(bytes)
    }

    #[cfg(windows)]
    fn not_unicode(prefix: &str) -> OsString {
        use std::os::windows::ffi::OsStringExt;
        let mut wide: Vec<u16> = prefix.encode_utf16().collect();
        wide.push(0xD800);
        OsString::from_wide(&wide)
    }

    #[test]
    fn non_unicode_arguments_do_not_abort() {
        assert_eq!(
            LaunchMode::from_os_args([OsString::from("/p"), not_unicode("12")]),
            LaunchMode::Fullscreen
        );
        assert_eq!(
            LaunchMode::from_os_args([not_unicode("/c:")]),
            LaunchMode::Configure { owner: None }
        );
        assert_eq!(
            LaunchMode::from_os_args([OsString::from("/c"), OsString::from("42")]),
            LaunchMode::Configure { owner: Some(42) }
        );
    }

    fn parse(args: &[&str]) -> LaunchMode {
        LaunchMode::parse(args.iter().copied())
    }

    #[test]
    fn no_arguments_is_fullscreen() {
        assert_eq!(parse(&[]), LaunchMode::Fullscreen);
        assert_eq!(parse(&["/s"]), LaunchMode::Fullscreen);
        assert_eq!(parse(&["-S"]), LaunchMode::Fullscreen);
        assert_eq!(parse(&["banana"]), LaunchMode::Fullscreen);
        assert_eq!(parse(&["/"]), LaunchMode::Fullscreen);
    }

    #[test]
    fn configure_forms() {
        assert_eq!(parse(&["/c"]), LaunchMode::Configure { owner: None });
        assert_eq!(parse(&["/C:1234"]), LaunchMode::Configure { owner: Some(1234) });
        assert_eq!(parse(&["-c:0x1A2b"]), LaunchMode::Configure { owner: Some(0x1A2B) });
        assert_eq!(parse(&["/c", "5678"]), LaunchMode::Configure { owner: Some(5678) });
        assert_eq!(parse(&["/c:"]), LaunchMode::Configure { owner: None });
        assert_eq!(parse(&["/c:0"]), LaunchMode::Configure { owner: None });
    }

    #[test]
    fn separate_handle_must_be_decimal() {
        assert_eq!(parse(&["/c", "0x10"]), LaunchMode::Configure { owner: None });
        assert_eq!(parse(&["/c", "12a"]), LaunchMode::Configure { owner: None });
    }

    #[test]
    fn preview_forms() {
        assert_eq!(parse(&["/p", "4242"]), LaunchMode::Preview { parent: 4242 });
        assert_eq!(parse(&["/P:0xFF"]), LaunchMode::Preview { parent: 255 });
    }

    #[test]
    fn preview_without_handle_falls_back_to_fullscreen() {
        assert_eq!(parse(&["/p"]), LaunchMode::Fullscreen);
        assert_eq!(parse(&["/p", "nope"]), LaunchMode::Fullscreen);
    }
}
