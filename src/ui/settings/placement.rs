//! Where the settings form goes: inside the host's owner window or in a
//! popup of its own.

use log::info;

use crate::model::constants::{EMBED_MIN_HEIGHT, EMBED_MIN_WIDTH};

/// Client-area extents in pixels, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Too small to host the embedded form.
    pub fn too_small_to_embed(&self) -> bool {
        self.width < EMBED_MIN_WIDTH || self.height < EMBED_MIN_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPlacement {
    /// Child of the owner, top-left corner at `(x, y)` in owner client
    /// coordinates.
    Embedded { x: i32, y: i32 },
    /// Centered modal popup.
    Popup,
}

/// Decide placement from the owner's client area (`None` when there is no
/// usable owner) and the form's own size.
pub fn choose_placement(owner_client: Option<Extent>, form: Extent) -> SettingsPlacement {
    let Some(owner) = owner_client else {
        info!("settings: no owner window, using popup");
        return SettingsPlacement::Popup;
    };
    if owner.too_small_to_embed() {
        info!(
            "settings: owner {}x{} is too small, using popup",
            owner.width, owner.height
        );
        return SettingsPlacement::Popup;
    }
    let x = ((owner.width - form.width) / 2).max(0);
    let y = ((owner.height - form.height) / 2).max(0);
    info!("settings: embedding at ({}, {})", x, y);
    SettingsPlacement::Embedded { x, y }
}

/// Top-left corner that centers `inner` in an area of `outer` starting at
/// `(left, top)`.
pub fn centered(left: i32, top: i32, outer: Extent, inner: Extent) -> (i32, i32) {
    (
        left + (outer.width - inner.width) / 2,
        top + (outer.height - inner.height) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: Extent = Extent { width: 300, height: 200 };

    #[test]
    fn missing_owner_uses_popup() {
        assert_eq!(choose_placement(None, FORM), SettingsPlacement::Popup);
    }

    #[test]
    fn small_owner_uses_popup() {
        assert_eq!(
            choose_placement(Some(Extent::new(152, 112)), FORM),
            SettingsPlacement::Popup
        );
        assert_eq!(
            choose_placement(Some(Extent::new(400, 139)), FORM),
            SettingsPlacement::Popup
        );
    }

    #[test]
    fn large_owner_embeds_centered() {
        assert_eq!(
            choose_placement(Some(Extent::new(500, 400)), FORM),
            SettingsPlacement::Embedded { x: 100, y: 100 }
        );
    }

    #[test]
    fn embedded_origin_never_negative() {
        assert_eq!(
            choose_placement(Some(Extent::new(220, 140)), FORM),
            SettingsPlacement::Embedded { x: 0, y: 0 }
        );
    }

    #[test]
    fn centered_in_work_area() {
        let (x, y) = centered(10, 20, Extent::new(1000, 800), FORM);
        assert_eq!((x, y), (360, 320));
    }
}
