//! Window id → surface map.
//!
//! Surfaces are owned here and looked up by the OS window identifier, so no
//! raw window pointers double as object identity.

use std::collections::HashMap;

use log::warn;

use crate::model::Size;

use super::surface::Surface;
use super::target::DrawTarget;

/// Opaque OS window identifier (an `HWND` value on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub isize);

/// Owns every live surface, keyed by window.
pub struct SurfaceRegistry<T: DrawTarget> {
    slots: Vec<(WindowId, Surface<T>)>,
    index: HashMap<WindowId, usize>,
}

impl<T: DrawTarget> Default for SurfaceRegistry<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: DrawTarget> SurfaceRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `surface` for `id`, returning any surface it replaced.
    pub fn insert(&mut self, id: WindowId, surface: Surface<T>) -> Option<Surface<T>> {
        if let Some(&i) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.slots[i].1, surface));
        }
        self.index.insert(id, self.slots.len());
        self.slots.push((id, surface));
        None
    }

    pub fn get(&self, id: WindowId) -> Option<&Surface<T>> {
        self.index.get(&id).map(|&i| &self.slots[i].1)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Surface<T>> {
        match self.index.get(&id) {
            Some(&i) => Some(&mut self.slots[i].1),
            None => None,
        }
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn remove(&mut self, id: WindowId) -> Option<Surface<T>> {
        let i = self.index.remove(&id)?;
        let (_, surface) = self.slots.swap_remove(i);
        if let Some((moved, _)) = self.slots.get(i) {
            self.index.insert(*moved, i);
        }
        Some(surface)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.slots.iter().map(|(id, _)| *id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WindowId, &mut Surface<T>)> + '_ {
        self.slots.iter_mut().map(|(id, s)| (*id, s))
    }

    /// Apply queued resizes. Unknown windows are ignored.
    pub fn apply_resizes(&mut self, resizes: Vec<(WindowId, Size)>) {
        for (id, size) in resizes {
            if let Some(surface) = self.get_mut(id) {
                if let Err(e) = surface.resize(size) {
                    warn!("resize of window {:?} failed: {}", id, e);
                }
            }
        }
    }

    /// Remove every surface, releasing their drawing resources.
    pub fn drain(&mut self) -> Vec<(WindowId, Surface<T>)> {
        self.index.clear();
        let mut out: Vec<_> = self.slots.drain(..).collect();
        for (_, surface) in &mut out {
            surface.release();
        }
        out
    }
}

/// Resize requests posted by the window procedure and applied by the frame
/// driver, so the window procedure never touches a surface mid-frame.
/// Only the latest size per window is kept.
#[derive(Debug, Default)]
pub struct ResizeQueue {
    pending: Vec<(WindowId, Size)>,
}

impl ResizeQueue {
    pub fn push(&mut self, id: WindowId, size: Size) {
        match self.pending.iter_mut().find(|(w, _)| *w == id) {
            Some(entry) => entry.1 = size,
            None => self.pending.push((id, size)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn take(&mut self) -> Vec<(WindowId, Size)> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Settings;
    use crate::render::Backbuffer;
    use crate::sim::StarField;

    fn surface(w: u32, h: u32) -> Surface<Backbuffer> {
        let size = Size::new(w, h);
        Surface::with_field(
            Backbuffer::new(size),
            StarField::with_seed(5, size, 0),
            Settings::default(),
        )
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut reg = SurfaceRegistry::new();
        reg.insert(WindowId(1), surface(10, 10));
        reg.insert(WindowId(2), surface(20, 20));
        reg.insert(WindowId(3), surface(30, 30));

        assert!(reg.remove(WindowId(1)).is_some());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(WindowId(3)).unwrap().size(), Size::new(30, 30));
        assert_eq!(reg.get(WindowId(2)).unwrap().size(), Size::new(20, 20));
        assert!(reg.remove(WindowId(1)).is_none());
    }

    #[test]
    fn insert_replaces_existing() {
        let mut reg = SurfaceRegistry::new();
        assert!(reg.insert(WindowId(7), surface(10, 10)).is_none());
        assert!(reg.insert(WindowId(7), surface(12, 12)).is_some());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn queued_resizes_apply_latest_size() {
        let mut reg = SurfaceRegistry::new();
        reg.insert(WindowId(1), surface(10, 10));
        let mut queue = ResizeQueue::default();
        queue.push(WindowId(1), Size::new(40, 30));
        queue.push(WindowId(1), Size::new(50, 20));
        queue.push(WindowId(99), Size::new(1, 1));
        reg.apply_resizes(queue.take());
        assert!(queue.is_empty());
        assert_eq!(reg.get(WindowId(1)).unwrap().size(), Size::new(50, 20));
    }

    #[test]
    fn drain_releases_surfaces() {
        let mut reg = SurfaceRegistry::new();
        reg.insert(WindowId(1), surface(10, 10));
        let drained = reg.drain();
        assert!(reg.is_empty());
        assert!(drained[0].1.is_released());
    }
}
