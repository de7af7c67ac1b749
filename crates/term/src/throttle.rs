//! Redraw gating.
//!
//! The grid only changes on input or while a mismatch delay runs, so frames
//! are skipped unless the view fingerprint changes or a minimum interval passes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;
use crate::game_view::{ViewOverlay, Viewport};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if changed || !is_static || stale {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }
        false
    }

    /// Forget the last frame so the next call renders (e.g. after a resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Hash of everything that affects the drawn frame.
pub fn view_fingerprint(snap: &GameSnapshot, overlay: &ViewOverlay, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.hash(&mut h);
    overlay.hash(&mut h);
    viewport.width.hash(&mut h);
    viewport.height.hash(&mut h);
    h.finish()
}
