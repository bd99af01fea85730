//! Scroll-to-visual mappings for the landing page.
//!
//! Everything here is pure: the same geometry always yields the same frame,
//! so views can recompute on every scroll event without keeping history.

use std::time::Duration;

use crate::config::AnimationConfig;

/// Translation in pixels for a layer moving at `speed` times the scroll value.
pub fn parallax_offset(scroll: f64, speed: f64) -> f64 {
    scroll * speed
}

/// Opacity that falls linearly from 1 at the top of the page to 0 at
/// `fade_distance` pixels.
pub fn linear_fade(offset: f64, fade_distance: f64) -> f64 {
    if fade_distance <= 0.0 {
        return if offset > 0.0 { 0.0 } else { 1.0 };
    }
    (1.0 - offset / fade_distance).clamp(0.0, 1.0)
}

/// Opacity that stays at 1 until `progress` reaches `threshold`, then falls
/// linearly to 0 at `progress == 1`.
pub fn delayed_fade(progress: f64, threshold: f64) -> f64 {
    if progress < threshold {
        return 1.0;
    }
    let window = 1.0 - threshold;
    if window <= 0.0 {
        return 0.0;
    }
    (1.0 - (progress - threshold) / window).clamp(0.0, 1.0)
}

/// Layout of a section relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Distance from the viewport top to the section top (negative once scrolled past).
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// How far a section has travelled through the viewport: 0 while its top is
/// at the viewport bottom, 1 once it has left through the top.
///
/// Returns `None` for degenerate geometry (zero-sized viewport and section),
/// in which case the caller keeps its previous value.
pub fn section_progress(geometry: &SectionGeometry) -> Option<f64> {
    let span = geometry.viewport_height + geometry.height;
    if span.is_nan() || span <= 0.0 {
        return None;
    }
    let scrolled = (geometry.viewport_height - geometry.top) / span;
    scrolled.is_finite().then(|| scrolled.clamp(0.0, 1.0))
}

/// Progress to publish after a scroll event. Unavailable or degenerate
/// geometry keeps `prev`.
pub fn next_progress(prev: f64, geometry: Option<&SectionGeometry>) -> f64 {
    geometry.and_then(section_progress).unwrap_or(prev)
}

/// Pixel offset of a gallery layer for the current section progress.
pub fn gallery_offset(progress: f64, speed: f64, max_parallax_px: f64) -> f64 {
    parallax_offset(progress * max_parallax_px, speed)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    /// Downward shift of the background image.
    pub image_offset: f64,
    /// Upward shift of the content block.
    pub text_offset: f64,
    pub opacity: f64,
}

pub fn hero_frame(scroll_offset: f64, config: &AnimationConfig) -> HeroFrame {
    HeroFrame {
        image_offset: parallax_offset(scroll_offset, config.hero_image_speed),
        text_offset: parallax_offset(scroll_offset, config.hero_text_speed),
        opacity: linear_fade(scroll_offset, config.hero_fade_distance_px),
    }
}

/// One-shot latch driving the entrance transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceFlag {
    entered: bool,
}

impl EntranceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Flips the latch. Returns `true` only for the call that flipped it.
    pub fn enter(&mut self) -> bool {
        let flipped = !self.entered;
        self.entered = true;
        flipped
    }

    /// Enters once `elapsed` has reached `delay`. Returns the latch state.
    pub fn poll(&mut self, elapsed: Duration, delay: Duration) -> bool {
        if elapsed >= delay {
            self.enter();
        }
        self.entered
    }
}
