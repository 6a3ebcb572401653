//! Scroll-triggered pagination.
//!
//! The trigger never looks at the terminal directly. It samples a
//! [`Viewport`], so tests can drive it with synthetic metrics.

// ============================================================================
// Viewport Metrics
// ============================================================================

/// One sample of the scrollable content geometry, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
    /// Lines scrolled past the top.
    pub scroll_top: u32,
    /// Visible height.
    pub client_height: u32,
    /// Total content height.
    pub scroll_height: u32,
}

impl ViewportMetrics {
    #[must_use]
    pub const fn new(scroll_top: u32, client_height: u32, scroll_height: u32) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Whether the visible window reaches the end of the content.
    #[must_use]
    pub const fn at_bottom(&self) -> bool {
        self.scroll_top.saturating_add(self.client_height) >= self.scroll_height
    }
}

/// Source of viewport metrics samples.
pub trait Viewport {
    fn metrics(&self) -> ViewportMetrics;
}

impl Viewport for ViewportMetrics {
    fn metrics(&self) -> ViewportMetrics {
        *self
    }
}

// ============================================================================
// Scroll Trigger
// ============================================================================

/// Decides when reaching the bottom of the list should load another page.
///
/// Fires once per bottom crossing. After firing it stays disarmed until the
/// viewport leaves the bottom or the content height changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTrigger {
    attached: bool,
    /// Content height at the moment the trigger last fired.
    fired_at_height: Option<u32>,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTrigger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attached: true,
            fired_at_height: None,
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stops observing until [`ScrollTrigger::reset`].
    pub fn detach(&mut self) {
        self.attached = false;
        self.fired_at_height = None;
    }

    /// Re-attaches for a new keyword session.
    pub fn reset(&mut self) {
        self.attached = true;
        self.fired_at_height = None;
    }

    /// Samples the viewport. Returns `true` when the page should advance.
    pub fn observe(
        &mut self,
        viewport: &impl Viewport,
        has_next_page: bool,
        is_loading: bool,
    ) -> bool {
        if !has_next_page {
            if self.attached {
                tracing::debug!("No more pages, detaching scroll trigger");
            }
            self.detach();
            return false;
        }
        if !self.attached {
            return false;
        }

        let metrics = viewport.metrics();
        if !metrics.at_bottom() {
            self.fired_at_height = None;
            return false;
        }
        if is_loading || self.fired_at_height == Some(metrics.scroll_height) {
            return false;
        }

        self.fired_at_height = Some(metrics.scroll_height);
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
