//! Spring-smoothed scroll progress for the sticky top bar.
//!
//! The raw scroll fraction jumps with every wheel tick; the bar follows it
//! through a damped spring so its `scaleX` eases instead.
//!
//! ```text
//! a = −stiffness · (x − target) − damping · v      (unit mass)
//! ```
//!
//! Integrated with semi-implicit Euler in fixed sub-steps of at most
//! [`MAX_SUBSTEP_S`] so large frame gaps stay stable.

/// Longest integration step, in seconds.
pub const MAX_SUBSTEP_S: f32 = 1.0 / 120.0;

/// Spring parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Pull toward the target.
    pub stiffness: f32,
    /// Velocity damping.
    pub damping: f32,
    /// Settle once within this distance of the target...
    pub rest_delta: f32,
    /// ...and slower than this.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            damping: 20.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

/// Page scroll progress in [0.0, 1.0], smoothed by a spring.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollProgress {
    config: SpringConfig,
    target: f32,
    value: f32,
    velocity: f32,
}

impl ScrollProgress {
    /// A bar at rest at 0.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Raw scroll fraction for a page. Pages that do not scroll report 0.
    pub fn fraction(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
        let scrollable = document_height - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (scroll_y / scrollable).clamp(0.0, 1.0)
    }

    /// Point the spring at the current scroll position.
    pub fn set_target(&mut self, scroll_y: f32, document_height: f32, viewport_height: f32) {
        self.target = Self::fraction(scroll_y, document_height, viewport_height);
    }

    /// Advance by `dt_s` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt_s: f32) -> bool {
        let mut remaining = dt_s.max(0.0);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_SUBSTEP_S);
            let accel = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }

    /// `true` once the bar is at rest on its target.
    pub fn is_settled(&self) -> bool {
        within(self.value - self.target, self.config.rest_delta)
            && within(self.velocity, self.config.rest_speed)
    }

    /// Horizontal scale for the bar, in [0.0, 1.0].
    pub fn scale_x(&self) -> f32 {
        self.value.clamp(0.0, 1.0)
    }

    /// The unsmoothed target.
    pub fn target(&self) -> f32 {
        self.target
    }
}

/// `|x| < bound` without `f32::abs`, which core lacks before 1.85.
fn within(x: f32, bound: f32) -> bool {
    x < bound && -x < bound
}
