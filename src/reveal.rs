//! Staggered reveal transitions derived from a section's visibility signal.
//!
//! [`reveal`] is a pure function of `(visible, index)`: no state beyond the
//! visibility latch that feeds it. Hosts apply the resulting
//! [`TransitionDescriptor`] as inline style on each child element.
//!
//! ```text
//! delay(index) = base_delay_ms + index × stagger_ms
//! ```

use alloc::format;
use alloc::string::String;

/// Whether the visitor asked the OS to minimise animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionPreference {
    /// Animate normally.
    #[default]
    Full,
    /// `prefers-reduced-motion: reduce`; show the final state immediately.
    Reduced,
}

/// Timing and travel for one group of staggered children.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealConfig {
    /// Delay applied to child 0.
    pub base_delay_ms: u32,
    /// Additional delay per child index.
    pub stagger_ms: u32,
    /// Transition duration.
    pub duration_ms: u32,
    /// Downward offset of hidden children; they slide up to 0 when revealed.
    pub offset_y_px: f32,
}

impl Default for RevealConfig {
    /// The generic reveal wrapper: 500 ms, 16 px, no stagger.
    fn default() -> Self {
        Self {
            base_delay_ms: 0,
            stagger_ms: 0,
            duration_ms: 500,
            offset_y_px: 16.0,
        }
    }
}

impl RevealConfig {
    /// Generic wrapper with a fixed starting delay.
    pub fn wrapper(delay_ms: u32) -> Self {
        Self {
            base_delay_ms: delay_ms,
            ..Self::default()
        }
    }

    /// Section heading.
    pub fn heading() -> Self {
        Self {
            duration_ms: 700,
            ..Self::default()
        }
    }

    /// Skill category cards, 120 ms apart.
    pub fn skill_card() -> Self {
        Self {
            stagger_ms: 120,
            ..Self::default()
        }
    }

    /// Items inside skill card `card_index`: they start with their card and
    /// follow each other 60 ms apart.
    pub fn skill_item(card_index: u32) -> Self {
        Self {
            base_delay_ms: card_index.saturating_mul(Self::skill_card().stagger_ms),
            stagger_ms: 60,
            duration_ms: 500,
            offset_y_px: 8.0,
        }
    }

    /// Project list items.
    pub fn project_item() -> Self {
        Self {
            base_delay_ms: 0,
            stagger_ms: 60,
            duration_ms: 350,
            offset_y_px: 12.0,
        }
    }

    /// Stagger delay for child `index`, saturating instead of overflowing.
    pub fn delay_for(&self, index: u32) -> u32 {
        self.base_delay_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }
}

/// Target style for one child element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionDescriptor {
    /// Target opacity, 0.0 hidden or 1.0 shown.
    pub opacity: f32,
    /// Target vertical translation in px.
    pub translate_y_px: f32,
    /// Transition duration.
    pub duration_ms: u32,
    /// Transition delay.
    pub delay_ms: u32,
}

impl TransitionDescriptor {
    /// CSS declarations for an inline `style` attribute.
    pub fn to_inline_style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition-property: opacity, transform; \
             transition-duration: {}ms; transition-delay: {}ms;",
            self.opacity, self.translate_y_px, self.duration_ms, self.delay_ms
        )
    }
}

/// Transition for child `index` of a group whose section visibility is `visible`.
///
/// With [`MotionPreference::Reduced`] the result is always the shown state
/// with no duration and no delay.
pub fn reveal(
    visible: bool,
    index: u32,
    config: &RevealConfig,
    motion: MotionPreference,
) -> TransitionDescriptor {
    if motion == MotionPreference::Reduced {
        return TransitionDescriptor {
            opacity: 1.0,
            translate_y_px: 0.0,
            duration_ms: 0,
            delay_ms: 0,
        };
    }
    let (opacity, translate_y_px) = if visible {
        (1.0, 0.0)
    } else {
        (0.0, config.offset_y_px)
    };
    TransitionDescriptor {
        opacity,
        translate_y_px,
        duration_ms: config.duration_ms,
        delay_ms: config.delay_for(index),
    }
}
