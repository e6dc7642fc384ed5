//! Animated toggle indicator (radio button / checkbox).
//!
//! The indicator is a pure function of its `checked` input: every change
//! retargets one spring per animated property, and once the springs settle
//! the frame equals [`visual_properties_for`] exactly.

mod options;
mod variant;
mod visual;

use std::time::Duration;

pub use options::{IndicatorColors, IndicatorOptions};
pub use variant::{IndicatorStyle, MountBehavior, Variant};
pub use visual::{
    stroke_opacity, visual_properties_for, VisualProperties, CHECKMARK_PATH_LENGTH,
    STROKE_REVEAL_END, STROKE_REVEAL_START,
};

use crate::animation::{Spring, SpringConfig};

/// Interpolated values for the current animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorFrame {
    pub scale: f32,
    pub opacity: f32,
    pub path_length: f32,
    pub stroke_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct ToggleIndicator {
    variant: Variant,
    checked: bool,
    scale: Spring,
    opacity: Spring,
    path_length: Spring,
    reduced_motion: bool,
}

impl ToggleIndicator {
    pub fn new(variant: Variant, checked: bool, options: &IndicatorOptions) -> Self {
        let mut indicator = Self::unchecked(variant, options.spring);
        indicator.set_checked(checked);
        if options.mount == MountBehavior::Snap {
            indicator.finish();
        }
        indicator
    }

    fn unchecked(variant: Variant, spring: SpringConfig) -> Self {
        Self {
            variant,
            checked: false,
            scale: Spring::new(spring, 0.0),
            opacity: Spring::new(spring, 0.0),
            path_length: Spring::new(spring, 0.0),
            reduced_motion: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;

        let target = visual_properties_for(checked, self.variant);
        if let Some(scale) = target.scale {
            self.scale.set_target(scale);
        }
        if let Some(opacity) = target.opacity {
            self.opacity.set_target(opacity);
        }
        if let Some(path_length) = target.path_length {
            self.path_length.set_target(path_length);
        }

        if self.reduced_motion {
            self.finish();
        }
    }

    /// Swap the presentation. The new variant shows the current state
    /// without replaying an animation.
    pub fn set_variant(&mut self, variant: Variant) {
        if variant == self.variant {
            return;
        }
        let checked = self.checked;
        let reduced_motion = self.reduced_motion;
        *self = Self::unchecked(variant, self.scale.config());
        self.reduced_motion = reduced_motion;
        self.set_checked(checked);
        self.finish();
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.finish();
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.scale.advance(dt);
        self.opacity.advance(dt);
        self.path_length.advance(dt);
    }

    /// Jump every property to its target.
    pub fn finish(&mut self) {
        self.scale.finish();
        self.opacity.finish();
        self.path_length.finish();
    }

    pub fn is_settled(&self) -> bool {
        self.scale.is_settled() && self.opacity.is_settled() && self.path_length.is_settled()
    }

    pub fn frame(&self) -> IndicatorFrame {
        match self.variant {
            Variant::RadioButton => IndicatorFrame {
                scale: self.scale.value(),
                opacity: self.opacity.value(),
                path_length: 0.0,
                stroke_opacity: 0.0,
            },
            Variant::Checkbox => {
                let path_length = self.path_length.value();
                IndicatorFrame {
                    scale: 0.0,
                    opacity: 0.0,
                    path_length,
                    stroke_opacity: stroke_opacity(path_length),
                }
            }
        }
    }
}
