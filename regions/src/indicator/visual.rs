use super::Variant;

/// Path length of the fully drawn checkmark.
pub const CHECKMARK_PATH_LENGTH: f32 = 0.9;
/// The stroke is invisible below this drawn fraction...
pub const STROKE_REVEAL_START: f32 = 0.05;
/// ...and fully opaque above this one.
pub const STROKE_REVEAL_END: f32 = 0.15;

/// Target values for the animated properties of one variant.
/// Properties a variant does not animate are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualProperties {
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub path_length: Option<f32>,
}

pub fn visual_properties_for(checked: bool, variant: Variant) -> VisualProperties {
    match (variant, checked) {
        (Variant::RadioButton, true) => VisualProperties {
            scale: Some(1.0),
            opacity: Some(1.0),
            path_length: None,
        },
        (Variant::RadioButton, false) => VisualProperties {
            scale: Some(0.0),
            opacity: Some(0.0),
            path_length: None,
        },
        (Variant::Checkbox, true) => VisualProperties {
            scale: None,
            opacity: None,
            path_length: Some(CHECKMARK_PATH_LENGTH),
        },
        (Variant::Checkbox, false) => VisualProperties {
            scale: None,
            opacity: None,
            path_length: Some(0.0),
        },
    }
}

/// Opacity of the checkmark stroke for a given drawn path length.
pub fn stroke_opacity(path_length: f32) -> f32 {
    ((path_length - STROKE_REVEAL_START) / (STROKE_REVEAL_END - STROKE_REVEAL_START))
        .clamp(0.0, 1.0)
}
