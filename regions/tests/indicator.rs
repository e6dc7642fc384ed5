use std::num::NonZeroU16;
use std::time::Duration;

use regions::indicator::{stroke_opacity, CHECKMARK_PATH_LENGTH};
use regions::{
    visual_properties_for, Color, IndicatorColors, IndicatorOptions, IndicatorStyle,
    MountBehavior, ToggleIndicator, Variant,
};

const FRAME: Duration = Duration::from_millis(16);

fn settle(indicator: &mut ToggleIndicator) {
    for _ in 0..600 {
        if indicator.is_settled() {
            return;
        }
        indicator.tick(FRAME);
    }
    panic!("indicator did not settle: {:?}", indicator.frame());
}

// =============================================================================
// Visual Table Tests
// =============================================================================

#[test]
fn test_radio_visual_table() {
    let on = visual_properties_for(true, Variant::RadioButton);
    assert_eq!(on.scale, Some(1.0));
    assert_eq!(on.opacity, Some(1.0));
    assert_eq!(on.path_length, None);

    let off = visual_properties_for(false, Variant::RadioButton);
    assert_eq!(off.scale, Some(0.0));
    assert_eq!(off.opacity, Some(0.0));
}

#[test]
fn test_checkbox_visual_table() {
    let on = visual_properties_for(true, Variant::Checkbox);
    assert_eq!(on.path_length, Some(CHECKMARK_PATH_LENGTH));
    assert!((CHECKMARK_PATH_LENGTH - 0.9).abs() < f32::EPSILON);
    assert_eq!(on.scale, None);

    let off = visual_properties_for(false, Variant::Checkbox);
    assert_eq!(off.path_length, Some(0.0));
}

#[test]
fn test_stroke_opacity_is_monotonic() {
    let mut previous = 0.0;
    for i in 0..=90 {
        let value = stroke_opacity(i as f32 / 100.0);
        assert!(value >= previous);
        assert!((0.0..=1.0).contains(&value));
        previous = value;
    }
}

// =============================================================================
// Variant / Option Tests
// =============================================================================

#[test]
fn test_variant_parse_and_toggle() {
    assert_eq!("radiobutton".parse::<Variant>().unwrap(), Variant::RadioButton);
    assert_eq!("Checkbox".parse::<Variant>().unwrap(), Variant::Checkbox);
    assert!("toggle".parse::<Variant>().is_err());
    assert_eq!(Variant::RadioButton.toggled(), Variant::Checkbox);
    assert_eq!(Variant::Checkbox.toggled().to_string(), "radiobutton");
}

#[test]
fn test_style_and_mount_parse() {
    assert_eq!("filled".parse::<IndicatorStyle>().unwrap(), IndicatorStyle::Filled);
    assert_eq!("snap".parse::<MountBehavior>().unwrap(), MountBehavior::Snap);
    assert!("bold".parse::<IndicatorStyle>().is_err());
    assert!("later".parse::<MountBehavior>().is_err());
}

#[test]
fn test_contrast_defaults_to_base() {
    let colors = IndicatorColors::new(Color::rgb(10, 20, 30));
    assert_eq!(colors.contrast(), &Color::rgb(10, 20, 30));

    let colors = colors.with_contrast(Color::token("text-bright"));
    assert_eq!(colors.contrast(), &Color::token("text-bright"));
    assert_eq!(colors.base, Color::rgb(10, 20, 30));
}

#[test]
fn test_default_options() {
    let options = IndicatorOptions::default();
    assert_eq!(options.size.get(), 24);
    assert_eq!(options.cell_width(), 3);
    assert_eq!(options.style, IndicatorStyle::Outlined);
    assert_eq!(options.mount, MountBehavior::Animate);

    let small = options.size(NonZeroU16::new(12).unwrap());
    assert_eq!(small.cell_width(), 1);
}

// =============================================================================
// Animation Tests
// =============================================================================

#[test]
fn test_mount_always_starts_unchecked() {
    let indicator = ToggleIndicator::new(Variant::RadioButton, true, &IndicatorOptions::default());
    let frame = indicator.frame();
    assert_eq!(frame.scale, 0.0);
    assert_eq!(frame.opacity, 0.0);
    assert!(!indicator.is_settled());
}

#[test]
fn test_snap_mount_starts_at_target() {
    let options = IndicatorOptions::default().mount(MountBehavior::Snap);
    let indicator = ToggleIndicator::new(Variant::Checkbox, true, &options);
    assert!(indicator.is_settled());
    assert_eq!(indicator.frame().path_length, CHECKMARK_PATH_LENGTH);
    assert_eq!(indicator.frame().stroke_opacity, 1.0);
}

#[test]
fn test_radio_steady_states() {
    let options = IndicatorOptions::default();
    let mut indicator = ToggleIndicator::new(Variant::RadioButton, true, &options);
    settle(&mut indicator);
    assert_eq!(indicator.frame().scale, 1.0);
    assert_eq!(indicator.frame().opacity, 1.0);

    indicator.set_checked(false);
    assert!(!indicator.is_settled());
    settle(&mut indicator);
    assert_eq!(indicator.frame().scale, 0.0);
    assert_eq!(indicator.frame().opacity, 0.0);
}

#[test]
fn test_checkbox_steady_states() {
    let options = IndicatorOptions::default();
    let mut indicator = ToggleIndicator::new(Variant::Checkbox, true, &options);
    settle(&mut indicator);
    assert_eq!(indicator.frame().path_length, CHECKMARK_PATH_LENGTH);
    assert_eq!(indicator.frame().stroke_opacity, 1.0);

    indicator.set_checked(false);
    settle(&mut indicator);
    assert_eq!(indicator.frame().path_length, 0.0);
    assert_eq!(indicator.frame().stroke_opacity, 0.0);
}

#[test]
fn test_stroke_stays_hidden_at_start_of_draw() {
    let mut indicator =
        ToggleIndicator::new(Variant::Checkbox, true, &IndicatorOptions::default());
    indicator.tick(Duration::from_millis(1));
    let frame = indicator.frame();
    assert!(frame.path_length > 0.0);
    assert!(frame.path_length < 0.05);
    assert_eq!(frame.stroke_opacity, 0.0);
}

#[test]
fn test_retarget_mid_flight_reverses() {
    let mut indicator =
        ToggleIndicator::new(Variant::RadioButton, true, &IndicatorOptions::default());
    for _ in 0..5 {
        indicator.tick(FRAME);
    }
    let midway = indicator.frame().scale;
    assert!(midway > 0.0 && midway < 1.0);

    indicator.set_checked(false);
    settle(&mut indicator);
    assert_eq!(indicator.frame().scale, 0.0);
}

#[test]
fn test_variant_swap_keeps_state_without_animating() {
    let options = IndicatorOptions::default().mount(MountBehavior::Snap);
    let mut indicator = ToggleIndicator::new(Variant::RadioButton, true, &options);

    indicator.set_variant(Variant::Checkbox);
    assert_eq!(indicator.variant(), Variant::Checkbox);
    assert!(indicator.checked());
    assert!(indicator.is_settled());
    assert_eq!(indicator.frame().path_length, CHECKMARK_PATH_LENGTH);
}

#[test]
fn test_reduced_motion_jumps_to_target() {
    let mut indicator =
        ToggleIndicator::new(Variant::RadioButton, false, &IndicatorOptions::default());
    indicator.set_reduced_motion(true);
    indicator.set_checked(true);
    assert!(indicator.is_settled());
    assert_eq!(indicator.frame().scale, 1.0);
}
