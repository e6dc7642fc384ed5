use std::time::Duration;

use crate::animation::{Easing, Tween};
use crate::selection::DrawerTransition;

/// Slide duration of the confirmation drawer.
pub const DRAWER_SLIDE: Duration = Duration::from_millis(300);
/// Rows the drawer occupies when fully open.
pub const DRAWER_HEIGHT: u16 = 7;

/// The confirmation panel that slides up from the bottom edge.
///
/// `offset` is how many rows the panel is pushed below the screen: `height`
/// when closed, 0 when open. It starts closed without animating.
#[derive(Debug, Clone)]
pub struct Drawer {
    height: u16,
    open: bool,
    offset: Tween,
}

impl Drawer {
    pub fn new(height: u16) -> Self {
        Self {
            height,
            open: false,
            offset: Tween::new(height as f32, DRAWER_SLIDE, Easing::EaseInOut),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, transition: DrawerTransition) {
        self.open = transition == DrawerTransition::Open;
        let target = if self.open { 0.0 } else { self.height as f32 };
        self.offset.retarget(target);
    }

    pub fn tick(&mut self, dt: Duration) {
        self.offset.advance(dt);
    }

    pub fn finish(&mut self) {
        self.offset.finish();
    }

    pub fn is_animating(&self) -> bool {
        !self.offset.is_finished()
    }

    /// Rows of the panel currently on screen, counted from its top edge.
    pub fn visible_rows(&self) -> u16 {
        let offset = self.offset.value().round().clamp(0.0, self.height as f32) as u16;
        self.height - offset
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DRAWER_HEIGHT)
    }
}
