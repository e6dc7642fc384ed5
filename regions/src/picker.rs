//! The region picker: selector list, one toggle indicator per row and the
//! confirmation drawer, composed into a single mountable component.

use std::time::Duration;

use log::info;

use crate::drawer::Drawer;
use crate::error::Result;
use crate::event::KeyCombo;
use crate::indicator::{IndicatorOptions, ToggleIndicator, Variant};
use crate::keybinds::{KeybindGuard, KeybindRegistry};
use crate::selection::{DrawerTransition, SelectorList};

/// Chord that flips between radio buttons and checkboxes: Ctrl+K, then V.
pub const TOGGLE_VARIANT_KEYS: [KeyCombo; 2] = [KeyCombo::char('k').ctrl(), KeyCombo::char('v')];

/// Commands the picker binds on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCommand {
    ToggleVariant,
}

#[derive(Debug)]
pub struct RegionPicker {
    list: SelectorList,
    variant: Variant,
    options: IndicatorOptions,
    indicators: Vec<ToggleIndicator>,
    drawer: Drawer,
    reduced_motion: bool,
    shortcut: Option<KeybindGuard>,
}

impl RegionPicker {
    pub fn new(list: SelectorList, variant: Variant, options: IndicatorOptions) -> Self {
        let indicators = list
            .rows()
            .map(|row| ToggleIndicator::new(variant, row.checked, &options))
            .collect();

        Self {
            list,
            variant,
            options,
            indicators,
            drawer: Drawer::default(),
            reduced_motion: false,
            shortcut: None,
        }
    }

    /// Register the variant shortcut. The binding is released on
    /// [`unmount`](Self::unmount) or when the picker is dropped.
    pub fn mount<A>(&mut self, registry: &KeybindRegistry<A>)
    where
        A: Clone + From<PickerCommand> + 'static,
    {
        if self.shortcut.is_some() {
            return;
        }
        let guard = registry.bind(TOGGLE_VARIANT_KEYS, PickerCommand::ToggleVariant.into());
        info!("picker mounted, variant shortcut {:?}", guard.id());
        self.shortcut = Some(guard);
    }

    pub fn unmount(&mut self) {
        if self.shortcut.take().is_some() {
            info!("picker unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.shortcut.is_some()
    }

    pub fn list(&self) -> &SelectorList {
        &self.list
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn options(&self) -> &IndicatorOptions {
        &self.options
    }

    pub fn indicators(&self) -> &[ToggleIndicator] {
        &self.indicators
    }

    pub fn indicator(&self, id: u32) -> Option<&ToggleIndicator> {
        self.list
            .regions()
            .position(id)
            .and_then(|index| self.indicators.get(index))
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn select_item(&mut self, id: u32) -> Result<Option<DrawerTransition>> {
        let transition = self.list.select_item(id)?;
        self.sync(transition);
        Ok(transition)
    }

    pub fn confirm(&mut self) -> Result<Option<DrawerTransition>> {
        let transition = self.list.confirm()?;
        self.sync(transition);
        Ok(transition)
    }

    pub fn handle(&mut self, command: PickerCommand) {
        match command {
            PickerCommand::ToggleVariant => self.set_variant(self.variant.toggled()),
        }
    }

    pub fn set_variant(&mut self, variant: Variant) {
        if variant == self.variant {
            return;
        }
        info!("indicator variant {} -> {}", self.variant, variant);
        self.variant = variant;
        for indicator in &mut self.indicators {
            indicator.set_variant(variant);
        }
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        for indicator in &mut self.indicators {
            indicator.set_reduced_motion(enabled);
        }
        if enabled {
            self.drawer.finish();
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for indicator in &mut self.indicators {
            indicator.tick(dt);
        }
        self.drawer.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.drawer.is_animating() || self.indicators.iter().any(|i| !i.is_settled())
    }

    /// Push the list state into the indicators and the drawer.
    fn sync(&mut self, transition: Option<DrawerTransition>) {
        for (indicator, row) in self.indicators.iter_mut().zip(self.list.rows()) {
            if indicator.checked() != row.checked {
                indicator.set_checked(row.checked);
            }
        }

        if let Some(transition) = transition {
            self.drawer.apply(transition);
            if self.reduced_motion {
                self.drawer.finish();
            }
        }
    }
}
