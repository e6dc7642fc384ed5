//! Committed vs pending selection over a [`RegionList`].
//!
//! The state is a single value that is replaced on every update. After each
//! update the dirty-edge detector decides whether the confirmation drawer has
//! to open or close.

use log::{debug, info};

use crate::error::{RegionsError, Result};
use crate::region::{Region, RegionList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub current_id: u32,
    pub current_label: String,
    pub selected_id: u32,
    pub selected_label: String,
    /// `selected_id != current_id`.
    pub dirty: bool,
    /// `dirty` as it was one update ago.
    pub was_dirty: bool,
}

impl SelectionState {
    /// Clean state with `region` both committed and selected.
    pub fn new(region: &Region) -> Self {
        Self {
            current_id: region.id,
            current_label: region.label.clone(),
            selected_id: region.id,
            selected_label: region.label.clone(),
            dirty: false,
            was_dirty: false,
        }
    }

    /// The state after picking `region`, or `None` if it is already selected.
    pub fn select(&self, region: &Region) -> Option<Self> {
        if region.id == self.selected_id {
            return None;
        }

        Some(Self {
            current_id: self.current_id,
            current_label: self.current_label.clone(),
            selected_id: region.id,
            selected_label: region.label.clone(),
            dirty: self.current_id != region.id,
            // Re-selecting the committed row only happens while dirty.
            was_dirty: if self.current_id == region.id {
                true
            } else {
                self.dirty
            },
        })
    }

    /// The state after committing the pending selection, whose label is `label`.
    pub fn confirm(&self, label: &str) -> Self {
        Self {
            current_id: self.selected_id,
            current_label: label.to_string(),
            selected_id: self.selected_id,
            selected_label: label.to_string(),
            dirty: false,
            was_dirty: false,
        }
    }

    pub fn is_checked(&self, id: u32) -> bool {
        self.selected_id == id
    }

    pub fn is_current(&self, id: u32) -> bool {
        self.current_id == id
    }
}

/// What the drawer has to do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTransition {
    Open,
    Close,
}

/// Dirty-edge detector: only a change of `dirty` across an update produces
/// a transition.
pub fn dirty_edge(state: &SelectionState) -> Option<DrawerTransition> {
    match (state.was_dirty, state.dirty) {
        (false, true) => Some(DrawerTransition::Open),
        (true, false) => Some(DrawerTransition::Close),
        _ => None,
    }
}

/// One row as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub region: &'a Region,
    /// Pending selection; drives the indicator.
    pub checked: bool,
    /// Committed selection; drives the "active" affordance.
    pub current: bool,
}

/// The selector list state machine.
#[derive(Debug, Clone)]
pub struct SelectorList {
    regions: RegionList,
    state: SelectionState,
    drawer_open: bool,
}

impl SelectorList {
    /// Start with the first region committed.
    pub fn new(regions: RegionList) -> Self {
        let state = SelectionState::new(regions.first());
        Self {
            regions,
            state,
            drawer_open: false,
        }
    }

    /// Start with `id` committed.
    pub fn with_default(regions: RegionList, id: u32) -> Result<Self> {
        let region = regions.get(id).ok_or(RegionsError::UnknownRegion(id))?;
        let state = SelectionState::new(region);
        Ok(Self {
            regions,
            state,
            drawer_open: false,
        })
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Pick `id` as the pending selection.
    ///
    /// Unknown ids are a caller error and are returned as
    /// [`RegionsError::UnknownRegion`] without touching the state.
    pub fn select_item(&mut self, id: u32) -> Result<Option<DrawerTransition>> {
        let region = self
            .regions
            .get(id)
            .ok_or(RegionsError::UnknownRegion(id))?;

        let Some(next) = self.state.select(region) else {
            debug!("select_item({id}): already selected");
            return Ok(None);
        };

        debug!(
            "select_item({id}): dirty {} -> {}",
            self.state.dirty, next.dirty
        );
        self.state = next;
        Ok(self.settle())
    }

    /// Commit the pending selection and close the drawer.
    pub fn confirm(&mut self) -> Result<Option<DrawerTransition>> {
        let selected = self.state.selected_id;
        let label = self
            .regions
            .label_of(selected)
            .ok_or(RegionsError::UnknownRegion(selected))?;

        info!("confirm: {} -> {}", self.state.current_label, label);
        self.state = self.state.confirm(label);

        if self.drawer_open {
            self.drawer_open = false;
            return Ok(Some(DrawerTransition::Close));
        }
        Ok(None)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        self.regions.iter().map(|region| RowView {
            region,
            checked: self.state.is_checked(region.id),
            current: self.state.is_current(region.id),
        })
    }

    /// Run the dirty-edge detector and apply its verdict to the drawer flag.
    fn settle(&mut self) -> Option<DrawerTransition> {
        let transition = dirty_edge(&self.state)?;
        let open = transition == DrawerTransition::Open;
        if open == self.drawer_open {
            return None;
        }
        self.drawer_open = open;
        debug!("drawer {transition:?}");
        Some(transition)
    }
}
