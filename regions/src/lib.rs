pub mod animation;
pub mod buffer;
pub mod color;
pub mod drawer;
pub mod error;
pub mod event;
pub mod indicator;
pub mod keybinds;
pub mod paint;
pub mod picker;
pub mod rect;
pub mod region;
pub mod selection;
pub mod terminal;
pub mod theme;

pub use animation::{Easing, Spring, SpringConfig, Tween};
pub use buffer::{Buffer, Cell};
pub use color::{Color, Rgb};
pub use drawer::Drawer;
pub use error::{RegionsError, Result};
pub use event::{InputEvent, Key, KeyCombo, Modifiers};
pub use indicator::{
    visual_properties_for, IndicatorColors, IndicatorFrame, IndicatorOptions, IndicatorStyle,
    MountBehavior, ToggleIndicator, Variant, VisualProperties,
};
pub use keybinds::{KeyMatch, KeybindGuard, KeybindRegistry};
pub use paint::{paint_picker, Hit, PickerLayout};
pub use picker::{PickerCommand, RegionPicker};
pub use rect::Rect;
pub use region::{Region, RegionList};
pub use selection::{dirty_edge, DrawerTransition, RowView, SelectionState, SelectorList};
pub use terminal::Terminal;
pub use theme::Theme;
