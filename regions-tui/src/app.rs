//! The region picker application: key and mouse dispatch plus the frame loop.

use std::time::{Duration, Instant};

use log::debug;
use regions::{
    paint_picker, Buffer, Hit, InputEvent, Key, KeyCombo, KeyMatch, KeybindGuard,
    KeybindRegistry, PickerCommand, PickerLayout, RegionList, RegionPicker, Result, SelectorList,
    Terminal, Theme,
};

use crate::settings::Settings;

/// Frame budget while something is animating.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Confirm,
    Quit,
    Picker(PickerCommand),
}

impl From<PickerCommand> for Action {
    fn from(command: PickerCommand) -> Self {
        Action::Picker(command)
    }
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    picker: RegionPicker,
    theme: Theme,
    keybinds: KeybindRegistry<Action>,
    _bindings: Vec<KeybindGuard>,
    cursor: usize,
    layout: PickerLayout,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let regions = RegionList::tv2();
        let list = match settings.default_region {
            Some(id) => SelectorList::with_default(regions, id)?,
            None => SelectorList::new(regions),
        };

        let mut picker = RegionPicker::new(list, settings.variant, settings.indicator.clone());
        picker.set_reduced_motion(settings.reduced_motion);

        let keybinds = KeybindRegistry::new();
        let bindings = bind_keys(&keybinds);
        picker.mount(&keybinds);

        let state = picker.list().state();
        let cursor = picker.list().regions().position(state.selected_id).unwrap_or(0);

        Ok(Self {
            picker,
            theme: settings.theme.clone(),
            keybinds,
            _bindings: bindings,
            cursor,
            layout: PickerLayout::default(),
        })
    }

    pub fn picker(&self) -> &RegionPicker {
        &self.picker
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<Flow> {
        match event {
            InputEvent::Key(combo) => self.handle_key(combo),
            InputEvent::Click { x, y } => self.handle_click(x, y),
            // The next draw picks up the new size.
            InputEvent::Resize { .. } => Ok(Flow::Continue),
        }
    }

    pub fn handle_key(&mut self, combo: KeyCombo) -> Result<Flow> {
        match self.keybinds.feed(combo) {
            KeyMatch::Action(action) => self.dispatch(action),
            KeyMatch::Pending => {
                debug!("{combo} waiting for the rest of a sequence");
                Ok(Flow::Continue)
            }
            KeyMatch::Unbound => Ok(Flow::Continue),
        }
    }

    /// Route a click through the layout of the last drawn frame.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Result<Flow> {
        match self.layout.hit(x, y) {
            Some(Hit::Row(id)) => {
                if let Some(index) = self.picker.list().regions().position(id) {
                    self.cursor = index;
                }
                self.picker.select_item(id)?;
            }
            Some(Hit::Confirm) => {
                self.picker.confirm()?;
            }
            None => {}
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        debug!("action {action:?}");
        let last = self.picker.list().regions().len().saturating_sub(1);

        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.cursor = (self.cursor + 1).min(last),
            Action::Select => {
                if let Some(region) = self.picker.list().regions().at(self.cursor) {
                    let id = region.id;
                    self.picker.select_item(id)?;
                }
            }
            Action::Confirm => {
                self.picker.confirm()?;
            }
            Action::Quit => return Ok(Flow::Quit),
            Action::Picker(command) => self.picker.handle(command),
        }
        Ok(Flow::Continue)
    }

    pub fn tick(&mut self, dt: Duration) {
        self.picker.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.picker.is_animating()
    }

    pub fn draw(&mut self, buf: &mut Buffer) {
        self.layout = paint_picker(&self.picker, &self.theme, Some(self.cursor), buf);
    }

    /// Draw, wait for input, repeat. Blocks while idle and runs at the frame
    /// budget while animating.
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        let mut last = Instant::now();

        loop {
            terminal.draw(|buf| self.draw(buf))?;

            let animating = self.is_animating();
            let events = terminal.poll(animating.then_some(FRAME))?;

            let now = Instant::now();
            if animating {
                self.tick(now.duration_since(last));
            }
            last = now;

            for event in events.iter().filter_map(InputEvent::from_crossterm) {
                if self.handle_event(event)? == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}

fn bind_keys(keybinds: &KeybindRegistry<Action>) -> Vec<KeybindGuard> {
    let bindings = [
        (KeyCombo::key(Key::Up), Action::MoveUp),
        (KeyCombo::char('k'), Action::MoveUp),
        (KeyCombo::key(Key::Down), Action::MoveDown),
        (KeyCombo::char('j'), Action::MoveDown),
        (KeyCombo::key(Key::Enter), Action::Select),
        (KeyCombo::char(' '), Action::Select),
        (KeyCombo::char('s'), Action::Confirm),
        (KeyCombo::char('q'), Action::Quit),
        (KeyCombo::key(Key::Escape), Action::Quit),
        (KeyCombo::char('c').ctrl(), Action::Quit),
    ];

    bindings
        .into_iter()
        .map(|(combo, action)| keybinds.bind([combo], action))
        .collect()
}

#[cfg(test)]
mod tests {
    use regions::MountBehavior;

    use super::*;

    fn app() -> App {
        let mut settings = Settings::default();
        settings.indicator = settings.indicator.mount(MountBehavior::Snap);
        settings.reduced_motion = true;
        App::new(&settings).unwrap()
    }

    fn press(app: &mut App, combo: KeyCombo) -> Flow {
        app.handle_key(combo).unwrap()
    }

    #[test]
    fn test_starts_on_current_region() {
        let mut settings = Settings::default();
        settings.default_region = Some(5);
        let app = App::new(&settings).unwrap();
        assert_eq!(app.cursor, 4);
        assert_eq!(app.picker().list().state().current_id, 5);
    }

    #[test]
    fn test_unknown_default_region_fails() {
        let mut settings = Settings::default();
        settings.default_region = Some(99);
        assert!(App::new(&settings).is_err());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCombo::key(Key::Up));
        assert_eq!(app.cursor, 0);

        for _ in 0..20 {
            press(&mut app, KeyCombo::char('j'));
        }
        assert_eq!(app.cursor, 10);
    }

    #[test]
    fn test_select_and_confirm_with_keys() {
        let mut app = app();
        press(&mut app, KeyCombo::key(Key::Down));
        press(&mut app, KeyCombo::key(Key::Down));
        press(&mut app, KeyCombo::char(' '));

        assert_eq!(app.picker().list().state().selected_id, 3);
        assert!(app.picker().drawer().is_open());

        press(&mut app, KeyCombo::char('s'));
        assert_eq!(app.picker().list().state().current_id, 3);
        assert!(!app.picker().drawer().is_open());
    }

    #[test]
    fn test_quit_keys() {
        for combo in [
            KeyCombo::char('q'),
            KeyCombo::key(Key::Escape),
            KeyCombo::char('c').ctrl(),
        ] {
            let mut app = app();
            assert_eq!(press(&mut app, combo), Flow::Quit);
        }
    }

    #[test]
    fn test_variant_chord() {
        let mut app = app();
        let before = app.picker().variant();
        assert_eq!(press(&mut app, KeyCombo::char('k').ctrl()), Flow::Continue);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCombo::char('v'));
        assert_eq!(app.picker().variant(), before.toggled());
    }

    #[test]
    fn test_clicks_select_and_confirm() {
        let mut app = app();
        let mut buf = Buffer::new(60, 40);
        app.draw(&mut buf);

        let row = app.layout.row_rect(6).unwrap();
        app.handle_click(row.x + 5, row.y).unwrap();
        assert_eq!(app.picker().list().state().selected_id, 6);
        assert_eq!(app.cursor, 5);

        app.draw(&mut buf);
        let button = app.layout.confirm.unwrap();
        app.handle_click(button.x, button.y).unwrap();
        assert_eq!(app.picker().list().state().current_id, 6);

        // Nothing under the title.
        app.draw(&mut buf);
        assert_eq!(app.handle_click(0, 0).unwrap(), Flow::Continue);
        assert_eq!(app.picker().list().state().selected_id, 6);
    }

    #[test]
    fn test_animation_runs_to_rest() {
        let mut app = App::new(&Settings::default()).unwrap();
        assert!(app.is_animating());
        for _ in 0..500 {
            app.tick(FRAME);
        }
        assert!(!app.is_animating());
    }
}
