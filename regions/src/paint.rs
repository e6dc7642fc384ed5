//! Draws a [`RegionPicker`] into a [`Buffer`].

use crate::buffer::{str_width, Buffer};
use crate::color::Rgb;
use crate::indicator::{
    stroke_opacity, IndicatorOptions, IndicatorStyle, ToggleIndicator, Variant,
    CHECKMARK_PATH_LENGTH,
};
use crate::picker::RegionPicker;
use crate::rect::Rect;
use crate::theme::Theme;

pub const TITLE: &str = "TV2 Regioner";
pub const INTRO: &str = "Foretager du en ændring af valg af region skal du blot trykke på knappen \"Gem ændring\" og din ændring vil træde i kraft";
pub const CONFIRM_LABEL: &str = "GEM ÆNDRING";

/// Unselected rows are drawn at 65% opacity.
const DIMMED_ROW: f32 = 0.35;
const CURSOR_HIGHLIGHT: f32 = 0.08;

pub fn drawer_message(current_label: &str) -> String {
    format!("Ændring vil skifte væk fra {current_label} som din aktive TV2 Region")
}

/// Something clickable under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Row(u32),
    Confirm,
}

/// Where the last paint put the interactive parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerLayout {
    pub rows: Vec<(u32, Rect)>,
    pub drawer: Option<Rect>,
    pub confirm: Option<Rect>,
}

impl PickerLayout {
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        if self.confirm.is_some_and(|rect| rect.contains(x, y)) {
            return Some(Hit::Confirm);
        }
        // The drawer covers whatever rows lie underneath it.
        if self.drawer.is_some_and(|rect| rect.contains(x, y)) {
            return None;
        }
        self.rows
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| Hit::Row(*id))
    }

    pub fn row_rect(&self, id: u32) -> Option<Rect> {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, rect)| *rect)
    }
}

/// Paint the whole picker. `cursor` is the keyboard-focused row index.
pub fn paint_picker(
    picker: &RegionPicker,
    theme: &Theme,
    cursor: Option<usize>,
    buf: &mut Buffer,
) -> PickerLayout {
    buf.clear(theme.background);
    let width = buf.width();

    let mut y = 1;
    put_centered(buf, y, TITLE, theme.text_bright, true);
    y += 2;

    let intro_fg = theme.text_bright.mix(theme.background, 0.25);
    for line in wrap(INTRO, width.saturating_sub(4)) {
        put_centered(buf, y, &line, intro_fg, false);
        y += 1;
    }
    y += 1;

    let options = picker.options();
    let indicator_width = options.cell_width();
    let mut rows = Vec::with_capacity(picker.indicators().len());

    for (index, (row, indicator)) in picker
        .list()
        .rows()
        .zip(picker.indicators())
        .enumerate()
    {
        if y >= buf.height() {
            break;
        }

        let rect = Rect::new(0, y, width, 1);
        let row_bg = if cursor == Some(index) {
            theme.background.mix(theme.text_bright, CURSOR_HIGHLIGHT)
        } else {
            theme.background
        };
        buf.fill(rect, row_bg);

        if row.current {
            buf.put_str(1, y, "▌", theme.color_primary, false, width);
        }

        let fg = if row.checked {
            theme.text_bright
        } else {
            theme.text_bright.mix(row_bg, DIMMED_ROW)
        };
        let label_end = width.saturating_sub(indicator_width + 3);
        buf.put_str(3, y, &row.region.label, fg, row.checked, label_end);

        let indicator_x = width.saturating_sub(indicator_width + 2);
        paint_indicator(buf, indicator_x, y, indicator, options, theme, row_bg);

        rows.push((row.region.id, rect));
        y += 1;
    }

    let (drawer, confirm) = paint_drawer(picker, theme, buf);
    PickerLayout {
        rows,
        drawer,
        confirm,
    }
}

/// Paint one indicator at (x, y) over `bg`.
pub fn paint_indicator(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    indicator: &ToggleIndicator,
    options: &IndicatorOptions,
    theme: &Theme,
    bg: Rgb,
) {
    let frame = indicator.frame();
    let base = theme.resolve(&options.colors.base);
    let contrast = theme.resolve(options.colors.contrast());

    let (open, close, mark, strength) = match indicator.variant() {
        Variant::RadioButton => ('(', ')', radio_mark(frame.scale), frame.opacity.clamp(0.0, 1.0)),
        Variant::Checkbox => ('[', ']', check_mark(frame.path_length), frame.stroke_opacity),
    };

    if options.cell_width() == 1 {
        let glyph = match (indicator.variant(), mark == ' ') {
            (Variant::RadioButton, true) => '○',
            (Variant::RadioButton, false) => '◉',
            (Variant::Checkbox, true) => '☐',
            (Variant::Checkbox, false) => '☑',
        };
        set_cell(buf, x, y, glyph, base.mix(contrast, strength), bg, false);
        return;
    }

    let (cell_bg, mark_fg) = match options.style {
        IndicatorStyle::Outlined => (bg, contrast.over(bg, strength)),
        IndicatorStyle::Filled => {
            let fill = base.over(bg, strength);
            (fill, theme.text_bright.over(fill, strength))
        }
    };

    set_cell(buf, x, y, open, base, cell_bg, true);
    set_cell(buf, x + 1, y, mark, mark_fg, cell_bg, true);
    set_cell(buf, x + 2, y, close, base, cell_bg, true);
}

/// Inner disc glyph for a given scale.
fn radio_mark(scale: f32) -> char {
    match scale {
        s if s < 0.2 => ' ',
        s if s < 0.5 => '·',
        s if s < 0.85 => '•',
        _ => '●',
    }
}

/// Checkmark glyph for a given drawn path length.
fn check_mark(path_length: f32) -> char {
    if stroke_opacity(path_length) <= 0.0 {
        ' '
    } else if path_length / CHECKMARK_PATH_LENGTH < 0.55 {
        '╲'
    } else {
        '✓'
    }
}

fn paint_drawer(picker: &RegionPicker, theme: &Theme, buf: &mut Buffer) -> (Option<Rect>, Option<Rect>) {
    let visible = picker.drawer().visible_rows().min(buf.height());
    if visible == 0 {
        return (None, None);
    }

    let width = buf.width();
    let top = buf.height() - visible;
    let panel = Rect::new(0, top, width, visible);
    buf.fill(panel, theme.background_darker);

    // Rounded top edge.
    if width >= 2 {
        let edge = theme.background_darker.mix(theme.text_bright, 0.2);
        let line = format!("╭{}╮", "─".repeat(width as usize - 2));
        buf.put_str(0, top, &line, edge, false, width);
    }

    let message = drawer_message(&picker.list().state().current_label);
    let text_fg = theme.text_bright.mix(theme.background_darker, 0.2);
    for (offset, line) in wrap(&message, width.saturating_sub(4)).iter().take(2).enumerate() {
        let y = top + 2 + offset as u16;
        if y < buf.height() {
            put_centered(buf, y, line, text_fg, false);
        }
    }

    let button_y = top + 5;
    if button_y >= buf.height() {
        return (Some(panel), None);
    }
    let label = format!(" {CONFIRM_LABEL} ");
    let button_width = str_width(&label).min(width);
    let button_x = (width - button_width) / 2;
    let button = Rect::new(button_x, button_y, button_width, 1);
    buf.fill(button, theme.color_primary);
    buf.put_str(button_x, button_y, &label, theme.text_bright, true, button.right());

    (Some(panel), Some(button))
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb, bg: Rgb, bold: bool) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.bg = bg;
        cell.bold = bold;
        cell.wide_continuation = false;
    }
}

fn put_centered(buf: &mut Buffer, y: u16, text: &str, fg: Rgb, bold: bool) {
    let width = buf.width();
    let x = width.saturating_sub(str_width(text)) / 2;
    buf.put_str(x, y, text, fg, bold, width);
}

/// Greedy word wrap to `width` columns. Words longer than a line are
/// left to be clipped by the writer.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if str_width(&line) + 1 + str_width(word) <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
