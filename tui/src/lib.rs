//! TUI rendering for Kickoff using ratatui.

mod deck;
mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use kickoff_engine::{App, ClickRegion, NavButtons};

use self::deck::{empty_deck_lines, section_lines};

/// Label of the control that enters or leaves presentation mode.
#[must_use]
pub fn toggle_label(presenting: bool) -> &'static str {
    if presenting {
        "Quitter présentation"
    } else {
        "Mode présentation"
    }
}

/// Slide counter shown in presentation mode.
#[must_use]
pub fn slide_label(index: usize, total: usize) -> String {
    if total == 0 {
        "Slide 0 / 0".to_string()
    } else {
        format!("Slide {} / {total}", index + 1)
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Deck pane
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_deck(frame, app, chunks[1], &palette, &glyphs);
    draw_footer(frame, app, chunks[2], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (mode, mode_style) = if app.presentation_enabled() {
        (" PRÉSENTATION ", styles::mode_presentation(palette))
    } else {
        (" DÉFILEMENT ", styles::mode_scroll(palette))
    };

    let located = if app.presentation_enabled() {
        Some(app.current_slide())
    } else {
        app.visible_section()
    };
    let location = located
        .and_then(|index| app.deck().sections.get(index))
        .map(|section| section.title.as_str())
        .unwrap_or_default();

    let mut spans = vec![
        Span::styled(mode, mode_style),
        Span::raw(" "),
        Span::styled(app.deck().title.clone(), styles::section_title(palette)),
    ];
    if !location.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.bg_border),
        ));
        spans.push(Span::styled(
            location.to_string(),
            Style::default().fg(palette.text_secondary),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel));
    frame.render_widget(header, area);
}

fn draw_deck(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // Keep the pane in step with the layout even before the first resize event.
    app.resize(area.height.saturating_add(kickoff_engine::CHROME_ROWS));

    let viewport = app.viewport();
    let height = viewport.section_height();
    let (first, scroll) = visible_window(viewport.offset(), height);
    let lines: Vec<Line<'static>> = if app.deck().is_empty() {
        empty_deck_lines(area.height, palette)
    } else {
        // The pane spans at most two sections at any offset.
        app.deck()
            .sections
            .iter()
            .skip(first)
            .take(2)
            .flat_map(|section| section_lines(section, area.width, height, palette, glyphs))
            .collect()
    };

    let pane = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(pane, area);
}

/// Splits a deck offset into the first visible section and the line offset
/// inside it.
fn visible_window(offset: u32, section_height: u16) -> (usize, u16) {
    let height = u32::from(section_height.max(1));
    let first = (offset / height) as usize;
    let within = (offset % height) as u16;
    (first, within)
}

fn draw_footer(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::raw(" ")];
    let mut buttons = NavButtons::default();

    if app.presentation_enabled() {
        let index = app.current_slide();
        let total = app.total_slides();
        let counter = slide_label(index, total);
        spans.push(Span::styled(
            counter.clone(),
            styles::section_title(palette),
        ));
        spans.push(Span::raw("  "));

        let mut x = area.x + 1 + counter.width() as u16 + 2;
        let at_first = index == 0;
        let at_last = total == 0 || index + 1 >= total;
        for (glyph, disabled, slot) in [
            (glyphs.arrow_left, at_first, &mut buttons.prev),
            (glyphs.arrow_right, at_last, &mut buttons.next),
        ] {
            let label = format!(" {glyph} ");
            let width = label.width() as u16;
            let style = if disabled {
                styles::button_disabled(palette)
            } else {
                styles::button(palette)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            *slot = Some(ClickRegion {
                x,
                y: area.y,
                width,
                height: 1,
            });
            x = x.saturating_add(width + 1);
        }
        spans.extend(hint("p/Esc", toggle_label(true), palette));
    } else {
        spans.extend(hint("p", toggle_label(false), palette));
        spans.extend(hint(glyphs.arrow_up_down, "défiler", palette));
        spans.extend(hint("1-9", "sections", palette));
        spans.extend(hint("n", "prochaines étapes", palette));
        spans.extend(hint("r", "recharger", palette));
        spans.extend(hint("q", "quitter", palette));
    }

    if let Some(status) = app.status() {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.bg_border),
        ));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(palette.warning),
        ));
    }

    app.set_nav_buttons(buttons);
    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel));
    frame.render_widget(footer, area);
}

fn hint(key: &str, label: &str, palette: &Palette) -> [Span<'static>; 3] {
    [
        Span::styled(key.to_string(), styles::key_highlight(palette)),
        Span::styled(format!(" {label}"), styles::key_hint(palette)),
        Span::raw("  "),
    ]
}
