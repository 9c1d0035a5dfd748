//! Deck pane rendering: every section becomes exactly one pane of lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use kickoff_types::{Card, Section, TeamMember};

use crate::theme::{Glyphs, Palette, styles};

const LEFT_PAD: &str = "  ";
const CARD_INDENT: &str = "    ";

/// Renders `section` into exactly `height` lines of at most `width` columns.
pub(crate) fn section_lines(
    section: &Section,
    width: u16,
    height: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let text_width = width.saturating_sub(LEFT_PAD.width());
    let mut lines = vec![Line::default()];

    if !section.eyebrow.is_empty() {
        lines.push(padded(
            section.eyebrow.to_uppercase(),
            styles::eyebrow(palette),
        ));
    }
    for chunk in wrap(&section.title, text_width) {
        lines.push(padded(chunk, styles::section_title(palette)));
    }
    let rule_len = section.title.width().min(text_width);
    lines.push(padded(glyphs.rule.repeat(rule_len), Style::default().fg(palette.bg_border)));
    if let Some(subtitle) = &section.subtitle {
        for chunk in wrap(subtitle, text_width) {
            lines.push(padded(chunk, Style::default().fg(palette.text_muted)));
        }
    }

    for card in &section.cards {
        lines.push(Line::default());
        push_card(&mut lines, card, text_width, palette, glyphs);
    }
    for member in &section.team {
        lines.push(Line::default());
        push_member(&mut lines, member, text_width, palette, glyphs);
    }

    fit_height(lines, usize::from(height), glyphs, palette)
}

/// Placeholder pane shown for an empty deck.
pub(crate) fn empty_deck_lines(height: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.push(padded(
        "Aucune section à afficher.".to_string(),
        Style::default().fg(palette.text_muted),
    ));
    lines.truncate(usize::from(height));
    lines
}

fn push_card(
    lines: &mut Vec<Line<'static>>,
    card: &Card,
    text_width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    lines.push(Line::from(vec![
        Span::raw(LEFT_PAD),
        Span::styled(format!("{} ", glyphs.card), Style::default().fg(palette.accent)),
        Span::styled(card.title.clone(), styles::card_title(palette)),
    ]));
    for chunk in wrap(&card.text, text_width.saturating_sub(2)) {
        lines.push(Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled(chunk, styles::body(palette)),
        ]));
    }
}

fn push_member(
    lines: &mut Vec<Line<'static>>,
    member: &TeamMember,
    text_width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    lines.push(Line::from(vec![
        Span::raw(LEFT_PAD),
        Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.accent)),
        Span::styled(member.name.clone(), styles::card_title(palette)),
    ]));
    for chunk in wrap(&member.role, text_width.saturating_sub(2)) {
        lines.push(Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled(chunk, styles::body(palette)),
        ]));
    }
    if !member.tags.is_empty() {
        let tags = member.tags.join(glyphs.tag_separator);
        for chunk in wrap(&tags, text_width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::styled(chunk, Style::default().fg(palette.warning)),
            ]));
        }
    }
    for collaborator in &member.collaborators {
        let entry = format!("{} ({})", collaborator.name, collaborator.role);
        for chunk in wrap(&entry, text_width.saturating_sub(4)) {
            lines.push(Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::raw("  "),
                Span::styled(chunk, Style::default().fg(palette.text_muted)),
            ]));
        }
    }
}

fn padded(text: String, style: Style) -> Line<'static> {
    Line::from(vec![Span::raw(LEFT_PAD), Span::styled(text, style)])
}

/// Pads with blank lines or cuts to `height`, marking the cut.
fn fit_height(
    mut lines: Vec<Line<'static>>,
    height: usize,
    glyphs: &Glyphs,
    palette: &Palette,
) -> Vec<Line<'static>> {
    if lines.len() > height {
        lines.truncate(height);
        if let Some(last) = lines.last_mut() {
            *last = padded(glyphs.ellipsis.to_string(), Style::default().fg(palette.text_muted));
        }
    }
    lines.resize_with(height, Line::default);
    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
