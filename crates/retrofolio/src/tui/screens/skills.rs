//! Skills screen - the technology stack grid.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::stagger_reveal;
use folio_common::catalog::SKILL_CATEGORIES;

use super::{push_section, section_title, ACCENT, MUTED, TEXT};
use crate::tui::utils::wrap_text;

pub fn lines(width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    let content_width = (width as usize).saturating_sub(6).max(20);
    let mut out = Vec::new();

    out.push(Line::from(""));
    push_section(
        &mut out,
        stagger_reveal(elapsed, 0),
        section_title("Technology Stack", width),
    );

    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        let mut panel = Vec::new();
        panel.push(Line::from(vec![
            Span::styled(
                format!("  {} ", category.icon.glyph()),
                Style::default().fg(ACCENT),
            ),
            Span::styled(
                category.title,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));

        // Skill chips flow as wrapped text inside the panel.
        let chips: Vec<String> = category
            .skills
            .iter()
            .map(|skill| format!("{} {}", skill.icon.glyph(), skill.name))
            .collect();
        for line in wrap_text(&chips.join("   "), content_width) {
            panel.push(Line::from(Span::styled(
                format!("    {}", line),
                Style::default().fg(MUTED),
            )));
        }
        panel.push(Line::from(""));

        push_section(&mut out, stagger_reveal(elapsed, i + 1), panel);
    }

    out
}
