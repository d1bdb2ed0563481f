//! Experience screen - the work history timeline.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::{stagger_reveal, DOT, TIMELINE};
use folio_common::catalog::EXPERIENCES;

use super::{push_section, section_title, tech_tag_line, ACCENT, HEADING, MUTED, TEXT};
use crate::tui::utils::wrap_text;

pub fn lines(width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    let content_width = (width as usize).saturating_sub(8).max(20);
    let mut out = Vec::new();

    out.push(Line::from(""));
    push_section(
        &mut out,
        stagger_reveal(elapsed, 0),
        section_title("Work Experience", width),
    );

    // The vertical rule grows in on its own clock; until then the cards
    // float without it.
    let rule = if TIMELINE.started(elapsed, 0) { "│" } else { " " };

    for (i, exp) in EXPERIENCES.iter().enumerate() {
        let dot = if DOT.settled(elapsed, i) { "●" } else { "○" };

        let mut card = Vec::new();
        card.push(Line::from(vec![
            Span::styled(format!("  {} ", dot), Style::default().fg(ACCENT)),
            Span::styled(
                exp.title,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", exp.period),
                Style::default().fg(MUTED),
            ),
        ]));
        card.push(Line::from(vec![
            Span::styled(format!("  {}   ", rule), Style::default().fg(MUTED)),
            Span::styled("⌂ ", Style::default().fg(HEADING)),
            Span::styled(
                exp.company,
                Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", exp.location), Style::default().fg(MUTED)),
        ]));
        for achievement in exp.achievements {
            let wrapped = wrap_text(achievement, content_width);
            for (j, line) in wrapped.into_iter().enumerate() {
                let bullet = if j == 0 { "• " } else { "  " };
                card.push(Line::from(vec![
                    Span::styled(format!("  {}   ", rule), Style::default().fg(MUTED)),
                    Span::styled(bullet, Style::default().fg(ACCENT)),
                    Span::styled(line, Style::default().fg(TEXT)),
                ]));
            }
        }
        let mut tags = tech_tag_line("", exp.technologies);
        let mut spans = vec![Span::styled(
            format!("  {}   ", rule),
            Style::default().fg(MUTED),
        )];
        spans.append(&mut tags.spans);
        card.push(Line::from(spans));
        card.push(Line::from(""));

        push_section(&mut out, stagger_reveal(elapsed, i + 1), card);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(elapsed: Duration) -> String {
        lines(80, elapsed)
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn settled_screen_lists_all_three_companies() {
        let text = rendered(Duration::from_secs(5));
        assert!(text.contains("TECHFLOW SYSTEMS"));
        assert!(text.contains("NEBULON DATA"));
        assert!(text.contains("CORESERVE SOLUTIONS"));
        assert!(text.contains("2021 - Present"));
        assert!(text.contains("[Kubernetes]"));
    }

    #[test]
    fn cards_appear_in_declaration_order() {
        // Child 1 (first card) starts at 200ms, child 3 at 400ms.
        let text = rendered(Duration::from_millis(350));
        assert!(text.contains("TECHFLOW SYSTEMS"));
        assert!(!text.contains("CORESERVE SOLUTIONS"));
    }
}
