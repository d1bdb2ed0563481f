//! About screen - role badge, headline, bio, and the projects CTA.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::stagger_reveal;
use folio_common::catalog::PERSONAL;

use super::{push_section, ACCENT, HEADING, MUTED, TEXT};
use crate::tui::utils::wrap_text;

pub fn lines(width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    let content_width = (width as usize).saturating_sub(4).max(20);
    let mut out = Vec::new();

    out.push(Line::from(""));

    // Role badge.
    push_section(
        &mut out,
        stagger_reveal(elapsed, 0),
        vec![
            Line::from(Span::styled(
                format!("  ⚙ {}", PERSONAL.title.to_uppercase()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ],
    );

    // Two-line headline.
    push_section(
        &mut out,
        stagger_reveal(elapsed, 1),
        vec![Line::from(Span::styled(
            format!("  {}", PERSONAL.headline_line1),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))],
    );
    push_section(
        &mut out,
        stagger_reveal(elapsed, 2),
        vec![
            Line::from(Span::styled(
                format!("  {}", PERSONAL.headline_line2),
                Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ],
    );

    // Bio.
    let mut bio = Vec::new();
    for line in wrap_text(PERSONAL.bio, content_width.saturating_sub(2)) {
        bio.push(Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(MUTED),
        )));
    }
    bio.push(Line::from(""));
    push_section(&mut out, stagger_reveal(elapsed, 3), bio);

    // CTA - the only screen that issues a navigation command.
    push_section(
        &mut out,
        stagger_reveal(elapsed, 4),
        vec![
            Line::from(Span::styled(
                "  [Enter] View Projects →",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ],
    );

    // Faux terminal overlay, the retro portrait stand-in.
    push_section(
        &mut out,
        stagger_reveal(elapsed, 5),
        vec![
            Line::from(Span::styled(
                "  ┌────────────────────────────┐",
                Style::default().fg(MUTED),
            )),
            terminal_line("ssh root@server"),
            terminal_line("docker-compose up -d"),
            terminal_line("System status: ONLINE"),
            Line::from(Span::styled(
                "  └────────────────────────────┘",
                Style::default().fg(MUTED),
            )),
        ],
    );

    out
}

fn terminal_line(command: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  │ ", Style::default().fg(MUTED)),
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(command, Style::default().fg(TEXT)),
    ])
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
    fn settled_screen_shows_headline_bio_and_cta() {
        let text = rendered(Duration::from_secs(5));
        assert!(text.contains("DEVOPS ENGINEER"));
        assert!(text.contains("Architecting"));
        assert!(text.contains("Resilient Systems"));
        assert!(text.contains("View Projects"));
        assert!(text.contains("System status: ONLINE"));
    }

    #[test]
    fn cta_appears_after_the_headline_in_the_stagger() {
        // Child 4 starts at 100 + 4*100 = 500ms.
        let text = rendered(Duration::from_millis(450));
        assert!(text.contains("Architecting"));
        assert!(!text.contains("View Projects"));
    }
}
