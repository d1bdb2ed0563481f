//! Education screen - academic history and industry certifications.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::stagger_reveal;
use folio_common::catalog::{CERTIFICATIONS, EDUCATION};

use super::{address_bar, push_section, ACCENT, HEADING, MUTED, TEXT};
use crate::tui::utils::wrap_text;

pub fn lines(width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    let content_width = (width as usize).saturating_sub(6).max(20);
    let mut out = Vec::new();

    out.push(Line::from(""));
    push_section(
        &mut out,
        stagger_reveal(elapsed, 0),
        address_bar(r"C:\Users\DevOps\Credentials\Education"),
    );

    // Academic history.
    let mut academic = vec![
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(HEADING)),
            Span::styled(
                "Academic History",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for entry in &EDUCATION {
        academic.push(Line::from(vec![
            Span::styled(
                format!("  {}", entry.institution),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}] {}", entry.period, entry.location),
                Style::default().fg(MUTED),
            ),
        ]));
        academic.push(Line::from(Span::styled(
            format!("  {}", entry.degree),
            Style::default().fg(HEADING),
        )));
        for line in wrap_text(entry.description, content_width) {
            academic.push(Line::from(Span::styled(
                format!("  {}", line),
                Style::default().fg(MUTED),
            )));
        }
        academic.push(Line::from(""));
    }
    push_section(&mut out, stagger_reveal(elapsed, 1), academic);

    // Certification grid.
    let mut certs = vec![
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(HEADING)),
            Span::styled(
                "Industry Certifications",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for cert in &CERTIFICATIONS {
        certs.push(Line::from(vec![
            Span::styled(format!("  {} ", cert.icon.glyph()), Style::default().fg(ACCENT)),
            Span::styled(
                cert.name,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {} · {}", cert.level, cert.issuer),
                Style::default().fg(MUTED),
            ),
        ]));
    }
    certs.push(Line::from(""));
    push_section(&mut out, stagger_reveal(elapsed, 2), certs);

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
    fn settled_screen_shows_degrees_and_certifications() {
        let text = rendered(Duration::from_secs(5));
        assert!(text.contains("Polytechnic Institute of Technology"));
        assert!(text.contains("Master of Science in Cloud Computing"));
        assert!(text.contains("State University"));
        assert!(text.contains("AWS Solutions Architect"));
        assert!(text.contains("CompTIA Security+"));
    }

    #[test]
    fn certifications_arrive_after_academic_history() {
        // Child 1 starts at 200ms, child 2 at 300ms.
        let text = rendered(Duration::from_millis(280));
        assert!(text.contains("Academic History"));
        assert!(!text.contains("Industry Certifications"));
    }
}
