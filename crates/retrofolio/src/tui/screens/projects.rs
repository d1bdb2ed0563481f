//! Projects screen - the file-explorer grid of project cards.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::{stagger_reveal, Reveal, ROW, STAGGER_CONTAINER};
use folio_common::catalog::{ProjectEntry, PROJECTS};

use super::{address_bar, push_section, tech_tag_line, ACCENT, MUTED, TEXT};
use crate::tui::utils::wrap_text;

/// Projects per display row, as in the explorer grid.
const ROW_SIZE: usize = 3;

pub fn lines(width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    let content_width = (width as usize).saturating_sub(6).max(20);
    let mut out = Vec::new();

    out.push(Line::from(""));
    push_section(
        &mut out,
        stagger_reveal(elapsed, 0),
        address_bar(r"C:\Users\DevOps\Documents\Projects"),
    );

    for (row_index, row) in PROJECTS.chunks(ROW_SIZE).enumerate() {
        let reveal = row_reveal(elapsed, row_index);
        let mut block = Vec::new();
        for project in row {
            card(&mut block, project, content_width);
        }
        push_section(&mut out, reveal, block);
    }

    out
}

/// Rows reveal as units: each row occupies one child slot in the
/// stagger container and fades on the ROW variant's clock.
fn row_reveal(elapsed: Duration, row_index: usize) -> Reveal {
    let start = STAGGER_CONTAINER.delay + STAGGER_CONTAINER.stagger * (row_index as u32 + 1);
    if elapsed <= start {
        return Reveal::Hidden;
    }
    if ROW.progress(elapsed - start, 0) >= 1.0 {
        Reveal::Shown
    } else {
        Reveal::Entering
    }
}

fn card(out: &mut Vec<Line<'static>>, project: &ProjectEntry, content_width: usize) {
    out.push(Line::from(vec![
        Span::styled("  ▔ ", Style::default().fg(MUTED)),
        Span::styled(project.filename, Style::default().fg(MUTED)),
    ]));
    out.push(Line::from(Span::styled(
        format!("  {}", project.title),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )));
    for line in wrap_text(project.description, content_width) {
        out.push(Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(MUTED),
        )));
    }
    out.push(tech_tag_line("  ", project.technologies));
    out.push(Line::from(Span::styled(
        format!("  {} {}", project.cta.icon.glyph(), project.cta.text),
        Style::default().fg(ACCENT),
    )));
    out.push(Line::from(""));
}
