//! The five content screens.
//!
//! Each screen is a pure function from catalog data, content width, and
//! entrance-animation elapsed time to a list of styled lines. The
//! renderer owns scrolling and the window frame; screens only produce
//! content.

mod about;
mod education;
mod experience;
mod projects;
mod skills;

use std::time::Duration;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use folio_common::anim::Reveal;
use folio_common::catalog::ScreenId;

pub(crate) const ACCENT: Color = Color::Rgb(255, 196, 0);
pub(crate) const HEADING: Color = Color::Rgb(235, 120, 100);
pub(crate) const TEXT: Color = Color::Rgb(220, 220, 210);
pub(crate) const MUTED: Color = Color::Rgb(150, 150, 140);

/// Render the lines for `id` at the given content width.
pub fn screen_lines(id: ScreenId, width: u16, elapsed: Duration) -> Vec<Line<'static>> {
    match id {
        ScreenId::About => about::lines(width, elapsed),
        ScreenId::Experience => experience::lines(width, elapsed),
        ScreenId::Skills => skills::lines(width, elapsed),
        ScreenId::Projects => projects::lines(width, elapsed),
        ScreenId::Education => education::lines(width, elapsed),
    }
}

/// Append a staggered section, dimming it while it enters.
pub(crate) fn push_section(
    out: &mut Vec<Line<'static>>,
    reveal: Reveal,
    lines: Vec<Line<'static>>,
) {
    match reveal {
        Reveal::Hidden => {}
        Reveal::Entering => {
            for line in lines {
                let spans: Vec<Span<'static>> = line
                    .spans
                    .into_iter()
                    .map(|s| Span::styled(s.content, s.style.add_modifier(Modifier::DIM)))
                    .collect();
                out.push(Line::from(spans));
            }
        }
        Reveal::Shown => out.extend(lines),
    }
}

/// One `[tag] [tag]` line for a technology list.
pub(crate) fn tech_tag_line(indent: &str, technologies: &[&'static str]) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    for (i, tech) in technologies.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}]", tech),
            Style::default().fg(ACCENT),
        ));
        if i + 1 < technologies.len() {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

/// The faux file-explorer address bar shown on Projects and Education.
pub(crate) fn address_bar(path: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("◄ ► ⌕  ", Style::default().fg(MUTED)),
            Span::styled(path, Style::default().fg(TEXT)),
        ]),
        Line::from(""),
    ]
}

/// Centered section title with its underline.
pub(crate) fn section_title(title: &'static str, width: u16) -> Vec<Line<'static>> {
    let pad = (width as usize).saturating_sub(title.chars().count()) / 2;
    let underline = "─".repeat(title.chars().count().min(width as usize));
    vec![
        Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(
                title,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(underline, Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
    ]
}
