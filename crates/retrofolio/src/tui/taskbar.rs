//! Taskbar - start button, screen navigation, contact links, clock.
//!
//! The nav labels render from the screen descriptor table, so taskbar
//! order always matches navigation order. While a transition is in
//! flight the whole nav strip dims; input is ignored upstream by the
//! navigation machine, the dimming just tells the user why.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_common::catalog::SCREENS;

use super::app::App;

const START_BUTTON: &str = " ⚙ Start";
const SEPARATOR: &str = " │ ";
const CONTACT_HINTS: &str = "g:github  n:linkedin  e:email";
const LABEL_GAP: &str = "  ";

/// Which optional taskbar sections fit at the given width.
///
/// The start button and nav labels are always drawn (clipped if the
/// terminal is absurdly narrow); contacts give way first, then the
/// clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarPlan {
    pub show_contacts: bool,
    pub show_clock: bool,
}

fn core_width() -> usize {
    let labels: usize = SCREENS.iter().map(|s| s.label.chars().count()).sum();
    let gaps = LABEL_GAP.len() * (SCREENS.len() - 1);
    START_BUTTON.chars().count() + SEPARATOR.chars().count() + labels + gaps
}

pub fn plan_taskbar(width: u16, clock: &str) -> TaskbarPlan {
    let width = width as usize;
    let core = core_width();
    let clock_len = clock.chars().count();

    // Trailing space keeps the clock off the terminal edge.
    let with_clock = core + 1 + clock_len + 1;
    let with_contacts = core
        + 1
        + CONTACT_HINTS.chars().count()
        + SEPARATOR.chars().count()
        + clock_len
        + 1;

    TaskbarPlan {
        show_contacts: with_contacts <= width,
        show_clock: with_clock <= width,
    }
}

pub fn draw_taskbar(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let plan = plan_taskbar(area.width, &app.clock);
    let transitioning = app.nav.is_transitioning();

    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            START_BUTTON.to_string(),
            Style::default()
                .fg(Color::Rgb(255, 196, 0))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(SEPARATOR),
    ];

    for (i, descriptor) in SCREENS.iter().enumerate() {
        let mut style = if descriptor.id == app.nav.current() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(255, 196, 0))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(200, 200, 200))
        };
        if transitioning {
            style = style.add_modifier(Modifier::DIM);
        }
        spans.push(Span::styled(descriptor.label.to_string(), style));
        if i + 1 < SCREENS.len() {
            spans.push(Span::raw(LABEL_GAP));
        }
    }

    let mut right = String::new();
    if plan.show_contacts {
        right.push_str(CONTACT_HINTS);
    }
    if plan.show_clock {
        if !right.is_empty() {
            right.push_str(SEPARATOR);
        }
        right.push_str(&app.clock);
        right.push(' ');
    }

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize).saturating_sub(used + right.chars().count());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(
        right,
        Style::default().fg(Color::Rgb(160, 160, 160)),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_taskbar_shows_everything() {
        let plan = plan_taskbar(120, "3:07 PM");
        assert!(plan.show_contacts);
        assert!(plan.show_clock);
    }

    #[test]
    fn standard_80_columns_drops_contacts_but_keeps_the_clock() {
        let plan = plan_taskbar(80, "3:07 PM");
        assert!(!plan.show_contacts);
        assert!(plan.show_clock);
    }

    #[test]
    fn narrow_taskbar_drops_clock_too() {
        let plan = plan_taskbar(40, "3:07 PM");
        assert!(!plan.show_contacts);
        assert!(!plan.show_clock);
    }

    #[test]
    fn core_width_covers_all_five_labels() {
        // "About Experience Skills Projects Education" plus chrome.
        assert!(core_width() > 40);
        assert!(core_width() < 70);
    }
}
