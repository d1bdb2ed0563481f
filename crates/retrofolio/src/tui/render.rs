//! Drawing - boot splash, window chrome, content, and overlays.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_common::boot::SPLASH_TEXT;
use folio_common::catalog;

use super::app::App;
use super::layout::{compute_layout, FolioLayout};
use super::screens;
use super::taskbar;
use super::utils::draw_help_overlay;

const TITLE_BAR_BG: Color = Color::Rgb(70, 45, 60);
const AMBER: Color = Color::Rgb(255, 176, 0);

pub fn draw_ui(f: &mut Frame, app: &App, now: Instant) {
    let size = f.size();

    if !app.booted {
        draw_boot_splash(f, size);
        return;
    }

    let layout = compute_layout(size);

    draw_window(f, &layout, app, now);
    taskbar::draw_taskbar(f, layout.taskbar, app);
    draw_toasts(f, layout.desktop, app);

    if app.show_help {
        draw_help_overlay(f, size);
    }
}

fn draw_boot_splash(f: &mut Frame, area: Rect) {
    let y = area.y + area.height / 2;
    let x = area
        .x
        .saturating_add(area.width.saturating_sub(SPLASH_TEXT.len() as u16) / 2);
    let line = Rect::new(x, y, SPLASH_TEXT.len() as u16, 1).intersection(area);

    let splash = Paragraph::new(Span::styled(SPLASH_TEXT, Style::default().fg(AMBER)));
    f.render_widget(splash, line);
}

fn draw_window(f: &mut Frame, layout: &FolioLayout, app: &App, now: Instant) {
    draw_title_bar(f, layout.title_bar, app);

    // Content, framed on the remaining three sides.
    let content_width = layout.content.width.saturating_sub(2);
    let lines = screens::screen_lines(app.nav.current(), content_width, app.anim_elapsed(now));

    let visible = layout.content.height.saturating_sub(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible) as u16;
    let scroll = app.scroll.min(max_scroll);

    let mut style = Style::default();
    if app.nav.is_transitioning() {
        // Stand-in for the exit/enter fade: the pane dims while the
        // transition is in flight.
        style = style.add_modifier(Modifier::DIM);
    }

    let content = Paragraph::new(lines)
        .style(style)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(110, 90, 100))),
        );
    f.render_widget(content, layout.content);
}

fn draw_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let flickering = app.chrome.is_flickering();

    // The icon blinks out entirely during the flicker.
    let icon = if flickering {
        String::from("  ")
    } else {
        catalog::descriptor(app.nav.current())
            .map(|d| d.icon.glyph().to_string())
            .unwrap_or_default()
    };

    let mut title_style = Style::default()
        .fg(Color::Rgb(240, 235, 225))
        .add_modifier(Modifier::BOLD);
    if flickering {
        title_style = title_style.add_modifier(Modifier::DIM);
    }

    let left = format!(" {} {}", icon, app.chrome.title());
    let controls = "● ● ";
    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + controls.chars().count());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, title_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(controls, Style::default().fg(AMBER)),
    ]))
    .style(Style::default().bg(TITLE_BAR_BG));
    f.render_widget(bar, area);
}

fn draw_toasts(f: &mut Frame, desktop: Rect, app: &App) {
    for (i, toast) in app.toasts.active().iter().rev().enumerate() {
        let Some(bottom) = desktop.bottom().checked_sub(2 + i as u16) else {
            break;
        };
        if bottom < desktop.y {
            break;
        }

        let text = format!(" {} ", toast.message);
        let width = (text.chars().count() as u16).min(desktop.width);
        let x = desktop.right().saturating_sub(width + 1).max(desktop.x);
        let rect = Rect::new(x, bottom, width, 1).intersection(desktop);

        let widget = Paragraph::new(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(AMBER),
        ));
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
