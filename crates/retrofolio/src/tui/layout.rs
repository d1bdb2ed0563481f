//! Canonical layout grid.
//!
//! The desktop fills the terminal with a one-line taskbar pinned to the
//! bottom. The window sits centered in the desktop, capped at a maximum
//! width so ultra-wide terminals keep the framed-window look. Degrades
//! gracefully: on tiny terminals the taskbar goes first, then the
//! window border.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum window width in columns.
const MAX_WINDOW_WIDTH: u16 = 100;
const TASKBAR_HEIGHT: u16 = 1;
const TITLE_BAR_HEIGHT: u16 = 1;
/// Minimum terminal height at which the taskbar is still drawn.
const MIN_HEIGHT_FOR_TASKBAR: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioLayout {
    /// Everything above the taskbar.
    pub desktop: Rect,
    /// The window frame inside the desktop.
    pub window: Rect,
    /// Title bar row at the top of the window.
    pub title_bar: Rect,
    /// Content area below the title bar.
    pub content: Rect,
    /// Bottom taskbar (zero height on tiny terminals).
    pub taskbar: Rect,
}

pub fn compute_layout(frame_area: Rect) -> FolioLayout {
    let taskbar_height = if frame_area.height >= MIN_HEIGHT_FOR_TASKBAR {
        TASKBAR_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(taskbar_height)])
        .split(frame_area);
    let desktop = chunks[0];
    let taskbar = chunks[1];

    let window = center_window(desktop);

    let window_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TITLE_BAR_HEIGHT), Constraint::Min(0)])
        .split(window);

    FolioLayout {
        desktop,
        window,
        title_bar: window_chunks[0],
        content: window_chunks[1],
        taskbar,
    }
}

/// Center the window horizontally, capped at [`MAX_WINDOW_WIDTH`].
fn center_window(desktop: Rect) -> Rect {
    let width = desktop.width.min(MAX_WINDOW_WIDTH);
    let x = desktop.x + (desktop.width - width) / 2;
    Rect::new(x, desktop.y, width, desktop.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_80x24() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.taskbar.height, 1);
        assert_eq!(layout.title_bar.height, 1);
        assert_eq!(layout.desktop.height, 23);
        assert_eq!(layout.content.height, 22);

        // Narrow terminal: window spans the full width.
        assert_eq!(layout.window.width, 80);
        assert_eq!(layout.window.x, 0);
    }

    #[test]
    fn wide_terminal_centers_and_caps_the_window() {
        let layout = compute_layout(Rect::new(0, 0, 140, 40));

        assert_eq!(layout.window.width, 100);
        assert_eq!(layout.window.x, 20);
        assert_eq!(layout.title_bar.x, 20);
        assert_eq!(layout.content.width, 100);
    }

    #[test]
    fn tiny_terminal_drops_the_taskbar() {
        let layout = compute_layout(Rect::new(0, 0, 40, 5));

        assert_eq!(layout.taskbar.height, 0);
        assert_eq!(layout.desktop.height, 5);
    }

    #[test]
    fn rows_do_not_overlap() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = compute_layout(area);

        assert_eq!(layout.desktop.height + layout.taskbar.height, area.height);
        assert_eq!(
            layout.title_bar.height + layout.content.height,
            layout.window.height
        );
        assert_eq!(layout.content.y, layout.title_bar.y + 1);
    }
}
