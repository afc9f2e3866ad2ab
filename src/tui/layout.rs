use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Screen layout: full-screen backdrop with a centered shell overlay
pub struct AppLayout {
    pub backdrop_area: Rect,
    pub overlay_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Backdrop: everything above the status bar
    /// - Overlay: centered in the backdrop, 90% wide (max 100 cols), 80% tall
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Backdrop
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        let backdrop_area = vertical_chunks[0];

        let [overlay_row] = Layout::vertical([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(backdrop_area);
        let width = (backdrop_area.width.saturating_mul(9) / 10).min(100);
        let [overlay_area] =
            Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(overlay_row);

        Self { backdrop_area, overlay_area, status_area: vertical_chunks[1] }
    }
}

/// Inside the overlay border: scrollback above a one-row input line
pub struct ShellLayout {
    pub transcript_area: Rect,
    pub input_area: Rect,
}

impl ShellLayout {
    pub fn new(inner: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Self { transcript_area: chunks[0], input_area: chunks[1] }
    }
}
