//! Stateless UI rendering for the Pig table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_pig::{DieFace, Seat};

use super::app::{PanelView, TableView};

/// Draws the whole table, with the win overlay on top when open.
pub fn draw(frame: &mut Frame, view: &TableView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Table
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Pig - first to 100")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let table = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(chunks[1]);

    draw_panel(frame, table[0], view.panel(Seat::First));
    draw_dice(frame, table[1], view.dice());
    draw_panel(frame, table[2], view.panel(Seat::Second));

    let status = Paragraph::new(view.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = if view.input_enabled() {
        "R/Space: Roll | H/Enter: Hold | N: New game | Q: Quit"
    } else {
        "N: New game | Esc: Close | Q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(winner) = view.overlay() {
        draw_overlay(frame, area, winner);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &PanelView) {
    let border = if panel.winner {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if panel.active {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("SCORE", label)),
        Line::from(Span::styled(panel.score.to_string(), value.fg(Color::Magenta))),
        Line::from(""),
        Line::from(Span::styled("CURRENT", label)),
        Line::from(Span::styled(panel.current.to_string(), value)),
    ];

    let mut title = panel.name.clone();
    if panel.winner {
        title.push_str(" - WINNER");
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, border)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_dice(frame: &mut Frame, area: Rect, face: Option<DieFace>) {
    let lines: Vec<Line> = match face {
        Some(face) => dice_art(face)
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::White))))
            .collect(),
        None => Vec::new(),
    };

    let block = Block::default().borders(Borders::ALL).title("Dice");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center_rect(inner, 11, 5),
    );
}

/// Five rows of pips for a face.
pub fn dice_art(face: DieFace) -> [&'static str; 5] {
    match face {
        DieFace::One => ["┌───────┐", "│       │", "│   ●   │", "│       │", "└───────┘"],
        DieFace::Two => ["┌───────┐", "│ ●     │", "│       │", "│     ● │", "└───────┘"],
        DieFace::Three => ["┌───────┐", "│ ●     │", "│   ●   │", "│     ● │", "└───────┘"],
        DieFace::Four => ["┌───────┐", "│ ●   ● │", "│       │", "│ ●   ● │", "└───────┘"],
        DieFace::Five => ["┌───────┐", "│ ●   ● │", "│   ●   │", "│ ●   ● │", "└───────┘"],
        DieFace::Six => ["┌───────┐", "│ ●   ● │", "│ ●   ● │", "│ ●   ● │", "└───────┘"],
    }
}

/// Where the win overlay sits on a screen of the given size.
pub fn overlay_area(screen: Rect) -> Rect {
    center_rect(screen, 40, 7)
}

/// The `[x]` close marker on the overlay's top border.
pub fn close_marker_area(screen: Rect) -> Rect {
    let popup = overlay_area(screen);
    let width = CLOSE_MARKER.len() as u16;
    Rect {
        x: (popup.x + popup.width).saturating_sub(width + 1).max(popup.x),
        y: popup.y,
        width: width.min(popup.width),
        height: popup.height.min(1),
    }
}

const CLOSE_MARKER: &str = "[x]";

fn draw_overlay(frame: &mut Frame, area: Rect, winner: &str) {
    let popup = overlay_area(area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Wins!", winner),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc, [x] or click outside to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        popup,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_MARKER,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        close_marker_area(area),
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
