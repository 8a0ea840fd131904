//! UI module: View components for the TUI.

pub mod about;
pub mod calculator;
pub mod exposure;
pub mod models;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::tui::app::Screen;
use crate::tui::styles::RadiationTheme;

/// Title bar with the screen tabs.
pub fn render_navigation(f: &mut Frame, area: Rect, current: Screen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Radscope", RadiationTheme::title()),
        Span::styled(" │ ", RadiationTheme::text_muted()),
        Span::styled("Radiation Exposure and Risk", RadiationTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(RadiationTheme::border()),
    );
    f.render_widget(title, chunks[0]);

    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("{} {}", i + 1, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(RadiationTheme::text_secondary())
        .highlight_style(RadiationTheme::selected())
        .divider(Span::styled("│", RadiationTheme::text_muted()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(RadiationTheme::border()),
        );
    f.render_widget(tabs, chunks[1]);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "Doses are typical published values for comparison only and are not a substitute for professional advice.",
            RadiationTheme::text_muted(),
        )]),
        Line::from(vec![
            Span::styled("[Tab] ", RadiationTheme::key_hint()),
            Span::styled("Next screen ", RadiationTheme::key_desc()),
            Span::styled("[1-4] ", RadiationTheme::key_hint()),
            Span::styled("Jump ", RadiationTheme::key_desc()),
            Span::styled("[Q] ", RadiationTheme::key_hint()),
            Span::styled("Quit", RadiationTheme::key_desc()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(RadiationTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Screen header line, shared by every view.
pub(crate) fn render_screen_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", RadiationTheme::text()),
        Span::styled(title.to_string(), RadiationTheme::title()),
        Span::styled(format!(" │ {subtitle}"), RadiationTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(RadiationTheme::border()),
    );

    f.render_widget(header, area);
}

/// Concatenate every cell symbol of a rendered buffer.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}
