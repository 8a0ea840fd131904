//! Reference dose view: Bar chart of common exposure sources.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{max_reference_dose, ExposureRecord};
use crate::tui::styles::RadiationTheme;

use super::render_screen_header;

/// Bars are drawn in microsieverts so sub-mSv sources keep an integer height.
const USV_PER_MSV: f64 = 1000.0;

/// Reference chart state, filled once at startup.
pub struct ExposureState {
    pub records: &'static [ExposureRecord],
}

impl ExposureState {
    #[must_use]
    pub fn new(records: &'static [ExposureRecord]) -> Self {
        Self { records }
    }
}

/// Render the reference dose comparison
pub fn render_exposure(f: &mut Frame, area: Rect, state: &ExposureState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
        ])
        .split(area);

    render_screen_header(
        f,
        chunks[0],
        "Radiation Exposure from Common Sources",
        "Dose (mSv)",
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .margin(1)
        .split(chunks[1]);

    render_dose_chart(f, columns[0], state);
    render_dose_list(f, columns[1], state);
}

fn render_dose_chart(f: &mut Frame, area: Rect, state: &ExposureState) {
    let bars: Vec<Bar> = state
        .records
        .iter()
        .map(|record| {
            Bar::default()
                .value((record.dose_msv * USV_PER_MSV).round() as u64)
                .text_value(format!("{}", record.dose_msv))
                .label(Line::from(record.name))
                .style(RadiationTheme::bar())
                .value_style(RadiationTheme::text())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Radiation Dose Comparison (mSv) ",
                    RadiationTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(RadiationTheme::border()),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .label_style(RadiationTheme::text_secondary())
        .max((max_reference_dose() * USV_PER_MSV).round() as u64)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn render_dose_list(f: &mut Frame, area: Rect, state: &ExposureState) {
    let mut lines: Vec<Line> = state
        .records
        .iter()
        .map(|record| {
            Line::from(vec![
                Span::styled(format!("{:>8} ", record.dose_msv), RadiationTheme::dose(record.dose_msv)),
                Span::styled(record.name, RadiationTheme::text()),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "The chart compares radiation doses from common sources, giving a sense of relative exposure levels.",
        RadiationTheme::text_muted(),
    )));

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Sources (mSv) ", RadiationTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(RadiationTheme::border()),
        );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::all_records;
    use crate::tui::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_lists_every_source() {
        let state = ExposureState::new(all_records());
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("Should create terminal");

        terminal
            .draw(|f| {
                let area = f.area();
                render_exposure(f, area, &state)
            })
            .expect("Should draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Radiation Exposure from Common Sources"));
        assert!(text.contains("Dental X-ray"));
        assert!(text.contains("Smoking (1 pack/day, Annual)"));
    }
}
