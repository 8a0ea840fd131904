//! FAQ, references and conclusion.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::RadiationTheme;

use super::render_screen_header;

const FAQ: [(&str, &str); 3] = [
    (
        "What is a millisievert (mSv)?",
        "A unit used to measure radiation dose.",
    ),
    (
        "Is background radiation harmful?",
        "Background radiation is natural and generally considered safe at normal levels.",
    ),
    (
        "What is the LNT model?",
        "It assumes any radiation exposure increases risk.",
    ),
];

const REFERENCES: [&str; 4] = [
    "BEIR VII Report (Biological Effects of Ionizing Radiation).",
    "National Council on Radiation Protection and Measurements (NCRP) Publications.",
    "International Commission on Radiological Protection (ICRP) Reports.",
    "Health Physics Society Fact Sheets.",
];

const CONCLUSION: &str = "Understanding radiation exposure and risk is not simple. Comparing \
    the dose-response models and common exposure sources helps put everyday doses in context \
    and supports informed decisions about radiation safety.";

/// Render the static information screen
pub fn render_about(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // FAQ
            Constraint::Length(7), // References
            Constraint::Length(5), // Conclusion
        ])
        .split(area);

    render_screen_header(f, chunks[0], "Frequently Asked Questions", "Background reading");

    let mut faq_lines = Vec::new();
    for (question, answer) in FAQ {
        faq_lines.push(Line::from(Span::styled(question, RadiationTheme::focused())));
        faq_lines.push(Line::from(Span::styled(format!("  {answer}"), RadiationTheme::text())));
    }
    render_section(f, chunks[1], " FAQ ", faq_lines);

    let reference_lines = REFERENCES
        .iter()
        .map(|r| Line::from(Span::styled(format!("• {r}"), RadiationTheme::text_secondary())))
        .collect();
    render_section(f, chunks[2], " References ", reference_lines);

    render_section(
        f,
        chunks[3],
        " Conclusion ",
        vec![Line::from(Span::styled(CONCLUSION, RadiationTheme::text()))],
    );
}

fn render_section(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(title.to_string(), RadiationTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(RadiationTheme::border()),
    );

    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_sections() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("Should create terminal");

        terminal
            .draw(|f| {
                let area = f.area();
                render_about(f, area)
            })
            .expect("Should draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("What is a millisievert (mSv)?"));
        assert!(text.contains("BEIR VII Report"));
        assert!(text.contains("Conclusion"));
    }
}
