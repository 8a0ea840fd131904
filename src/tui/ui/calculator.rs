//! Personal radiation exposure calculator.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::ActivityDose;
use crate::domain::{find_record, ActivityKind, TotalDose};
use crate::tui::styles::RadiationTheme;

use super::render_screen_header;

const BACKGROUND_SOURCE: &str = "Background Radiation (Annual Avg)";

/// Bounded integer slider for one activity.
#[derive(Debug, Clone)]
pub struct Slider {
    pub kind: ActivityKind,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl Slider {
    #[must_use]
    pub fn new(kind: ActivityKind, value: i64, min: i64, max: i64) -> Self {
        Self {
            kind,
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// Step the slider, staying within bounds. Returns whether the value changed.
    pub fn step(&mut self, delta: i64) -> bool {
        let next = self.value.saturating_add(delta).clamp(self.min, self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    pub fn jump_to_min(&mut self) -> bool {
        self.step(i64::MIN)
    }

    pub fn jump_to_max(&mut self) -> bool {
        self.step(i64::MAX)
    }

    /// Fill ratio in [0, 1].
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let span = (self.max - self.min) as f64;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.min) as f64 / span
        }
    }
}

/// Calculator state
pub struct CalculatorState {
    pub sliders: Vec<Slider>,
    pub selected: usize,
    pub total: Option<TotalDose>,
    pub breakdown: Vec<ActivityDose>,
    pub error: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            sliders: vec![
                Slider::new(ActivityKind::Flight, 5, 0, 50),
                Slider::new(ActivityKind::ChestXray, 1, 0, 10),
            ],
            selected: 0,
            total: None,
            breakdown: Vec::new(),
            error: None,
        }
    }
}

impl CalculatorState {
    pub fn next_slider(&mut self) {
        self.selected = (self.selected + 1) % self.sliders.len();
    }

    pub fn prev_slider(&mut self) {
        if self.selected == 0 {
            self.selected = self.sliders.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_slider_mut(&mut self) -> Option<&mut Slider> {
        self.sliders.get_mut(self.selected)
    }

    /// Current value of the slider for `kind` (0 if absent).
    #[must_use]
    pub fn count(&self, kind: ActivityKind) -> i64 {
        self.sliders
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0, |s| s.value)
    }

    /// Slider values as activity counts.
    #[must_use]
    pub fn counts(&self) -> Vec<(ActivityKind, i64)> {
        self.sliders.iter().map(|s| (s.kind, s.value)).collect()
    }
}

/// Render the calculator
pub fn render_calculator(f: &mut Frame, area: Rect, state: &CalculatorState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_screen_header(
        f,
        chunks[0],
        "Personal Radiation Exposure Calculator",
        "Annual dose from selected activities",
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(chunks[1]);

    render_sliders(f, columns[0], state);
    render_result(f, columns[1], state);
    render_calculator_footer(f, chunks[2]);
}

fn render_sliders(f: &mut Frame, area: Rect, state: &CalculatorState) {
    let constraints: Vec<Constraint> = state
        .sliders
        .iter()
        .map(|_| Constraint::Length(4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, slider) in state.sliders.iter().enumerate() {
        let is_selected = i == state.selected;
        let (border_style, title_style) = if is_selected {
            (RadiationTheme::border_focused(), RadiationTheme::focused())
        } else {
            (RadiationTheme::border(), RadiationTheme::text_secondary())
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Span::styled(format!(" {} ", slider.kind.label()), title_style))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .gauge_style(RadiationTheme::gauge(slider.ratio()))
            .ratio(slider.ratio().clamp(0.0, 1.0))
            .label(format!("{} / {}", slider.value, slider.max));

        f.render_widget(gauge, chunks[i]);
    }
}

fn render_result(f: &mut Frame, area: Rect, state: &CalculatorState) {
    let block = Block::default()
        .title(Span::styled(" Estimated Dose ", RadiationTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(if state.error.is_some() {
            RadiationTheme::danger()
        } else {
            RadiationTheme::border()
        });

    let mut lines = Vec::new();

    if let Some(err) = &state.error {
        lines.push(Line::from(Span::styled("! Cannot compute dose", RadiationTheme::danger())));
        lines.push(Line::from(Span::styled(err.clone(), RadiationTheme::text())));
    } else if let Some(total) = state.total {
        lines.push(Line::from(Span::styled(total.summary_line(), RadiationTheme::title())));
        lines.push(Line::from(""));

        for part in &state.breakdown {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>3} × {} mSv", part.count, part.unit_dose_msv),
                    RadiationTheme::text_secondary(),
                ),
                Span::styled(format!(" = {}", part.dose), RadiationTheme::text()),
            ]));
        }

        if let Some(background) = find_record(BACKGROUND_SOURCE) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "≈ {:.0}% of the average annual background dose ({} mSv)",
                    total.msv() / background.dose_msv * 100.0,
                    background.dose_msv
                ),
                RadiationTheme::dose(total.msv()),
            )));
        }
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(p, area);
}

fn render_calculator_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", RadiationTheme::key_hint()),
        Span::styled("Select ", RadiationTheme::key_desc()),
        Span::styled("[←→/-+] ", RadiationTheme::key_hint()),
        Span::styled("Adjust ", RadiationTheme::key_desc()),
        Span::styled("[Home/End] ", RadiationTheme::key_hint()),
        Span::styled("Min/Max", RadiationTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(RadiationTheme::border()),
    );

    f.render_widget(footer, area);
}
