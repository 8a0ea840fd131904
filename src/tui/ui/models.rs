//! Dose-response view: LNT vs. Threshold vs. Hormesis curves.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph, Wrap},
    Frame,
};

use crate::domain::{ModelCurves, RiskModelKind, RiskValue};
use crate::tui::styles::RadiationTheme;

use super::render_screen_header;

/// Model curve state.
///
/// Curves are evaluated once at startup; the probe moves along the
/// shared dose grid and is re-evaluated on every move.
pub struct ModelsState {
    pub curves: ModelCurves,
    pub probe_index: usize,
    pub probe_risks: Vec<(RiskModelKind, RiskValue)>,
    pub error: Option<String>,
}

impl ModelsState {
    #[must_use]
    pub fn new(curves: ModelCurves) -> Self {
        Self {
            curves,
            probe_index: 0,
            probe_risks: Vec::new(),
            error: None,
        }
    }

    /// Dose under the probe, if the grid is non-empty.
    #[must_use]
    pub fn probe_dose(&self) -> Option<f64> {
        self.curves.doses.get(self.probe_index).copied()
    }

    /// Move the probe by `delta` grid steps, clamped to the grid.
    pub fn move_probe(&mut self, delta: isize) {
        let Some(last) = self.curves.len().checked_sub(1) else {
            return;
        };
        self.probe_index = self.probe_index.saturating_add_signed(delta).min(last);
    }

    /// Jump the probe to the first sample.
    pub fn probe_to_start(&mut self) {
        self.probe_index = 0;
    }

    /// Jump the probe to the last sample.
    pub fn probe_to_end(&mut self) {
        self.probe_index = self.curves.len().saturating_sub(1);
    }
}

/// Render the model comparison
pub fn render_models(f: &mut Frame, area: Rect, state: &ModelsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Chart
            Constraint::Length(7), // Probe + notes
        ])
        .split(area);

    render_screen_header(
        f,
        chunks[0],
        "Dose-Response Models",
        "LNT vs. Threshold vs. Hormesis",
    );
    render_curves(f, chunks[1], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    render_probe(f, bottom[0], state);
    render_model_notes(f, bottom[1]);
}

fn render_curves(f: &mut Frame, area: Rect, state: &ModelsState) {
    let curves = &state.curves;

    let series: Vec<(RiskModelKind, Vec<(f64, f64)>)> = RiskModelKind::ALL
        .into_iter()
        .map(|model| {
            let points = curves
                .doses
                .iter()
                .copied()
                .zip(curves.series(model).iter().copied())
                .collect();
            (model, points)
        })
        .collect();

    let probe_points: Vec<(f64, f64)> = match state.probe_dose() {
        Some(dose) => state.probe_risks.iter().map(|(_, risk)| (dose, *risk)).collect(),
        None => Vec::new(),
    };

    let mut datasets: Vec<Dataset> = series
        .iter()
        .map(|(model, points)| {
            Dataset::default()
                .name(model.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(RadiationTheme::model(*model))
                .data(points)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(RadiationTheme::focused())
            .data(&probe_points),
    );

    let max_dose = curves.doses.last().copied().unwrap_or(0.0).max(1.0);
    let (risk_lo, risk_hi) = curves.risk_bounds();
    let risk_hi = if risk_hi > risk_lo { risk_hi } else { risk_lo + 1.0 };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    " Radiation Dose-Response Models ",
                    RadiationTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(RadiationTheme::border()),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title(Span::styled("Radiation Dose (mSv)", RadiationTheme::text_secondary()))
                .style(RadiationTheme::text_muted())
                .bounds([0.0, max_dose])
                .labels(axis_labels(0.0, max_dose, 0)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Relative Risk", RadiationTheme::text_secondary()))
                .style(RadiationTheme::text_muted())
                .bounds([risk_lo, risk_hi])
                .labels(axis_labels(risk_lo, risk_hi, 2)),
        );

    f.render_widget(chart, area);
}

fn axis_labels(lo: f64, hi: f64, precision: usize) -> Vec<Span<'static>> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .into_iter()
        .map(|v| Span::styled(format!("{v:.precision$}"), RadiationTheme::text_muted()))
        .collect()
}

fn render_probe(f: &mut Frame, area: Rect, state: &ModelsState) {
    let block = Block::default()
        .title(Span::styled(" Probe ", RadiationTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(RadiationTheme::border());

    let mut lines = Vec::new();

    if let Some(err) = &state.error {
        lines.push(Line::from(Span::styled(err.clone(), RadiationTheme::danger())));
    } else if let Some(dose) = state.probe_dose() {
        lines.push(Line::from(vec![
            Span::styled("Dose: ", RadiationTheme::text_secondary()),
            Span::styled(format!("{dose:.2} mSv"), RadiationTheme::text()),
        ]));
        for (model, risk) in &state.probe_risks {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", model.to_string()), RadiationTheme::model(*model)),
                Span::styled(format!("{risk:.4}"), RadiationTheme::text()),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled("[←→] ", RadiationTheme::key_hint()),
        Span::styled("Move ", RadiationTheme::key_desc()),
        Span::styled("[Home/End] ", RadiationTheme::key_hint()),
        Span::styled("Ends", RadiationTheme::key_desc()),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_model_notes(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = RiskModelKind::ALL
        .iter()
        .map(|model| {
            Line::from(vec![
                Span::styled(format!("{model}: "), RadiationTheme::model(*model)),
                Span::styled(model.description(), RadiationTheme::text_secondary()),
            ])
        })
        .collect();

    let notes = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Assumptions ", RadiationTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(RadiationTheme::border()),
    );

    f.render_widget(notes, area);
}
