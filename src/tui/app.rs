//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Calls into the exposure service

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::application::ExposureService;
use crate::domain::DEFAULT_SAMPLES;

use super::ui::{
    about::render_about,
    calculator::{render_calculator, CalculatorState},
    exposure::{render_exposure, ExposureState},
    models::{render_models, ModelsState},
    render_disclaimer, render_navigation,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Exposure,
    Models,
    Calculator,
    About,
}

impl Screen {
    /// Screens in navigation order.
    pub const ALL: [Screen; 4] = [
        Screen::Exposure,
        Screen::Models,
        Screen::Calculator,
        Screen::About,
    ];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Exposure => "Exposure Sources",
            Self::Models => "Dose-Response Models",
            Self::Calculator => "Calculator",
            Self::About => "FAQ",
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Exposure => 0,
            Self::Models => 1,
            Self::Calculator => 2,
            Self::About => 3,
        }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Dose computations
    service: ExposureService,

    /// Reference chart state
    exposure_state: ExposureState,

    /// Model curves state
    models_state: ModelsState,

    /// Calculator state
    calculator_state: CalculatorState,
}

impl App {
    /// Create a new application instance with the built-in dose tables.
    ///
    /// # Errors
    /// Returns error if the model curves cannot be evaluated.
    pub fn new() -> Result<Self> {
        Self::with_service(ExposureService::new())
    }

    /// Create application with an injected service.
    ///
    /// Reads the reference table and evaluates the model curves once.
    ///
    /// # Errors
    /// Returns error if the model curves cannot be evaluated.
    pub fn with_service(service: ExposureService) -> Result<Self> {
        let exposure_state = ExposureState::new(service.reference_table());
        let models_state = ModelsState::new(service.curves(DEFAULT_SAMPLES)?);

        let mut app = Self {
            screen: Screen::Exposure,
            should_quit: false,
            service,
            exposure_state,
            models_state,
            calculator_state: CalculatorState::default(),
        };

        app.update_probe();
        app.recalculate();

        Ok(app)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the current screen into `f`.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_navigation(f, chunks[0], self.screen);

        match self.screen {
            Screen::Exposure => render_exposure(f, chunks[1], &self.exposure_state),
            Screen::Models => render_models(f, chunks[1], &self.models_state),
            Screen::Calculator => render_calculator(f, chunks[1], &self.calculator_state),
            Screen::About => render_about(f, chunks[1]),
        }

        render_disclaimer(f, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_to(self.screen.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_to(self.screen.prev());
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_to(Screen::ALL[index]);
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Models => self.handle_models_key(key),
            Screen::Calculator => self.handle_calculator_key(key),
            Screen::Exposure | Screen::About => {}
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        if screen != self.screen {
            tracing::debug!("Switching screen to {}", screen.title());
            self.screen = screen;
        }
    }

    fn handle_models_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => self.models_state.move_probe(-1),
            KeyCode::Right => self.models_state.move_probe(1),
            KeyCode::PageDown => self.models_state.move_probe(-10),
            KeyCode::PageUp => self.models_state.move_probe(10),
            KeyCode::Home => self.models_state.probe_to_start(),
            KeyCode::End => self.models_state.probe_to_end(),
            _ => return,
        }
        self.update_probe();
    }

    fn handle_calculator_key(&mut self, key: KeyCode) {
        let changed = match key {
            KeyCode::Up => {
                self.calculator_state.prev_slider();
                false
            }
            KeyCode::Down => {
                self.calculator_state.next_slider();
                false
            }
            KeyCode::Left | KeyCode::Char('-') => self.step_selected(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.step_selected(1),
            KeyCode::Home => self
                .calculator_state
                .selected_slider_mut()
                .is_some_and(|s| s.jump_to_min()),
            KeyCode::End => self
                .calculator_state
                .selected_slider_mut()
                .is_some_and(|s| s.jump_to_max()),
            _ => false,
        };

        if changed {
            self.recalculate();
        }
    }

    fn step_selected(&mut self, delta: i64) -> bool {
        self.calculator_state
            .selected_slider_mut()
            .is_some_and(|s| s.step(delta))
    }

    /// Re-evaluate the three models at the probe dose.
    fn update_probe(&mut self) {
        let Some(dose) = self.models_state.probe_dose() else {
            self.models_state.probe_risks.clear();
            return;
        };

        match self.service.risks_at(dose) {
            Ok(risks) => {
                self.models_state.probe_risks = risks;
                self.models_state.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to evaluate models at {} mSv: {}", dose, e);
                self.models_state.probe_risks.clear();
                self.models_state.error = Some(e.to_string());
            }
        }
    }

    /// Recompute the calculator total from the current slider values.
    fn recalculate(&mut self) {
        let counts = self.calculator_state.counts();
        let result = self.service.total_dose(counts.iter().copied()).and_then(|total| {
            Ok((total, self.service.activity_breakdown(&counts)?))
        });

        match result {
            Ok((total, breakdown)) => {
                self.calculator_state.total = Some(total);
                self.calculator_state.breakdown = breakdown;
                self.calculator_state.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to compute personal dose: {}", e);
                self.calculator_state.total = None;
                self.calculator_state.breakdown.clear();
                self.calculator_state.error = Some(e.to_string());
            }
        }
    }
}
