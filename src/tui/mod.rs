//! TUI module: Terminal User Interface using Ratatui.
//!
//! Presents the dose explorer as four screens:
//! - Reference doses from common sources (bar chart)
//! - Dose-response model curves with a probe cursor
//! - Personal exposure calculator
//! - FAQ, references and conclusion

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::RadiationTheme;
