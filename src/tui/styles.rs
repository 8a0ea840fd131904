//! Color palette and styles.
//!
//! Model series keep the colors readers know from the usual
//! dose-response plots: LNT red, threshold blue, hormesis green.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::RiskModelKind;

/// Radiation explorer color palette.
pub struct RadiationTheme;

impl RadiationTheme {
    // === Primary Colors ===

    /// Deep teal - Primary color
    pub const PRIMARY: Color = Color::Rgb(13, 148, 136); // #0D9488

    /// Lighter teal for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(45, 212, 191); // #2DD4BF

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // === Series Colors ===

    pub const LNT: Color = Color::Rgb(239, 68, 68); // #EF4444
    pub const THRESHOLD: Color = Color::Rgb(59, 130, 246); // #3B82F6
    pub const HORMESIS: Color = Color::Rgb(34, 197, 94); // #22C55E

    /// Bars in the reference chart
    pub const BAR: Color = Color::Rgb(37, 99, 235); // #2563EB

    // === Background / Text Colors ===

    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // #0F172A
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for the selected navigation tab
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn bar() -> Style {
        Style::default().fg(Self::BAR)
    }

    /// Line style for a model series
    #[must_use]
    pub fn model(model: RiskModelKind) -> Style {
        let color = match model {
            RiskModelKind::LinearNoThreshold => Self::LNT,
            RiskModelKind::Threshold => Self::THRESHOLD,
            RiskModelKind::Hormesis => Self::HORMESIS,
        };
        Style::default().fg(color)
    }

    /// Style for a dose: green below 1 mSv, amber up to 10 mSv, red above.
    #[must_use]
    pub fn dose(dose_msv: f64) -> Style {
        if dose_msv < 1.0 {
            Self::success()
        } else if dose_msv <= 10.0 {
            Self::warning()
        } else {
            Self::danger()
        }
    }

    /// Gauge style based on how far a slider is filled
    #[must_use]
    pub fn gauge(ratio: f64) -> Style {
        if ratio >= 0.7 {
            Self::danger()
        } else if ratio >= 0.3 {
            Self::warning()
        } else {
            Self::success()
        }
    }
}
