//! Hologram theme and color utilities.

use crate::notifications::NotificationLevel;
use holocron_client::{HomeworldState, PageLoad};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn hologram() -> Self {
        Self {
            bg: Color::Rgb(6, 10, 18),
            primary: Color::Rgb(102, 217, 255),
            primary_dim: Color::Rgb(48, 110, 130),
            secondary: Color::Rgb(255, 183, 77),
            success: Color::Rgb(102, 255, 153),
            warning: Color::Rgb(255, 214, 102),
            error: Color::Rgb(255, 102, 102),
            info: Color::Rgb(102, 217, 255),
            text: Color::Rgb(220, 230, 240),
            text_dim: Color::Rgb(120, 135, 150),
            border: Color::Rgb(60, 75, 90),
            border_focus: Color::Rgb(102, 217, 255),
        }
    }
}

pub fn homeworld_state_color(state: &HomeworldState, theme: &Theme) -> Color {
    match state {
        HomeworldState::Idle => theme.text_dim,
        HomeworldState::Resolving => theme.warning,
        HomeworldState::Resolved(_) => theme.success,
        HomeworldState::Missing => theme.text_dim,
        HomeworldState::Failed => theme.error,
    }
}

pub fn page_load_color(load: &PageLoad, theme: &Theme) -> Color {
    match load {
        PageLoad::Idle => theme.text_dim,
        PageLoad::Loading => theme.warning,
        PageLoad::Ready(_) => theme.success,
        PageLoad::Failed(_) => theme.error,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
    }
}
