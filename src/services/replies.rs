//! User-facing texts.

use crate::domain::models::{AnalysisResult, Reply};

pub const WELCOME: &str = "Добро пожаловать! Используй кнопки ниже:";

/// Sent as Markdown; the example is rendered as inline code.
pub const ADD_PROMPT: &str = "Отправь коэффициенты через пробел, например:\n`1.2 2.5 3.1`";

pub const RESET_DONE: &str = "История сброшена.";

pub const NO_DATA: &str = "Нет данных. Сначала добавь коэффициенты.";

pub const PARSE_ERROR: &str = "Ошибка! Введи коэффициенты через пробел, например: 1.2 2.5 3.1";

/// Figures shown by the stats action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReport {
    /// Rounds currently retained
    pub total: usize,
    pub analysis: AnalysisResult,
}

impl StatsReport {
    pub fn render(&self) -> String {
        format!(
            "Всего раундов: {}\nНизких подряд: {}\nМаксимум за 10 игр: x{}\nПоследний x10+: {}",
            self.total,
            self.analysis.low_streak,
            format_multiplier(self.analysis.recent_max),
            self.analysis.last_high,
        )
    }
}

/// Renders a multiplier the way users type it: whole values keep one
/// decimal (`12.0`), everything else uses the shortest exact form.
pub fn format_multiplier(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub fn welcome() -> Reply {
    Reply::with_menu(WELCOME)
}

pub fn add_prompt() -> Reply {
    Reply::plain(ADD_PROMPT).markdown()
}

pub fn reset_done() -> Reply {
    Reply::with_menu(RESET_DONE)
}

pub fn no_data() -> Reply {
    Reply::with_menu(NO_DATA)
}

pub fn parse_error() -> Reply {
    Reply::with_menu(PARSE_ERROR)
}
