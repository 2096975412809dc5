//! Styles for the talentdesk CLI.
//!
//! Rendering code asks for styles by **semantic** name (a score, a status, a
//! muted id) and never by color. Colors are decided here once, so changing the
//! look of, say, every warning is a one-line edit.
//!
//! `console` drops the escape codes by itself when stdout is not a terminal,
//! so piped output and tests see plain text.

use console::Style;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn header() -> Style {
    Style::new().bold().underlined()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn id() -> Style {
    Style::new().cyan()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn info() -> Style {
    muted()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}

pub fn error() -> Style {
    Style::new().red().bold()
}

pub fn unread() -> Style {
    Style::new().yellow()
}

/// Color a 0-10 score: green from 8.5, yellow from 7, red below.
pub fn score(value: f64) -> Style {
    if value >= 8.5 {
        Style::new().green()
    } else if value >= 7.0 {
        Style::new().yellow()
    } else {
        Style::new().red()
    }
}

/// Color a stage label by how far along the cycle it is.
pub fn stage(label: &str) -> Style {
    match label {
        "Selected" => Style::new().green().bold(),
        "Trials" => Style::new().magenta(),
        "Interview" => Style::new().blue(),
        _ => Style::new(),
    }
}
