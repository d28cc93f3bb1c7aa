//! Human/robot output plumbing.
//!
//! Robot mode wraps every payload in a [`RobotResponse`] envelope printed as
//! pretty JSON; human mode renders through [`HumanLayout`].

use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl HumanLayout {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key_style = style(key).dim().to_string();
        self.lines.push(format!(
            "{key_style:width$} {value}",
            width = self.key_width
        ));
        self
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

pub fn emit_human(layout: &HumanLayout) {
    println!("{}", layout.render());
}

/// Truncate a string for one-line previews.
#[must_use]
pub fn preview(s: &str, max_len: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_len {
        return flat;
    }
    let kept: String = flat.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}
