use serde::Deserialize;

use crate::{Result, TranscriptError};

/// A time bound as sent by a client: plain seconds or a clock string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    Seconds(f64),
    Clock(String),
}

impl From<f64> for TimeInput {
    fn from(value: f64) -> Self {
        TimeInput::Seconds(value)
    }
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Clock(value.to_string())
    }
}

impl std::fmt::Display for TimeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInput::Seconds(s) => write!(f, "{s}"),
            TimeInput::Clock(s) => write!(f, "{s}"),
        }
    }
}

/// Optional [start, end] bounds in seconds; `None` means unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TimeWindow {
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        Self { start, end }
    }

    /// Parse optional client-supplied bounds
    pub fn parse(start: Option<&TimeInput>, end: Option<&TimeInput>) -> Result<Self> {
        Ok(Self {
            start: start.map(parse_time).transpose()?,
            end: end.map(parse_time).transpose()?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Convert seconds, `MM:SS` or `HH:MM:SS` into a non-negative number of seconds
pub fn parse_time(input: &TimeInput) -> Result<f64> {
    let total = match input {
        TimeInput::Seconds(secs) => *secs,
        TimeInput::Clock(text) => parse_clock(text)?,
    };

    if total < 0.0 {
        return Err(TranscriptError::NegativeTime(input.to_string()));
    }

    Ok(total)
}

fn parse_clock(text: &str) -> Result<f64> {
    let invalid = || TranscriptError::InvalidTimeFormat(text.to_string());

    let parts = text
        .split(':')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    match parts.as_slice() {
        [s] => Ok(*s),
        [m, s] => Ok(m * 60.0 + s),
        [h, m, s] => Ok(h * 3600.0 + m * 60.0 + s),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(input: impl Into<TimeInput>) -> Result<f64> {
        parse_time(&input.into())
    }

    #[test]
    fn test_numeric_passthrough() {
        assert_eq!(secs(5.0).unwrap(), 5.0);
        assert_eq!(secs(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_clock_formats() {
        assert_eq!(secs("42").unwrap(), 42.0);
        assert_eq!(secs("01:30").unwrap(), 90.0);
        assert_eq!(secs("01:00:00").unwrap(), 3600.0);
        assert_eq!(secs("1:02:03.5").unwrap(), 3723.5);
    }

    #[test]
    fn test_negative_numeric_rejected() {
        assert!(matches!(secs(-1.0), Err(TranscriptError::NegativeTime(_))));
    }

    #[test]
    fn test_negative_total_rejected() {
        assert!(matches!(secs("-5"), Err(TranscriptError::NegativeTime(_))));
        assert!(matches!(secs("-2:30"), Err(TranscriptError::NegativeTime(_))));
    }

    #[test]
    fn test_negative_part_with_positive_total_allowed() {
        // Only the computed total is checked
        assert_eq!(secs("2:-30").unwrap(), 90.0);
    }

    #[test]
    fn test_too_many_parts() {
        assert!(matches!(secs("1:2:3:4"), Err(TranscriptError::InvalidTimeFormat(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(secs("abc"), Err(TranscriptError::InvalidTimeFormat(_))));
        assert!(matches!(secs(""), Err(TranscriptError::InvalidTimeFormat(_))));
        assert!(matches!(secs("1::2"), Err(TranscriptError::InvalidTimeFormat(_))));
        assert!(matches!(secs("nan"), Err(TranscriptError::InvalidTimeFormat(_))));
    }

    #[test]
    fn test_window_parse() {
        let start = TimeInput::from("00:10");
        let end = TimeInput::from(20.0);
        let window = TimeWindow::parse(Some(&start), Some(&end)).unwrap();
        assert_eq!(window, TimeWindow::new(Some(10.0), Some(20.0)));
        assert!(!window.is_unbounded());
        assert!(TimeWindow::parse(None, None).unwrap().is_unbounded());
    }

    #[test]
    fn test_window_parse_propagates_errors() {
        let bad = TimeInput::from("x:y");
        assert!(TimeWindow::parse(None, Some(&bad)).is_err());
    }

    #[test]
    fn test_deserialize_untagged() {
        let n: TimeInput = serde_json::from_str("12").unwrap();
        assert_eq!(n, TimeInput::Seconds(12.0));
        let s: TimeInput = serde_json::from_str(r#""01:30""#).unwrap();
        assert_eq!(s, TimeInput::Clock("01:30".to_string()));
    }
}
