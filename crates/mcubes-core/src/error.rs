//! Error types for mcubes-rs.
//!
//! Failures inside the lookup-table subsystem are reported through
//! [`Report`], an appendable list of message lines that travels up the call
//! chain inside [`McError`]. A report is built where the failure is
//! detected, enriched with context lines along the way, and rendered
//! line-per-line at the outermost boundary.

use std::fmt;

use thiserror::Error;

/// Multi-line diagnostic carrier.
///
/// Lines are appended in order; `Display` renders one line per message
/// line, so a report prints readably on stderr without further formatting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report whose first line names the failing procedure:
    /// `"Error detected in <procedure>."`.
    #[must_use]
    pub fn in_procedure(procedure: &str) -> Self {
        let mut report = Self::new();
        report.add(format!("Error detected in {procedure}."));
        report
    }

    /// Appends one message line.
    pub fn add(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Builder-style variant of [`Report::add`].
    #[must_use]
    pub fn with(mut self, line: impl Into<String>) -> Self {
        self.add(line);
        self
    }

    /// Returns the number of message lines.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no message line has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the message lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The main error type for mcubes-rs operations.
#[derive(Error, Debug)]
pub enum McError {
    /// Out-of-range index, odd coordinate, or similar bad argument.
    #[error("{0}")]
    IllegalArgument(Report),

    /// A data structure was used before being sized or populated.
    #[error("{0}")]
    InvariantViolation(Report),

    /// Self-check failure: inconsistent orientation, bad polytope, etc.
    #[error("{0}")]
    Consistency(Report),

    /// A string names no value of the target enum domain.
    #[error("unknown {domain} value '{value}'")]
    UnknownValue {
        domain: &'static str,
        value: String,
    },
}

impl McError {
    /// Illegal-argument error with a single message line prefixed by the
    /// procedure name.
    #[must_use]
    pub fn illegal_argument(procedure: &str, msg: impl Into<String>) -> Self {
        Self::IllegalArgument(Report::in_procedure(procedure).with(msg))
    }

    /// Invariant-violation error with a single message line prefixed by the
    /// procedure name.
    #[must_use]
    pub fn invariant(procedure: &str, msg: impl Into<String>) -> Self {
        Self::InvariantViolation(Report::in_procedure(procedure).with(msg))
    }

    /// Returns the report carried by this error, if any.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::IllegalArgument(r) | Self::InvariantViolation(r) | Self::Consistency(r) => {
                Some(r)
            }
            Self::UnknownValue { .. } => None,
        }
    }
}

/// A specialized Result type for mcubes-rs operations.
pub type Result<T> = std::result::Result<T, McError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.num_lines(), 0);
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_procedure_report_first_line() {
        let report = Report::in_procedure("McTable::set_num_simplices");
        assert_eq!(
            report.lines()[0],
            "Error detected in McTable::set_num_simplices."
        );
    }

    #[test]
    fn test_display_renders_line_per_line() {
        let mut report = Report::new();
        report.add("Incorrect size of array coord.");
        report.add(format!("  Array size: {}", 5));
        report.add(format!("  Expected array size: {}", 8));
        let text = report.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("Expected array size: 8"));
    }

    #[test]
    fn test_heterogeneous_append_formats_bool() {
        let mut report = Report::new();
        report.add(format!("  Flag separate opposite: {}", true));
        assert_eq!(report.lines()[0], "  Flag separate opposite: true");
    }

    #[test]
    fn test_error_exposes_report() {
        let err = McError::illegal_argument("f", "Illegal vertex index.");
        let report = err.report().unwrap();
        assert_eq!(report.num_lines(), 2);
        assert!(err.to_string().contains("Illegal vertex index."));
    }
}
