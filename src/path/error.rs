//! Errors raised while lexing and resolving path data

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use super::lexer::Span;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("unrecognized path command '{command}'")]
    UnknownCommand { command: char, span: Span },

    #[error("path data must start with a command")]
    MissingCommand { span: Span },

    #[error("command '{command}' is missing a coordinate")]
    MissingArgument { command: char, span: Span },

    #[error("command '{command}' expected a coordinate, found command '{found}'")]
    UnexpectedCommand {
        command: char,
        found: char,
        span: Span,
    },

    #[error("malformed number '{text}'")]
    MalformedNumber { text: String, span: Span },

    #[error("number '{text}' does not fit a fixed-point coordinate")]
    NumberOutOfRange { text: String, span: Span },

    #[error("coordinate overflow while applying relative command '{command}'")]
    CoordinateOverflow { command: char, span: Span },

    #[error("curve segment ends after {points} of 3 points")]
    IncompleteCurve { points: usize, span: Span },

    #[error("close-path takes no coordinates")]
    UnexpectedCoordinate { span: Span },
}

impl PathError {
    pub fn span(&self) -> Span {
        match self {
            PathError::UnknownCommand { span, .. }
            | PathError::MissingCommand { span }
            | PathError::MissingArgument { span, .. }
            | PathError::UnexpectedCommand { span, .. }
            | PathError::MalformedNumber { span, .. }
            | PathError::NumberOutOfRange { span, .. }
            | PathError::CoordinateOverflow { span, .. }
            | PathError::IncompleteCurve { span, .. }
            | PathError::UnexpectedCoordinate { span } => span.clone(),
        }
    }

    /// Format the error with the offending path data using ariadne
    pub fn format(&self, data: &str, label: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span();
        let message = self.to_string();

        let written = Report::build(ReportKind::Error, label, span.start)
            .with_message(&message)
            .with_label(
                Label::new((label, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((label, Source::from(data)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
