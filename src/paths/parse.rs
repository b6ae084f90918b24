//! Parser for the renderer's 2D path dump
//!
//! The format is one sample per line, paths separated by blank lines:
//!
//! ```text
//! 0.25,0.40
//! 0.31,0.52!      <- trailing `!` marks a sample that exited the world
//!
//! 0.70,0.10
//! ```
//!
//! The first path starts implicitly. Runs of blank lines and a trailing blank
//! line never produce empty paths.

use super::{Path, PathPoint, PathSet};

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line did not have exactly two comma-separated fields
    FieldCount(usize),
    /// A field was not a finite floating-point number
    BadNumber { field: usize },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            ParseErrorKind::BadNumber { field } => {
                write!(f, "field {} is not a valid number", field + 1)
            }
        }
    }
}

/// A malformed line in a path-trace file
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Parse error at line {line}: {kind}: '{content}'")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub kind: ParseErrorKind,
}

/// Parse a whole path-trace file into a [`PathSet`].
pub fn parse_paths(source: &str) -> Result<PathSet, ParseError> {
    let mut paths = Vec::new();
    let mut current = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            paths.extend(Path::new(std::mem::take(&mut current)));
            continue;
        }
        current.push(parse_point(line).map_err(|kind| ParseError {
            line: index + 1,
            content: line.to_string(),
            kind,
        })?);
    }
    paths.extend(Path::new(current));

    Ok(PathSet::new(paths))
}

/// Parse one non-blank line: `<x>,<y>` with an optional trailing `!`.
pub fn parse_point(line: &str) -> Result<PathPoint, ParseErrorKind> {
    let (body, exited_world) = match line.strip_suffix('!') {
        Some(body) => (body, true),
        None => (line, false),
    };

    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() != 2 {
        return Err(ParseErrorKind::FieldCount(fields.len()));
    }

    let x = parse_coordinate(fields[0], 0)?;
    let y = parse_coordinate(fields[1], 1)?;
    Ok(PathPoint::new(x, y, exited_world))
}

fn parse_coordinate(field: &str, index: usize) -> Result<f64, ParseErrorKind> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ParseErrorKind::BadNumber { field: index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_point() {
        let point = parse_point("0.1,0.2").unwrap();
        assert_eq!(point, PathPoint::new(0.1, 0.2, false));
    }

    #[test]
    fn test_parse_exited_point() {
        let point = parse_point("0.5,0.5!").unwrap();
        assert_eq!(point, PathPoint::new(0.5, 0.5, true));
    }

    #[test]
    fn test_renderer_number_formats() {
        // std::ostream prints small values in scientific notation
        let point = parse_point("1e-05,0.75").unwrap();
        assert_eq!(point.x, 1e-5);
        assert_eq!(parse_point("-0.2,1").unwrap().x, -0.2);
    }

    #[test]
    fn test_reject_three_fields() {
        let err = parse_paths("0.1,0.2,0.3").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.content, "0.1,0.2,0.3");
        assert_eq!(err.kind, ParseErrorKind::FieldCount(3));
    }

    #[test]
    fn test_reject_non_numeric() {
        let err = parse_paths("0.1,0.1\nabc,0.2").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "abc,0.2");
        assert_eq!(err.kind, ParseErrorKind::BadNumber { field: 0 });
    }

    #[test]
    fn test_reject_missing_comma() {
        let err = parse_paths("0.5").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::FieldCount(1));
    }

    #[test]
    fn test_reject_non_finite() {
        let err = parse_paths("0.5,NaN").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::BadNumber { field: 1 });
    }

    #[test]
    fn test_marker_must_be_trailing() {
        assert!(parse_point("0.5!,0.5").is_err());
    }

    #[test]
    fn test_error_message_names_line_and_content() {
        let err = parse_paths("\n\nabc,0.2\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("abc,0.2"), "{}", message);
    }

    #[test]
    fn test_blank_lines_split_paths() {
        let set = parse_paths("0.1,0.1\n0.2,0.2\n\n0.3,0.3\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().len(), 2);
        assert_eq!(set.get(1).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_paths_dropped() {
        let set = parse_paths("\n\n0.1,0.1\n\n\n\n0.2,0.2\n0.3,0.3\n\n").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_crlf_line_endings() {
        let set = parse_paths("0.1,0.1\r\n0.2,0.2!\r\n\r\n0.3,0.3\r\n").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get(0).unwrap().points()[1].exited_world);
    }

    #[test]
    fn test_error_content_drops_carriage_return() {
        let err = parse_paths("0.1,0.1\r\n0.2;0.2\r\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "0.2;0.2");
        assert!(!err.to_string().contains('\r'));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_paths("").unwrap().is_empty());
    }
}
