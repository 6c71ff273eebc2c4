//! Template scanner.
//!
//! Splits raw template text into an ordered list of [`Segment`]s that cover
//! the whole input with no gaps or overlaps. Text outside `{{ ... }}` is
//! literal. The `{{{{ ... }}}}` escape form is recognized before the
//! ordinary placeholder form, so an escape is never read as a placeholder.

use super::RenderError;
use super::placeholder::{Placeholder, classify};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ESCAPE_OPEN: &str = "{{{{";
const ESCAPE_CLOSE: &str = "}}}}";

/// One piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text emitted verbatim.
    Literal(&'a str),
    /// A classified placeholder.
    Placeholder(Placeholder<'a>),
}

/// Scan `source` into segments.
///
/// # Errors
///
/// * `UnterminatedPlaceholder` - an opening `{{` or `{{{{` has no closing match
/// * `MalformedPlaceholder` - a placeholder body contains `{{`
/// * `EmptyReferenceName` - a placeholder has no name
pub fn scan(source: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find(OPEN) {
        let start = cursor + offset;
        if start > cursor {
            segments.push(Segment::Literal(&source[cursor..start]));
        }

        let (segment, end) = if source[start..].starts_with(ESCAPE_OPEN) {
            scan_escape(source, start)?
        } else {
            scan_placeholder(source, start)?
        };

        segments.push(segment);
        cursor = end;
    }

    if cursor < source.len() {
        segments.push(Segment::Literal(&source[cursor..]));
    }

    Ok(segments)
}

/// Scan a `{{{{text}}}}` escape starting at `start`.
///
/// Returns the segment and the byte offset just past the closing braces.
fn scan_escape(source: &str, start: usize) -> Result<(Segment<'_>, usize), RenderError> {
    let inner_start = start + ESCAPE_OPEN.len();
    let inner_len = source[inner_start..]
        .find(ESCAPE_CLOSE)
        .ok_or(RenderError::UnterminatedPlaceholder { position: start })?;

    let inner = &source[inner_start..inner_start + inner_len];
    let end = inner_start + inner_len + ESCAPE_CLOSE.len();

    Ok((Segment::Placeholder(Placeholder::EscapedLiteral(inner)), end))
}

/// Scan a `{{body}}` placeholder starting at `start`.
fn scan_placeholder(source: &str, start: usize) -> Result<(Segment<'_>, usize), RenderError> {
    let body_start = start + OPEN.len();
    let body_len = source[body_start..]
        .find(CLOSE)
        .ok_or(RenderError::UnterminatedPlaceholder { position: start })?;

    let body = &source[body_start..body_start + body_len];
    if body.contains(OPEN) {
        return Err(RenderError::MalformedPlaceholder { position: start });
    }

    let placeholder = classify(body, start)?;
    let end = body_start + body_len + CLOSE.len();

    Ok((Segment::Placeholder(placeholder), end))
}
