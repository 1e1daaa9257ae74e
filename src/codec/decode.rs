//! Pure decoding: descriptor file text → FilterDescriptor.
//!
//! No I/O, no side effects beyond a warning for unrecognized TYPE labels.
//! Lines are classified independently: metadata may sit before, between,
//! or after coefficient lines, and a repeated key keeps its last value.

use crate::domain::{FilterDescriptor, FilterFileError, FilterFileResult, FilterKind};

use super::{COMMENT_MARKER, KEY_NAME, KEY_ORDER, KEY_SFREQ, KEY_TYPE};

/// Decode descriptor file text into a typed FilterDescriptor.
///
/// `text` is the complete file content. Lines are split with
/// [`str::lines`], so Windows line endings are accepted; each line is
/// whitespace-trimmed before classification.
///
/// Returns `Err` on a malformed or missing metadata entry, a coefficient
/// line that is not a single number, or a coefficient count that
/// contradicts the declared order. No partially populated descriptor
/// escapes on any failure path.
pub fn decode(text: &str) -> FilterFileResult<FilterDescriptor> {
    let mut kind: Option<FilterKind> = None;
    let mut name: Option<String> = None;
    let mut order: Option<usize> = None;
    let mut sampling_frequency: Option<f64> = None;
    let mut coefficients: Vec<f64> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        // First token decides the class; the rest of the line (possibly
        // empty) is the metadata value.
        let (first, rest) = match line.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim()),
            None => (line, ""),
        };

        match first {
            KEY_TYPE | KEY_NAME | KEY_ORDER | KEY_SFREQ if rest.is_empty() => {
                return Err(FilterFileError::Metadata(format!(
                    "line {line_no}: metadata key '{first}' has no value"
                )));
            }
            KEY_TYPE => kind = Some(parse_type(rest)),
            KEY_NAME => name = Some(rest.to_string()),
            KEY_ORDER => order = Some(parse_order(line_no, rest)?),
            KEY_SFREQ => sampling_frequency = Some(parse_sfreq(line_no, rest)?),
            _ if !rest.is_empty() && first.parse::<f64>().is_err() => {
                return Err(FilterFileError::Metadata(format!(
                    "line {line_no}: unknown metadata key '{first}'"
                )));
            }
            _ => coefficients.push(parse_coefficient(line_no, line)?),
        }
    }

    let kind = kind.ok_or_else(|| missing_key(KEY_TYPE))?;
    let name = name.ok_or_else(|| missing_key(KEY_NAME))?;
    let order = order.ok_or_else(|| missing_key(KEY_ORDER))?;
    let sampling_frequency = sampling_frequency.ok_or_else(|| missing_key(KEY_SFREQ))?;

    // The invariant is found == order + 1, compared as found - 1 so an
    // absurd declared order cannot overflow.
    let found = coefficients.len();
    if found == 0 || found - 1 != order {
        return Err(FilterFileError::CountMismatch { order, found });
    }

    Ok(FilterDescriptor {
        kind,
        name,
        order,
        sampling_frequency,
        coefficients,
    })
}

/// Map `"low-pass"` (or an alias like `"LPF"`) → `FilterKind::LowPass`.
/// Unrecognized labels are preserved, with a warning.
fn parse_type(label: &str) -> FilterKind {
    let kind = FilterKind::from_label(label);
    if let FilterKind::Other(_) = &kind {
        log::warn!("decode: unrecognized filter type '{label}', keeping label as-is");
    }
    kind
}

/// Parse `"40"` → `40`. Decimal digits only: an explicit sign, a
/// fraction, or garbage is an error.
fn parse_order(line_no: usize, value: &str) -> FilterFileResult<usize> {
    // usize::from_str tolerates a leading '+'; the grammar does not
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FilterFileError::Metadata(format!(
            "line {line_no}: ORDER '{value}' is not a non-negative integer"
        )));
    }
    value.parse::<usize>().map_err(|e| {
        FilterFileError::Metadata(format!(
            "line {line_no}: ORDER '{value}' is not a non-negative integer: {e}"
        ))
    })
}

/// Parse `"8000"` → `8000.0`. Must be a positive, finite frequency.
fn parse_sfreq(line_no: usize, value: &str) -> FilterFileResult<f64> {
    let hz = value.parse::<f64>().map_err(|e| {
        FilterFileError::Metadata(format!("line {line_no}: SFREQ '{value}' is not a number: {e}"))
    })?;
    if !hz.is_finite() || hz <= 0.0 {
        return Err(FilterFileError::Metadata(format!(
            "line {line_no}: SFREQ must be a positive, finite frequency, got {hz}"
        )));
    }
    Ok(hz)
}

/// Parse `"0.0314"` → `0.0314`. The whole line must be one number.
fn parse_coefficient(line_no: usize, text: &str) -> FilterFileResult<f64> {
    text.parse::<f64>().map_err(|_| FilterFileError::Coefficient {
        line: line_no,
        text: text.to_string(),
    })
}

fn missing_key(key: &str) -> FilterFileError {
    FilterFileError::Metadata(format!("missing required metadata key '{key}'"))
}
