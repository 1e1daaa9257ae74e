//! Pure encoding: FilterDescriptor → descriptor file text.
//!
//! No I/O, no side effects. The output is the canonical layout `decode`
//! accepts: banner comment, the four metadata lines, then one coefficient
//! per line.

use crate::domain::FilterDescriptor;

use super::{FILE_BANNER, KEY_NAME, KEY_ORDER, KEY_SFREQ, KEY_TYPE};

/// Encode a descriptor into file text (with a trailing newline).
///
/// Infallible, and writes exactly what it is given: a descriptor whose
/// coefficient count contradicts its `order` serializes into a file that
/// fails to read back with a count mismatch. Free text is emitted
/// verbatim too, so a name or preserved type label the line grammar
/// cannot reproduce (line breaks, padding whitespace, empty text) yields
/// a file that reads back as a different descriptor or as an error;
/// [`write_filter`] rejects such descriptors, `encode` itself does not.
/// Numbers use `f64`'s `Display`, the shortest decimal that parses back
/// to identical bits, so a write→read cycle reproduces every coefficient
/// exactly.
///
/// [`write_filter`]: crate::write_filter
pub fn encode(descriptor: &FilterDescriptor) -> String {
    let mut out = String::new();
    out.push_str(FILE_BANNER);
    out.push('\n');
    out.push_str(&format!("{KEY_TYPE} {}\n", descriptor.kind.label()));
    out.push_str(&format!("{KEY_NAME} {}\n", descriptor.name));
    out.push_str(&format!("{KEY_ORDER} {}\n", descriptor.order));
    out.push_str(&format!("{KEY_SFREQ} {}\n", descriptor.sampling_frequency));
    for coefficient in &descriptor.coefficients {
        out.push_str(&format!("{coefficient}\n"));
    }
    out
}
