//! Core domain types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter category, as recorded in a descriptor file.
///
/// Reading is permissive: a label this library does not recognize is kept
/// verbatim in [`FilterKind::Other`], so files written by newer tools still
/// load. Writing is strict: recognized categories always serialize to their
/// canonical labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    HighPass,
    LowPass,
    BandPass,
    /// An unrecognized category label, preserved as-is.
    ///
    /// No semantic round-trip is guaranteed for these: an `Other` holding a
    /// known alias (say `"hpf"`) re-reads as the recognized category.
    Other(String),
}

impl FilterKind {
    /// Map a stored label to a category. Case-insensitive, and accepts the
    /// short forms (`HPF`/`LPF`/`BPF`) older filter files use.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "high-pass" | "highpass" | "hpf" => FilterKind::HighPass,
            "low-pass" | "lowpass" | "lpf" => FilterKind::LowPass,
            "band-pass" | "bandpass" | "bpf" => FilterKind::BandPass,
            _ => FilterKind::Other(label.to_string()),
        }
    }

    /// The label written to file: canonical for recognized categories,
    /// verbatim for [`FilterKind::Other`].
    pub fn label(&self) -> &str {
        match self {
            FilterKind::HighPass => "high-pass",
            FilterKind::LowPass => "low-pass",
            FilterKind::BandPass => "band-pass",
            FilterKind::Other(label) => label,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One FIR filter as persisted: tap coefficients plus identifying metadata.
///
/// A descriptor is a plain value object. It is produced in memory by a
/// filter-design stage, or read from disk with [`read_filter`]; applying
/// the taps to a signal is someone else's job.
///
/// [`read_filter`]: crate::read_filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    /// Filter category (high-pass, low-pass, band-pass, or preserved text).
    pub kind: FilterKind,
    /// Human-readable filter name. Free text; not required to be unique.
    pub name: String,
    /// Filter order. A valid descriptor has `order + 1` coefficients.
    pub order: usize,
    /// Sampling frequency (Hz) the taps were designed for. Positive.
    pub sampling_frequency: f64,
    /// Tap weights in application order: index 0 is the first tap.
    pub coefficients: Vec<f64>,
}

impl FilterDescriptor {
    /// Build a descriptor with `order` derived from the coefficient count,
    /// so the count invariant holds by construction. An empty coefficient
    /// vector has no valid order (a filter holds at least one tap) and
    /// yields an inconsistent descriptor.
    pub fn new(
        kind: FilterKind,
        name: impl Into<String>,
        sampling_frequency: f64,
        coefficients: Vec<f64>,
    ) -> Self {
        let order = coefficients.len().saturating_sub(1);
        Self {
            kind,
            name: name.into(),
            order,
            sampling_frequency,
            coefficients,
        }
    }

    /// Number of taps (`coefficients.len()`).
    pub fn tap_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the descriptor satisfies the file-format invariants:
    /// `order + 1` coefficients and a positive, finite sampling frequency.
    ///
    /// [`write_filter`] does not call this. An inconsistent descriptor is
    /// written exactly as given, and the inconsistency surfaces when the
    /// file is read back.
    ///
    /// [`write_filter`]: crate::write_filter
    pub fn is_consistent(&self) -> bool {
        let count = self.coefficients.len();
        count > 0
            && count - 1 == self.order
            && self.sampling_frequency.is_finite()
            && self.sampling_frequency > 0.0
    }
}
