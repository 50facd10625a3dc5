//! Envelope layout model
//!
//! Derived measurements for an envelope on the punch board. Computed per
//! call and never stored.

/// Computed layout for an envelope: how big to cut the paper and where to
/// place it against the punch pin. Both values are in the same unit as the
/// dimensions they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeLayout {
    /// Side length of the square sheet to cut
    pub paper_size: f64,
    /// Distance from the paper corner to the punch pin
    pub punch_location: f64,
}
