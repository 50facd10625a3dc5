//! Envelope geometry service
//!
//! Computes paper size and punch-pin location for an envelope folded on a
//! square punch board. The content rectangle sits at 45° on the sheet, so
//! each dimension projects onto the board diagonal before margins apply.

use crate::models::EnvelopeLayout;

/// Margin allowance around the content, in the caller's units.
const BASE_MARGIN: f64 = 1.1;

/// Additional allowance for loose-fitting envelopes.
const LOOSE_EXTRA: f64 = 0.4;

/// 1/sqrt(2) as a fixed literal; the projection must not drift with the
/// platform's sqrt implementation.
const DIAGONAL_FACTOR: f64 = 0.707106781187;

/// Calculate the paper size and punch location for an envelope
///
/// Symmetric in `length`/`width`. The `mini` flag is accepted but does not
/// currently alter the margin.
pub fn calculate(length: f64, width: f64, loose: bool, mini: bool) -> EnvelopeLayout {
    // TODO: incorporate the mini punch board margin table
    let mut margin = BASE_MARGIN;
    if loose {
        margin += LOOSE_EXTRA;
    }

    let dist1 = length * DIAGONAL_FACTOR;
    let dist2 = width * DIAGONAL_FACTOR;

    tracing::debug!(margin, dist1, dist2, loose, mini, "projected envelope dimensions");

    EnvelopeLayout {
        paper_size: dist1 + dist2 + 2.0 * margin,
        punch_location: margin + dist1.min(dist2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.01;

    #[test]
    fn test_loose_10x8() {
        let layout = calculate(10.0, 8.0, true, false);

        assert!((layout.paper_size - 15.73).abs() < TOLERANCE);
        assert!((layout.punch_location - 7.16).abs() < TOLERANCE);
    }

    #[test]
    fn test_symmetric_in_length_and_width() {
        let a = calculate(10.0, 8.0, true, false);
        let b = calculate(8.0, 10.0, true, false);

        assert_eq!(a, b);
    }

    #[test]
    fn test_snug_margin() {
        let snug = calculate(10.0, 8.0, false, false);
        let loose = calculate(10.0, 8.0, true, false);

        // Loose adds 0.4 to the margin: paper grows by 0.8, punch by 0.4
        assert!((loose.paper_size - snug.paper_size - 0.8).abs() < TOLERANCE);
        assert!((loose.punch_location - snug.punch_location - 0.4).abs() < TOLERANCE);
    }

    #[test]
    fn test_mini_flag_is_inert() {
        let standard = calculate(10.0, 8.0, true, false);
        let mini = calculate(10.0, 8.0, true, true);

        assert_eq!(standard, mini);
    }

    #[test]
    fn test_punch_inside_paper() {
        for loose in [false, true] {
            for length in [0.5, 1.0, 4.2, 10.0, 29.7, 100.0] {
                for width in [0.5, 2.0, 8.0, 21.0, 100.0] {
                    let layout = calculate(length, width, loose, false);
                    assert!(
                        layout.punch_location < layout.paper_size,
                        "punch {} not inside paper {} for {}x{}",
                        layout.punch_location,
                        layout.paper_size,
                        length,
                        width
                    );
                }
            }
        }
    }
}
