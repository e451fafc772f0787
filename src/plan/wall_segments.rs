use super::{Segment, SegmentRole, Segmentation};

/// Plans the horizontal layout of one wall: end gaps, windows and the
/// intervals between them.
///
/// The wall fits as many `(window + interval)` repeats as the length
/// allows while keeping at least `min_gap` at both ends; whatever length
/// remains is split evenly between the two end gaps. The layout therefore
/// always sums to exactly the wall length, trading gap uniformity for
/// window-size fidelity.
#[derive(Debug)]
pub struct PlanWallSegments {
    length: f64,
    window_width: f64,
    interval_width: f64,
    min_gap: f64,
}

impl PlanWallSegments {
    /// Creates a new wall-layout plan.
    #[must_use]
    pub fn new(length: f64, window_width: f64, interval_width: f64, min_gap: f64) -> Self {
        Self {
            length,
            window_width,
            interval_width,
            min_gap,
        }
    }

    /// Executes the plan.
    ///
    /// Produces `[gap, window, interval, .., window, gap]`, `2 * count + 3`
    /// segments, where `count` is the largest number of `(window + interval)`
    /// repeats that still leaves `min_gap` at each end. Walls too short for
    /// a single properly-gapped window degenerate to `[gap, window, gap]`
    /// with a possibly negative gap; this is not an error, it propagates
    /// as inverted faces downstream.
    #[must_use]
    pub fn execute(&self) -> Segmentation {
        let pitch = self.window_width + self.interval_width;
        let count = ((self.length - (self.window_width + self.min_gap * 2.0)) / pitch).floor();

        // Clamp the repeat count at zero, then derive the gap from the
        // clamped count so the lengths still sum to the full wall length.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let repeats = if count > 0.0 { count as usize } else { 0 };

        #[allow(clippy::cast_precision_loss)]
        let real_gap = (self.length - pitch * repeats as f64 - self.window_width) / 2.0;

        let mut layout = Segmentation::new();
        layout.push(Segment::new(real_gap, SegmentRole::Gap));
        for _ in 0..repeats {
            layout.push(Segment::new(self.window_width, SegmentRole::Window));
            layout.push(Segment::new(self.interval_width, SegmentRole::Interval));
        }
        layout.push(Segment::new(self.window_width, SegmentRole::Window));
        layout.push(Segment::new(real_gap, SegmentRole::Gap));
        layout
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── Segment-sum invariant ──────────────────────────────────

    #[test]
    fn lengths_sum_to_wall_length() {
        for &length in &[10.0, 13.7, 30.0, 100.0] {
            let layout = PlanWallSegments::new(length, 1.46, 1.5, 3.0).execute();
            assert_relative_eq!(layout.total_length(), length, epsilon = 1e-6);
        }
    }

    #[test]
    fn thirty_meter_wall_layout() {
        // count = floor((30 - (1.46 + 6)) / 2.96) = 7
        let layout = PlanWallSegments::new(30.0, 1.46, 1.5, 3.0).execute();
        assert_eq!(layout.len(), 2 * 7 + 3);
        let gap = layout.get(0).unwrap();
        assert_eq!(gap.role, SegmentRole::Gap);
        assert_relative_eq!(gap.length, 3.91, epsilon = 1e-6);
        assert!(gap.length >= 3.0, "end gap must honor the minimum");
    }

    // ── Window parity ──────────────────────────────────────────

    #[test]
    fn windows_sit_at_odd_positions() {
        let layout = PlanWallSegments::new(10.0, 1.46, 1.5, 3.0).execute();
        for (i, seg) in layout.iter().enumerate() {
            if i == 0 || i == layout.len() - 1 {
                assert_eq!(seg.role, SegmentRole::Gap, "position {i}");
            } else if i % 2 == 1 {
                assert_eq!(seg.role, SegmentRole::Window, "position {i}");
            } else {
                assert_eq!(seg.role, SegmentRole::Interval, "position {i}");
            }
        }
    }

    #[test]
    fn interior_segment_count_is_odd() {
        let layout = PlanWallSegments::new(30.0, 1.46, 1.5, 3.0).execute();
        let interior = layout.len() - 2;
        assert_eq!(interior % 2, 1, "window/interval run must end on a window");
    }

    // ── Degenerate spans ───────────────────────────────────────

    #[test]
    fn short_wall_degenerates_to_three_segments() {
        let layout = PlanWallSegments::new(2.0, 1.46, 1.5, 3.0).execute();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.get(0).unwrap().role, SegmentRole::Gap);
        assert_eq!(layout.get(1).unwrap().role, SegmentRole::Window);
        assert_eq!(layout.get(2).unwrap().role, SegmentRole::Gap);
        assert_relative_eq!(layout.total_length(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn wall_narrower_than_window_gets_negative_gaps() {
        let layout = PlanWallSegments::new(1.0, 1.46, 1.5, 3.0).execute();
        assert_eq!(layout.len(), 3);
        assert!(layout.get(0).unwrap().length < 0.0);
        assert_relative_eq!(layout.total_length(), 1.0, epsilon = 1e-6);
    }

    // ── Determinism ────────────────────────────────────────────

    #[test]
    fn replanning_is_idempotent() {
        let a = PlanWallSegments::new(30.0, 1.46, 1.5, 3.0).execute();
        let b = PlanWallSegments::new(30.0, 1.46, 1.5, 3.0).execute();
        assert_eq!(a, b);
    }
}
