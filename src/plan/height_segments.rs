use super::{Segment, SegmentRole, Segmentation};

/// A vertical segmentation together with the building height it spans.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightPlan {
    /// Floor-by-floor vertical layout, bottom to top.
    pub segments: Segmentation,
    /// Sum of all segment lengths: the total building height.
    pub total_height: f64,
}

/// Plans the vertical layout of the building: bottom gap, then one
/// `(band, window)` pair per level, closed by the top gap.
///
/// The first level's band is the bottom gap; every later level is
/// separated from the window below by `level_height - window_height`.
#[derive(Debug)]
pub struct PlanHeightSegments {
    levels: u32,
    level_height: f64,
    bottom_gap: f64,
    window_height: f64,
    top_gap: f64,
}

impl PlanHeightSegments {
    /// Creates a new height-layout plan.
    #[must_use]
    pub fn new(
        levels: u32,
        level_height: f64,
        bottom_gap: f64,
        window_height: f64,
        top_gap: f64,
    ) -> Self {
        Self {
            levels,
            level_height,
            bottom_gap,
            window_height,
            top_gap,
        }
    }

    /// Executes the plan, returning the segmentation and its running total.
    ///
    /// Lengths are real-valued meters; no rounding is applied. Inputs are
    /// not validated: a window taller than its level yields a negative
    /// band, propagated downstream as degenerate geometry.
    #[must_use]
    pub fn execute(&self) -> HeightPlan {
        let mut segments = Segmentation::new();
        let mut total_height = 0.0;

        for i in 0..self.levels {
            let band = if i == 0 {
                Segment::new(self.bottom_gap, SegmentRole::Gap)
            } else {
                Segment::new(self.level_height - self.window_height, SegmentRole::Band)
            };
            total_height += band.length;
            segments.push(band);

            let window = Segment::new(self.window_height, SegmentRole::Window);
            total_height += window.length;
            segments.push(window);

            if i == self.levels - 1 {
                let top = Segment::new(self.top_gap, SegmentRole::Gap);
                total_height += top.length;
                segments.push(top);
            }
        }

        HeightPlan {
            segments,
            total_height,
        }
    }
}
