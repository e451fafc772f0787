/// The role a segment plays within its span.
///
/// Roles are assigned once by the planners and consumed as-is downstream;
/// a wall cell is recessed as a window exactly when both its row and its
/// column carry [`SegmentRole::Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    /// Edge padding: the end gaps of a wall, or the bottom/top gaps of the
    /// height span.
    Gap,
    /// A window strip, in either axis.
    Window,
    /// Horizontal spacing between two windows on the same floor.
    Interval,
    /// Vertical wall strip between one floor's window and the next.
    Band,
}

/// A tagged length (meters) within a [`Segmentation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment length in meters. May be zero or negative for degenerate
    /// plans; the planners do not validate their inputs.
    pub length: f64,
    /// The role of this segment.
    pub role: SegmentRole,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(length: f64, role: SegmentRole) -> Self {
        Self { length, role }
    }
}

/// An ordered, length-summing decomposition of a span into tagged segments.
///
/// Invariant: the segment lengths sum to the span the plan was computed
/// for, within floating tolerance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    segments: Vec<Segment>,
}

impl Segmentation {
    /// Creates a new, empty segmentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Iterates over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Sum of all segment lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Returns `true` if the segment at `index` exists and is window-tagged.
    #[must_use]
    pub fn is_window(&self, index: usize) -> bool {
        self.segments
            .get(index)
            .is_some_and(|s| s.role == SegmentRole::Window)
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
