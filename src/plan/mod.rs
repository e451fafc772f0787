mod height_segments;
mod segment;
mod wall_segments;

pub use height_segments::{HeightPlan, PlanHeightSegments};
pub use segment::{Segment, SegmentRole, Segmentation};
pub use wall_segments::PlanWallSegments;
