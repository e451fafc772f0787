use std::collections::HashSet;

use crate::error::Result;
use crate::math::hull_2d::convex_hull_indices;
use crate::mesh::{FaceId, MeshSurface, VertexId};

use super::corner_column::AnchoredVertex;

/// Default |z - total height| tolerance for [`RoofStrategy::ToleranceHull`].
pub const ROOF_HEIGHT_TOLERANCE: f64 = 0.05;

/// How the top boundary of the four walls is closed into a cap face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoofStrategy {
    /// Stitch the cap from the traversal-ordered top boundary loop,
    /// deduplicated with first occurrence kept. Correct for any footprint
    /// whose walls are traversed in a consistent rotational order; the
    /// default.
    OrderedLoop,
    /// Select every vertex within `tolerance` of the total building
    /// height and cap with the convex hull of that set. Only correct for
    /// convex footprints, and sensitive to the tolerance picking up (or
    /// dropping) vertices near floating-point boundaries; kept as the
    /// legacy alternative.
    ToleranceHull {
        /// Absolute z tolerance, meters.
        tolerance: f64,
    },
}

impl Default for RoofStrategy {
    fn default() -> Self {
        Self::OrderedLoop
    }
}

/// Closes the top boundary of the walls into a single cap face.
#[derive(Debug)]
pub struct BuildRoofCap<'a> {
    strategy: RoofStrategy,
    boundary_loop: &'a [VertexId],
    candidates: &'a [AnchoredVertex],
    total_height: f64,
}

impl<'a> BuildRoofCap<'a> {
    /// Creates a new roof-cap build operation.
    ///
    /// `boundary_loop` is the traversal-ordered top boundary (corner tops
    /// interleaved with each wall's top row) used by
    /// [`RoofStrategy::OrderedLoop`]; `candidates` and `total_height`
    /// feed [`RoofStrategy::ToleranceHull`].
    #[must_use]
    pub fn new(
        strategy: RoofStrategy,
        boundary_loop: &'a [VertexId],
        candidates: &'a [AnchoredVertex],
        total_height: f64,
    ) -> Self {
        Self {
            strategy,
            boundary_loop,
            candidates,
            total_height,
        }
    }

    /// Executes the operation.
    ///
    /// Returns the cap face, or `None` when fewer than 3 distinct
    /// boundary vertices remain (a skipped roof, not an error).
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh surface rejects the cap face.
    pub fn execute<S: MeshSurface>(&self, surface: &mut S) -> Result<Option<FaceId>> {
        let ring = match self.strategy {
            RoofStrategy::OrderedLoop => dedup_keep_first(self.boundary_loop),
            RoofStrategy::ToleranceHull { tolerance } => {
                self.hull_of_top_vertices(tolerance)
            }
        };

        if ring.len() <= 2 {
            return Ok(None);
        }
        surface.create_face(&ring).map(Some)
    }

    fn hull_of_top_vertices(&self, tolerance: f64) -> Vec<VertexId> {
        let mut seen = HashSet::new();
        let top: Vec<&AnchoredVertex> = self
            .candidates
            .iter()
            .filter(|v| (v.position.z - self.total_height).abs() <= tolerance)
            .filter(|v| seen.insert(v.id))
            .collect();

        let positions: Vec<_> = top.iter().map(|v| v.position).collect();
        convex_hull_indices(&positions)
            .into_iter()
            .map(|i| top[i].id)
            .collect()
    }
}

/// Removes duplicate vertices, keeping the first occurrence in order.
fn dedup_keep_first(ids: &[VertexId]) -> Vec<VertexId> {
    let mut seen = HashSet::new();
    ids.iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}
