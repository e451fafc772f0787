use crate::error::Result;
use crate::math::TOLERANCE;
use crate::mesh::{FaceId, MeshSurface, VertexId};
use crate::plan::Segmentation;

use super::corner_column::{AnchoredVertex, CornerColumn};

/// How deep window facets are recessed into the wall, meters.
pub const WINDOW_INSET_DEPTH: f64 = 0.2;

/// Geometry produced by one wall: its quad-grid faces, the subset that
/// was recessed as windows, and the vertices needed by later stages.
#[derive(Debug, Clone, Default)]
pub struct WallGeometry {
    /// All grid faces of the wall, row-major from the bottom.
    pub faces: Vec<FaceId>,
    /// The window facets (recessed after creation). A grid cell is a
    /// window iff both its row and its column are window-tagged.
    pub window_faces: Vec<FaceId>,
    /// Interior vertices of the topmost row, in traversal order; the roof
    /// loop is stitched from these.
    pub top_row: Vec<VertexId>,
    /// Every interior vertex this wall minted, with its position. Feeds
    /// the tolerance-hull roof strategy.
    pub minted: Vec<AnchoredVertex>,
}

/// Builds the quad-grid surface between two corner columns, recessing
/// window facets.
///
/// The grid has one row per height segment and one column per wall
/// segment. Interior vertices are minted only along interior column
/// boundaries; the last column closes the grid against the end corner
/// column, so adjacent walls share their corner vertices.
#[derive(Debug)]
pub struct BuildWall<'a> {
    wall_segments: &'a Segmentation,
    height_segments: &'a Segmentation,
    start: &'a CornerColumn,
    end: &'a CornerColumn,
}

impl<'a> BuildWall<'a> {
    /// Creates a new wall build operation.
    #[must_use]
    pub fn new(
        wall_segments: &'a Segmentation,
        height_segments: &'a Segmentation,
        start: &'a CornerColumn,
        end: &'a CornerColumn,
    ) -> Self {
        Self {
            wall_segments,
            height_segments,
            start,
            end,
        }
    }

    /// Executes the operation.
    ///
    /// Quads wind `(top-right, bottom-right, bottom-left, top-left)`
    /// looking along the wall, consistent across all four walls when they
    /// are traversed in rotational order around the footprint. After the
    /// grid is complete, normals are recomputed and the window facets are
    /// inset by [`WINDOW_INSET_DEPTH`] into the wall.
    ///
    /// Degenerate inputs (a column with fewer than 2 points, fewer than 2
    /// wall segments, coincident columns) produce an empty
    /// [`WallGeometry`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh surface rejects a face.
    pub fn execute<S: MeshSurface>(&self, surface: &mut S) -> Result<WallGeometry> {
        let cols = self.wall_segments.len();
        if self.start.len() < 2 || self.end.len() < 2 || cols < 2 {
            return Ok(WallGeometry::default());
        }
        let rows = self.start.len().min(self.end.len()) - 1;

        let (Some(start_base), Some(end_base)) = (self.start.base(), self.end.base()) else {
            return Ok(WallGeometry::default());
        };
        let span = end_base.position - start_base.position;
        let span_length = span.norm();
        if span_length < TOLERANCE {
            return Ok(WallGeometry::default());
        }
        let dir = span / span_length;

        let mut geometry = WallGeometry::default();
        // Interior vertices along the boundary below the current row.
        let mut prev_row: Vec<AnchoredVertex> = Vec::new();

        for r in 0..rows {
            let row_is_window = self.height_segments.is_window(r);
            let bottom_start = self.start.points[r];
            let top_start = self.start.points[r + 1];
            let bottom_end = self.end.points[r];
            let top_end = self.end.points[r + 1];

            let mut new_row: Vec<AnchoredVertex> = Vec::with_capacity(cols - 1);
            let mut prev_top = top_start;
            let mut prev_bottom = bottom_start;
            let mut offset = 0.0;

            for (j, segment) in self.wall_segments.iter().enumerate() {
                offset += segment.length;

                let (top, bottom) = if j + 1 < cols {
                    let top_pos = top_start.position + dir * offset;
                    let top = AnchoredVertex {
                        id: surface.create_vertex(top_pos),
                        position: top_pos,
                    };
                    new_row.push(top);
                    geometry.minted.push(top);

                    let bottom = if r == 0 {
                        let pos = bottom_start.position + dir * offset;
                        let minted = AnchoredVertex {
                            id: surface.create_vertex(pos),
                            position: pos,
                        };
                        geometry.minted.push(minted);
                        minted
                    } else {
                        prev_row[j]
                    };
                    (top, bottom)
                } else {
                    (top_end, bottom_end)
                };

                let face =
                    surface.create_face(&[top.id, bottom.id, prev_bottom.id, prev_top.id])?;
                geometry.faces.push(face);
                if row_is_window && self.wall_segments.is_window(j) {
                    geometry.window_faces.push(face);
                }
                prev_top = top;
                prev_bottom = bottom;
            }
            prev_row = new_row;
        }

        surface.recompute_normals();
        surface.inset_faces(&geometry.window_faces, -WINDOW_INSET_DEPTH)?;
        geometry.top_row = prev_row.iter().map(|v| v.id).collect();
        Ok(geometry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::MeshBuffer;
    use crate::plan::{PlanHeightSegments, PlanWallSegments, Segmentation};
    use slotmap::SlotMap;

    use crate::build::corner_column::BuildCornerColumn;

    fn column(
        buffer: &mut impl MeshSurface,
        x: f64,
        y: f64,
        segments: &Segmentation,
    ) -> CornerColumn {
        BuildCornerColumn::new(x, y, segments).execute(buffer)
    }

    // ── Grid shape ─────────────────────────────────────────────

    #[test]
    fn single_level_wall_grid() {
        let plan = PlanHeightSegments::new(1, 3.0, 2.5, 1.46, 1.0).execute();
        let layout = PlanWallSegments::new(10.0, 1.46, 1.5, 3.0).execute();
        assert_eq!(layout.len(), 3);

        let mut buffer = MeshBuffer::new();
        let start = column(&mut buffer, 0.0, 0.0, &plan.segments);
        let end = column(&mut buffer, 10.0, 0.0, &plan.segments);

        let wall = BuildWall::new(&layout, &plan.segments, &start, &end)
            .execute(&mut buffer)
            .unwrap();

        // 3 rows x 3 columns of quads, one of which is the window cell.
        assert_eq!(wall.faces.len(), 9);
        assert_eq!(wall.window_faces.len(), 1);
        assert_eq!(wall.top_row.len(), 2);
        // Interior lattice: (rows + 1) boundaries x 2 interior columns.
        assert_eq!(wall.minted.len(), 8);
        // Buffer additionally holds 2 corner columns of 4 vertices each
        // and the 4 rim vertices minted by the window inset.
        assert_eq!(buffer.vertex_count(), 8 + 8 + 4);
        assert_eq!(buffer.face_count(), 9 + 4);
    }

    #[test]
    fn window_rows_match_level_count() {
        let levels = 3;
        let plan = PlanHeightSegments::new(levels, 3.0, 2.5, 1.46, 1.0).execute();
        let layout = PlanWallSegments::new(30.0, 1.46, 1.5, 3.0).execute();
        let windows_per_row = layout
            .iter()
            .filter(|s| s.role == crate::plan::SegmentRole::Window)
            .count();

        let mut buffer = MeshBuffer::new();
        let start = column(&mut buffer, 0.0, 0.0, &plan.segments);
        let end = column(&mut buffer, 30.0, 0.0, &plan.segments);

        let wall = BuildWall::new(&layout, &plan.segments, &start, &end)
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(
            wall.window_faces.len(),
            windows_per_row * levels as usize,
            "every level contributes one row of window facets"
        );
    }

    // ── Degenerate walls ───────────────────────────────────────

    #[test]
    fn degenerate_column_is_a_no_op() {
        let layout = PlanWallSegments::new(10.0, 1.46, 1.5, 3.0).execute();
        let heights = Segmentation::new();

        let mut buffer = MeshBuffer::new();
        let start = column(&mut buffer, 0.0, 0.0, &heights);
        let end = column(&mut buffer, 10.0, 0.0, &heights);

        let wall = BuildWall::new(&layout, &heights, &start, &end)
            .execute(&mut buffer)
            .unwrap();
        assert!(wall.faces.is_empty());
        assert!(wall.top_row.is_empty());
    }

    #[test]
    fn coincident_columns_are_a_no_op() {
        let plan = PlanHeightSegments::new(1, 3.0, 2.5, 1.46, 1.0).execute();
        let layout = PlanWallSegments::new(10.0, 1.46, 1.5, 3.0).execute();

        let mut buffer = MeshBuffer::new();
        let start = column(&mut buffer, 2.0, 2.0, &plan.segments);
        let end = column(&mut buffer, 2.0, 2.0, &plan.segments);

        let wall = BuildWall::new(&layout, &plan.segments, &start, &end)
            .execute(&mut buffer)
            .unwrap();
        assert!(wall.faces.is_empty());
    }

    // ── Surface interaction ────────────────────────────────────

    /// A mesh-surface double that mints handles and records the calls the
    /// wall builder makes, without building any geometry.
    #[derive(Default)]
    struct RecordingSurface {
        vertices: SlotMap<VertexId, Point3>,
        faces: SlotMap<FaceId, Vec<VertexId>>,
        events: Vec<Event>,
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        RecomputeNormals,
        Inset { count: usize, depth: f64 },
    }

    impl MeshSurface for RecordingSurface {
        fn create_vertex(&mut self, point: Point3) -> VertexId {
            self.vertices.insert(point)
        }

        fn create_face(&mut self, vertices: &[VertexId]) -> crate::Result<FaceId> {
            Ok(self.faces.insert(vertices.to_vec()))
        }

        fn inset_faces(&mut self, faces: &[FaceId], depth: f64) -> crate::Result<()> {
            self.events.push(Event::Inset {
                count: faces.len(),
                depth,
            });
            Ok(())
        }

        fn recompute_normals(&mut self) {
            self.events.push(Event::RecomputeNormals);
        }
    }

    #[test]
    fn normals_are_recomputed_before_the_inset() {
        let plan = PlanHeightSegments::new(1, 3.0, 2.5, 1.46, 1.0).execute();
        let layout = PlanWallSegments::new(10.0, 1.46, 1.5, 3.0).execute();

        let mut surface = RecordingSurface::default();
        let start = column(&mut surface, 0.0, 0.0, &plan.segments);
        let end = column(&mut surface, 10.0, 0.0, &plan.segments);

        BuildWall::new(&layout, &plan.segments, &start, &end)
            .execute(&mut surface)
            .unwrap();

        assert_eq!(
            surface.events,
            vec![
                Event::RecomputeNormals,
                Event::Inset {
                    count: 1,
                    depth: -WINDOW_INSET_DEPTH
                }
            ]
        );
    }
}
