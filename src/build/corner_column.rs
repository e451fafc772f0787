use crate::math::Point3;
use crate::mesh::{MeshSurface, VertexId};
use crate::plan::Segmentation;

/// A surface vertex handle together with the position it was minted at.
///
/// Builders thread these through the pipeline so nothing ever needs to
/// read geometry back from the mesh surface.
#[derive(Debug, Clone, Copy)]
pub struct AnchoredVertex {
    /// Handle of the vertex in the mesh surface.
    pub id: VertexId,
    /// Position the vertex was created at.
    pub position: Point3,
}

/// A vertical stack of vertices at one footprint corner, one per height
/// segment boundary, bottom to top.
///
/// Owned by the assembler for the duration of one generation and consumed
/// by the wall builders.
#[derive(Debug, Clone, Default)]
pub struct CornerColumn {
    /// Column vertices, ordered by ascending z.
    pub points: Vec<AnchoredVertex>,
}

impl CornerColumn {
    /// Number of vertices in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the column has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The base (z = 0) vertex, if any.
    #[must_use]
    pub fn base(&self) -> Option<&AnchoredVertex> {
        self.points.first()
    }

    /// The topmost vertex, if any.
    #[must_use]
    pub fn top(&self) -> Option<&AnchoredVertex> {
        self.points.last()
    }
}

/// Expands a height segmentation into a corner column at `(x, y)`.
#[derive(Debug)]
pub struct BuildCornerColumn<'a> {
    x: f64,
    y: f64,
    height_segments: &'a Segmentation,
}

impl<'a> BuildCornerColumn<'a> {
    /// Creates a new corner-column build operation.
    #[must_use]
    pub fn new(x: f64, y: f64, height_segments: &'a Segmentation) -> Self {
        Self {
            x,
            y,
            height_segments,
        }
    }

    /// Executes the operation, minting the column's vertices on `surface`.
    ///
    /// Starts at `z = 0` and accumulates one vertex per segment boundary;
    /// the column always has one vertex more than there are segments.
    pub fn execute<S: MeshSurface>(&self, surface: &mut S) -> CornerColumn {
        let mut points = Vec::with_capacity(self.height_segments.len() + 1);
        let mut z = 0.0;

        let base = Point3::new(self.x, self.y, z);
        points.push(AnchoredVertex {
            id: surface.create_vertex(base),
            position: base,
        });

        for segment in self.height_segments {
            z += segment.length;
            let position = Point3::new(self.x, self.y, z);
            points.push(AnchoredVertex {
                id: surface.create_vertex(position),
                position,
            });
        }

        CornerColumn { points }
    }
}
