use crate::error::{GenerationError, Result};
use crate::mesh::{FaceId, MeshSurface, VertexId};
use crate::plan::{PlanHeightSegments, PlanWallSegments};

use super::corner_column::{AnchoredVertex, BuildCornerColumn};
use super::roof::{BuildRoofCap, RoofStrategy};
use super::wall::{BuildWall, WallGeometry};

/// The full architectural parameter set of one building. All lengths are
/// meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingParameters {
    /// Footprint size along X.
    pub size_x: f64,
    /// Footprint size along Y.
    pub size_y: f64,
    /// Number of levels, at least 1.
    pub levels: u32,
    /// Height of one level.
    pub level_height: f64,
    /// Window width.
    pub window_width: f64,
    /// Window height.
    pub window_height: f64,
    /// Horizontal interval between two windows on the same floor.
    pub interval_width: f64,
    /// Minimum left/right end gap of a wall.
    pub min_gap: f64,
    /// Gap above the top row of windows.
    pub top_gap: f64,
    /// Gap below the bottom row of windows.
    pub bottom_gap: f64,
}

impl Default for BuildingParameters {
    fn default() -> Self {
        Self {
            size_x: 30.0,
            size_y: 10.0,
            levels: 3,
            level_height: 3.0,
            window_width: 1.46,
            window_height: 1.46,
            interval_width: 1.5,
            min_gap: 3.0,
            top_gap: 1.0,
            bottom_gap: 2.5,
        }
    }
}

impl BuildingParameters {
    /// Checks the parameter ranges before any geometry is generated.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ParameterOutOfRange`] for a
    /// non-positive length or a zero level count.
    pub fn validate(&self) -> std::result::Result<(), GenerationError> {
        let lengths = [
            ("size_x", self.size_x),
            ("size_y", self.size_y),
            ("level_height", self.level_height),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("interval_width", self.interval_width),
            ("min_gap", self.min_gap),
            ("top_gap", self.top_gap),
            ("bottom_gap", self.bottom_gap),
        ];
        for (parameter, value) in lengths {
            if value <= 0.0 {
                return Err(GenerationError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: f64::MIN_POSITIVE,
                });
            }
        }
        if self.levels < 1 {
            return Err(GenerationError::ParameterOutOfRange {
                parameter: "levels",
                value: f64::from(self.levels),
                min: 1.0,
            });
        }
        Ok(())
    }
}

/// The handles produced by one building generation.
#[derive(Debug, Clone, Default)]
pub struct BuildingGeometry {
    /// The four walls, in traversal order around the footprint.
    pub walls: Vec<WallGeometry>,
    /// The roof cap face, if the boundary loop had at least 3 distinct
    /// vertices.
    pub roof_face: Option<FaceId>,
    /// Total building height.
    pub total_height: f64,
}

/// Orchestrates the full pipeline: parameters, segmentations, corner
/// columns, four walls and the roof cap, all written to one mesh surface.
///
/// A single linear pass with no retries and no state across invocations;
/// every call starts from the scalar parameters.
#[derive(Debug)]
pub struct GenerateBuilding {
    params: BuildingParameters,
    origin_x: f64,
    origin_y: f64,
    roof_strategy: RoofStrategy,
}

impl GenerateBuilding {
    /// Creates a new building generation, footprint centered on
    /// `(origin_x, origin_y)`, with the default roof strategy.
    #[must_use]
    pub fn new(params: BuildingParameters, origin_x: f64, origin_y: f64) -> Self {
        Self {
            params,
            origin_x,
            origin_y,
            roof_strategy: RoofStrategy::default(),
        }
    }

    /// Selects the roof capping strategy.
    #[must_use]
    pub fn with_roof_strategy(mut self, strategy: RoofStrategy) -> Self {
        self.roof_strategy = strategy;
        self
    }

    /// Executes the pipeline.
    ///
    /// The caller finalizes the surface afterwards; the returned
    /// [`BuildingGeometry`] only carries handles for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ParameterOutOfRange`] for invalid
    /// parameters (checked before anything is written), or a mesh error
    /// if the surface rejects geometry.
    pub fn execute<S: MeshSurface>(&self, surface: &mut S) -> Result<BuildingGeometry> {
        let p = &self.params;
        p.validate()?;

        let cols_x =
            PlanWallSegments::new(p.size_x, p.window_width, p.interval_width, p.min_gap).execute();
        let cols_y =
            PlanWallSegments::new(p.size_y, p.window_width, p.interval_width, p.min_gap).execute();
        let heights = PlanHeightSegments::new(
            p.levels,
            p.level_height,
            p.bottom_gap,
            p.window_height,
            p.top_gap,
        )
        .execute();

        let x0 = self.origin_x - p.size_x / 2.0;
        let y0 = self.origin_y - p.size_y / 2.0;
        let c00 = BuildCornerColumn::new(x0, y0, &heights.segments).execute(surface);
        let c10 = BuildCornerColumn::new(x0 + p.size_x, y0, &heights.segments).execute(surface);
        let c01 = BuildCornerColumn::new(x0, y0 + p.size_y, &heights.segments).execute(surface);
        let c11 =
            BuildCornerColumn::new(x0 + p.size_x, y0 + p.size_y, &heights.segments).execute(surface);

        // Rotational order around the footprint keeps the windings of the
        // four walls consistent and the roof loop free of crossings.
        let traversal = [
            (&cols_y, &c00, &c01),
            (&cols_x, &c01, &c11),
            (&cols_y, &c11, &c10),
            (&cols_x, &c10, &c00),
        ];

        let mut walls = Vec::with_capacity(4);
        let mut boundary_loop: Vec<VertexId> = Vec::new();
        let mut candidates: Vec<AnchoredVertex> = Vec::new();
        for column in [&c00, &c10, &c01, &c11] {
            if let Some(top) = column.top() {
                candidates.push(*top);
            }
        }

        for (layout, start, end) in traversal {
            if let Some(top) = start.top() {
                boundary_loop.push(top.id);
            }
            let wall = BuildWall::new(layout, &heights.segments, start, end).execute(surface)?;
            boundary_loop.extend_from_slice(&wall.top_row);
            candidates.extend_from_slice(&wall.minted);
            walls.push(wall);
        }

        let roof_face = BuildRoofCap::new(
            self.roof_strategy,
            &boundary_loop,
            &candidates,
            heights.total_height,
        )
        .execute(surface)?;

        surface.recompute_normals();

        Ok(BuildingGeometry {
            walls,
            roof_face,
            total_height: heights.total_height,
        })
    }
}
