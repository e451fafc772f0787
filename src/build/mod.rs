mod building;
mod corner_column;
mod roof;
mod wall;

pub use building::{BuildingGeometry, BuildingParameters, GenerateBuilding};
pub use corner_column::{AnchoredVertex, BuildCornerColumn, CornerColumn};
pub use roof::{BuildRoofCap, RoofStrategy, ROOF_HEIGHT_TOLERANCE};
pub use wall::{BuildWall, WallGeometry, WINDOW_INSET_DEPTH};
