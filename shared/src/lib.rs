pub mod colors;
pub mod divisions;
pub mod geo;
pub mod league;
pub mod offsets;
pub mod regions;
pub mod team;

pub use colors::line_color;
pub use divisions::{Division, DivisionPath, group_divisions, resolve_path};
pub use geo::{LatLon, Offset, haversine_km};
pub use offsets::{CustomDirection, CustomDirections, OffsetMap, SeparationParams, compute_offsets};
pub use regions::Region;
pub use team::{Point, Team};
