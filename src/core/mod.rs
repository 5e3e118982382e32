//! Core-Domänentypen: Koordinaten-Pfade, Geometrien, Features, Transformationen.

pub mod coord_path;
pub mod feature;
/// GeoJSON-Wire-Format für Features und Anzeige-Features
pub mod geojson;
pub mod geometry;
pub mod measure;
pub mod supplementary;
pub mod transform;

pub use coord_path::{sort_descending, CoordPath, CoordPathError};
pub use feature::{
    EditConfig, Feature, ModifyMode, OverlayToggle, ScalePivot, VertexDeleteStrategy,
};
pub use geojson::{FeatureCollection, GeoJsonError, GeoJsonFeature, GeoJsonGeometry};
pub use geometry::{Geometry, GeometryKind};
pub use supplementary::{
    active_state, create_supplementary_points, subsample, SupplementaryKind, SupplementaryPoint,
};
pub use transform::{Bounds, MovementLimits};
