//! Direct-Select Geometrie-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActionableState, AppCommand, AppController, AppIntent, AppState, DirectSelectMode,
    DirectSelectOptions, HostContext, ModeChange, ModeEvent, PointerEvent, PointerTarget,
    SetupError,
};
pub use core::{
    CoordPath, EditConfig, Feature, FeatureCollection, GeoJsonFeature, Geometry, GeometryKind,
    ModifyMode, VertexDeleteStrategy,
};
pub use shared::EditorOptions;
