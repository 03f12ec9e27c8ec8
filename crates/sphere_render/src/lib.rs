//! Celestial sphere renderer.
//!
//! This crate provides:
//! - `FrameState` and the `SkyProjector` contract (equatorial → horizontal
//!   → view rotation → hemisphere-culled screen point)
//! - A parametric curve tracer shared by every grid line and great circle
//! - Star, body, house, aspect and lunar orbit layers
//! - Ephemeris providers with a throttled, ordered refresh scheduler
//! - A recording draw surface with SVG output, and the flat chart wheel

pub mod aspect_layer;
pub mod bodies;
pub mod catalog;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod frame;
pub mod hook;
pub mod house_layer;
pub mod lunar_layer;
pub mod memo;
pub mod projector;
pub mod renderer;
pub mod scheduler;
pub mod sky;
pub mod surface;
pub mod svg_out;
pub mod trace;
pub mod wheel;

pub use aspect_layer::{AspectLayer, aspects_for, draw_aspect_rays};
pub use bodies::{BodyVector, draw_bodies, horizontal_vectors, project_body};
pub use catalog::{CatalogStar, StarCatalog, StarStyle, parse_dec_dms, parse_ra_hms, star_style};
pub use config::{
    DEFAULT_EPHEMERIS_INTERVAL_MS, DEFAULT_INTERACTION_WINDOW_MS, DEFAULT_MAGNITUDE_LIMIT,
    LayerVisibility, RenderConfig,
};
pub use ephemeris::{
    BodyPosition, BodyPositions, EclipticPosition, EphemerisProvider, EquatorialPosition,
    FixedEphemeris, LowPrecisionEphemeris, RefreshReport, compute_positions,
};
pub use error::{EphemerisError, RenderError};
pub use frame::{FrameState, RenderQuality};
pub use hook::{DrawHook, HookContext};
pub use house_layer::{HouseLayer, draw_house_layout};
pub use lunar_layer::LunarOrbitLayer;
pub use memo::{FrameKey, HorizonKey, Memo};
pub use projector::{FrameProjector, SkyProjector};
pub use renderer::SkyRenderer;
pub use scheduler::{EphemerisScheduler, RefreshResult, RefreshTicket};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, Stroke, TextStyle};
pub use svg_out::{save_svg, to_svg_document};
pub use trace::{RenderStats, TracedCurve, append_runs, lerp_param, stroke_curve, trace_curve};
pub use wheel::{
    SAMPLE_LONGITUDES, WheelGeometry, WheelGlyph, WheelVariant, draw_wheel, place_bodies,
    screen_angle_deg,
};
