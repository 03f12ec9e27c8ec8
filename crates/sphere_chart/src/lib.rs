//! Astrological chart geometry for the celestial sphere.
//!
//! This crate provides:
//! - Observer location with clamped latitude
//! - Ascendant and Midheaven from the sidereal angle
//! - Five house systems as renderable boundary curves
//! - Aspect detection with orb, intensity and ray styling
//! - Zodiac signs, DMS formatting and same-sign de-collision
//! - The mean lunar node and a sampled lunar orbit

pub mod ascendant;
pub mod aspect;
pub mod body;
pub mod error;
pub mod house_types;
pub mod houses;
pub mod layout;
pub mod lunar;
pub mod observer;
pub mod sign;
pub mod util;

pub use ascendant::{ascendant_and_mc_rad, ascendant_rad, midheaven_rad};
pub use aspect::{
    ASPECT_PRIORITY, Aspect, AspectKind, AspectMatch, AspectNature, RAY_BACK_SIDE_DIM,
    RAY_FADE_OPACITY, RayStyle, combined_orb_deg, find_aspects, match_aspect, ray_style,
};
pub use body::{ALL_BODIES, Body, PLANETS};
pub use error::ChartError;
pub use house_types::{
    ALL_HOUSE_SYSTEMS, CurveGeometry, CurveLabel, ECLIPTIC_LABEL_INDICES, FixedLabel,
    HORIZONTAL_LABEL_INDICES, HOUSE_CURVE_STEPS, HouseCurve, HouseCusp, HouseLayout, HouseMode,
    HouseSystem, SkyPoint, parse_house_selector,
};
pub use houses::{
    PLACIDUS_BAND_STEP_DEG, PLACIDUS_POLE_MARGIN_DEG, campanus_offsets_rad, compute_houses,
    placidus_bands_deg, regiomontanus_offsets_rad, semi_arc_rad, whole_sign_start_rad,
};
pub use layout::{PlacedBody, SignLayoutConfig, arrange_in_signs};
pub use lunar::{
    DEFAULT_ORBIT_STEP_DEG, LUNAR_INCLINATION_DEG, OrbitPoint, ascending_node_deg,
    lunar_orbit_points, orbit_latitude_rad,
};
pub use observer::{DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, MAX_LATITUDE_DEG, Observer};
pub use sign::{
    ALL_SIGNS, Dms, Sign, SignPosition, deg_to_dms, dms_to_deg, sign_from_longitude, sign_index,
};
pub use util::{normalize_360, normalize_tau, separation_deg};
