//! Frame composition: every layer in drawing order, then the hooks.

use sphere_chart::Body;
use sphere_time::PrecessionCache;
use tracing::debug;

use crate::aspect_layer::AspectLayer;
use crate::bodies::{BodyVector, draw_bodies, horizontal_vectors};
use crate::catalog::{StarCatalog, StarStyle, star_style};
use crate::config::RenderConfig;
use crate::ephemeris::BodyPositions;
use crate::error::RenderError;
use crate::frame::FrameState;
use crate::hook::{DrawHook, HookContext};
use crate::house_layer::HouseLayer;
use crate::lunar_layer::LunarOrbitLayer;
use crate::memo::{FrameKey, HorizonKey, Memo};
use crate::projector::{FrameProjector, SkyProjector};
use crate::sky;
use crate::surface::{DrawSurface, RecordingSurface, TextStyle};
use crate::trace::RenderStats;

type StarKey = (HorizonKey, bool, u64);
type BodyKey = (HorizonKey, Vec<(Body, u64, u64)>);

/// Draws frames. Holds the star catalog, the overlay hooks and the caches
/// that let a view-only change skip the coordinate conversions.
pub struct SkyRenderer {
    config: RenderConfig,
    catalog: StarCatalog,
    hooks: Vec<Box<dyn DrawHook>>,
    precession: PrecessionCache,
    star_vectors: Memo<StarKey, Vec<([f64; 3], StarStyle)>>,
    body_vectors: Memo<BodyKey, Vec<BodyVector>>,
    last_frame: Option<FrameKey>,
}

impl SkyRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: StarCatalog::default(),
            hooks: Vec::new(),
            precession: PrecessionCache::new(),
            star_vectors: Memo::new(),
            body_vectors: Memo::new(),
            last_frame: None,
        })
    }

    pub fn with_catalog(mut self, catalog: StarCatalog) -> Self {
        self.catalog = catalog;
        self.star_vectors.invalidate();
        self
    }

    /// Register the house, aspect and lunar orbit overlays.
    pub fn with_default_hooks(mut self) -> Self {
        self.add_hook(Box::new(HouseLayer::new()));
        self.add_hook(Box::new(AspectLayer::new()));
        self.add_hook(Box::new(LunarOrbitLayer::new()));
        self
    }

    pub fn add_hook(&mut self, hook: Box<dyn DrawHook>) {
        debug!(hook = hook.name(), "registered draw hook");
        self.hooks.push(hook);
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    /// True if `frame` differs from the last rendered frame.
    pub fn frame_changed(&self, frame: &FrameState) -> bool {
        self.last_frame != Some(FrameKey::new(frame))
    }

    /// Number of times the star positions were converted.
    pub fn star_conversions(&self) -> u64 {
        self.star_vectors.misses()
    }

    /// Draw one frame onto `surface`.
    pub fn render(
        &mut self,
        frame: &FrameState,
        positions: &BodyPositions,
        surface: &mut dyn DrawSurface,
    ) -> RenderStats {
        let projector = FrameProjector::new(frame);
        let horizon = HorizonKey::new(frame.instant, &frame.observer);
        let layers = &frame.layers;
        let quality = frame.quality;
        let mut stats = RenderStats::default();

        if layers.stars {
            self.draw_stars(&projector, frame, surface, &mut stats);
        }
        if layers.horizon {
            sky::draw_horizon(&projector, surface, &mut stats);
        }
        if layers.alt_grid {
            sky::draw_alt_grid(&projector, surface, quality, &mut stats);
        }
        if layers.meridian {
            sky::draw_meridian(&projector, surface, projector.lst_rad, &mut stats);
        }
        if layers.prime_vertical {
            sky::draw_prime_vertical(&projector, surface, &mut stats);
        }
        if layers.equator {
            sky::draw_equator(&projector, surface, &mut stats);
        }
        if layers.ecliptic {
            sky::draw_ecliptic(&projector, surface, &mut stats);
        }
        if layers.ecliptic_band {
            sky::draw_ecliptic_band(&projector, surface, quality, &mut stats);
            sky::draw_zodiac_divisions(&projector, surface, quality, &mut stats);
            sky::draw_zodiac_symbols(&projector, surface, quality, &mut stats);
        }
        if layers.ra_lines {
            sky::draw_ra_lines(&projector, surface, quality, &mut stats);
        }
        if layers.dec_lines {
            sky::draw_dec_lines(&projector, surface, quality, &mut stats);
        }
        if layers.directions {
            let style = TextStyle::new(self.config.direction_color, self.config.direction_text_px);
            sky::draw_directions(&projector, surface, &style, &mut stats);
        }
        if layers.zenith_nadir {
            sky::draw_zenith_nadir(&projector, surface, &mut stats);
        }

        let key: BodyKey = (
            horizon,
            positions
                .iter()
                .map(|(b, p)| (b, p.equatorial.ra_hours.to_bits(), p.equatorial.dec_deg.to_bits()))
                .collect(),
        );
        let bodies = self
            .body_vectors
            .get_or_compute(key, || horizontal_vectors(&projector, positions))
            .clone();
        draw_bodies(&projector, surface, &bodies, layers, &mut stats);

        let ctx = HookContext {
            frame,
            projector: Some(&projector as &dyn SkyProjector),
            positions,
            bodies: &bodies,
        };
        for hook in &mut self.hooks {
            hook.draw(&ctx, surface, &mut stats);
        }

        self.last_frame = Some(FrameKey::new(frame));
        debug!(
            sub_paths = stats.sub_paths,
            samples = stats.samples,
            culled = stats.culled,
            stars = stats.stars_drawn,
            bodies = stats.bodies_visible,
            "frame rendered"
        );
        stats
    }

    /// Render into a fresh recording surface the size of the frame.
    pub fn render_recording(
        &mut self,
        frame: &FrameState,
        positions: &BodyPositions,
    ) -> (RecordingSurface, RenderStats) {
        let mut surface = RecordingSurface::new(frame.width, frame.height);
        let stats = self.render(frame, positions, &mut surface);
        (surface, stats)
    }

    fn draw_stars(
        &mut self,
        projector: &FrameProjector,
        frame: &FrameState,
        surface: &mut dyn DrawSurface,
        stats: &mut RenderStats,
    ) {
        let precess = self.config.precess_stars;
        let limit = self.config.magnitude_limit;
        let instant = frame.instant;
        let key = (HorizonKey::new(instant, &frame.observer), precess, limit.to_bits());
        let Self {
            catalog,
            precession,
            star_vectors,
            ..
        } = self;
        let vectors = star_vectors.get_or_compute(key, || {
            catalog
                .stars()
                .iter()
                .filter(|s| s.magnitude <= limit)
                .map(|s| {
                    let (ra, dec) = s.position_rad(instant, precess, precession);
                    (projector.to_horizontal(ra, dec), star_style(s.magnitude))
                })
                .collect()
        });
        for (v, style) in vectors {
            if let Some(p) = projector.project_horizontal(v) {
                surface.fill_circle(p.sx, p.sy, style.radius, style.color);
                stats.stars_drawn += 1;
            }
        }
    }
}
