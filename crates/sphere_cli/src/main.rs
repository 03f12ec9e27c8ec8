use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sphere_chart::{
    ALL_BODIES, Body, HouseSystem, Observer, ascendant_and_mc_rad, compute_houses, find_aspects,
    parse_house_selector, sign_from_longitude,
};
use sphere_frames::{Orientation, horizontal_coords, precess_equatorial};
use sphere_render::{
    BodyPositions, LayerVisibility, LowPrecisionEphemeris, RecordingSurface, RenderConfig,
    RenderQuality, SAMPLE_LONGITUDES, SkyRenderer, StarCatalog, WheelVariant, draw_wheel,
    save_svg,
};
use sphere_time::{
    Instant, StepUnit, gmst_hours, precession_matrix_at, sidereal_angle_rad, step, step_fast,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "sphere", about = "Celestial sphere and chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GMST and local sidereal time
    Sidereal {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<String>,
        /// East longitude in degrees
        #[arg(long, default_value_t = sphere_chart::DEFAULT_LONGITUDE_DEG)]
        lon: f64,
    },
    /// Altitude and azimuth of an equatorial position
    Horizontal {
        /// Right ascension in hours
        #[arg(long)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_negative_numbers = true)]
        dec: f64,
        /// UTC datetime, default now
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LATITUDE_DEG)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LONGITUDE_DEG)]
        lon: f64,
    },
    /// Precess J2000 coordinates to the mean equator of date
    Precess {
        /// Right ascension in hours
        #[arg(long)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_negative_numbers = true)]
        dec: f64,
        /// UTC datetime, default now
        #[arg(long)]
        date: Option<String>,
    },
    /// Ascendant, Midheaven and house cusps
    Houses {
        /// equal, whole-sign, campanus, regiomontanus or placidus
        #[arg(long, default_value = "placidus")]
        system: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LATITUDE_DEG)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LONGITUDE_DEG)]
        lon: f64,
    },
    /// Aspects among bodies given as body=longitude, default the sample chart
    Aspects {
        /// e.g. sun=14 moon=48
        positions: Vec<String>,
        /// Use the Sun and Moon at this date instead
        #[arg(long)]
        date: Option<String>,
    },
    /// Zodiac sign and DMS of an ecliptic longitude
    Signs {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Step a date by calendar units
    Step {
        #[arg(long)]
        date: String,
        /// minute, hour, day, month or year
        #[arg(long, default_value = "day")]
        unit: String,
        #[arg(long, allow_negative_numbers = true, default_value_t = 1)]
        count: i32,
        /// Five units per step in the sign of --count
        #[arg(long)]
        fast: bool,
    },
    /// Render the sky to SVG
    Render {
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LATITUDE_DEG)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LONGITUDE_DEG)]
        lon: f64,
        #[arg(long, default_value_t = 1000.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
        /// View rotations in degrees: about the zenith, about the east-west
        /// axis, and roll
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rot_z: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rot_y: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rot_ew: f64,
        /// House system, or none
        #[arg(long, default_value = "none")]
        houses: String,
        /// Star catalog (RA;Dec;Vmag with a header line); default bright stars
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = sphere_render::DEFAULT_MAGNITUDE_LIMIT)]
        mag_limit: f64,
        #[arg(long)]
        precess: bool,
        #[arg(long)]
        back_side: bool,
        #[arg(long)]
        reverse_ew: bool,
        #[arg(long)]
        labels: bool,
        #[arg(long)]
        prime_vertical: bool,
        #[arg(long)]
        lunar_orbit: bool,
        #[arg(long)]
        no_grid: bool,
        /// Reduced sample counts
        #[arg(long)]
        interactive: bool,
    },
    /// Draw the chart wheel to SVG
    Wheel {
        #[arg(long)]
        out: PathBuf,
        /// body=longitude pairs, default the sample chart
        positions: Vec<String>,
        /// Whole-sign wheel with houses from the ascendant at --date
        #[arg(long)]
        whole_sign: bool,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LATITUDE_DEG)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = sphere_chart::DEFAULT_LONGITUDE_DEG)]
        lon: f64,
        #[arg(long, default_value_t = 600.0)]
        size: f64,
    },
}

fn parse_instant(date: Option<&str>) -> Instant {
    match date {
        None => Instant::now(),
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("Invalid date '{s}': {e}");
            std::process::exit(1);
        }),
    }
}

fn parse_positions(args: &[String]) -> Vec<(Body, f64)> {
    if args.is_empty() {
        return SAMPLE_LONGITUDES.to_vec();
    }
    args.iter()
        .map(|arg| {
            let Some((name, lon)) = arg.split_once('=') else {
                eprintln!("Expected body=longitude, got '{arg}'");
                std::process::exit(1);
            };
            let body: Body = name.parse().unwrap_or_else(|e| {
                eprintln!("{e}");
                eprintln!("Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto");
                std::process::exit(1);
            });
            let lon: f64 = lon.parse().unwrap_or_else(|_| {
                eprintln!("Invalid longitude '{lon}'");
                std::process::exit(1);
            });
            (body, lon)
        })
        .collect()
}

fn require_house_system(s: &str) -> Option<HouseSystem> {
    parse_house_selector(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: none, equal, whole-sign, campanus, regiomontanus, placidus");
        std::process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sidereal { date, lon } => {
            let t = parse_instant(date.as_deref());
            let lst = sidereal_angle_rad(t, lon).to_degrees();
            println!("Instant: {t}");
            println!("GMST:    {:.6} h", gmst_hours(t.jd_utc()));
            println!("LST:     {:.6} h ({:.4} deg)", lst / 15.0, lst);
        }

        Commands::Horizontal {
            ra,
            dec,
            date,
            lat,
            lon,
        } => {
            let t = parse_instant(date.as_deref());
            let observer = Observer::new(lat, lon);
            let lst = sidereal_angle_rad(t, observer.longitude_deg);
            let aa = horizontal_coords(
                (ra * 15.0).to_radians(),
                dec.to_radians(),
                lst,
                observer.latitude_rad(),
            );
            println!(
                "Alt {:.4} deg, Az {:.4} deg",
                aa.altitude_rad.to_degrees(),
                aa.azimuth_rad.to_degrees()
            );
        }

        Commands::Precess { ra, dec, date } => {
            let t = parse_instant(date.as_deref());
            let m = precession_matrix_at(t);
            let (ra_p, dec_p) = precess_equatorial(&m, (ra * 15.0).to_radians(), dec.to_radians());
            println!(
                "RA {:.6} h, Dec {:.6} deg (mean equator of {t})",
                ra_p.to_degrees() / 15.0,
                dec_p.to_degrees()
            );
        }

        Commands::Houses {
            system,
            date,
            lat,
            lon,
        } => {
            let Some(system) = require_house_system(&system) else {
                println!("No house system selected");
                return;
            };
            let t = parse_instant(date.as_deref());
            let observer = Observer::new(lat, lon);
            let (asc, mc) = ascendant_and_mc_rad(&observer, t);
            let layout = compute_houses(
                system,
                sidereal_angle_rad(t, observer.longitude_deg),
                observer.latitude_rad(),
            );
            println!("{system} houses at {t}");
            println!("ASC {}", sign_from_longitude(asc.to_degrees()));
            println!("MC  {}", sign_from_longitude(mc.to_degrees()));
            for cusp in &layout.cusps {
                println!("{:>2}: {:8.3} deg", cusp.number, cusp.angle_deg());
            }
        }

        Commands::Aspects { positions, date } => {
            let longitudes = match date {
                Some(d) => {
                    let t = parse_instant(Some(&d));
                    let mut table = BodyPositions::new();
                    table.refresh(&LowPrecisionEphemeris, &ALL_BODIES, t);
                    table.ecliptic_longitudes()
                }
                None => parse_positions(&positions),
            };
            let aspects = find_aspects(&longitudes);
            if aspects.is_empty() {
                println!("No aspects");
            }
            for a in aspects {
                let m = a.matched;
                println!(
                    "{} {} {}: separation {:.2} deg, orb {:.2}, intensity {:.2}",
                    a.first,
                    m.kind.name(),
                    a.second,
                    m.separation_deg,
                    m.orb_deg,
                    m.intensity
                );
            }
        }

        Commands::Signs { lon } => {
            let p = sign_from_longitude(lon);
            println!(
                "{} {} - {} ({:.4} deg in sign)",
                p.sign.glyph(),
                p.sign.name(),
                p.dms,
                p.degrees_in_sign
            );
        }

        Commands::Step {
            date,
            unit,
            count,
            fast,
        } => {
            let t = parse_instant(Some(&date));
            let unit: StepUnit = unit.parse().unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let result = if fast {
                step_fast(t, unit, count)
            } else {
                step(t, unit, count)
            };
            match result {
                Ok(next) => println!("{next}"),
                Err(e) => {
                    eprintln!("Step failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Render {
            out,
            date,
            lat,
            lon,
            width,
            height,
            zoom,
            rot_z,
            rot_y,
            rot_ew,
            houses,
            catalog,
            mag_limit,
            precess,
            back_side,
            reverse_ew,
            labels,
            prime_vertical,
            lunar_orbit,
            no_grid,
            interactive,
        } => {
            let t = parse_instant(date.as_deref());
            let mut layers = LayerVisibility {
                planet_labels: labels,
                prime_vertical,
                lunar_orbit,
                ..LayerVisibility::default()
            };
            if no_grid {
                layers.alt_grid = false;
                layers.ra_lines = false;
                layers.dec_lines = false;
            }
            let config = RenderConfig {
                width,
                height,
                zoom,
                magnitude_limit: mag_limit,
                precess_stars: precess,
                layers,
                show_back_side: back_side,
                reverse_east_west: reverse_ew,
                house_system: require_house_system(&houses),
                ..RenderConfig::default()
            };
            let stars = match catalog {
                Some(path) => StarCatalog::load_csv(&path, mag_limit).unwrap_or_else(|e| {
                    eprintln!("Failed to load catalog {}: {e}", path.display());
                    std::process::exit(1);
                }),
                None => StarCatalog::bright_stars(),
            };
            let mut renderer = SkyRenderer::new(config.clone())
                .unwrap_or_else(|e| {
                    eprintln!("Invalid settings: {e}");
                    std::process::exit(1);
                })
                .with_catalog(stars)
                .with_default_hooks();

            let mut positions = BodyPositions::new();
            positions.refresh(&LowPrecisionEphemeris, &ALL_BODIES, t);

            let quality = if interactive {
                RenderQuality::Interactive
            } else {
                RenderQuality::Full
            };
            let orientation = Orientation::new(
                rot_z.to_radians(),
                rot_y.to_radians(),
                rot_ew.to_radians(),
            );
            let frame = config.frame(t, Observer::new(lat, lon), orientation, quality);
            let mut surface = RecordingSurface::new(width, height);
            let stats = renderer.render(&frame, &positions, &mut surface);
            if let Err(e) = save_svg(&out, &surface, config.background) {
                eprintln!("Failed to write {}: {e}", out.display());
                std::process::exit(1);
            }
            info!(path = %out.display(), "sky written");
            println!(
                "Wrote {} ({} paths, {} stars, {} bodies, {} samples culled)",
                out.display(),
                stats.sub_paths,
                stats.stars_drawn,
                stats.bodies_visible,
                stats.culled
            );
        }

        Commands::Wheel {
            out,
            positions,
            whole_sign,
            date,
            lat,
            lon,
            size,
        } => {
            let longitudes = parse_positions(&positions);
            let variant = if whole_sign {
                let t = parse_instant(date.as_deref());
                let (asc, _) = ascendant_and_mc_rad(&Observer::new(lat, lon), t);
                WheelVariant::WholeSign {
                    ascendant_deg: asc.to_degrees(),
                }
            } else {
                WheelVariant::Tropical
            };
            let mut surface = RecordingSurface::new(size, size);
            draw_wheel(&mut surface, variant, size, size, &longitudes);
            if let Err(e) = save_svg(&out, &surface, "#000000") {
                eprintln!("Failed to write {}: {e}", out.display());
                std::process::exit(1);
            }
            println!("Wrote {}", out.display());
        }
    }
}
