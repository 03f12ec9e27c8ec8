//! De-collision of bodies that share a zodiac sign.
//!
//! Bodies in the same sign are fanned out around their true positions so
//! their glyphs do not overlap on the chart wheel. The adjusted longitude
//! is for display only.

use crate::body::Body;
use crate::sign::sign_index;
use crate::util::normalize_360;

/// Spacing and margin of the fan-out, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignLayoutConfig {
    /// Separation between neighbours in the same sign.
    pub offset_step_deg: f64,
    /// Distance kept from the sign boundaries.
    pub margin_deg: f64,
}

impl Default for SignLayoutConfig {
    fn default() -> Self {
        Self {
            offset_step_deg: 4.0,
            margin_deg: 2.0,
        }
    }
}

/// A body with its true and display longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBody {
    pub body: Body,
    /// True longitude, [0, 360).
    pub longitude_deg: f64,
    pub sign_index: u8,
    /// Display longitude, within `[sign start + margin, sign end - margin]`.
    pub adjusted_longitude_deg: f64,
}

/// Fan out bodies sharing a sign.
///
/// Bodies are grouped by `floor(lon / 30)` and sorted by longitude within
/// each group. The body at rank `i` of `n` moves by `(i - (n-1)/2) * step`
/// and is then clamped into the sign's inner band. The result is ordered
/// by sign, then by longitude. Non-finite longitudes are dropped.
pub fn arrange_in_signs(positions: &[(Body, f64)], config: &SignLayoutConfig) -> Vec<PlacedBody> {
    let mut groups: [Vec<(Body, f64)>; 12] = Default::default();
    for &(body, lon) in positions {
        if !lon.is_finite() {
            continue;
        }
        let lon = normalize_360(lon);
        groups[sign_index(lon) as usize].push((body, lon));
    }

    let mut out = Vec::with_capacity(positions.len());
    for (idx, group) in groups.iter_mut().enumerate() {
        if group.is_empty() {
            continue;
        }
        group.sort_by(|a, b| a.1.total_cmp(&b.1));
        let half = (group.len() - 1) as f64 / 2.0;
        let sign_start = idx as f64 * 30.0;
        let low = sign_start + config.margin_deg;
        let high = sign_start + 30.0 - config.margin_deg;

        for (rank, &(body, lon)) in group.iter().enumerate() {
            let offset = (rank as f64 - half) * config.offset_step_deg;
            out.push(PlacedBody {
                body,
                longitude_deg: lon,
                sign_index: idx as u8,
                adjusted_longitude_deg: (lon + offset).max(low).min(high),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_body_only_clamped() {
        let placed = arrange_in_signs(&[(Body::Sun, 14.0)], &SignLayoutConfig::default());
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].adjusted_longitude_deg, 14.0);

        let edge = arrange_in_signs(&[(Body::Sun, 0.5)], &SignLayoutConfig::default());
        assert_eq!(edge[0].adjusted_longitude_deg, 2.0);
    }

    #[test]
    fn pair_is_spread_symmetrically() {
        let placed = arrange_in_signs(
            &[(Body::Venus, 111.0), (Body::Mars, 110.0)],
            &SignLayoutConfig::default(),
        );
        assert_eq!(placed[0].body, Body::Mars);
        assert!((placed[0].adjusted_longitude_deg - 108.0).abs() < 1e-12);
        assert!((placed[1].adjusted_longitude_deg - 113.0).abs() < 1e-12);
    }

    #[test]
    fn ordered_by_sign() {
        let placed = arrange_in_signs(
            &[(Body::Saturn, 206.0), (Body::Sun, 14.0), (Body::Moon, -12.0)],
            &SignLayoutConfig::default(),
        );
        let signs: Vec<u8> = placed.iter().map(|p| p.sign_index).collect();
        assert_eq!(signs, vec![0, 6, 11]);
        assert!((placed[2].longitude_deg - 348.0).abs() < 1e-12);
    }

    #[test]
    fn nan_dropped() {
        let placed = arrange_in_signs(&[(Body::Sun, f64::NAN)], &SignLayoutConfig::default());
        assert!(placed.is_empty());
    }
}
