//! Integration tests for aspect detection and sign layout.

use sphere_chart::{
    AspectKind, Body, SignLayoutConfig, arrange_in_signs, find_aspects, match_aspect,
    sign_from_longitude,
};

#[test]
fn ten_and_one_thirty_form_a_trine() {
    let m = match_aspect(10.0, 130.0, 10.0);
    assert_eq!(m.map(|m| m.kind), Some(AspectKind::Trine));
}

#[test]
fn crowded_sign_stays_sorted_inside_band() {
    let positions = [(Body::Sun, 5.0), (Body::Moon, 6.0), (Body::Mercury, 7.0)];
    let placed = arrange_in_signs(&positions, &SignLayoutConfig::default());
    assert_eq!(placed.len(), 3);
    let adjusted: Vec<f64> = placed.iter().map(|p| p.adjusted_longitude_deg).collect();
    assert_eq!(adjusted, vec![2.0, 6.0, 11.0]);
    for w in adjusted.windows(2) {
        assert!(w[0] <= w[1]);
    }
    assert!(adjusted.iter().all(|&a| (2.0..=28.0).contains(&a)));
}

#[test]
fn sample_chart_aspects() {
    // Sun 14, Moon 48, Mars 142, Jupiter 173, Saturn 206.
    let positions = [
        (Body::Sun, 14.0),
        (Body::Moon, 48.0),
        (Body::Mars, 142.0),
        (Body::Jupiter, 173.0),
        (Body::Saturn, 206.0),
        (Body::Pluto, 326.0),
    ];
    let found = find_aspects(&positions);
    let pairs: Vec<(Body, Body, AspectKind)> = found
        .iter()
        .map(|a| (a.first, a.second, a.matched.kind))
        .collect();
    assert!(pairs.contains(&(Body::Sun, Body::Mars, AspectKind::Trine)));
    assert!(pairs.contains(&(Body::Sun, Body::Saturn, AspectKind::Opposition)));
    assert!(pairs.iter().all(|p| p.0 != Body::Pluto && p.1 != Body::Pluto));
}

#[test]
fn sign_of_layout_matches_true_longitude() {
    let positions = [(Body::Venus, 29.5), (Body::Mars, 29.9)];
    let placed = arrange_in_signs(&positions, &SignLayoutConfig::default());
    for p in placed {
        assert_eq!(sign_from_longitude(p.longitude_deg).sign_index, p.sign_index);
        assert!(p.adjusted_longitude_deg <= 28.0);
    }
}
