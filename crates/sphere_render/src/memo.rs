//! Value-keyed single-slot memoization.
//!
//! Keys compare floating point fields by bit pattern, so two frames match
//! only if every input is identical.

use sphere_chart::{HouseSystem, Observer};
use sphere_time::Instant;

use crate::config::LayerVisibility;
use crate::frame::{FrameState, RenderQuality};

/// Everything that affects a frame's projected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameKey {
    instant: Instant,
    observer: [u64; 2],
    orientation: [u64; 3],
    canvas: [u64; 3],
    show_back_side: bool,
    reverse_east_west: bool,
    layers: LayerVisibility,
    house_system: Option<HouseSystem>,
    quality: RenderQuality,
}

impl FrameKey {
    pub fn new(frame: &FrameState) -> Self {
        Self {
            instant: frame.instant,
            observer: observer_bits(&frame.observer),
            orientation: [
                frame.orientation.rotation_z.to_bits(),
                frame.orientation.rotation_y.to_bits(),
                frame.orientation.rotation_ew.to_bits(),
            ],
            canvas: [
                frame.width.to_bits(),
                frame.height.to_bits(),
                frame.effective_zoom().to_bits(),
            ],
            show_back_side: frame.projection.show_back_side,
            reverse_east_west: frame.projection.reverse_east_west,
            layers: frame.layers,
            house_system: frame.house_system,
            quality: frame.quality,
        }
    }
}

/// Inputs of the horizontal frame: instant and observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HorizonKey {
    instant: Instant,
    observer: [u64; 2],
}

impl HorizonKey {
    pub fn new(instant: Instant, observer: &Observer) -> Self {
        Self {
            instant,
            observer: observer_bits(observer),
        }
    }
}

fn observer_bits(o: &Observer) -> [u64; 2] {
    [o.latitude_deg.to_bits(), o.longitude_deg.to_bits()]
}

/// Holds the value computed for the most recent key.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, computing it only when the key changed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        if matches!(&self.slot, Some((k, _)) if *k == key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.slot = None;
        }
        let (_, v) = self.slot.get_or_insert_with(|| (key, compute()));
        v
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphere_frames::Orientation;

    #[test]
    fn recomputes_only_on_key_change() {
        let mut memo: Memo<u32, String> = Memo::new();
        assert_eq!(memo.get_or_compute(1, || "a".to_string()), "a");
        assert_eq!(memo.get_or_compute(1, || "b".to_string()), "a");
        assert_eq!(memo.get_or_compute(2, || "c".to_string()), "c");
        assert_eq!((memo.hits(), memo.misses()), (1, 2));
    }

    #[test]
    fn frame_key_tracks_every_input() {
        let base = FrameState::new(Instant::J2000, 800.0, 600.0);
        let same = base.clone();
        assert_eq!(FrameKey::new(&base), FrameKey::new(&same));

        let moved = FrameState {
            instant: base.instant.offset_ms(1),
            ..base.clone()
        };
        assert_ne!(FrameKey::new(&base), FrameKey::new(&moved));

        let turned = FrameState {
            orientation: Orientation::new(1e-12, 0.0, 0.0),
            ..base.clone()
        };
        assert_ne!(FrameKey::new(&base), FrameKey::new(&turned));

        let elsewhere = FrameState {
            observer: Observer::new(10.0, 20.0),
            ..base.clone()
        };
        assert_ne!(FrameKey::new(&base), FrameKey::new(&elsewhere));
    }

    #[test]
    fn horizon_key_ignores_view() {
        let o = Observer::default();
        assert_eq!(
            HorizonKey::new(Instant::J2000, &o),
            HorizonKey::new(Instant::J2000, &o)
        );
        assert_ne!(
            HorizonKey::new(Instant::J2000, &o),
            HorizonKey::new(Instant::J2000, &Observer::new(0.0, 0.0))
        );
    }
}
