use alloc::collections::BTreeMap;

use crate::map::RangeMap;
use crate::range::Range;

// A simple but infeasibly slow and memory-hungry
// version of `RangeMap` for testing.
//
// Only understands `f64` keys in a fixed window. The key domain is
// continuous, so coverage is sampled instead of enumerated: probes sit
// at every half step, landing exactly on the endpoints used by the
// tests and strictly between them. Whichever range was stamped over a
// probe last owns it, which is the latest-insert-wins behavior the
// real map implements with splitting.
#[derive(Eq, PartialEq, Debug)]
pub struct StupidF64RangeMap<V> {
    // Keyed by doubled probe coordinates so the keys stay integral.
    btm: BTreeMap<i64, V>,
}

const PROBE_MIN: i64 = -8;
const PROBE_MAX: i64 = 40;

fn probe_point(probe: i64) -> f64 {
    probe as f64 / 2.0
}

impl<V> StupidF64RangeMap<V>
where
    V: Eq + Clone,
{
    pub fn new() -> StupidF64RangeMap<V> {
        StupidF64RangeMap {
            btm: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, range: &Range<f64>, value: V) {
        for probe in PROBE_MIN..=PROBE_MAX {
            if range.contains(&probe_point(probe)) {
                self.btm.insert(probe, value.clone());
            }
        }
    }

    pub fn remove(&mut self, range: &Range<f64>) {
        for probe in PROBE_MIN..=PROBE_MAX {
            if range.contains(&probe_point(probe)) {
                self.btm.remove(&probe);
            }
        }
    }
}

impl<V> From<&RangeMap<f64, V>> for StupidF64RangeMap<V>
where
    V: Eq + Clone,
{
    fn from(range_map: &RangeMap<f64, V>) -> Self {
        let mut stupid = Self::new();
        for (range, value) in range_map.iter() {
            stupid.insert(range, value.clone());
        }
        stupid
    }
}
