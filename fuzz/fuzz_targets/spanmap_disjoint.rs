#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use spanmap::{Range, RangeMap};

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(u8, u8, u8),
    InsertCoalescing(u8, u8, u8),
    Remove(u8, u8),
}

impl Op {
    fn apply(self, map: &mut RangeMap<f64, u8>) {
        match self {
            Op::Insert(start, end, value) if start < end => {
                map.insert(Range::closed_open(f64::from(start), f64::from(end)), value)
            }
            Op::InsertCoalescing(start, end, value) if start < end => map.insert_coalescing(
                Range::closed_open(f64::from(start), f64::from(end)),
                value,
            ),
            Op::Remove(start, end) if start < end => {
                map.remove(Range::closed_open(f64::from(start), f64::from(end)))
            }
            _ => (),
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut map = RangeMap::new();

    for op in ops {
        op.apply(&mut map);
    }

    // No two visible entries may overlap, whatever was thrown at the map.
    let entries: Vec<Range<f64>> = map.iter().map(|(range, _value)| range.clone()).collect();
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.overlaps(b) {
                panic!()
            }
        }
    }
});
