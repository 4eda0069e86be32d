#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use spanmap::{Range, RangeMap};

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(u8, u8, u8),
    Remove(u8, u8),
}

impl Op {
    fn apply(self, map: &mut RangeMap<f64, u8>) {
        match self {
            Op::Insert(start, end, value) if start < end => map.insert_coalescing(
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

    // Every range here is closed-open, so two neighbours touch exactly
    // when one's upper endpoint is the other's lower endpoint; touching
    // neighbours with equal values should have been merged.
    let mut peek = map.iter().peekable();
    while let Some((range, value)) = peek.next() {
        if let Some((next_range, next_value)) = peek.peek() {
            if range.upper_endpoint() == next_range.lower_endpoint() && value == *next_value {
                panic!()
            }
        }
    }
});
