/*!
[`Range`] is an interval over ordered values whose endpoints are
explicitly open or closed, and [`RangeMap`] is a map whose keys are
such ranges, in the spirit of Guava's `Range` and `RangeMap`.

A `RangeMap` keeps its entries disjoint: inserting over existing
coverage truncates or splits the entries underneath, while
[`insert_coalescing`] additionally merges the inserted range with
neighbouring entries that hold an equal value. Which values count as
equal is decided by a function you can supply at construction time.

Keys are *continuous*, not enumerable — a range is a pair of bounds,
not a set of steps — so adjacent entries meet at shared endpoints with
complementary bounds rather than at successor values. Endpoint types
implement the small [`Endpoint`] trait, which projects every endpoint
to a numeric key; implementations for `f64` and `f32` are built in, and
wrapping your own type (a timestamp, a version counter) is a few lines.


# Example: tracking attendance over days

```rust
use spanmap::{Range, RangeMap};

// A four-day festival: days 1 through 4, i.e. [1..5).
let mut attendance: RangeMap<f64, Vec<&str>> = RangeMap::new();
attendance.insert_coalescing(Range::closed_open(1.0, 5.0), vec![]);

let roster: &[(&str, &[u32])] = &[
    ("Bob", &[1, 2, 3, 4]),
    ("Lisa", &[1, 2, 3]),
    ("Eve", &[4, 1]),
];

for &(name, days) in roster {
    for &day in days {
        let day_range = Range::closed_open(f64::from(day), f64::from(day + 1));
        // Going through the sub-map also handles entries covering
        // only part of a day.
        let sub = attendance.sub_range_map(&day_range);
        for (range, names) in sub.iter() {
            let mut updated = names.clone();
            updated.push(name);
            attendance.insert_coalescing(range.clone(), updated);
        }
    }
}

let entries: Vec<String> = attendance
    .iter()
    .map(|(range, names)| format!("{range}: {names:?}"))
    .collect();
assert_eq!(entries, [
    r#"[1..2): ["Bob", "Lisa", "Eve"]"#,
    r#"[2..4): ["Bob", "Lisa"]"#,
    r#"[4..5): ["Bob", "Eve"]"#,
]);
```

Days that ended up with the same attendee list were coalesced into
single entries because `Vec`'s `PartialEq` is the default equality.


## Unbounded ranges

[`Range::all`], [`Range::at_least`], [`Range::at_most`],
[`Range::up_to`] and [`Range::down_to`] build ranges without a finite
bound on one or both sides. Unbounded sides are represented by the
endpoint type's infinity sentinels and display as `-∞`/`+∞`:

```rust
use spanmap::Range;

assert_eq!(Range::at_least(5.0).to_string(), "[5..+∞)");
assert_eq!(Range::<f64>::all().to_string(), "(-∞..+∞)");
```


## Crate features

By default this crate has no dependencies on other crates.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`Range`], [`BoundType`] and [`RangeMap`].

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
spanmap = { version = "0.1", features = ["serde1"] }
```


## Building without the Rust standard library

This crate can work without the full standard library available
(e.g. when running on bare metal without an operating system)
but relies on the presence of a global allocator &mdash;
i.e. it links the `core` and `alloc` crates, but not `std`.

[`insert_coalescing`]: RangeMap::insert_coalescing
*/

#![no_std]
extern crate alloc;

pub mod bound;
pub mod endpoint;
pub mod map;
pub mod range;

#[cfg(test)]
mod stupid_range_map;

pub use bound::BoundType;
pub use endpoint::Endpoint;
pub use map::RangeMap;
pub use range::Range;
