use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug};

use crate::endpoint::Endpoint;
use crate::range::Range;

#[cfg(feature = "serde1")]
use core::marker::PhantomData;
#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

/// A single range and the value mapped over it.
#[derive(Clone)]
struct RangeValue<K, V> {
    range: Range<K>,
    value: V,
}

/// A map from ranges to values, in the style of Guava's `RangeMap`.
///
/// Entries never overlap: inserting over existing coverage truncates or
/// splits the entries underneath, and [`insert_coalescing`] merges the
/// inserted range with connected entries holding an equal value into
/// one combined entry. Equality of values is decided by a function
/// supplied at construction time ([`with_eq`]), defaulting to
/// `PartialEq`.
///
/// Split leftovers can be zero-width; such empty entries are invisible
/// to every query and get dropped as later mutations touch them, so
/// the entry collection partitions the covered key space into disjoint
/// labeled intervals at all times.
///
/// Entries are held in a flat, unordered collection and every observing
/// operation sorts them by lower endpoint on the way out. That is fine
/// for the map sizes this structure is built for; it makes no
/// balanced-tree performance promises.
///
/// [`insert_coalescing`]: RangeMap::insert_coalescing
/// [`with_eq`]: RangeMap::with_eq
#[derive(Clone)]
pub struct RangeMap<K, V> {
    entries: Vec<RangeValue<K, V>>,
    eq: fn(&V, &V) -> bool,
}

fn default_eq<V: PartialEq>(a: &V, b: &V) -> bool {
    a == b
}

// The two pieces of `outer` on either side of `cut`: intersecting with
// the complementary unbounded ranges leaves exactly the coverage `cut`
// does not claim. Fragments can come out empty when the two ranges
// merely touch.
fn split_around<K>(outer: &Range<K>, cut: &Range<K>) -> (Option<Range<K>>, Option<Range<K>>)
where
    K: Endpoint,
{
    let before = outer.intersection(&Range::up_to(
        cut.lower_endpoint().clone(),
        cut.lower_bound_type().flip(),
    ));
    let after = outer.intersection(&Range::down_to(
        cut.upper_endpoint().clone(),
        cut.upper_bound_type().flip(),
    ));
    (before, after)
}

impl<K, V> RangeMap<K, V>
where
    K: Endpoint,
    V: Clone,
{
    /// Makes a new empty `RangeMap` coalescing on `PartialEq` values.
    pub fn new() -> Self
    where
        V: PartialEq,
    {
        Self::with_eq(default_eq::<V>)
    }

    /// Makes a new empty `RangeMap` with a custom value-equality
    /// function, consulted by [`insert_coalescing`] and
    /// [`ranges_by_value`].
    ///
    /// [`insert_coalescing`]: RangeMap::insert_coalescing
    /// [`ranges_by_value`]: RangeMap::ranges_by_value
    pub fn with_eq(eq: fn(&V, &V) -> bool) -> Self {
        RangeMap {
            entries: Vec::new(),
            eq,
        }
    }

    /// Maps `range` to `value`, unconditionally overwriting any prior
    /// coverage of that span.
    ///
    /// Existing entries partially overlapping `range` are truncated to
    /// their portions outside it; entries it fully covers are dropped.
    pub fn insert(&mut self, range: Range<K>, value: V) {
        self.combined_insert(range, value, false);
    }

    /// Like [`insert`], but additionally merges the inserted range with
    /// every connected entry holding an equal value (per the map's
    /// equality function) into one spanned entry.
    ///
    /// Connected entries with *unequal* values are still overwritten or
    /// split exactly as by [`insert`].
    ///
    /// [`insert`]: RangeMap::insert
    pub fn insert_coalescing(&mut self, range: Range<K>, value: V) {
        self.combined_insert(range, value, true);
    }

    fn combined_insert(&mut self, range: Range<K>, value: V, coalescing: bool) {
        let mut new_range = range;
        let mut kept = Vec::with_capacity(self.entries.len() + 1);
        let mut affected = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.range.is_connected(&new_range) {
                affected.push(entry);
            } else {
                kept.push(entry);
            }
        }

        for entry in affected {
            if coalescing && (self.eq)(&value, &entry.value) {
                // Absorb the whole entry instead of keeping it
                // alongside the new one.
                new_range = new_range.span(&entry.range);
                continue;
            }

            let (before, after) = split_around(&entry.range, &new_range);
            match (before, after) {
                (Some(before), Some(after)) => {
                    kept.push(RangeValue {
                        range: before,
                        value: entry.value.clone(),
                    });
                    kept.push(RangeValue {
                        range: after,
                        value: entry.value,
                    });
                }
                (Some(fragment), None) | (None, Some(fragment)) => {
                    kept.push(RangeValue {
                        range: fragment,
                        value: entry.value,
                    });
                }
                (None, None) => {}
            }
        }

        kept.push(RangeValue {
            range: new_range,
            value,
        });
        self.entries = kept;
    }

    /// Removes all coverage within `range`.
    ///
    /// Entries partially overlapping `range` are truncated to their
    /// portions outside it, entries fully inside are deleted, and
    /// entries fully outside are untouched. Removing an empty range is
    /// a no-op.
    pub fn remove(&mut self, range: Range<K>) {
        // An empty range covers nothing; letting it through would
        // rewrite every touching entry for no effect.
        if range.is_empty() {
            return;
        }

        let mut kept = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if !entry.range.is_connected(&range) {
                kept.push(entry);
                continue;
            }

            let (before, after) = split_around(&entry.range, &range);
            match (before, after) {
                (Some(before), Some(after)) => {
                    kept.push(RangeValue {
                        range: before,
                        value: entry.value.clone(),
                    });
                    kept.push(RangeValue {
                        range: after,
                        value: entry.value,
                    });
                }
                (Some(fragment), None) | (None, Some(fragment)) => {
                    kept.push(RangeValue {
                        range: fragment,
                        value: entry.value,
                    });
                }
                (None, None) => {}
            }
        }
        self.entries = kept;
    }

    /// Returns a reference to the value of the entry whose range
    /// contains `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_range, value)| value)
    }

    /// Returns the range-value pair (as a pair of references) of the
    /// entry whose range contains `key`, if any.
    pub fn get_key_value(&self, key: &K) -> Option<(&Range<K>, &V)> {
        // Disjointness means at most one entry can match, and empty
        // entries contain nothing.
        self.entries
            .iter()
            .find(|entry| entry.range.contains(key))
            .map(|entry| (&entry.range, &entry.value))
    }

    /// Returns `true` if any range in the map covers `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn sorted_entries(&self) -> Vec<&RangeValue<K, V>> {
        let mut entries: Vec<&RangeValue<K, V>> = self
            .entries
            .iter()
            .filter(|entry| !entry.range.is_empty())
            .collect();
        entries.sort_by(|a, b| {
            a.range
                .lower_endpoint()
                .scalar()
                .total_cmp(&b.range.lower_endpoint().scalar())
        });
        entries
    }

    /// Gets an iterator over all non-empty range-value pairs, ordered
    /// ascending by lower endpoint.
    pub fn iter(&self) -> impl Iterator<Item = (&Range<K>, &V)> + '_ {
        self.sorted_entries()
            .into_iter()
            .map(|entry| (&entry.range, &entry.value))
    }

    /// Groups all non-empty entries by value: each group holds a value
    /// and its ranges in ascending order. Groups appear in order of
    /// their value's first (lowest) occurrence, and values are grouped
    /// with the map's equality function.
    pub fn ranges_by_value(&self) -> Vec<(V, Vec<Range<K>>)> {
        let mut grouped: Vec<(V, Vec<Range<K>>)> = Vec::new();
        for (range, value) in self.iter() {
            match grouped.iter_mut().find(|(seen, _)| (self.eq)(seen, value)) {
                Some((_seen, ranges)) => ranges.push(range.clone()),
                None => grouped.push((value.clone(), vec![range.clone()])),
            }
        }
        grouped
    }

    /// Returns the minimal range enclosing every entry in the map, or
    /// `None` if the map is empty.
    pub fn span(&self) -> Option<Range<K>> {
        // Folded over the current (non-empty) entries only; stale
        // zero-width leftovers must not stretch the result.
        self.entries
            .iter()
            .filter(|entry| !entry.range.is_empty())
            .fold(None, |acc, entry| match acc {
                Some(span) => Some(entry.range.span(&span)),
                None => Some(entry.range.clone()),
            })
    }

    /// Returns a new map holding the intersection of every entry with
    /// `range`, keeping the original values and this map's equality
    /// function. Entries that miss `range` entirely, or only touch it,
    /// are dropped.
    ///
    /// The result is an independent snapshot, not a view.
    pub fn sub_range_map(&self, range: &Range<K>) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .range
                    .intersection(range)
                    .filter(|intersection| !intersection.is_empty())
                    .map(|intersection| RangeValue {
                        range: intersection,
                        value: entry.value.clone(),
                    })
            })
            .collect();
        RangeMap {
            entries,
            eq: self.eq,
        }
    }
}

impl<K, V> RangeMap<K, Vec<V>>
where
    K: Endpoint,
    V: Clone + PartialEq,
{
    /// For every entry intersecting `range` whose list does not yet
    /// contain `value`, re-inserts that intersection with `value`
    /// appended, coalescing neighbours that end up equal.
    ///
    /// Handy for maps tracking *sets* of things per interval, where a
    /// new member joins over some window without disturbing what else
    /// is recorded there.
    pub fn add_if_missing(&mut self, range: &Range<K>, value: V) {
        let sub = self.sub_range_map(range);
        for (sub_range, values) in sub.iter() {
            if !values.contains(&value) {
                let mut updated = values.clone();
                updated.push(value.clone());
                self.insert_coalescing(sub_range.clone(), updated);
            }
        }
    }
}

impl<K, V> Default for RangeMap<K, V>
where
    K: Endpoint,
    V: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

// Implemented by hand so the dump reads as a map of entries rather
// than exposing the private entry collection.
impl<K, V> Debug for RangeMap<K, V>
where
    K: Endpoint,
    V: Clone + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(Range<K>, V)> for RangeMap<K, V>
where
    K: Endpoint,
    V: Clone + PartialEq,
{
    fn from_iter<T: IntoIterator<Item = (Range<K>, V)>>(iter: T) -> Self {
        let mut range_map = RangeMap::new();
        range_map.extend(iter);
        range_map
    }
}

impl<K, V> Extend<(Range<K>, V)> for RangeMap<K, V>
where
    K: Endpoint,
    V: Clone,
{
    fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(range, value)| {
            self.insert(range, value);
        })
    }
}

pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<RangeValue<K, V>>,
}

impl<K, V> IntoIterator for RangeMap<K, V>
where
    K: Endpoint,
{
    type Item = (Range<K>, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        let mut entries: Vec<RangeValue<K, V>> = self
            .entries
            .into_iter()
            .filter(|entry| !entry.range.is_empty())
            .collect();
        entries.sort_by(|a, b| {
            a.range
                .lower_endpoint()
                .scalar()
                .total_cmp(&b.range.lower_endpoint().scalar())
        });
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (Range<K>, V);
    fn next(&mut self) -> Option<(Range<K>, V)> {
        self.inner.next().map(|entry| (entry.range, entry.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(feature = "serde1")]
impl<K, V> Serialize for RangeMap<K, V>
where
    K: Endpoint + Serialize,
    V: Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let entries: Vec<(&Range<K>, &V)> = self.iter().collect();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for entry in entries {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Deserialize<'de> for RangeMap<K, V>
where
    K: Endpoint + Deserialize<'de>,
    V: Clone + PartialEq + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RangeMapVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct RangeMapVisitor<K, V> {
    marker: PhantomData<fn() -> RangeMap<K, V>>,
}

#[cfg(feature = "serde1")]
impl<K, V> RangeMapVisitor<K, V> {
    fn new() -> Self {
        RangeMapVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Visitor<'de> for RangeMapVisitor<K, V>
where
    K: Endpoint + Deserialize<'de>,
    V: Clone + PartialEq + Deserialize<'de>,
{
    type Value = RangeMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("RangeMap")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut range_map = RangeMap::new();
        while let Some((range, value)) = access.next_element()? {
            range_map.insert(range, value);
        }
        Ok(range_map)
    }
}
