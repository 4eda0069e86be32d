use core::fmt::{self, Debug, Display};

use crate::bound::BoundType;
use crate::endpoint::Endpoint;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// A contiguous span of ordered values, bounded on each side by an
/// endpoint that is either included ([`Closed`]) or excluded
/// ([`Open`]).
///
/// Ranges are plain values: built once through [`new`] or the named
/// factories, never mutated afterwards. Two ranges are equal iff all
/// four fields are equal; two ranges are distinct even when they cover
/// the same values through different bounds.
///
/// A range whose endpoints share one numeric key is the single point
/// when both bounds are closed, and empty when either is open. Ranges
/// whose lower key exceeds their upper key are never produced by the
/// factories; constructing one is a caller error and no operation
/// defines its behavior.
///
/// An unbounded side is represented by the endpoint type's infinity
/// sentinel paired with an open bound — see [`Endpoint`].
///
/// [`Closed`]: BoundType::Closed
/// [`Open`]: BoundType::Open
/// [`new`]: Range::new
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Range<T> {
    lower: T,
    lower_bound: BoundType,
    upper: T,
    upper_bound: BoundType,
}

impl<T> Range<T>
where
    T: Endpoint,
{
    /// Makes a range directly from its four fields.
    pub fn new(lower: T, lower_bound: BoundType, upper: T, upper_bound: BoundType) -> Range<T> {
        Range {
            lower,
            lower_bound,
            upper,
            upper_bound,
        }
    }

    /// All values strictly greater than `lower` and strictly less than
    /// `upper`.
    pub fn open(lower: T, upper: T) -> Range<T> {
        Range::new(lower, BoundType::Open, upper, BoundType::Open)
    }

    /// All values greater than or equal to `lower` and less than or
    /// equal to `upper`.
    pub fn closed(lower: T, upper: T) -> Range<T> {
        Range::new(lower, BoundType::Closed, upper, BoundType::Closed)
    }

    /// All values greater than or equal to `lower` and strictly less
    /// than `upper`.
    pub fn closed_open(lower: T, upper: T) -> Range<T> {
        Range::new(lower, BoundType::Closed, upper, BoundType::Open)
    }

    /// All values strictly greater than `lower` and less than or equal
    /// to `upper`.
    pub fn open_closed(lower: T, upper: T) -> Range<T> {
        Range::new(lower, BoundType::Open, upper, BoundType::Closed)
    }

    /// Every value.
    pub fn all() -> Range<T> {
        Range::new(
            T::neg_infinity(),
            BoundType::Open,
            T::pos_infinity(),
            BoundType::Open,
        )
    }

    /// All values greater than or equal to `endpoint`.
    pub fn at_least(endpoint: T) -> Range<T> {
        Range::down_to(endpoint, BoundType::Closed)
    }

    /// All values less than or equal to `endpoint`.
    pub fn at_most(endpoint: T) -> Range<T> {
        Range::up_to(endpoint, BoundType::Closed)
    }

    /// All values below `endpoint`, which is included or excluded
    /// according to `bound_type`.
    pub fn up_to(endpoint: T, bound_type: BoundType) -> Range<T> {
        Range::new(T::neg_infinity(), BoundType::Open, endpoint, bound_type)
    }

    /// All values above `endpoint`, which is included or excluded
    /// according to `bound_type`.
    pub fn down_to(endpoint: T, bound_type: BoundType) -> Range<T> {
        Range::new(endpoint, bound_type, T::pos_infinity(), BoundType::Open)
    }

    pub fn lower_endpoint(&self) -> &T {
        &self.lower
    }

    pub fn lower_bound_type(&self) -> BoundType {
        self.lower_bound
    }

    pub fn upper_endpoint(&self) -> &T {
        &self.upper
    }

    pub fn upper_bound_type(&self) -> BoundType {
        self.upper_bound
    }

    /// Returns `true` if `value` lies within the bounds of this range.
    pub fn contains(&self, value: &T) -> bool {
        let key = value.scalar();
        let above_lower = match self.lower_bound {
            BoundType::Open => self.lower.scalar() < key,
            BoundType::Closed => self.lower.scalar() <= key,
        };
        let below_upper = match self.upper_bound {
            BoundType::Open => self.upper.scalar() > key,
            BoundType::Closed => self.upper.scalar() >= key,
        };
        above_lower && below_upper
    }

    /// Returns `true` if this range is of the form `[v..v)` or
    /// `(v..v]`, i.e. it contains no values.
    pub fn is_empty(&self) -> bool {
        self.lower.scalar() == self.upper.scalar()
            && (self.lower_bound == BoundType::Open || self.upper_bound == BoundType::Open)
    }

    /// Returns `true` if the union of the two ranges forms a single
    /// contiguous range — they overlap, or merely touch at a shared
    /// endpoint.
    ///
    /// Equivalently: at least one of the two contains an endpoint of
    /// the other.
    pub fn is_connected(&self, other: &Range<T>) -> bool {
        self.contains(&other.lower)
            || self.contains(&other.upper)
            || other.contains(&self.lower)
            || other.contains(&self.upper)
    }

    /// Returns the maximal range enclosed by both this range and
    /// `other`, or `None` if they are not connected.
    ///
    /// The result can be empty: two ranges touching at one point with
    /// complementary bounds intersect to a zero-width range there.
    pub fn intersection(&self, other: &Range<T>) -> Option<Range<T>> {
        if !self.is_connected(other) {
            return None;
        }

        // The numerically larger lower endpoint and the smaller upper
        // endpoint bound the shared region.
        let lower_source = if self.lower.scalar() <= other.lower.scalar() {
            other
        } else {
            self
        };
        let upper_source = if self.upper.scalar() >= other.upper.scalar() {
            other
        } else {
            self
        };

        // On an endpoint tie the stricter bound wins.
        let lower_bound = if self.lower.scalar() == other.lower.scalar() {
            if self.lower_bound == BoundType::Open || other.lower_bound == BoundType::Open {
                BoundType::Open
            } else {
                BoundType::Closed
            }
        } else {
            lower_source.lower_bound
        };
        let upper_bound = if self.upper.scalar() == other.upper.scalar() {
            if self.upper_bound == BoundType::Open || other.upper_bound == BoundType::Open {
                BoundType::Open
            } else {
                BoundType::Closed
            }
        } else {
            upper_source.upper_bound
        };

        Some(Range::new(
            lower_source.lower.clone(),
            lower_bound,
            upper_source.upper.clone(),
            upper_bound,
        ))
    }

    /// Returns the minimal range enclosing both this range and
    /// `other`, whether or not they are connected.
    pub fn span(&self, other: &Range<T>) -> Range<T> {
        let lower_source = if self.lower.scalar() <= other.lower.scalar() {
            self
        } else {
            other
        };
        let upper_source = if self.upper.scalar() >= other.upper.scalar() {
            self
        } else {
            other
        };

        // On an endpoint tie the more inclusive bound wins.
        let lower_bound = if self.lower.scalar() == other.lower.scalar() {
            if self.lower_bound == BoundType::Closed || other.lower_bound == BoundType::Closed {
                BoundType::Closed
            } else {
                BoundType::Open
            }
        } else {
            lower_source.lower_bound
        };
        let upper_bound = if self.upper.scalar() == other.upper.scalar() {
            if self.upper_bound == BoundType::Closed || other.upper_bound == BoundType::Closed {
                BoundType::Closed
            } else {
                BoundType::Open
            }
        } else {
            upper_source.upper_bound
        };

        Range::new(
            lower_source.lower.clone(),
            lower_bound,
            upper_source.upper.clone(),
            upper_bound,
        )
    }

    /// Returns `true` if the two ranges share at least one value.
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        self.intersection(other)
            .map_or(false, |intersection| !intersection.is_empty())
    }

    /// Returns `true` if the bounds of `other` do not extend outside
    /// the bounds of this range, i.e. every value in `other` is in
    /// `self`.
    ///
    /// An open endpoint of `other` does not itself have to be inside
    /// `self`: the excluded point contributes nothing, so a shared
    /// endpoint key is enough on that side.
    pub fn encloses(&self, other: &Range<T>) -> bool {
        let lower_enclosed = match other.lower_bound {
            BoundType::Open => {
                self.contains(&other.lower) || self.lower.scalar() == other.lower.scalar()
            }
            BoundType::Closed => self.contains(&other.lower),
        };
        let upper_enclosed = match other.upper_bound {
            BoundType::Open => {
                self.contains(&other.upper) || self.upper.scalar() == other.upper.scalar()
            }
            BoundType::Closed => self.contains(&other.upper),
        };
        lower_enclosed && upper_enclosed
    }
}

struct EndpointFmt<'a, T>(&'a T);

impl<T> Display for EndpointFmt<'_, T>
where
    T: Endpoint,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.0.scalar();
        if key == f64::INFINITY {
            f.write_str("+∞")
        } else if key == f64::NEG_INFINITY {
            f.write_str("-∞")
        } else {
            self.0.fmt_endpoint(f)
        }
    }
}

/// Renders the range as `[2..5)`, `(4..9]`, `(-∞..+∞)`, ... — `(`/`[`
/// for an open/closed lower bound, `)`/`]` for the upper bound, and
/// each endpoint displayed by its own rule.
impl<T> Display for Range<T>
where
    T: Endpoint,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_char = match self.lower_bound {
            BoundType::Open => '(',
            BoundType::Closed => '[',
        };
        let upper_char = match self.upper_bound {
            BoundType::Open => ')',
            BoundType::Closed => ']',
        };
        write!(
            f,
            "{}{}..{}{}",
            lower_char,
            EndpointFmt(&self.lower),
            EndpointFmt(&self.upper),
            upper_char
        )
    }
}

// The display form is unambiguous, so use it for `Debug` too; it keeps
// map dumps and assertion output readable.
impl<T> Debug for Range<T>
where
    T: Endpoint,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
