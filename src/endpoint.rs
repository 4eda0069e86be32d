use core::fmt;

/// An ordered value usable as a [`Range`](crate::Range) endpoint.
///
/// Every ordering decision in this crate goes through [`scalar`],
/// the value's numeric key. Endpoints of different concrete
/// representations may therefore be mixed inside one range (say, a
/// plain number against a wrapped timestamp, folded into one enum) —
/// no conversion happens, the keys alone are compared.
///
/// The two sentinel constructors say what an unbounded side looks like
/// in the type's own representation; their keys must project to the
/// IEEE infinities for the unbounded factories ([`Range::all`],
/// [`Range::at_least`], ...) and the `-∞`/`+∞` display forms to work.
///
/// [`scalar`]: Endpoint::scalar
/// [`Range::all`]: crate::Range::all
/// [`Range::at_least`]: crate::Range::at_least
pub trait Endpoint: Clone {
    /// Numeric key used for every ordering decision.
    fn scalar(&self) -> f64;

    /// The sentinel below every finite endpoint.
    fn neg_infinity() -> Self;

    /// The sentinel above every finite endpoint.
    fn pos_infinity() -> Self;

    /// Renders the endpoint inside a range's display output.
    ///
    /// Endpoints with an infinite key render as `-∞`/`+∞` before this
    /// is consulted. Types with a richer textual form (timestamps,
    /// calendar values) override the default, which writes the key.
    fn fmt_endpoint(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar())
    }
}

impl Endpoint for f64 {
    fn scalar(&self) -> f64 {
        *self
    }

    fn neg_infinity() -> Self {
        f64::NEG_INFINITY
    }

    fn pos_infinity() -> Self {
        f64::INFINITY
    }
}

impl Endpoint for f32 {
    fn scalar(&self) -> f64 {
        f64::from(*self)
    }

    fn neg_infinity() -> Self {
        f32::NEG_INFINITY
    }

    fn pos_infinity() -> Self {
        f32::INFINITY
    }
}
