//! Provenance of artifacts produced by the generation and order flows.

/// An artifact tagged with where it came from.
///
/// Remote failures never surface as errors; instead the flow substitutes a
/// locally built artifact and tags it [`Sourced::LocallyFabricated`] so the
/// caller can tell the two paths apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// Returned by the remote service.
    ServerSourced(T),
    /// Built locally because the remote call failed.
    LocallyFabricated(T),
}

impl<T> Sourced<T> {
    pub fn value(&self) -> &T {
        match self {
            Sourced::ServerSourced(v) | Sourced::LocallyFabricated(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::ServerSourced(v) | Sourced::LocallyFabricated(v) => v,
        }
    }

    pub fn is_fabricated(&self) -> bool {
        matches!(self, Sourced::LocallyFabricated(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        match self {
            Sourced::ServerSourced(v) => Sourced::ServerSourced(f(v)),
            Sourced::LocallyFabricated(v) => Sourced::LocallyFabricated(f(v)),
        }
    }
}
