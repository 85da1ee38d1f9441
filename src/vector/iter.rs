use std::fmt;
use std::fmt::{Debug, Formatter};

/// The result of a `map` callback.
///
/// `()` and `None` leave the element unchanged.
pub trait Update {
    fn into_update(self) -> Option<f64>;
}

impl Update for () {
    fn into_update(self) -> Option<f64> {
        None
    }
}

impl Update for f64 {
    fn into_update(self) -> Option<f64> {
        Some(self)
    }
}

impl Update for Option<f64> {
    fn into_update(self) -> Option<f64> {
        self
    }
}

/// The value written to every element by [`Vector::fill`](crate::Vector::fill)
pub enum Fill<'a> {
    Value(f64),
    /// Called once per element, in index order
    With(Box<dyn FnMut() -> f64 + 'a>),
}

impl<'a> Fill<'a> {
    pub fn with(f: impl FnMut() -> f64 + 'a) -> Self {
        Fill::With(Box::new(f))
    }

    pub(crate) fn next_value(&mut self) -> f64 {
        match self {
            Fill::Value(value) => *value,
            Fill::With(f) => f(),
        }
    }
}

impl Default for Fill<'_> {
    fn default() -> Self {
        Fill::Value(0.)
    }
}

impl From<f64> for Fill<'_> {
    fn from(value: f64) -> Self {
        Fill::Value(value)
    }
}

impl Debug for Fill<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Value(value) => write!(f, "Fill::Value({})", value),
            Fill::With(_) => f.write_str("Fill::With(..)"),
        }
    }
}
