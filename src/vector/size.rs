use super::Vector;

/// Describes the vector to construct.
///
/// A single length builds an identity vector of that length. A sequence with more than one
/// element is taken as the initial values. A one-element sequence is read as a length.
#[derive(Clone, Debug, PartialEq)]
pub enum Size {
    /// The default of two elements
    Default,
    Len(usize),
    Values(Vec<f64>),
}

impl Default for Size {
    fn default() -> Self {
        Size::Default
    }
}

impl From<usize> for Size {
    fn from(len: usize) -> Self {
        Size::Len(len)
    }
}

impl From<Option<usize>> for Size {
    fn from(len: Option<usize>) -> Self {
        len.map_or(Size::Default, Size::Len)
    }
}

impl From<Vec<f64>> for Size {
    fn from(values: Vec<f64>) -> Self {
        Size::Values(values)
    }
}

impl From<&[f64]> for Size {
    fn from(values: &[f64]) -> Self {
        Size::Values(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Size {
    fn from(values: [f64; N]) -> Self {
        Size::Values(values.to_vec())
    }
}

/// The source of a [`Vector::copy`], either an existing vector or a descriptor that is
/// first built into one
#[derive(Debug)]
pub enum Source<'a> {
    Vector(&'a Vector),
    Size(Size),
}

impl<'a> From<&'a Vector> for Source<'a> {
    fn from(vector: &'a Vector) -> Self {
        Source::Vector(vector)
    }
}

impl From<Size> for Source<'_> {
    fn from(size: Size) -> Self {
        Source::Size(size)
    }
}

impl From<usize> for Source<'_> {
    fn from(len: usize) -> Self {
        Source::Size(len.into())
    }
}

impl From<Option<usize>> for Source<'_> {
    fn from(len: Option<usize>) -> Self {
        Source::Size(len.into())
    }
}

impl From<Vec<f64>> for Source<'_> {
    fn from(values: Vec<f64>) -> Self {
        Source::Size(values.into())
    }
}

impl From<&[f64]> for Source<'_> {
    fn from(values: &[f64]) -> Self {
        Source::Size(values.into())
    }
}

impl<const N: usize> From<[f64; N]> for Source<'_> {
    fn from(values: [f64; N]) -> Self {
        Source::Size(values.into())
    }
}
