//! A fixed-length numeric vector

mod iter;
mod size;

pub use self::iter::{Fill, Update};
pub use self::size::{Size, Source};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use itertools::Itertools;

use crate::error::VectorError;

/// The size of a vector built without an explicit size
pub const DEFAULT_SIZE: usize = 2;

/// A fixed-length sequence of numbers.
///
/// The size is set on construction and no operation changes it afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    size: usize,
    value: Vec<f64>,
}

impl Vector {
    /// Creates a vector from a size descriptor.
    ///
    /// Unless the descriptor carries more than one value, the vector starts as
    /// the identity vector `[1, 0, .., 0]`.
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// assert_eq!(&[1., 0., 0.], Vector::new(3).value());
    /// assert_eq!(&[3., 2., 4.], Vector::new([3., 2., 4.]).value());
    /// assert_eq!(5, Vector::new([5.]).size());
    /// assert_eq!(2, Vector::new(None).size());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the length cannot be allocated. A single value is converted with `as usize`,
    /// so a huge value becomes `usize::MAX` and panics the same way.
    pub fn new(size: impl Into<Size>) -> Self {
        match size.into() {
            Size::Default => Self::identity(DEFAULT_SIZE),
            Size::Len(len) => Self::identity(len),
            Size::Values(values) => match values.len() {
                0 => Self::identity(0),
                // one value is a length; `as` maps negatives and NaN to 0
                1 => Self::identity(values[0] as usize),
                _ => Self::from_values(values),
            },
        }
    }

    /// Creates a vector holding exactly `values`, whatever their count
    pub fn from_values(values: Vec<f64>) -> Self {
        trace!("vector from {} values", values.len());
        Self {
            size: values.len(),
            value: values,
        }
    }

    fn identity(size: usize) -> Self {
        trace!("identity vector of size {}", size);
        let mut vector = Self {
            size,
            value: vec![0.; size],
        };
        vector.reset();
        vector
    }

    /// Concatenates the values of `a` and `b` into a new vector
    pub fn join(a: &Vector, b: &Vector) -> Vector {
        Self::from_values(a.iter().chain(b.iter()).collect())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<f64> {
        self.value.get(index).copied()
    }

    pub fn try_get(&self, index: usize) -> Result<f64, VectorError> {
        self.get(index)
            .ok_or_else(|| VectorError::out_of_range(index, self.size))
    }

    /// Returns a setter for the element at `index`.
    ///
    /// Nothing is written until the setter is called. A write past the end is dropped.
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let mut v = Vector::new(5);
    /// v.set(3)(4.);
    /// assert_eq!(Some(4.), v.get(3));
    /// ```
    pub fn set(&mut self, index: usize) -> impl FnMut(f64) + '_ {
        move |value| {
            if let Err(e) = self.set_at(index, value) {
                warn!("dropped write of {}: {}", value, e);
            }
        }
    }

    pub fn set_at(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let size = self.size;
        let element = self
            .value
            .get_mut(index)
            .ok_or_else(|| VectorError::out_of_range(index, size))?;
        *element = value;
        Ok(())
    }

    /// The underlying values, borrowed rather than copied
    pub fn value(&self) -> &[f64] {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut [f64] {
        &mut self.value
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.value
    }

    /// Copies elements from `source` into this vector, starting at index 0.
    ///
    /// A source that is not a vector is built into one with [`Vector::new`]. The size of this
    /// vector does not change: a longer source is truncated.
    pub fn copy<'a>(&mut self, source: impl Into<Source<'a>>) -> &mut Self {
        let built;
        let source = match source.into() {
            Source::Vector(vector) => vector,
            Source::Size(size) => {
                built = Vector::new(size);
                &built
            }
        };
        if source.size > self.size {
            debug!(
                "copy truncated from {} to {} elements",
                source.size, self.size
            );
        }
        let len = self.size.min(source.size);
        self.value[..len].copy_from_slice(&source.value[..len]);
        self
    }

    /// Calls `callback` with each element, its index and the vector, in index order.
    ///
    /// The element is replaced by the callback's result unless it returns `()` or `None`.
    /// Replacements are visible to later calls.
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let mut v = Vector::new([1., 2., 3.]);
    /// v.map(|x, i, _| if i == 1 { None } else { Some(x * 10.) });
    /// assert_eq!(&[10., 2., 30.], v.value());
    /// ```
    pub fn map<F, R>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(f64, usize, &Vector) -> R,
        R: Update,
    {
        self.map_with(&mut (), |_, value, index, vector| {
            callback(value, index, vector)
        })
    }

    /// Like [`Vector::map`], passing `handler` to each call
    pub fn map_with<H, F, R>(&mut self, handler: &mut H, mut callback: F) -> &mut Self
    where
        F: FnMut(&mut H, f64, usize, &Vector) -> R,
        R: Update,
    {
        for index in 0..self.size {
            let current = self.value[index];
            if let Some(value) = callback(handler, current, index, &*self).into_update() {
                self.value[index] = value;
            }
        }
        self
    }

    /// Calls `callback` with each element, its index and the vector, in index order
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(f64, usize, &Vector),
    {
        self.for_each_with(&mut (), |_, value, index, vector| {
            callback(value, index, vector)
        })
    }

    pub fn for_each_with<H, F>(&self, handler: &mut H, mut callback: F)
    where
        F: FnMut(&mut H, f64, usize, &Vector),
    {
        for (index, &value) in self.value.iter().enumerate() {
            callback(handler, value, index, self);
        }
    }

    /// Sets every element to 0
    pub fn zero(&mut self) -> &mut Self {
        self.fill(Fill::default())
    }

    /// Sets every element to the fill value
    pub fn fill<'a>(&mut self, fill: impl Into<Fill<'a>>) -> &mut Self {
        let mut fill = fill.into();
        trace!("fill {:?}", fill);
        for element in &mut self.value {
            *element = fill.next_value();
        }
        self
    }

    /// Resets to the identity vector `[1, 0, .., 0]`
    pub fn reset(&mut self) -> &mut Self {
        self.zero();
        if let Some(first) = self.value.first_mut() {
            *first = 1.;
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.value.iter().copied()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, f64> {
        self.value.iter_mut()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(Size::Default)
    }
}

impl From<usize> for Vector {
    fn from(size: usize) -> Self {
        Self::new(size)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.value
    }
}

impl AsMut<[f64]> for Vector {
    fn as_mut(&mut self) -> &mut [f64] {
        &mut self.value
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.value[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.value[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut f64;
    type IntoIter = slice::IterMut<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter_mut()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.value.iter().format(", "))
    }
}

/// Concatenates the values of `a` and `b` into a new vector
pub fn join(a: &Vector, b: &Vector) -> Vector {
    Vector::join(a, b)
}
