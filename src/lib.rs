//! A fixed-length numeric vector with indexed access, bulk reset and in-place iteration

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod error;
pub mod math;
pub mod vector;

pub use crate::error::VectorError;
pub use crate::vector::{join, Fill, Size, Source, Update, Vector};
