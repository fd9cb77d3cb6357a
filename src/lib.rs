//! Per-quadrature-point kinematics caches for small-strain finite element computations.
//!
//! The central type is [`StrainCache`](strain::StrainCache), which stores the infinitesimal strain tensor
//! $$
//! \vec \epsilon = \frac{1}{2} (\vec F + \vec F^T) - \vec I
//! $$
//! and its trace $\operatorname{tr}(\vec \epsilon)$ for every quadrature point of a single element, so that
//! stress, energy and stiffness evaluations within the same step can reuse them.
use nalgebra::DimName;

pub mod allocators;
pub mod cache;
pub mod strain;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub use smallstrain_traits::{half, two, FieldScalar};

pub extern crate nalgebra;

/// A small, fixed-size spatial dimension.
///
/// Used as a trait alias for the dimension bounds needed by generic `smallstrain` routines.
pub trait SmallDim: DimName {}

impl<D> SmallDim for D where D: DimName {}
