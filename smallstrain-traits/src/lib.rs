use nalgebra::{ClosedAdd, ClosedDiv, ClosedMul, ClosedSub, Scalar};
use num::{One, Zero};

pub use nalgebra;

pub mod allocators;

/// A scalar type with the field arithmetic needed for small-strain kinematics.
///
/// This is deliberately weaker than [`RealField`](nalgebra::RealField): no ordering, no square roots and no
/// conversion from floating point literals. Besides `f32` and `f64` it is satisfied by exact rationals,
/// dual numbers carrying derivative information and purely structural (symbolic) scalars.
pub trait FieldScalar: Scalar + Zero + One + ClosedAdd + ClosedSub + ClosedMul + ClosedDiv {}

impl<T> FieldScalar for T where T: Scalar + Zero + One + ClosedAdd + ClosedSub + ClosedMul + ClosedDiv {}

/// Returns $1 + 1$.
pub fn two<T: FieldScalar>() -> T {
    T::one() + T::one()
}

/// Returns $\frac{1}{2}$, formed without any floating point literal.
pub fn half<T: FieldScalar>() -> T {
    T::one() / two()
}
