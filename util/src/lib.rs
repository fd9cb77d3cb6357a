//! Scalar types used to check that generic code works beyond floating point.
//!
//! - [`Dual`] is a forward-mode automatic differentiation scalar.
//! - [`Sparsity`] is a structural scalar that only tracks which inputs a value depends on.
use num::{One, Zero};
use std::collections::BTreeSet;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A dual number $a + b \varepsilon$ with $\varepsilon^2 = 0$.
///
/// Evaluating a function on `Dual::variable(x)` yields $f(x)$ in `re` and $f'(x)$ in `eps`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dual {
    pub re: f64,
    pub eps: f64,
}

impl Dual {
    pub fn new(re: f64, eps: f64) -> Self {
        Self { re, eps }
    }

    pub fn constant(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Dual {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.eps + rhs.eps)
    }
}

impl Sub for Dual {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.eps - rhs.eps)
    }
}

impl Mul for Dual {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.re * rhs.re, self.re * rhs.eps + self.eps * rhs.re)
    }
}

impl Div for Dual {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let re = self.re / rhs.re;
        let eps = (self.eps * rhs.re - self.re * rhs.eps) / (rhs.re * rhs.re);
        Self::new(re, eps)
    }
}

/// Structural dependency information for a scalar value.
///
/// Arithmetic merges dependencies without ever cancelling them, which is exactly what is needed to
/// find out which inputs may influence an output (e.g. to build sparsity patterns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sparsity {
    /// A value that is structurally zero.
    Zero,
    /// A nonzero value that does not depend on any input.
    Constant,
    /// A value that depends on the inputs with the given indices.
    Depends(BTreeSet<usize>),
}

impl Sparsity {
    pub fn variable(index: usize) -> Self {
        Self::Depends(BTreeSet::from([index]))
    }

    pub fn dependencies(&self) -> Vec<usize> {
        match self {
            Self::Depends(indices) => indices.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    fn merge(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Depends(mut a), Self::Depends(b)) => {
                a.extend(b);
                Self::Depends(a)
            }
            (Self::Depends(a), _) | (_, Self::Depends(a)) => Self::Depends(a),
            (Self::Zero, Self::Zero) => Self::Zero,
            _ => Self::Constant,
        }
    }
}

impl Add for Sparsity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl Sub for Sparsity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl Mul for Sparsity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (lhs, rhs) => lhs.merge(rhs),
        }
    }
}

impl Div for Sparsity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert!(rhs != Self::Zero, "Structural division by zero");
        match self {
            Self::Zero => Self::Zero,
            lhs => lhs.merge(rhs),
        }
    }
}

macro_rules! impl_assign_ops {
    ($scalar:ty) => {
        impl AddAssign for $scalar {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.clone() + rhs;
            }
        }

        impl SubAssign for $scalar {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.clone() - rhs;
            }
        }

        impl MulAssign for $scalar {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.clone() * rhs;
            }
        }

        impl DivAssign for $scalar {
            fn div_assign(&mut self, rhs: Self) {
                *self = self.clone() / rhs;
            }
        }
    };
}

impl_assign_ops!(Dual);
impl_assign_ops!(Sparsity);

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.eps == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Zero for Sparsity {
    fn zero() -> Self {
        Self::Zero
    }

    fn is_zero(&self) -> bool {
        *self == Self::Zero
    }
}

impl One for Sparsity {
    fn one() -> Self {
        Self::Constant
    }
}
