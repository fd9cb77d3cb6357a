use crate::SmallStrainMaterial;
use eyre::ensure;
use log::warn;
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};
use smallstrain::allocators::DimAllocator;
use smallstrain::nalgebra::{DefaultAllocator, OMatrix, OVector, RealField};
use smallstrain::{half, two, FieldScalar, SmallDim};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LameParameters<T> {
    pub mu: T,
    pub lambda: T,
}

impl<T> Default for LameParameters<T>
where
    T: FieldScalar,
{
    fn default() -> Self {
        Self {
            mu: T::zero(),
            lambda: T::zero(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoungPoisson<T> {
    pub young: T,
    pub poisson: T,
}

impl<T> TryFrom<YoungPoisson<T>> for LameParameters<T>
where
    T: RealField,
{
    type Error = eyre::Report;

    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn try_from(params: YoungPoisson<T>) -> eyre::Result<Self> {
        let YoungPoisson { young, poisson } = params;

        let young_is_valid = young.is_finite() && young >= 0.0;
        let poisson_is_valid = poisson > -1.0 && poisson < 0.5;
        ensure!(young_is_valid, "Young's modulus must be finite and non-negative, got {}", young);
        ensure!(
            poisson_is_valid,
            "Poisson's ratio must lie in the open interval (-1, 0.5), got {}",
            poisson
        );

        // Accepted, but lambda grows without bound as poisson approaches 0.5
        let nearly_incompressible = poisson > 0.49;
        if nearly_incompressible {
            warn!(
                "Poisson's ratio {} is close to 0.5. The material is nearly incompressible and \
                 the resulting first Lamé parameter is very large.",
                poisson
            );
        }

        let mu = 0.5 * young / (1.0 + poisson.clone());
        let lambda = 2.0 * mu.clone() * poisson.clone() / (1.0 - 2.0 * poisson);
        Ok(Self { mu, lambda })
    }
}

/// The linear elastic material model.
///
/// Given Lamé parameters $\mu$ and $\lambda$, the strain energy density is
/// $$
/// \psi(\vec F) =
///     \mu \vec \epsilon : \vec \epsilon
///   + \frac{\lambda}{2} \operatorname{tr}^2(\vec \epsilon),
/// $$
/// where
/// $$
/// \vec \epsilon(\vec F) = \frac{(\vec F + \vec F^T)}{2} - \vec I
/// $$
/// is the infinitesimal strain tensor. The associated stress tensor is
/// $$
/// \vec P(\vec F) = 2 \mu \vec \epsilon + \lambda \operatorname{tr}(\vec \epsilon) \vec I.
/// $$
/// Finally, the contraction operator associated with the stress tensor is
/// $$
/// \mathcal{C}_{\vec P}(\vec F, \vec a, \vec b) =
///     \mu \left[ (\vec a \cdot \vec b) \vec I + \vec b \vec a^T \right]
///     + \lambda \vec a \vec b^T,
/// $$
/// which does not depend on $\vec F$.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearElasticMaterial;

#[allow(non_snake_case)]
impl<T, D> SmallStrainMaterial<T, D> for LinearElasticMaterial
where
    T: FieldScalar,
    D: SmallDim,
    DefaultAllocator: DimAllocator<T, D>,
{
    type Parameters = LameParameters<T>;

    fn compute_energy_density(&self, strain: &OMatrix<T, D, D>, trace_strain: &T, parameters: &Self::Parameters) -> T {
        let LameParameters { mu, lambda } = parameters.clone();
        let eps = strain;
        let tr = trace_strain.clone();
        mu * eps.dot(eps) + half::<T>() * lambda * tr.clone() * tr
    }

    fn compute_stress_tensor(
        &self,
        strain: &OMatrix<T, D, D>,
        trace_strain: &T,
        parameters: &Self::Parameters,
    ) -> OMatrix<T, D, D> {
        let LameParameters { mu, lambda } = parameters.clone();
        let I = OMatrix::<T, D, D>::identity();
        strain * (two::<T>() * mu) + I * (lambda * trace_strain.clone())
    }

    fn compute_stress_contraction(
        &self,
        _strain: &OMatrix<T, D, D>,
        _trace_strain: &T,
        a: &OVector<T, D>,
        b: &OVector<T, D>,
        parameters: &Self::Parameters,
    ) -> OMatrix<T, D, D> {
        let LameParameters { mu, lambda } = parameters.clone();
        let I = OMatrix::<T, D, D>::identity();
        (I * a.dot(b) + b * a.transpose()) * mu + a * b.transpose() * lambda
    }
}
