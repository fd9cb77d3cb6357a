//! Constitutive evaluation on top of cached small-strain kinematics.
use itertools::izip;
use smallstrain::allocators::DimAllocator;
use smallstrain::nalgebra::{DefaultAllocator, OMatrix, OVector, Scalar};
use smallstrain::strain::StrainCache;
use smallstrain::{FieldScalar, SmallDim};

pub mod materials;

/// A material whose response is fully determined by the infinitesimal strain tensor $\vec \epsilon$.
///
/// The strain and its trace are taken as inputs rather than the deformation gradient, so that they can be
/// read from a [`StrainCache`] instead of being recomputed by every consumer.
pub trait SmallStrainMaterial<T, D>
where
    T: Scalar,
    D: SmallDim,
    DefaultAllocator: DimAllocator<T, D>,
{
    type Parameters: Clone + Default + 'static;

    /// Compute the strain energy density $\psi = \psi(\vec \epsilon)$.
    fn compute_energy_density(&self, strain: &OMatrix<T, D, D>, trace_strain: &T, parameters: &Self::Parameters) -> T;

    /// Compute the first Piola-Kirchhoff stress tensor $\vec P = \frac{\partial \psi}{\partial \vec F}$.
    fn compute_stress_tensor(
        &self,
        strain: &OMatrix<T, D, D>,
        trace_strain: &T,
        parameters: &Self::Parameters,
    ) -> OMatrix<T, D, D>;

    /// Compute the stress contraction operator $\\mathcal{C}\_{\vec P}(\vec F, \vec a, \vec b)$.
    ///
    /// The contraction operator is defined by
    /// $$
    /// \\mathcal{C}\_{\vec P} (\vec F, \vec a, \vec b)
    ///     := a_k \frac{\partial P_{ik}}{\partial F_{jm}} (\vec F) \\, b_m \enspace \vec e_i \otimes \vec e_j.
    /// $$
    fn compute_stress_contraction(
        &self,
        strain: &OMatrix<T, D, D>,
        trace_strain: &T,
        a: &OVector<T, D>,
        b: &OVector<T, D>,
        parameters: &Self::Parameters,
    ) -> OMatrix<T, D, D>;
}

/// Evaluates the energy density at every quadrature point of the cache.
///
/// # Panics
///
/// Panics if the output length does not match the number of quadrature points in the cache.
pub fn compute_energy_densities_into<T, D, Material>(
    material: &Material,
    cache: &StrainCache<T, D>,
    parameters: &Material::Parameters,
    energy_densities: &mut [T],
) where
    T: FieldScalar,
    D: SmallDim,
    Material: SmallStrainMaterial<T, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    assert_eq!(
        energy_densities.len(),
        cache.num_quadrature_points(),
        "Element {}: output length must match number of quadrature points.",
        cache.element_index()
    );
    for (psi, strain, trace_strain) in izip!(energy_densities, cache.strains(), cache.trace_strains()) {
        *psi = material.compute_energy_density(strain, trace_strain, parameters);
    }
}

/// Evaluates the stress tensor at every quadrature point of the cache.
///
/// # Panics
///
/// Panics if the output length does not match the number of quadrature points in the cache.
pub fn compute_stress_tensors_into<T, D, Material>(
    material: &Material,
    cache: &StrainCache<T, D>,
    parameters: &Material::Parameters,
    stresses: &mut [OMatrix<T, D, D>],
) where
    T: FieldScalar,
    D: SmallDim,
    Material: SmallStrainMaterial<T, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    assert_eq!(
        stresses.len(),
        cache.num_quadrature_points(),
        "Element {}: output length must match number of quadrature points.",
        cache.element_index()
    );
    for (stress, strain, trace_strain) in izip!(stresses, cache.strains(), cache.trace_strains()) {
        *stress = material.compute_stress_tensor(strain, trace_strain, parameters);
    }
}

/// Computes the quadrature approximation $\sum_i w_i \psi(\vec \epsilon_i)$ of the elastic energy of the element.
///
/// The weights are expected to already include the determinant of the element Jacobian.
///
/// # Panics
///
/// Panics if the number of weights does not match the number of quadrature points in the cache.
pub fn compute_element_energy<T, D, Material>(
    material: &Material,
    cache: &StrainCache<T, D>,
    parameters: &Material::Parameters,
    quadrature_weights: &[T],
) -> T
where
    T: FieldScalar,
    D: SmallDim,
    Material: SmallStrainMaterial<T, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    assert_eq!(
        quadrature_weights.len(),
        cache.num_quadrature_points(),
        "Element {}: number of quadrature weights must match number of quadrature points.",
        cache.element_index()
    );
    let mut energy = T::zero();
    for (w, strain, trace_strain) in izip!(quadrature_weights, cache.strains(), cache.trace_strains()) {
        energy += w.clone() * material.compute_energy_density(strain, trace_strain, parameters);
    }
    energy
}
