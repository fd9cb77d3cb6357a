//! Small-strain kinematics.
use crate::allocators::TensorAllocator;
use crate::cache::DeformationGradientCache;
use crate::{half, FieldScalar, SmallDim};
use itertools::izip;
use log::trace;
use nalgebra::{DefaultAllocator, OMatrix, Scalar, U2, U3};

/// Computes the infinitesimal strain tensor
/// $$
/// \vec \epsilon(\vec F) = \frac{1}{2} (\vec F + \vec F^T) - \vec I
/// $$
/// associated with the deformation gradient $\vec F$.
///
/// The result is symmetric by construction.
#[allow(non_snake_case)]
pub fn infinitesimal_strain_tensor<T, D>(deformation_gradient: &OMatrix<T, D, D>) -> OMatrix<T, D, D>
where
    T: FieldScalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    let F = deformation_gradient;
    (F + F.transpose()) * half::<T>() - OMatrix::<T, D, D>::identity()
}

/// Cached infinitesimal strain tensors and their traces for the quadrature points of a single element.
///
/// The number of quadrature points is fixed at construction. Storage is allocated once, and every call
/// to [`update`](Self::update) overwrites all entries in place. Before the first update the cache holds
/// zero strain everywhere, i.e. the values associated with the undeformed configuration
/// $\vec F = \vec I$.
///
/// The cache is generic over any [`FieldScalar`], so the same code serves floating point evaluation,
/// automatic differentiation and structural analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StrainCache<T, D>
where
    T: Scalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    element_index: usize,
    strains: Vec<OMatrix<T, D, D>>,
    trace_strains: Vec<T>,
}

/// Strain cache for two-dimensional elements.
pub type StrainCache2<T> = StrainCache<T, U2>;

/// Strain cache for three-dimensional elements.
pub type StrainCache3<T> = StrainCache<T, U3>;

impl<T, D> StrainCache<T, D>
where
    T: FieldScalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    /// Allocates a cache for the given element with storage for `num_quadrature_points` entries.
    pub fn new(element_index: usize, num_quadrature_points: usize) -> Self {
        trace!(
            "Allocating strain cache for element {} with {} quadrature points",
            element_index,
            num_quadrature_points
        );
        Self {
            element_index,
            strains: vec![OMatrix::<T, D, D>::zeros(); num_quadrature_points],
            trace_strains: vec![T::zero(); num_quadrature_points],
        }
    }

    /// Allocates a cache sized to the given deformation gradients and immediately updates it.
    pub fn from_deformation_gradients(element_index: usize, deformation_gradients: &[OMatrix<T, D, D>]) -> Self {
        let mut cache = Self::new(element_index, deformation_gradients.len());
        cache.update(deformation_gradients);
        cache
    }

    /// Recomputes strain and trace of strain at every quadrature point.
    ///
    /// For each quadrature point $i$, the strain $\vec \epsilon_i = \vec \epsilon(\vec F_i)$ is computed
    /// first, and its trace is then taken from the freshly computed strain.
    ///
    /// # Panics
    ///
    /// Panics if the number of deformation gradients does not match the number of quadrature points.
    /// The check happens before any entry is modified.
    #[allow(non_snake_case)]
    pub fn update(&mut self, deformation_gradients: &[OMatrix<T, D, D>]) {
        assert_eq!(
            deformation_gradients.len(),
            self.num_quadrature_points(),
            "Element {}: number of deformation gradients must match number of quadrature points.",
            self.element_index
        );

        let iter = izip!(&mut self.strains, &mut self.trace_strains, deformation_gradients);
        for (strain, trace_strain, F) in iter {
            *strain = infinitesimal_strain_tensor(F);
            *trace_strain = strain.trace();
        }
    }
}

impl<T, D> StrainCache<T, D>
where
    T: Scalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    /// The index of the element that owns this cache.
    pub fn element_index(&self) -> usize {
        self.element_index
    }

    /// The number of quadrature points, fixed at construction.
    pub fn num_quadrature_points(&self) -> usize {
        self.strains.len()
    }

    /// The strain tensors, one per quadrature point.
    pub fn strains(&self) -> &[OMatrix<T, D, D>] {
        &self.strains
    }

    /// The traces of the strain tensors, one per quadrature point.
    pub fn trace_strains(&self) -> &[T] {
        &self.trace_strains
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn strain(&self, quadrature_index: usize) -> &OMatrix<T, D, D> {
        &self.strains[quadrature_index]
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn trace_strain(&self, quadrature_index: usize) -> &T {
        &self.trace_strains[quadrature_index]
    }

    /// Iterates over `(strain, trace_strain)` pairs in quadrature point order.
    pub fn iter(&self) -> impl Iterator<Item = (&OMatrix<T, D, D>, &T)> {
        self.strains.iter().zip(&self.trace_strains)
    }
}

impl<T, D> DeformationGradientCache<T, D> for StrainCache<T, D>
where
    T: FieldScalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    fn element_index(&self) -> usize {
        StrainCache::element_index(self)
    }

    fn num_quadrature_points(&self) -> usize {
        StrainCache::num_quadrature_points(self)
    }

    fn update(&mut self, deformation_gradients: &[OMatrix<T, D, D>]) {
        StrainCache::update(self, deformation_gradients)
    }
}
