//! Helper traits for allocator trait bounds.
pub use smallstrain_traits::allocators::*;
