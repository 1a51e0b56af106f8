//! ThreeDimensionalShape port - the volume capability
//!
//! Kept apart from `Shape` so plane figures are never asked for a volume.

/// Anything that encloses a volume.
pub trait ThreeDimensionalShape {
    /// Enclosed volume
    fn volume(&self) -> f64;
}

impl<S: ThreeDimensionalShape + ?Sized> ThreeDimensionalShape for &S {
    fn volume(&self) -> f64 {
        (**self).volume()
    }
}

impl<S: ThreeDimensionalShape + ?Sized> ThreeDimensionalShape for Box<S> {
    fn volume(&self) -> f64 {
        (**self).volume()
    }
}
