//! Volume aggregation over three-dimensional shapes

use crate::domain::ports::ThreeDimensionalShape;

/// Total volume of `solids`; zero for an empty slice.
pub fn total_volume(solids: &[&dyn ThreeDimensionalShape]) -> f64 {
    solids.iter().fold(0.0, |total, s| total + s.volume())
}
