//! Property tests for the per-shape formulas.

use proptest::prelude::*;
use std::f64::consts::PI;

use solid_shapes::{
    Circle, Cube, Dimension, Rectangle, Shape, ShapeSpec, Square, ThreeDimensionalShape,
};

fn dimension() -> impl Strategy<Value = f64> {
    0.0f64..1.0e6
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Square area is length squared.
    #[test]
    fn property_square_area(length in dimension()) {
        prop_assert_eq!(Square::new(length).area().unwrap(), length * length);
    }

    /// PROPERTY: Rectangle area is width times height.
    #[test]
    fn property_rectangle_area(width in dimension(), height in dimension()) {
        prop_assert_eq!(Rectangle::new(width, height).area().unwrap(), width * height);
    }

    /// PROPERTY: Circle area is pi r squared, within floating-point tolerance.
    #[test]
    fn property_circle_area(radius in dimension()) {
        let area = Circle::new(radius).area().unwrap();
        let expected = PI * radius * radius;
        prop_assert!((area - expected).abs() <= expected.abs() * 1e-12 + 1e-12);
    }

    /// PROPERTY: Cube area is six faces and volume is edge cubed.
    #[test]
    fn property_cube_area_and_volume(edge in dimension()) {
        let cube = Cube::new(edge);
        prop_assert_eq!(cube.area().unwrap(), 6.0 * edge * edge);
        prop_assert_eq!(cube.volume(), edge * edge * edge);
    }

    /// PROPERTY: Conforming shapes give finite, non-negative areas.
    #[test]
    fn property_areas_are_finite_and_non_negative(d in dimension(), e in dimension()) {
        let shapes: [&dyn Shape; 4] = [
            &Square::new(d),
            &Rectangle::new(d, e),
            &Circle::new(d),
            &Cube::new(e),
        ];
        for shape in shapes {
            let area = shape.area().unwrap();
            prop_assert!(area.is_finite());
            prop_assert!(area >= 0.0);
        }
    }

    /// PROPERTY: Every accepted spec, up to the largest dimension, has a finite
    /// non-negative area and, for solids, a finite volume.
    #[test]
    fn property_accepted_specs_have_finite_measures(
        kind in 0usize..4,
        a in 0.0f64..=Dimension::MAX,
        b in 0.0f64..=Dimension::MAX,
    ) {
        let text = match kind {
            0 => format!("square:{a}"),
            1 => format!("rectangle:{a}x{b}"),
            2 => format!("circle:{a}"),
            _ => format!("cube:{a}"),
        };
        let spec: ShapeSpec = text.parse().unwrap();
        let area = spec.to_shape().area().unwrap();
        prop_assert!(area.is_finite() && area >= 0.0, "{} gave {}", text, area);
        if let Some(solid) = spec.to_solid() {
            prop_assert!(solid.volume().is_finite());
        }
    }

    /// PROPERTY: Dimensions above the maximum are rejected.
    #[test]
    fn property_oversized_dimensions_rejected(value in 1.0e101f64..f64::MAX) {
        let square = format!("square:{value}");
        prop_assert!(square.parse::<ShapeSpec>().is_err());
    }
}
