//! Property tests for area aggregation.

use proptest::prelude::*;

use solid_shapes::{AreaCalculator, Printer, Shape, ShapeSpec, SumAreaCalculator};

fn spec() -> impl Strategy<Value = ShapeSpec> {
    let dim = 0u32..1000;
    prop_oneof![
        dim.clone().prop_map(|l| format!("square:{l}")),
        (dim.clone(), dim.clone()).prop_map(|(w, h)| format!("rectangle:{w}x{h}")),
        dim.clone().prop_map(|r| format!("circle:{r}")),
        dim.prop_map(|e| format!("cube:{e}")),
    ]
    .prop_map(|s| s.parse::<ShapeSpec>().unwrap())
}

fn total(specs: &[ShapeSpec]) -> f64 {
    let owned: Vec<Box<dyn Shape>> = specs.iter().map(ShapeSpec::to_shape).collect();
    let refs: Vec<&dyn Shape> = owned.iter().map(|s| s.as_ref()).collect();
    SumAreaCalculator::new().sum(&refs).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Reordering the inputs does not change the total.
    #[test]
    fn property_sum_is_order_independent(
        (specs, shuffled) in proptest::collection::vec(spec(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = total(&specs);
        let b = total(&shuffled);
        prop_assert!((a - b).abs() <= a.abs().max(1.0) * 1e-12, "{} vs {}", a, b);
    }

    /// PROPERTY: The total equals the sum of individual areas.
    #[test]
    fn property_sum_matches_individual_areas(specs in proptest::collection::vec(spec(), 0..12)) {
        let expected = specs
            .iter()
            .fold(0.0, |acc, s| acc + s.to_shape().area().unwrap());
        prop_assert_eq!(total(&specs), expected);
    }

    /// PROPERTY: The printer embeds exactly the calculator's total.
    #[test]
    fn property_printer_embeds_total(specs in proptest::collection::vec(spec(), 0..6)) {
        let owned: Vec<Box<dyn Shape>> = specs.iter().map(ShapeSpec::to_shape).collect();
        let refs: Vec<&dyn Shape> = owned.iter().map(|s| s.as_ref()).collect();

        let out = Printer::new(SumAreaCalculator::new()).sum_as_json(&refs).unwrap();
        prop_assert_eq!(out, format!("{{\n sum: {}\n}}", total(&specs)));
    }
}
