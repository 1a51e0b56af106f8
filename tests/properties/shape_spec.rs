//! Property tests for shape spec parsing.

use proptest::prelude::*;

use solid_shapes::ShapeSpec;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        let _ = input.parse::<ShapeSpec>();
    }

    /// PROPERTY: The canonical text form parses back to the same spec.
    #[test]
    fn property_display_round_trips(
        kind in 0usize..5,
        a in 0.0f64..1.0e9,
        b in 0.0f64..1.0e9,
    ) {
        let text = match kind {
            0 => format!("square:{a}"),
            1 => format!("rectangle:{a}x{b}"),
            2 => format!("circle:{a}"),
            3 => format!("cube:{a}"),
            _ => "none".to_string(),
        };
        let spec: ShapeSpec = text.parse().unwrap();
        let again: ShapeSpec = spec.to_string().parse().unwrap();
        prop_assert_eq!(spec, again);
    }

    /// PROPERTY: Negative dimensions are always rejected.
    #[test]
    fn property_negative_dimensions_rejected(value in -1.0e9f64..-1.0e-9) {
        let square = format!("square:{value}");
        let circle = format!("circle:{value}");
        prop_assert!(square.parse::<ShapeSpec>().is_err());
        prop_assert!(circle.parse::<ShapeSpec>().is_err());
    }
}
