use vrt_bounds::{FieldDescriptor, FloatRepr, IntRepr, VRT_FIELDS, vrt_bounds};

fn pow2(exp: i32) -> f64 {
    2f64.powi(exp)
}

fn bounds_of(name: &str) -> (f64, f64) {
    let desc = VRT_FIELDS.iter().find(|f| f.name == name).unwrap();
    let bounds = desc.bounds().unwrap();
    (bounds.lower(), bounds.upper())
}

#[test]
fn test_bandwidth() {
    let (lower, upper) = bounds_of("Bandwidth");
    assert_eq!(lower, 0.0);
    assert_eq!(upper, pow2(43) - pow2(-20));
    // 2^-20 is below the precision of a double at 2^43.
    assert_eq!(upper, 8796093022208.0);
}

#[test]
fn test_reference_level() {
    assert_eq!(bounds_of("Reference Level"), (-256.0, 255.9921875));
}

#[test]
fn test_speed_over_ground() {
    let (lower, upper) = bounds_of("Speed Over Ground");
    assert_eq!(lower, 0.0);
    assert_eq!(upper, pow2(16) - pow2(-16));
    assert!((upper - 65535.99998474121).abs() < 1e-9);
}

#[test]
fn test_latitude_bypasses_formula() {
    assert_eq!(bounds_of("Latitude"), (-90.0, 90.0));
    assert_eq!(bounds_of("Longitude"), (-180.0, 180.0));
}

#[test]
fn test_heading_angle() {
    let (lower, upper) = bounds_of("Heading Angle");
    assert_eq!(lower, 0.0);
    assert_eq!(upper, 360.0 - pow2(-22));
    assert!((upper - 359.99999976158).abs() < 1e-10);
    assert_eq!(bounds_of("Track Angle"), (lower, upper));
}

#[test]
fn test_temperature_keeps_formula_upper() {
    assert_eq!(bounds_of("Temperature"), (-273.15, 511.984375));
}

#[test]
fn test_int32_fields() {
    assert_eq!(bounds_of("Altitude"), (-67108864.0, 67108863.96875));
    assert_eq!(bounds_of("Position"), bounds_of("Altitude"));
    assert_eq!(bounds_of("Attitude"), (-512.0, 512.0 - pow2(-22)));
    assert_eq!(bounds_of("Velocity"), (-32768.0, 32768.0 - pow2(-16)));
}

#[test]
fn test_all_int64_fields_follow_formula() {
    for desc in VRT_FIELDS.iter().filter(|f| f.int_repr == Some(IntRepr::Int64)) {
        let r = desc.radix.unwrap() as i32;
        let bounds = desc.bounds().unwrap();
        if desc.lower.is_none() {
            assert_eq!(bounds.lower(), -pow2(63 - r), "{}", desc.name);
        }
        assert_eq!(bounds.upper(), pow2(63 - r) - pow2(-r), "{}", desc.name);
    }
}

#[test]
fn test_bounds_keep_name_and_precision() {
    let bounds = vrt_bounds().unwrap();
    for (desc, b) in VRT_FIELDS.iter().zip(&bounds) {
        assert_eq!(b.name(), desc.name);
        assert_eq!(b.float_repr(), desc.float_repr);
    }
}

use proptest::prelude::*;

fn int_repr() -> impl Strategy<Value = IntRepr> {
    prop_oneof![
        Just(IntRepr::Int16),
        Just(IntRepr::Int32),
        Just(IntRepr::Uint32),
        Just(IntRepr::Int64),
    ]
}

proptest! {
    #[test]
    fn formula_matches_scaled_integer_range(int_repr in int_repr(), radix_frac in 0.0f64..1.0) {
        let (bits, signed) = int_repr.width();
        let radix = ((bits as f64) * radix_frac) as u32;
        let bounds = FieldDescriptor::new("Field", FloatRepr::Double)
            .fixed_point(int_repr, radix)
            .bounds()?;

        let r = radix as i32;
        let b = bits as i32;
        if signed {
            prop_assert_eq!(bounds.lower(), -pow2(b - r - 1));
            prop_assert_eq!(bounds.upper(), pow2(b - r - 1) - pow2(-r));
        } else {
            prop_assert_eq!(bounds.lower(), 0.0);
            prop_assert_eq!(bounds.upper(), pow2(b - r) - pow2(-r));
        }
    }

    #[test]
    fn overrides_always_win(
        int_repr in int_repr(),
        radix in 0u32..16,
        lower in -1.0e6f64..0.0,
        upper in 0.0f64..1.0e6,
    ) {
        let bounds = FieldDescriptor::new("Field", FloatRepr::Float)
            .fixed_point(int_repr, radix)
            .lower(lower)
            .upper(upper)
            .bounds()?;
        prop_assert_eq!(bounds.lower(), lower);
        prop_assert_eq!(bounds.upper(), upper);
    }
}
