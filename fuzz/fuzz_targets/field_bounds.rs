#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vrt_bounds::{FieldDescriptor, FloatRepr, IntRepr, write_declarations};

#[derive(Debug, Arbitrary)]
struct Input {
    name: String,
    double: bool,
    int_repr: Option<u8>,
    radix: Option<u32>,
    lower: Option<f64>,
    upper: Option<f64>,
}

fuzz_target!(|input: Input| {
    let float_repr = if input.double { FloatRepr::Double } else { FloatRepr::Float };
    let desc = FieldDescriptor {
        name: &input.name,
        float_repr,
        int_repr: input.int_repr.map(|i| match i % 4 {
            0 => IntRepr::Int16,
            1 => IntRepr::Int32,
            2 => IntRepr::Uint32,
            _ => IntRepr::Int64,
        }),
        radix: input.radix,
        lower: input.lower,
        upper: input.upper,
    };

    // Any descriptor must either fail validation or yield a usable range
    if let Ok(bounds) = desc.bounds() {
        assert!(bounds.lower().is_finite() && bounds.upper().is_finite());
        assert!(bounds.lower() <= bounds.upper());
        if float_repr == FloatRepr::Float {
            assert!((bounds.lower() as f32).is_finite() && (bounds.upper() as f32).is_finite());
        }
        let mut out = Vec::new();
        write_declarations(&mut out, &[bounds]).unwrap();
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 2);
    }
});
