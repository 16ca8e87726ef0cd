//! Floating-point fields of the VRT context packet.
//!
//! Frequencies, levels, rates and kinematic fields are transmitted as
//! fixed-point integers; geolocation angles are transmitted with a radix but
//! have physical limits narrower than their encoding, so they carry explicit
//! bounds instead.

use std::collections::HashSet;

use crate::{BoundsError, FieldBounds, FieldDescriptor, FloatRepr, IntRepr, constant_name};

/// `360 - 2^-22`, the largest heading or track angle below a full turn.
const MAX_ANGLE: f64 = 360.0 - 1.0 / 4_194_304.0;

/// Every VRT floating-point field, in the order the constants are emitted.
pub static VRT_FIELDS: [FieldDescriptor<'static>; 19] = [
    FieldDescriptor::new("Bandwidth", FloatRepr::Double).fixed_point(IntRepr::Int64, 20).lower(0.0),
    FieldDescriptor::new("IF Reference Frequency", FloatRepr::Double).fixed_point(IntRepr::Int64, 20),
    FieldDescriptor::new("RF Reference Frequency", FloatRepr::Double).fixed_point(IntRepr::Int64, 20),
    FieldDescriptor::new("RF Reference Frequency Offset", FloatRepr::Double).fixed_point(IntRepr::Int64, 20),
    FieldDescriptor::new("IF Band Offset", FloatRepr::Double).fixed_point(IntRepr::Int64, 20),
    FieldDescriptor::new("Reference Level", FloatRepr::Float).fixed_point(IntRepr::Int16, 7),
    FieldDescriptor::new("Gain", FloatRepr::Float).fixed_point(IntRepr::Int16, 7),
    FieldDescriptor::new("Sample Rate", FloatRepr::Double).fixed_point(IntRepr::Int64, 20).lower(0.0),
    FieldDescriptor::new("Temperature", FloatRepr::Float).fixed_point(IntRepr::Int16, 6).lower(-273.15),
    FieldDescriptor::new("Latitude", FloatRepr::Double).lower(-90.0).upper(90.0),
    FieldDescriptor::new("Longitude", FloatRepr::Double).lower(-180.0).upper(180.0),
    FieldDescriptor::new("Altitude", FloatRepr::Double).fixed_point(IntRepr::Int32, 5),
    FieldDescriptor::new("Speed Over Ground", FloatRepr::Double).fixed_point(IntRepr::Uint32, 16),
    FieldDescriptor::new("Heading Angle", FloatRepr::Double).lower(0.0).upper(MAX_ANGLE),
    FieldDescriptor::new("Track Angle", FloatRepr::Double).lower(0.0).upper(MAX_ANGLE),
    FieldDescriptor::new("Magnetic Variation", FloatRepr::Double).lower(-180.0).upper(180.0),
    FieldDescriptor::new("Position", FloatRepr::Double).fixed_point(IntRepr::Int32, 5),
    FieldDescriptor::new("Attitude", FloatRepr::Double).fixed_point(IntRepr::Int32, 22),
    FieldDescriptor::new("Velocity", FloatRepr::Double).fixed_point(IntRepr::Int32, 16),
];

/// Resolve the bounds of every field in `fields`, stopping at the first
/// invalid descriptor.
///
/// Two fields whose names map to the same constant name (e.g. `"Gain"` and
/// `"GAIN"`) are rejected with [`BoundsError::DuplicateField`].
pub fn resolve_all(fields: &[FieldDescriptor<'_>]) -> crate::Result<Vec<FieldBounds>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(fields.len());
    for field in fields {
        let bounds = field.bounds()?;
        if !seen.insert(constant_name(bounds.name())) {
            return Err(BoundsError::DuplicateField(bounds.name().to_string()));
        }
        resolved.push(bounds);
    }
    Ok(resolved)
}

/// Bounds of [`VRT_FIELDS`].
pub fn vrt_bounds() -> crate::Result<Vec<FieldBounds>> {
    resolve_all(&VRT_FIELDS)
}
