//! Field descriptors and their resolved bounds.
//!
//! A [`FieldDescriptor`] is the raw description of one VRT field: how it is
//! serialized and, optionally, bounds that override the fixed-point formula.
//! Descriptors are plain `const` data and are not checked when built. Calling
//! [`FieldDescriptor::bounds`] validates the descriptor and yields a
//! [`FieldBounds`], the only type the renderer accepts.
//!
//! # Bound Formula
//!
//! For an integer of `bits` bits scaled by `2^-radix`:
//!
//! ```text
//! signed:   [-2^(bits - radix - 1), 2^(bits - radix - 1) - 2^-radix]
//! unsigned: [0,                     2^(bits - radix)     - 2^-radix]
//! ```
//!
//! Each side is computed independently and only when no explicit override is
//! given for it.
//!
//! # Example
//!
//! ```
//! use vrt_bounds::{FieldDescriptor, FloatRepr, IntRepr};
//!
//! let gain = FieldDescriptor::new("Gain", FloatRepr::Float).fixed_point(IntRepr::Int16, 7);
//! let bounds = gain.bounds()?;
//! assert_eq!(bounds.lower(), -256.0);
//! assert_eq!(bounds.upper(), 255.9921875);
//!
//! let latitude = FieldDescriptor::new("Latitude", FloatRepr::Double)
//!     .lower(-90.0)
//!     .upper(90.0);
//! assert_eq!(latitude.bounds()?.upper(), 90.0);
//! # Ok::<(), vrt_bounds::BoundsError>(())
//! ```

use std::fmt;

use crate::{
    BoundsError, FloatRepr, IntRepr,
    render::{constant_name, is_c_identifier},
};

/// One side of a field's value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Lower,
    Upper,
}

impl Side {
    /// Tag used in the emitted constant name (`VRT_MIN_...` / `VRT_MAX_...`).
    pub fn tag(&self) -> &'static str {
        match self {
            Side::Lower => "MIN",
            Side::Upper => "MAX",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

/// Unvalidated description of a floating-point field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor<'a> {
    /// Human readable field name, e.g. `"Speed Over Ground"`.
    pub name: &'a str,
    /// Floating-point type of the deserialized value.
    pub float_repr: FloatRepr,
    /// Integer type of the serialized value.
    pub int_repr: Option<IntRepr>,
    /// Radix position counted from the least significant bit.
    pub radix: Option<u32>,
    /// Explicit lower bound, bypasses the formula.
    pub lower: Option<f64>,
    /// Explicit upper bound, bypasses the formula.
    pub upper: Option<f64>,
}

impl<'a> FieldDescriptor<'a> {
    pub const fn new(name: &'a str, float_repr: FloatRepr) -> Self {
        Self {
            name,
            float_repr,
            int_repr: None,
            radix: None,
            lower: None,
            upper: None,
        }
    }

    /// Set the serialized integer type and radix position.
    pub const fn fixed_point(mut self, int_repr: IntRepr, radix: u32) -> Self {
        self.int_repr = Some(int_repr);
        self.radix = Some(radix);
        self
    }

    /// Override the lower bound.
    pub const fn lower(mut self, lower: f64) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Override the upper bound.
    pub const fn upper(mut self, upper: f64) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Validate the descriptor and resolve both bounds.
    ///
    /// # Errors
    ///
    /// - [`BoundsError::EmptyFieldName`] if the name is blank.
    /// - [`BoundsError::InvalidFieldName`] if the name does not map to a C
    ///   identifier (see [`constant_name`]).
    /// - [`BoundsError::MissingBoundInformation`] if a side has neither an
    ///   override nor an integer representation.
    /// - [`BoundsError::MissingRadix`] if a side needs the formula and no
    ///   radix is set.
    /// - [`BoundsError::RadixOutOfRange`] if the radix is not below the
    ///   integer's bit width.
    /// - [`BoundsError::NonFiniteBound`] if an override is NaN, infinite, or
    ///   overflows the field's floating-point type.
    /// - [`BoundsError::InvertedBounds`] if the resolved lower bound exceeds
    ///   the upper bound.
    pub fn bounds(&self) -> crate::Result<FieldBounds> {
        if self.name.trim().is_empty() {
            return Err(BoundsError::EmptyFieldName);
        }
        if !is_c_identifier(&constant_name(self.name)) {
            return Err(BoundsError::InvalidFieldName(self.name.to_string()));
        }

        let encoding = self.encoding()?;
        let lower = self.resolve(Side::Lower, self.lower, encoding)?;
        let upper = self.resolve(Side::Upper, self.upper, encoding)?;

        if lower > upper {
            return Err(BoundsError::InvertedBounds {
                field: self.name.to_string(),
                lower,
                upper,
            });
        }

        log::debug!("{}: [{lower:?}, {upper:?}]", self.name);
        Ok(FieldBounds {
            name: self.name.to_string(),
            float_repr: self.float_repr,
            lower,
            upper,
        })
    }

    /// Integer type and radix, when both are set and consistent.
    fn encoding(&self) -> crate::Result<Option<(IntRepr, u32)>> {
        match (self.int_repr, self.radix) {
            (Some(int_repr), Some(radix)) => {
                if radix >= int_repr.bits() {
                    return Err(BoundsError::RadixOutOfRange {
                        field: self.name.to_string(),
                        radix,
                        bits: int_repr.bits(),
                    });
                }
                Ok(Some((int_repr, radix)))
            }
            _ => Ok(None),
        }
    }

    fn resolve(&self, side: Side, explicit: Option<f64>, encoding: Option<(IntRepr, u32)>) -> crate::Result<f64> {
        if let Some(value) = explicit {
            // Must stay finite once narrowed to the emitted type
            if !value.is_finite() || value.abs() > self.float_repr.max() {
                return Err(BoundsError::NonFiniteBound {
                    field: self.name.to_string(),
                    side,
                    float_type: self.float_repr.type_label(),
                });
            }
            if let Some((int_repr, radix)) = encoding {
                let (min, max) = (int_repr.scaled_min(radix), int_repr.scaled_max(radix));
                if value < min || value > max {
                    log::warn!(
                        "{}: explicit {side} bound {value:?} outside encodable range [{min:?}, {max:?}]",
                        self.name
                    );
                }
            }
            return Ok(value);
        }

        let Some((int_repr, radix)) = encoding else {
            if self.int_repr.is_some() {
                return Err(BoundsError::MissingRadix { field: self.name.to_string() });
            }
            return Err(BoundsError::MissingBoundInformation {
                field: self.name.to_string(),
                side,
            });
        };

        Ok(match side {
            Side::Lower => int_repr.scaled_min(radix),
            Side::Upper => int_repr.scaled_max(radix),
        })
    }
}

/// Validated bounds of one field, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBounds {
    name: String,
    float_repr: FloatRepr,
    lower: f64,
    upper: f64,
}

impl FieldBounds {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn float_repr(&self) -> FloatRepr {
        self.float_repr
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Bound on the given side.
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Lower => self.lower,
            Side::Upper => self.upper,
        }
    }
}
