//! Numeric representations of a VRT fixed-point field.
//!
//! A field lives in two worlds: on the wire it is an integer of a fixed width
//! and signedness ([`IntRepr`]), in memory it is a floating-point value of a
//! given precision ([`FloatRepr`]). The integer side drives the bound formula,
//! the floating-point side drives how the bounds are rendered.
//!
//! ```
//! use vrt_bounds::{FloatRepr, IntRepr};
//!
//! assert_eq!(IntRepr::Uint32.width(), (32, false));
//! assert_eq!(FloatRepr::Float.type_label(), "float");
//! assert_eq!(FloatRepr::Float.suffix(), "F");
//! ```

/// Floating-point type of the deserialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatRepr {
    /// Single precision (`float`).
    Float,
    /// Double precision (`double`).
    Double,
}

impl FloatRepr {
    /// C type name used in the emitted declaration.
    pub fn type_label(&self) -> &'static str {
        match self {
            FloatRepr::Float => "float",
            FloatRepr::Double => "double",
        }
    }

    /// Literal suffix appended to every emitted number.
    pub fn suffix(&self) -> &'static str {
        match self {
            FloatRepr::Float => "F",
            FloatRepr::Double => "",
        }
    }

    /// Largest finite magnitude of this type.
    pub fn max(&self) -> f64 {
        match self {
            FloatRepr::Float => f64::from(f32::MAX),
            FloatRepr::Double => f64::MAX,
        }
    }

    /// Render `value` as a floating literal of this type, suffix included.
    ///
    /// The number is written with the shortest text that round-trips in
    /// double precision, which is what the bounds are computed in. The text
    /// always carries a decimal point or an exponent.
    ///
    /// ```
    /// use vrt_bounds::FloatRepr;
    /// assert_eq!(FloatRepr::Double.literal(0.0), "0.0");
    /// assert_eq!(FloatRepr::Float.literal(-273.15), "-273.15F");
    /// assert_eq!(FloatRepr::Double.literal(65535.99998474121), "65535.99998474121");
    /// ```
    pub fn literal(&self, value: f64) -> String {
        format!("{value:?}{}", self.suffix())
    }
}

/// Integer type of the serialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntRepr {
    /// 16 bit two's complement.
    Int16,
    /// 32 bit two's complement.
    Int32,
    /// 32 bit unsigned.
    Uint32,
    /// 64 bit two's complement.
    Int64,
}

impl IntRepr {
    /// `(bits, signed)` of the serialized integer.
    pub const fn width(&self) -> (u32, bool) {
        match self {
            IntRepr::Int16 => (16, true),
            IntRepr::Int32 => (32, true),
            IntRepr::Uint32 => (32, false),
            IntRepr::Int64 => (64, true),
        }
    }

    pub const fn bits(&self) -> u32 {
        self.width().0
    }

    pub const fn is_signed(&self) -> bool {
        self.width().1
    }

    /// Smallest value of this integer scaled by `2^-radix`.
    ///
    /// The caller guarantees `radix < bits`.
    pub(crate) fn scaled_min(&self, radix: u32) -> f64 {
        if self.is_signed() {
            -pow2(self.bits() as i32 - radix as i32 - 1)
        } else {
            0.0
        }
    }

    /// Largest value of this integer scaled by `2^-radix`.
    ///
    /// The caller guarantees `radix < bits`.
    pub(crate) fn scaled_max(&self, radix: u32) -> f64 {
        let sign_bit = i32::from(self.is_signed());
        pow2(self.bits() as i32 - radix as i32 - sign_bit) - pow2(-(radix as i32))
    }
}

// Exact for every exponent the supported widths can produce.
fn pow2(exp: i32) -> f64 {
    2f64.powi(exp)
}
