//! Minimum and maximum constants for VRT floating-point fields.
//!
//! VRT transports frequencies, levels, rates and kinematic quantities as
//! fixed-point integers with a radix position. This crate derives the range
//! each field can represent once the integer is scaled back to a floating-point
//! value, and renders the bounds as C `static const` declarations.
//!
//! ```
//! use vrt_bounds::{vrt_bounds, write_declarations};
//!
//! let fields = vrt_bounds()?;
//! let mut out = Vec::new();
//! write_declarations(&mut out, &fields)?;
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().count(), 38);
//! assert_eq!(text.lines().next(), Some("static const double VRT_MIN_BANDWIDTH = 0.0;"));
//! # Ok::<(), vrt_bounds::BoundsError>(())
//! ```

pub type Result<T> = std::result::Result<T, BoundsError>;

mod errors;
pub use errors::BoundsError;

pub mod repr;
pub use repr::{FloatRepr, IntRepr};

pub mod field;
pub use field::{FieldBounds, FieldDescriptor, Side};

pub mod table;
pub use table::{VRT_FIELDS, resolve_all, vrt_bounds};

pub mod render;
pub use render::{Declaration, HeaderOptions, constant_name, render_header, write_declarations, write_header};

pub mod prelude;
