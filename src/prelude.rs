//! Crate prelude: re-exports of the types and functions needed to describe
//! fields, resolve their bounds and render them.
//!
//! ```
//! use vrt_bounds::prelude::*;
//!
//! let velocity = FieldDescriptor::new("Velocity", FloatRepr::Double).fixed_point(IntRepr::Int32, 16);
//! let bounds = velocity.bounds()?;
//! assert_eq!(bounds.lower(), -32768.0);
//! # Ok::<(), BoundsError>(())
//! ```
//!
//! Lower-level helpers (`constant_name`, `Declaration`) stay at the crate root.

pub use crate::{
    // Core types
    BoundsError,
    FieldBounds,
    FieldDescriptor,
    FloatRepr,
    IntRepr,
    Result,
    Side,
    // Table
    VRT_FIELDS,
    vrt_bounds,
    // Rendering
    HeaderOptions,
    render_header,
    write_declarations,
    write_header,
};
