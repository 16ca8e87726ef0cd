//! Rendering of resolved bounds as C constant declarations.
//!
//! Each field produces two lines:
//!
//! ```text
//! static const double VRT_MIN_SPEED_OVER_GROUND = 0.0;
//! static const double VRT_MAX_SPEED_OVER_GROUND = 65535.99998474121;
//! ```
//!
//! [`write_declarations`] emits the plain form, one declaration per line.
//! [`write_header`] wraps the declarations in an include guard and lines up
//! the `=` column, producing a complete `vrt_bounds.h`.

use std::fmt;
use std::io::Write;

use crate::{BoundsError, FieldBounds, Side};

/// Prefix shared by every emitted constant.
pub const CONSTANT_PREFIX: &str = "VRT";

/// Include guard used by [`HeaderOptions::default`].
pub const DEFAULT_GUARD: &str = "SRC_VRT_BOUNDS_H_";

/// Convert a human readable field name into the name part of a constant.
///
/// ```
/// use vrt_bounds::constant_name;
/// assert_eq!(constant_name("Speed Over Ground"), "SPEED_OVER_GROUND");
/// assert_eq!(constant_name("IF Band Offset"), "IF_BAND_OFFSET");
/// ```
pub fn constant_name(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// A single `static const` declaration: one side of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
    field: &'a FieldBounds,
    side: Side,
}

impl<'a> Declaration<'a> {
    pub fn new(field: &'a FieldBounds, side: Side) -> Self {
        Self { field, side }
    }

    /// Full constant identifier, e.g. `VRT_MIN_GAIN`.
    pub fn identifier(&self) -> String {
        format!("{CONSTANT_PREFIX}_{}_{}", self.side.tag(), constant_name(self.field.name()))
    }

    pub fn type_label(&self) -> &'static str {
        self.field.float_repr().type_label()
    }

    /// Value literal including the precision suffix.
    pub fn literal(&self) -> String {
        self.field.float_repr().literal(self.field.get(self.side))
    }

    /// Declaration with the type label and identifier padded to the given widths.
    fn padded(&self, type_width: usize, name_width: usize) -> String {
        format!(
            "static const {:<type_width$} {:<name_width$} = {};",
            self.type_label(),
            self.identifier(),
            self.literal()
        )
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.padded(0, 0))
    }
}

impl FieldBounds {
    /// The MIN and MAX declarations of this field, in that order.
    pub fn declarations(&self) -> [Declaration<'_>; 2] {
        [Declaration::new(self, Side::Lower), Declaration::new(self, Side::Upper)]
    }
}

/// Write two declaration lines per field, in order.
pub fn write_declarations<W: Write>(writer: &mut W, fields: &[FieldBounds]) -> crate::Result<()> {
    for field in fields {
        for decl in field.declarations() {
            writeln!(writer, "{decl}").map_err(|e| BoundsError::io_error(decl.identifier(), e))?;
        }
    }
    Ok(())
}

/// Layout of a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Include guard macro name.
    pub guard: String,
    /// Pad type labels and identifiers so the `=` signs line up.
    pub aligned: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_string(),
            aligned: true,
        }
    }
}

impl HeaderOptions {
    pub fn with_guard(mut self, guard: impl Into<String>) -> crate::Result<Self> {
        let guard = guard.into();
        if !is_c_identifier(&guard) {
            return Err(BoundsError::InvalidHeaderGuard(guard));
        }
        self.guard = guard;
        Ok(self)
    }

    pub fn with_aligned(mut self, aligned: bool) -> Self {
        self.aligned = aligned;
        self
    }
}

pub(crate) fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Render a complete C header holding the declarations of `fields`.
///
/// ```
/// use vrt_bounds::{FieldDescriptor, FloatRepr, HeaderOptions, render_header};
///
/// let fields = [FieldDescriptor::new("Latitude", FloatRepr::Double).lower(-90.0).upper(90.0).bounds()?];
/// let header = render_header(&fields, &HeaderOptions::default());
/// assert!(header.starts_with("#ifndef SRC_VRT_BOUNDS_H_\n#define SRC_VRT_BOUNDS_H_\n"));
/// assert!(header.contains("static const double VRT_MAX_LATITUDE = 90.0;\n"));
/// assert!(header.ends_with("#endif\n"));
/// # Ok::<(), vrt_bounds::BoundsError>(())
/// ```
pub fn render_header(fields: &[FieldBounds], options: &HeaderOptions) -> String {
    let (type_width, name_width) = if options.aligned {
        fields
            .iter()
            .flat_map(|f| f.declarations())
            .fold((0, 0), |(t, n), d| (t.max(d.type_label().len()), n.max(d.identifier().len())))
    } else {
        (0, 0)
    };

    let guard = &options.guard;
    let mut lines = vec![
        format!("#ifndef {guard}"),
        format!("#define {guard}"),
        String::new(),
        "/* Constants describing minimum and maximum of floating point fields.".to_string(),
        " * Generated with calculate_bounds. */".to_string(),
    ];
    for field in fields {
        lines.extend(field.declarations().iter().map(|d| d.padded(type_width, name_width)));
    }
    lines.push(String::new());
    lines.push("#endif".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the header produced by [`render_header`] to `writer`.
pub fn write_header<W: Write>(writer: &mut W, fields: &[FieldBounds], options: &HeaderOptions) -> crate::Result<()> {
    writer
        .write_all(render_header(fields, options).as_bytes())
        .map_err(|e| BoundsError::io_error(format!("header '{}'", options.guard), e))
}
