use std::io;
use std::process;

use vrt_bounds::{HeaderOptions, vrt_bounds, write_header};

/// Print the complete `vrt_bounds.h` header, declarations aligned.
fn main() {
    let fields = match vrt_bounds() {
        Ok(fields) => fields,
        Err(err) => {
            eprintln!("Error calculating bounds: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = write_header(&mut io::stdout().lock(), &fields, &HeaderOptions::default()) {
        eprintln!("Error writing header: {}", err);
        process::exit(1);
    }
}
