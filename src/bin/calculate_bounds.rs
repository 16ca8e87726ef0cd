//! Print the minimum and maximum constants of every VRT floating-point field.

use std::io::{self, Write};
use std::process;

use vrt_bounds::{vrt_bounds, write_declarations};

fn main() {
    let fields = match vrt_bounds() {
        Ok(fields) => fields,
        Err(err) => {
            eprintln!("Error calculating bounds: {}", err);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write_declarations(&mut out, &fields) {
        eprintln!("Error writing bounds: {}", err);
        process::exit(1);
    }
    if let Err(err) = out.flush() {
        eprintln!("Error writing bounds: {}", err);
        process::exit(1);
    }
}
