pub mod auto;
pub mod compress;
pub mod transpose;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;
use vptranspose::{VpError, VpResult};

/// Reads a sheet from a file, or stdin for `-`.
pub fn read_sheet(input: &str) -> VpResult<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    info!("📂 Loading Sheet: {}", input);
    Ok(fs::read_to_string(input)?)
}

/// Writes to `output`, or stdout when none is given, byte for byte either way.
/// Never overwrites the input.
pub fn write_sheet(input: &str, output: Option<&str>, sheet: &str) -> VpResult<()> {
    match output {
        Some(path) => {
            if input != "-" && same_file(input, path) {
                return Err(VpError::Config(format!(
                    "output path '{}' must not match the input sheet",
                    path
                )));
            }
            fs::write(path, sheet)?;
            info!("💾 Wrote sheet to {}", path);
        }
        None => print!("{}", sheet),
    }
    Ok(())
}

fn same_file(a: &str, b: &str) -> bool {
    match (Path::new(a).canonicalize(), Path::new(b).canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
