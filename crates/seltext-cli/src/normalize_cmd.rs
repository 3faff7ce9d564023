use std::io::Read;

use seltext::{NormalizeOptions, UnicodeNorm, normalize_with};

pub fn run(no_repair: bool, unicode_norm: UnicodeNorm) -> Result<(), i32> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).map_err(|e| {
        eprintln!("Error: failed to read stdin: {e}");
        1
    })?;

    let options = NormalizeOptions {
        unicode_norm,
        script_boundary_repair: !no_repair,
    };
    println!("{}", normalize_with(&input, &options));
    Ok(())
}
