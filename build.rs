#![allow(clippy::style)]

extern crate autocfg;

use std::env;
use std::path::PathBuf;


fn main() -> std::io::Result<()> {
    let ac = autocfg::new();
    ac.emit_rustc_version(1, 70);

    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_karatsuba_threshold(&outdir_path, "karatsuba_threshold.rs")?;
    Ok(())
}

/// Create karatsuba_threshold.rs, containing definition of constant KARATSUBA_THRESHOLD
fn write_karatsuba_threshold(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let threshold = env::var("RUST_BIGINT_KARATSUBA_THRESHOLD")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGINT_KARATSUBA_THRESHOLD must be an integer > 0"))
        .map(|nz_num| nz_num.get() as usize)
        .unwrap_or(30usize);

    let threshold_rs_path = outdir_path.join(filename);

    let threshold_decl = format!("pub(crate) const KARATSUBA_THRESHOLD: usize = {};", threshold);

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&threshold_rs_path) {
        Ok(existing_contents) if existing_contents == threshold_decl => {},
        _ => {
            std::fs::write(&threshold_rs_path, threshold_decl)
                    .expect("Could not write bigint karatsuba-threshold file");
        }
    };

    println!("cargo:rerun-if-changed={}", threshold_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGINT_KARATSUBA_THRESHOLD");

    Ok(())
}
