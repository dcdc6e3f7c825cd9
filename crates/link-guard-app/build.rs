//! Exports the first line of the workspace `VERSION` file as
//! `LINK_GUARD_VERSION`.

use std::env;
use std::fs;
use std::path::Path;

const VERSION_ENV: &str = "LINK_GUARD_VERSION";

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let version_file = Path::new(&manifest_dir).join("../../VERSION");
    println!("cargo:rerun-if-changed={}", version_file.display());

    let contents = fs::read_to_string(&version_file)
        .unwrap_or_else(|error| panic!("cannot read {}: {error}", version_file.display()));
    let version = contents.lines().next().map(str::trim).unwrap_or_default();
    if version.is_empty() || version.contains(char::is_whitespace) {
        panic!(
            "{} must start with a single version token, got {version:?}",
            version_file.display()
        );
    }

    println!("cargo:rustc-env={VERSION_ENV}={version}");
}
