use std::env;
use std::path::PathBuf;

// Bake a fallback library root into the binary. `find_library_root` only
// consults it after --root, COMBINE_ROOT and both upward searches come up empty.
fn main() {
    println!("cargo:rerun-if-env-changed=COMBINE_ROOT_HINT");

    let Some(raw) = env::var_os("COMBINE_ROOT_HINT").or_else(|| env::var_os("CARGO_MANIFEST_DIR"))
    else {
        return;
    };
    let hint = PathBuf::from(raw);
    let hint = hint.canonicalize().unwrap_or(hint);
    println!("cargo:rustc-env=COMBINE_ROOT_HINT={}", hint.display());
}
