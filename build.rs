// Assemble the deployable site: dist/ mirrors static/, which includes
// the wasm-pack output under static/pkg once that has been built.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out = Path::new("dist");
    if out.exists() {
        fs::remove_dir_all(out).ok();
    }
    fs::create_dir_all(out).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().content_only(true);
        if let Err(e) = copy(static_dir, out, &options) {
            println!("cargo:warning=failed to copy static assets: {e}");
        }
    }
}
