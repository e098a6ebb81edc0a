use std::{env, fs, path::PathBuf};

fn main() {
    // Bootloader images live in DDR, standalone ones in the LIM
    let script = if env::var_os("CARGO_FEATURE_LOADED_BY_BOOTLOADER").is_some() {
        "memory-ddr.x"
    } else {
        "memory.x"
    };

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::copy(script, out.join("memory.x")).expect("copy linker memory layout");

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=memory-ddr.x");
    println!("cargo:rerun-if-changed=build.rs");
}
