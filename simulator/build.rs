//! Build script for runner-simulator
//!
//! On Windows, links against the SDL2 copy in `vendor/sdl2` and puts
//! `SDL2.dll` next to the simulator binary.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let vendor_sdl2 = manifest_dir.parent().unwrap().join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}, install SDL2 system-wide", vendor_sdl2.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/runner-simulator-<hash>/out
    let Some(profile_dir) = env::var_os("OUT_DIR").map(PathBuf::from).and_then(|out| {
        out.ancestors()
            .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
            .map(PathBuf::from)
    }) else {
        return;
    };

    let dll_src = vendor_sdl2.join("SDL2.dll");
    let dll_dst = profile_dir.join("SDL2.dll");
    if dll_src.exists() && !dll_dst.exists() {
        if let Err(e) = fs::copy(&dll_src, &dll_dst) {
            println!("cargo:warning=Failed to copy SDL2.dll: {e}");
        }
    }
}
