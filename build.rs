// videoegl/build.rs
//
//! The `videoegl` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        android_platform: { target_os = "android" },
        dlopen_platform: { all(unix, not(target_os = "macos")) },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate EGL bindings. The function table is filled at runtime, so nothing links
    // against libEGL here.
    let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
