// videoegl/src/platform/ffi.rs
//
//! EGL extension constants that aren't part of the core registry.

use crate::egl::types::EGLint;

/// `EGL_ANDROID_recordable`: the config can render into a surface that feeds a video encoder.
pub const EGL_RECORDABLE_ANDROID: EGLint = 0x3142;

/// Present in the extension string when contexts may be bound without a surface.
pub const EGL_KHR_SURFACELESS_CONTEXT: &str = "EGL_KHR_surfaceless_context";
