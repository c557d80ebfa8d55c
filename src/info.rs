// videoegl/src/info.rs
//
//! Version information.

/// Describes the OpenGL ES version that is requested when a context is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }
}

/// The EGL version reported by `eglInitialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EGLVersion {
    pub major: i32,
    pub minor: i32,
}
