// videoegl/src/lib.rs
//
//! EGL context and window surface management for hardware-accelerated video rendering.
//!
//! An [`EglCore`] opens the default EGL display, picks a framebuffer configuration, creates an
//! OpenGL ES context (optionally sharing objects with another context), and hands out
//! [`WindowSurface`]s bound to native windows. Typical use is one dedicated rendering thread
//! that owns the `EglCore` for its whole lifetime:
//!
//! ```no_run
//! use videoegl::{ContextAttributeFlags, ContextAttributes, EglCore, NativeWidget};
//! # fn window() -> *mut std::os::raw::c_void { std::ptr::null_mut() }
//!
//! let attributes = ContextAttributes::gles2(ContextAttributeFlags::RECORDABLE);
//! let core = EglCore::new(None, &attributes).unwrap();
//! let widget = unsafe { NativeWidget::from_native_window(window()) }.unwrap();
//! let surface = core.create_surface_from_window(&widget).unwrap();
//! // ... render ...
//! surface.swap();
//! ```
//!
//! Every native call goes through the [`EglApi`] trait. [`LibEgl`] loads the system EGL library
//! at runtime.

#[macro_use]
extern crate log;

pub mod platform;
pub use crate::platform::library::LibEgl;
pub use crate::platform::EglApi;

mod egl_core;
pub use crate::egl_core::EglCore;

pub mod error;
pub use crate::error::{EglStatus, Error, WindowingApiError};

mod context;
pub use crate::context::{AttributeList, ContextAttributeFlags, ContextAttributes};
pub use crate::context::NativeContext;

mod info;
pub use crate::info::{EGLVersion, GLVersion};

mod surface;
pub use crate::surface::{NativeWidget, SurfaceID, WindowSurface};

#[allow(non_camel_case_types, non_snake_case, dead_code, clippy::all)]
pub mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}
