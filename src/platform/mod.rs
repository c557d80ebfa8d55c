// videoegl/src/platform/mod.rs
//
//! The native EGL boundary.
//!
//! `EglCore` never calls EGL directly; it goes through an [`EglApi`] implementation. The
//! production one, [`library::LibEgl`], forwards to the system library. Failing calls report the
//! pending `eglGetError()` code as an `Err(EglStatus)`.

use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLSurface, EGLint};
use crate::egl::types::{EGLNativeDisplayType, EGLNativeWindowType};
use crate::{EGLVersion, EglStatus};

use std::os::raw::c_void;

pub mod ffi;
pub mod library;

/// The subset of EGL that `videoegl` uses.
///
/// Handles are passed through untouched; "no handle" is always spelled `None`, never as an
/// `EGL_NO_*` value.
pub trait EglApi {
    /// `eglGetDisplay`.
    ///
    /// # Safety
    ///
    /// `native_display` must be `EGL_DEFAULT_DISPLAY` or a valid native display.
    unsafe fn get_display(&self, native_display: EGLNativeDisplayType) -> Option<EGLDisplay>;

    /// `eglInitialize`.
    fn initialize(&self, display: EGLDisplay) -> Result<EGLVersion, EglStatus>;

    /// `eglQueryString`.
    fn query_string(&self, display: EGLDisplay, name: EGLint) -> Option<String>;

    /// `eglChooseConfig`, asking for at most one configuration.
    ///
    /// `attributes` must be terminated by `EGL_NONE`. `Ok(None)` means no configuration
    /// matched.
    fn choose_config(&self, display: EGLDisplay, attributes: &[EGLint])
                     -> Result<Option<EGLConfig>, EglStatus>;

    /// `eglGetConfigAttrib`.
    fn get_config_attrib(&self, display: EGLDisplay, config: EGLConfig, attribute: EGLint)
                         -> Result<EGLint, EglStatus>;

    /// `eglCreateContext`.
    fn create_context(&self,
                      display: EGLDisplay,
                      config: EGLConfig,
                      share_context: Option<EGLContext>,
                      attributes: &[EGLint])
                      -> Result<EGLContext, EglStatus>;

    /// `eglQueryContext`.
    fn query_context(&self, display: EGLDisplay, context: EGLContext, attribute: EGLint)
                     -> Result<EGLint, EglStatus>;

    /// `eglDestroyContext`.
    fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> Result<(), EglStatus>;

    /// `eglCreateWindowSurface`.
    ///
    /// # Safety
    ///
    /// `window` must be a live native window of the kind the display expects.
    unsafe fn create_window_surface(&self,
                                    display: EGLDisplay,
                                    config: EGLConfig,
                                    window: EGLNativeWindowType,
                                    attributes: &[EGLint])
                                    -> Result<EGLSurface, EglStatus>;

    /// `eglDestroySurface`.
    fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus>;

    /// `eglMakeCurrent`.
    fn make_current(&self,
                    display: EGLDisplay,
                    draw: Option<EGLSurface>,
                    read: Option<EGLSurface>,
                    context: Option<EGLContext>)
                    -> Result<(), EglStatus>;

    /// `eglSwapBuffers`.
    fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus>;

    /// `eglQuerySurface`.
    fn query_surface(&self, display: EGLDisplay, surface: EGLSurface, attribute: EGLint)
                     -> Result<EGLint, EglStatus>;

    /// `eglGetCurrentContext`.
    fn get_current_context(&self) -> Option<EGLContext>;

    /// `eglTerminate`.
    fn terminate(&self, display: EGLDisplay) -> Result<(), EglStatus>;

    /// `eglReleaseThread`.
    fn release_thread(&self) -> Result<(), EglStatus>;

    /// `eglGetError`.
    fn get_error(&self) -> EglStatus;

    /// `eglGetProcAddress`. Returns null if the symbol is unknown.
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void;
}

/// Lets several `EglCore`s share one loaded library.
impl<'a, A> EglApi for &'a A where A: EglApi + ?Sized {
    #[inline]
    unsafe fn get_display(&self, native_display: EGLNativeDisplayType) -> Option<EGLDisplay> {
        (**self).get_display(native_display)
    }

    #[inline]
    fn initialize(&self, display: EGLDisplay) -> Result<EGLVersion, EglStatus> {
        (**self).initialize(display)
    }

    #[inline]
    fn query_string(&self, display: EGLDisplay, name: EGLint) -> Option<String> {
        (**self).query_string(display, name)
    }

    #[inline]
    fn choose_config(&self, display: EGLDisplay, attributes: &[EGLint])
                     -> Result<Option<EGLConfig>, EglStatus> {
        (**self).choose_config(display, attributes)
    }

    #[inline]
    fn get_config_attrib(&self, display: EGLDisplay, config: EGLConfig, attribute: EGLint)
                         -> Result<EGLint, EglStatus> {
        (**self).get_config_attrib(display, config, attribute)
    }

    #[inline]
    fn create_context(&self,
                      display: EGLDisplay,
                      config: EGLConfig,
                      share_context: Option<EGLContext>,
                      attributes: &[EGLint])
                      -> Result<EGLContext, EglStatus> {
        (**self).create_context(display, config, share_context, attributes)
    }

    #[inline]
    fn query_context(&self, display: EGLDisplay, context: EGLContext, attribute: EGLint)
                     -> Result<EGLint, EglStatus> {
        (**self).query_context(display, context, attribute)
    }

    #[inline]
    fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> Result<(), EglStatus> {
        (**self).destroy_context(display, context)
    }

    #[inline]
    unsafe fn create_window_surface(&self,
                                    display: EGLDisplay,
                                    config: EGLConfig,
                                    window: EGLNativeWindowType,
                                    attributes: &[EGLint])
                                    -> Result<EGLSurface, EglStatus> {
        (**self).create_window_surface(display, config, window, attributes)
    }

    #[inline]
    fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus> {
        (**self).destroy_surface(display, surface)
    }

    #[inline]
    fn make_current(&self,
                    display: EGLDisplay,
                    draw: Option<EGLSurface>,
                    read: Option<EGLSurface>,
                    context: Option<EGLContext>)
                    -> Result<(), EglStatus> {
        (**self).make_current(display, draw, read, context)
    }

    #[inline]
    fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus> {
        (**self).swap_buffers(display, surface)
    }

    #[inline]
    fn query_surface(&self, display: EGLDisplay, surface: EGLSurface, attribute: EGLint)
                     -> Result<EGLint, EglStatus> {
        (**self).query_surface(display, surface, attribute)
    }

    #[inline]
    fn get_current_context(&self) -> Option<EGLContext> {
        (**self).get_current_context()
    }

    #[inline]
    fn terminate(&self, display: EGLDisplay) -> Result<(), EglStatus> {
        (**self).terminate(display)
    }

    #[inline]
    fn release_thread(&self) -> Result<(), EglStatus> {
        (**self).release_thread()
    }

    #[inline]
    fn get_error(&self) -> EglStatus {
        (**self).get_error()
    }

    #[inline]
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        (**self).get_proc_address(symbol_name)
    }
}
