// videoegl/src/platform/library.rs
//
//! `EglApi` backed by the system EGL library, loaded at runtime.

use super::EglApi;
use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLSurface, EGLint};
use crate::egl::types::{EGLNativeDisplayType, EGLNativeWindowType};
use crate::egl::{self, Egl};
use crate::{EGLVersion, EglStatus, Error};

use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;

#[cfg(dlopen_platform)]
use libc::{dlopen, dlsym, RTLD_LAZY};
#[cfg(dlopen_platform)]
use std::os::raw::c_char;

#[cfg(android_platform)]
static EGL_LIBRARY_NAMES: [&[u8]; 1] = [b"libEGL.so\0"];
#[cfg(all(dlopen_platform, not(android_platform)))]
static EGL_LIBRARY_NAMES: [&[u8]; 2] = [b"libEGL.so.1\0", b"libEGL.so\0"];

/// The system EGL library.
///
/// The library handle is never closed: drivers commonly keep thread-local state that outlives
/// any individual display.
pub struct LibEgl {
    egl: Egl,
}

impl LibEgl {
    /// Opens `libEGL` and resolves every entry point `videoegl` needs.
    #[cfg(dlopen_platform)]
    pub fn load() -> Result<LibEgl, Error> {
        let library = EGL_LIBRARY_NAMES
            .iter()
            .map(|name| unsafe { dlopen(name.as_ptr() as *const c_char, RTLD_LAZY) })
            .find(|library| !library.is_null())
            .ok_or(Error::NoEglLibraryFound)?;

        let egl = Egl::load_with(|symbol_name| match CString::new(symbol_name) {
            Ok(symbol_name) => unsafe { dlsym(library, symbol_name.as_ptr()) as *const c_void },
            Err(_) => ptr::null(),
        });
        LibEgl::from_functions(egl)
    }

    #[cfg(not(dlopen_platform))]
    pub fn load() -> Result<LibEgl, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    /// Wraps an already-filled function table, rejecting it if any entry point `EglApi` calls is
    /// missing.
    #[cfg_attr(not(dlopen_platform), allow(dead_code))]
    pub(crate) fn from_functions(egl: Egl) -> Result<LibEgl, Error> {
        let required = [
            ("eglGetDisplay", egl.GetDisplay.is_loaded()),
            ("eglInitialize", egl.Initialize.is_loaded()),
            ("eglChooseConfig", egl.ChooseConfig.is_loaded()),
            ("eglCreateContext", egl.CreateContext.is_loaded()),
            ("eglCreateWindowSurface", egl.CreateWindowSurface.is_loaded()),
            ("eglMakeCurrent", egl.MakeCurrent.is_loaded()),
            ("eglSwapBuffers", egl.SwapBuffers.is_loaded()),
            ("eglGetError", egl.GetError.is_loaded()),
            ("eglGetProcAddress", egl.GetProcAddress.is_loaded()),
            ("eglQueryString", egl.QueryString.is_loaded()),
            ("eglGetConfigAttrib", egl.GetConfigAttrib.is_loaded()),
            ("eglQueryContext", egl.QueryContext.is_loaded()),
            ("eglDestroyContext", egl.DestroyContext.is_loaded()),
            ("eglDestroySurface", egl.DestroySurface.is_loaded()),
            ("eglQuerySurface", egl.QuerySurface.is_loaded()),
            ("eglGetCurrentContext", egl.GetCurrentContext.is_loaded()),
            ("eglTerminate", egl.Terminate.is_loaded()),
            ("eglReleaseThread", egl.ReleaseThread.is_loaded()),
        ];
        if let Some(&(name, _)) = required.iter().find(|&&(_, loaded)| !loaded) {
            return Err(Error::EglFunctionNotFound(name));
        }

        debug!("loaded EGL library");
        Ok(LibEgl { egl })
    }

    #[inline]
    fn check(&self, result: egl::types::EGLBoolean) -> Result<(), EglStatus> {
        if result == egl::FALSE {
            Err(self.get_error())
        } else {
            Ok(())
        }
    }
}

impl EglApi for LibEgl {
    unsafe fn get_display(&self, native_display: EGLNativeDisplayType) -> Option<EGLDisplay> {
        let display = self.egl.GetDisplay(native_display);
        if display == egl::NO_DISPLAY {
            None
        } else {
            Some(display)
        }
    }

    fn initialize(&self, display: EGLDisplay) -> Result<EGLVersion, EglStatus> {
        let (mut major, mut minor) = (0, 0);
        self.check(unsafe { self.egl.Initialize(display, &mut major, &mut minor) })?;
        Ok(EGLVersion { major, minor })
    }

    fn query_string(&self, display: EGLDisplay, name: EGLint) -> Option<String> {
        unsafe {
            let string = self.egl.QueryString(display, name);
            if string.is_null() {
                return None;
            }
            Some(CStr::from_ptr(string).to_string_lossy().into_owned())
        }
    }

    fn choose_config(&self, display: EGLDisplay, attributes: &[EGLint])
                     -> Result<Option<EGLConfig>, EglStatus> {
        debug_assert_eq!(attributes.last().copied(), Some(egl::NONE as EGLint));

        let (mut config, mut config_count) = (ptr::null(), 0);
        self.check(unsafe {
            self.egl.ChooseConfig(display, attributes.as_ptr(), &mut config, 1, &mut config_count)
        })?;
        if config_count == 0 {
            return Ok(None);
        }
        Ok(Some(config))
    }

    fn get_config_attrib(&self, display: EGLDisplay, config: EGLConfig, attribute: EGLint)
                         -> Result<EGLint, EglStatus> {
        let mut value = 0;
        self.check(unsafe { self.egl.GetConfigAttrib(display, config, attribute, &mut value) })?;
        Ok(value)
    }

    fn create_context(&self,
                      display: EGLDisplay,
                      config: EGLConfig,
                      share_context: Option<EGLContext>,
                      attributes: &[EGLint])
                      -> Result<EGLContext, EglStatus> {
        let share_context = share_context.unwrap_or(egl::NO_CONTEXT);
        let context = unsafe {
            self.egl.CreateContext(display, config, share_context, attributes.as_ptr())
        };
        if context == egl::NO_CONTEXT {
            return Err(self.get_error());
        }
        Ok(context)
    }

    fn query_context(&self, display: EGLDisplay, context: EGLContext, attribute: EGLint)
                     -> Result<EGLint, EglStatus> {
        let mut value = 0;
        self.check(unsafe { self.egl.QueryContext(display, context, attribute, &mut value) })?;
        Ok(value)
    }

    fn destroy_context(&self, display: EGLDisplay, context: EGLContext) -> Result<(), EglStatus> {
        self.check(unsafe { self.egl.DestroyContext(display, context) })
    }

    unsafe fn create_window_surface(&self,
                                    display: EGLDisplay,
                                    config: EGLConfig,
                                    window: EGLNativeWindowType,
                                    attributes: &[EGLint])
                                    -> Result<EGLSurface, EglStatus> {
        let surface = self.egl.CreateWindowSurface(display, config, window, attributes.as_ptr());
        if surface == egl::NO_SURFACE {
            return Err(self.get_error());
        }
        Ok(surface)
    }

    fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus> {
        self.check(unsafe { self.egl.DestroySurface(display, surface) })
    }

    fn make_current(&self,
                    display: EGLDisplay,
                    draw: Option<EGLSurface>,
                    read: Option<EGLSurface>,
                    context: Option<EGLContext>)
                    -> Result<(), EglStatus> {
        self.check(unsafe {
            self.egl.MakeCurrent(display,
                                 draw.unwrap_or(egl::NO_SURFACE),
                                 read.unwrap_or(egl::NO_SURFACE),
                                 context.unwrap_or(egl::NO_CONTEXT))
        })
    }

    fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface) -> Result<(), EglStatus> {
        self.check(unsafe { self.egl.SwapBuffers(display, surface) })
    }

    fn query_surface(&self, display: EGLDisplay, surface: EGLSurface, attribute: EGLint)
                     -> Result<EGLint, EglStatus> {
        let mut value = 0;
        self.check(unsafe { self.egl.QuerySurface(display, surface, attribute, &mut value) })?;
        Ok(value)
    }

    fn get_current_context(&self) -> Option<EGLContext> {
        let context = unsafe { self.egl.GetCurrentContext() };
        if context == egl::NO_CONTEXT {
            None
        } else {
            Some(context)
        }
    }

    fn terminate(&self, display: EGLDisplay) -> Result<(), EglStatus> {
        self.check(unsafe { self.egl.Terminate(display) })
    }

    fn release_thread(&self) -> Result<(), EglStatus> {
        self.check(unsafe { self.egl.ReleaseThread() })
    }

    #[inline]
    fn get_error(&self) -> EglStatus {
        EglStatus(unsafe { self.egl.GetError() })
    }

    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe { self.egl.GetProcAddress(symbol_name.as_ptr()) as *const c_void }
    }
}
