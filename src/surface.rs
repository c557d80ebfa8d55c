// videoegl/src/surface.rs
//
//! Window surfaces and the native windows they wrap.

use crate::egl;
use crate::egl::types::{EGLNativeWindowType, EGLSurface, EGLint};
use crate::egl_core::EglCore;
use crate::platform::library::LibEgl;
use crate::platform::EglApi;
use crate::{EglStatus, Error};

use euclid::default::Size2D;
use std::fmt::{self, Debug, Display, Formatter};
use std::os::raw::c_void;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceID(pub usize);

impl Display for SurfaceID {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", *self)
    }
}

/// A native window that EGL can render into: an `ANativeWindow*` on Android, an X11 window ID
/// or a Win32 `HWND` elsewhere.
#[derive(Clone, Copy, Debug)]
pub struct NativeWidget {
    pub(crate) native_window: EGLNativeWindowType,
}

impl NativeWidget {
    /// Wraps a raw native window, e.g. the result of `ANativeWindow_fromSurface()`.
    ///
    /// # Safety
    ///
    /// The window must stay alive for as long as any surface created from this widget.
    pub unsafe fn from_native_window(native_window: *mut c_void) -> Result<NativeWidget, Error> {
        if native_window.is_null() {
            return Err(Error::InvalidNativeWidget);
        }
        Ok(NativeWidget { native_window: native_window as EGLNativeWindowType })
    }

    /// Creates a native widget from a `raw-window-handle` 0.6 window handle.
    #[cfg(feature = "ve-raw-window-handle-06")]
    pub fn from_window_handle(handle: rwh_06::WindowHandle) -> Result<NativeWidget, Error> {
        use rwh_06::RawWindowHandle::{AndroidNdk, Win32, Xlib};

        let native_window = match handle.as_raw() {
            AndroidNdk(handle) => handle.a_native_window.as_ptr() as EGLNativeWindowType,
            Xlib(handle) => handle.window as usize as EGLNativeWindowType,
            Win32(handle) => handle.hwnd.get() as usize as EGLNativeWindowType,
            _ => return Err(Error::IncompatibleNativeWidget),
        };
        if native_window.is_null() {
            return Err(Error::InvalidNativeWidget);
        }
        Ok(NativeWidget { native_window })
    }

    /// Creates a native widget from a `raw-window-handle` 0.5 window handle.
    ///
    /// # Safety
    ///
    /// The window must stay alive for as long as any surface created from this widget.
    #[cfg(feature = "ve-raw-window-handle-05")]
    pub unsafe fn from_raw_window_handle(raw_handle: rwh_05::RawWindowHandle)
                                         -> Result<NativeWidget, Error> {
        use rwh_05::RawWindowHandle::{AndroidNdk, Win32, Xlib};

        let native_window = match raw_handle {
            AndroidNdk(handle) => handle.a_native_window as EGLNativeWindowType,
            Xlib(handle) => handle.window as usize as EGLNativeWindowType,
            Win32(handle) => handle.hwnd as EGLNativeWindowType,
            _ => return Err(Error::IncompatibleNativeWidget),
        };
        if native_window.is_null() {
            return Err(Error::InvalidNativeWidget);
        }
        Ok(NativeWidget { native_window })
    }

    #[inline]
    pub fn native_window(&self) -> EGLNativeWindowType {
        self.native_window
    }
}

/// An EGL window surface bound to the context of the `EglCore` that created it.
///
/// The surface borrows its `EglCore`, so it is always destroyed before the context is. Dropping
/// the surface destroys it.
pub struct WindowSurface<'a, E: EglApi = LibEgl> {
    core: &'a EglCore<E>,
    egl_surface: Option<EGLSurface>,
}

impl<'a, E> WindowSurface<'a, E> where E: EglApi {
    pub(crate) fn new(core: &'a EglCore<E>, egl_surface: EGLSurface) -> WindowSurface<'a, E> {
        WindowSurface { core, egl_surface: Some(egl_surface) }
    }

    /// Makes this surface the current draw and read target.
    #[inline]
    pub fn make_current(&self) -> bool {
        self.core.make_current(self.egl_surface)
    }

    /// Presents the back buffer. See `EglCore::swap_buffers()`.
    #[inline]
    pub fn swap(&self) -> EglStatus {
        self.core.swap_buffers(self.egl_surface)
    }

    /// `eglQuerySurface` on this surface.
    #[inline]
    pub fn query(&self, attribute: EGLint) -> Option<EGLint> {
        self.core.query_surface(self.egl_surface, attribute)
    }

    #[inline]
    pub fn width(&self) -> Option<i32> {
        self.query(egl::WIDTH as EGLint)
    }

    #[inline]
    pub fn height(&self) -> Option<i32> {
        self.query(egl::HEIGHT as EGLint)
    }

    /// The surface's size, in device pixels.
    pub fn size(&self) -> Option<Size2D<i32>> {
        Some(Size2D::new(self.width()?, self.height()?))
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.egl_surface.is_some()
    }

    #[inline]
    pub fn id(&self) -> Option<SurfaceID> {
        self.egl_surface.map(|egl_surface| SurfaceID(egl_surface as usize))
    }

    #[inline]
    pub fn egl_surface(&self) -> Option<EGLSurface> {
        self.egl_surface
    }

    /// Unbinds and destroys the surface. Calling this again is a no-op.
    pub fn release(&mut self) {
        self.core.destroy_window_surface(self.egl_surface.take());
    }
}

impl<'a, E> Drop for WindowSurface<'a, E> where E: EglApi {
    fn drop(&mut self) {
        self.release();
    }
}

impl<'a, E> Debug for WindowSurface<'a, E> where E: EglApi {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.egl_surface {
            Some(egl_surface) => write!(f, "WindowSurface({:x})", egl_surface as usize),
            None => write!(f, "WindowSurface(released)"),
        }
    }
}
