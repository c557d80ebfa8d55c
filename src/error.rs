// videoegl/src/error.rs
//
//! Various errors that methods can produce.

use crate::egl;
use crate::egl::types::{EGLenum, EGLint};

use std::fmt::{self, Display, Formatter};

/// Errors that abort the construction of an `EglCore` or a `WindowSurface`.
///
/// Per-frame operations (`make_current`, `swap_buffers`, ...) don't produce these; they report
/// failure through their return value and the log instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The system EGL library couldn't be located.
    NoEglLibraryFound,
    /// A required EGL entry point is missing from the loaded library.
    EglFunctionNotFound(&'static str),
    /// The platform doesn't support runtime loading of EGL.
    UnsupportedOnThisPlatform,
    /// `eglGetDisplay` returned `EGL_NO_DISPLAY`.
    DisplayUnavailable,
    /// `eglInitialize` failed on the default display.
    DisplayInitializationFailed(WindowingApiError),
    /// Choosing an EGL framebuffer configuration failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// No EGL framebuffer configuration matched the requested attributes.
    NoPixelFormatFound,
    /// The system couldn't create an OpenGL ES context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't create a window surface.
    SurfaceCreationFailed(WindowingApiError),
    /// The `EglCore` has already been released.
    NotInitialized,
    /// The operation needs this context to be current on the calling thread, and it isn't.
    NoCurrentContext,
    /// The native widget is invalid.
    InvalidNativeWidget,
    /// The window handle type isn't something EGL can render to on this platform.
    IncompatibleNativeWidget,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::NoEglLibraryFound => write!(f, "no EGL library found"),
            Error::EglFunctionNotFound(name) => write!(f, "EGL function `{}` not found", name),
            Error::UnsupportedOnThisPlatform => write!(f, "unsupported on this platform"),
            Error::DisplayUnavailable => write!(f, "eglGetDisplay failed"),
            Error::DisplayInitializationFailed(err) => write!(f, "eglInitialize failed: {:?}", err),
            Error::PixelFormatSelectionFailed(err) => write!(f, "eglChooseConfig failed: {:?}", err),
            Error::NoPixelFormatFound => write!(f, "unable to find RGBA8888 EGLConfig"),
            Error::ContextCreationFailed(err) => write!(f, "eglCreateContext failed: {:?}", err),
            Error::SurfaceCreationFailed(err) => {
                write!(f, "eglCreateWindowSurface failed: {:?}", err)
            }
            Error::NotInitialized => write!(f, "EGL has been released"),
            Error::NoCurrentContext => write!(f, "the EGL context is not current"),
            Error::InvalidNativeWidget => write!(f, "invalid native window"),
            Error::IncompatibleNativeWidget => write!(f, "incompatible native window"),
        }
    }
}

impl std::error::Error for Error {}

/// Abstraction of the errors that EGL returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// EGL is not initialized, or could not be initialized, for the specified EGL display
    /// connection.
    NotInitialized,
    /// EGL cannot access a requested resource (for example a context is bound in another thread).
    BadAccess,
    /// EGL failed to allocate resources for the requested operation.
    BadAlloc,
    /// An unrecognized attribute or attribute value was passed in the attribute list.
    BadAttribute,
    /// An `EGLConfig` argument does not name a valid EGL frame buffer configuration.
    BadConfig,
    /// An `EGLContext` argument does not name a valid EGL rendering context.
    BadContext,
    /// The current surface of the calling thread is a window, pixel buffer or pixmap that is no
    /// longer valid.
    BadCurrentSurface,
    /// An `EGLDisplay` argument does not name a valid EGL display connection.
    BadDisplay,
    /// An `EGLSurface` argument does not name a valid surface configured for GL rendering.
    BadSurface,
    /// Arguments are inconsistent (for example, a valid context requires buffers not supplied by
    /// a valid surface).
    BadMatch,
    /// One or more argument values are invalid.
    BadParameter,
    /// A `NativePixmapType` argument does not refer to a valid native pixmap.
    BadNativePixmap,
    /// A `NativeWindowType` argument does not refer to a valid native window.
    BadNativeWindow,
    /// A power management event has occurred. The application must destroy all contexts and
    /// reinitialise OpenGL ES state and objects to continue rendering.
    ContextLost,
}

impl WindowingApiError {
    pub(crate) fn from_egl_error(egl_error: EGLint) -> WindowingApiError {
        match egl_error as EGLenum {
            egl::NOT_INITIALIZED => WindowingApiError::NotInitialized,
            egl::BAD_ACCESS => WindowingApiError::BadAccess,
            egl::BAD_ALLOC => WindowingApiError::BadAlloc,
            egl::BAD_ATTRIBUTE => WindowingApiError::BadAttribute,
            egl::BAD_CONFIG => WindowingApiError::BadConfig,
            egl::BAD_CONTEXT => WindowingApiError::BadContext,
            egl::BAD_CURRENT_SURFACE => WindowingApiError::BadCurrentSurface,
            egl::BAD_DISPLAY => WindowingApiError::BadDisplay,
            egl::BAD_SURFACE => WindowingApiError::BadSurface,
            egl::BAD_MATCH => WindowingApiError::BadMatch,
            egl::BAD_PARAMETER => WindowingApiError::BadParameter,
            egl::BAD_NATIVE_PIXMAP => WindowingApiError::BadNativePixmap,
            egl::BAD_NATIVE_WINDOW => WindowingApiError::BadNativeWindow,
            egl::CONTEXT_LOST => WindowingApiError::ContextLost,
            _ => WindowingApiError::Failed,
        }
    }
}

/// A raw EGL error code, as returned by `eglGetError()`.
///
/// `EglStatus::SUCCESS` means the operation went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct EglStatus(pub EGLint);

impl EglStatus {
    pub const SUCCESS: EglStatus = EglStatus(egl::SUCCESS as EGLint);
    pub const NOT_INITIALIZED: EglStatus = EglStatus(egl::NOT_INITIALIZED as EGLint);
    pub const BAD_SURFACE: EglStatus = EglStatus(egl::BAD_SURFACE as EGLint);
    pub const BAD_NATIVE_WINDOW: EglStatus = EglStatus(egl::BAD_NATIVE_WINDOW as EGLint);

    /// The raw `EGLint` error code.
    #[inline]
    pub fn code(self) -> EGLint {
        self.0
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == EglStatus::SUCCESS
    }

    #[inline]
    pub fn to_windowing_api_error(self) -> WindowingApiError {
        WindowingApiError::from_egl_error(self.0)
    }
}

impl Display for EglStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}
