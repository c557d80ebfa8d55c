// videoegl/src/egl_core.rs
//
//! The EGL display, configuration and context owned by one rendering thread.

use crate::context::{AttributeList, ContextAttributes, NativeContext};
use crate::egl;
use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLSurface, EGLint};
use crate::platform::ffi::EGL_KHR_SURFACELESS_CONTEXT;
use crate::platform::library::LibEgl;
use crate::platform::EglApi;
use crate::surface::{NativeWidget, WindowSurface};
use crate::{EGLVersion, EglStatus, Error};

use std::os::raw::c_void;

/// Owns an EGL display connection, the chosen framebuffer configuration and an OpenGL ES
/// context.
///
/// An `EglCore` only exists once initialization went all the way through. `release()` (or
/// dropping it) tears everything down; afterwards every handle reads as `None` and per-frame
/// operations fail softly.
///
/// EGL contexts are current on one thread at a time and nothing here locks. Keep the `EglCore`
/// and its surfaces on the thread that renders.
pub struct EglCore<E: EglApi = LibEgl> {
    api: E,
    egl_display: Option<EGLDisplay>,
    egl_config: Option<EGLConfig>,
    egl_context: Option<EGLContext>,
    egl_version: Option<EGLVersion>,
    attributes: ContextAttributes,
    surfaceless: bool,
}

impl EglCore<LibEgl> {
    /// Loads the system EGL library and initializes it.
    ///
    /// See `with_api()`.
    pub fn new(shared_context: Option<NativeContext>, attributes: &ContextAttributes)
               -> Result<EglCore, Error> {
        EglCore::with_api(LibEgl::load()?, shared_context, attributes)
    }
}

impl<E> EglCore<E> where E: EglApi {
    /// Opens the default display, picks a configuration matching `attributes` and creates a
    /// context, sharing GL objects with `shared_context` if one is given.
    ///
    /// Finishes in the default state (see `make_default()`): with `EGL_KHR_surfaceless_context`
    /// the new context is current without a surface, otherwise nothing is current until a surface
    /// is bound.
    pub fn with_api(api: E,
                    shared_context: Option<NativeContext>,
                    attributes: &ContextAttributes)
                    -> Result<EglCore<E>, Error> {
        let egl_display = match unsafe { api.get_display(egl::DEFAULT_DISPLAY) } {
            Some(egl_display) => egl_display,
            None => {
                error!("eglGetDisplay failed");
                return Err(Error::DisplayUnavailable);
            }
        };

        let egl_version = match api.initialize(egl_display) {
            Ok(egl_version) => egl_version,
            Err(err) => {
                error!("eglInitialize failed: {}", err);
                return Err(Error::DisplayInitializationFailed(err.to_windowing_api_error()));
            }
        };
        info!("EGL {}.{} initialized", egl_version.major, egl_version.minor);

        let surfaceless = api
            .query_string(egl_display, egl::EXTENSIONS as EGLint)
            .is_some_and(|extensions| {
                extensions.split_whitespace().any(|name| name == EGL_KHR_SURFACELESS_CONTEXT)
            });

        // From here on, bailing out drops `core`, which terminates the display.
        let mut core = EglCore {
            api,
            egl_display: Some(egl_display),
            egl_config: None,
            egl_context: None,
            egl_version: Some(egl_version),
            attributes: *attributes,
            surfaceless,
        };

        let egl_config = core.choose_config(egl_display)?;
        core.egl_config = Some(egl_config);
        if let Ok(config_id) = core.api.get_config_attrib(egl_display,
                                                          egl_config,
                                                          egl::CONFIG_ID as EGLint) {
            debug!("chose EGLConfig {}", config_id);
        }

        let egl_context = core.create_context(egl_display, egl_config, shared_context)?;
        core.egl_context = Some(egl_context);

        if let Ok(client_version) = core.api.query_context(egl_display,
                                                            egl_context,
                                                            egl::CONTEXT_CLIENT_VERSION as EGLint) {
            debug!("EGLContext created, client version {}", client_version);
        }

        core.make_default();
        Ok(core)
    }

    fn choose_config(&self, egl_display: EGLDisplay) -> Result<EGLConfig, Error> {
        let config_attributes = self.attributes.config_attributes().finish();
        match self.api.choose_config(egl_display, &config_attributes) {
            Ok(Some(egl_config)) => Ok(egl_config),
            Ok(None) => {
                warn!("unable to find RGBA8888 EGLConfig ({:?})", self.attributes.flags);
                Err(Error::NoPixelFormatFound)
            }
            Err(err) => {
                warn!("eglChooseConfig failed: {}", err);
                Err(Error::PixelFormatSelectionFailed(err.to_windowing_api_error()))
            }
        }
    }

    fn create_context(&self,
                      egl_display: EGLDisplay,
                      egl_config: EGLConfig,
                      shared_context: Option<NativeContext>)
                      -> Result<EGLContext, Error> {
        let context_attributes = self.attributes.context_attributes().finish();
        let share_context = shared_context.map(|context| context.0);
        self.api
            .create_context(egl_display, egl_config, share_context, &context_attributes)
            .map_err(|err| {
                error!("eglCreateContext failed: {}", err);
                Error::ContextCreationFailed(err.to_windowing_api_error())
            })
    }

    /// Destroys the context and terminates the display.
    ///
    /// Failures are logged and otherwise ignored; the handles are reset either way. Calling this
    /// again is a no-op.
    pub fn release(&mut self) {
        if let Some(egl_display) = self.egl_display.take() {
            debug!("releasing EGL");
            self.destroy_context(egl_display);
            if let Err(err) = self.api.terminate(egl_display) {
                warn!("eglTerminate failed: {}", err);
            }
            if let Err(err) = self.api.release_thread() {
                warn!("eglReleaseThread failed: {}", err);
            }
        }
        self.egl_context = None;
        self.egl_config = None;
    }

    fn destroy_context(&mut self, egl_display: EGLDisplay) {
        let egl_context = match self.egl_context.take() {
            Some(egl_context) => egl_context,
            None => return,
        };

        if let Err(err) = self.api.make_current(egl_display, None, None, None) {
            warn!("eglMakeCurrent failed while releasing: {}", err);
        }
        if let Err(err) = self.api.destroy_context(egl_display, egl_context) {
            error!("eglDestroyContext failed: {} (display: {:?}, context: {:?})",
                   err,
                   egl_display,
                   egl_context);
        }
    }

    /// Creates a window surface for `native_widget` and makes it current.
    pub fn create_surface_from_window(&self, native_widget: &NativeWidget)
                                      -> Result<WindowSurface<'_, E>, Error> {
        let egl_surface = self.try_create_window_surface(native_widget)?;
        let surface = WindowSurface::new(self, egl_surface);
        surface.make_current();
        Ok(surface)
    }

    /// Returns the context, or `None` once released.
    #[inline]
    pub fn context(&self) -> Option<NativeContext> {
        self.egl_context.map(NativeContext)
    }

    #[inline]
    pub fn display(&self) -> Option<EGLDisplay> {
        self.egl_display
    }

    #[inline]
    pub fn config(&self) -> Option<EGLConfig> {
        self.egl_config
    }

    /// The EGL version reported by the display, or `None` once released.
    #[inline]
    pub fn egl_version(&self) -> Option<EGLVersion> {
        self.egl_display.and(self.egl_version)
    }

    #[inline]
    pub fn attributes(&self) -> &ContextAttributes {
        &self.attributes
    }

    /// Whether the display can keep the context current without a surface.
    #[inline]
    pub fn supports_surfaceless(&self) -> bool {
        self.surfaceless
    }

    /// Whether this context is current on the calling thread.
    pub fn is_current(&self) -> bool {
        match self.egl_context {
            Some(egl_context) => self.api.get_current_context() == Some(egl_context),
            None => false,
        }
    }

    /// `eglQuerySurface`. Returns `None` (and logs) if the query fails.
    pub fn query_surface(&self, egl_surface: Option<EGLSurface>, attribute: EGLint)
                         -> Option<EGLint> {
        let (egl_display, egl_surface) = match (self.egl_display, egl_surface) {
            (Some(egl_display), Some(egl_surface)) => (egl_display, egl_surface),
            _ => return None,
        };
        match self.api.query_surface(egl_display, egl_surface, attribute) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("eglQuerySurface(0x{:x}) failed: {}", attribute, err);
                None
            }
        }
    }

    /// Binds the context to `egl_surface` for both drawing and reading.
    ///
    /// Returns `false` if there is nothing to bind or the driver refuses; the previous binding
    /// then stays in place.
    pub fn make_current(&self, egl_surface: Option<EGLSurface>) -> bool {
        let egl_display = match self.egl_display {
            Some(egl_display) => egl_display,
            None => {
                debug!("make_current: EGL display not initialized");
                return false;
            }
        };

        let egl_surface = match egl_surface {
            Some(egl_surface) => egl_surface,
            None => {
                if self.api.get_error() == EglStatus::BAD_NATIVE_WINDOW {
                    error!("make_current: returned EGL_BAD_NATIVE_WINDOW");
                }
                return false;
            }
        };

        match self.api.make_current(egl_display,
                                    Some(egl_surface),
                                    Some(egl_surface),
                                    self.egl_context) {
            Ok(()) => true,
            Err(err) => {
                warn!("eglMakeCurrent failed: {}", err);
                false
            }
        }
    }

    /// Unbinds any surface.
    ///
    /// With `EGL_KHR_surfaceless_context` the context stays current; otherwise it is released
    /// along with the surface.
    pub fn make_default(&self) {
        let egl_display = match self.egl_display {
            Some(egl_display) => egl_display,
            None => return,
        };

        let egl_context = if self.surfaceless { self.egl_context } else { None };
        if let Err(err) = self.api.make_current(egl_display, None, None, egl_context) {
            warn!("make_default: eglMakeCurrent failed: {}", err);
        }
    }

    /// Presents the back buffer of `egl_surface`.
    ///
    /// Returns `EglStatus::SUCCESS` or the EGL error code; the caller decides whether to retry or
    /// drop the frame.
    pub fn swap_buffers(&self, egl_surface: Option<EGLSurface>) -> EglStatus {
        let egl_display = match self.egl_display {
            Some(egl_display) => egl_display,
            None => return EglStatus::NOT_INITIALIZED,
        };
        let egl_surface = match egl_surface {
            Some(egl_surface) => egl_surface,
            None => return EglStatus::BAD_SURFACE,
        };

        match self.api.swap_buffers(egl_display, egl_surface) {
            Ok(()) => EglStatus::SUCCESS,
            Err(err) => {
                debug!("swap: err={}", err);
                err
            }
        }
    }

    /// Creates a window surface without making it current.
    ///
    /// Failure is logged and reported as `None`.
    pub fn create_window_surface(&self, native_widget: &NativeWidget) -> Option<EGLSurface> {
        match self.try_create_window_surface(native_widget) {
            Ok(egl_surface) => Some(egl_surface),
            Err(err) => {
                error!("create_window_surface: {}", err);
                None
            }
        }
    }

    fn try_create_window_surface(&self, native_widget: &NativeWidget)
                                 -> Result<EGLSurface, Error> {
        let (egl_display, egl_config) = match (self.egl_display, self.egl_config) {
            (Some(egl_display), Some(egl_config)) => (egl_display, egl_config),
            _ => return Err(Error::NotInitialized),
        };

        let surface_attributes = AttributeList::new().finish();
        unsafe {
            self.api.create_window_surface(egl_display,
                                           egl_config,
                                           native_widget.native_window,
                                           &surface_attributes)
        }
        .map_err(|err| Error::SurfaceCreationFailed(err.to_windowing_api_error()))
    }

    /// Unbinds and destroys `egl_surface`. `None` is ignored.
    pub fn destroy_window_surface(&self, egl_surface: Option<EGLSurface>) {
        let egl_surface = match egl_surface {
            Some(egl_surface) => egl_surface,
            None => return,
        };
        let egl_display = match self.egl_display {
            Some(egl_display) => egl_display,
            None => {
                debug!("destroy_window_surface: EGL already released");
                return;
            }
        };

        self.make_default();
        if let Err(err) = self.api.destroy_surface(egl_display, egl_surface) {
            warn!("eglDestroySurface failed: {}", err);
        }
    }

    /// Looks up a GL or EGL entry point.
    #[inline]
    pub fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        self.api.get_proc_address(symbol_name)
    }

    /// Loads OpenGL ES entry points for rendering with `glow`.
    ///
    /// `glow` reads `GL_VERSION` while loading, so this context must already be current: bind a
    /// surface first unless `supports_surfaceless()` holds. Returns `Error::NoCurrentContext`
    /// otherwise, and `Error::NotInitialized` once released.
    ///
    /// # Safety
    ///
    /// The context must be current on the calling thread whenever the returned `glow::Context`
    /// is used.
    pub unsafe fn create_gl(&self) -> Result<glow::Context, Error> {
        if self.egl_context.is_none() {
            return Err(Error::NotInitialized);
        }
        if !self.is_current() {
            return Err(Error::NoCurrentContext);
        }
        Ok(glow::Context::from_loader_function(|symbol_name| self.get_proc_address(symbol_name)))
    }
}

impl<E> Drop for EglCore<E> where E: EglApi {
    fn drop(&mut self) {
        self.release();
    }
}
