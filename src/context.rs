// videoegl/src/context.rs
//
//! Context attributes and framebuffer configuration selection.

use crate::egl;
use crate::egl::types::{EGLContext, EGLint};
use crate::info::GLVersion;
use crate::platform::ffi::EGL_RECORDABLE_ANDROID;

use bitflags::bitflags;

const RGBA_CHANNEL_BIT_DEPTH: EGLint = 8;
const DEPTH_BIT_DEPTH: EGLint = 16;
const STENCIL_BIT_DEPTH: EGLint = 8;

bitflags! {
    /// Optional framebuffer features. The RGBA8888 color buffer is always requested.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ContextAttributeFlags: u8 {
        /// A 16-bit depth buffer.
        const DEPTH      = 0x01;
        /// An 8-bit stencil buffer.
        const STENCIL    = 0x02;
        /// Surfaces usable as video encoder input (`EGL_RECORDABLE_ANDROID`).
        const RECORDABLE = 0x04;
    }
}

/// What to ask of the driver when an `EglCore` is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    /// The OpenGL ES client version. Only `major` reaches EGL.
    pub version: GLVersion,
    pub flags: ContextAttributeFlags,
}

impl ContextAttributes {
    /// OpenGL ES 2.0 with the given framebuffer features.
    #[inline]
    pub fn gles2(flags: ContextAttributeFlags) -> ContextAttributes {
        ContextAttributes { version: GLVersion::new(2, 0), flags }
    }

    /// The `eglChooseConfig` attribute list for these attributes.
    pub fn config_attributes(&self) -> AttributeList {
        let mut list = AttributeList::new();
        list.push(egl::RENDERABLE_TYPE as EGLint, egl::OPENGL_ES2_BIT as EGLint)
            .push(egl::RED_SIZE as EGLint, RGBA_CHANNEL_BIT_DEPTH)
            .push(egl::GREEN_SIZE as EGLint, RGBA_CHANNEL_BIT_DEPTH)
            .push(egl::BLUE_SIZE as EGLint, RGBA_CHANNEL_BIT_DEPTH)
            .push(egl::ALPHA_SIZE as EGLint, RGBA_CHANNEL_BIT_DEPTH);

        // Optional fields always go in this order.
        if self.flags.contains(ContextAttributeFlags::STENCIL) {
            list.push(egl::STENCIL_SIZE as EGLint, STENCIL_BIT_DEPTH);
        }
        if self.flags.contains(ContextAttributeFlags::DEPTH) {
            list.push(egl::DEPTH_SIZE as EGLint, DEPTH_BIT_DEPTH);
        }
        if self.flags.contains(ContextAttributeFlags::RECORDABLE) {
            list.push(EGL_RECORDABLE_ANDROID, egl::TRUE as EGLint);
        }
        list
    }

    /// The `eglCreateContext` attribute list for these attributes.
    pub(crate) fn context_attributes(&self) -> AttributeList {
        let mut list = AttributeList::new();
        list.push(egl::CONTEXT_CLIENT_VERSION as EGLint, self.version.major as EGLint);
        list
    }
}

impl Default for ContextAttributes {
    #[inline]
    fn default() -> ContextAttributes {
        ContextAttributes::gles2(ContextAttributeFlags::empty())
    }
}

/// An EGL attribute list under construction: key/value pairs, then `EGL_NONE`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeList {
    pairs: Vec<(EGLint, EGLint)>,
}

impl AttributeList {
    #[inline]
    pub fn new() -> AttributeList {
        AttributeList::default()
    }

    #[inline]
    pub fn push(&mut self, key: EGLint, value: EGLint) -> &mut AttributeList {
        self.pairs.push((key, value));
        self
    }

    /// The key/value pairs, without the terminator.
    #[inline]
    pub fn pairs(&self) -> &[(EGLint, EGLint)] {
        &self.pairs
    }

    /// The value recorded for `key`, if any.
    pub fn get(&self, key: EGLint) -> Option<EGLint> {
        self.pairs.iter().find(|&&(k, _)| k == key).map(|&(_, value)| value)
    }

    /// The flat, `EGL_NONE`-terminated list EGL expects.
    pub fn finish(&self) -> Vec<EGLint> {
        let mut attributes = Vec::with_capacity(self.pairs.len() * 2 + 1);
        for &(key, value) in &self.pairs {
            attributes.push(key);
            attributes.push(value);
        }
        attributes.push(egl::NONE as EGLint);
        attributes
    }
}

/// A native EGL context handle.
///
/// Pass one to `EglCore::new` to share GL objects (textures, buffers, programs) with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeContext(pub EGLContext);
