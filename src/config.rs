use crate::api::{Api, ContextKind, Lib};

// Shared library file names, tried in order. These differ between
// desktop distributions and Android for the same logical library.
#[cfg(target_os = "android")]
mod names {
    pub const GL: &[&str] = &[];
    pub const EGL: &[&str] = &["libEGL.so"];
    pub const GLES1: &[&str] = &["libGLESv1_CM.so"];
    pub const GLES2: &[&str] = &["libGLESv2.so"];
}

#[cfg(windows)]
mod names {
    pub const GL: &[&str] = &["opengl32.dll"];
    pub const EGL: &[&str] = &["libEGL.dll"];
    pub const GLES1: &[&str] = &["libGLES_CM.dll"];
    pub const GLES2: &[&str] = &["libGLESv2.dll"];
}

#[cfg(target_os = "macos")]
mod names {
    pub const GL: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL"];
    pub const EGL: &[&str] = &[];
    pub const GLES1: &[&str] = &[];
    pub const GLES2: &[&str] = &[];
}

#[cfg(not(any(target_os = "android", target_os = "macos", windows)))]
mod names {
    pub const GL: &[&str] = &["libGL.so.1", "libGL.so"];
    pub const EGL: &[&str] = &["libEGL.so.1", "libEGL.so"];
    pub const GLES1: &[&str] = &["libGLESv1_CM.so.1", "libGLESv1_CM.so"];
    pub const GLES2: &[&str] = &["libGLESv2.so.2", "libGLESv2.so"];
}

// Kind assumed when no context says otherwise.
#[cfg(target_os = "android")]
const DEFAULT_KIND: ContextKind = ContextKind::Embedded;
#[cfg(not(target_os = "android"))]
const DEFAULT_KIND: ContextKind = ContextKind::Desktop;

#[derive(Clone, Debug)]
pub struct Config {
    pub libraries: [&'static [&'static str]; 4],
    // Version reported by conservative queries inside glBegin/glEnd.
    pub block_version: u32,
    // Versions reported by conservative queries with nothing current.
    pub gl_no_context: u32,
    pub egl_no_context: u32,
    pub glx_no_context: u32,
    pub wgl_no_context: u32,
    pub default_kind: ContextKind,
}

impl Config {
    pub fn library_names(&self, lib: Lib) -> &'static [&'static str] {
        return self.libraries[lib.index()];
    }

    pub fn no_context_version(&self, api: Api) -> u32 {
        return match api {
            Api::Gl | Api::Gles => self.gl_no_context,
            Api::Egl => self.egl_no_context,
            Api::Glx => self.glx_no_context,
            Api::Wgl => self.wgl_no_context,
        };
    }
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            libraries: [names::GL, names::EGL, names::GLES1, names::GLES2],
            block_version: 100,
            gl_no_context: 100,
            egl_no_context: 14,
            glx_no_context: 14,
            wgl_no_context: 10,
            default_kind: DEFAULT_KIND,
        };
    }
}
