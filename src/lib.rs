//! Lazily resolved OpenGL, OpenGL ES, EGL, GLX and WGL entry points.
//!
//! Call the functions in [`gl`], [`egl`], [`glx`] and [`wgl`] as if
//! they were the driver's own. The first call of each works out which
//! provider (core version or extension) the current context offers,
//! fetches the address from the right library or `GetProcAddress`,
//! and remembers it.

#[macro_use]
mod entry;

pub mod api;
pub mod config;
pub mod dispatch;
pub mod driver;
pub mod engine;
pub mod error;
pub mod guard;
pub mod loader;
pub mod logging;
pub mod native;
pub mod version;

pub mod egl;
pub mod gl;
pub mod glx;
#[cfg(windows)]
pub mod wgl;

use core::ffi::c_void;

pub use api::{Address, Api, Candidate, ClientApi, ContextKind, CurrentApi, EntryPoint, Lib, Provider, Requirement};
pub use dispatch::notify_context_changed;
pub use error::{Error, Result};

/// Address of a GL-family function from the platform's own
/// `GetProcAddress`, or null.
pub fn get_proc_address(name: &str) -> *const c_void {
    return match engine::global().get_proc_address(name) {
        Some(addr) => addr.as_ptr(),
        None => std::ptr::null(),
    };
}

/// Whether the current context is desktop OpenGL rather than ES.
pub fn is_desktop_gl() -> bool {
    return engine::global().conservative_is_desktop();
}

/// Version of the current GL or GLES context, as major*10+minor.
pub fn gl_version() -> u32 {
    return engine::global().conservative_api_version(Api::Gl);
}

pub fn has_gl_extension(name: &str) -> bool {
    return engine::global().conservative_has_extension(Api::Gl, name);
}

pub fn egl_version() -> u32 {
    return engine::global().conservative_api_version(Api::Egl);
}

pub fn has_egl_extension(name: &str) -> bool {
    return engine::global().conservative_has_extension(Api::Egl, name);
}
