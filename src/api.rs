use core::ffi::c_void;
use std::fmt;
use std::num::NonZeroUsize;
use crate::dispatch::DispatchCell;

// Logical shared libraries. GLX and WGL live inside the
// desktop GL library, so they don't get their own entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Lib {
    Gl,
    Egl,
    Gles1,
    Gles2,
}

impl Lib {
    pub const ALL: [Lib; 4] = [Lib::Gl, Lib::Egl, Lib::Gles1, Lib::Gles2];

    pub fn name(self) -> &'static str {
        return match self {
            Lib::Gl => "GL",
            Lib::Egl => "EGL",
            Lib::Gles1 => "GLESv1_CM",
            Lib::Gles2 => "GLESv2",
        };
    }

    pub(crate) fn index(self) -> usize {
        return self as usize;
    }
}

// Whether a failed open/lookup is fatal or just a "no".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Requirement {
    Required,
    Optional,
}

/// Address of a resolved symbol. Never null.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Address(NonZeroUsize);

impl Address {
    pub fn from_ptr(ptr: *const c_void) -> Option<Address> {
        return NonZeroUsize::new(ptr as usize).map(Address);
    }

    pub const fn from_raw(raw: NonZeroUsize) -> Address {
        return Address(raw);
    }

    pub fn raw(self) -> NonZeroUsize {
        return self.0;
    }

    pub fn as_ptr(self) -> *const c_void {
        return self.0.get() as *const c_void;
    }

    /// Reinterpret the address as a function pointer type.
    ///
    /// # Safety
    /// `F` must be a pointer-sized `extern` fn type matching the
    /// symbol's real signature.
    pub unsafe fn cast<F: Copy>(self) -> F {
        debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<usize>());
        return std::mem::transmute_copy::<usize, F>(&self.0.get());
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Api {
    // Desktop OpenGL.
    Gl,
    // OpenGL ES. Shares extension names with desktop GL.
    Gles,
    Egl,
    Glx,
    Wgl,
}

impl Api {
    // Version every implementation of the API supports, so
    // thresholds at or below it need no query.
    pub fn baseline(self) -> u32 {
        return 10;
    }

    // The API family whose extension list answers for this API.
    pub fn extension_family(self) -> Api {
        return match self {
            Api::Gles => Api::Gl,
            other => other,
        };
    }

    // Library that exports the core entry points of `version`.
    pub fn core_library(self, version: u32) -> Lib {
        return match self {
            Api::Gl | Api::Glx | Api::Wgl => Lib::Gl,
            Api::Gles if version < 20 => Lib::Gles1,
            Api::Gles => Lib::Gles2,
            Api::Egl => Lib::Egl,
        };
    }

    fn label(self) -> &'static str {
        return match self {
            Api::Gl => "Desktop OpenGL",
            Api::Gles => "OpenGL ES",
            Api::Egl => "EGL",
            Api::Glx => "GLX",
            Api::Wgl => "WGL",
        };
    }
}

/// A condition under which an entry point is available.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Provider {
    // Core since `version` (major*10+minor).
    Core { api: Api, version: u32 },
    // Present whenever the named extension is advertised.
    Extension { api: Api, name: &'static str },
}

impl Provider {
    pub const fn core(api: Api, version: u32) -> Provider {
        return Provider::Core { api, version };
    }

    pub const fn extension(api: Api, name: &'static str) -> Provider {
        return Provider::Extension { api, name };
    }

    pub fn api(&self) -> Api {
        return match *self {
            Provider::Core { api, .. } => api,
            Provider::Extension { api, .. } => api,
        };
    }

    /// Human readable name, as shown when nothing provides an entry point.
    pub fn name(&self) -> String {
        return match *self {
            Provider::Core { api, version } => {
                format!("{} {}.{}", api.label(), version / 10, version % 10)
            }
            Provider::Extension { name, .. } => name.to_string(),
        };
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.name());
    }
}

// A provider and the symbol to look up once it is selected.
// Suffixed aliases (glFooARB) point at the same function.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Candidate {
    pub provider: Provider,
    pub symbol: &'static str,
}

impl Candidate {
    pub const fn new(provider: Provider, symbol: &'static str) -> Candidate {
        return Candidate { provider, symbol };
    }
}

/// One public entry point: its name, where it may come from in
/// order of preference, and the process-wide cell caching the answer.
pub struct EntryPoint {
    pub name: &'static str,
    pub candidates: &'static [Candidate],
    pub(crate) cell: DispatchCell,
}

impl EntryPoint {
    pub const fn new(name: &'static str, candidates: &'static [Candidate]) -> EntryPoint {
        return EntryPoint { name, candidates, cell: DispatchCell::new() };
    }

    pub fn cell(&self) -> &DispatchCell {
        return &self.cell;
    }

    // Identity used as the key of per-thread tables.
    pub(crate) fn key(&'static self) -> usize {
        return self as *const EntryPoint as usize;
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .field("candidates", &self.candidates)
            .finish();
    }
}

// Client API of the current EGL context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClientApi {
    OpenGl,
    OpenGlEs,
}

// Which context-management API owns the current context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurrentApi {
    Glx,
    Egl(ClientApi),
    Wgl,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContextKind {
    Desktop,
    Embedded,
    None,
}
