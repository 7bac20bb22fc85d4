use log::debug;
use crate::api::{Api, ClientApi, ContextKind, CurrentApi, Lib, Requirement};
use crate::driver::{Driver, Source, StringQuery};
use super::Engine;

// The context-management API that shares the desktop GL library.
#[cfg(windows)]
const NATIVE_PLATFORM: (Api, CurrentApi) = (Api::Wgl, CurrentApi::Wgl);
#[cfg(not(windows))]
const NATIVE_PLATFORM: (Api, CurrentApi) = (Api::Glx, CurrentApi::Glx);

#[cfg(windows)]
const NATIVE_MARKER: &str = "wglGetCurrentContext";
#[cfg(not(windows))]
const NATIVE_MARKER: &str = "glXGetCurrentContext";

const EGL_MARKER: &str = "eglGetCurrentContext";

const ES_PREFIX: &str = "OpenGL ES";

impl<D: Driver> Engine<D> {
    /// Which context-management API owns the calling thread's context.
    ///
    /// Asks libraries that are already open first, then symbols the
    /// process already has, and only opens libraries as a last resort,
    /// so an EGL-only process never drags in libGL (and vice versa).
    pub fn current_api(&self) -> CurrentApi {
        if let Some(api) = self.current_api_from_open() {
            return api;
        }

        let mut adopted = false;
        let native_loaded = self.driver.loaded_symbol(NATIVE_MARKER).is_some();
        let egl_loaded = self.driver.loaded_symbol(EGL_MARKER).is_some();
        if native_loaded {
            adopted |= self.driver.open_if_loaded(Lib::Gl);
        }
        if egl_loaded {
            adopted |= self.driver.open_if_loaded(Lib::Egl);
        }
        if adopted {
            if let Some(api) = self.current_api_from_open() {
                return api;
            }
        }

        debug!("No context found in loaded libraries, probing");
        // An EGL-only process has no use for libGL.
        if native_loaded || !egl_loaded {
            self.driver.open(Lib::Gl, Requirement::Optional);
        }
        self.driver.open(Lib::Egl, Requirement::Optional);
        return self.current_api_from_open().unwrap_or(CurrentApi::None);
    }

    fn current_api_from_open(&self) -> Option<CurrentApi> {
        let (native, current) = NATIVE_PLATFORM;
        if self.driver.is_open(Lib::Gl) && self.driver.has_current_context(native) {
            return Some(current);
        }
        if self.driver.is_open(Lib::Egl) {
            // EGL_NONE means nothing is bound: no decision yet.
            if let Some(client) = self.driver.egl_client_api() {
                return Some(CurrentApi::Egl(client));
            }
        }
        return None;
    }

    pub fn current_context_belongs_to(&self, api: Api) -> bool {
        return match api {
            Api::Gl => self.current_embedded_api_kind() == ContextKind::Desktop,
            Api::Gles => self.current_embedded_api_kind() == ContextKind::Embedded,
            Api::Egl => matches!(self.current_api(), CurrentApi::Egl(_)),
            Api::Glx => self.current_api() == CurrentApi::Glx,
            Api::Wgl => self.current_api() == CurrentApi::Wgl,
        };
    }

    /// Precise: desktop vs embedded for the current context, `None`
    /// when there is no current context at all.
    pub fn current_embedded_api_kind(&self) -> ContextKind {
        return match self.current_api() {
            CurrentApi::Egl(ClientApi::OpenGl) => ContextKind::Desktop,
            CurrentApi::Egl(ClientApi::OpenGlEs) => ContextKind::Embedded,
            CurrentApi::None => ContextKind::None,
            CurrentApi::Glx | CurrentApi::Wgl => {
                // glGetString is illegal mid-block, and blocks only
                // exist on desktop GL anyway.
                if self.guard.is_inside() {
                    return ContextKind::Desktop;
                }
                match self.driver.query_string(Source::Gl(Lib::Gl), StringQuery::Version) {
                    Some(v) if v.starts_with(ES_PREFIX) => ContextKind::Embedded,
                    _ => ContextKind::Desktop,
                }
            }
        };
    }

    /// Conservative: never fails, falls back to the platform's usual
    /// kind when nothing is current.
    pub fn conservative_is_desktop(&self) -> bool {
        if self.guard.is_inside() {
            return true;
        }
        return match self.current_embedded_api_kind() {
            ContextKind::Desktop => true,
            ContextKind::Embedded => false,
            ContextKind::None => self.config.default_kind != ContextKind::Embedded,
        };
    }

    // The library whose glGetString answers for the current context.
    pub(crate) fn gl_library(&self) -> Lib {
        return match self.current_api() {
            CurrentApi::Egl(ClientApi::OpenGlEs) => match self.driver.egl_client_version() {
                Some(1) => Lib::Gles1,
                _ => Lib::Gles2,
            },
            CurrentApi::Egl(ClientApi::OpenGl) | CurrentApi::Glx | CurrentApi::Wgl => Lib::Gl,
            CurrentApi::None => match self.config.default_kind {
                ContextKind::Embedded => Lib::Gles2,
                _ => Lib::Gl,
            },
        };
    }
}
