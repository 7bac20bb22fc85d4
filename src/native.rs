use core::ffi::c_void;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::null_mut;
use ::gl::types::{GLenum, GLint, GLubyte, GLuint};
use khronos_egl as egl;
use log::debug;
use once_cell::race::OnceNonZeroUsize;
use crate::api::{Address, Api, ClientApi, Lib, Requirement};
use crate::config::Config;
use crate::driver::{Driver, Source, StringQuery};
use crate::error::{fatal, Error};
use crate::loader::LibraryCache;

type GetStringFn = unsafe extern "system" fn(GLenum) -> *const GLubyte;
type GetStringiFn = unsafe extern "system" fn(GLenum, GLuint) -> *const GLubyte;
type GetIntegervFn = unsafe extern "system" fn(GLenum, *mut GLint);

// eglGetCurrentDisplay, glXGetCurrentContext, wglGetCurrentDC...
type GetCurrentFn = unsafe extern "system" fn() -> *mut c_void;
type EglQueryContextFn =
    unsafe extern "system" fn(egl::EGLDisplay, egl::EGLContext, egl::Int, *mut egl::Int) -> egl::Boolean;
type EglQueryStringFn = unsafe extern "system" fn(egl::EGLDisplay, egl::Int) -> *const c_char;
type GetProcAddressFn = unsafe extern "system" fn(*const c_char) -> *const c_void;

type GlxQueryVersionFn = unsafe extern "system" fn(*mut c_void, *mut c_int, *mut c_int) -> c_int;
type GlxQueryContextFn = unsafe extern "system" fn(*mut c_void, *mut c_void, c_int, *mut c_int) -> c_int;
type GlxQueryExtensionsStringFn = unsafe extern "system" fn(*mut c_void, c_int) -> *const c_char;

type WglGetExtensionsStringFn = unsafe extern "system" fn(*mut c_void) -> *const c_char;

const GLX_SCREEN: c_int = 0x800C;

// A function the engine itself needs, looked up straight from the
// library that exports it. These never go through providers, which
// is what keeps resolution from recursing into itself.
struct Bootstrap {
    name: &'static str,
    slots: [OnceNonZeroUsize; 4],
}

impl Bootstrap {
    const fn new(name: &'static str) -> Bootstrap {
        return Bootstrap {
            name,
            slots: [OnceNonZeroUsize::new(), OnceNonZeroUsize::new(), OnceNonZeroUsize::new(), OnceNonZeroUsize::new()],
        };
    }

    fn get(&self, libs: &LibraryCache, lib: Lib, req: Requirement) -> Option<Address> {
        let slot = &self.slots[lib.index()];
        if let Some(raw) = slot.get() {
            return Some(Address::from_raw(raw));
        }
        let addr = libs.symbol(lib, self.name, req)?;
        let _ = slot.set(addr.raw());
        return Some(addr);
    }
}

unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    return Some(CStr::from_ptr(ptr).to_string_lossy().into_owned());
}

fn c_name(name: &str) -> CString {
    return match CString::new(name) {
        Ok(c) => c,
        Err(e) => fatal(e.into()),
    };
}

// Some WGL drivers signal failure with small integers or -1
// instead of null.
fn wgl_address(ptr: *const c_void) -> Option<Address> {
    return match ptr as isize {
        0 | 1 | 2 | 3 | -1 => None,
        _ => Address::from_ptr(ptr),
    };
}

/// The real system: the OS loader plus the driver's own query calls.
pub struct NativeDriver {
    libs: LibraryCache,
    get_string: Bootstrap,
    get_stringi: Bootstrap,
    get_integerv: Bootstrap,
    egl_get_current_display: Bootstrap,
    egl_get_current_context: Bootstrap,
    egl_query_context: Bootstrap,
    egl_query_string: Bootstrap,
    egl_get_proc_address: Bootstrap,
    glx_get_current_context: Bootstrap,
    glx_get_current_display: Bootstrap,
    glx_query_version: Bootstrap,
    glx_query_context: Bootstrap,
    glx_query_extensions_string: Bootstrap,
    glx_get_proc_address: Bootstrap,
    wgl_get_current_context: Bootstrap,
    wgl_get_current_dc: Bootstrap,
    wgl_get_proc_address: Bootstrap,
    cgl_get_current_context: Bootstrap,
}

impl NativeDriver {
    pub fn new(config: &Config) -> NativeDriver {
        return NativeDriver {
            libs: LibraryCache::new(config),
            get_string: Bootstrap::new("glGetString"),
            get_stringi: Bootstrap::new("glGetStringi"),
            get_integerv: Bootstrap::new("glGetIntegerv"),
            egl_get_current_display: Bootstrap::new("eglGetCurrentDisplay"),
            egl_get_current_context: Bootstrap::new("eglGetCurrentContext"),
            egl_query_context: Bootstrap::new("eglQueryContext"),
            egl_query_string: Bootstrap::new("eglQueryString"),
            egl_get_proc_address: Bootstrap::new("eglGetProcAddress"),
            glx_get_current_context: Bootstrap::new("glXGetCurrentContext"),
            glx_get_current_display: Bootstrap::new("glXGetCurrentDisplay"),
            glx_query_version: Bootstrap::new("glXQueryVersion"),
            glx_query_context: Bootstrap::new("glXQueryContext"),
            glx_query_extensions_string: Bootstrap::new("glXQueryExtensionsString"),
            glx_get_proc_address: Bootstrap::new("glXGetProcAddressARB"),
            wgl_get_current_context: Bootstrap::new("wglGetCurrentContext"),
            wgl_get_current_dc: Bootstrap::new("wglGetCurrentDC"),
            wgl_get_proc_address: Bootstrap::new("wglGetProcAddress"),
            cgl_get_current_context: Bootstrap::new("CGLGetCurrentContext"),
        };
    }

    pub fn libraries(&self) -> &LibraryCache {
        return &self.libs;
    }

    fn required(&self, f: &Bootstrap, lib: Lib) -> Address {
        return match f.get(&self.libs, lib, Requirement::Required) {
            Some(a) => a,
            // Required lookups abort inside the loader.
            None => fatal(Error::MissingSymbol { symbol: f.name.to_string(), library: lib.name() }),
        };
    }

    // Calls a `() -> pointer` getter such as eglGetCurrentDisplay.
    fn current(&self, f: &Bootstrap, lib: Lib) -> *mut c_void {
        if !self.libs.is_open(lib) {
            return null_mut();
        }
        let getter: GetCurrentFn = unsafe { self.required(f, lib).cast() };
        return unsafe { getter() };
    }

    fn egl_context_attrib(&self, attrib: egl::Int) -> Option<egl::Int> {
        let display = self.current(&self.egl_get_current_display, Lib::Egl);
        let context = self.current(&self.egl_get_current_context, Lib::Egl);
        if display.is_null() || context.is_null() {
            return None;
        }
        let query: EglQueryContextFn = unsafe { self.required(&self.egl_query_context, Lib::Egl).cast() };
        let mut value: egl::Int = 0;
        let ok = unsafe { query(display, context, attrib, &mut value) };
        if ok == 0 {
            return None;
        }
        return Some(value);
    }

    fn egl_string(&self, display: egl::EGLDisplay, name: egl::Int) -> Option<String> {
        let query: EglQueryStringFn = unsafe { self.required(&self.egl_query_string, Lib::Egl).cast() };
        return unsafe { owned_string(query(display, name)) };
    }

    fn gl_string(&self, lib: Lib, query: StringQuery) -> Option<String> {
        return match query {
            StringQuery::Version | StringQuery::Extensions => {
                let name = if query == StringQuery::Version { ::gl::VERSION } else { ::gl::EXTENSIONS };
                let get: GetStringFn = unsafe { self.required(&self.get_string, lib).cast() };
                unsafe { owned_string(get(name) as *const c_char) }
            }
            StringQuery::ExtensionAt(i) => {
                // opengl32.dll only exports GL 1.1.
                let addr = if cfg!(windows) && lib == Lib::Gl {
                    self.proc_address(Api::Wgl, "glGetStringi")
                } else {
                    self.get_stringi.get(&self.libs, lib, Requirement::Optional)
                };
                let get: GetStringiFn = unsafe { addr?.cast() };
                unsafe { owned_string(get(::gl::EXTENSIONS, i) as *const c_char) }
            }
        };
    }

    fn glx_display_and_screen(&self) -> Option<(*mut c_void, c_int)> {
        let display = self.current(&self.glx_get_current_display, Lib::Gl);
        let context = self.current(&self.glx_get_current_context, Lib::Gl);
        if display.is_null() || context.is_null() {
            return None;
        }
        let query: GlxQueryContextFn = unsafe { self.required(&self.glx_query_context, Lib::Gl).cast() };
        let mut screen: c_int = 0;
        unsafe { query(display, context, GLX_SCREEN, &mut screen) };
        return Some((display, screen));
    }

    fn glx_string(&self, query: StringQuery) -> Option<String> {
        let (display, screen) = self.glx_display_and_screen()?;
        return match query {
            StringQuery::Version => {
                let get: GlxQueryVersionFn = unsafe { self.required(&self.glx_query_version, Lib::Gl).cast() };
                let (mut major, mut minor): (c_int, c_int) = (0, 0);
                if unsafe { get(display, &mut major, &mut minor) } == 0 {
                    return None;
                }
                Some(format!("{}.{}", major, minor))
            }
            StringQuery::Extensions => {
                let get: GlxQueryExtensionsStringFn =
                    unsafe { self.required(&self.glx_query_extensions_string, Lib::Gl).cast() };
                unsafe { owned_string(get(display, screen)) }
            }
            StringQuery::ExtensionAt(_) => None,
        };
    }

    fn wgl_string(&self, query: StringQuery) -> Option<String> {
        let dc = self.current(&self.wgl_get_current_dc, Lib::Gl);
        if dc.is_null() {
            return None;
        }
        return match query {
            // WGL has no version query; 1.0 is all there is.
            StringQuery::Version => Some("1.0".to_string()),
            StringQuery::Extensions => {
                let addr = self.proc_address(Api::Wgl, "wglGetExtensionsStringARB")?;
                let get: WglGetExtensionsStringFn = unsafe { addr.cast() };
                unsafe { owned_string(get(dc)) }
            }
            StringQuery::ExtensionAt(_) => None,
        };
    }
}

impl Driver for NativeDriver {
    fn is_open(&self, lib: Lib) -> bool {
        return self.libs.is_open(lib);
    }

    fn open(&self, lib: Lib, req: Requirement) -> bool {
        return self.libs.open(lib, req).is_some();
    }

    fn open_if_loaded(&self, lib: Lib) -> bool {
        return self.libs.open_if_loaded(lib);
    }

    fn loaded_symbol(&self, name: &str) -> Option<Address> {
        return self.libs.loaded_symbol(name);
    }

    fn symbol(&self, lib: Lib, name: &str, req: Requirement) -> Option<Address> {
        return self.libs.symbol(lib, name, req);
    }

    fn proc_address(&self, api: Api, name: &str) -> Option<Address> {
        // The OpenGL framework exports everything it has.
        if cfg!(target_os = "macos") {
            return self.libs.symbol(Lib::Gl, name, Requirement::Optional);
        }
        let (getter, lib) = match api {
            Api::Egl => (&self.egl_get_proc_address, Lib::Egl),
            Api::Glx => (&self.glx_get_proc_address, Lib::Gl),
            Api::Wgl => (&self.wgl_get_proc_address, Lib::Gl),
            Api::Gl | Api::Gles => {
                debug!("No GetProcAddress of its own for {:?}", api);
                return None;
            }
        };
        // Asked for before anything is known to be current, so the
        // library may legitimately be absent.
        let get: GetProcAddressFn = unsafe { getter.get(&self.libs, lib, Requirement::Optional)?.cast() };
        let cname = c_name(name);
        let ptr = unsafe { get(cname.as_ptr()) };
        return match api {
            Api::Wgl => wgl_address(ptr),
            _ => Address::from_ptr(ptr),
        };
    }

    fn has_current_context(&self, api: Api) -> bool {
        return match api {
            Api::Egl => !self.current(&self.egl_get_current_context, Lib::Egl).is_null(),
            Api::Wgl => !self.current(&self.wgl_get_current_context, Lib::Gl).is_null(),
            Api::Glx if cfg!(target_os = "macos") => {
                !self.current(&self.cgl_get_current_context, Lib::Gl).is_null()
            }
            Api::Glx => !self.current(&self.glx_get_current_context, Lib::Gl).is_null(),
            Api::Gl | Api::Gles => false,
        };
    }

    fn egl_client_api(&self) -> Option<ClientApi> {
        let api = self.egl_context_attrib(egl::CONTEXT_CLIENT_TYPE)?;
        return match api as egl::Enum {
            egl::OPENGL_API => Some(ClientApi::OpenGl),
            egl::OPENGL_ES_API => Some(ClientApi::OpenGlEs),
            _ => None,
        };
    }

    fn egl_client_version(&self) -> Option<u32> {
        let version = self.egl_context_attrib(egl::CONTEXT_CLIENT_VERSION)?;
        return u32::try_from(version).ok();
    }

    fn query_string(&self, source: Source, query: StringQuery) -> Option<String> {
        return match source {
            Source::Gl(lib) => self.gl_string(lib, query),
            Source::Egl => {
                let display = self.current(&self.egl_get_current_display, Lib::Egl);
                if display.is_null() {
                    return None;
                }
                match query {
                    StringQuery::Version => self.egl_string(display, egl::VERSION),
                    StringQuery::Extensions => self.egl_string(display, egl::EXTENSIONS),
                    StringQuery::ExtensionAt(_) => None,
                }
            }
            Source::EglClient => {
                if !self.libs.is_open(Lib::Egl) || query != StringQuery::Extensions {
                    return None;
                }
                self.egl_string(egl::NO_DISPLAY, egl::EXTENSIONS)
            }
            Source::Glx => self.glx_string(query),
            Source::Wgl => self.wgl_string(query),
        };
    }

    fn extension_count(&self, lib: Lib) -> Option<u32> {
        let get: GetIntegervFn = unsafe { self.required(&self.get_integerv, lib).cast() };
        let mut count: GLint = -1;
        unsafe { get(::gl::NUM_EXTENSIONS, &mut count) };
        return u32::try_from(count).ok();
    }
}
