use crate::api::{Address, Api, ClientApi, Lib, Requirement};

// Where a string query is answered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    // glGetString/glGetStringi exported by the given library.
    Gl(Lib),
    // eglQueryString on the current display.
    Egl,
    // eglQueryString on EGL_NO_DISPLAY (client extensions).
    EglClient,
    // The current GLX display and screen.
    Glx,
    // The current WGL device context.
    Wgl,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StringQuery {
    Version,
    Extensions,
    // glGetStringi(GL_EXTENSIONS, i)
    ExtensionAt(u32),
}

/// Native facilities the dispatch engine is built from.
///
/// Every method must answer without going through the provider
/// protocol: the engine calls these while it is in the middle of
/// resolving an entry point. `None` means "can't answer right now",
/// usually because nothing is current.
pub trait Driver: Send + Sync {
    fn is_open(&self, lib: Lib) -> bool;
    fn open(&self, lib: Lib, req: Requirement) -> bool;
    // Adopt `lib` only if it is already mapped into the process.
    fn open_if_loaded(&self, lib: Lib) -> bool;
    // Symbol search in what the process already loaded.
    fn loaded_symbol(&self, name: &str) -> Option<Address>;
    fn symbol(&self, lib: Lib, name: &str, req: Requirement) -> Option<Address>;
    // The API's own GetProcAddress.
    fn proc_address(&self, api: Api, name: &str) -> Option<Address>;

    // Only asked once the library owning `api` is open.
    fn has_current_context(&self, api: Api) -> bool;
    fn egl_client_api(&self) -> Option<ClientApi>;
    fn egl_client_version(&self) -> Option<u32>;

    fn query_string(&self, source: Source, query: StringQuery) -> Option<String>;
    // GL_NUM_EXTENSIONS of the current context.
    fn extension_count(&self, lib: Lib) -> Option<u32>;
}
