#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};
use lazygl::config::Config;
use lazygl::driver::{Driver, Source, StringQuery};
use lazygl::engine::Engine;
use lazygl::{Address, Api, ClientApi, ContextKind, Lib, Requirement};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

// The platform API that shares libGL / opengl32 with desktop GL.
pub const NATIVE: Api = if cfg!(windows) { Api::Wgl } else { Api::Glx };

pub fn addr(n: usize) -> Address {
    return Address::from_raw(NonZeroUsize::new(n).unwrap());
}

// Everything the fake system knows, plus a record of what was asked.
#[derive(Default)]
pub struct FakeState {
    // Libraries that exist on disk.
    pub installed: HashSet<Lib>,
    // Libraries the process already has mapped.
    pub mapped: HashSet<Lib>,
    pub open: HashSet<Lib>,
    pub loaded_symbols: HashSet<String>,
    pub symbols: HashMap<(Lib, String), usize>,
    pub proc_symbols: HashMap<(Api, String), usize>,

    // Which platform API has a context current, if any.
    pub current: Option<Api>,
    pub egl_client: Option<ClientApi>,
    pub egl_client_version: Option<u32>,

    pub gl_version: Option<String>,
    pub gl_extensions: Vec<String>,
    pub egl_version: Option<String>,
    pub egl_extensions: Vec<String>,
    pub egl_client_extensions: Vec<String>,
    pub glx_version: Option<String>,
    pub glx_extensions: Vec<String>,

    // Libraries opened by file (not adopted), in order.
    pub opened: Vec<Lib>,
    pub adopted: Vec<Lib>,
    pub gl_version_queries: usize,
    pub gl_string_libs: Vec<Lib>,
    pub indexed_queries: usize,
    pub proc_lookups: Vec<(Api, String)>,
}

#[derive(Default)]
pub struct FakeDriver {
    state: Mutex<FakeState>,
}

impl FakeDriver {
    pub fn new() -> FakeDriver {
        return FakeDriver::default();
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        return self.state.lock().unwrap();
    }

    // libGL open with a desktop context of the given version current.
    pub fn desktop(version: &str, extensions: &[&str]) -> FakeDriver {
        let driver = FakeDriver::new();
        {
            let mut s = driver.state();
            s.installed.insert(Lib::Gl);
            s.open.insert(Lib::Gl);
            s.current = Some(NATIVE);
            s.gl_version = Some(version.to_string());
            s.gl_extensions = extensions.iter().map(|e| e.to_string()).collect();
            s.glx_version = Some("1.4".to_string());
        }
        return driver;
    }

    // libEGL open with an ES context current.
    pub fn egl_es(client_version: u32, version: &str, extensions: &[&str]) -> FakeDriver {
        let driver = FakeDriver::new();
        {
            let mut s = driver.state();
            s.installed.extend([Lib::Egl, Lib::Gles1, Lib::Gles2]);
            s.open.insert(Lib::Egl);
            s.current = Some(Api::Egl);
            s.egl_client = Some(ClientApi::OpenGlEs);
            s.egl_client_version = Some(client_version);
            s.gl_version = Some(version.to_string());
            s.gl_extensions = extensions.iter().map(|e| e.to_string()).collect();
            s.egl_version = Some("1.5".to_string());
        }
        return driver;
    }

    pub fn with_symbol(self, lib: Lib, name: &str, at: usize) -> FakeDriver {
        self.state().symbols.insert((lib, name.to_string()), at);
        return self;
    }

    pub fn with_proc(self, api: Api, name: &str, at: usize) -> FakeDriver {
        self.state().proc_symbols.insert((api, name.to_string()), at);
        return self;
    }

    fn has_context(&self) -> bool {
        return self.state().current.is_some();
    }
}

impl Driver for FakeDriver {
    fn is_open(&self, lib: Lib) -> bool {
        return self.state().open.contains(&lib);
    }

    fn open(&self, lib: Lib, req: Requirement) -> bool {
        let mut s = self.state();
        if s.open.contains(&lib) {
            return true;
        }
        if !s.installed.contains(&lib) {
            assert_eq!(req, Requirement::Optional, "required library {:?} missing", lib);
            return false;
        }
        s.open.insert(lib);
        s.opened.push(lib);
        return true;
    }

    fn open_if_loaded(&self, lib: Lib) -> bool {
        let mut s = self.state();
        if s.open.contains(&lib) {
            return true;
        }
        if !s.mapped.contains(&lib) {
            return false;
        }
        s.open.insert(lib);
        s.adopted.push(lib);
        return true;
    }

    fn loaded_symbol(&self, name: &str) -> Option<Address> {
        if self.state().loaded_symbols.contains(name) {
            return Some(addr(0x1));
        }
        return None;
    }

    fn symbol(&self, lib: Lib, name: &str, req: Requirement) -> Option<Address> {
        if !self.open(lib, req) {
            return None;
        }
        return self.state().symbols.get(&(lib, name.to_string())).map(|&a| addr(a));
    }

    fn proc_address(&self, api: Api, name: &str) -> Option<Address> {
        let mut s = self.state();
        s.proc_lookups.push((api, name.to_string()));
        return s.proc_symbols.get(&(api, name.to_string())).map(|&a| addr(a));
    }

    fn has_current_context(&self, api: Api) -> bool {
        let s = self.state();
        return s.current == Some(api) && match api {
            Api::Glx | Api::Wgl => s.open.contains(&Lib::Gl),
            Api::Egl => s.open.contains(&Lib::Egl),
            Api::Gl | Api::Gles => false,
        };
    }

    fn egl_client_api(&self) -> Option<ClientApi> {
        let s = self.state();
        if s.current != Some(Api::Egl) {
            return None;
        }
        return s.egl_client;
    }

    fn egl_client_version(&self) -> Option<u32> {
        return self.state().egl_client_version;
    }

    fn query_string(&self, source: Source, query: StringQuery) -> Option<String> {
        let mut s = self.state();
        let current = s.current;
        return match source {
            Source::Gl(lib) => {
                current?;
                s.gl_string_libs.push(lib);
                match query {
                    StringQuery::Version => {
                        s.gl_version_queries += 1;
                        s.gl_version.clone()
                    }
                    StringQuery::Extensions => Some(s.gl_extensions.join(" ")),
                    StringQuery::ExtensionAt(i) => {
                        s.indexed_queries += 1;
                        s.gl_extensions.get(i as usize).cloned()
                    }
                }
            }
            Source::Egl => {
                if current != Some(Api::Egl) {
                    return None;
                }
                match query {
                    StringQuery::Version => s.egl_version.clone(),
                    StringQuery::Extensions => Some(s.egl_extensions.join(" ")),
                    StringQuery::ExtensionAt(_) => None,
                }
            }
            Source::EglClient => {
                if !s.open.contains(&Lib::Egl) || query != StringQuery::Extensions {
                    return None;
                }
                Some(s.egl_client_extensions.join(" "))
            }
            Source::Glx => {
                if current != Some(Api::Glx) {
                    return None;
                }
                match query {
                    StringQuery::Version => s.glx_version.clone(),
                    StringQuery::Extensions => Some(s.glx_extensions.join(" ")),
                    StringQuery::ExtensionAt(_) => None,
                }
            }
            Source::Wgl => None,
        };
    }

    fn extension_count(&self, _lib: Lib) -> Option<u32> {
        if !self.has_context() {
            return None;
        }
        return Some(self.state().gl_extensions.len() as u32);
    }
}

pub fn desktop_config() -> Config {
    let mut config = Config::default();
    config.default_kind = ContextKind::Desktop;
    return config;
}

pub fn engine(driver: FakeDriver) -> Engine<FakeDriver> {
    init_logging();
    return Engine::new(driver, desktop_config());
}
