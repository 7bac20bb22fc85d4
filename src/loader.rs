use core::ffi::c_void;
use std::ffi::CString;
use std::sync::Mutex;
use libloading::Library;
use log::{debug, info};
use once_cell::sync::OnceCell;
use crate::api::{Address, Lib, Requirement};
use crate::config::Config;
use crate::error::{fatal, Error, Result};

// One lazily opened handle per logical library. Handles are
// never closed: resolved addresses point into them for the
// rest of the process.
pub struct LibraryCache {
    names: [&'static [&'static str]; 4],
    slots: [OnceCell<Library>; 4],
    // Serializes the check-then-open sequence. Reads of a filled
    // slot don't take it.
    open_lock: Mutex<()>,
}

impl LibraryCache {
    pub fn new(config: &Config) -> LibraryCache {
        return LibraryCache {
            names: config.libraries,
            slots: [OnceCell::new(), OnceCell::new(), OnceCell::new(), OnceCell::new()],
            open_lock: Mutex::new(()),
        };
    }

    pub fn is_open(&self, lib: Lib) -> bool {
        return self.slots[lib.index()].get().is_some();
    }

    pub fn get(&self, lib: Lib) -> Option<&Library> {
        return self.slots[lib.index()].get();
    }

    pub fn open(&self, lib: Lib, req: Requirement) -> Option<&Library> {
        let slot = &self.slots[lib.index()];
        if let Some(l) = slot.get() {
            return Some(l);
        }
        let _guard = match self.open_lock.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Someone may have won the race while we waited.
        if let Some(l) = slot.get() {
            return Some(l);
        }
        return match self.try_open(lib) {
            Ok((library, name)) => {
                info!("Opened {} from {}", lib.name(), name);
                let _ = slot.set(library);
                slot.get()
            }
            Err(e) => match req {
                Requirement::Required => fatal(e),
                Requirement::Optional => {
                    debug!("{}", e);
                    None
                }
            },
        };
    }

    fn try_open(&self, lib: Lib) -> Result<(Library, &'static str)> {
        let mut tried = Vec::new();
        let mut last_err = None;
        for &name in self.names[lib.index()] {
            match unsafe { Library::new(name) } {
                Ok(l) => return Ok((l, name)),
                Err(e) => {
                    tried.push(name.to_string());
                    last_err = Some(e);
                }
            }
        }
        return Err(Error::LibraryOpen { library: lib.name(), tried, source: last_err });
    }

    // Adopt `lib` into the cache only if the process already has it
    // mapped. Never loads anything new.
    #[cfg(unix)]
    pub fn open_if_loaded(&self, lib: Lib) -> bool {
        use libloading::os::unix;
        if self.is_open(lib) {
            return true;
        }
        let _guard = match self.open_lock.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let slot = &self.slots[lib.index()];
        if slot.get().is_some() {
            return true;
        }
        for &name in self.names[lib.index()] {
            let flags = libc::RTLD_LAZY | libc::RTLD_NOLOAD;
            if let Ok(l) = unsafe { unix::Library::open(Some(name), flags) } {
                debug!("{} was already loaded as {}", lib.name(), name);
                let _ = slot.set(l.into());
                return true;
            }
        }
        return false;
    }

    #[cfg(not(unix))]
    pub fn open_if_loaded(&self, lib: Lib) -> bool {
        return self.is_open(lib);
    }

    // Look `name` up in `lib`, opening the library first if needed.
    pub fn symbol(&self, lib: Lib, name: &str, req: Requirement) -> Option<Address> {
        let library = self.open(lib, req)?;
        return lookup(library, lib, name, req);
    }

    // Search the symbols the process has already loaded, without
    // opening anything.
    #[cfg(unix)]
    pub fn loaded_symbol(&self, name: &str) -> Option<Address> {
        let cname = match CString::new(name) {
            Ok(c) => c,
            Err(e) => fatal(e.into()),
        };
        let ptr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, cname.as_ptr()) };
        return Address::from_ptr(ptr as *const c_void);
    }

    #[cfg(not(unix))]
    pub fn loaded_symbol(&self, _name: &str) -> Option<Address> {
        return None;
    }
}

pub fn lookup(library: &Library, lib: Lib, name: &str, req: Requirement) -> Option<Address> {
    let cname = match CString::new(name) {
        Ok(c) => c,
        Err(e) => fatal(e.into()),
    };
    let found = unsafe { library.get::<*const c_void>(cname.as_bytes_with_nul()) };
    let addr = match found {
        Ok(sym) => Address::from_ptr(*sym),
        Err(e) => {
            debug!("{} not found in {}: {}", name, lib.name(), e);
            None
        }
    };
    if addr.is_none() && req == Requirement::Required {
        fatal(Error::MissingSymbol { symbol: name.to_string(), library: lib.name() });
    }
    return addr;
}
