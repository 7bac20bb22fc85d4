use log::debug;
use crate::api::{Address, Api, Candidate, CurrentApi, EntryPoint, Provider, Requirement};
use crate::driver::Driver;
use crate::error::{Error, Result};
use super::Engine;

// Newest desktop GL version opengl32.dll exports directly.
#[cfg(windows)]
const WGL_EXPORTED_VERSION: u32 = 11;

// GetProcAddress used for GL extensions when no context tells us
// which platform API is in charge.
#[cfg(windows)]
const FALLBACK_PROC_API: Api = Api::Wgl;
#[cfg(target_os = "android")]
const FALLBACK_PROC_API: Api = Api::Egl;
#[cfg(not(any(windows, target_os = "android")))]
const FALLBACK_PROC_API: Api = Api::Glx;

impl<D: Driver> Engine<D> {
    /// Walk the candidates of `ep` in order and return the address
    /// from the first one whose provider is present.
    ///
    /// No lock is held while walking: two threads resolving the same
    /// entry point at once both do the work and may pick different
    /// candidates, which is fine because every candidate of an entry
    /// point is the same function as far as the caller can tell.
    pub fn resolve(&self, ep: &EntryPoint) -> Result<Address> {
        for candidate in ep.candidates {
            if let Some(addr) = self.try_candidate(candidate) {
                debug!("{} -> {} via {}", ep.name, candidate.symbol, candidate.provider);
                return Ok(addr);
            }
        }
        let mut tried: Vec<String> = Vec::new();
        for candidate in ep.candidates {
            let name = candidate.provider.name();
            if !tried.contains(&name) {
                tried.push(name);
            }
        }
        return Err(Error::NoProvider { entry_point: ep.name, tried });
    }

    fn try_candidate(&self, candidate: &Candidate) -> Option<Address> {
        return match candidate.provider {
            Provider::Core { api, version } => {
                if !self.core_available(api, version) {
                    return None;
                }
                self.core_address(api, version, candidate.symbol)
            }
            Provider::Extension { api, name } => {
                if !self.conservative_has_extension(api, name) {
                    return None;
                }
                self.extension_address(api, candidate.symbol)
            }
        };
    }

    fn core_available(&self, api: Api, version: u32) -> bool {
        return match api {
            Api::Gl => {
                if !self.conservative_is_desktop() {
                    return false;
                }
                version <= api.baseline() || self.conservative_api_version(api) >= version
            }
            // GLES 1.x and 2.0+ are different APIs that don't share
            // entry points, so a 1.x provider only fits a 1.x context.
            Api::Gles => {
                if self.conservative_is_desktop() {
                    return false;
                }
                let current = self.conservative_api_version(api);
                current >= version && (version >= 20 || current < 20)
            }
            Api::Egl | Api::Glx | Api::Wgl => {
                version <= api.baseline() || self.conservative_api_version(api) >= version
            }
        };
    }

    fn core_address(&self, api: Api, version: u32, symbol: &str) -> Option<Address> {
        #[cfg(windows)]
        {
            if api == Api::Gl && version > WGL_EXPORTED_VERSION {
                return self.driver.proc_address(Api::Wgl, symbol);
            }
        }
        return self.driver.symbol(api.core_library(version), symbol, Requirement::Optional);
    }

    fn extension_address(&self, api: Api, symbol: &str) -> Option<Address> {
        return match api {
            Api::Gl | Api::Gles => self.gl_proc_address(symbol),
            Api::Egl | Api::Glx | Api::Wgl => self.driver.proc_address(api, symbol),
        };
    }

    // GL extension functions come from the GetProcAddress of whichever
    // platform API owns the current context.
    fn gl_proc_address(&self, symbol: &str) -> Option<Address> {
        let api = match self.current_api() {
            CurrentApi::Egl(_) => Api::Egl,
            CurrentApi::Glx => Api::Glx,
            CurrentApi::Wgl => Api::Wgl,
            CurrentApi::None => FALLBACK_PROC_API,
        };
        return self.driver.proc_address(api, symbol);
    }

    /// Raw address of any GL-family function, the way an application
    /// would ask the platform's GetProcAddress for it.
    pub fn get_proc_address(&self, name: &str) -> Option<Address> {
        return self.gl_proc_address(name);
    }
}
