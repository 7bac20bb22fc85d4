use crate::api::{Api, CurrentApi};
use crate::driver::{Driver, Source, StringQuery};
use crate::error::{fatal, Error, Result};
use crate::version::{extension_in_list, parse_version};
use super::Engine;

// GL 3.0 deprecated the single GL_EXTENSIONS string.
const INDEXED_EXTENSIONS_VERSION: u32 = 30;

impl<D: Driver> Engine<D> {
    /// Version of `api` for the current context, as major*10+minor.
    pub fn api_version(&self, api: Api) -> Result<u32> {
        let source = match api {
            Api::Gl | Api::Gles => {
                if self.current_api() == CurrentApi::None {
                    return Err(Error::NoContext);
                }
                Source::Gl(self.gl_library())
            }
            Api::Egl => Source::Egl,
            Api::Glx => Source::Glx,
            Api::Wgl => Source::Wgl,
        };
        let version = match self.driver.query_string(source, StringQuery::Version) {
            Some(v) => v,
            None => return Err(Error::NoContext),
        };
        return parse_version(&version);
    }

    /// Like [`Engine::api_version`] but always answers. Where the real
    /// version can't be asked for, reports a version high enough that
    /// every version-gated provider is tried.
    pub fn conservative_api_version(&self, api: Api) -> u32 {
        if matches!(api, Api::Gl | Api::Gles) && self.guard.is_inside() {
            return self.config.block_version;
        }
        return match self.api_version(api) {
            Ok(v) => v,
            Err(Error::NoContext) => self.config.no_context_version(api),
            Err(e) => fatal(e),
        };
    }

    pub fn has_extension(&self, api: Api, name: &str) -> Result<bool> {
        return match api.extension_family() {
            Api::Gl | Api::Gles => self.has_gl_extension(name),
            Api::Egl => self.has_egl_extension(name),
            Api::Glx => self.advertised_in(Source::Glx, name),
            Api::Wgl => self.advertised_in(Source::Wgl, name),
        };
    }

    // Never fails: no context, or being inside glBegin/glEnd, counts
    // as "advertised" so the provider still gets a chance.
    pub fn conservative_has_extension(&self, api: Api, name: &str) -> bool {
        if matches!(api, Api::Gl | Api::Gles) && self.guard.is_inside() {
            return true;
        }
        return match self.has_extension(api, name) {
            Ok(found) => found,
            Err(Error::NoContext) => true,
            Err(e) => fatal(e),
        };
    }

    fn has_gl_extension(&self, name: &str) -> Result<bool> {
        let version = self.api_version(Api::Gl)?;
        let lib = self.gl_library();
        if version < INDEXED_EXTENSIONS_VERSION {
            return self.advertised_in(Source::Gl(lib), name);
        }
        let count = self.driver.extension_count(lib).ok_or(Error::NoContext)?;
        for i in 0..count {
            let ext = self.driver.query_string(Source::Gl(lib), StringQuery::ExtensionAt(i));
            if ext.as_deref() == Some(name) {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    // Client extensions answer without a display, so look there first.
    fn has_egl_extension(&self, name: &str) -> Result<bool> {
        if let Some(client) = self.driver.query_string(Source::EglClient, StringQuery::Extensions) {
            if extension_in_list(&client, name) {
                return Ok(true);
            }
        }
        return self.advertised_in(Source::Egl, name);
    }

    fn advertised_in(&self, source: Source, name: &str) -> Result<bool> {
        return match self.driver.query_string(source, StringQuery::Extensions) {
            Some(list) => Ok(extension_in_list(&list, name)),
            None => Err(Error::NoContext),
        };
    }
}
