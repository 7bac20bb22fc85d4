mod introspect;
mod query;
mod resolve;

use once_cell::sync::Lazy;
use crate::config::Config;
use crate::driver::Driver;
use crate::guard::BlockGuard;
use crate::native::NativeDriver;

// Everything resolution needs, in one place: the native driver
// (which owns the library handles), the glBegin/glEnd guard and
// the compiled-in configuration.
pub struct Engine<D: Driver> {
    driver: D,
    guard: BlockGuard,
    config: Config,
}

impl<D: Driver> Engine<D> {
    pub fn new(driver: D, config: Config) -> Engine<D> {
        return Engine { driver, guard: BlockGuard::new(), config };
    }

    pub fn driver(&self) -> &D {
        return &self.driver;
    }

    pub fn guard(&self) -> &BlockGuard {
        return &self.guard;
    }

    pub fn config(&self) -> &Config {
        return &self.config;
    }
}

static ENGINE: Lazy<Engine<NativeDriver>> = Lazy::new(|| {
    let config = Config::default();
    let driver = NativeDriver::new(&config);
    return Engine::new(driver, config);
});

// The engine behind every public entry point. Built on first use
// and kept for the life of the process.
pub fn global() -> &'static Engine<NativeDriver> {
    return &ENGINE;
}
