use std::sync::atomic::{AtomicUsize, Ordering};
use once_cell::race::OnceNonZeroUsize;
use crate::api::Address;

/// Process-wide memo of one entry point's address.
///
/// Starts empty and is filled exactly once. Threads that race on the
/// first call may each run the resolver; the first store wins and
/// everyone returns the stored address.
pub struct DispatchCell {
    slot: OnceNonZeroUsize,
    resolutions: AtomicUsize,
}

impl DispatchCell {
    pub const fn new() -> DispatchCell {
        return DispatchCell { slot: OnceNonZeroUsize::new(), resolutions: AtomicUsize::new(0) };
    }

    pub fn get(&self) -> Option<Address> {
        return self.slot.get().map(Address::from_raw);
    }

    pub fn get_or_resolve<F: FnOnce() -> Address>(&self, resolve: F) -> Address {
        let raw = self.slot.get_or_init(|| {
            self.resolutions.fetch_add(1, Ordering::Relaxed);
            return resolve().raw();
        });
        return Address::from_raw(raw);
    }

    // How many times the resolver ran. More than one only if threads raced.
    pub fn resolutions(&self) -> usize {
        return self.resolutions.load(Ordering::Relaxed);
    }
}

impl Default for DispatchCell {
    fn default() -> Self {
        return DispatchCell::new();
    }
}
