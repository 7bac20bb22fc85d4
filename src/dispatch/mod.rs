mod cell;
mod table;

pub use cell::DispatchCell;
pub use table::ThreadTable;

use crate::api::{Address, EntryPoint};
use crate::engine;
use crate::error::or_fatal;

/// Where resolved addresses are remembered.
///
/// A forwarding stub asks its strategy for an address, handing over
/// a resolver to run on a miss.
pub trait Dispatch {
    fn address<F>(ep: &'static EntryPoint, resolve: F) -> Address
    where
        F: FnOnce(&'static EntryPoint) -> Address;

    // The calling thread switched contexts.
    fn context_changed();
}

// One cell per entry point, shared by every thread. Fits platforms
// where an address is valid for every context.
pub struct GlobalCells;

impl Dispatch for GlobalCells {
    fn address<F>(ep: &'static EntryPoint, resolve: F) -> Address
    where
        F: FnOnce(&'static EntryPoint) -> Address,
    {
        return ep.cell.get_or_resolve(|| resolve(ep));
    }

    fn context_changed() {}
}

// A table per thread. WGL addresses belong to the context they were
// asked for, so each thread keeps its own and drops them on a switch.
pub struct ThreadTables;

impl Dispatch for ThreadTables {
    fn address<F>(ep: &'static EntryPoint, resolve: F) -> Address
    where
        F: FnOnce(&'static EntryPoint) -> Address,
    {
        return ThreadTable::get_or_resolve(ep.key(), || resolve(ep));
    }

    fn context_changed() {
        ThreadTable::invalidate();
    }
}

#[cfg(lazygl_tls_dispatch)]
pub type DefaultDispatch = ThreadTables;
#[cfg(not(lazygl_tls_dispatch))]
pub type DefaultDispatch = GlobalCells;

/// Address of `ep` for the calling thread, resolving it on first use.
/// Aborts the process if no provider is available.
pub fn address_of(ep: &'static EntryPoint) -> Address {
    return DefaultDispatch::address(ep, |ep| or_fatal(engine::global().resolve(ep)));
}

/// Tell the dispatch layer the calling thread made a different
/// context current. Only needed with per-thread tables; harmless
/// otherwise.
pub fn notify_context_changed() {
    DefaultDispatch::context_changed();
}
