mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use common::{engine, FakeDriver};
use lazygl::dispatch::{Dispatch, GlobalCells, ThreadTable, ThreadTables};
use lazygl::{Api, Candidate, EntryPoint, Lib, Provider};

const VIEWPORT: &[Candidate] = &[Candidate::new(Provider::core(Api::Gl, 10), "glViewport")];

static GL_VIEWPORT: EntryPoint = EntryPoint::new("glViewport", VIEWPORT);

#[test]
fn global_cell_resolves_once() {
    let engine = engine(FakeDriver::desktop("4.6", &[]).with_symbol(Lib::Gl, "glViewport", 0x70));
    let runs = AtomicUsize::new(0);
    let resolve = |ep: &'static EntryPoint| {
        runs.fetch_add(1, Ordering::SeqCst);
        return engine.resolve(ep).unwrap();
    };
    let first = GlobalCells::address(&GL_VIEWPORT, resolve);
    let second = GlobalCells::address(&GL_VIEWPORT, resolve);
    assert_eq!(first, common::addr(0x70));
    assert_eq!(first, second);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(GL_VIEWPORT.cell().resolutions(), 1);

    // Context switches don't matter to the shared cells.
    GlobalCells::context_changed();
    assert_eq!(GL_VIEWPORT.cell().get(), Some(first));
}

const SWAP_INTERVAL: &[Candidate] =
    &[Candidate::new(Provider::extension(Api::Wgl, "WGL_EXT_swap_control"), "wglSwapIntervalEXT")];

static WGL_SWAP_INTERVAL: EntryPoint = EntryPoint::new("wglSwapIntervalEXT", SWAP_INTERVAL);

#[test]
fn thread_table_forgets_on_context_change() {
    // Without a WGL device context the extension check is conservative,
    // so the address comes straight from wglGetProcAddress.
    let engine = engine(FakeDriver::new().with_proc(Api::Wgl, "wglSwapIntervalEXT", 0x100));
    let resolve = |ep: &'static EntryPoint| engine.resolve(ep).unwrap();

    assert_eq!(ThreadTables::address(&WGL_SWAP_INTERVAL, resolve), common::addr(0x100));

    // The new context's driver hands out a different address.
    engine.driver().state().proc_symbols.insert((Api::Wgl, "wglSwapIntervalEXT".to_string()), 0x200);
    assert_eq!(ThreadTables::address(&WGL_SWAP_INTERVAL, resolve), common::addr(0x100));

    ThreadTables::context_changed();
    assert_eq!(ThreadTable::len(), 0);
    assert_eq!(ThreadTables::address(&WGL_SWAP_INTERVAL, resolve), common::addr(0x200));
    // Per-thread tables leave the shared cell alone.
    assert!(WGL_SWAP_INTERVAL.cell().get().is_none());
}

#[test]
fn threads_resolve_their_own_tables() {
    let engine = Arc::new(engine(FakeDriver::new().with_proc(Api::Wgl, "wglSwapIntervalEXT", 0x100)));
    let runs = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            let runs = runs.clone();
            thread::spawn(move || {
                let resolve = |ep: &'static EntryPoint| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    return engine.resolve(ep).unwrap();
                };
                let a = ThreadTables::address(&WGL_SWAP_INTERVAL, resolve);
                let b = ThreadTables::address(&WGL_SWAP_INTERVAL, resolve);
                assert_eq!(a, b);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(runs.load(Ordering::SeqCst), 4);
}

#[test]
fn guard_counts_balance_across_threads() {
    let engine = Arc::new(engine(FakeDriver::desktop("2.1", &[])));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    engine.guard().enter();
                    assert!(engine.guard().is_inside());
                    assert_eq!(engine.conservative_api_version(Api::Gl), 100);
                    engine.guard().leave();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(engine.guard().depth(), 0);
    assert_eq!(engine.conservative_api_version(Api::Gl), 21);
}
