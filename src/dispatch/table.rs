use std::cell::RefCell;
use std::collections::HashMap;
use crate::api::Address;

thread_local! {
    // Entry point identity -> address, valid for the context this
    // thread had current when the entry was filled.
    static TABLE: RefCell<HashMap<usize, Address>> = RefCell::new(HashMap::new());
}

/// The calling thread's private dispatch table.
pub struct ThreadTable;

impl ThreadTable {
    pub fn get(key: usize) -> Option<Address> {
        return TABLE.with(|t| t.borrow().get(&key).copied());
    }

    pub fn get_or_resolve<F: FnOnce() -> Address>(key: usize, resolve: F) -> Address {
        if let Some(addr) = ThreadTable::get(key) {
            return addr;
        }
        // Not borrowed across the resolver, which may call back into
        // other entry points.
        let addr = resolve();
        return TABLE.with(|t| *t.borrow_mut().entry(key).or_insert(addr));
    }

    // Forget everything; the next call of each entry point resolves again.
    pub fn invalidate() {
        TABLE.with(|t| t.borrow_mut().clear());
    }

    pub fn len() -> usize {
        return TABLE.with(|t| t.borrow().len());
    }
}
