use std::sync::Mutex;
use log::warn;

// Tracks glBegin/glEnd nesting across the process. Most queries are
// illegal between the two, so the conservative paths look here first.
pub struct BlockGuard {
    depth: Mutex<i64>,
}

impl BlockGuard {
    pub const fn new() -> BlockGuard {
        return BlockGuard { depth: Mutex::new(0) };
    }

    pub fn enter(&self) {
        let mut depth = self.lock();
        *depth += 1;
    }

    pub fn leave(&self) {
        let mut depth = self.lock();
        if *depth == 0 {
            warn!("glEnd called outside of a glBegin/glEnd block");
            return;
        }
        *depth -= 1;
    }

    pub fn is_inside(&self) -> bool {
        return *self.lock() > 0;
    }

    pub fn depth(&self) -> i64 {
        return *self.lock();
    }

    // A panic while holding the lock can't leave the integer torn.
    fn lock(&self) -> std::sync::MutexGuard<'_, i64> {
        return match self.depth.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
    }
}

impl Default for BlockGuard {
    fn default() -> Self {
        return BlockGuard::new();
    }
}
