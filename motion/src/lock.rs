//! Scoped page scroll lock.
//!
//! [`ScrollLock`] takes the lock on acquire and gives it back exactly once,
//! either through [`ScrollLock::release`] or when dropped.

#[cfg(test)]
#[path = "lock_test.rs"]
mod lock_test;

/// Something whose scrolling can be switched off and on.
pub trait ScrollSurface {
    fn lock(&self);
    fn unlock(&self);
}

/// Handle owning a locked [`ScrollSurface`].
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    held: bool,
}

impl<S: ScrollSurface> ScrollLock<S> {
    /// Lock `surface` and return the handle that will unlock it.
    pub fn acquire(surface: S) -> Self {
        surface.lock();
        Self { surface, held: true }
    }

    /// Unlock the surface. Returns `true` only for the call that unlocked.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.surface.unlock();
        true
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.release();
    }
}
