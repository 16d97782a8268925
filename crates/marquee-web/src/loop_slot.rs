// Shared slot for a callback that re-arms itself through a clone of the slot.
use std::cell::RefCell;
use std::rc::Rc;

pub struct LoopSlot<C> {
    inner: Rc<RefCell<Option<C>>>,
}

impl<C> Clone for LoopSlot<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C> Default for LoopSlot<C> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<C> LoopSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self, callback: C) {
        *self.inner.borrow_mut() = Some(callback);
    }

    pub fn is_filled(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.inner.borrow().as_ref().map(f)
    }

    /// Drops the stored callback and everything it captured, including its
    /// own clone of this slot. Must not run from inside that callback.
    pub fn release(&self) -> bool {
        let taken = self.inner.borrow_mut().take();
        let released = taken.is_some();
        drop(taken);
        released
    }
}
