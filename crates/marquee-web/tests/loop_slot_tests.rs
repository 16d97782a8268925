// Host-side tests for the self-rearming loop slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod loop_slot {
    include!("../src/loop_slot.rs");
}

use loop_slot::LoopSlot;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn release_frees_what_the_callback_captured() {
    let ctx = Rc::new(RefCell::new(0u32));
    let slot: LoopSlot<Box<dyn Fn()>> = LoopSlot::new();

    let inner = slot.clone();
    let captured = ctx.clone();
    slot.fill(Box::new(move || {
        *captured.borrow_mut() += 1;
        assert!(inner.is_filled());
    }));
    assert_eq!(Rc::strong_count(&ctx), 2);

    slot.with(|cb| cb());
    slot.with(|cb| cb());
    assert_eq!(*ctx.borrow(), 2);

    assert!(slot.release());
    assert_eq!(Rc::strong_count(&ctx), 1);
    assert!(!slot.is_filled());
}

#[test]
fn released_slot_is_inert() {
    let slot: LoopSlot<Box<dyn Fn() -> u32>> = LoopSlot::new();
    assert!(!slot.release());
    assert_eq!(slot.with(|cb| cb()), None);

    slot.fill(Box::new(|| 7));
    assert_eq!(slot.with(|cb| cb()), Some(7));
    assert!(slot.release());
    assert!(!slot.release());
    assert_eq!(slot.with(|cb| cb()), None);
}
