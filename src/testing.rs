// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element types shared by the unit tests.
//!
//! [`Probe`] counts live [`Item`]s and clone/assignment calls, and can be
//! armed to make a future clone panic. Leaks show up as a non-zero live count;
//! double drops underflow it.

// Std imports (tests only)
use std::{
    cell::Cell,
    fmt,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

#[derive(Default)]
pub(crate) struct Probe {
    live: Cell<usize>,
    clones: Cell<usize>,
    assigns: Cell<usize>,
    clones_before_panic: Cell<Option<usize>>,
}

impl Probe {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn item(self: &Rc<Self>, value: i32) -> Item {
        self.live.set(self.live.get() + 1);
        Item {
            value,
            probe: Rc::clone(self),
        }
    }

    pub(crate) fn items(self: &Rc<Self>, values: &[i32]) -> crate::DynArray<Item> {
        let mut out = crate::DynArray::new();
        for &v in values {
            out.push(self.item(v));
        }
        out
    }

    pub(crate) fn live(&self) -> usize {
        self.live.get()
    }

    pub(crate) fn clones(&self) -> usize {
        self.clones.get()
    }

    pub(crate) fn assigns(&self) -> usize {
        self.assigns.get()
    }

    /// Lets `n` more clones succeed, then panics on the next one.
    pub(crate) fn fail_clone_after(&self, n: usize) {
        self.clones_before_panic.set(Some(n));
    }

    fn tick_clone(&self) {
        match self.clones_before_panic.get() {
            Some(0) => {
                self.clones_before_panic.set(None);
                panic!("injected clone failure");
            }
            Some(n) => self.clones_before_panic.set(Some(n - 1)),
            None => {}
        }
        self.clones.set(self.clones.get() + 1);
    }
}

pub(crate) struct Item {
    pub(crate) value: i32,
    probe: Rc<Probe>,
}

impl Clone for Item {
    fn clone(&self) -> Self {
        self.probe.tick_clone();
        self.probe.item(self.value)
    }

    fn clone_from(&mut self, source: &Self) {
        self.probe.assigns.set(self.probe.assigns.get() + 1);
        self.value = source.value;
    }
}

impl Drop for Item {
    fn drop(&mut self) {
        let live = self.probe.live.get();
        assert!(live > 0, "item dropped twice");
        self.probe.live.set(live - 1);
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.value)
    }
}

pub(crate) fn values(items: &[Item]) -> Vec<i32> {
    items.iter().map(|i| i.value).collect()
}

/// Runs `f`, expecting it to panic.
pub(crate) fn expect_panic<R>(f: impl FnOnce() -> R) {
    let res = panic::catch_unwind(AssertUnwindSafe(f));
    assert!(res.is_err(), "expected a panic");
}
