//! Command implementations.
//!
//! [`Shell`] wraps a [`CartStore`] the way a page wraps the cart: it
//! subscribes to cart events once and turns "added to cart" events into
//! notices printed after the command's own output.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use ecommerce_cart_core::{CartEvent, CartSnapshot, CartStore, Confirmation, KeyValueStore};
use tracing::debug;

use crate::render;

pub mod cart;
pub mod checkout;
pub mod products;

/// A cart store plus the notices its listener collected.
pub struct Shell<S: KeyValueStore> {
    store: CartStore<S>,
    notices: Rc<RefCell<Vec<Confirmation>>>,
}

impl<S: KeyValueStore> Shell<S> {
    /// Wrap `store` and register the notice listener.
    pub fn new(mut store: CartStore<S>) -> Self {
        let notices: Rc<RefCell<Vec<Confirmation>>> = Rc::default();
        let sink = Rc::clone(&notices);

        store.subscribe(move |event: &CartEvent, snapshot: &CartSnapshot| {
            debug!(item_count = snapshot.item_count, "Cart event received");
            if let Some(confirmation) = event.confirmation() {
                sink.borrow_mut().push(confirmation);
            }
        });

        Self { store, notices }
    }

    /// Print and forget every pending notice.
    ///
    /// Notices are cosmetic; the terminal keeps them, so `dismiss_after`
    /// is not honoured here.
    pub fn flush_notices(&self, out: &mut impl Write) -> io::Result<()> {
        for notice in self.notices.borrow_mut().drain(..) {
            render::confirmation(out, &notice)?;
        }
        Ok(())
    }
}
