//! Ecommerce Cart Core - cart state and checkout validation.
//!
//! This crate is the part of the shop that holds logic:
//! - [`cart`] - The cart store: add, remove, update, totals, persistence
//! - [`validation`] - Checkout field predicates and the form validator
//! - [`checkout`] - Checkout completion on top of the store and validator
//!
//! # Architecture
//!
//! The core crate performs no file or network I/O. Durable storage is reached
//! through the [`KeyValueStore`] trait, and presentation layers observe the
//! cart through [`CartListener`] registrations instead of being called into.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and emails
//! - [`catalog`] - The static, read-only product catalog
//! - [`storage`] - Key-value storage abstraction and in-memory backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod storage;
pub mod types;
pub mod validation;

pub use cart::{
    CartError, CartEvent, CartLineItem, CartListener, CartSnapshot, CartStore, CartTotals,
    Confirmation, DEFAULT_TAX_RATE, QuantityPolicy,
};
pub use catalog::{Catalog, CatalogError, MAX_UNIT_PRICE, Product};
pub use checkout::{CheckoutOutcome, CheckoutReceipt, CheckoutRejection};
pub use storage::{CART_STORAGE_KEY, KeyValueStore, MemoryStore, StorageError};
pub use types::*;
pub use validation::{
    CheckoutField, CheckoutForm, FieldError, FieldKind, FieldResult, FormReport,
    validate_checkout_form,
};
