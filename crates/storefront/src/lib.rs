//! Cosmic Cart Storefront library.
//!
//! Everything with side effects lives here: the persisted [`CartStore`],
//! the storage backends it writes through, the catalog HTTP client, and the
//! view models the CLI renders.
//!
//! [`CartStore`]: store::CartStore

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;
