/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
mod parsers;

pub mod client;
pub mod context;
pub mod errors;
pub mod hydra;
pub mod identifiers;
pub mod metadata;
pub mod properties;
pub mod token;
pub mod traits;

pub mod album;
pub mod choice_list;
pub mod collection;
pub mod datum;
pub mod field;
pub mod inventory;
pub mod item;
pub mod loan;
pub mod log_entry;
pub mod photo;
pub mod tag;
pub mod tag_category;
pub mod template;
pub mod user;
pub mod wish;
pub mod wishlist;

pub use client::*;
pub use context::*;
pub use errors::*;
pub use hydra::*;
pub use identifiers::*;
pub use metadata::*;
pub use properties::*;
pub use token::*;
pub use traits::*;

pub use album::*;
pub use choice_list::*;
pub use collection::*;
pub use datum::*;
pub use field::*;
pub use inventory::*;
pub use item::*;
pub use loan::*;
pub use log_entry::*;
pub use photo::*;
pub use tag::*;
pub use tag_category::*;
pub use template::*;
pub use user::*;
pub use wish::*;
pub use wishlist::*;
