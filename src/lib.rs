/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Koillection
//!
//! Client library for the Koillection REST API, a JSON-LD/Hydra interface
//! for managing collections, items, wishlists, albums and everything hanging
//! off them.
//!
//! ## Features
//!
//! - Login against `/api/authentication_token`; the session cookie is kept in
//!   the client's cookie jar and authenticates every later request
//! - Create, fetch, list, replace, patch and delete for every resource kind
//!   the API exposes
//!     - Albums, Photos
//!     - Collections, Items, Data, Loans
//!     - Templates, Fields, Choice Lists
//!     - Tags, Tag Categories
//!     - Wishlists, Wishes
//!     - Inventories, Logs and Users (read only or read/delete)
//! - Relationship traversal (children, parent, items of a collection, …)
//! - Image, file and video uploads
//! - Hydra pagination, either collected or as a `Stream`
//! - Cancellation and deadlines through [`api::Context`]
//! - Typed errors, including the server's validation violations
//!
//! *If you want to use this library for more than what is currently
//! implemented, the [`api::Client`] `get`/`post`/`get_all` family makes
//! requests against arbitrary API paths*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! koillection = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use koillection::api::{
//!     Client, Collection, CollectionPayload, Context, Create, Item, ItemPayload, List, Resource,
//!     Visibility,
//! };
//! use std::time::Duration;
//!
//! async fn add_widget(url: &str, username: &str, password: &str) -> anyhow::Result<()> {
//!     let client = Client::new(url, Duration::from_secs(30))?;
//!     let ctx = Context::background();
//!
//!     client.login(&ctx, username, password).await?;
//!
//!     let collection = Collection::create(&client, &ctx, &CollectionPayload::new("Gadgets")).await?;
//!     let collection_iri = collection.iri().ok_or(anyhow::anyhow!("no iri"))?;
//!
//!     let payload = ItemPayload {
//!         quantity: Some(1),
//!         visibility: Some(Visibility::Public),
//!         ..ItemPayload::new("Widget", collection_iri)
//!     };
//!     let item = Item::create(&client, &ctx, &payload).await?;
//!     println!("Created {:?}", item.id());
//!
//!     // Every page is fetched until the server returns an empty one
//!     for item in Item::list(&client, &ctx).await? {
//!         println!("{}", item.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod api;
