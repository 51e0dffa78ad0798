/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Operations shared by every resource kind.
//!
//! Each resource implements [`Resource`] plus the capability traits for the
//! operations its endpoint accepts, so e.g. `Log::create` does not exist.

use crate::api::client::Client;
use crate::api::context::Context;
use crate::api::errors::KoillectionError;
use crate::api::identifiers::{API_ROOT, Id, Iri};
use crate::api::metadata::Metadata;
use futures::Stream;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::path::Path;

/// A server resource living under `/api/<COLLECTION>`
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Collection path segment, e.g. `albums`
    const COLLECTION: &'static str;

    fn metadata(&self) -> &Metadata;

    fn id(&self) -> Option<Id> {
        self.metadata().id()
    }

    fn iri(&self) -> Option<Iri> {
        self.metadata().iri(Self::COLLECTION)
    }

    /// `/api/<COLLECTION>`
    fn collection_path() -> String {
        format!("{API_ROOT}/{}", Self::COLLECTION)
    }

    /// `/api/<COLLECTION>/<id>`
    fn iri_for(id: &str) -> Iri {
        Iri::new(Self::COLLECTION, id)
    }
}

pub trait Get: Resource {
    fn get(
        client: &Client,
        ctx: &Context,
        id: &str,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::iri_for(id).to_string();
        async move { client.get(ctx, &path).await }
    }
}

pub trait List: Resource {
    /// Every resource of this kind, across all pages
    fn list(
        client: &Client,
        ctx: &Context,
    ) -> impl Future<Output = Result<Vec<Self>, KoillectionError>> + Send {
        let path = Self::collection_path();
        async move { client.get_all(ctx, &path).await }
    }

    /// One page, starting at 1
    fn list_page(
        client: &Client,
        ctx: &Context,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Self>, KoillectionError>> + Send {
        let path = Self::collection_path();
        async move { client.get_page(ctx, &path, page).await }
    }

    fn stream<'a>(
        client: &'a Client,
        ctx: &'a Context,
    ) -> impl Stream<Item = Result<Self, KoillectionError>> + Send + 'a {
        client.stream(ctx, Self::collection_path())
    }
}

pub trait Create: Resource {
    type Payload: Serialize + Sync;

    fn create(
        client: &Client,
        ctx: &Context,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::collection_path();
        async move { client.post(ctx, &path, payload).await }
    }
}

pub trait Update: Resource {
    type Payload: Serialize + Sync;

    /// Replaces the resource (PUT)
    fn replace(
        client: &Client,
        ctx: &Context,
        id: &str,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::iri_for(id).to_string();
        async move { client.put(ctx, &path, payload).await }
    }

    /// Changes only the fields set in `payload` (PATCH)
    fn patch(
        client: &Client,
        ctx: &Context,
        id: &str,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::iri_for(id).to_string();
        async move { client.patch(ctx, &path, payload).await }
    }
}

pub trait Delete: Resource {
    fn delete(
        client: &Client,
        ctx: &Context,
        id: &str,
    ) -> impl Future<Output = Result<(), KoillectionError>> + Send {
        let path = Self::iri_for(id).to_string();
        async move { client.delete(ctx, &path).await }
    }
}

/// Resources with an image uploaded to `/api/<COLLECTION>/<id>/image`
pub trait HasImage: Resource {
    fn upload_image(
        client: &Client,
        ctx: &Context,
        id: &str,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::iri_for(id).join("image");
        async move { client.upload(ctx, &path, data).await }
    }

    fn upload_image_from_file<P: AsRef<Path> + Send>(
        client: &Client,
        ctx: &Context,
        id: &str,
        file: P,
    ) -> impl Future<Output = Result<Self, KoillectionError>> + Send {
        let path = Self::iri_for(id).join("image");
        async move { client.upload_file(ctx, &path, file).await }
    }
}
