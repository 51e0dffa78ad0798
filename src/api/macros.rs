/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Ties a resource struct to its collection segment
macro_rules! impl_resource {
    ( $t:ty, $collection:literal ) => {
        impl $crate::api::Resource for $t {
            const COLLECTION: &'static str = $collection;

            fn metadata(&self) -> &$crate::api::Metadata {
                &self.meta
            }
        }
    };
}

// GET /api/<collection>/<id>/<relation> returning one resource
macro_rules! related_one {
    ( $(#[$doc:meta])* $name:ident, $relation:literal, $rt:ty ) => {
        $(#[$doc])*
        pub async fn $name(
            client: &$crate::api::Client,
            ctx: &$crate::api::Context,
            id: &str,
        ) -> Result<$rt, $crate::api::KoillectionError> {
            let path = <Self as $crate::api::Resource>::iri_for(id).join($relation);
            client.get(ctx, &path).await
        }
    };
}

// GET /api/<collection>/<id>/<relation> walking every page
macro_rules! related_many {
    ( $(#[$doc:meta])* $name:ident, $relation:literal, $rt:ty ) => {
        $(#[$doc])*
        pub async fn $name(
            client: &$crate::api::Client,
            ctx: &$crate::api::Context,
            id: &str,
        ) -> Result<Vec<$rt>, $crate::api::KoillectionError> {
            let path = <Self as $crate::api::Resource>::iri_for(id).join($relation);
            client.get_all(ctx, &path).await
        }
    };
}

// POST /api/<collection>/<id>/<media> as multipart, from bytes and from a file
macro_rules! upload_media {
    ( $(#[$doc:meta])* $name:ident, $from_file:ident, $media:literal ) => {
        $(#[$doc])*
        pub async fn $name(
            client: &$crate::api::Client,
            ctx: &$crate::api::Context,
            id: &str,
            data: Vec<u8>,
        ) -> Result<Self, $crate::api::KoillectionError> {
            let path = <Self as $crate::api::Resource>::iri_for(id).join($media);
            client.upload(ctx, &path, data).await
        }

        $(#[$doc])*
        ///
        /// The whole file is read into memory first.
        pub async fn $from_file(
            client: &$crate::api::Client,
            ctx: &$crate::api::Context,
            id: &str,
            file: impl AsRef<std::path::Path>,
        ) -> Result<Self, $crate::api::KoillectionError> {
            let path = <Self as $crate::api::Resource>::iri_for(id).join($media);
            client.upload_file(ctx, &path, file).await
        }
    };
}

pub(crate) use {impl_resource, related_many, related_one, upload_media};
