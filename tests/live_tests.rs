/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// Run against a real server with KOILLECTION_URL, KOILLECTION_USERNAME and
// KOILLECTION_PASSWORD set: `cargo test -- --ignored`
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use futures::TryStreamExt;
    use koillection::api::{
        Album, AlbumPayload, Client, Context, Create, Delete, Get, List, Resource, User,
    };
    use std::time::Duration;

    async fn live_client() -> Client {
        dotenv().ok();
        helpers::init_logging();
        let server = helpers::get_live_server().unwrap();
        let client = Client::new(&server.url, Duration::from_secs(30)).unwrap();
        client
            .login(&Context::background(), &server.username, &server.password)
            .await
            .unwrap();
        client
    }

    #[tokio::test]
    #[ignore]
    async fn logged_in_user_info() {
        let client = live_client().await;
        let claims = client.token().unwrap().claims().unwrap();
        println!("Token claims: {:?}", claims);

        let users = User::list(&client, &Context::background()).await.unwrap();
        println!("Users: {:?}", users);
    }

    #[tokio::test]
    #[ignore]
    async fn album_round_trip() {
        let client = live_client().await;
        let ctx = Context::with_timeout(Duration::from_secs(60));

        let album = Album::create(&client, &ctx, &AlbumPayload::new("koillection-rs test"))
            .await
            .unwrap();
        let id = album.id().unwrap();
        let fetched = Album::get(&client, &ctx, id.as_str()).await.unwrap();
        assert_eq!(fetched.title, album.title);

        let listed: Vec<Album> = Album::stream(&client, &ctx).try_collect().await.unwrap();
        assert!(listed.iter().any(|a| a.id() == Some(id.clone())));

        Album::delete(&client, &ctx, id.as_str()).await.unwrap();
    }
}
