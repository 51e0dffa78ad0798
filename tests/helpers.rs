/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use koillection::api::{Client, Context};
use std::time::Duration;

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct LiveServer {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Server and credentials of a real Koillection instance, from the
/// environment or `.env`
#[allow(dead_code)]
pub(crate) fn get_live_server() -> anyhow::Result<LiveServer> {
    Ok(LiveServer {
        url: std::env::var("KOILLECTION_URL")?,
        username: std::env::var("KOILLECTION_USERNAME")?,
        password: std::env::var("KOILLECTION_PASSWORD")?,
    })
}

#[allow(dead_code)]
pub(crate) fn client_for(base_url: &str) -> Client {
    init_logging();
    Client::new(base_url, Duration::from_secs(5)).unwrap()
}

#[allow(dead_code)]
pub(crate) async fn logged_in_client(base_url: &str) -> Client {
    let client = client_for(base_url);
    client
        .login(&Context::background(), "u", "p")
        .await
        .unwrap();
    client
}
