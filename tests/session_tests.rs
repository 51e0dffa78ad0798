/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use crate::mock_server::{MockServer, PASSWORD, USERNAME, issued_token};
    use futures::{StreamExt, TryStreamExt};
    use koillection::api::{
        CancelReason, Client, ClientConfig, Context, Create, Datum, DatumPayload, ErrorKind, Get,
        HasImage, Item, KoillectionError, List, MAX_EXCERPT_LEN, Resource, SessionState,
    };
    use serde_json::json;
    use std::time::Duration;

    fn widgets(n: usize) -> Vec<serde_json::Value> {
        (1..=n)
            .map(|i| json!({ "name": format!("Widget {i}"), "collection": "/api/collections/C1" }))
            .collect()
    }

    #[tokio::test]
    async fn login_cookie_authenticates_later_requests() {
        let server = MockServer::builder().require_auth().start().await;
        server.seed("items", widgets(1));
        let client = helpers::client_for(&server.base_url);
        let ctx = Context::background();

        let err = Item::get(&client, &ctx, "I1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(client.state(), SessionState::Fresh);

        let token = client.login(&ctx, USERNAME, PASSWORD).await.unwrap();
        assert_eq!(token.as_str(), issued_token());
        assert_eq!(client.state(), SessionState::Authenticated);
        assert_eq!(client.token().unwrap().as_str(), token.as_str());

        let claims = token.claims().unwrap();
        assert_eq!(claims.username.as_deref(), Some("u"));
        assert_eq!(claims.roles, vec!["ROLE_USER".to_string()]);

        let item = Item::get(&client, &ctx, "I1").await.unwrap();
        assert_eq!(item.name, "Widget 1");

        let last = server.requests().last().cloned().unwrap();
        assert!(last.cookie.unwrap().contains("BEARER="));
    }

    #[tokio::test]
    async fn bad_credentials_leave_session_fresh() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);

        let err = client
            .login(&Context::background(), USERNAME, "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            err.problem().unwrap().detail.as_deref(),
            Some("Invalid credentials.")
        );
        assert_eq!(client.state(), SessionState::Fresh);
        assert!(client.token().is_none());
    }

    #[tokio::test]
    async fn requests_carry_expected_headers() {
        let server = MockServer::start().await;
        let client = helpers::logged_in_client(&server.base_url).await;
        let ctx = Context::background();

        let item: serde_json::Value = client
            .post(&ctx, "/api/items", &json!({"name": "Widget", "collection": "/api/collections/C1"}))
            .await
            .unwrap();
        assert_eq!(item["id"], "I1");
        Item::get(&client, &ctx, "I1").await.unwrap();
        Item::upload_image(&client, &ctx, "I1", vec![1, 2, 3])
            .await
            .unwrap();
        client.metrics(&ctx).await.unwrap();

        let requests = server.requests();
        let find = |method: &str, path: &str| {
            requests
                .iter()
                .find(|r| r.method == method && r.path == path)
                .cloned()
                .unwrap()
        };

        let login = find("POST", "/api/authentication_token");
        assert_eq!(login.content_type.as_deref(), Some("application/ld+json"));

        let create = find("POST", "/api/items");
        assert_eq!(create.accept.as_deref(), Some("application/ld+json"));
        assert_eq!(create.content_type.as_deref(), Some("application/ld+json"));

        let get = find("GET", "/api/items/I1");
        assert_eq!(get.accept.as_deref(), Some("application/ld+json"));
        assert_eq!(get.content_type, None);

        let upload = find("POST", "/api/items/I1/image");
        assert!(
            upload
                .content_type
                .unwrap()
                .starts_with("multipart/form-data; boundary=")
        );

        let metrics = find("GET", "/api/metrics");
        assert_eq!(metrics.accept.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn metrics_are_a_flat_map() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);

        let metrics = client.metrics(&Context::background()).await.unwrap();
        assert_eq!(metrics.get("koillection_users").map(String::as_str), Some("1"));
        assert_eq!(metrics.get("koillection_items").map(String::as_str), Some("35"));
    }

    #[tokio::test]
    async fn statuses_map_to_error_kinds() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);
        let ctx = Context::background();

        let cases = [
            ("status-400", ErrorKind::InvalidInput),
            ("status-401", ErrorKind::Unauthorized),
            ("status-404", ErrorKind::NotFound),
            ("status-422", ErrorKind::Unprocessable),
            ("status-409", ErrorKind::UnexpectedStatus),
            ("status-500", ErrorKind::UnexpectedStatus),
            ("status-503", ErrorKind::UnexpectedStatus),
        ];
        for (id, kind) in cases {
            let err = Item::get(&client, &ctx, id).await.unwrap_err();
            assert_eq!(err.kind(), kind, "{id}");
            assert_eq!(
                err.status().map(|s| format!("status-{s}")).as_deref(),
                Some(id)
            );
        }
    }

    #[tokio::test]
    async fn unexpected_status_keeps_a_bounded_excerpt() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);

        let err = Item::get(&client, &Context::background(), "status-500")
            .await
            .unwrap_err();
        match err {
            KoillectionError::UnexpectedStatus { status, excerpt } => {
                assert_eq!(status, 500);
                assert_eq!(excerpt.len(), MAX_EXCERPT_LEN);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_carries_problem_document() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);

        let err = Item::get(&client, &Context::background(), "I404")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let problem = err.problem().unwrap();
        assert_eq!(problem.status, Some(404));
        assert_eq!(problem.detail.as_deref(), Some("Not Found"));
        assert_eq!(problem.title(), Some("An error occurred"));
        assert_eq!(problem.description(), Some("Not Found"));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn validation_failure_lists_violations() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);

        let payload = DatumPayload::price("Cost", "99.99", "NOT", Item::iri_for("I1"));
        let err = Datum::create(&client, &Context::background(), &payload)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
        let problem = err.problem().unwrap();
        assert_eq!(problem.violations.len(), 1);
        assert_eq!(problem.violations[0].property_path, "currency");
        assert!(server.stored("data").is_empty());
    }

    #[tokio::test]
    async fn cancelling_stops_a_listing_mid_way() {
        let server = MockServer::builder()
            .page_size(2)
            .stall_from_page(2)
            .start()
            .await;
        server.seed("items", widgets(5));
        let client = helpers::client_for(&server.base_url);

        let ctx = Context::background();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            canceller.cancel();
        });

        let started = std::time::Instant::now();
        let err = Item::list(&client, &ctx).await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(err.is_cancelled());
        assert_eq!(err.page(), Some(2));
        match err {
            KoillectionError::Page { source, .. } => assert!(matches!(
                *source,
                KoillectionError::Cancelled {
                    reason: CancelReason::Cancelled
                }
            )),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn deadline_stops_a_listing() {
        let server = MockServer::builder()
            .page_size(2)
            .stall_from_page(2)
            .start()
            .await;
        server.seed("items", widgets(5));
        let client = helpers::client_for(&server.base_url);

        let ctx = Context::with_timeout(Duration::from_millis(300));
        let err = Item::list(&client, &ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(err.to_string().contains("deadline exceeded"));
    }

    #[tokio::test]
    async fn session_timeout_reads_as_deadline() {
        let server = MockServer::builder().stall_from_page(1).start().await;
        let client = Client::with_config(
            ClientConfig::new(&server.base_url).timeout(Duration::from_millis(300)),
        )
        .unwrap();

        let err = Item::list_page(&client, &Context::background(), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            KoillectionError::Cancelled {
                reason: CancelReason::DeadlineExceeded
            }
        ));
    }

    #[tokio::test]
    async fn cancelled_context_sends_nothing() {
        let server = MockServer::start().await;
        let client = helpers::client_for(&server.base_url);
        let ctx = Context::background();
        ctx.cancel();

        let err = Item::get(&client, &ctx, "I1").await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn closed_session_rejects_operations() {
        let server = MockServer::start().await;
        let client = helpers::logged_in_client(&server.base_url).await;
        let sent = server.requests().len();

        client.clone().close();
        assert_eq!(client.state(), SessionState::Closed);
        let err = Item::list(&client, &Context::background()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SessionClosed);
        assert_eq!(server.requests().len(), sent);
    }

    #[tokio::test]
    async fn stream_fetches_pages_lazily() {
        let server = MockServer::builder().page_size(2).start().await;
        server.seed("items", widgets(5));
        let client = helpers::client_for(&server.base_url);
        let ctx = Context::background();

        let first: Vec<Item> = Item::stream(&client, &ctx)
            .take(3)
            .try_collect()
            .await
            .unwrap();
        let names: Vec<_> = first.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Widget 1", "Widget 2", "Widget 3"]);

        let pages: Vec<_> = server
            .requests()
            .into_iter()
            .filter_map(|r| r.query)
            .collect();
        assert_eq!(pages, ["page=1", "page=2"]);
    }

    #[tokio::test]
    async fn list_walks_until_empty_page() {
        let server = MockServer::builder().page_size(2).start().await;
        server.seed("items", widgets(5));
        let client = helpers::client_for(&server.base_url);

        let items = Item::list(&client, &Context::background()).await.unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].name, "Widget 5");
        // three full or partial pages plus the empty one
        assert_eq!(server.requests().len(), 4);
    }

    #[tokio::test]
    async fn plain_json_lists_are_accepted() {
        let server = MockServer::builder().plain_lists().page_size(3).start().await;
        server.seed("items", widgets(4));
        let client = helpers::client_for(&server.base_url);

        let items = Item::list(&client, &Context::background()).await.unwrap();
        assert_eq!(items.len(), 4);
    }

    #[tokio::test]
    async fn concurrent_reads_share_one_session() {
        let server = MockServer::start().await;
        server.seed("items", widgets(20));
        let client = helpers::logged_in_client(&server.base_url).await;

        let tasks: Vec<_> = (1..=20)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move {
                    Item::get(&client, &Context::background(), &format!("I{i}")).await
                })
            })
            .collect();

        for (i, task) in (1..=20).zip(tasks) {
            let item = task.await.unwrap().unwrap();
            assert_eq!(item.name, format!("Widget {i}"));
        }
        assert!(
            server
                .requests()
                .iter()
                .filter(|r| r.method == "GET")
                .all(|r| r.cookie.as_deref().is_some_and(|c| c.contains("BEARER=")))
        );
    }
}
