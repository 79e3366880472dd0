/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, MockApi, json, json_status, not_found};
    use futures::{StreamExt, TryStreamExt, pin_mut};
    use pinterest::v5::{Board, PinterestError, Privacy, UserAccount};
    use serde_json::json;

    fn user_api() -> MockApi {
        MockApi::start(|req| match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/v5/user_account") => json(json!({
                "username": "cookie_monster",
                "account_type": "PINNER",
                "profile_image": "https://i.pinimg.com/cookie.jpg",
                "website_url": ""
            })),
            ("GET", "/v5/boards") => match req.param("bookmark") {
                None => json(json!({
                    "items": [
                        {"id": "1", "name": "Cookies", "privacy": "PUBLIC"},
                        {"id": "2", "name": "Milk", "privacy": "SECRET"}
                    ],
                    "bookmark": "page2"
                })),
                Some("page2") => json(json!({
                    "items": [{"id": "3", "name": "Crumbs", "privacy": "SOMETHING_NEW"}],
                    "bookmark": null
                })),
                Some(_) => not_found(req),
            },
            ("GET", "/v5/pins") => match req.param("bookmark") {
                None => json(json!({
                    "items": [{"id": "11", "description": "chocolate chip"}],
                    "bookmark": "more"
                })),
                // Pinterest sometimes hands out a bookmark to an empty page
                _ => json(json!({"items": [], "bookmark": "more"})),
            },
            _ => not_found(req),
        })
    }

    #[tokio::test]
    async fn user_account_summary() {
        let api = user_api();
        let user = UserAccount::get(api.client()).await.unwrap();
        assert_eq!(user.username.as_deref(), Some("cookie_monster"));

        let summary = user.to_string();
        assert!(summary.starts_with("--- User Summary ---"));
        assert!(summary.contains("Account Type: PINNER"));

        let req = api.last_request();
        assert_eq!(
            req.header("authorization"),
            Some(format!("Bearer {}", helpers::TEST_TOKEN).as_str())
        );
    }

    #[tokio::test]
    async fn boards_are_paged_with_bookmarks() {
        let api = user_api();
        let user = UserAccount::get(api.client()).await.unwrap();

        let boards = user.boards(Some(&[("page_size", "2")][..])).unwrap();
        let boards: Vec<Board> = boards.try_collect().await.unwrap();
        let names: Vec<&str> = boards.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Cookies", "Milk", "Crumbs"]);
        assert_eq!(boards[1].privacy, Some(Privacy::Secret));
        assert_eq!(boards[2].privacy, Some(Privacy::Unknown));

        // the second page keeps the original query and adds the bookmark
        let pages: Vec<_> = api
            .requests()
            .into_iter()
            .filter(|r| r.path == "/v5/boards")
            .collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].param("bookmark"), None);
        assert_eq!(pages[1].param("page_size"), Some("2"));
        assert_eq!(pages[1].param("bookmark"), Some("page2"));
    }

    #[tokio::test]
    async fn paging_stops_at_an_empty_bookmarked_page() {
        let api = user_api();
        let user = UserAccount::get(api.client()).await.unwrap();

        let pins = user.pins(None).unwrap();
        pin_mut!(pins);
        let mut ids = Vec::new();
        while let Some(pin) = pins.next().await {
            ids.push(pin.unwrap().id);
        }
        assert_eq!(ids, vec!["11"]);
    }

    #[tokio::test]
    async fn boards_stream_can_list_pins_of_each_board() {
        let api = MockApi::start(|req| match req.path.as_str() {
            "/v5/user_account" => json(json!({"username": "bert"})),
            "/v5/boards" => json(json!({"items": [{"id": "1", "name": "Pigeons"}]})),
            "/v5/boards/1/pins" => json(json!({"items": [{"id": "7"}, {"id": "8"}]})),
            _ => not_found(req),
        });
        let user = UserAccount::get(api.client()).await.unwrap();
        let boards: Vec<Board> = user.boards(None).unwrap().try_collect().await.unwrap();
        let pins: Vec<_> = boards[0].pins(None).unwrap().try_collect().await.unwrap();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[1].id, "8");
    }

    #[tokio::test]
    async fn too_many_requests_are_classified() {
        let api = MockApi::start(|req| match req.path.as_str() {
            "/v5/user_account" => json_status(
                429,
                json!({"code": 8, "message": "Too many requests", "message_detail": "Spam detected"}),
            ),
            _ => json_status(429, json!({"code": 8, "message": "Too many requests"})),
        });
        let err = UserAccount::get(api.client()).await.unwrap_err();
        assert!(matches!(err, PinterestError::Spam(ref detail) if detail == "Spam detected"));

        let err = Board::from_id(api.client(), "1").await.unwrap_err();
        assert!(matches!(err, PinterestError::RateLimit));
    }

    #[tokio::test]
    async fn failures_carry_status_and_message() {
        let api = MockApi::start(|_| {
            json_status(404, json!({"code": 2, "message": "Board not found."}))
        });
        match Board::from_id(api.client(), "missing").await.unwrap_err() {
            PinterestError::ApiResponse {
                status,
                reason,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
                assert_eq!(message, "Board not found.");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_responses_are_malformed() {
        let api = MockApi::start(|_| rouille::Response::text("<html>oops</html>"));
        let err = UserAccount::get(api.client()).await.unwrap_err();
        assert!(matches!(err, PinterestError::MalformedResponse(_)));
    }
}
