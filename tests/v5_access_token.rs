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
    use crate::helpers::{MockApi, json, json_status, not_found};
    use pinterest::v5::{AccessToken, PinterestError, Scope};
    use serde_json::json;

    fn token_api() -> MockApi {
        MockApi::start(|req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/v5/oauth/token") => {
                let form = req.form();
                let grant = form
                    .iter()
                    .find(|(k, _)| k == "grant_type")
                    .map(|(_, v)| v.as_str());
                match grant {
                    Some("authorization_code") => json(json!({
                        "access_token": "pina_first",
                        "refresh_token": "pinr_first",
                        "token_type": "bearer",
                        "scope": "boards:read,pins:read,user_accounts:read"
                    })),
                    Some("refresh_token") if form.iter().any(|(k, _)| k == "refresh_on") => {
                        json(json!({
                            "access_token": "pina_second",
                            "refresh_token": "pinr_second",
                            "token_type": "bearer"
                        }))
                    }
                    Some("refresh_token") => json(json!({
                        "access_token": "pina_second",
                        "token_type": "bearer"
                    })),
                    _ => json_status(400, json!({"code": 1, "message": "bad grant"})),
                }
            }
            _ => not_found(req),
        })
    }

    #[tokio::test]
    async fn exchange_auth_code_uses_basic_auth() {
        let api = token_api();
        let mut token = AccessToken::new(&api.config(), None);
        token.exchange_auth_code("abc123").await.unwrap();

        assert_eq!(token.access_token().unwrap(), "pina_first");
        assert_eq!(token.refresh_token(), Some("pinr_first"));
        assert_eq!(token.scopes(), Some("boards:read,pins:read,user_accounts:read"));

        let req = api.last_request();
        // base64 of 1234:app-secret
        assert_eq!(req.header("authorization"), Some("Basic MTIzNDphcHAtc2VjcmV0"));
        let form = req.form();
        assert!(form.contains(&("code".to_string(), "abc123".to_string())));
        assert!(form.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8085/".to_string()
        )));
    }

    #[tokio::test]
    async fn refresh_keeps_or_replaces_refresh_token() {
        let api = token_api();
        let mut token = AccessToken::new(&api.config(), Some("refresh_test_token"));
        assert!(matches!(
            token.refresh(false).await.unwrap_err(),
            PinterestError::MissingRefreshToken
        ));

        token.exchange_auth_code("abc123").await.unwrap();
        let first_hash = token.hashed().unwrap();

        token.refresh(false).await.unwrap();
        assert_eq!(token.access_token().unwrap(), "pina_second");
        assert_eq!(token.refresh_token(), Some("pinr_first"));
        assert_ne!(token.hashed().unwrap(), first_hash);
        assert_eq!(token.header().unwrap(), "Bearer pina_second");

        token.refresh(true).await.unwrap();
        assert_eq!(token.refresh_token(), Some("pinr_second"));
        assert!(
            api.last_request()
                .form()
                .contains(&("refresh_on".to_string(), "true".to_string()))
        );
    }

    #[tokio::test]
    async fn write_then_read_round_trip() {
        let api = token_api();
        let dir = tempfile::tempdir().unwrap();
        let config = api.config().with_oauth_token_dir(dir.path());

        let mut token = AccessToken::new(&config, Some("round_trip"));
        token.exchange_auth_code("abc123").await.unwrap();
        token.write().unwrap();
        assert_eq!(token.path(), dir.path().join("round_trip.json"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(token.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        let mut read_back = AccessToken::new(&config, Some("round_trip"));
        read_back.read().unwrap();
        assert_eq!(read_back.access_token().unwrap(), "pina_first");
        assert_eq!(read_back.hashed().unwrap(), token.hashed().unwrap());
        assert_eq!(
            read_back.hashed_refresh_token().unwrap(),
            token.hashed_refresh_token().unwrap()
        );
        assert_eq!(read_back.scopes(), token.scopes());
    }

    #[tokio::test]
    async fn fetch_prefers_environment_then_file() {
        let api = token_api();
        let dir = tempfile::tempdir().unwrap();
        let config = api.config().with_oauth_token_dir(dir.path());

        let mut stored = AccessToken::new(&config, Some("fetch_test_token"));
        stored.exchange_auth_code("abc123").await.unwrap();
        stored.write().unwrap();

        let mut from_file = AccessToken::new(&config, Some("fetch_test_token"));
        from_file.fetch(Some(&[Scope::ReadPins]), true).await.unwrap();
        assert_eq!(from_file.access_token().unwrap(), "pina_first");

        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var("FETCH_TEST_TOKEN", "pina_from_env") };
        let mut from_env = AccessToken::new(&config, Some("fetch_test_token"));
        from_env.fetch(None, true).await.unwrap();
        assert_eq!(from_env.access_token().unwrap(), "pina_from_env");
        assert_eq!(from_env.refresh_token(), None);
        unsafe { std::env::remove_var("FETCH_TEST_TOKEN") };
    }

    #[tokio::test]
    async fn missing_sources_report_errors() {
        let api = token_api();
        let dir = tempfile::tempdir().unwrap();
        let config = api.config().with_oauth_token_dir(dir.path());

        let mut token = AccessToken::new(&config, Some("never_set_token"));
        assert!(matches!(
            token.from_environment().unwrap_err(),
            PinterestError::MissingEnv(ref name) if name == "NEVER_SET_TOKEN"
        ));
        assert!(matches!(token.read().unwrap_err(), PinterestError::Io(_)));
        assert!(matches!(
            token.access_token().unwrap_err(),
            PinterestError::Auth(_)
        ));
        assert!(matches!(
            token.oauth(None, false).await.unwrap_err(),
            PinterestError::InvalidArgument(_)
        ));
        assert!(api.requests().is_empty());
    }
}
