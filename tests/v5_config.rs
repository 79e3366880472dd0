/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use pinterest::v5::{ApiConfig, DEFAULT_API_URI, DEFAULT_OAUTH_URI, PinterestError};
    use std::path::Path;

    const VARS: [&str; 6] = [
        "PINTEREST_APP_ID",
        "PINTEREST_APP_SECRET",
        "REDIRECT_LANDING_URI",
        "PINTEREST_OAUTH_TOKEN_DIR",
        "PINTEREST_OAUTH_URI",
        "PINTEREST_API_URI",
    ];

    // SAFETY (all env calls): this is the only test in this binary touching these variables
    fn set(name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) };
    }

    fn clear_all() {
        for name in VARS {
            unsafe { std::env::remove_var(name) };
        }
    }

    // a single test since the environment is shared by the whole process
    #[test]
    fn from_env_reads_credentials_and_overrides() {
        clear_all();
        let err = ApiConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            PinterestError::MissingEnv(ref names)
                if names == "PINTEREST_APP_ID and PINTEREST_APP_SECRET"
        ));

        // one credential alone is not enough, and empty counts as unset
        set("PINTEREST_APP_ID", "1234");
        set("PINTEREST_APP_SECRET", "");
        assert!(matches!(
            ApiConfig::from_env().unwrap_err(),
            PinterestError::MissingEnv(_)
        ));

        set("PINTEREST_APP_SECRET", "app-secret");
        set("PINTEREST_API_URI", "");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.app_id, "1234");
        assert_eq!(config.app_secret, "app-secret");
        assert_eq!(config.api_uri, DEFAULT_API_URI);
        assert_eq!(config.oauth_uri, DEFAULT_OAUTH_URI);
        assert_eq!(config.landing_uri, "https://developers.pinterest.com/apps/1234");
        assert_eq!(config.oauth_token_dir, Path::new("."));

        set("REDIRECT_LANDING_URI", "https://example.com/landed");
        set("PINTEREST_OAUTH_TOKEN_DIR", "/tmp/tokens");
        set("PINTEREST_OAUTH_URI", "https://oauth.example.com");
        set("PINTEREST_API_URI", "https://api.example.com");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.landing_uri, "https://example.com/landed");
        assert_eq!(config.oauth_token_dir, Path::new("/tmp/tokens"));
        assert_eq!(config.oauth_uri, "https://oauth.example.com");
        assert_eq!(config.api_uri, "https://api.example.com");
        assert_eq!(config.redirect_uri, "http://localhost:8085/");

        clear_all();
    }
}
