use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var("THESIS_DOCS_BASE_URL");
        std::env::remove_var("THESIS_DOCS_COLLECTION");
        std::env::remove_var("THESIS_DOCS_LANG");
        std::env::remove_var("THESIS_DOCS_SESSION_COOKIE");
        std::env::remove_var("THESIS_DOCS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("THESIS_DOCS_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_env() };

    let cfg = LoaderConfig::from_env().unwrap();
    assert_eq!(cfg, LoaderConfig::default());

    unsafe {
        std::env::set_var("THESIS_DOCS_BASE_URL", "https://thesis.example.test/");
        std::env::set_var("THESIS_DOCS_COLLECTION", "commission_students");
        std::env::set_var("THESIS_DOCS_LANG", "en");
        std::env::set_var("THESIS_DOCS_SESSION_COOKIE", "session=abc");
        std::env::set_var("THESIS_DOCS_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("THESIS_DOCS_CONNECT_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = LoaderConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://thesis.example.test");
    assert_eq!(cfg.collection, "commission_students");
    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.session_cookie.as_deref(), Some("session=abc"));
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });

    unsafe {
        std::env::set_var("THESIS_DOCS_LANG", "de");
    }
    assert_eq!(LoaderConfig::from_env(), Err(ConfigError::UnknownLanguage("de".into())));

    unsafe {
        std::env::set_var("THESIS_DOCS_LANG", "en");
        std::env::set_var("THESIS_DOCS_REQUEST_TIMEOUT_SECS", "0");
    }
    assert_eq!(LoaderConfig::from_env(), Err(ConfigError::ZeroTimeout { name: "request timeout" }));

    unsafe { clear_env() };
}

#[test]
fn from_parts_rejects_non_http_base_url() {
    let err = LoaderConfig::from_parts("ftp://host", "students", "lt", None, Timeouts::default()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://host".into()));
    assert!(LoaderConfig::from_parts("not a url", "students", "lt", None, Timeouts::default()).is_err());
}

#[test]
fn from_parts_rejects_collection_with_slash() {
    let err = LoaderConfig::from_parts(DEFAULT_BASE_URL, "students/../admin", "lt", None, Timeouts::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCollection(_)));
    assert!(LoaderConfig::from_parts(DEFAULT_BASE_URL, "", "lt", None, Timeouts::default()).is_err());
}

#[test]
fn from_parts_drops_blank_cookie() {
    let cfg = LoaderConfig::from_parts(DEFAULT_BASE_URL, "students", "lt-LT", Some("  ".into()), Timeouts::default())
        .unwrap();
    assert!(cfg.session_cookie.is_none());
    assert_eq!(cfg.language, Language::Lt);
}

#[test]
fn from_parts_keeps_base_path() {
    let cfg = LoaderConfig::from_parts("http://host:9000/thesis/", "students", "en", None, Timeouts::default())
        .unwrap();
    assert_eq!(cfg.base_url, "http://host:9000/thesis");
}

#[test]
fn from_parts_rejects_zero_timeouts() {
    let err = LoaderConfig::from_parts(
        DEFAULT_BASE_URL,
        "students",
        "lt",
        None,
        Timeouts { request_secs: 0, connect_secs: 10 },
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::ZeroTimeout { name: "request timeout" });

    let err = LoaderConfig::from_parts(
        DEFAULT_BASE_URL,
        "students",
        "lt",
        None,
        Timeouts { request_secs: 30, connect_secs: 0 },
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::ZeroTimeout { name: "connect timeout" });
}

#[test]
fn with_overrides_keeps_unset_values() {
    let base = LoaderConfig { session_cookie: Some("session=env".into()), ..LoaderConfig::default() };
    let cfg = base
        .clone()
        .with_overrides(ConfigOverrides {
            language: Some("en".into()),
            request_secs: Some(5),
            ..ConfigOverrides::default()
        })
        .unwrap();
    assert_eq!(cfg.base_url, base.base_url);
    assert_eq!(cfg.collection, base.collection);
    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.session_cookie.as_deref(), Some("session=env"));
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });

    assert_eq!(base.clone().with_overrides(ConfigOverrides::default()), Ok(base));
}

#[test]
fn with_overrides_validates_overrides() {
    let overrides = ConfigOverrides { connect_secs: Some(0), ..ConfigOverrides::default() };
    assert_eq!(
        LoaderConfig::default().with_overrides(overrides),
        Err(ConfigError::ZeroTimeout { name: "connect timeout" })
    );

    let overrides = ConfigOverrides { base_url: Some("file:///tmp".into()), ..ConfigOverrides::default() };
    assert!(matches!(LoaderConfig::default().with_overrides(overrides), Err(ConfigError::InvalidBaseUrl(_))));
}
