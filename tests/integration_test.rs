// Integration tests: full config text through the whole pipeline.
use bselect::{load_config, load_config_file, write_sample_config, Error, CONFIG_FILE_NAME};

const REALISTIC_CONFIG: &str = r#"
; bselect configuration
; Lines starting with ';' or '#' are comments.

[browsers]
vivaldi = vivaldi "{url}"
firefox = firefox "{url}"

# First match wins; catch-all is appended automatically.
[urls]
example.com = vivaldi
*.mozilla.org = firefox
localhost = firefox
127.0.0.1 = firefox
/example\.(com|net)/app/ = vivaldi
evil.com = vivaldi:s|://evil\.com/view\?id=(?<id>[^&#]*)|://good.com/get/${id}|
clickbait.com = firefox:s|utm_[^&#]*&?(#)?|$1|
gone.example = netscape
"#;

#[test]
fn test_realistic_config_end_to_end() {
    let config = load_config(REALISTIC_CONFIG).unwrap();

    // Browsers in file order.
    let names: Vec<_> = config.browsers.iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["vivaldi", "firefox"]);

    // The 'netscape' entry is dropped (unresolved browser), everything else
    // survives in order, catch-all last.
    let patterns: Vec<_> = config
        .preferences
        .iter()
        .map(|p| p.pattern.as_str())
        .collect();
    assert_eq!(
        patterns,
        vec![
            "example.com",
            "*.mozilla.org",
            "localhost",
            "127.0.0.1",
            r"/example\.(com|net)/app/",
            "evil.com",
            "clickbait.com",
            "*",
        ]
    );

    let catch_all = config.preferences.last().unwrap();
    assert_eq!(catch_all.browser.name, "vivaldi");
    assert!(catch_all.transform.is_none());

    // Named-group transform.
    let evil = &config.preferences[5];
    let transform = evil.transform.as_ref().unwrap();
    assert_eq!(
        transform.apply("http://evil.com/view?id=abc123"),
        "http://good.com/get/abc123"
    );

    // Global tracking-parameter removal.
    let clickbait = &config.preferences[6];
    let transform = clickbait.transform.as_ref().unwrap();
    assert_eq!(
        transform.apply(
            "https://clickbait.com/article?utm_source=bla&article_id=123&utm_medium=ugh&user_id=abc#comments"
        ),
        "https://clickbait.com/article?article_id=123&user_id=abc#comments"
    );
}

#[test]
fn test_browsers_shared_between_preferences() {
    let config = load_config(
        "[browsers]\nfirefox=firefox \"{url}\"\n[urls]\na.com=firefox\nb.com=firefox\n",
    )
    .unwrap();
    let a = &config.preferences[0].browser;
    let b = &config.preferences[1].browser;
    assert!(std::sync::Arc::ptr_eq(a, b));
}

#[test]
fn test_no_browsers_section_still_routes() {
    // A config with only urls gets the fallback browser, so entries naming
    // the fallback resolve and everything else is dropped.
    let config = load_config("[urls]\nexample.com = firefox\nother.com = chrome\n").unwrap();
    assert_eq!(config.browsers.len(), 1);
    let patterns: Vec<_> = config
        .preferences
        .iter()
        .map(|p| p.pattern.as_str())
        .collect();
    assert_eq!(patterns, vec!["example.com", "*"]);
}

#[test]
fn test_duplicate_browser_aborts_load() {
    let content = "[browsers]\nff=firefox \"{url}\"\nff=firefox-esr \"{url}\"\n";
    let err = load_config(content).unwrap_err();
    assert!(matches!(err, Error::DuplicateBrowserName { .. }));
}

#[test]
fn test_any_transform_error_aborts_the_whole_load() {
    let content = "\
[browsers]
firefox = firefox \"{url}\"
[urls]
good.example = firefox
bad.example = firefox:s|foo|bar|iz
";
    let err = load_config(content).unwrap_err();
    match err {
        Error::InvalidFlags { flags, key, value } => {
            assert_eq!(flags, "z");
            assert_eq!(key, "bad.example");
            assert_eq!(value, "firefox:s|foo|bar|iz");
        }
        other => panic!("Expected InvalidFlags, got {:?}", other),
    }
}

#[test]
fn test_invalid_regex_error_carries_engine_diagnostic() {
    let content = "[urls]\nbad.example = firefox:s|(oops|x|\n";
    let err = load_config(content).unwrap_err();
    match err {
        Error::InvalidPattern { message, key, value } => {
            assert!(!message.is_empty());
            assert_eq!(key, "bad.example");
            assert_eq!(value, "firefox:s|(oops|x|");
        }
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_missing_config_file_names_expected_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let err = load_config_file(&path).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
    match err {
        Error::ConfigNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_bootstrap_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    write_sample_config(&path).unwrap();
    let config = load_config_file(&path).unwrap();
    assert!(!config.browsers.is_empty());
    assert_eq!(config.preferences.last().unwrap().pattern, "*");

    // Running init again rotates the previous file instead of overwriting.
    let backup = write_sample_config(&path).unwrap().unwrap();
    assert_eq!(backup, dir.path().join("bselect.0001.ini"));
}
