use remixer_core::credential::ApiKey;
use remixer_core::share::{TWEET_INTENT_URL, intent_url};

#[test]
fn intent_url_encodes_text() {
    let link = intent_url("Ship it & smile #rust").unwrap();
    assert!(link.starts_with(TWEET_INTENT_URL));

    let parsed = url::Url::parse(&link).unwrap();
    let text = parsed
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned());
    assert_eq!(text.as_deref(), Some("Ship it & smile #rust"));
}

#[test]
fn api_key_debug_is_redacted() {
    let key = ApiKey::parse("  sk-live-abcdefghijklmnop ").unwrap();
    assert_eq!(key.expose(), "sk-live-abcdefghijklmnop");

    let debug = format!("{key:?}");
    assert!(!debug.contains("abcdefgh"));
    assert_eq!(key.hint(), "sk-l...mnop");
}

#[test]
fn malformed_keys_are_rejected() {
    assert!(ApiKey::parse("").is_err());
    assert!(ApiKey::parse("   ").is_err());
    assert!(ApiKey::parse("two words").is_err());
    assert!(ApiKey::parse("line\nbreak").is_err());
}

#[test]
fn short_key_hint_hides_everything() {
    let key = ApiKey::parse("abc123").unwrap();
    assert_eq!(key.hint(), "****");
}
