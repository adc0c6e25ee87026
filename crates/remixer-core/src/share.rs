//! Deep links into the social platform's posting intent.

use url::Url;

use crate::error::CoreError;

pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Build a posting-intent URL with `text` prefilled.
pub fn intent_url(text: &str) -> Result<String, CoreError> {
    let url = Url::parse_with_params(TWEET_INTENT_URL, &[("text", text.trim())])?;
    Ok(url.into())
}
