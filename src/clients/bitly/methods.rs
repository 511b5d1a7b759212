//! Named methods for every catalog endpoint.
//!
//! Each generated method forwards to [`BitlyClient::call`] with its catalog
//! name, so `client.link_clicks(params)` is `client.call("link_clicks", params)`.
//! [`BitlyClient::shorten_url`] and [`BitlyClient::expand_url`] additionally
//! pick the interesting field out of the response.

use serde_json::Value;

use crate::clients::bitly::client::BitlyClient;
use crate::clients::bitly::errors::BitlyError;
use crate::clients::errors::{DecodeError, HttpError};
use crate::clients::params::Params;

macro_rules! endpoint_methods {
    ($($method:ident => $endpoint:literal),* $(,)?) => {
        impl BitlyClient {
            $(
                #[doc = concat!("Calls the `", $endpoint, "` endpoint.")]
                ///
                /// # Errors
                ///
                /// See [`BitlyClient::call`].
                pub async fn $method(&self, params: Params) -> Result<Value, BitlyError> {
                    self.call($endpoint, params).await
                }
            )*
        }

        /// Catalog names that have a generated method.
        #[cfg(test)]
        const WRAPPED_ENDPOINTS: &[&str] = &[$($endpoint),*];
    };
}

endpoint_methods! {
    shorten => "shorten",
    expand => "expand",
    info => "info",
    link_lookup => "link_lookup",
    user_link_edit => "user_link_edit",
    user_link_lookup => "user_link_lookup",
    user_link_save => "user_link_save",
    user_save_custom_domain_keyword => "user_save_custom_domain_keyword",
    link_clicks => "link_clicks",
    link_countries => "link_countries",
    link_encoders => "link_encoders",
    link_encoders_by_count => "link_encoders_by_count",
    link_encoders_count => "link_encoders_count",
    link_referrers => "link_referrers",
    link_referrers_by_domain => "link_referrers_by_domain",
    link_referring_domains => "link_referring_domains",
    link_shares => "link_shares",
    link_info => "link_info",
    link_content => "link_content",
    link_category => "link_category",
    link_social => "link_social",
    link_location => "link_location",
    link_language => "link_language",
    highvalue => "highvalue",
    search => "search",
    realtime_bursting_phrases => "realtime_bursting_phrases",
    realtime_hot_phrases => "realtime_hot_phrases",
    realtime_clickrate => "realtime_clickrate",
    oauth_app => "oauth_app",
    user_info => "user_info",
    user_link_history => "user_link_history",
    user_network_history => "user_network_history",
    user_tracking_domain_list => "user_tracking_domain_list",
    user_clicks => "user_clicks",
    user_countries => "user_countries",
    user_popular_earned_by_clicks => "user_popular_earned_by_clicks",
    user_popular_earned_by_shortens => "user_popular_earned_by_shortens",
    user_popular_links => "user_popular_links",
    user_popular_owned_by_clicks => "user_popular_owned_by_clicks",
    user_popular_owned_by_shortens => "user_popular_owned_by_shortens",
    user_referrers => "user_referrers",
    user_referring_domains => "user_referring_domains",
    user_share_counts => "user_share_counts",
    user_share_counts_by_share_type => "user_share_counts_by_share_type",
    user_shorten_counts => "user_shorten_counts",
    organization_brand_messages => "organization_brand_messages",
    organization_intersecting_links => "organization_intersecting_links",
    organization_leaderboard => "organization_leaderboard",
    organization_missed_opportunities => "organization_missed_opportunities",
    organization_popular_links => "organization_popular_links",
    organization_shorten_counts => "organization_shorten_counts",
    bundle_archive => "bundle_archive",
    bundle_bundles_by_user => "bundle_bundles_by_user",
    bundle_clone => "bundle_clone",
    bundle_collaborator_add => "bundle_collaborator_add",
    bundle_collaborator_remove => "bundle_collaborator_remove",
    bundle_contents => "bundle_contents",
    bundle_create => "bundle_create",
    bundle_edit => "bundle_edit",
    bundle_link_add => "bundle_link_add",
    bundle_link_comment_add => "bundle_link_comment_add",
    bundle_link_comment_edit => "bundle_link_comment_edit",
    bundle_link_comment_remove => "bundle_link_comment_remove",
    bundle_link_edit => "bundle_link_edit",
    bundle_link_remove => "bundle_link_remove",
    bundle_link_reorder => "bundle_link_reorder",
    bundle_pending_collaborator_remove => "bundle_pending_collaborator_remove",
    bundle_reorder => "bundle_reorder",
    bundle_view_count => "bundle_view_count",
    user_bundle_history => "user_bundle_history",
    bitly_pro_domain => "bitly_pro_domain",
    user_tracking_domain_clicks => "user_tracking_domain_clicks",
    user_tracking_domain_shorten_counts => "user_tracking_domain_shorten_counts",
    clicks => "clicks",
    clicks_by_day => "clicks_by_day",
    clicks_by_minute => "clicks_by_minute",
    referrers => "referrers",
    countries => "countries",
    lookup => "lookup",
}

impl BitlyClient {
    /// Shortens `long_url` and returns the short link.
    ///
    /// # Errors
    ///
    /// See [`BitlyClient::call`]. A response without a `url` field is a
    /// [`DecodeError`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let short = client.shorten_url("https://example.com/a/long/path").await?;
    /// assert!(short.starts_with("http://bit.ly/"));
    /// ```
    pub async fn shorten_url(&self, long_url: &str) -> Result<String, BitlyError> {
        let data = self.shorten(Params::new().set("longUrl", long_url)).await?;
        string_field(&data, "/url", "shorten")
    }

    /// Expands a short link and returns the long URL it points to.
    ///
    /// # Errors
    ///
    /// See [`BitlyClient::call`]. An entry without a `long_url` (Bitly
    /// reports unknown links with an `error` field instead) is a
    /// [`DecodeError`].
    pub async fn expand_url(&self, short_url: &str) -> Result<String, BitlyError> {
        let data = self.expand(Params::new().set("shortUrl", short_url)).await?;
        if let Some(error) = data.pointer("/expand/0/error").and_then(Value::as_str) {
            return Err(decode_error(format!("expand returned an error entry: {error}")));
        }
        string_field(&data, "/expand/0/long_url", "expand")
    }
}

fn string_field(data: &Value, pointer: &str, endpoint: &str) -> Result<String, BitlyError> {
    data.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| decode_error(format!("{endpoint} response has no {pointer} field")))
}

fn decode_error(message: String) -> BitlyError {
    HttpError::Decode(DecodeError { message }).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::CATALOG;
    use std::collections::HashSet;

    #[test]
    fn test_every_catalog_entry_has_a_method() {
        let wrapped: HashSet<_> = WRAPPED_ENDPOINTS.iter().copied().collect();
        assert_eq!(wrapped.len(), WRAPPED_ENDPOINTS.len());

        for endpoint in CATALOG {
            assert!(wrapped.contains(endpoint.name), "{}", endpoint.name);
        }
        assert_eq!(wrapped.len(), CATALOG.len());
    }

    #[test]
    fn test_string_field() {
        let data = serde_json::json!({"expand": [{"long_url": "https://example.com"}]});
        assert_eq!(
            string_field(&data, "/expand/0/long_url", "expand").unwrap(),
            "https://example.com"
        );

        let error = string_field(&data, "/url", "shorten").unwrap_err();
        assert!(matches!(error, BitlyError::Http(HttpError::Decode(_))));
    }
}
