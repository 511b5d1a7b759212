//! Static definitions of every Bitly v3 endpoint.

use super::values::{ContentType, LinkFilter, SearchField, ShortDomain, TimeUnit};
use super::{DefaultValue, EndpointDef, ParamDef, ParamKind};

const TEXT: ParamKind = ParamKind::Text;
const INTEGER: ParamKind = ParamKind::Integer;
const BOOLEAN: ParamKind = ParamKind::Boolean;
const LIST: ParamKind = ParamKind::List;

const UNIT: ParamDef = ParamDef::optional("unit", ParamKind::Enum(TimeUnit::NAMES))
    .with_default(DefaultValue::Text("day"));
const UNITS: ParamDef =
    ParamDef::optional("units", INTEGER).with_default(DefaultValue::Integer(-1));
const TIMEZONE: ParamDef = ParamDef::optional("timezone", ParamKind::Timezone);
const ROLLUP: ParamDef = ParamDef::optional("rollup", BOOLEAN);
const LIMIT: ParamDef = ParamDef::optional("limit", INTEGER);
const OFFSET: ParamDef = ParamDef::optional("offset", INTEGER);
const UNIT_REFERENCE_TS: ParamDef = ParamDef::optional("unit_reference_ts", INTEGER);
const EXPAND_USER: ParamDef = ParamDef::optional("expand_user", BOOLEAN);
const LINK: ParamDef = ParamDef::required("link", TEXT);
const BUNDLE_LINK: ParamDef = ParamDef::required("bundle_link", TEXT);
const SHORT_URL: ParamDef = ParamDef::optional("shortUrl", LIST);
const HASH: ParamDef = ParamDef::optional("hash", LIST);

// Shared time-series window of the metrics endpoints.
const LINK_METRICS: &[ParamDef] = &[LINK, UNIT, UNITS, TIMEZONE, ROLLUP, LIMIT, UNIT_REFERENCE_TS];
const METRICS: &[ParamDef] = &[UNIT, UNITS, TIMEZONE, ROLLUP, LIMIT, UNIT_REFERENCE_TS];
const DOMAIN_METRICS: &[ParamDef] = &[
    ParamDef::required("domain", TEXT),
    UNIT,
    UNITS,
    TIMEZONE,
    ROLLUP,
    LIMIT,
    UNIT_REFERENCE_TS,
];

const LINK_ONLY: &[ParamDef] = &[LINK];
const BUNDLE_ONLY: &[ParamDef] = &[BUNDLE_LINK];
const SHORT_URL_OR_HASH: &[ParamDef] = &[SHORT_URL, HASH];
const ENCODERS: &[ParamDef] = &[
    LINK,
    ParamDef::optional("my_network", BOOLEAN),
    ParamDef::optional("subaccounts", BOOLEAN),
    LIMIT,
    EXPAND_USER,
];
const COLLABORATOR: &[ParamDef] = &[BUNDLE_LINK, ParamDef::required("collaborator", TEXT)];
const NONE: &[ParamDef] = &[];

/// Every endpoint the client can call, by logical name.
pub static CATALOG: &[EndpointDef] = &[
    // Links
    EndpointDef::get(
        "shorten",
        "/v3/shorten",
        &[
            ParamDef::required("longUrl", TEXT),
            ParamDef::optional("domain", ParamKind::Enum(ShortDomain::NAMES)),
        ],
    ),
    EndpointDef::get("expand", "/v3/expand", SHORT_URL_OR_HASH).public(),
    EndpointDef::get(
        "info",
        "/v3/info",
        &[SHORT_URL, HASH, EXPAND_USER],
    )
    .public(),
    EndpointDef::get(
        "link_lookup",
        "/v3/link/lookup",
        &[ParamDef::required("url", LIST)],
    ),
    EndpointDef::post(
        "user_link_edit",
        "/v3/user/link_edit",
        &[
            LINK,
            ParamDef::required("edit", TEXT),
            ParamDef::optional("title", TEXT),
            ParamDef::optional("note", TEXT),
            ParamDef::optional("private", BOOLEAN),
            ParamDef::optional("user_ts", INTEGER),
            ParamDef::optional("archived", BOOLEAN),
        ],
    ),
    EndpointDef::get(
        "user_link_lookup",
        "/v3/user/link_lookup",
        &[ParamDef::required("url", LIST)],
    ),
    EndpointDef::post(
        "user_link_save",
        "/v3/user/link_save",
        &[
            ParamDef::required("longUrl", TEXT),
            ParamDef::optional("title", TEXT),
            ParamDef::optional("note", TEXT),
            ParamDef::optional("private", BOOLEAN),
            ParamDef::optional("user_ts", INTEGER),
        ],
    ),
    EndpointDef::post(
        "user_save_custom_domain_keyword",
        "/v3/user/save_custom_domain_keyword",
        &[
            ParamDef::required("keyword_link", TEXT),
            ParamDef::required("target_link", TEXT),
            ParamDef::optional("overwrite", BOOLEAN),
        ],
    ),
    // Link metrics
    EndpointDef::get("link_clicks", "/v3/link/clicks", LINK_METRICS),
    EndpointDef::get("link_countries", "/v3/link/countries", LINK_METRICS),
    EndpointDef::get("link_encoders", "/v3/link/encoders", ENCODERS),
    EndpointDef::get("link_encoders_by_count", "/v3/link/encoders_by_count", ENCODERS),
    EndpointDef::get("link_encoders_count", "/v3/link/encoders_count", LINK_ONLY),
    EndpointDef::get("link_referrers", "/v3/link/referrers", LINK_METRICS),
    EndpointDef::get(
        "link_referrers_by_domain",
        "/v3/link/referrers_by_domain",
        LINK_METRICS,
    ),
    EndpointDef::get(
        "link_referring_domains",
        "/v3/link/referring_domains",
        LINK_METRICS,
    ),
    EndpointDef::get("link_shares", "/v3/link/shares", LINK_METRICS),
    // Link content
    EndpointDef::get("link_info", "/v3/link/info", LINK_ONLY),
    EndpointDef::get(
        "link_content",
        "/v3/link/content",
        &[
            LINK,
            ParamDef::optional("content_type", ParamKind::Enum(ContentType::NAMES)),
        ],
    ),
    EndpointDef::get("link_category", "/v3/link/category", LINK_ONLY),
    EndpointDef::get("link_social", "/v3/link/social", LINK_ONLY),
    EndpointDef::get("link_location", "/v3/link/location", LINK_ONLY),
    EndpointDef::get("link_language", "/v3/link/language", LINK_ONLY),
    // Public data
    EndpointDef::get(
        "highvalue",
        "/v3/highvalue",
        &[ParamDef::required("limit", INTEGER)],
    ),
    EndpointDef::get(
        "search",
        "/v3/search",
        &[
            LIMIT,
            OFFSET,
            ParamDef::optional("query", TEXT),
            ParamDef::optional("lang", TEXT),
            ParamDef::optional("cities", TEXT),
            ParamDef::optional("domain", TEXT),
            ParamDef::optional("fields", ParamKind::EnumList(SearchField::NAMES)),
        ],
    ),
    EndpointDef::get(
        "realtime_bursting_phrases",
        "/v3/realtime/bursting_phrases",
        NONE,
    ),
    EndpointDef::get("realtime_hot_phrases", "/v3/realtime/hot_phrases", NONE),
    EndpointDef::get(
        "realtime_clickrate",
        "/v3/realtime/clickrate",
        &[ParamDef::required("phrase", TEXT)],
    ),
    // User info and history
    EndpointDef::get(
        "oauth_app",
        "/v3/oauth/app",
        &[ParamDef::required("client_id", TEXT)],
    ),
    EndpointDef::get(
        "user_info",
        "/v3/user/info",
        &[
            ParamDef::optional("login", TEXT),
            ParamDef::optional("full_name", TEXT),
        ],
    ),
    EndpointDef::get(
        "user_link_history",
        "/v3/user/link_history",
        &[
            ParamDef::optional("link", TEXT),
            LIMIT,
            OFFSET,
            ParamDef::optional("created_before", INTEGER),
            ParamDef::optional("created_after", INTEGER),
            ParamDef::optional("modified_after", INTEGER),
            ParamDef::optional("expand_client_id", BOOLEAN),
            ParamDef::optional("archived", ParamKind::Enum(LinkFilter::NAMES)),
            ParamDef::optional("private", ParamKind::Enum(LinkFilter::NAMES)),
            ParamDef::optional("user", TEXT),
        ],
    ),
    EndpointDef::get(
        "user_network_history",
        "/v3/user/network_history",
        &[
            OFFSET,
            ParamDef::optional("expand_client_id", BOOLEAN),
            LIMIT,
            EXPAND_USER,
        ],
    ),
    EndpointDef::get(
        "user_tracking_domain_list",
        "/v3/user/tracking_domain_list",
        NONE,
    ),
    // User metrics
    EndpointDef::get("user_clicks", "/v3/user/clicks", METRICS),
    EndpointDef::get("user_countries", "/v3/user/countries", METRICS),
    EndpointDef::get(
        "user_popular_earned_by_clicks",
        "/v3/user/popular_earned_by_clicks",
        METRICS,
    ),
    EndpointDef::get(
        "user_popular_earned_by_shortens",
        "/v3/user/popular_earned_by_shortens",
        METRICS,
    ),
    EndpointDef::get("user_popular_links", "/v3/user/popular_links", METRICS),
    EndpointDef::get(
        "user_popular_owned_by_clicks",
        "/v3/user/popular_owned_by_clicks",
        METRICS,
    ),
    EndpointDef::get(
        "user_popular_owned_by_shortens",
        "/v3/user/popular_owned_by_shortens",
        METRICS,
    ),
    EndpointDef::get("user_referrers", "/v3/user/referrers", METRICS),
    EndpointDef::get(
        "user_referring_domains",
        "/v3/user/referring_domains",
        METRICS,
    ),
    EndpointDef::get("user_share_counts", "/v3/user/share_counts", METRICS),
    EndpointDef::get(
        "user_share_counts_by_share_type",
        "/v3/user/share_counts_by_share_type",
        METRICS,
    ),
    EndpointDef::get("user_shorten_counts", "/v3/user/shorten_counts", METRICS),
    // Organization metrics
    EndpointDef::get(
        "organization_brand_messages",
        "/v3/organization/brand_messages",
        METRICS,
    ),
    EndpointDef::get(
        "organization_intersecting_links",
        "/v3/organization/intersecting_links",
        METRICS,
    ),
    EndpointDef::get(
        "organization_leaderboard",
        "/v3/organization/leaderboard",
        METRICS,
    ),
    EndpointDef::get(
        "organization_missed_opportunities",
        "/v3/organization/missed_opportunities",
        METRICS,
    ),
    EndpointDef::get(
        "organization_popular_links",
        "/v3/organization/popular_links",
        METRICS,
    ),
    EndpointDef::get(
        "organization_shorten_counts",
        "/v3/organization/shorten_counts",
        METRICS,
    ),
    // Bundles
    EndpointDef::post("bundle_archive", "/v3/bundle/archive", BUNDLE_ONLY),
    EndpointDef::get(
        "bundle_bundles_by_user",
        "/v3/bundle/bundles_by_user",
        &[ParamDef::required("user", TEXT), EXPAND_USER],
    ),
    EndpointDef::post("bundle_clone", "/v3/bundle/clone", BUNDLE_ONLY),
    EndpointDef::post(
        "bundle_collaborator_add",
        "/v3/bundle/collaborator_add",
        COLLABORATOR,
    ),
    EndpointDef::post(
        "bundle_collaborator_remove",
        "/v3/bundle/collaborator_remove",
        COLLABORATOR,
    ),
    EndpointDef::get(
        "bundle_contents",
        "/v3/bundle/contents",
        &[BUNDLE_LINK, EXPAND_USER],
    ),
    EndpointDef::post(
        "bundle_create",
        "/v3/bundle/create",
        &[
            ParamDef::optional("private", BOOLEAN),
            ParamDef::optional("title", TEXT),
            ParamDef::optional("description", TEXT),
        ],
    ),
    EndpointDef::post(
        "bundle_edit",
        "/v3/bundle/edit",
        &[
            BUNDLE_LINK,
            ParamDef::optional("edit", TEXT),
            ParamDef::optional("title", TEXT),
            ParamDef::optional("description", TEXT),
            ParamDef::optional("private", BOOLEAN),
            ParamDef::optional("preview", BOOLEAN),
            ParamDef::optional("og_image", TEXT),
        ],
    ),
    EndpointDef::post(
        "bundle_link_add",
        "/v3/bundle/link_add",
        &[BUNDLE_LINK, LINK, ParamDef::optional("title", TEXT)],
    ),
    EndpointDef::post(
        "bundle_link_comment_add",
        "/v3/bundle/link_comment_add",
        &[BUNDLE_LINK, LINK, ParamDef::required("comment", TEXT)],
    ),
    EndpointDef::post(
        "bundle_link_comment_edit",
        "/v3/bundle/link_comment_edit",
        &[
            BUNDLE_LINK,
            LINK,
            ParamDef::required("comment_id", INTEGER),
            ParamDef::required("comment", TEXT),
        ],
    ),
    EndpointDef::post(
        "bundle_link_comment_remove",
        "/v3/bundle/link_comment_remove",
        &[BUNDLE_LINK, LINK, ParamDef::required("comment_id", INTEGER)],
    ),
    EndpointDef::post(
        "bundle_link_edit",
        "/v3/bundle/link_edit",
        &[
            BUNDLE_LINK,
            LINK,
            ParamDef::required("edit", TEXT),
            ParamDef::optional("title", TEXT),
            ParamDef::optional("preview", BOOLEAN),
        ],
    ),
    EndpointDef::post(
        "bundle_link_remove",
        "/v3/bundle/link_remove",
        &[BUNDLE_LINK, LINK],
    ),
    EndpointDef::post(
        "bundle_link_reorder",
        "/v3/bundle/link_reorder",
        &[BUNDLE_LINK, LINK, ParamDef::required("display_order", INTEGER)],
    ),
    EndpointDef::post(
        "bundle_pending_collaborator_remove",
        "/v3/bundle/pending_collaborator_remove",
        COLLABORATOR,
    ),
    EndpointDef::post(
        "bundle_reorder",
        "/v3/bundle/reorder",
        &[BUNDLE_LINK, ParamDef::required("link", LIST)],
    ),
    EndpointDef::get("bundle_view_count", "/v3/bundle/view_count", BUNDLE_ONLY),
    EndpointDef::get(
        "user_bundle_history",
        "/v3/user/bundle_history",
        &[EXPAND_USER],
    ),
    // Domains
    EndpointDef::get(
        "bitly_pro_domain",
        "/v3/bitly_pro_domain",
        &[ParamDef::required("domain", TEXT)],
    ),
    EndpointDef::get(
        "user_tracking_domain_clicks",
        "/v3/user/tracking_domain_clicks",
        DOMAIN_METRICS,
    ),
    EndpointDef::get(
        "user_tracking_domain_shorten_counts",
        "/v3/user/tracking_domain_shorten_counts",
        DOMAIN_METRICS,
    ),
    // Legacy v3 aliases
    EndpointDef::get("clicks", "/v3/clicks", SHORT_URL_OR_HASH),
    EndpointDef::get("clicks_by_day", "/v3/clicks_by_day", SHORT_URL_OR_HASH),
    EndpointDef::get("clicks_by_minute", "/v3/clicks_by_minute", SHORT_URL_OR_HASH),
    EndpointDef::get("referrers", "/v3/referrers", SHORT_URL_OR_HASH),
    EndpointDef::get("countries", "/v3/countries", SHORT_URL_OR_HASH),
    EndpointDef::get("lookup", "/v3/lookup", &[ParamDef::required("url", LIST)]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_paths_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|e| e.name).collect();
        let paths: HashSet<_> = CATALOG.iter().map(|e| e.path).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(paths.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_size() {
        assert!(CATALOG.len() >= 75, "catalog has {} entries", CATALOG.len());
    }

    #[test]
    fn test_paths_are_absolute_v3_paths() {
        for endpoint in CATALOG {
            assert!(endpoint.path.starts_with("/v3/"), "{}", endpoint.name);
        }
    }

    #[test]
    fn test_parameter_names_unique_per_endpoint() {
        for endpoint in CATALOG {
            let names: HashSet<_> = endpoint.params.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), endpoint.params.len(), "{}", endpoint.name);
        }
    }

    #[test]
    fn test_only_expand_and_info_are_public() {
        let public: Vec<_> = CATALOG
            .iter()
            .filter(|e| !e.requires_token)
            .map(|e| e.name)
            .collect();
        assert_eq!(public, vec!["expand", "info"]);
    }

    #[test]
    fn test_mutations_are_post() {
        for name in [
            "user_link_edit",
            "user_link_save",
            "user_save_custom_domain_keyword",
            "bundle_create",
            "bundle_link_add",
        ] {
            let endpoint = CATALOG.iter().find(|e| e.name == name).unwrap();
            assert_eq!(endpoint.method, HttpMethod::Post, "{name}");
        }

        let shorten = CATALOG.iter().find(|e| e.name == "shorten").unwrap();
        assert_eq!(shorten.method, HttpMethod::Get);
    }

    #[test]
    fn test_metrics_defaults() {
        let clicks = CATALOG.iter().find(|e| e.name == "user_clicks").unwrap();
        let unit = clicks.param("unit").unwrap();
        assert_eq!(unit.default, Some(DefaultValue::Text("day")));
        let units = clicks.param("units").unwrap();
        assert_eq!(units.default, Some(DefaultValue::Integer(-1)));
    }
}
