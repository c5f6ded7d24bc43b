use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Viewer context forwarded by the CDN edge.
///
/// CloudFront injects these headers when the matching origin request policy
/// is enabled; behind any other front door they are simply absent. Fields
/// are optional end to end: a missing header stays out of the serialized
/// body instead of appearing as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeoContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
}

impl GeoContext {
    /// Read the CloudFront viewer headers off an incoming request.
    ///
    /// Values are passed through verbatim as strings, including the
    /// true/false text of the mobile flag and the decimal coordinates.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            mobile: header_value(headers, "cloudfront-is-mobile-viewer"),
            country: header_value(headers, "cloudfront-viewer-country"),
            city: header_value(headers, "cloudfront-viewer-city"),
            lat: header_value(headers, "cloudfront-viewer-latitude"),
            lng: header_value(headers, "cloudfront-viewer-longitude"),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
