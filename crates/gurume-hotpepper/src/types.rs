//! HotPepper Gourmet Search API response types.
//!
//! The API wraps every response in a `{"results": {"shop": [...]}}` envelope.
//! Shop objects use snake_case and nested keys on the wire; the structs below
//! mirror that shape so `serde` can decode responses directly.

use serde::Deserialize;

/// Top-level envelope: `{ "results": { "shop": [ ... ] } }`.
///
/// A missing or empty `shop` key decodes to an empty list — the provider
/// omits it when a search matches nothing, and that is a valid result, not
/// a schema error. A missing `results` key, by contrast, fails to decode.
#[derive(Debug, Deserialize)]
pub struct ShopResponse {
    pub results: Results,
}

#[derive(Debug, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub shop: Vec<Restaurant>,
}

/// A single restaurant as returned by the provider.
///
/// Immutable once decoded; identity is the provider-stable `id`. Result
/// order is provider-defined and preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Human-readable access description ("JR新宿駅東口徒歩3分" etc.).
    pub access: String,
    pub lat: f64,
    pub lng: f64,
    pub logo_image: String,
    pub photo: Photo,
    /// Opening hours text.
    pub open: String,
    /// Regular closing days, absent for shops open every day.
    #[serde(default)]
    pub close: Option<String>,
    pub budget: Budget,
    pub genre: Genre,
    pub urls: Urls,
    #[serde(default)]
    pub coupon_urls: Option<CouponUrls>,
    #[serde(default)]
    pub tel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub mobile: MobilePhoto,
}

/// Mobile photo URLs; `l` is the large and `s` the small variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MobilePhoto {
    #[serde(default)]
    pub l: Option<String>,
    #[serde(default)]
    pub s: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Budget {
    pub name: String,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub name: String,
    /// Short promotional copy; `catch` on the wire.
    #[serde(rename = "catch")]
    pub catch_copy: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Urls {
    /// Detail page URL.
    pub pc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CouponUrls {
    #[serde(default)]
    pub pc: Option<String>,
    #[serde(default)]
    pub sp: Option<String>,
}
