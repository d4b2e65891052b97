//! Typed client for the HotPepper Gourmet Search API v1.
//!
//! Wraps `reqwest` with HotPepper-specific request construction, API key
//! management, and typed response deserialization, plus the fixed parameter
//! tables (radius, genre, budget) that map user-facing labels to provider
//! codes.

mod client;
mod error;
mod params;
mod types;

pub use client::HotpepperClient;
pub use error::HotpepperError;
pub use params::{
    budget_to_code, genre_to_code, RadiusCode, SearchQuery, BUDGET_ANY, BUDGET_OPTIONS, GENRE_ALL,
    GENRE_OPTIONS,
};
pub use types::{
    Budget, CouponUrls, Genre, MobilePhoto, Photo, Restaurant, Results, ShopResponse, Urls,
};
