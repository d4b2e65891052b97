//! Fixed parameter tables and query construction.
//!
//! The provider identifies search radius, genre, and budget band by short
//! codes. The tables here are closed enumerations kept in lockstep with the
//! options the presentation layer offers; they never grow dynamically.
//! The sentinel labels ([`GENRE_ALL`], [`BUDGET_ANY`]) mean "no filter" and
//! map to *absence* of the parameter on the wire, never an empty string.

use gurume_core::Coordinate;

/// Sentinel genre label meaning "no genre filter".
pub const GENRE_ALL: &str = "すべて";

/// Sentinel budget label meaning "no budget filter".
pub const BUDGET_ANY: &str = "指定なし";

/// Genre labels in presentation order, sentinel first.
pub const GENRE_OPTIONS: &[&str] = &[
    GENRE_ALL,
    "居酒屋",
    "ダイニングバー・バル",
    "創作料理",
    "和食",
    "洋食",
    "イタリアン・フレンチ",
    "中華",
    "焼肉・ホルモン",
    "韓国料理",
    "アジア・エスニック料理",
    "各国料理",
    "カラオケ・パーティ",
    "バー・カクテル",
    "ラーメン",
    "お好み焼き・もんじゃ",
    "カフェ・スイーツ",
    "その他グルメ",
];

/// Budget band labels in presentation order, sentinel first.
pub const BUDGET_OPTIONS: &[&str] = &[
    BUDGET_ANY,
    "〜500円",
    "501〜1000円",
    "1001〜1500円",
    "1501〜2000円",
    "2001〜3000円",
    "3001〜4000円",
    "4001〜5000円",
    "5001〜7000円",
    "7001〜10000円",
    "10001〜15000円",
    "15001〜20000円",
    "20001〜30000円",
    "30001円〜",
];

/// Maps a genre label to its provider code.
///
/// Total over any input: the sentinel and unrecognized labels return the
/// empty string, which callers translate to "omit the parameter".
#[must_use]
pub fn genre_to_code(label: &str) -> &'static str {
    match label {
        "居酒屋" => "G001",
        "ダイニングバー・バル" => "G002",
        "創作料理" => "G003",
        "和食" => "G004",
        "洋食" => "G005",
        "イタリアン・フレンチ" => "G006",
        "中華" => "G007",
        "焼肉・ホルモン" => "G008",
        "韓国料理" => "G017",
        "アジア・エスニック料理" => "G009",
        "各国料理" => "G010",
        "カラオケ・パーティ" => "G011",
        "バー・カクテル" => "G012",
        "ラーメン" => "G013",
        "お好み焼き・もんじゃ" => "G016",
        "カフェ・スイーツ" => "G014",
        "その他グルメ" => "G015",
        _ => "",
    }
}

/// Maps a budget band label to its provider code.
///
/// Total over any input; sentinel and unknown labels return the empty string.
#[must_use]
pub fn budget_to_code(label: &str) -> &'static str {
    match label {
        "〜500円" => "B009",
        "501〜1000円" => "B010",
        "1001〜1500円" => "B011",
        "1501〜2000円" => "B001",
        "2001〜3000円" => "B002",
        "3001〜4000円" => "B003",
        "4001〜5000円" => "B008",
        "5001〜7000円" => "B004",
        "7001〜10000円" => "B005",
        "10001〜15000円" => "B006",
        "15001〜20000円" => "B012",
        "20001〜30000円" => "B013",
        "30001円〜" => "B014",
        _ => "",
    }
}

/// Search radius codes the provider maps to physical distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadiusCode {
    R300m,
    R500m,
    #[default]
    R1km,
    R2km,
    R3km,
}

impl RadiusCode {
    pub const ALL: [RadiusCode; 5] = [
        RadiusCode::R300m,
        RadiusCode::R500m,
        RadiusCode::R1km,
        RadiusCode::R2km,
        RadiusCode::R3km,
    ];

    /// The integer sent as the `range` parameter.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            RadiusCode::R300m => 1,
            RadiusCode::R500m => 2,
            RadiusCode::R1km => 3,
            RadiusCode::R2km => 4,
            RadiusCode::R3km => 5,
        }
    }

    /// Human-readable distance label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RadiusCode::R300m => "300m",
            RadiusCode::R500m => "500m",
            RadiusCode::R1km => "1km",
            RadiusCode::R2km => "2km",
            RadiusCode::R3km => "3km",
        }
    }

    /// Parses a provider code (1–5) back into a radius.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RadiusCode::R300m),
            2 => Some(RadiusCode::R500m),
            3 => Some(RadiusCode::R1km),
            4 => Some(RadiusCode::R2km),
            5 => Some(RadiusCode::R3km),
            _ => None,
        }
    }
}

/// One fully resolved search: coordinate, radius, and optional filters.
///
/// Sentinel labels and empty keywords are normalized to `None` at
/// construction so the wire request simply omits them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub coordinate: Coordinate,
    pub radius: RadiusCode,
    pub genre_code: Option<String>,
    pub budget_code: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(coordinate: Coordinate, radius: RadiusCode) -> Self {
        Self {
            keyword: None,
            coordinate,
            radius,
            genre_code: None,
            budget_code: None,
        }
    }

    /// Sets the keyword; an empty or whitespace-only string clears it.
    #[must_use]
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let trimmed = keyword.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Applies a genre by its user-facing label; sentinel or unknown labels
    /// clear the filter.
    #[must_use]
    pub fn with_genre_label(mut self, label: &str) -> Self {
        let code = genre_to_code(label);
        self.genre_code = (!code.is_empty()).then(|| code.to_string());
        self
    }

    /// Applies a budget band by its user-facing label; sentinel or unknown
    /// labels clear the filter.
    #[must_use]
    pub fn with_budget_label(mut self, label: &str) -> Self {
        let code = budget_to_code(label);
        self.budget_code = (!code.is_empty()).then(|| code.to_string());
        self
    }

    /// The variable query parameters for this search, in wire order.
    ///
    /// Fixed parameters (`key`, `format`, `count`) are the client's concern.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.coordinate.lat.to_string()),
            ("lng", self.coordinate.lng.to_string()),
            ("range", self.radius.code().to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(genre) = &self.genre_code {
            pairs.push(("genre", genre.clone()));
        }
        if let Some(budget) = &self.budget_code {
            pairs.push(("budget", budget.clone()));
        }
        pairs
    }
}
