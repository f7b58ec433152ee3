use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of a phone name the service left out
pub const UNKNOWN_NAME: &str = "Unknown phone";

/// A phone as returned by the recommendation service
///
/// Every field may be missing; the backend drops nulls. Missing values are
/// rendered as placeholders rather than failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<String>,
    /// Share of positive reviews, 0-100
    #[serde(default)]
    pub sentiment: Option<f64>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
}

impl PhoneResult {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            reviews: Vec::new(),
            sentiment: None,
            purchase_link: None,
            brand: None,
            os: None,
            usage: None,
            total_reviews: None,
        }
    }

    /// Phone name, or [`UNKNOWN_NAME`] when missing or blank
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    pub fn first_review(&self) -> Option<&str> {
        self.reviews.first().map(String::as_str)
    }

    /// Purchase link, ignoring blank values
    pub fn purchase_link(&self) -> Option<&str> {
        self.purchase_link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
    }

    /// Brand and name as shown in listings, e.g. "Samsung Galaxy S23"
    pub fn display_name(&self) -> String {
        let name = self.name();
        match self.brand.as_deref().map(str::trim) {
            Some(brand) if !brand.is_empty() && !name.starts_with(brand) => {
                format!("{} {}", brand, name)
            }
            _ => name.to_string(),
        }
    }

    /// Number of reviews behind the sentiment score
    pub fn review_count(&self) -> usize {
        self.total_reviews
            .map(|n| n as usize)
            .unwrap_or(self.reviews.len())
    }
}

/// Payload of `GET /api/recommendations`
///
/// Every list may be absent or null on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: Vec<PhoneResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional: Vec<PhoneResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus: Vec<String>,
}

impl RecommendationResponse {
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.additional.is_empty() && self.bonus.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
