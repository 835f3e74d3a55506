//! Job posting records as returned by the listing API.
//!
//! Only `id` and `title` are required. Every other field tolerates being
//! missing or `null` and falls back to its default, so one sloppy record
//! cannot take the whole listing down.

use serde::{Deserialize, Deserializer, Serialize};

/// Badge text shown when a posting has no salary figure.
pub const COMPETITIVE_LABEL: &str = "Competitive";
/// Badge text shown when a posting has no country restriction.
pub const WORLDWIDE_LABEL: &str = "Worldwide";
/// Shown in place of an empty technology list.
pub const NO_TECHNOLOGIES_LABEL: &str = "No technologies listed";

/// A single remote-job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_technology: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_level: String,
    #[serde(default)]
    pub max_payment_usd: Option<f64>,
    #[serde(default)]
    pub country_iso: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apply_url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl JobPosting {
    /// Create a posting with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            company: String::new(),
            technologies: Vec::new(),
            main_technology: String::new(),
            job_type: String::new(),
            skill_level: String::new(),
            max_payment_usd: None,
            country_iso: None,
            applications: 0,
            views: 0,
            apply_url: String::new(),
            logo_url: None,
        }
    }

    /// Salary badge: `$120,000` or "Competitive".
    pub fn payment_label(&self) -> String {
        self.max_payment_usd
            .map_or_else(|| COMPETITIVE_LABEL.to_string(), format_usd)
    }

    /// Location badge: the country code or "Worldwide".
    pub fn location_label(&self) -> &str {
        self.country_iso.as_deref().unwrap_or(WORLDWIDE_LABEL)
    }

    /// Logo URL, treating an empty string as absent.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Whether the title contains `needle` (already lowercased).
    pub fn title_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format a dollar amount with thousands separators.
///
/// Fractions are kept to at most three digits with trailing zeros dropped.
pub fn format_usd(amount: f64) -> String {
    let amount = if amount.is_finite() { amount.abs() } else { 0.0 };
    let rounded = (amount * 1000.0).round() / 1000.0;
    let fixed = format!("{rounded:.3}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction.is_empty() {
        format!("${grouped}")
    } else {
        format!("${grouped}.{fraction}")
    }
}
