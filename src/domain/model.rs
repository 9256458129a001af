use crate::utils::error::SajuError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 12-year animal cycle, in cycle order starting at 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacId {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacId {
    pub const ALL: [ZodiacId; 12] = [
        ZodiacId::Rat,
        ZodiacId::Ox,
        ZodiacId::Tiger,
        ZodiacId::Rabbit,
        ZodiacId::Dragon,
        ZodiacId::Snake,
        ZodiacId::Horse,
        ZodiacId::Goat,
        ZodiacId::Monkey,
        ZodiacId::Rooster,
        ZodiacId::Dog,
        ZodiacId::Pig,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacId::Rat => "rat",
            ZodiacId::Ox => "ox",
            ZodiacId::Tiger => "tiger",
            ZodiacId::Rabbit => "rabbit",
            ZodiacId::Dragon => "dragon",
            ZodiacId::Snake => "snake",
            ZodiacId::Horse => "horse",
            ZodiacId::Goat => "goat",
            ZodiacId::Monkey => "monkey",
            ZodiacId::Rooster => "rooster",
            ZodiacId::Dog => "dog",
            ZodiacId::Pig => "pig",
        }
    }

    /// Position in the cycle, 0 for rat.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Forgiving parse for typed input: trims and ignores case.
    /// `FromStr` only accepts the exact table ids.
    pub fn parse_lenient(s: &str) -> Result<Self, SajuError> {
        s.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| SajuError::UnknownZodiac { id: s.to_string() })
    }
}

impl fmt::Display for ZodiacId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacId {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacId::ALL
            .iter()
            .copied()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| SajuError::UnknownZodiac { id: s.to_string() })
    }
}

/// 오행
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn name_ko(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibles {
    pub best: &'static [ZodiacId],
    pub good: &'static [ZodiacId],
    pub challenging: &'static [ZodiacId],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub id: ZodiacId,
    pub name: &'static str,
    pub name_ko: &'static str,
    pub element: Element,
    pub traits: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub lucky_numbers: &'static [u8],
    pub lucky_colors: &'static [&'static str],
    pub fortune: &'static str,
    pub compatibility: Compatibles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    VeryGood,
    Good,
    NeedsCaution,
    Neutral,
    Unknown,
}

impl Compatibility {
    pub fn label(self) -> &'static str {
        match self {
            Compatibility::VeryGood => "very good",
            Compatibility::Good => "good",
            Compatibility::NeedsCaution => "needs caution",
            Compatibility::Neutral => "neutral",
            Compatibility::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// A text frame from `/ws/monitor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

// --- Admin dashboard payloads ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCalculationMode {
    /// Clock time in the configured timezone.
    #[default]
    Standard,
    /// Clock time corrected by longitude.
    LocalMeanTime,
    /// Local mean time plus the equation of time.
    TrueSolarTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoDefaults {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Default for GeoDefaults {
    fn default() -> Self {
        Self {
            city: "Seoul".to_string(),
            latitude: 37.5665,
            longitude: 126.978,
            timezone: "Asia/Seoul".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineToggles {
    pub use_solar_terms: bool,
    /// Split the 자시 hour at midnight (야자시/조자시).
    pub split_midnight_hour: bool,
    pub apply_daylight_saving: bool,
}

impl Default for EngineToggles {
    fn default() -> Self {
        Self {
            use_solar_terms: true,
            split_midnight_hour: false,
            apply_daylight_saving: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminSettings {
    pub time_calculation: TimeCalculationMode,
    pub geo_defaults: GeoDefaults,
    pub engine: EngineToggles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub grade: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub notification_type: String,
    pub content: String,
    #[serde(default)]
    pub recipient_count: Option<u32>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeChange {
    pub new_grade: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStatusChange {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub notification_type: String,
    pub user_ids: Vec<String>,
    pub content: String,
}
