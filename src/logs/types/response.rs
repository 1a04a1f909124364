//! Response types for the logs.tf API.
//!
//! Players are keyed by their steam id in the `[U:1:n]` form. Statistics that a log was not
//! recorded with (for example real damage on older plugins) default to zero.

#![expect(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampSeconds, serde_as};

use super::Team;

/// Response of `GET /log/{id}`: a full parsed match log.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct LogById {
    /// Log format version.
    pub version: u32,
    pub teams: Teams,
    /// Match length in seconds.
    pub length: u32,
    #[serde(default)]
    #[builder(default)]
    pub players: HashMap<String, PlayerStats>,
    /// Steam id to display name.
    #[serde(default)]
    #[builder(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    #[builder(default)]
    pub rounds: Vec<Round>,
    /// Medic steam id to healing done per target steam id.
    #[serde(default)]
    #[builder(default)]
    pub healspread: HashMap<String, HashMap<String, u64>>,
    /// Steam id to kills per victim class.
    #[serde(default)]
    #[builder(default)]
    pub classkills: HashMap<String, HashMap<String, u32>>,
    #[serde(default)]
    #[builder(default)]
    pub classdeaths: HashMap<String, HashMap<String, u32>>,
    #[serde(default)]
    #[builder(default)]
    pub classkillassists: HashMap<String, HashMap<String, u32>>,
    #[serde(default)]
    #[builder(default)]
    pub chat: Vec<ChatMessage>,
    pub info: LogInfo,
    #[serde(default)]
    #[builder(default)]
    pub killstreaks: Vec<Killstreak>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Teams {
    #[serde(rename = "Red")]
    pub red: TeamStats,
    #[serde(rename = "Blue")]
    pub blue: TeamStats,
}

/// Whole-match totals for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct TeamStats {
    pub score: u32,
    pub kills: u32,
    pub deaths: u32,
    pub dmg: u64,
    pub charges: u32,
    pub drops: u32,
    pub firstcaps: u32,
    pub caps: u32,
}

/// Whole-match statistics for one player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct PlayerStats {
    #[builder(into)]
    pub team: Option<Team>,
    pub class_stats: Vec<ClassStats>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub suicides: u32,
    /// Kills plus assists per death. Sent by logs.tf as a string.
    pub kapd: Decimal,
    /// Kills per death. Sent by logs.tf as a string.
    pub kpd: Decimal,
    pub dmg: u64,
    pub dmg_real: u64,
    /// Damage taken.
    pub dt: u64,
    pub dt_real: u64,
    /// Heals received.
    pub hr: u64,
    /// Longest killstreak.
    pub lks: u32,
    /// Airshots.
    #[serde(rename = "as")]
    pub airshots: u32,
    /// Damage per death.
    pub dapd: u64,
    /// Damage per minute.
    pub dapm: u64,
    pub ubers: u32,
    pub ubertypes: HashMap<String, u32>,
    pub drops: u32,
    pub medkits: u32,
    pub medkits_hp: u32,
    pub backstabs: u32,
    pub headshots: u32,
    pub headshots_hit: u32,
    pub sentries: u32,
    /// Healing done.
    pub heal: u64,
    /// Capture points captured.
    pub cpc: u32,
    /// Intel captures.
    pub ic: u32,
}

/// Statistics for the time a player spent on one class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct ClassStats {
    /// Class name, e.g. `scout` or `medic`.
    #[serde(rename = "type")]
    #[builder(into)]
    pub class: String,
    pub kills: u32,
    pub assists: u32,
    pub deaths: u32,
    pub dmg: u64,
    /// Weapon name to its statistics.
    pub weapon: HashMap<String, WeaponStats>,
    /// Seconds played as this class.
    pub total_time: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct WeaponStats {
    pub kills: u32,
    pub dmg: u64,
    pub avg_dmg: f64,
    pub shots: u32,
    pub hits: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Round {
    /// Unix timestamp of the round start.
    pub start_time: i64,
    #[builder(into)]
    pub winner: Option<Team>,
    /// Per-team totals for the round.
    #[serde(default)]
    #[builder(default)]
    pub team: HashMap<Team, RoundTeamStats>,
    #[serde(default)]
    #[builder(default)]
    pub events: Vec<RoundEvent>,
    #[builder(into)]
    pub firstcap: Option<Team>,
    /// Round length in seconds.
    pub length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct RoundTeamStats {
    pub score: u32,
    pub kills: u32,
    pub dmg: u64,
    pub ubers: u32,
}

/// Something that happened during a round: a capture, an uber, a medic death, ...
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct RoundEvent {
    /// Event type, e.g. `pointcap`, `charge`, `medic_death`, `round_win`.
    #[serde(rename = "type")]
    #[builder(into)]
    pub kind: String,
    /// Seconds since the round started.
    pub time: u32,
    #[builder(into)]
    pub team: Option<Team>,
    #[builder(into)]
    pub steamid: Option<String>,
    #[builder(into)]
    pub killer: Option<String>,
    #[builder(into)]
    pub medigun: Option<String>,
    /// Control point number for captures.
    pub point: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct ChatMessage {
    /// Sender steam id, or `Console`.
    #[builder(into)]
    pub steamid: String,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Killstreak {
    #[builder(into)]
    pub steamid: String,
    pub streak: u32,
    /// Seconds since the start of the match.
    pub time: u32,
}

/// Metadata about a log and the features its source plugin recorded.
#[expect(
    clippy::struct_excessive_bools,
    reason = "logs.tf reports one flag per recorded feature"
)]
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogInfo {
    #[builder(into)]
    pub map: String,
    #[serde(default)]
    #[builder(default)]
    pub supplemental: bool,
    #[serde(rename = "total_length")]
    pub total_length: u32,
    #[serde(default)]
    #[builder(default)]
    pub has_real_damage: bool,
    #[serde(default)]
    #[builder(default)]
    pub has_weapon_damage: bool,
    #[serde(default)]
    #[builder(default)]
    pub has_accuracy: bool,
    #[serde(default, rename = "hasHP")]
    #[builder(default)]
    pub has_hp: bool,
    #[serde(default, rename = "hasHP_real")]
    #[builder(default)]
    pub has_hp_real: bool,
    #[serde(default, rename = "hasHS")]
    #[builder(default)]
    pub has_hs: bool,
    #[serde(default, rename = "hasHS_hit")]
    #[builder(default)]
    pub has_hs_hit: bool,
    #[serde(default, rename = "hasBS")]
    #[builder(default)]
    pub has_bs: bool,
    #[serde(default, rename = "hasCP")]
    #[builder(default)]
    pub has_cp: bool,
    #[serde(default, rename = "hasSB")]
    #[builder(default)]
    pub has_sb: bool,
    #[serde(default, rename = "hasDT")]
    #[builder(default)]
    pub has_dt: bool,
    #[serde(default, rename = "hasAS")]
    #[builder(default)]
    pub has_as: bool,
    #[serde(default, rename = "hasHR")]
    #[builder(default)]
    pub has_hr: bool,
    #[serde(default)]
    #[builder(default)]
    pub has_intel: bool,
    #[serde(default, rename = "AD_scoring")]
    #[builder(default)]
    pub ad_scoring: bool,
    #[serde(default)]
    #[builder(default)]
    pub notifications: Vec<String>,
    #[builder(into)]
    pub title: String,
    /// Upload time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    pub uploader: Uploader,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Uploader {
    /// `SteamID64` of the uploader.
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: String,
    /// Name and version of the uploading plugin.
    #[builder(into)]
    pub info: String,
}

/// Response of `GET /log`.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct LogSearchResponse {
    pub success: bool,
    /// Number of logs in this page.
    pub results: u32,
    /// Number of logs matching the query across all pages.
    pub total: u64,
    /// The query as understood by logs.tf.
    pub parameters: SearchParametersEcho,
    pub logs: Vec<LogSummary>,
}

/// The search parameters logs.tf echoes back. Absent filters are `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Builder)]
#[serde(default)]
#[non_exhaustive]
pub struct SearchParametersEcho {
    #[builder(into)]
    pub player: Option<String>,
    #[builder(into)]
    pub uploader: Option<String>,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub map: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

/// One entry of a search result page.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct LogSummary {
    pub id: u64,
    #[builder(into)]
    pub title: String,
    #[builder(into)]
    pub map: String,
    /// Upload time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    pub views: u64,
    /// Number of players in the log.
    pub players: u32,
}

/// Response of `POST /upload`.
///
/// logs.tf reports rejected uploads (bad key, unparseable log) with `success: false` and an
/// `error` message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct UploadResponse {
    pub success: bool,
    pub log_id: Option<u64>,
    /// Path of the new log relative to `https://logs.tf`, e.g. `/123456`.
    #[builder(into)]
    pub url: Option<String>,
    #[builder(into)]
    pub error: Option<String>,
}
