use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page of records as returned by the balldontlie API.
///
/// Only the first page is ever read; the `meta` cursor is ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamPage<T> {
    pub data: Option<Vec<T>>,
}

impl<T> UpstreamPage<T> {
    /// Records on this page; a missing or null `data` is an empty page.
    pub fn into_records(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Player record from `GET /players`. Missing or null fields stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamPlayer {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<UpstreamTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTeam {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Per-player season aggregate from `GET /season_averages`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamSeasonAverages {
    pub games_played: Option<i64>,
    /// Minutes per game; a "MM:SS" string or a number depending on the season
    pub min: Option<Value>,
    pub pts: Option<f64>,
    pub reb: Option<f64>,
    pub ast: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub turnover: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

/// Player info for search results
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSummary {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team_name: Option<String>,
}

impl From<UpstreamPlayer> for PlayerSummary {
    fn from(player: UpstreamPlayer) -> Self {
        PlayerSummary {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            // A team without a usable name is reported the same as no team
            team_name: player
                .team
                .and_then(|t| t.full_name)
                .filter(|name| !name.is_empty()),
        }
    }
}

/// Season averages with per-game stats renamed for the client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SeasonAverages {
    pub games_played: Option<i64>,
    pub min: Option<Value>,
    pub ppg: Option<f64>,
    pub rpg: Option<f64>,
    pub apg: Option<f64>,
    pub spg: Option<f64>,
    pub bpg: Option<f64>,
    pub turnover: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

impl From<UpstreamSeasonAverages> for SeasonAverages {
    fn from(stats: UpstreamSeasonAverages) -> Self {
        SeasonAverages {
            games_played: stats.games_played,
            min: stats.min,
            ppg: stats.pts,
            rpg: stats.reb,
            apg: stats.ast,
            spg: stats.stl,
            bpg: stats.blk,
            turnover: stats.turnover,
            fg_pct: stats.fg_pct,
            fg3_pct: stats.fg3_pct,
            ft_pct: stats.ft_pct,
        }
    }
}

/// Response wrapper for player search
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<PlayerSummary>,
}

/// Response wrapper for season averages; `averages` is null when upstream has no record
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonAveragesResponse {
    pub averages: Option<SeasonAverages>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
