use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::sources;

pub const DEFAULT_USER_AGENT: &str = "fan_scraper/0.1 (+https://github.com/fan-scraper)";

/// Runtime settings: compiled-in addresses, overridable through `FANPAGE_*`
/// variables (e.g. `FANPAGE_SOURCES__SCHEDULE`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub user_agent: String,
    pub sources: SourceUrls,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceUrls {
    pub soccer: String,
    pub soccer_top: String,
    pub team: String,
    pub schedule: String,
    pub squad: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub instagram: String,
    pub team: String,
    pub espn: String,
    pub whoscored: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("sources.soccer", sources::SOCCER_URL)?
            .set_default("sources.soccer_top", sources::SOCCER_TOP_URL)?
            .set_default("sources.team", sources::TEAM_URL)?
            .set_default("sources.schedule", sources::SCHEDULE_URL)?
            .set_default("sources.squad", sources::SQUAD_URL)?
            .set_default("socials.twitter", sources::TWITTER_URL)?
            .set_default("socials.instagram", sources::INSTAGRAM_URL)?
            .set_default("socials.team", sources::TEAM_SITE_URL)?
            .set_default("socials.espn", sources::ESPN_URL)?
            .set_default("socials.whoscored", sources::WHOSCORED_URL)?
            .add_source(
                Environment::with_prefix("FANPAGE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sources: SourceUrls {
                soccer: sources::SOCCER_URL.to_string(),
                soccer_top: sources::SOCCER_TOP_URL.to_string(),
                team: sources::TEAM_URL.to_string(),
                schedule: sources::SCHEDULE_URL.to_string(),
                squad: sources::SQUAD_URL.to_string(),
            },
            socials: SocialLinks {
                twitter: sources::TWITTER_URL.to_string(),
                instagram: sources::INSTAGRAM_URL.to_string(),
                team: sources::TEAM_SITE_URL.to_string(),
                espn: sources::ESPN_URL.to_string(),
                whoscored: sources::WHOSCORED_URL.to_string(),
            },
        }
    }
}
