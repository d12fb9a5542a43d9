//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the app shows a complete page out of the
//! box; editing the config file is how the portfolio content is changed.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// The page content: who the portfolio belongs to and what it shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Paragraphs of the profile section, one string per paragraph.
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            tagline: default_tagline(),
            about: default_about(),
            projects: default_projects(),
        }
    }
}

/// One portfolio card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Timing and interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Delay between pressing send and the message landing in the list.
    #[serde(default = "default_send_delay_ms")]
    pub send_delay_ms: u64,
    /// How long notifications stay on screen.
    #[serde(default = "default_notice_timeout_secs")]
    pub notice_timeout_secs: u64,
    /// Ignore further sends while one is still in flight.
    #[serde(default = "default_true")]
    pub block_double_send: bool,
    /// Section reveals and smooth scrolling; turn off to jump instantly.
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay_ms(),
            notice_timeout_secs: default_notice_timeout_secs(),
            block_double_send: true,
            animations: true,
        }
    }
}

fn default_owner() -> String {
    "Andika Pratama".to_string()
}
fn default_tagline() -> String {
    "Web Developer & Lifelong Learner".to_string()
}
fn default_about() -> Vec<String> {
    vec![
        "Halo! Saya seorang pengembang web yang senang membangun antarmuka \
         yang rapi dan mudah digunakan. Saat ini saya banyak bekerja dengan \
         perkakas baris perintah dan otomasi."
            .to_string(),
        "Di luar pekerjaan, saya menulis catatan belajar, berkontribusi ke \
         proyek open source, dan mencoba resep kopi baru."
            .to_string(),
    ]
}
fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig {
            title: "Resep Nusantara".to_string(),
            summary: "Katalog resep masakan rumahan dengan pencarian berdasarkan bahan."
                .to_string(),
            link: Some("https://github.com/andikapratama/resep-nusantara".to_string()),
        },
        ProjectConfig {
            title: "Kasir UMKM".to_string(),
            summary: "Aplikasi kasir sederhana untuk warung dan toko kecil.".to_string(),
            link: Some("https://github.com/andikapratama/kasir-umkm".to_string()),
        },
        ProjectConfig {
            title: "Jadwal Sholat CLI".to_string(),
            summary: "Pengingat waktu sholat di terminal dengan notifikasi.".to_string(),
            link: None,
        },
    ]
}
fn default_send_delay_ms() -> u64 {
    900
}
fn default_notice_timeout_secs() -> u64 {
    4
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_full_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.profile.owner, "Andika Pratama");
        assert_eq!(config.behavior.send_delay_ms, 900);
        assert_eq!(config.behavior.notice_timeout_secs, 4);
        assert!(config.behavior.block_double_send);
        assert!(config.behavior.animations);
        assert_eq!(config.profile.projects.len(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [profile]
            owner = "Siti Rahma"

            [behavior]
            send_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.owner, "Siti Rahma");
        assert_eq!(config.profile.tagline, "Web Developer & Lifelong Learner");
        assert_eq!(config.behavior.send_delay_ms, 0);
        assert_eq!(config.behavior.notice_timeout_secs, 4);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.profile.owner, config.profile.owner);
        assert_eq!(back.profile.projects.len(), config.profile.projects.len());
        assert_eq!(back.behavior.send_delay_ms, config.behavior.send_delay_ms);
    }
}
