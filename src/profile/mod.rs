//! Player profile files.
//!
//! A profile is the JSON document the analyzer reads and writes: attributes,
//! card metadata, the report section order and an export timestamp.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::agents::card_scanner::CardScan;
use crate::models::{PlayerAttributes, PlayerInfo};

/// Profile file errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report sections in their default display order.
pub const DEFAULT_SECTION_ORDER: [&str; 5] = [
    "attributes_dist",
    "field_map",
    "dev_plan",
    "all_positions",
    "attr_editor",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(default)]
    pub attributes: PlayerAttributes,

    #[serde(default)]
    pub player_info: PlayerInfo,

    #[serde(default = "default_section_order")]
    pub section_order: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

fn default_section_order() -> Vec<String> {
    DEFAULT_SECTION_ORDER.iter().map(|s| s.to_string()).collect()
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            attributes: PlayerAttributes::default(),
            player_info: PlayerInfo::default(),
            section_order: default_section_order(),
            exported_at: None,
        }
    }
}

impl PlayerProfile {
    pub fn new(attributes: PlayerAttributes, player_info: PlayerInfo) -> Self {
        Self {
            attributes,
            player_info,
            ..Default::default()
        }
    }

    /// Blank profile with one-star skill moves and weak foot.
    pub fn template() -> Self {
        let mut profile = Self::default();
        profile.player_info.skill_moves = 1;
        profile.player_info.weak_foot = 1;
        profile
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let file = File::open(path)?;
        let profile: PlayerProfile = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded profile '{}' from {}",
            profile.player_info.name,
            path.display()
        );
        Ok(profile)
    }

    /// Write the profile as pretty JSON, stamping `exported_at`.
    pub fn save(&mut self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        self.exported_at = Some(Utc::now());

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Saved profile to {}", path.display());
        Ok(())
    }

    /// Save into `dir` under [`export_file_name`](Self::export_file_name).
    pub fn export_to(&mut self, dir: &Path) -> Result<PathBuf, ProfileError> {
        let path = dir.join(self.export_file_name());
        self.save(&path)?;
        Ok(path)
    }

    /// `<Name>_<overall>_<age>_<COUNTRY>.json`, whitespace in the name
    /// collapsed to underscores.
    pub fn export_file_name(&self) -> String {
        let info = &self.player_info;

        let name = if info.name.trim().is_empty() {
            "Player".to_string()
        } else {
            info.name.split_whitespace().collect::<Vec<_>>().join("_")
        };

        let age = if info.age.is_empty() {
            "0".to_string()
        } else {
            info.age.chars().filter(char::is_ascii_digit).collect()
        };

        let country = info
            .country_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("UNK");

        format!("{}_{}_{}_{}.json", name, info.overall, age, country)
    }

    /// Merge a card scan: attributes the scan read overwrite ours, the rest
    /// are kept. Card metadata is replaced wholesale.
    pub fn apply_scan(&mut self, scan: &CardScan) {
        for (&key, &value) in &scan.attributes {
            self.attributes.set(key, value);
        }
        self.player_info = scan.info.clone();
    }

    pub fn from_scan(scan: &CardScan) -> Self {
        let mut profile = Self::default();
        profile.apply_scan(scan);
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeKey, PositionCode};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn sample() -> PlayerProfile {
        let mut attributes = PlayerAttributes::uniform(70);
        attributes.finishing = 88;
        PlayerProfile::new(
            attributes,
            PlayerInfo {
                name: "Rafael  Leao Junior".to_string(),
                country_code: Some("PT".to_string()),
                age: "24 anos".to_string(),
                overall: 86,
                positions: vec![PositionCode::LW],
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(sample().export_file_name(), "Rafael_Leao_Junior_86_24_PT.json");
    }

    #[test]
    fn test_export_file_name_defaults() {
        assert_eq!(PlayerProfile::default().export_file_name(), "Player_0_0_UNK.json");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");

        let mut profile = sample();
        profile.save(&path).unwrap();
        assert!(profile.exported_at.is_some());

        let loaded = PlayerProfile::load(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempdir().unwrap();
        let mut profile = sample();

        let path = profile.export_to(dir.path()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("Rafael_Leao_Junior_86_24_PT.json")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_load_exported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{
                "attributes": {"finishing": 91, "gkDiving": 10},
                "playerInfo": {
                    "name": "Ana",
                    "age": "17",
                    "positions": ["ST", "CF"],
                    "skillMoves": 4,
                    "weakFoot": 3,
                    "playStyles": [{"name": "Power Shot", "type": "plus"}],
                    "roles": [{"name": "Poacher", "level": "plus", "position": "ST"}]
                },
                "sectionOrder": ["dev_plan", "field_map"],
                "exportedAt": "2024-05-01T10:00:00.000Z"
            }"#,
        )
        .unwrap();

        let profile = PlayerProfile::load(&path).unwrap();
        assert_eq!(profile.attributes.finishing, 91);
        assert_eq!(profile.attributes.crossing, 0);
        assert_eq!(profile.player_info.positions, vec![PositionCode::ST, PositionCode::ST]);
        assert_eq!(profile.player_info.plus_play_styles(), 1);
        assert_eq!(profile.section_order, vec!["dev_plan", "field_map"]);
        assert!(profile.exported_at.is_some());
    }

    #[test]
    fn test_load_card_app_export_with_blank_positions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Jogador_0_0_UNK.json");
        std::fs::write(
            &path,
            r#"{
                "attributes": {"finishing": 84, "positioning": 80, "reactions": 77},
                "playerInfo": {
                    "name": "",
                    "age": "",
                    "height": "",
                    "weight": "",
                    "preferredFoot": "",
                    "skillMoves": 0,
                    "weakFoot": 0,
                    "playStyles": [],
                    "roles": [{"name": "Finalizador", "level": "plus", "position": ""}],
                    "positions": ["PL", "SS"],
                    "overall": 0,
                    "overallBoost": 0,
                    "potentialRange": ""
                },
                "sectionOrder": ["attributes_dist", "field_map", "dev_plan", "all_positions", "attr_editor"],
                "exportedAt": "2025-01-12T18:03:44.512Z"
            }"#,
        )
        .unwrap();

        let profile = PlayerProfile::load(&path).unwrap();
        let info = &profile.player_info;
        assert_eq!(info.positions, vec![PositionCode::ST]);
        assert_eq!(info.roles.len(), 1);
        assert_eq!(info.roles[0].name, "Finalizador");
        assert_eq!(info.roles[0].position, None);
        assert_eq!(info.potential_range.as_deref(), Some(""));
        assert_eq!(profile.attributes.finishing, 84);
        assert_eq!(profile.export_file_name(), "Player_0_0_UNK.json");
    }

    #[test]
    fn test_load_fills_missing_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("minimal.json");
        std::fs::write(&path, "{}").unwrap();

        let profile = PlayerProfile::load(&path).unwrap();
        assert_eq!(profile, PlayerProfile::default());
        assert_eq!(profile.section_order.len(), 5);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(PlayerProfile::load(&path), Err(ProfileError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = PlayerProfile::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ProfileError::Io(_))));
    }

    #[test]
    fn test_apply_scan_merges_present_keys() {
        let mut profile = sample();

        let mut attributes = BTreeMap::new();
        attributes.insert(AttributeKey::Vision, 93);
        let scan = CardScan {
            attributes,
            info: PlayerInfo {
                name: "Scanned".to_string(),
                skill_moves: 1,
                weak_foot: 1,
                ..Default::default()
            },
        };

        profile.apply_scan(&scan);

        assert_eq!(profile.attributes.vision, 93);
        assert_eq!(profile.attributes.finishing, 88);
        assert_eq!(profile.attributes.crossing, 70);
        assert_eq!(profile.player_info, scan.info);
    }

    #[test]
    fn test_template() {
        let profile = PlayerProfile::template();
        assert_eq!(profile.player_info.skill_moves, 1);
        assert_eq!(profile.player_info.weak_foot, 1);
        assert_eq!(profile.attributes, PlayerAttributes::default());
    }
}
