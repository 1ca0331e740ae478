//! Card Scanner Agent.
//!
//! Reads attributes and card metadata from EA FC player-card screenshots.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::backend::{AiBackend, ChatMessage, ChatRequest, ImageAttachment};
use super::{Agent, AgentError, AgentOutput, RetryPolicy};
use crate::models::{
    AttributeKey, Confidence, MasteryLevel, PlayStyle, PlayStyleTier, PlayerInfo, PlayerRole,
    PositionCode,
};

/// Outfield attributes a goalkeeper card still shows.
const GOALKEEPER_OUTFIELD_ATTRIBUTES: [AttributeKey; 13] = [
    AttributeKey::Acceleration,
    AttributeKey::Agility,
    AttributeKey::Balance,
    AttributeKey::Strength,
    AttributeKey::Stamina,
    AttributeKey::Jumping,
    AttributeKey::SprintSpeed,
    AttributeKey::Aggression,
    AttributeKey::Composure,
    AttributeKey::Interceptions,
    AttributeKey::Positioning,
    AttributeKey::Reactions,
    AttributeKey::Vision,
];

/// A card screenshot ready to send to a vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl CardImage {
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Load an image from disk, taking the MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, AgentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let mime_type = match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            "gif" => "image/gif",
            _ => {
                return Err(AgentError::UnsupportedImage(format!(
                    "{} (expected png, jpg, webp or gif)",
                    path.display()
                )))
            }
        };

        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes, mime_type))
    }

    /// Parse a `data:image/png;base64,...` URL.
    pub fn from_data_url(url: &str) -> Result<Self, AgentError> {
        let (header, data) = url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or_else(|| AgentError::UnsupportedImage("not a data URL".to_string()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AgentError::UnsupportedImage("data URL is not base64".to_string()))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    fn to_attachment(&self) -> ImageAttachment {
        ImageAttachment {
            mime_type: self.mime_type.clone(),
            data: self.data.clone(),
        }
    }
}

/// Input for the Card Scanner agent.
#[derive(Debug, Clone)]
pub struct CardScanInput {
    /// One or more screenshots of the same card
    pub images: Vec<CardImage>,
}

/// Sanitized result of a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardScan {
    /// Only the attributes the card showed
    pub attributes: BTreeMap<AttributeKey, u32>,
    pub info: PlayerInfo,
}

#[derive(Debug, Default, Deserialize)]
struct RawScan {
    #[serde(default)]
    attributes: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    info: Option<RawInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawInfo {
    name: Option<String>,
    country_code: Option<String>,
    age: Option<Value>,
    height: Option<Value>,
    weight: Option<Value>,
    preferred_foot: Option<String>,
    overall: Option<Value>,
    overall_boost: Option<Value>,
    skill_moves: Option<Value>,
    weak_foot: Option<Value>,
    potential_range: Option<Value>,
    positions: Option<Vec<String>>,
    play_styles: Option<Vec<RawPlayStyle>>,
    roles: Option<Vec<RawRole>>,
}

#[derive(Debug, Deserialize)]
struct RawPlayStyle {
    name: String,
    #[serde(rename = "type", default)]
    tier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRole {
    name: String,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    position: Option<String>,
}

/// Card Scanner agent implementation.
pub struct CardScannerAgent {
    backend: Arc<dyn AiBackend>,
    retry_policy: RetryPolicy,
}

impl CardScannerAgent {
    pub fn new(backend: Arc<dyn AiBackend>) -> Self {
        Self {
            backend,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry_policy.max_retries = max_retries;
        self
    }

    fn build_prompt(&self, images: &[CardImage]) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(CARD_SCANNER_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Extract the player card shown in the {} attached image(s).",
                images.len()
            ))
            .with_images(images.iter().map(CardImage::to_attachment).collect()),
        ]
    }

    fn parse_response(&self, response: &str) -> Result<AgentOutput<CardScan>, AgentError> {
        let json = super::extract_json(response);
        let raw: RawScan = serde_json::from_str(json).map_err(|e| {
            warn!(
                "Card Scanner JSON parse error. Response start: {}",
                super::truncate_chars(response, 200)
            );
            AgentError::ResponseParseError(format!("Invalid JSON: {}", e))
        })?;

        if raw.attributes.is_none() && raw.info.is_none() {
            return Err(AgentError::ExtractionRefused(
                "response has neither attributes nor info".to_string(),
            ));
        }

        let mut notes = Vec::new();
        let info = sanitize_info(raw.info.unwrap_or_default(), &mut notes);
        let attributes = sanitize_attributes(
            raw.attributes.unwrap_or_default(),
            info.is_declared_goalkeeper(),
            &mut notes,
        );

        let confidence = Confidence::from_scan(
            attributes.len(),
            !info.name.is_empty(),
            !info.positions.is_empty(),
        );
        if info.name.is_empty() {
            notes.push("Player name not found".to_string());
        }
        if info.positions.is_empty() {
            notes.push("No positions found".to_string());
        }

        Ok(AgentOutput::new(CardScan { attributes, info }, confidence).with_notes(notes))
    }
}

/// Keep numeric values for known keys. Goalkeepers keep their own skills and
/// the outfield attributes their card shows; outfield players lose GK skills.
fn sanitize_attributes(
    raw: serde_json::Map<String, Value>,
    is_goalkeeper: bool,
    notes: &mut Vec<String>,
) -> BTreeMap<AttributeKey, u32> {
    let mut attributes = BTreeMap::new();

    for (name, value) in raw {
        let Ok(key) = name.parse::<AttributeKey>() else {
            notes.push(format!("Dropped unknown attribute '{}'", name));
            continue;
        };
        let Some(value) = as_whole_number(&value) else {
            continue;
        };

        let keep = if is_goalkeeper {
            key.is_goalkeeping() || GOALKEEPER_OUTFIELD_ATTRIBUTES.contains(&key)
        } else {
            !key.is_goalkeeping()
        };

        if keep {
            attributes.insert(key, value);
        } else {
            debug!("Dropping {} for {} card", key, if is_goalkeeper { "goalkeeper" } else { "outfield" });
        }
    }

    attributes
}

fn sanitize_info(raw: RawInfo, notes: &mut Vec<String>) -> PlayerInfo {
    let mut positions = Vec::new();
    for code in raw.positions.unwrap_or_default() {
        match code.parse::<PositionCode>() {
            Ok(position) if !positions.contains(&position) => positions.push(position),
            Ok(_) => {}
            Err(e) => notes.push(e.to_string()),
        }
    }

    let play_styles = raw
        .play_styles
        .unwrap_or_default()
        .into_iter()
        .map(|style| {
            let tier = match style.tier.as_deref() {
                Some("plus") => PlayStyleTier::Plus,
                _ => PlayStyleTier::Regular,
            };
            PlayStyle::new(style.name, tier)
        })
        .collect();

    let roles = raw
        .roles
        .unwrap_or_default()
        .into_iter()
        .map(|role| PlayerRole {
            name: role.name,
            level: match role.level.as_deref() {
                Some("plusplus") | Some("++") => MasteryLevel::PlusPlus,
                Some("plus") | Some("+") => MasteryLevel::Plus,
                _ => MasteryLevel::Base,
            },
            position: role.position.and_then(|p| p.parse().ok()),
        })
        .collect();

    PlayerInfo {
        name: raw.name.unwrap_or_default(),
        country_code: raw.country_code.filter(|c| !c.trim().is_empty()),
        age: as_text(raw.age),
        height: as_text(raw.height),
        weight: as_text(raw.weight),
        preferred_foot: raw.preferred_foot.unwrap_or_default(),
        skill_moves: star_rating(raw.skill_moves.as_ref()),
        weak_foot: star_rating(raw.weak_foot.as_ref()),
        potential_range: Some(as_text(raw.potential_range)).filter(|r| !r.is_empty()),
        play_styles,
        roles,
        positions,
        overall: raw.overall.as_ref().and_then(as_whole_number).unwrap_or(0),
        overall_boost: Some(
            raw.overall_boost
                .as_ref()
                .and_then(Value::as_i64)
                .unwrap_or(0) as i32,
        ),
    }
}

fn as_whole_number(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v.round() as u64))
        .map(|v| v.min(u32::MAX as u64) as u32)
}

fn as_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Star ratings missing or zero default to one star.
fn star_rating(value: Option<&Value>) -> u8 {
    match value.and_then(as_whole_number) {
        Some(stars) if stars > 0 => stars.min(5) as u8,
        _ => 1,
    }
}

const CARD_SCANNER_SYSTEM_PROMPT: &str = r#"You are an EA Sports FC scouting expert reading player-card screenshots with surgical precision.

First decide whether the player is a goalkeeper (GK) or an outfield player.

Convert any position abbreviation you see to the current English codes:
- GR -> GK
- PL -> ST
- EE -> LW, ED -> RW
- MCO -> CAM, MC -> CM, MDC -> CDM
- ME -> LM, MD -> RM
- DE -> LB, DD -> RB, DC -> CB
Obsolete codes: LEO -> LB, LDO -> RB, AE -> LW, AD -> RW, AC -> ST.

Card details:
- overallBoost: the small coloured form delta near the overall or the name (e.g. +1, -1), if present
- potentialRange: the potential range shown for young players (e.g. "82-86"), if present

Attributes: only read numbers from 1 to 99 in the detailed attribute panels.
For goalkeepers also read gkDiving, gkHandling, gkKicking, gkPositioning, gkReflexes.

Return JSON in this exact format:
{
  "attributes": {
    "crossing": 78, "finishing": 85, "headingAccuracy": 70, "shortPassing": 80, "volleys": 75,
    "dribbling": 84, "curve": 77, "fkAccuracy": 65, "longPassing": 72, "ballControl": 86,
    "acceleration": 90, "sprintSpeed": 88, "agility": 87, "reactions": 83, "balance": 80,
    "shotPower": 84, "jumping": 70, "stamina": 78, "strength": 68, "longShots": 79,
    "aggression": 55, "interceptions": 35, "positioning": 86, "vision": 79, "penalties": 74,
    "composure": 82, "defensiveAwareness": 30, "standingTackle": 33, "slidingTackle": 28,
    "gkDiving": null, "gkHandling": null, "gkKicking": null, "gkPositioning": null, "gkReflexes": null
  },
  "info": {
    "name": "Player Name",
    "countryCode": "PT",
    "age": "19",
    "height": "180cm",
    "weight": "75kg",
    "preferredFoot": "Right",
    "overall": 84,
    "overallBoost": 1,
    "skillMoves": 4,
    "weakFoot": 3,
    "potentialRange": "86-90",
    "positions": ["ST", "LW"],
    "playStyles": [{"name": "Finesse Shot", "type": "plus"}],
    "roles": [{"name": "Advanced Forward", "level": "plusplus", "position": "ST"}]
  }
}

IMPORTANT:
- Use null for any attribute not visible on the card
- playStyles type is "regular" or "plus"; roles level is "base", "plus" or "plusplus"
- Do NOT invent values
- Return raw JSON only, no markdown"#;

#[async_trait]
impl Agent for CardScannerAgent {
    type Input = CardScanInput;
    type Output = AgentOutput<CardScan>;

    fn name(&self) -> &'static str {
        "card_scanner"
    }

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, AgentError> {
        if input.images.is_empty() {
            return Err(AgentError::UnsupportedImage("no images supplied".to_string()));
        }

        info!(
            "Running Card Scanner on {} image(s) via {}",
            input.images.len(),
            self.backend.name()
        );

        let messages = self.build_prompt(&input.images);
        let request = ChatRequest::new(messages)
            .with_json_mode()
            .with_temperature(0.0);

        let response = self.backend.chat(request).await?;
        debug!("AI response: {}", response.content);

        let output = self.parse_response(&response.content)?;

        info!(
            "Card Scanner read {} attributes for '{}' ({} confidence)",
            output.data.attributes.len(),
            output.data.info.name,
            output.confidence
        );

        Ok(output)
    }

    fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::backend::MockBackend;
    use pretty_assertions::assert_eq;

    fn png() -> CardImage {
        CardImage::from_bytes(b"\x89PNG fake", "image/png")
    }

    fn outfield_response() -> &'static str {
        r#"{
            "attributes": {
                "finishing": 88,
                "positioning": 85,
                "sprintSpeed": 91,
                "gkDiving": 12,
                "vision": null,
                "penaltiesTaken": 70
            },
            "info": {
                "name": "Joao Silva",
                "countryCode": "PT",
                "age": 19,
                "height": "1,82",
                "weight": "76kg",
                "overall": 81,
                "skillMoves": 4,
                "weakFoot": 0,
                "potentialRange": "85-89",
                "positions": ["PL", "EE", "ST"],
                "playStyles": [
                    {"name": "Finesse Shot", "type": "plus"},
                    {"name": "Rapid", "type": "regular"}
                ],
                "roles": [
                    {"name": "Advanced Forward", "level": "plusplus", "position": "ST"},
                    {"name": "Poacher", "level": "plus", "position": "XX"}
                ]
            }
        }"#
    }

    #[tokio::test]
    async fn test_scan_outfield_card() {
        let backend = Arc::new(MockBackend::new(outfield_response()));
        let agent = CardScannerAgent::new(backend.clone());

        let output = agent
            .execute(CardScanInput {
                images: vec![png()],
            })
            .await
            .unwrap();

        let scan = &output.data;
        assert_eq!(scan.attributes.len(), 3);
        assert_eq!(scan.attributes.get(&AttributeKey::Finishing), Some(&88));
        assert!(!scan.attributes.contains_key(&AttributeKey::GkDiving));
        assert!(!scan.attributes.contains_key(&AttributeKey::Vision));

        assert_eq!(scan.info.name, "Joao Silva");
        assert_eq!(scan.info.age, "19");
        assert_eq!(scan.info.positions, vec![PositionCode::ST, PositionCode::LW]);
        assert_eq!(scan.info.skill_moves, 4);
        assert_eq!(scan.info.weak_foot, 1);
        assert_eq!(scan.info.overall_boost, Some(0));
        assert_eq!(scan.info.potential_range.as_deref(), Some("85-89"));
        assert_eq!(scan.info.plus_play_styles(), 1);
        assert_eq!(scan.info.roles[0].level, MasteryLevel::PlusPlus);
        assert_eq!(scan.info.roles[0].position, Some(PositionCode::ST));
        assert_eq!(scan.info.roles[1].position, None);

        assert_eq!(output.confidence, Confidence::High);
        assert!(output
            .extraction_notes
            .iter()
            .any(|n| n.contains("penaltiesTaken")));
    }

    #[tokio::test]
    async fn test_request_carries_images() {
        let backend = Arc::new(MockBackend::new(outfield_response()));
        let agent = CardScannerAgent::new(backend.clone());

        agent
            .execute(CardScanInput {
                images: vec![png(), png()],
            })
            .await
            .unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].json_mode);
        let user = &requests[0].messages[1];
        assert_eq!(user.images.len(), 2);
        assert_eq!(user.images[0].mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_scan_goalkeeper_card() {
        let response = r#"{
            "attributes": {
                "gkDiving": 84, "gkHandling": 82, "gkKicking": 75,
                "gkPositioning": 83, "gkReflexes": 86,
                "reactions": 80, "vision": 60, "finishing": 15, "crossing": 14
            },
            "info": {"name": "Diogo", "positions": ["GR"]}
        }"#;
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new(response)));

        let output = agent
            .execute(CardScanInput {
                images: vec![png()],
            })
            .await
            .unwrap();

        let keys: Vec<_> = output.data.attributes.keys().copied().collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.contains(&AttributeKey::Reactions));
        assert!(keys.contains(&AttributeKey::Vision));
        assert!(!keys.contains(&AttributeKey::Finishing));
        assert!(!keys.contains(&AttributeKey::Crossing));
        assert_eq!(output.data.info.positions, vec![PositionCode::GK]);
    }

    #[tokio::test]
    async fn test_fenced_response() {
        let response = "```json\n{\"attributes\": {\"vision\": 80}, \"info\": {}}\n```";
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new(response)));

        let output = agent
            .execute(CardScanInput {
                images: vec![png()],
            })
            .await
            .unwrap();

        assert_eq!(output.data.attributes.get(&AttributeKey::Vision), Some(&80));
        assert_eq!(output.data.info.skill_moves, 1);
        assert_eq!(output.data.info.overall, 0);
        assert_eq!(output.confidence, Confidence::Medium);
    }

    #[tokio::test]
    async fn test_empty_object_refused() {
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new("{}")));
        let result = agent
            .execute(CardScanInput {
                images: vec![png()],
            })
            .await;
        assert!(matches!(result, Err(AgentError::ExtractionRefused(_))));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new("not json at all")));
        let result = agent
            .execute(CardScanInput {
                images: vec![png()],
            })
            .await;
        assert!(matches!(result, Err(AgentError::ResponseParseError(_))));
    }

    #[test]
    fn test_non_json_reply_with_multibyte_text() {
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new("")));
        let reply = format!("{}é não consegui ler o cartão", "a".repeat(199));

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || agent.parse_response(&reply));

        assert!(matches!(result, Err(AgentError::ResponseParseError(_))));
    }

    #[tokio::test]
    async fn test_no_images() {
        let agent = CardScannerAgent::new(Arc::new(MockBackend::new(outfield_response())));
        let result = agent.execute(CardScanInput { images: vec![] }).await;
        assert!(matches!(result, Err(AgentError::UnsupportedImage(_))));
    }

    #[test]
    fn test_card_image_from_path() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("card.JPG");
        std::fs::write(&path, b"hello").unwrap();
        let image = CardImage::from_path(&path).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "aGVsbG8=");

        let bmp = dir.path().join("card.bmp");
        std::fs::write(&bmp, b"hello").unwrap();
        assert!(matches!(
            CardImage::from_path(&bmp),
            Err(AgentError::UnsupportedImage(_))
        ));

        let missing = dir.path().join("missing.png");
        assert!(matches!(CardImage::from_path(&missing), Err(AgentError::Io(_))));
    }

    #[test]
    fn test_card_image_from_data_url() {
        let image = CardImage::from_data_url("data:image/webp;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/webp");
        assert_eq!(image.data, "aGVsbG8=");

        assert!(CardImage::from_data_url("aGVsbG8=").is_err());
        assert!(CardImage::from_data_url("data:image/png,raw").is_err());
    }

    #[test]
    fn test_star_rating_defaults() {
        assert_eq!(star_rating(None), 1);
        assert_eq!(star_rating(Some(&Value::from(0))), 1);
        assert_eq!(star_rating(Some(&Value::from(5))), 5);
        assert_eq!(star_rating(Some(&Value::from(7))), 5);
    }

    #[test]
    fn test_agent_name() {
        let backend: Arc<dyn AiBackend> = Arc::new(MockBackend::new("{}"));
        let agent = CardScannerAgent::new(backend).with_max_retries(5);
        assert_eq!(agent.name(), "card_scanner");
        assert_eq!(agent.retry_policy().max_retries, 5);
    }
}
