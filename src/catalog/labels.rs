//! Display labels for attributes and positions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{AttributeKey, PositionCode};

/// Language used for attribute and position labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "pt")]
    Portuguese,
}

impl Locale {
    pub fn attribute_label(&self, key: AttributeKey) -> &'static str {
        match self {
            Locale::English => english_attribute(key),
            Locale::Portuguese => portuguese_attribute(key),
        }
    }

    pub fn position_label(&self, position: PositionCode) -> &'static str {
        match self {
            Locale::English => position.as_str(),
            Locale::Portuguese => portuguese_position(position),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::Portuguese => write!(f, "pt"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pt" | "pt-pt" | "portuguese" => Ok(Locale::Portuguese),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

fn english_attribute(key: AttributeKey) -> &'static str {
    match key {
        AttributeKey::Crossing => "Crossing",
        AttributeKey::Finishing => "Finishing",
        AttributeKey::HeadingAccuracy => "Heading Accuracy",
        AttributeKey::ShortPassing => "Short Passing",
        AttributeKey::Volleys => "Volleys",
        AttributeKey::Dribbling => "Dribbling",
        AttributeKey::Curve => "Curve",
        AttributeKey::FkAccuracy => "FK Accuracy",
        AttributeKey::LongPassing => "Long Passing",
        AttributeKey::BallControl => "Ball Control",
        AttributeKey::Acceleration => "Acceleration",
        AttributeKey::SprintSpeed => "Sprint Speed",
        AttributeKey::Agility => "Agility",
        AttributeKey::Reactions => "Reactions",
        AttributeKey::Balance => "Balance",
        AttributeKey::ShotPower => "Shot Power",
        AttributeKey::Jumping => "Jumping",
        AttributeKey::Stamina => "Stamina",
        AttributeKey::Strength => "Strength",
        AttributeKey::LongShots => "Long Shots",
        AttributeKey::Aggression => "Aggression",
        AttributeKey::Interceptions => "Interceptions",
        AttributeKey::Positioning => "Att. Position",
        AttributeKey::Vision => "Vision",
        AttributeKey::Penalties => "Penalties",
        AttributeKey::Composure => "Composure",
        AttributeKey::DefensiveAwareness => "Def. Awareness",
        AttributeKey::StandingTackle => "Standing Tackle",
        AttributeKey::SlidingTackle => "Sliding Tackle",
        AttributeKey::GkDiving => "GK Diving",
        AttributeKey::GkHandling => "GK Handling",
        AttributeKey::GkKicking => "GK Kicking",
        AttributeKey::GkPositioning => "GK Positioning",
        AttributeKey::GkReflexes => "GK Reflexes",
    }
}

fn portuguese_attribute(key: AttributeKey) -> &'static str {
    match key {
        AttributeKey::Crossing => "Cruzamentos",
        AttributeKey::Finishing => "Finalização",
        AttributeKey::HeadingAccuracy => "Cabeceamentos",
        AttributeKey::ShortPassing => "Passe Curto",
        AttributeKey::Volleys => "Volleys",
        AttributeKey::Dribbling => "Drible",
        AttributeKey::Curve => "Efeito",
        AttributeKey::FkAccuracy => "Precisão de Livres",
        AttributeKey::LongPassing => "Passe Longo",
        AttributeKey::BallControl => "Controlo de Bola",
        AttributeKey::Acceleration => "Aceleração",
        AttributeKey::SprintSpeed => "Sprint",
        AttributeKey::Agility => "Agilidade",
        AttributeKey::Reactions => "Reações",
        AttributeKey::Balance => "Equilíbrio",
        AttributeKey::ShotPower => "Potência de Remate",
        AttributeKey::Jumping => "Salto",
        AttributeKey::Stamina => "Resistência",
        AttributeKey::Strength => "Força",
        AttributeKey::LongShots => "Remate de Longe",
        AttributeKey::Aggression => "Agressividade",
        AttributeKey::Interceptions => "Interceções",
        AttributeKey::Positioning => "Posicionamento de Ataque",
        AttributeKey::Vision => "Visão",
        AttributeKey::Penalties => "Penáltis",
        AttributeKey::Composure => "Compostura",
        AttributeKey::DefensiveAwareness => "Propensão Defensiva",
        AttributeKey::StandingTackle => "Desarme em Pé",
        AttributeKey::SlidingTackle => "Desarme de Carrinho",
        AttributeKey::GkDiving => "Mergulhos GR",
        AttributeKey::GkHandling => "Jogo Mãos GR",
        AttributeKey::GkKicking => "Jogo Pés GR",
        AttributeKey::GkPositioning => "Posicionamento GR",
        AttributeKey::GkReflexes => "Reflexos GR",
    }
}

fn portuguese_position(position: PositionCode) -> &'static str {
    match position {
        PositionCode::ST => "PL",
        PositionCode::LW => "EE",
        PositionCode::RW => "ED",
        PositionCode::CAM => "MCO",
        PositionCode::CM => "MC",
        PositionCode::LM => "ME",
        PositionCode::RM => "MD",
        PositionCode::CDM => "MDC",
        PositionCode::LB => "DE",
        PositionCode::RB => "DD",
        PositionCode::CB => "DC",
        PositionCode::GK => "GR",
    }
}
