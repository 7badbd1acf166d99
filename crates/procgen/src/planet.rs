//! Planet identities and descriptive records shown by the hover panel.
//!
//! Records are static flavor data: the simulation only ever reads `id`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a body across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Mission modifiers attached to a world. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionModifiers {
    pub visibility: Option<i32>,
    pub reinforcement_delay: Option<bool>,
    pub vehicle_cost_reduction: Option<bool>,
    pub random_encounters: Option<bool>,
    pub fatigue_rate: Option<i32>,
    pub morale_bonus: Option<bool>,
    pub enemy_resurrection: Option<bool>,
    pub tech_interference: Option<bool>,
}

/// Descriptive record for one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub id: BodyId,
    pub name: String,
    /// Free-form classification ("Hive World", "Forge World", ...).
    pub classification: String,
    pub allegiance: String,
    pub biome: String,
    /// 1-10.
    pub threat_level: u8,
    /// 1-10.
    pub strategic_value: u8,
    pub population: String,
    #[serde(default)]
    pub environmental_hazards: Vec<String>,
    #[serde(default)]
    pub primary_enemy: Option<String>,
    #[serde(default)]
    pub planetary_traits: Vec<String>,
    #[serde(default)]
    pub mission_modifiers: MissionModifiers,
    #[serde(default)]
    pub flavor_text: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PlanetRecord {
    /// The built-in five-world sector.
    pub fn catalogue() -> Vec<PlanetRecord> {
        vec![
            PlanetRecord {
                id: BodyId::new("karthax-prime"),
                name: "Karthax Prime".to_string(),
                classification: "Hive World".to_string(),
                allegiance: "Imperium".to_string(),
                biome: "Polluted Megacity".to_string(),
                threat_level: 7,
                strategic_value: 8,
                population: "87 Billion".to_string(),
                environmental_hazards: strings(&["Toxic Smog", "Hive Quakes", "Radiation Zones"]),
                primary_enemy: Some("Genestealer Cult".to_string()),
                planetary_traits: strings(&[
                    "Vertical Battlefields",
                    "Civilian Density",
                    "Collapsed Transit Lines",
                ]),
                mission_modifiers: MissionModifiers {
                    visibility: Some(-1),
                    reinforcement_delay: Some(true),
                    ..Default::default()
                },
                flavor_text: "Once a shining jewel of Imperial industry, Karthax Prime now groans \
                              beneath endless manufactoria and creeping cult infestations."
                    .to_string(),
            },
            PlanetRecord {
                id: BodyId::new("vorgath-forge"),
                name: "Vorgath Forge".to_string(),
                classification: "Forge World".to_string(),
                allegiance: "Imperium".to_string(),
                biome: "Industrial Wastes".to_string(),
                threat_level: 6,
                strategic_value: 9,
                population: "12 Billion (mostly servitors)".to_string(),
                environmental_hazards: strings(&["Magma Vents", "Electro-Storms"]),
                primary_enemy: Some("Dark Mechanicum".to_string()),
                planetary_traits: strings(&[
                    "Automated Defenses",
                    "Machine Worship",
                    "Heavy Armor Presence",
                ]),
                mission_modifiers: MissionModifiers {
                    vehicle_cost_reduction: Some(true),
                    ..Default::default()
                },
                flavor_text: "The sacred forges of Vorgath churn out war engines day and night, \
                              guarded by Skitarii legions and merciless logic."
                    .to_string(),
            },
            PlanetRecord {
                id: BodyId::new("helscar"),
                name: "Helscar".to_string(),
                classification: "Death World".to_string(),
                allegiance: "Contested".to_string(),
                biome: "Volcanic Jungles".to_string(),
                threat_level: 9,
                strategic_value: 5,
                population: "Sparse Tribal Settlements".to_string(),
                environmental_hazards: strings(&["Predatory Fauna", "Lava Flows", "Spore Clouds"]),
                primary_enemy: Some("Tyranids".to_string()),
                planetary_traits: strings(&[
                    "Hostile Wildlife",
                    "Unstable Terrain",
                    "Limited Extraction Zones",
                ]),
                mission_modifiers: MissionModifiers {
                    random_encounters: Some(true),
                    fatigue_rate: Some(1),
                    ..Default::default()
                },
                flavor_text: "Helscar devours the unprepared. Even Space Marines tread carefully \
                              beneath its burning canopies."
                    .to_string(),
            },
            PlanetRecord {
                id: BodyId::new("saint-verena"),
                name: "Saint Verena's Rest".to_string(),
                classification: "Shrine World".to_string(),
                allegiance: "Imperium".to_string(),
                biome: "Ash Plains and Cathedrals".to_string(),
                threat_level: 5,
                strategic_value: 7,
                population: "4 Billion Pilgrims".to_string(),
                environmental_hazards: strings(&["Relic Riots", "Faith Storms"]),
                primary_enemy: Some("Chaos Cultists".to_string()),
                planetary_traits: strings(&[
                    "Fanatical Civilians",
                    "Relic Sites",
                    "Ecclesiarchy Support",
                ]),
                mission_modifiers: MissionModifiers {
                    morale_bonus: Some(true),
                    ..Default::default()
                },
                flavor_text: "Billions come seeking redemption. Many find only martyrdom.".to_string(),
            },
            PlanetRecord {
                id: BodyId::new("nekros-beta"),
                name: "Nekros Beta".to_string(),
                classification: "Tomb World".to_string(),
                allegiance: "Unknown".to_string(),
                biome: "Crystal Deserts".to_string(),
                threat_level: 10,
                strategic_value: 10,
                population: "None (Detected)".to_string(),
                environmental_hazards: strings(&["Reality Distortion", "Phase Storms"]),
                primary_enemy: Some("Necrons".to_string()),
                planetary_traits: strings(&[
                    "Reawakening Dynasties",
                    "Living Metal Structures",
                    "Temporal Anomalies",
                ]),
                mission_modifiers: MissionModifiers {
                    enemy_resurrection: Some(true),
                    tech_interference: Some(true),
                    ..Default::default()
                },
                flavor_text: "Auspex readings fluctuate wildly. Something ancient stirs beneath \
                              the sands."
                    .to_string(),
            },
        ]
    }

    /// One-line summary for logs and compact panels.
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] {} / {} (threat {})",
            self.name, self.classification, self.allegiance, self.biome, self.threat_level
        )
    }
}
