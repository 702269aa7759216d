//! Machine-readable counterpart of the reply text

use serde::{Deserialize, Serialize};

use busana_core::{Result, SlotSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingPick {
    pub top: String,
    pub bottom: String,
    pub shoes: String,
    pub accessory: String,
    pub color_main: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPick {
    pub material: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPick {
    pub color: String,
    pub pattern: String,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPayload {
    pub parameters: SlotSet,
    pub clothing: ClothingPick,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherPick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonPick>,
}

/// One assembled reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub structured_payload: StructuredPayload,
}

impl Response {
    pub fn payload_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.structured_payload)?)
    }
}
