use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utilities::string_manipulators::image_hash_from_url;

/// The stable subset of a gallery card that gets written in simplified mode.
///
/// Fields without `skip_serializing_if` are always written, as `null` when the gallery left
/// them out. The remaining fields only exist when the matching group was present on the raw card.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SimplifiedCard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub collector_number: Option<Value>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub type_id: Option<String>,
    pub rarity: Option<String>,
    pub rarity_id: Option<String>,
    pub image_url: Option<String>,
    pub orientation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub might: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
}

impl SimplifiedCard {
    /// Never fails: anything missing from `card` ends up as `None`.
    pub fn from_raw(card: &Value) -> Self {
        let set = &card["set"]["value"];
        let card_type = &card["cardType"]["type"][0];
        let rarity = &card["rarity"]["value"];
        let image_url = text(&card["cardImage"]["url"]);

        let domain_values = card.get("domain").and_then(|domain| domain.get("values"));

        SimplifiedCard {
            id: text(&card["id"]),
            name: text(&card["name"]),
            code: text(&card["publicCode"]),
            collector_number: scalar(&card["collectorNumber"]),
            set: text(&set["id"]),
            set_name: text(&set["label"]),
            card_type: text(&card_type["label"]),
            type_id: text(&card_type["id"]),
            rarity: text(&rarity["label"]),
            rarity_id: text(&rarity["id"]),
            image_hash: image_url.as_deref().and_then(image_hash_from_url),
            image_url,
            orientation: text(&card["orientation"]),

            domains: domain_values.map(|values| field_of_each(values, "label")),
            domain_ids: domain_values.map(|values| field_of_each(values, "id")),
            energy: value_id(card, "energy"),
            might: value_id(card, "might"),
            power: value_id(card, "power"),
            tags: card.get("tags").map(|tags| {
                tags["tags"].as_array().cloned().unwrap_or_default()
            }),
            ability_html: card.get("text").map(|text| {
                text["richText"]["body"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string()
            }),
            artists: card
                .get("illustrator")
                .map(|illustrator| field_of_each(&illustrator["values"], "label")),
            super_types: card
                .get("cardType")
                .and_then(|card_type| card_type.get("superType"))
                .map(|super_types| field_of_each(super_types, "label")),
        }
    }
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(|s| s.to_string())
}

fn scalar(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other.clone()),
    }
}

/// `card[group].value.id`, but only when `group` exists on the card.
fn value_id(card: &Value, group: &str) -> Option<Value> {
    card.get(group).and_then(|g| scalar(&g["value"]["id"]))
}

fn field_of_each(values: &Value, key: &str) -> Vec<String> {
    values
        .as_array()
        .map(|values| values.iter().filter_map(|v| text(&v[key])).collect())
        .unwrap_or_default()
}
