use std::path::Path;

use serde_json::Value;

use super::simplifiedcard::SimplifiedCard;
use crate::errors::FetchError;
use crate::utilities::file_management::save_to_file;

/// The cards of one run, in gallery order.
#[derive(Debug, Clone, PartialEq)]
pub enum CardCollection {
    Full(Vec<Value>),
    Simplified(Vec<SimplifiedCard>),
}

/// What the image downloader needs to know about a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTarget {
    pub id: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

impl CardCollection {
    pub fn new(raw_cards: Vec<Value>, simplify: bool) -> Self {
        if simplify {
            CardCollection::Simplified(raw_cards.iter().map(SimplifiedCard::from_raw).collect())
        } else {
            CardCollection::Full(raw_cards)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CardCollection::Full(cards) => cards.len(),
            CardCollection::Simplified(cards) => cards.len(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), FetchError> {
        match self {
            CardCollection::Full(cards) => save_to_file(path, cards),
            CardCollection::Simplified(cards) => save_to_file(path, cards),
        }
    }

    pub fn image_targets(&self) -> Vec<ImageTarget> {
        match self {
            CardCollection::Full(cards) => cards
                .iter()
                .map(|card| ImageTarget {
                    id: card["id"].as_str().map(|s| s.to_string()),
                    name: card["name"].as_str().map(|s| s.to_string()),
                    image_url: card["cardImage"]["url"].as_str().map(|s| s.to_string()),
                })
                .collect(),
            CardCollection::Simplified(cards) => cards
                .iter()
                .map(|card| ImageTarget {
                    id: card.id.clone(),
                    name: card.name.clone(),
                    image_url: card.image_url.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{complete_raw_card, minimal_raw_card};
    use crate::utilities::file_management::load_from_json_file;
    use tempfile::tempdir;

    fn raw_cards() -> Vec<Value> {
        vec![
            complete_raw_card("a", "Alpha", ("OGN", "Origins"), ("unit", "Unit")),
            minimal_raw_card("b", "Beta"),
        ]
    }

    #[test]
    fn test_simplify_keeps_order() {
        let collection = CardCollection::new(raw_cards(), true);

        match collection {
            CardCollection::Simplified(cards) => {
                let ids: Vec<_> = cards.iter().map(|c| c.id.clone().unwrap()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            other => panic!("expected simplified cards, got {:?}", other),
        }
    }

    #[test]
    fn test_full_mode_keeps_raw_cards() {
        let collection = CardCollection::new(raw_cards(), false);
        assert_eq!(collection, CardCollection::Full(raw_cards()));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_image_targets_agree_between_modes() {
        let full = CardCollection::new(raw_cards(), false).image_targets();
        let simplified = CardCollection::new(raw_cards(), true).image_targets();

        assert_eq!(full, simplified);
        assert_eq!(
            full[0].image_url.as_deref(),
            Some("https://cmsassets.example.com/game_data_live/9a8b7c6d-744x1039.png")
        );
        assert_eq!(full[1].image_url, None);
    }

    #[test]
    fn test_saved_simplified_cards_read_back_intact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let collection = CardCollection::new(raw_cards(), true);

        collection.save(&path).unwrap();
        let read_back: Vec<SimplifiedCard> = load_from_json_file(&path).unwrap();

        assert_eq!(CardCollection::Simplified(read_back), collection);
    }

    #[test]
    fn test_saved_full_cards_read_back_intact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full.json");
        let collection = CardCollection::new(raw_cards(), false);

        collection.save(&path).unwrap();
        let read_back: Vec<Value> = load_from_json_file(&path).unwrap();

        assert_eq!(read_back, raw_cards());
    }
}
