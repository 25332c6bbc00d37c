use std::collections::BTreeMap;
use std::fmt;

use super::simplifiedcard::SimplifiedCard;
use crate::utilities::constants::UNKNOWN_GROUP;

/// Card counts per set name and per card type, alphabetically ordered.
#[derive(Debug, Default, PartialEq)]
pub struct CardSummary {
    pub total: usize,
    pub by_set: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

impl CardSummary {
    pub fn from_cards(cards: &[SimplifiedCard]) -> Self {
        let mut summary = CardSummary {
            total: cards.len(),
            ..Default::default()
        };

        for card in cards {
            *summary.by_set.entry(group_name(&card.set_name)).or_insert(0) += 1;
            *summary.by_type.entry(group_name(&card.card_type)).or_insert(0) += 1;
        }
        summary
    }
}

fn group_name(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNKNOWN_GROUP.to_string())
}

impl fmt::Display for CardSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total cards: {}", self.total)?;

        writeln!(f, "\nCards by set:")?;
        for (set_name, count) in &self.by_set {
            writeln!(f, "  {}: {}", set_name, count)?;
        }

        writeln!(f, "\nCards by type:")?;
        for (card_type, count) in &self.by_type {
            writeln!(f, "  {}: {}", card_type, count)?;
        }
        Ok(())
    }
}
