pub mod card_collection;
pub mod card_summary;
pub mod simplifiedcard;
