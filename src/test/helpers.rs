use serde_json::{json, Value};

pub const GALLERY_BUILD_ID: &str = "Xk29_fPqLm0aRt7vB3cY1";

pub fn gallery_html() -> &'static str {
    include_str!("card_gallery.html")
}

pub fn minimal_raw_card(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn complete_raw_card(
    id: &str,
    name: &str,
    (set_id, set_label): (&str, &str),
    (type_id, type_label): (&str, &str),
) -> Value {
    json!({
        "id": id,
        "name": name,
        "publicCode": "OGN-001/298",
        "collectorNumber": 1,
        "orientation": "portrait",
        "set": { "value": { "id": set_id, "label": set_label } },
        "cardType": {
            "type": [{ "id": type_id, "label": type_label }],
            "superType": [{ "id": "champion", "label": "Champion" }]
        },
        "rarity": { "value": { "id": "common", "label": "Common" } },
        "domain": {
            "values": [
                { "id": "fury", "label": "Fury" },
                { "id": "chaos", "label": "Chaos" }
            ]
        },
        "energy": { "value": { "id": "5", "label": "5" } },
        "might": { "value": { "id": "5", "label": "5" } },
        "power": { "value": { "id": "1", "label": "1" } },
        "tags": { "tags": ["Noxus"] },
        "text": {
            "richText": {
                "body": "<p>[Accelerate] <strong>Deal 2</strong> &amp; more</p>"
            }
        },
        "illustrator": { "values": [{ "id": "kudos", "label": "Kudos Productions" }] },
        "cardImage": {
            "url": "https://cmsassets.example.com/game_data_live/9a8b7c6d-744x1039.png"
        }
    })
}

pub fn with_image_url(mut card: Value, url: &str) -> Value {
    card["cardImage"] = json!({ "url": url });
    card
}

/// Wraps `cards` the way the gallery data endpoint nests them.
pub fn card_gallery_payload(cards: Vec<Value>) -> Value {
    json!({
        "pageProps": {
            "page": {
                "blades": [
                    { "type": "hero" },
                    { "type": "filters" },
                    { "type": "cardGallery", "cards": { "items": cards } }
                ]
            }
        },
        "__N_SSG": true
    })
}

/// Two complete cards and a third without rarity and domain.
pub fn three_card_payload(image_base: &str) -> Value {
    let first = complete_raw_card(
        "ogn-001",
        "Blazing Scorcher",
        ("OGN", "Origins"),
        ("unit", "Unit"),
    );
    let second = complete_raw_card(
        "ogn-002",
        "Hextech Ray",
        ("OGN", "Origins"),
        ("spell", "Spell"),
    );
    let mut third = complete_raw_card(
        "sfd-003",
        "Wandering Rune",
        ("SFD", "Spiritforged"),
        ("unit", "Unit"),
    );
    if let Some(card) = third.as_object_mut() {
        card.remove("rarity");
        card.remove("domain");
    }

    card_gallery_payload(vec![
        with_image_url(first, &format!("{}/images/aaaa1111-744x1039.png", image_base)),
        with_image_url(second, &format!("{}/images/bbbb2222-744x1039.png", image_base)),
        with_image_url(third, &format!("{}/images/cccc3333-744x1039.png", image_base)),
    ])
}
