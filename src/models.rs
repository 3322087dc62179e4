//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Config;

/// Marketplace item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Backend may omit the id
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default, alias = "image")]
    pub image_name: Option<String>,
}

/// `GET /items` body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

/// `POST /items` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddItemResponse {
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

/// What one grid tile shows.
///
/// The whole tile is the `<For>` key: the backend usually leaves `id` out, so
/// only the content tells two responses apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemTile {
    pub position: usize,
    pub id: u32,
    pub image_url: String,
    pub name: String,
    pub category: String,
}

impl ItemTile {
    pub fn new(position: usize, item: &Item, config: &Config) -> Self {
        Self {
            position,
            id: item.id,
            image_url: config.image_url(item.image_name.as_deref()),
            name: item.name.clone(),
            category: item.category.clone(),
        }
    }
}

/// One tile per item, in order
pub fn item_tiles(items: &[Item], config: &Config) -> Vec<ItemTile> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| ItemTile::new(position, item, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, image_name: Option<&str>) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            category: "fashion".to_string(),
            image_name: image_name.map(str::to_string),
        }
    }

    #[test]
    fn test_items_response_decoding() {
        let body = r#"{"items":[
            {"id":1,"name":"jacket","category":"fashion","image_name":"a.jpg"},
            {"name":"desk","category":"furniture","image":"b.jpg"},
            {"id":3,"name":"pen","category":"stationery"}
        ]}"#;
        let resp: ItemsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.items.len(), 3);
        assert_eq!(resp.items[0].image_name.as_deref(), Some("a.jpg"));
        // id omitted, image under its storage name
        assert_eq!(resp.items[1].id, 0);
        assert_eq!(resp.items[1].image_name.as_deref(), Some("b.jpg"));
        assert_eq!(resp.items[2].image_name, None);
    }

    #[test]
    fn test_null_or_missing_items_decode_empty() {
        let resp: ItemsResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(resp.items.is_empty());
        let resp: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_one_tile_per_item() {
        let config = Config::new("http://backend", "http://front");
        let items = vec![
            make_item(1, Some("foo.png")),
            make_item(2, Some("")),
            make_item(3, None),
        ];

        let tiles = item_tiles(&items, &config);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].image_url, "http://backend/images/foo.png");
        assert_eq!(tiles[1].image_url, "http://front/logo192.png");
        assert_eq!(tiles[2].image_url, "http://front/logo192.png");
        assert_eq!(tiles[2].name, "Item 3");
        assert_eq!(tiles[2].category, "fashion");
    }

    #[test]
    fn test_tile_keys_unique_with_duplicate_ids() {
        let config = Config::default();
        let items = vec![make_item(0, None), make_item(0, None)];
        let tiles = item_tiles(&items, &config);
        assert_ne!(tiles[0], tiles[1]);
    }

    #[test]
    fn test_changed_item_at_same_position_changes_tile() {
        let config = Config::default();
        let before: ItemsResponse = serde_json::from_str(
            r#"{"items":[{"name":"jacket","category":"fashion","image":"a.jpg"}]}"#,
        )
        .unwrap();
        let after: ItemsResponse = serde_json::from_str(
            r#"{"items":[{"name":"desk","category":"furniture","image":"b.jpg"}]}"#,
        )
        .unwrap();

        let old = item_tiles(&before.items, &config);
        let new = item_tiles(&after.items, &config);
        assert_eq!((old[0].position, old[0].id), (new[0].position, new[0].id));
        assert_ne!(old[0], new[0]);
    }
}
