//! Catalog Entities
//!
//! Service items and their sub-service items as returned by the catalog API.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entity.
///
/// Server-assigned ids are positive. Entities created in a draft and not yet
/// saved carry negative ids handed out by [`crate::CatalogDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    /// True for ids that came from the server
    pub fn is_persisted(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::id(deserializer).map(EntityId)
    }
}

/// Publication status shared by items and sub-items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ServiceStatus {
    #[default]
    Active,
    Inactive,
    ComingSoon,
    Archived,
    Deleted,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 5] = [
        ServiceStatus::Active,
        ServiceStatus::Inactive,
        ServiceStatus::ComingSoon,
        ServiceStatus::Archived,
        ServiceStatus::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Inactive => "inactive",
            ServiceStatus::ComingSoon => "comingSoon",
            ServiceStatus::Archived => "archived",
            ServiceStatus::Deleted => "deleted",
        }
    }

    /// Parse the wire name; unknown names fall back to `Active`
    pub fn from_str(s: &str) -> Self {
        match s {
            "inactive" => ServiceStatus::Inactive,
            "comingSoon" => ServiceStatus::ComingSoon,
            "archived" => ServiceStatus::Archived,
            "deleted" => ServiceStatus::Deleted,
            _ => ServiceStatus::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "Active",
            ServiceStatus::Inactive => "Inactive",
            ServiceStatus::ComingSoon => "Coming soon",
            ServiceStatus::Archived => "Archived",
            ServiceStatus::Deleted => "Deleted",
        }
    }
}

/// A bookable service category with its sub-services
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_min: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_max: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rate_per_km: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon_color: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon_text_color: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub sub_service_items: Vec<SubServiceItem>,
    /// Tombstone; only ever set in a draft
    #[serde(default)]
    pub mark_as_delete: bool,
}

pub const DEFAULT_ICON: &str = "wrench";
pub const DEFAULT_ICON_COLOR: &str = "#3B82F6";
pub const DEFAULT_ICON_TEXT_COLOR: &str = "#FFFFFF";

impl ServiceItem {
    /// Blank item for a draft
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            title: "New Service".to_string(),
            description: String::new(),
            price_min: 0.0,
            price_max: 0.0,
            rate_per_km: 0.0,
            icon_name: DEFAULT_ICON.to_string(),
            icon_color: DEFAULT_ICON_COLOR.to_string(),
            icon_text_color: DEFAULT_ICON_TEXT_COLOR.to_string(),
            status: ServiceStatus::Active,
            sub_service_items: Vec::new(),
            mark_as_delete: false,
        }
    }

    pub fn sub_item(&self, id: EntityId) -> Option<&SubServiceItem> {
        self.sub_service_items.iter().find(|sub| sub.id == id)
    }

    pub fn sub_item_mut(&mut self, id: EntityId) -> Option<&mut SubServiceItem> {
        self.sub_service_items.iter_mut().find(|sub| sub.id == id)
    }
}

/// A concrete job offered under a service item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubServiceItem {
    pub id: EntityId,
    pub service_item_id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cost: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fee: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub gross: f64,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub mark_as_delete: bool,
}

impl SubServiceItem {
    /// Blank sub-item under `parent`
    pub fn new(id: EntityId, parent: EntityId) -> Self {
        Self {
            id,
            service_item_id: parent,
            title: "New Sub-Service".to_string(),
            icon_name: DEFAULT_ICON.to_string(),
            description: String::new(),
            cost: 0.0,
            fee: 0.0,
            gross: 0.0,
            status: ServiceStatus::Active,
            mark_as_delete: false,
        }
    }
}

/// Decoders tolerant of the backend's mixed number/string encoding
pub(crate) mod lenient {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Null,
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(v as f64),
            Raw::Float(v) => Ok(v),
            Raw::Null => Ok(0.0),
            Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
            Raw::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(de::Error::custom(format!("not a number: {:?}", s))),
            },
        }
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(v),
            Raw::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("not an id: {:?}", s))),
            Raw::Float(v) if v.fract() == 0.0 => Ok(v as i64),
            Raw::Float(v) => Err(de::Error::custom(format!("not an id: {}", v))),
            Raw::Null => Err(de::Error::custom("id is null")),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_numbers() {
        let json = r##"{
            "id": "7",
            "title": "Plumbing",
            "description": null,
            "priceMin": "150.50",
            "priceMax": 900,
            "ratePerKm": null,
            "iconName": "droplet",
            "iconColor": "#0EA5E9",
            "iconTextColor": "#FFFFFF",
            "status": "comingSoon",
            "subServiceItems": [
                {"id": 3, "serviceItemId": 7, "title": "Leak repair", "cost": "200", "fee": 25.5, "gross": "225.5", "status": "inactive"}
            ]
        }"##;
        let item: ServiceItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, EntityId(7));
        assert_eq!(item.description, "");
        assert_eq!(item.price_min, 150.5);
        assert_eq!(item.price_max, 900.0);
        assert_eq!(item.rate_per_km, 0.0);
        assert_eq!(item.status, ServiceStatus::ComingSoon);
        assert!(!item.mark_as_delete);

        let sub = &item.sub_service_items[0];
        assert_eq!(sub.service_item_id, EntityId(7));
        assert_eq!(sub.cost, 200.0);
        assert_eq!(sub.gross, 225.5);
        assert_eq!(sub.status, ServiceStatus::Inactive);
        assert_eq!(sub.icon_name, "");
    }

    #[test]
    fn test_missing_sub_items_decode_empty() {
        let item: ServiceItem = serde_json::from_str(r#"{"id": 1, "title": "Aircon"}"#).unwrap();
        assert!(item.sub_service_items.is_empty());
        assert_eq!(item.status, ServiceStatus::Active);
    }

    #[test]
    fn test_rejects_garbage_price() {
        let result = serde_json::from_str::<ServiceItem>(r#"{"id": 1, "priceMin": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_names() {
        for status in ServiceStatus::ALL {
            assert_eq!(ServiceStatus::from_str(status.as_str()), status);
        }
        assert_eq!(ServiceStatus::from_str("bogus"), ServiceStatus::Active);
    }

    #[test]
    fn test_entity_id_persistence() {
        assert!(EntityId(12).is_persisted());
        assert!(!EntityId(-1).is_persisted());
        assert!(!EntityId(0).is_persisted());
    }
}
