//! Wire Format
//!
//! Request and response bodies of the catalog endpoints. The save endpoint
//! expects every numeric field as a string.

use serde::{Deserialize, Serialize};

use crate::model::{ServiceItem, ServiceStatus, SubServiceItem};

/// Standard `{ success, data, message }` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /service-items/save`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCatalogRequest {
    pub service_items: Vec<WireServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireServiceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_min: String,
    pub price_max: String,
    pub rate_per_km: String,
    pub icon_name: String,
    pub icon_color: String,
    pub icon_text_color: String,
    pub status: ServiceStatus,
    pub mark_as_delete: bool,
    pub sub_service_items: Vec<WireSubServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSubServiceItem {
    pub id: String,
    pub service_item_id: String,
    pub title: String,
    pub icon_name: String,
    pub description: String,
    pub cost: String,
    pub fee: String,
    pub gross: String,
    pub status: ServiceStatus,
    pub mark_as_delete: bool,
}

impl SaveCatalogRequest {
    pub fn from_items(items: &[ServiceItem]) -> Self {
        Self {
            service_items: items.iter().map(WireServiceItem::from).collect(),
        }
    }
}

impl From<&ServiceItem> for WireServiceItem {
    fn from(item: &ServiceItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            price_min: amount(item.price_min),
            price_max: amount(item.price_max),
            rate_per_km: amount(item.rate_per_km),
            icon_name: item.icon_name.clone(),
            icon_color: item.icon_color.clone(),
            icon_text_color: item.icon_text_color.clone(),
            status: item.status,
            mark_as_delete: item.mark_as_delete,
            sub_service_items: item.sub_service_items.iter().map(WireSubServiceItem::from).collect(),
        }
    }
}

impl From<&SubServiceItem> for WireSubServiceItem {
    fn from(sub: &SubServiceItem) -> Self {
        Self {
            id: sub.id.to_string(),
            service_item_id: sub.service_item_id.to_string(),
            title: sub.title.clone(),
            icon_name: sub.icon_name.clone(),
            description: sub.description.clone(),
            cost: amount(sub.cost),
            fee: amount(sub.fee),
            gross: amount(sub.gross),
            status: sub.status,
            mark_as_delete: sub.mark_as_delete,
        }
    }
}

/// Render an amount the way the backend stores it ("150", "12.5")
pub fn amount(value: f64) -> String {
    value.to_string()
}
