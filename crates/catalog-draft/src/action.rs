//! Draft Actions
//!
//! Typed edits dispatched against a [`crate::CatalogDraft`].

use crate::model::{EntityId, ServiceItem, ServiceStatus, SubServiceItem};

/// Field patch for a service item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    SetTitle(String),
    SetDescription(String),
    SetPriceMin(f64),
    SetPriceMax(f64),
    SetRatePerKm(f64),
    SetIconName(String),
    SetIconColor(String),
    SetIconTextColor(String),
    SetStatus(ServiceStatus),
}

impl ItemEdit {
    pub fn apply(self, item: &mut ServiceItem) {
        match self {
            ItemEdit::SetTitle(v) => item.title = v,
            ItemEdit::SetDescription(v) => item.description = v,
            ItemEdit::SetPriceMin(v) => item.price_min = v,
            ItemEdit::SetPriceMax(v) => item.price_max = v,
            ItemEdit::SetRatePerKm(v) => item.rate_per_km = v,
            ItemEdit::SetIconName(v) => item.icon_name = v,
            ItemEdit::SetIconColor(v) => item.icon_color = v,
            ItemEdit::SetIconTextColor(v) => item.icon_text_color = v,
            ItemEdit::SetStatus(v) => item.status = v,
        }
    }
}

/// Field patch for a sub-service item
#[derive(Debug, Clone, PartialEq)]
pub enum SubItemEdit {
    SetTitle(String),
    SetDescription(String),
    SetIconName(String),
    SetCost(f64),
    SetFee(f64),
    SetGross(f64),
    SetStatus(ServiceStatus),
}

impl SubItemEdit {
    pub fn apply(self, sub: &mut SubServiceItem) {
        match self {
            SubItemEdit::SetTitle(v) => sub.title = v,
            SubItemEdit::SetDescription(v) => sub.description = v,
            SubItemEdit::SetIconName(v) => sub.icon_name = v,
            SubItemEdit::SetCost(v) => sub.cost = v,
            SubItemEdit::SetFee(v) => sub.fee = v,
            SubItemEdit::SetGross(v) => sub.gross = v,
            SubItemEdit::SetStatus(v) => sub.status = v,
        }
    }
}

/// Everything a user can do to the draft before saving
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    AddServiceItem,
    AddSubServiceItem { parent: EntityId },
    EditItem { id: EntityId, edit: ItemEdit },
    EditSubItem { parent: EntityId, id: EntityId, edit: SubItemEdit },
    ToggleMarkDelete { id: EntityId },
    ToggleSubMarkDelete { parent: EntityId, id: EntityId },
    /// Discard all edits
    Reset,
}

/// Parse a numeric form field. Blank input counts as zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_edit_apply() {
        let mut item = ServiceItem::new(EntityId(1));
        ItemEdit::SetIconColor("#000000".to_string()).apply(&mut item);
        ItemEdit::SetPriceMax(450.0).apply(&mut item);
        ItemEdit::SetStatus(ServiceStatus::Archived).apply(&mut item);
        assert_eq!(item.icon_color, "#000000");
        assert_eq!(item.price_max, 450.0);
        assert_eq!(item.status, ServiceStatus::Archived);
    }

    #[test]
    fn test_sub_item_edit_apply() {
        let mut sub = SubServiceItem::new(EntityId(4), EntityId(1));
        SubItemEdit::SetFee(30.0).apply(&mut sub);
        SubItemEdit::SetTitle("Unclog drain".to_string()).apply(&mut sub);
        assert_eq!(sub.fee, 30.0);
        assert_eq!(sub.title, "Unclog drain");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount(" 12.75 "), Some(12.75));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
