use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product card as assembled by the data layer: master fields plus the
/// cumulative counters accumulated from shipment and billing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produk {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub is_active: bool,
    pub is_priority: bool,
    /// Rank among priority products. Present-but-zero is distinct from absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_order: Option<i64>,
    pub total_shipped: i64,
    pub total_sold: i64,
    pub total_returned: i64,
    /// Current stock at the outlet. Expected to equal
    /// shipped - sold - returned, but supplied as its own field and not
    /// revalidated here.
    pub stock_on_hand: i64,
    pub total_revenue: f64,
}

impl Produk {
    pub fn stock_health(&self) -> StockHealth {
        StockHealth::classify(self.stock_on_hand)
    }
}

// ============================================================================
// Derived stock position
// ============================================================================

/// Stock position relative to zero. Exactly one variant applies to any
/// on-hand quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockHealth {
    Deficit,
    Empty,
    Ok,
}

impl StockHealth {
    pub fn classify(stock_on_hand: i64) -> Self {
        match stock_on_hand {
            n if n < 0 => StockHealth::Deficit,
            0 => StockHealth::Empty,
            _ => StockHealth::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_splits_on_sign() {
        assert_eq!(StockHealth::classify(-5), StockHealth::Deficit);
        assert_eq!(StockHealth::classify(-1), StockHealth::Deficit);
        assert_eq!(StockHealth::classify(0), StockHealth::Empty);
        assert_eq!(StockHealth::classify(1), StockHealth::Ok);
        assert_eq!(StockHealth::classify(12), StockHealth::Ok);
    }

    #[test]
    fn stock_health_follows_supplied_value() {
        // The counters say 15 but the supplied stock is negative; the
        // classification trusts the supplied field.
        let p = Produk {
            id: 1,
            name: "Gula Pasir 1kg".to_string(),
            unit_price: 15000.0,
            is_active: true,
            is_priority: false,
            priority_order: None,
            total_shipped: 100,
            total_sold: 80,
            total_returned: 5,
            stock_on_hand: -3,
            total_revenue: 1_200_000.0,
        };
        assert_eq!(p.stock_health(), StockHealth::Deficit);
    }

    #[test]
    fn missing_priority_order_deserializes_as_none() {
        let json = r#"{
            "id": 7,
            "name": "Kopi Bubuk 250g",
            "unitPrice": 15000,
            "isActive": true,
            "isPriority": true,
            "totalShipped": 100,
            "totalSold": 80,
            "totalReturned": 5,
            "stockOnHand": 15,
            "totalRevenue": 1200000
        }"#;
        let p: Produk = serde_json::from_str(json).unwrap();
        assert_eq!(p.priority_order, None);
        assert!(p.is_priority);
    }

    #[test]
    fn rank_zero_stays_distinct_from_absent() {
        let json = r#"{
            "id": 7,
            "name": "Kopi Bubuk 250g",
            "unitPrice": 15000,
            "isActive": true,
            "isPriority": true,
            "priorityOrder": 0,
            "totalShipped": 100,
            "totalSold": 80,
            "totalReturned": 5,
            "stockOnHand": 15,
            "totalRevenue": 1200000
        }"#;
        let p: Produk = serde_json::from_str(json).unwrap();
        assert_eq!(p.priority_order, Some(0));
    }

    #[test]
    fn absent_rank_is_skipped_on_serialize() {
        let p = Produk {
            id: 2,
            name: "Teh Celup".to_string(),
            unit_price: 8000.0,
            is_active: false,
            is_priority: false,
            priority_order: None,
            total_shipped: 10,
            total_sold: 10,
            total_returned: 0,
            stock_on_hand: 0,
            total_revenue: 80_000.0,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("priorityOrder"));
    }
}
