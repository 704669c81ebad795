//! # Domain Types
//!
//! The price table and the derived breakdown.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PriceTable    │   │ PriceBreakdown  │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  unit_product   │   │  items [5]  ────┼──►│  kind           │       │
//! │  │  unit_order     │   │  total          │   │  display_value  │       │
//! │  │  packages{tier} │   └─────────────────┘   │  amount         │       │
//! │  │  accounting_fee │                         │  active         │       │
//! │  │  terminal_fee   │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  PackageTier    │   │    LineKind     │                              │
//! │  │  Basic          │   │  Products       │                              │
//! │  │  Professional   │   │  Orders         │                              │
//! │  │  Premium        │   │  Package        │                              │
//! │  └─────────────────┘   │  Accounting     │                              │
//! │                        │  Terminal       │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_price_cents;

// =============================================================================
// Package Tier
// =============================================================================

/// The bundle a customer can choose. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PackageTier {
    Basic,
    Professional,
    Premium,
}

impl PackageTier {
    /// Every tier, cheapest first.
    pub const ALL: [PackageTier; 3] = [
        PackageTier::Basic,
        PackageTier::Professional,
        PackageTier::Premium,
    ];

    /// The key used in form values and price tables.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Basic => "basic",
            PackageTier::Professional => "professional",
            PackageTier::Premium => "premium",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTier {
    type Err = ValidationError;

    /// Keys are matched exactly; `"Basic"` is not `"basic"`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PackageTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == key)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "package".to_string(),
                allowed: PackageTier::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Price Table
// =============================================================================

/// Unit prices and flat fees. Built once at startup, never mutated.
///
/// ## Default Prices
/// | Item          | Price  |
/// |---------------|--------|
/// | per product   | $0.50  |
/// | per order     | $0.50  |
/// | basic         | $10.00 |
/// | professional  | $20.00 |
/// | premium       | $30.00 |
/// | accounting    | $10.00 |
/// | terminal      | $10.00 |
///
/// Deserializing goes through [`PriceTable::new`], so a table read from JSON
/// is checked the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    /// Price per product.
    pub unit_product: Money,

    /// Price per order.
    pub unit_order: Money,

    /// Flat price for each package tier. A tier missing here prices as 0.
    pub packages: BTreeMap<PackageTier, Money>,

    /// Flat fee when accounting is enabled.
    pub accounting_fee: Money,

    /// Flat fee when the terminal rental is enabled.
    pub terminal_fee: Money,
}

impl PriceTable {
    /// Builds a table and checks that no price is negative.
    pub fn new(
        unit_product: Money,
        unit_order: Money,
        packages: BTreeMap<PackageTier, Money>,
        accounting_fee: Money,
        terminal_fee: Money,
    ) -> CoreResult<Self> {
        let table = PriceTable {
            unit_product,
            unit_order,
            packages,
            accounting_fee,
            terminal_fee,
        };
        table.validate()?;
        Ok(table)
    }

    /// Checks every price in the table.
    ///
    /// ## Errors
    /// `CoreError::InvalidPrice` naming the first negative entry.
    pub fn validate(&self) -> CoreResult<()> {
        let flat = [
            ("unit_product", self.unit_product),
            ("unit_order", self.unit_order),
            ("accounting_fee", self.accounting_fee),
            ("terminal_fee", self.terminal_fee),
        ];
        let tiers = self
            .packages
            .iter()
            .map(|(tier, price)| (tier.as_str(), *price));

        for (field, price) in flat.into_iter().chain(tiers) {
            validate_price_cents(price.cents()).map_err(|_| CoreError::InvalidPrice {
                field: field.to_string(),
                cents: price.cents(),
            })?;
        }

        Ok(())
    }

    /// Looks up a package price by raw key.
    ///
    /// `None` when the key is not a tier, or the tier has no price here.
    pub fn package_price(&self, key: &str) -> Option<(PackageTier, Money)> {
        let tier = key.parse::<PackageTier>().ok()?;
        self.packages.get(&tier).map(|price| (tier, *price))
    }
}

// Wire shape before the prices are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedPriceTable {
    unit_product: Money,
    unit_order: Money,
    packages: BTreeMap<PackageTier, Money>,
    accounting_fee: Money,
    terminal_fee: Money,
}

impl<'de> Deserialize<'de> for PriceTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = UncheckedPriceTable::deserialize(deserializer)?;
        PriceTable::new(
            raw.unit_product,
            raw.unit_order,
            raw.packages,
            raw.accounting_fee,
            raw.terminal_fee,
        )
        .map_err(serde::de::Error::custom)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable {
            unit_product: Money::from_cents(50),
            unit_order: Money::from_cents(50),
            packages: BTreeMap::from([
                (PackageTier::Basic, Money::from_major(10)),
                (PackageTier::Professional, Money::from_major(20)),
                (PackageTier::Premium, Money::from_major(30)),
            ]),
            accounting_fee: Money::from_major(10),
            terminal_fee: Money::from_major(10),
        }
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// Which priced component a line item represents.
///
/// The declaration order is the display order of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Products,
    Orders,
    Package,
    Accounting,
    Terminal,
}

impl LineKind {
    /// Every kind in display order.
    pub const ALL: [LineKind; 5] = [
        LineKind::Products,
        LineKind::Orders,
        LineKind::Package,
        LineKind::Accounting,
        LineKind::Terminal,
    ];

    /// Stable identifier, matches the summary row id in the page.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineKind::Products => "products",
            LineKind::Orders => "orders",
            LineKind::Package => "package",
            LineKind::Accounting => "accounting",
            LineKind::Terminal => "terminal",
        }
    }

    const fn index(&self) -> usize {
        match self {
            LineKind::Products => 0,
            LineKind::Orders => 1,
            LineKind::Package => 2,
            LineKind::Accounting => 3,
            LineKind::Terminal => 4,
        }
    }
}

/// One row of the summary.
///
/// `display_value` is what the row shows next to its label: the count for
/// products and orders, the tier key for the package, `"Yes"` for enabled
/// add-ons. It is empty whenever the item is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub kind: LineKind,
    pub display_value: String,
    pub amount: Money,
    /// Whether the presenter should show this row at all.
    pub active: bool,
}

impl LineItem {
    /// A suppressed row: no label, no charge.
    pub fn inactive(kind: LineKind) -> Self {
        LineItem {
            kind,
            display_value: String::new(),
            amount: Money::zero(),
            active: false,
        }
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The full itemized summary derived from a selection.
///
/// ## Invariants
/// - Exactly five items, in [`LineKind::ALL`] order
/// - `total` is the exact sum of the five amounts
/// - Inactive items carry `Money::zero()`
///
/// Built only by [`crate::pricing::compute_breakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    items: [LineItem; 5],
    total: Money,
}

impl PriceBreakdown {
    /// Assembles a breakdown from its five items, deriving the total.
    pub(crate) fn from_items(items: [LineItem; 5]) -> Self {
        let total = items.iter().map(|item| item.amount).sum();
        PriceBreakdown { items, total }
    }

    /// All five items in display order, active or not.
    pub fn items(&self) -> &[LineItem; 5] {
        &self.items
    }

    /// The item of the given kind.
    pub fn item(&self, kind: LineKind) -> &LineItem {
        &self.items[kind.index()]
    }

    /// Items the presenter should show.
    pub fn active_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| item.active)
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_tier_keys() {
        assert_eq!("basic".parse::<PackageTier>().unwrap(), PackageTier::Basic);
        assert_eq!(
            "professional".parse::<PackageTier>().unwrap(),
            PackageTier::Professional
        );
        assert_eq!("premium".parse::<PackageTier>().unwrap(), PackageTier::Premium);
        assert!("deluxe".parse::<PackageTier>().is_err());
        assert!("Basic".parse::<PackageTier>().is_err());
        assert!("".parse::<PackageTier>().is_err());
    }

    #[test]
    fn test_default_price_table() {
        let table = PriceTable::default();
        assert_eq!(table.unit_product.cents(), 50);
        assert_eq!(table.unit_order.cents(), 50);
        assert_eq!(table.packages.len(), 3);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_package_price_lookup() {
        let table = PriceTable::default();
        assert_eq!(
            table.package_price("professional"),
            Some((PackageTier::Professional, Money::from_major(20)))
        );
        assert_eq!(table.package_price("deluxe"), None);

        let mut partial = table.clone();
        partial.packages.remove(&PackageTier::Premium);
        assert_eq!(partial.package_price("premium"), None);
    }

    #[test]
    fn test_price_table_rejects_negative_prices() {
        let err = PriceTable::new(
            Money::from_cents(50),
            Money::from_cents(50),
            BTreeMap::new(),
            Money::from_cents(-1),
            Money::zero(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidPrice { ref field, cents: -1 } if field == "accounting_fee"
        ));
    }

    #[test]
    fn test_price_table_rejects_negative_package() {
        let mut table = PriceTable::default();
        table.packages.insert(PackageTier::Premium, Money::from_cents(-3000));

        let err = table.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { ref field, .. } if field == "premium"));
    }

    #[test]
    fn test_price_table_json_shape() {
        let json = serde_json::to_value(PriceTable::default()).unwrap();
        assert_eq!(json["unitProduct"], 50);
        assert_eq!(json["packages"]["basic"], 1000);
        assert_eq!(json["terminalFee"], 1000);
    }

    #[test]
    fn test_price_table_deserialize_validates() {
        let json = serde_json::to_value(PriceTable::default()).unwrap();
        let table: PriceTable = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(table, PriceTable::default());

        let mut negative = json;
        negative["unitOrder"] = serde_json::json!(-50);
        let err = serde_json::from_value::<PriceTable>(negative).unwrap_err();
        assert!(err.to_string().contains("unit_order"));
    }

    #[test]
    fn test_breakdown_item_lookup_follows_kind_order() {
        let items = LineKind::ALL.map(LineItem::inactive);
        let breakdown = PriceBreakdown::from_items(items);

        for kind in LineKind::ALL {
            assert_eq!(breakdown.item(kind).kind, kind);
        }
        assert_eq!(breakdown.active_items().count(), 0);
        assert!(breakdown.total().is_zero());
    }
}
