use core::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use orderflow_core::{DomainError, Entity, ProductId, ValueObject};

/// Product type tag as stored on a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Normal,
    Seasonal,
    Expirable,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Normal => "NORMAL",
            ProductType::Seasonal => "SEASONAL",
            ProductType::Expirable => "EXPIRABLE",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    /// Tags are matched exactly as stored (`"NORMAL"`, `"SEASONAL"`, `"EXPIRABLE"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(ProductType::Normal),
            "SEASONAL" => Ok(ProductType::Seasonal),
            "EXPIRABLE" => Ok(ProductType::Expirable),
            other => Err(DomainError::invalid_state(format!(
                "unknown product type: {other}"
            ))),
        }
    }
}

/// Selling window of a seasonal product. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ValueObject for SeasonWindow {}

impl SeasonWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `true` when `date` is strictly after the start and strictly before the end.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }

    /// `true` when a restock arriving `lead_time` days after `today` would land
    /// strictly after the season end.
    ///
    /// A restock date past the calendar range counts as after the season.
    pub fn is_over_for(&self, today: NaiveDate, lead_time: u32) -> bool {
        match today.checked_add_days(Days::new(u64::from(lead_time))) {
            Some(restock) => restock > self.end,
            None => true,
        }
    }
}

/// Decoded product type together with the dates that type depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Normal,
    Seasonal(SeasonWindow),
    Expirable { expiry_date: NaiveDate },
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Normal => ProductType::Normal,
            ProductKind::Seasonal(_) => ProductType::Seasonal,
            ProductKind::Expirable { .. } => ProductType::Expirable,
        }
    }
}

/// Catalog record as persisted and exchanged with stores.
///
/// The type tag is kept as free-form text here; [`Product::try_from`] is the
/// boundary where it is checked. Date fields that do not belong to the tagged
/// type are carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub available: u32,
    pub lead_time: u32,
    pub product_type: String,
    pub name: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub season_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub season_end_date: Option<NaiveDate>,
}

impl ProductRecord {
    pub fn normal(id: ProductId, name: impl Into<String>, available: u32, lead_time: u32) -> Self {
        Self {
            id,
            available,
            lead_time,
            product_type: ProductType::Normal.as_str().to_string(),
            name: name.into(),
            expiry_date: None,
            season_start_date: None,
            season_end_date: None,
        }
    }

    pub fn seasonal(
        id: ProductId,
        name: impl Into<String>,
        available: u32,
        lead_time: u32,
        season_start_date: NaiveDate,
        season_end_date: NaiveDate,
    ) -> Self {
        Self {
            product_type: ProductType::Seasonal.as_str().to_string(),
            season_start_date: Some(season_start_date),
            season_end_date: Some(season_end_date),
            ..Self::normal(id, name, available, lead_time)
        }
    }

    pub fn expirable(
        id: ProductId,
        name: impl Into<String>,
        available: u32,
        lead_time: u32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            product_type: ProductType::Expirable.as_str().to_string(),
            expiry_date: Some(expiry_date),
            ..Self::normal(id, name, available, lead_time)
        }
    }
}

/// Catalog product with a checked type.
///
/// Only `available` and `lead_time` change after decoding; everything else is
/// read from the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    record: ProductRecord,
    kind: ProductKind,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn available(&self) -> u32 {
        self.record.available
    }

    pub fn lead_time(&self) -> u32 {
        self.record.lead_time
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    pub fn has_stock(&self) -> bool {
        self.record.available > 0
    }

    /// Take one unit out of stock. Stock never goes below zero.
    pub fn decrement_available(&mut self) {
        self.record.available = self.record.available.saturating_sub(1);
    }

    pub fn set_lead_time(&mut self, days: u32) {
        self.record.lead_time = days;
    }

    pub fn record(&self) -> &ProductRecord {
        &self.record
    }

    pub fn into_record(self) -> ProductRecord {
        self.record
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.record.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let kind = match record.product_type.parse::<ProductType>()? {
            ProductType::Normal => ProductKind::Normal,
            ProductType::Seasonal => {
                let (Some(start), Some(end)) = (record.season_start_date, record.season_end_date)
                else {
                    return Err(DomainError::invalid_state(format!(
                        "seasonal product {} has no season dates",
                        record.id
                    )));
                };
                ProductKind::Seasonal(SeasonWindow::new(start, end))
            }
            ProductType::Expirable => {
                let Some(expiry_date) = record.expiry_date else {
                    return Err(DomainError::invalid_state(format!(
                        "expirable product {} has no expiry date",
                        record.id
                    )));
                };
                ProductKind::Expirable { expiry_date }
            }
        };

        Ok(Self { record, kind })
    }
}

impl From<Product> for ProductRecord {
    fn from(value: Product) -> Self {
        value.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_normal_record() {
        let record = ProductRecord::normal(ProductId::new(), "USB Cable", 30, 15);
        let product = Product::try_from(record.clone()).unwrap();

        assert_eq!(product.kind(), &ProductKind::Normal);
        assert_eq!(product.name(), "USB Cable");
        assert_eq!(product.available(), 30);
        assert_eq!(product.lead_time(), 15);
        assert_eq!(product.id(), &record.id);
    }

    #[test]
    fn stock_changes_keep_identity() {
        let id = ProductId::new();
        let before = Product::try_from(ProductRecord::normal(id, "USB Cable", 3, 0)).unwrap();
        let mut after = before.clone();
        after.decrement_available();

        assert_ne!(before, after);
        assert!(before.same_entity(&after));

        let other = Product::try_from(ProductRecord::normal(ProductId::new(), "USB Cable", 3, 0))
            .unwrap();
        assert!(!before.same_entity(&other));
    }

    #[test]
    fn decodes_seasonal_record() {
        let record = ProductRecord::seasonal(
            ProductId::new(),
            "Watermelon",
            10,
            5,
            date(2026, 6, 1),
            date(2026, 8, 31),
        );
        let product = Product::try_from(record).unwrap();

        match product.kind() {
            ProductKind::Seasonal(window) => {
                assert_eq!(window.start(), date(2026, 6, 1));
                assert_eq!(window.end(), date(2026, 8, 31));
            }
            other => panic!("Expected Seasonal kind, got {other:?}"),
        }
    }

    #[test]
    fn decodes_expirable_record() {
        let record =
            ProductRecord::expirable(ProductId::new(), "Butter", 4, 0, date(2026, 11, 2));
        let product = Product::try_from(record).unwrap();

        assert_eq!(
            product.kind(),
            &ProductKind::Expirable {
                expiry_date: date(2026, 11, 2)
            }
        );
        assert_eq!(product.product_type(), ProductType::Expirable);
    }

    #[test]
    fn rejects_unknown_type_tag() {
        let mut record = ProductRecord::normal(ProductId::new(), "Mystery", 1, 1);
        record.product_type = "PERISHABLE".to_string();

        let err = Product::try_from(record).unwrap_err();
        match err {
            DomainError::InvalidState(msg) => assert!(msg.contains("PERISHABLE")),
            other => panic!("Expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn type_tags_are_case_sensitive() {
        assert!("normal".parse::<ProductType>().is_err());
        assert_eq!("NORMAL".parse::<ProductType>().unwrap(), ProductType::Normal);
    }

    #[test]
    fn rejects_seasonal_without_dates() {
        let mut record = ProductRecord::normal(ProductId::new(), "Pumpkin", 1, 1);
        record.product_type = "SEASONAL".to_string();
        record.season_start_date = Some(date(2026, 10, 1));

        let err = Product::try_from(record).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn rejects_expirable_without_expiry() {
        let mut record = ProductRecord::normal(ProductId::new(), "Milk", 1, 1);
        record.product_type = "EXPIRABLE".to_string();

        let err = Product::try_from(record).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn unrelated_dates_are_ignored_but_preserved() {
        let mut record = ProductRecord::normal(ProductId::new(), "Lamp", 2, 0);
        record.expiry_date = Some(date(2000, 1, 1));

        let product = Product::try_from(record.clone()).unwrap();
        assert_eq!(product.kind(), &ProductKind::Normal);
        assert_eq!(ProductRecord::from(product), record);
    }

    #[test]
    fn season_window_bounds_are_exclusive() {
        let window = SeasonWindow::new(date(2026, 6, 1), date(2026, 6, 30));

        assert!(!window.contains(date(2026, 6, 1)));
        assert!(window.contains(date(2026, 6, 2)));
        assert!(window.contains(date(2026, 6, 29)));
        assert!(!window.contains(date(2026, 6, 30)));
    }

    #[test]
    fn season_is_over_only_when_restock_lands_after_end() {
        let window = SeasonWindow::new(date(2026, 6, 1), date(2026, 6, 30));
        let today = date(2026, 6, 20);

        assert!(!window.is_over_for(today, 10));
        assert!(window.is_over_for(today, 11));
    }

    #[test]
    fn restock_beyond_calendar_counts_as_season_over() {
        let window = SeasonWindow::new(NaiveDate::MIN, NaiveDate::MAX);
        assert!(window.is_over_for(NaiveDate::MAX, 1));
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let record = ProductRecord::normal(ProductId::new(), "Bolt", 1, 0);
        let mut product = Product::try_from(record).unwrap();

        product.decrement_available();
        assert_eq!(product.available(), 0);
        product.decrement_available();
        assert_eq!(product.available(), 0);
        assert!(!product.has_stock());
    }

    #[test]
    fn record_deserializes_with_missing_optional_dates() {
        let id = ProductId::new();
        let json = serde_json::json!({
            "id": id,
            "available": 3,
            "lead_time": 2,
            "product_type": "NORMAL",
            "name": "Pen",
        });

        let record: ProductRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record, ProductRecord::normal(id, "Pen", 3, 2));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a date is in season iff it lies strictly between the bounds.
            #[test]
            fn contains_matches_strict_bounds(
                start_offset in 0i64..400,
                length in 0i64..400,
                probe in -50i64..900
            ) {
                let base = date(2025, 1, 1);
                let start = base + chrono::Duration::days(start_offset);
                let end = start + chrono::Duration::days(length);
                let probe = base + chrono::Duration::days(probe);

                let window = SeasonWindow::new(start, end);
                prop_assert_eq!(window.contains(probe), start < probe && probe < end);
            }

            /// Property: decoding never touches the record's values.
            #[test]
            fn decode_preserves_record(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                available in 0u32..1000,
                lead_time in 0u32..365
            ) {
                let record = ProductRecord::expirable(
                    ProductId::new(),
                    name,
                    available,
                    lead_time,
                    date(2026, 3, 1),
                );
                let product = Product::try_from(record.clone()).unwrap();
                prop_assert_eq!(product.into_record(), record);
            }
        }
    }
}
