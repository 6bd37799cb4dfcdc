//! # Inventory Definition Files
//!
//! On-disk shape of an inventory and the formats it can be stored in.
//!
//! ## File Format
//! ```yaml
//! items:
//!   A: { id: 1, name: A, cost: 50 }
//!   B: { id: 2, name: B, cost: 30 }
//! discounts:
//!   batch_discount_on_a:
//!     application_context: batch
//!     applicable_item_count: 2
//!     applicable_item_id: 1
//!     fixed_amount_total: 90
//!     usable: true
//!     priority: 1
//! ```
//!
//! Both sections are maps keyed by name. Key order is kept on load and on
//! save, since it breaks priority ties between discounts. A discount's name
//! is its key; a `name` field inside the record is ignored.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use checkout_core::{Discount, InventoryItem};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Named Records
// =============================================================================

/// An ordered `name → record` map.
///
/// Serialized as a plain map; deserialized without sorting or hashing so the
/// file order survives regardless of the format's own map type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecords<T>(pub Vec<(String, T)>);

impl<T> Default for NamedRecords<T> {
    fn default() -> Self {
        NamedRecords(Vec::new())
    }
}

impl<T> NamedRecords<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for NamedRecords<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, record) in &self.0 {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NamedRecords<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordsVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for RecordsVisitor<T> {
            type Value = NamedRecords<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of named records")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(NamedRecords::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut records = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, record)) = access.next_entry::<String, T>()? {
                    records.push((name, record));
                }
                Ok(NamedRecords(records))
            }
        }

        deserializer.deserialize_any(RecordsVisitor(PhantomData))
    }
}

// =============================================================================
// Inventory Definition
// =============================================================================

/// Contents of an inventory file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDefinition {
    #[serde(default)]
    pub items: NamedRecords<InventoryItem>,

    #[serde(default)]
    pub discounts: NamedRecords<Discount>,
}

impl InventoryDefinition {
    /// Builds a definition keyed by item and discount names.
    pub fn from_records(items: &[InventoryItem], discounts: &[Discount]) -> Self {
        InventoryDefinition {
            items: NamedRecords(
                items
                    .iter()
                    .map(|item| (item.name.clone(), item.clone()))
                    .collect(),
            ),
            discounts: NamedRecords(
                discounts
                    .iter()
                    .map(|discount| (discount.name.clone(), discount.clone()))
                    .collect(),
            ),
        }
    }

    /// Splits into records, naming each discount after its key.
    pub fn into_records(self) -> (Vec<InventoryItem>, Vec<Discount>) {
        let items = self.items.0.into_iter().map(|(_, item)| item).collect();
        let discounts = self
            .discounts
            .0
            .into_iter()
            .map(|(name, discount)| Discount { name, ..discount })
            .collect();
        (items, discounts)
    }
}

// =============================================================================
// Formats
// =============================================================================

/// Serialization format of an inventory file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionFormat {
    #[default]
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// `.yml`/`.yaml` → YAML, `.json` → JSON, anything else is rejected.
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse::<DefinitionFormat>().ok())
            .ok_or_else(|| StoreError::unsupported(path))
    }

    /// Parses `content` read from `path`.
    pub fn parse(&self, content: &str, path: &Path) -> StoreResult<InventoryDefinition> {
        match self {
            DefinitionFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| StoreError::yaml(path, e))
            }
            DefinitionFormat::Json => {
                serde_json::from_str(content).map_err(|e| StoreError::json(path, e))
            }
        }
    }

    /// Renders `definition` for writing to `path`.
    pub fn render(&self, definition: &InventoryDefinition, path: &Path) -> StoreResult<String> {
        match self {
            DefinitionFormat::Yaml => {
                serde_yaml::to_string(definition).map_err(|e| StoreError::yaml(path, e))
            }
            DefinitionFormat::Json => {
                serde_json::to_string_pretty(definition).map_err(|e| StoreError::json(path, e))
            }
        }
    }
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionFormat::Yaml => write!(f, "yaml"),
            DefinitionFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for DefinitionFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yml" | "yaml" => Ok(DefinitionFormat::Yaml),
            "json" => Ok(DefinitionFormat::Json),
            other => Err(StoreError::InvalidConfig(format!(
                "Unknown inventory format: '{}'. Valid options: yaml, json",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::discount::ApplicationContext;
    use checkout_core::{ItemId, Money};
    use rust_decimal::Decimal;

    const SAMPLE: &str = r#"
items:
  B: { id: 2, name: B, cost: 30 }
  A: { id: 1, name: A, cost: 50 }
discounts:
  zeta_rule:
    applicable_context: batch
    applicable_item_count: 3
    applicable_item_id: 2
    fixed_amount_total: 75
    usable: true
    priority: 1
  alpha_rule:
    global: true
    deductible_type: percentage
    deductible_amount: 10
    usable: true
"#;

    #[test]
    fn test_yaml_keeps_file_order() {
        let definition = DefinitionFormat::Yaml
            .parse(SAMPLE, Path::new("inventory.yml"))
            .unwrap();
        let (items, discounts) = definition.into_records();

        assert_eq!(items[0].name, "B");
        assert_eq!(items[1].cost, Money::from_units(50));
        assert_eq!(discounts[0].name, "zeta_rule");
        assert_eq!(discounts[1].name, "alpha_rule");
    }

    #[test]
    fn test_discount_fields_from_yaml() {
        let (_, discounts) = DefinitionFormat::Yaml
            .parse(SAMPLE, Path::new("inventory.yml"))
            .unwrap()
            .into_records();

        let batch = &discounts[0];
        assert_eq!(batch.application_context, ApplicationContext::Batch);
        assert_eq!(batch.applicable_item_id, Some(ItemId::new(2)));
        assert_eq!(batch.fixed_amount_total, Some(Money::from_units(75)));
        assert!(batch.is_valid());

        // priority omitted → inert default of 0
        assert_eq!(discounts[1].priority, Decimal::ZERO);
        assert!(discounts[1].is_global());
    }

    #[test]
    fn test_fractional_priority() {
        let yaml = "discounts:\n  d:\n    applicable_item_id: 1\n    usable: true\n    applicable_item_count: 1\n    priority: 1.5\n";
        let (_, discounts) = DefinitionFormat::Yaml
            .parse(yaml, Path::new("inventory.yml"))
            .unwrap()
            .into_records();

        assert_eq!(discounts[0].priority, Decimal::new(15, 1));
        assert!(discounts[0].is_valid());
    }

    #[test]
    fn test_json_keeps_file_order() {
        let json = r#"{
            "items": { "Z": { "id": 9, "name": "Z", "cost": 1 },
                       "A": { "id": 1, "name": "A", "cost": 2 } },
            "discounts": {}
        }"#;
        let (items, discounts) = DefinitionFormat::Json
            .parse(json, Path::new("inventory.json"))
            .unwrap()
            .into_records();

        assert_eq!(items[0].name, "Z");
        assert!(discounts.is_empty());
    }

    #[test]
    fn test_empty_sections() {
        let definition = DefinitionFormat::Yaml
            .parse("items:\ndiscounts:\n", Path::new("inventory.yml"))
            .unwrap();
        assert!(definition.items.is_empty());
        assert!(definition.discounts.is_empty());
    }

    #[test]
    fn test_render_then_parse_preserves_order() {
        let items = vec![
            InventoryItem::new(3, "C", Money::from_units(20)),
            InventoryItem::new(1, "A", Money::from_units(50)),
        ];
        let definition = InventoryDefinition::from_records(&items, &[]);
        let path = Path::new("inventory.yml");

        let text = DefinitionFormat::Yaml.render(&definition, path).unwrap();
        let parsed = DefinitionFormat::Yaml.parse(&text, path).unwrap();

        assert_eq!(parsed, definition);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a/inventory.yml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("inventory.YAML")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("inventory.json")).unwrap(),
            DefinitionFormat::Json
        );
        assert!(matches!(
            DefinitionFormat::from_path(Path::new("inventory.txt")),
            Err(StoreError::UnsupportedFormat { .. })
        ));
        assert!(DefinitionFormat::from_path(Path::new("inventory")).is_err());
    }

    #[test]
    fn test_malformed_yaml_reports_path() {
        let err = DefinitionFormat::Yaml
            .parse("items: [", Path::new("broken.yml"))
            .unwrap_err();
        assert!(err.to_string().contains("broken.yml"));
    }
}
