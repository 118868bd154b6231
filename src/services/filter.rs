// src/services/filter.rs

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer, Visitor};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::{
    alerts::{Alert, AlertPriority, AlertType},
    inventory::{Category, InventoryItemView, InventoryStatus},
    orders::{Order, OrderStatus},
    stores::{StoreData, StoreStatus, StoreType},
};

/// Seleção de um filtro categórico. `"all"` (ou ausente) desliga a dimensão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice<T> {
    All,
    Only(T),
}

impl<T> Default for FilterChoice<T> {
    fn default() -> Self {
        FilterChoice::All
    }
}

impl<T: PartialEq> FilterChoice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(wanted) => wanted == value,
        }
    }
}

// Aceita "all" ou qualquer valor do enum (com os nomes do JSON).
impl<'de, T: DeserializeOwned> Deserialize<'de> for FilterChoice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChoiceVisitor<T>(PhantomData<T>);

        impl<'de, T: DeserializeOwned> Visitor<'de> for ChoiceVisitor<T> {
            type Value = FilterChoice<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("\"all\" ou um valor de filtro")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value.is_empty() || value.eq_ignore_ascii_case("all") {
                    return Ok(FilterChoice::All);
                }
                let deserializer: de::value::StrDeserializer<'_, E> = value.into_deserializer();
                T::deserialize(deserializer).map(FilterChoice::Only)
            }
        }

        deserializer.deserialize_str(ChoiceVisitor(PhantomData))
    }
}

/// Busca de texto: substring sem diferenciar maiúsculas em qualquer campo.
/// O termo é usado como digitado (espaços contam). Consulta vazia aceita tudo.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Um conjunto de predicados combinados com E.
pub trait RecordFilter<T> {
    fn keep(&self, record: &T) -> bool;

    /// Preserva a ordem de entrada.
    fn apply(&self, records: Vec<T>) -> Vec<T> {
        records.into_iter().filter(|record| self.keep(record)).collect()
    }
}

// ---
// Filtros por tela (vêm da query string)
// ---

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct InventoryFilter {
    pub q: String,
    #[param(value_type = Option<String>, example = "all")]
    pub category: FilterChoice<Category>,
    #[param(value_type = Option<String>, example = "all")]
    pub status: FilterChoice<InventoryStatus>,
}

impl RecordFilter<InventoryItemView> for InventoryFilter {
    fn keep(&self, item: &InventoryItemView) -> bool {
        matches_query(&self.q, &[&item.name])
            && self.category.matches(&item.category)
            && self.status.matches(&item.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct OrderFilter {
    pub q: String,
    #[param(value_type = Option<String>, example = "all")]
    pub status: FilterChoice<OrderStatus>,
}

impl RecordFilter<Order> for OrderFilter {
    fn keep(&self, order: &Order) -> bool {
        matches_query(&self.q, &[&order.customer_name, &order.id]) && self.status.matches(&order.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct StoreFilter {
    pub q: String,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>, example = "all")]
    pub store_type: FilterChoice<StoreType>,
    #[param(value_type = Option<String>, example = "all")]
    pub status: FilterChoice<StoreStatus>,
}

impl RecordFilter<StoreData> for StoreFilter {
    fn keep(&self, store: &StoreData) -> bool {
        matches_query(&self.q, &[&store.name, &store.city, &store.manager])
            && self.store_type.matches(&store.store_type)
            && self.status.matches(&store.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct AlertFilter {
    pub q: String,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>, example = "all")]
    pub alert_type: FilterChoice<AlertType>,
    #[param(value_type = Option<String>, example = "all")]
    pub priority: FilterChoice<AlertPriority>,
}

impl RecordFilter<Alert> for AlertFilter {
    fn keep(&self, alert: &Alert) -> bool {
        matches_query(&self.q, &[&alert.title, &alert.description])
            && self.alert_type.matches(&alert.alert_type)
            && self.priority.matches(&alert.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use proptest::prelude::*;

    #[test]
    fn query_is_case_insensitive_substring() {
        assert!(matches_query("RICE", &["Basmati Rice"]));
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("ord-00", &["Priya", "ORD-002"]));
        assert!(!matches_query("flour", &["Basmati Rice"]));
    }

    #[test]
    fn query_whitespace_is_significant() {
        assert!(!matches_query("rice ", &["Basmati Rice"]));
        assert!(matches_query("basmati ", &["Basmati Rice"]));
        assert!(!matches_query(" ", &["Basmati"]));
    }

    #[test]
    fn all_sentinel_parses_from_json() {
        let filter: OrderFilter = serde_json::from_str(r#"{"status":"all"}"#).unwrap();
        assert_eq!(filter.status, FilterChoice::All);

        let filter: OrderFilter = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(filter.status, FilterChoice::Only(OrderStatus::Pending));

        let filter: StoreFilter = serde_json::from_str(r#"{"type":"medical"}"#).unwrap();
        assert_eq!(filter.store_type, FilterChoice::Only(StoreType::Medical));

        assert!(serde_json::from_str::<OrderFilter>(r#"{"status":"shipped"}"#).is_err());
    }

    #[test]
    fn store_query_searches_name_city_and_manager() {
        let by_city = StoreFilter { q: "pune".into(), ..Default::default() }.apply(seed::stores());
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].id, "ST004");

        let by_manager = StoreFilter { q: "priya".into(), ..Default::default() }.apply(seed::stores());
        assert_eq!(by_manager[0].id, "ST002");
    }

    #[test]
    fn predicates_are_anded() {
        let filter = AlertFilter {
            q: "stock".into(),
            alert_type: FilterChoice::Only(AlertType::LowStock),
            priority: FilterChoice::Only(AlertPriority::Low),
        };
        assert!(filter.apply(seed::alerts()).is_empty());

        let filter = AlertFilter { priority: FilterChoice::Only(AlertPriority::High), ..filter };
        let kept = filter.apply(seed::alerts());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }

    fn order_status() -> impl Strategy<Value = FilterChoice<OrderStatus>> {
        prop_oneof![
            Just(FilterChoice::All),
            Just(FilterChoice::Only(OrderStatus::Pending)),
            Just(FilterChoice::Only(OrderStatus::Processing)),
            Just(FilterChoice::Only(OrderStatus::Completed)),
            Just(FilterChoice::Only(OrderStatus::Cancelled)),
        ]
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(q in "[a-zA-Z0-9 -]{0,6}", status in order_status()) {
            let filter = OrderFilter { q, status };
            let once = filter.apply(seed::orders());
            let twice = filter.apply(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn all_sentinel_is_a_no_op(q in "[a-zA-Z ]{0,6}") {
            let with_all = OrderFilter { q: q.clone(), status: FilterChoice::All }.apply(seed::orders());
            let by_query_only: Vec<Order> = seed::orders()
                .into_iter()
                .filter(|o| matches_query(&q, &[&o.customer_name, &o.id]))
                .collect();
            prop_assert_eq!(with_all, by_query_only);
        }
    }
}
