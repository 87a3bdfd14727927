//! Shaping raw World Bank records into front-end data points.
//!
//! Upstream records carry a dozen fields per observation (indicator and
//! country descriptors, unit, decimals, ...). The front end charts two:
//! `date` and `value`. Shaping projects to exactly those, drops observations
//! the provider reports with a null value, and keeps the provider's order.
//!
//! Both fields pass through as raw JSON. The provider sends years as strings
//! and values as numbers or, for some series, strings; coercing either would
//! change the bytes the front end already depends on.

use serde::Serialize;
use serde_json::Value;

/// One shaped observation: exactly `date` and `value`, value non-null.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPoint {
    pub date: Value,
    pub value: Value,
}

/// Projects raw records to [`DataPoint`]s, dropping any record whose `value`
/// is absent or null. Order is preserved.
pub fn shape(records: &[Value]) -> Vec<DataPoint> {
    records
        .iter()
        .filter_map(|record| {
            let value = record.get("value")?;
            if value.is_null() {
                return None;
            }
            Some(DataPoint {
                date: record.get("date").cloned().unwrap_or(Value::Null),
                value: value.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_null_values_and_preserves_order() {
        let records = [
            json!({"date": "2022", "value": null, "unit": ""}),
            json!({"date": "2021", "value": 3176.0, "countryiso3code": "IND"}),
            json!({"date": "2020", "value": 2674.0}),
        ];
        let points = shape(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, json!("2021"));
        assert_eq!(points[1].date, json!("2020"));
    }

    #[test]
    fn string_values_pass_through_unchanged() {
        let records = [json!({"date": "2021", "value": "100"})];
        let points = shape(&records);
        assert_eq!(serde_json::to_string(&points).unwrap(), r#"[{"date":"2021","value":"100"}]"#);
    }

    #[test]
    fn record_without_value_key_is_dropped() {
        let records = [json!({"date": "2021"}), json!("not an object")];
        assert!(shape(&records).is_empty());
    }

    #[test]
    fn all_null_values_shape_to_empty() {
        let records = [
            json!({"date": "2021", "value": null}),
            json!({"date": "2020", "value": null}),
        ];
        assert!(shape(&records).is_empty());
    }

    #[test]
    fn serializes_with_exactly_two_keys() {
        let points = shape(&[json!({"date": "2019", "value": 5.3, "decimal": 1})]);
        let out: Value = serde_json::to_value(&points).unwrap();
        let obj = out[0].as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("date") && obj.contains_key("value"));
    }
}
