//! Feature Vector Assembly

use crate::SymptomTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Number of features the triage model consumes.
pub const FEATURE_DIMENSION: usize = 8;

/// Errors while coercing a patient record into features
#[derive(Debug, Clone, Error)]
pub enum EncodeError {
    /// Input was not a JSON object
    #[error("input is not a JSON object")]
    NotAnObject,

    /// Field could not be coerced to a number
    #[error("{field} is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },

    /// Field was expected to be a string
    #[error("{field} is not a string")]
    NotText { field: &'static str },
}

/// Fixed-order feature vector for triage inference
///
/// Layout: `[age, sexe, temperature, tension_sys, tension_dia,
/// rythme_cardiaque, saturation_o2, symptome]`. Position is significant:
/// the model was trained on exactly this layout, and nothing downstream
/// re-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values
    pub values: [f32; FEATURE_DIMENSION],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_DIMENSION],
        }
    }
}

/// Encodes patient records using a symptom lookup table
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    symptoms: SymptomTable,
}

type Fields = serde_json::Map<String, Value>;

impl FeatureEncoder {
    /// Create an encoder with the given symptom table.
    pub fn new(symptoms: SymptomTable) -> Self {
        Self { symptoms }
    }

    /// Encode a patient record into the fixed feature layout.
    ///
    /// Missing numeric fields default to 0, missing strings to "". Values
    /// are coerced best-effort (numeric strings parse, floats truncate for
    /// integer fields); anything else is an encode error.
    pub fn encode(&self, record: &Value) -> Result<FeatureVector, EncodeError> {
        let fields = record.as_object().ok_or(EncodeError::NotAnObject)?;
        debug!(fields = fields.len(), "encoding patient record");

        let age = int_field(fields, "age")?;
        let sex = match text_field(fields, "sexe")?.to_lowercase().as_str() {
            "homme" => 1.0,
            _ => 0.0,
        };
        let temperature = float_field(fields, "temperature")?;
        let tension_sys = int_field(fields, "tension_sys")?;
        let tension_dia = int_field(fields, "tension_dia")?;
        let heart_rate = int_field(fields, "rythme_cardiaque")?;
        let spo2 = int_field(fields, "saturation_o2")?;
        let symptom = self.symptoms.code(text_field(fields, "symptome")?);

        Ok(FeatureVector {
            values: [
                age as f32,
                sex,
                temperature as f32,
                tension_sys as f32,
                tension_dia as f32,
                heart_rate as f32,
                spo2 as f32,
                symptom as f32,
            ],
        })
    }
}

/// Integer coercion: JSON numbers truncate, integer-formatted strings parse.
fn int_field(fields: &Fields, field: &'static str) -> Result<i64, EncodeError> {
    match fields.get(field) {
        None => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(EncodeError::NotNumeric {
                    field,
                    value: n.to_string(),
                })
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| EncodeError::NotNumeric {
            field,
            value: s.clone(),
        }),
        Some(other) => Err(EncodeError::NotNumeric {
            field,
            value: other.to_string(),
        }),
    }
}

/// Float coercion: JSON numbers pass through, float-formatted strings parse.
fn float_field(fields: &Fields, field: &'static str) -> Result<f64, EncodeError> {
    match fields.get(field) {
        None => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| EncodeError::NotNumeric {
            field,
            value: n.to_string(),
        }),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| EncodeError::NotNumeric {
            field,
            value: s.clone(),
        }),
        Some(other) => Err(EncodeError::NotNumeric {
            field,
            value: other.to_string(),
        }),
    }
}

/// String fields: absent means empty, any non-string value is an error.
fn text_field<'a>(fields: &'a Fields, field: &'static str) -> Result<&'a str, EncodeError> {
    match fields.get(field) {
        None => Ok(""),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(EncodeError::NotText { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_full_record_field_order() {
        let encoder = FeatureEncoder::default();
        let record = json!({
            "age": 67,
            "sexe": "homme",
            "temperature": 39.4,
            "tension_sys": 160,
            "tension_dia": 100,
            "rythme_cardiaque": 120,
            "saturation_o2": 85,
            "symptome": "douleur thoracique"
        });

        let features = encoder.encode(&record).unwrap();
        assert_eq!(
            features.values,
            [67.0, 1.0, 39.4, 160.0, 100.0, 120.0, 85.0, 2.0]
        );
    }

    #[test]
    fn test_empty_record_defaults_to_zeros() {
        let encoder = FeatureEncoder::default();
        let features = encoder.encode(&json!({})).unwrap();
        assert_eq!(features.values, [0.0; FEATURE_DIMENSION]);
    }

    #[test]
    fn test_sex_encoding() {
        let encoder = FeatureEncoder::default();
        let homme = encoder.encode(&json!({"sexe": "Homme"})).unwrap();
        assert_eq!(homme.values[1], 1.0);

        let femme = encoder.encode(&json!({"sexe": "femme"})).unwrap();
        assert_eq!(femme.values[1], 0.0);

        let absent = encoder.encode(&json!({})).unwrap();
        assert_eq!(absent.values[1], 0.0);
    }

    #[test]
    fn test_unknown_and_missing_symptom_both_encode_to_zero() {
        let encoder = FeatureEncoder::default();
        let unknown = encoder.encode(&json!({"symptome": "lombalgie"})).unwrap();
        let missing = encoder.encode(&json!({})).unwrap();
        assert_eq!(unknown.values[7], 0.0);
        assert_eq!(missing.values[7], 0.0);
    }

    #[test]
    fn test_numeric_string_coercion() {
        let encoder = FeatureEncoder::default();
        let features = encoder
            .encode(&json!({"age": "42", "temperature": "37.5"}))
            .unwrap();
        assert_eq!(features.values[0], 42.0);
        assert_eq!(features.values[2], 37.5);
    }

    #[test]
    fn test_float_string_rejected_for_integer_field() {
        let encoder = FeatureEncoder::default();
        let err = encoder.encode(&json!({"age": "37.5"})).unwrap_err();
        assert!(matches!(err, EncodeError::NotNumeric { field: "age", .. }));
    }

    #[test]
    fn test_float_number_truncates_for_integer_field() {
        let encoder = FeatureEncoder::default();
        let features = encoder.encode(&json!({"age": 37.9})).unwrap();
        assert_eq!(features.values[0], 37.0);
    }

    #[test]
    fn test_null_field_is_an_error() {
        let encoder = FeatureEncoder::default();
        assert!(encoder.encode(&json!({"age": null})).is_err());
        assert!(encoder.encode(&json!({"sexe": null})).is_err());
    }

    #[test]
    fn test_non_string_symptom_is_an_error() {
        let encoder = FeatureEncoder::default();
        let err = encoder.encode(&json!({"symptome": 3})).unwrap_err();
        assert!(matches!(err, EncodeError::NotText { field: "symptome" }));
    }

    #[test]
    fn test_non_object_input_is_an_error() {
        let encoder = FeatureEncoder::default();
        let err = encoder.encode(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, EncodeError::NotAnObject));
    }

    proptest! {
        #[test]
        fn encodes_any_numeric_record(
            age in 0i64..120,
            temp in 30.0f64..43.0,
            sys in 60i64..220,
            dia in 30i64..140,
            heart in 30i64..200,
            spo2 in 50i64..100,
        ) {
            let encoder = FeatureEncoder::default();
            let record = json!({
                "age": age,
                "temperature": temp,
                "tension_sys": sys,
                "tension_dia": dia,
                "rythme_cardiaque": heart,
                "saturation_o2": spo2,
            });

            let features = encoder.encode(&record).unwrap();
            prop_assert_eq!(features.values.len(), FEATURE_DIMENSION);
            prop_assert_eq!(features.values[0], age as f32);
            prop_assert_eq!(features.values[2], temp as f32);
            prop_assert_eq!(features.values[3], sys as f32);
            prop_assert_eq!(features.values[4], dia as f32);
            prop_assert_eq!(features.values[5], heart as f32);
            prop_assert_eq!(features.values[6], spo2 as f32);
        }
    }
}
