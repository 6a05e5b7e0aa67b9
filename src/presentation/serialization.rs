//! Serde helpers for fields whose wire shape varies

/// Deserializes an optional list of ids sent either as a JSON array or as a single
/// comma-separated string
///
/// Serializes back as an array.
pub mod id_list_opt {
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serialize, Serializer};
    use std::fmt;

    /// Serializes the list as a JSON array
    pub fn serialize<S>(value: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    /// Accepts `null`, `"1,2"` or `["1", "2"]`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdListVisitor;

        impl<'de> Visitor<'de> for IdListVisitor {
            type Value = Option<Vec<String>>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a list of ids or a comma-separated string")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                ))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut ids = Vec::new();
                while let Some(id) = seq.next_element::<String>()? {
                    ids.push(id);
                }
                Ok(Some(ids))
            }
        }

        deserializer.deserialize_option(IdListVisitor)
    }
}

/// Deserializes an optional decimal without ever rounding it
///
/// Values that need more precision than [`Decimal`](rust_decimal::Decimal) can hold
/// are rejected instead of being rounded to the nearest representable value.
pub mod exact_decimal_opt {
    use rust_decimal::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serialize, Serializer};
    use std::fmt;

    /// Serializes the decimal as a string, keeping its scale
    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    /// Accepts `null`, a decimal string or an integer
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExactDecimalVisitor;

        impl<'de> Visitor<'de> for ExactDecimalVisitor {
            type Value = Option<Decimal>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal number as a string")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Decimal::from_str_exact(value.trim())
                    .map(Some)
                    .map_err(|e| E::custom(format!("invalid decimal {value:?}: {e}")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Some(Decimal::from(value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Some(Decimal::from(value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                self.visit_str(&value.to_string())
            }
        }

        deserializer.deserialize_option(ExactDecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, with = "super::id_list_opt")]
        ids: Option<Vec<String>>,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Amount {
        #[serde(default, with = "super::exact_decimal_opt")]
        amount: Option<rust_decimal::Decimal>,
    }

    #[test]
    fn accepts_arrays_and_comma_strings() {
        let a: Holder = serde_json::from_str(r#"{"ids": ["1", "2"]}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"ids": "1, 2"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"ids":["1","2"]}"#);
    }

    #[test]
    fn absent_and_null_are_none() {
        let a: Holder = serde_json::from_str("{}").unwrap();
        let b: Holder = serde_json::from_str(r#"{"ids": null}"#).unwrap();
        assert_eq!(a.ids, None);
        assert_eq!(b.ids, None);
    }

    #[test]
    fn decimals_keep_scale_and_accept_integers() {
        let a: Amount = serde_json::from_str(r#"{"amount": "100.0000"}"#).unwrap();
        assert_eq!(a.amount.unwrap().to_string(), "100.0000");
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"amount":"100.0000"}"#);
        let b: Amount = serde_json::from_str(r#"{"amount": 250000}"#).unwrap();
        assert_eq!(b.amount.unwrap().to_string(), "250000");
        let c: Amount = serde_json::from_str("{}").unwrap();
        assert_eq!(c.amount, None);
    }

    #[test]
    fn decimals_that_would_round_are_rejected() {
        let result = serde_json::from_str::<Amount>(r#"{"amount": "0.12345678901234567890123456789"}"#);
        assert!(result.is_err());
        let fits: Amount =
            serde_json::from_str(r#"{"amount": "0.1234567890123456789012345678"}"#).unwrap();
        assert_eq!(fits.amount.unwrap().to_string(), "0.1234567890123456789012345678");
    }
}
