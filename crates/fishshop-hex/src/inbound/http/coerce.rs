//! Lenient field decoding for form-style clients that send numbers as
//! strings.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn to_f64<E: de::Error>(value: NumberOrText) -> Result<f64, E> {
    match value {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("`{s}` is not a number"))),
    }
}

pub fn de_f64<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    to_f64(NumberOrText::deserialize(d)?)
}

pub fn de_opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    de_f64(d).map(Some)
}

/// Integer with the fractional part dropped, so `"4.7"` reads as 4.
pub fn de_truncated_int<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = to_f64::<D::Error>(NumberOrText::deserialize(d)?)?;
    if !n.is_finite() {
        return Err(<D::Error as de::Error>::custom("expected a finite number"));
    }
    Ok(n.trunc() as i64)
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Pair with `#[serde(default)]`.
pub fn de_nullable<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Probe {
        #[serde(deserialize_with = "de_f64")]
        qty: f64,
        #[serde(default, deserialize_with = "de_opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "de_truncated_int")]
        rating: i64,
        #[serde(default, deserialize_with = "de_nullable")]
        tag: Option<Option<String>>,
    }

    fn probe(v: serde_json::Value) -> Result<Probe, serde_json::Error> {
        serde_json::from_value(v)
    }

    #[test]
    fn numbers_and_numeric_strings() {
        let p = probe(serde_json::json!({"qty": "2.5", "price": 180, "rating": "4.7"})).unwrap();
        assert_eq!(p.qty, 2.5);
        assert_eq!(p.price, Some(180.0));
        assert_eq!(p.rating, 4);
        assert!(p.tag.is_none());

        let p = probe(serde_json::json!({"qty": 3, "rating": 5.2})).unwrap();
        assert_eq!(p.qty, 3.0);
        assert!(p.price.is_none());
        assert_eq!(p.rating, 5);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(probe(serde_json::json!({"qty": "lots"})).is_err());
        assert!(probe(serde_json::json!({"qty": true})).is_err());
        assert!(probe(serde_json::json!({"qty": 1, "price": null})).is_err());
        assert!(probe(serde_json::json!({})).is_err());
    }

    #[test]
    fn nullable_tracks_explicit_null() {
        let p = probe(serde_json::json!({"qty": 1, "tag": null})).unwrap();
        assert_eq!(p.tag, Some(None));
        let p = probe(serde_json::json!({"qty": 1, "tag": "X"})).unwrap();
        assert_eq!(p.tag, Some(Some("X".into())));
    }
}
