use crate::Buid;
use crate::base58::in_alphabet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Buid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Buid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BuidVisitor;

        impl<'de> serde::de::Visitor<'de> for BuidVisitor {
            type Value = Buid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 10 character base58 identifier string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v.len() != Buid::LEN || !v.bytes().all(in_alphabet) {
                    return Err(E::invalid_value(serde::de::Unexpected::Str(v), &self));
                }
                Ok(Buid::normalize(v))
            }
        }

        deserializer.deserialize_str(BuidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrips_through_json() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            event_id: Buid,
        }
        let row = Row {
            event_id: Buid::from_components(1_600_000_000, [0x01, 0x02, 0x03]),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"4ccVRcGv7k"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn accepts_padded_identifiers() {
        let id: Buid = serde_json::from_value(json!("1111111123")).expect("deserialize");
        assert_eq!(id, Buid::from_components(0, [0x00, 0x00, 0x00]));
    }

    #[test]
    fn rejects_malformed_values() {
        let cases = [
            json!("4ccVRcGv7"),   // too short
            json!("4ccVRcGv7kk"), // too long
            json!("0OIl0OIl0O"),  // excluded characters
            json!(""),
            json!(42),
        ];
        for input in cases {
            assert!(
                serde_json::from_value::<Buid>(input.clone()).is_err(),
                "expected rejection of {input}"
            );
        }
    }
}
