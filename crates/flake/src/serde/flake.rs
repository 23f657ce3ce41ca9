use serde::{Deserializer, Serializer};

/// Serializes a [`Flake`](crate::Flake) as its 24 raw big-endian bytes.
///
/// ```
/// use flake::{Flake, as_bytes_flake};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_bytes_flake")]
///     id: Flake,
/// }
/// ```
pub mod as_bytes_flake {
    use super::*;
    use crate::{FLAKE_SIZE, Flake};
    use core::fmt;
    use serde::de::{self, SeqAccess, Visitor};

    pub fn serialize<S>(id: &Flake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(&id.to_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Flake, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> Visitor<'de> for BytesVisitor {
            type Value = Flake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("24 bytes of a Flake")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Flake::from_bytes(v).map_err(de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut buf = [0_u8; FLAKE_SIZE];
                for (i, slot) in buf.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<u8>()?.is_some() {
                    return Err(de::Error::invalid_length(FLAKE_SIZE + 1, &self));
                }
                Ok(Flake::from_be_bytes(buf))
            }
        }

        d.deserialize_bytes(BytesVisitor)
    }
}

/// Serializes a [`Flake`](crate::Flake) as its 32-character base64 string.
#[cfg(feature = "base64")]
pub mod as_base64_flake {
    use super::*;
    use crate::{Error, Flake};
    use core::fmt;
    use serde::de::{self, Visitor};

    pub fn serialize<S>(id: &Flake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Flake, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base64Visitor;

        impl Visitor<'_> for Base64Visitor {
            type Value = Flake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 32-character base64 Flake string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Flake::decode(v).map_err(|e| de::Error::custom(Error::from(e)))
            }
        }

        d.deserialize_str(Base64Visitor)
    }
}

#[cfg(all(test, feature = "std", feature = "base64"))]
mod tests {
    use super::*;
    use crate::Flake;
    use serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct BytesRow {
        #[serde(with = "as_bytes_flake")]
        event_id: Flake,
    }

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Base64Row {
        #[serde(with = "as_base64_flake")]
        event_id: Flake,
    }

    #[test]
    fn bytes_flake_roundtrip() {
        let row = BytesRow {
            event_id: Flake::from_components(1, 2, 3),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"event_id":[0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,2,0,0,0,0,0,0,0,3]}"#
        );
        let back: BytesRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn bytes_flake_rejects_wrong_length() {
        let short = r#"{"event_id":[0,0,0]}"#;
        assert!(serde_json::from_str::<BytesRow>(short).is_err());

        let long = format!(r#"{{"event_id":[{}]}}"#, vec!["0"; 25].join(","));
        assert!(serde_json::from_str::<BytesRow>(&long).is_err());
    }

    #[test]
    fn base64_flake_roundtrip() {
        let row = Base64Row {
            event_id: Flake::MIN,
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"--------------------------------"}"#);
        let back: Base64Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn base64_flake_rejects_invalid_string() {
        let err = serde_json::from_str::<Base64Row>(r#"{"event_id":"not a flake"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid length: 11"), "{err}");
    }
}
