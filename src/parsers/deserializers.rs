use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::value::MapAccessDeserializer;
use serde::de::{Error, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{Archive, Conversation, Node};

/// Custom deserializer for `create_time` that accepts epoch seconds, RFC3339 strings or null
pub fn deserialize_create_time<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            n.as_f64().map(Some).ok_or_else(|| Error::custom("invalid create_time"))
        }
        Value::String(s) => {
            if let Ok(secs) = s.parse::<f64>() {
                return Ok(Some(secs));
            }
            s.parse::<DateTime<Utc>>()
                .map(|dt| Some(dt.timestamp_millis() as f64 / 1000.0))
                .map_err(|e| Error::custom(format!("invalid RFC3339 create_time: {}", e)))
        }
        _ => Err(Error::custom("create_time must be a number, string or null")),
    }
}

/// Treat an explicit `null` the same as a missing field
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collect the values of a conversation's node mapping in document order.
///
/// The node ids are discarded. Keeping document order makes the tie order of
/// equal timestamps reproducible across runs. A repeated node id keeps the position
/// of its first occurrence and the value of its last one.
pub fn deserialize_mapping<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MappingVisitor;

    impl<'de> Visitor<'de> for MappingVisitor {
        type Value = Vec<Node>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of node ids to nodes, or null")
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut nodes = Vec::with_capacity(map.size_hint().unwrap_or(0));
            let mut positions: HashMap<String, usize> = HashMap::new();
            while let Some((id, node)) = map.next_entry::<String, Node>()? {
                match positions.get(&id) {
                    Some(&pos) => nodes[pos] = node,
                    None => {
                        positions.insert(id, nodes.len());
                        nodes.push(node);
                    }
                }
            }
            Ok(nodes)
        }
    }

    deserializer.deserialize_any(MappingVisitor)
}

impl<'de> Deserialize<'de> for Archive {
    /// Resolve the root once: an array is a conversation list, an object is one conversation
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArchiveVisitor;

        impl<'de> Visitor<'de> for ArchiveVisitor {
            type Value = Archive;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of conversations or a single conversation object")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut conversations = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(conversation) = seq.next_element::<Conversation>()? {
                    conversations.push(conversation);
                }
                Ok(Archive::Many(conversations))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                Conversation::deserialize(MapAccessDeserializer::new(map)).map(Archive::Single)
            }
        }

        deserializer.deserialize_any(ArchiveVisitor)
    }
}
