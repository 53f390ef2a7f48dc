use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::core::index::Index;

/// A node of a hierarchical index: either a flat index or another level
#[derive(Debug, Clone, PartialEq)]
pub enum IndexNode {
    Leaf(Index),
    Branch(MultiIndex),
}

impl IndexNode {
    /// The flat index, if this node is a leaf
    pub fn as_index(&self) -> Option<&Index> {
        match self {
            IndexNode::Leaf(idx) => Some(idx),
            IndexNode::Branch(_) => None,
        }
    }

    /// The nested level, if this node is a branch
    pub fn as_multi_index(&self) -> Option<&MultiIndex> {
        match self {
            IndexNode::Branch(multi) => Some(multi),
            IndexNode::Leaf(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            IndexNode::Leaf(idx) => Value::Array(idx.iter().map(Scalar::to_json).collect()),
            IndexNode::Branch(multi) => multi.values(),
        }
    }
}

impl From<Index> for IndexNode {
    fn from(idx: Index) -> Self {
        IndexNode::Leaf(idx)
    }
}

impl From<MultiIndex> for IndexNode {
    fn from(multi: MultiIndex) -> Self {
        IndexNode::Branch(multi)
    }
}

/// A hierarchical index: an ordered mapping from key to a nested level,
/// bottoming out in flat [`Index`] leaves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiIndex {
    levels: IndexMap<Scalar, IndexNode>,
}

impl MultiIndex {
    /// Creates a MultiIndex from ordered `(key, node)` entries
    pub fn new<K, N>(entries: Vec<(K, N)>) -> Self
    where
        K: Into<Scalar>,
        N: Into<IndexNode>,
    {
        Self {
            levels: entries
                .into_iter()
                .map(|(k, n)| (k.into(), n.into()))
                .collect(),
        }
    }

    /// Builds a MultiIndex from a nested JSON object.
    ///
    /// Arrays become leaves and objects become nested levels. A top-level
    /// array is the list-of-tuples form, which is not supported yet.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::parse_object(map),
            Value::Array(rows) => Self::from_arrays(
                rows.iter()
                    .map(|row| match row {
                        Value::Array(items) => Ok(items.iter().map(Scalar::from_json).collect()),
                        _ => Err(Error::Type(
                            "MultiIndex rows must be arrays".to_string(),
                        )),
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            _ => Err(Error::Type(
                "index values must be an ordered map or a list of lists".to_string(),
            )),
        }
    }

    /// Builds a MultiIndex from a list of label tuples
    pub fn from_arrays(_arrays: Vec<Vec<Scalar>>) -> Result<Self> {
        Err(Error::NotImplemented(
            "MultiIndex construction from arrays".to_string(),
        ))
    }

    fn parse_object(map: &Map<String, Value>) -> Result<Self> {
        let mut levels = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            let node = match value {
                Value::Array(items) => {
                    IndexNode::Leaf(items.iter().map(Scalar::from_json).collect())
                }
                Value::Object(inner) => IndexNode::Branch(Self::parse_object(inner)?),
                other => {
                    return Err(Error::Type(format!(
                        "invalid MultiIndex value at key '{}': {}",
                        key, other
                    )))
                }
            };
            levels.insert(Scalar::Str(key.clone()), node);
        }
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Scalar> {
        self.levels.keys()
    }

    /// The node at `key`. Keys must be strings or numbers.
    pub fn get(&self, key: &Scalar) -> Result<Option<&IndexNode>> {
        match key {
            Scalar::Str(_) | Scalar::Int(_) | Scalar::Float(_) => Ok(self.levels.get(key)),
            other => Err(Error::Type(format!(
                "key must be string or number, got {}",
                other.type_name()
            ))),
        }
    }

    /// Walk a sequence of keys down the hierarchy.
    ///
    /// Returns `None` if a key is missing or the path continues past a leaf.
    pub fn get_in(&self, keys: &[Scalar]) -> Result<Option<&IndexNode>> {
        let (first, rest) = match keys.split_first() {
            Some(split) => split,
            None => return Ok(None),
        };

        let mut node = match self.get(first)? {
            Some(node) => node,
            None => return Ok(None),
        };
        for key in rest {
            node = match node {
                IndexNode::Branch(multi) => match multi.get(key)? {
                    Some(next) => next,
                    None => return Ok(None),
                },
                IndexNode::Leaf(_) => return Ok(None),
            };
        }
        Ok(Some(node))
    }

    /// Nested plain-value view: leaves become arrays of labels
    pub fn values(&self) -> Value {
        let map: Map<String, Value> = self
            .levels
            .iter()
            .map(|(k, node)| (k.to_string(), node.to_json()))
            .collect();
        Value::Object(map)
    }
}
