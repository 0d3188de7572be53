mod global;

#[allow(non_upper_case_globals)]
pub mod op;
mod value;

pub use op::{ConditionOp, Operator, SetQualifier};
use {
    crate::{display_json, from_str_json, serutil::StringList},
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        collections::{
            btree_map::{IntoIter, Iter, Keys, Values},
            BTreeMap,
        },
        iter::{Extend, FromIterator, IntoIterator},
        ops::Index,
    },
};

/// Condition keys and their values under a single operator.
pub type ConditionMap = BTreeMap<String, StringList>;

/// The `Condition` block of a statement: operators mapped to the keys and values they test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<Operator, ConditionMap>,
}

display_json!(Condition);
from_str_json!(Condition);

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::deserialize(deserializer)?;

        Ok(Self {
            map,
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Set `key` under `op` to `value`.
    ///
    /// Keys under the same operator accumulate; setting a key that is already present under the same operator
    /// replaces its previous value, which is returned.
    pub fn insert<O, K, V>(&mut self, op: O, key: K, value: V) -> Option<StringList>
    where
        O: Into<Operator>,
        K: Into<String>,
        V: Into<StringList>,
    {
        self.map.entry(op.into()).or_default().insert(key.into(), value.into())
    }

    #[inline]
    pub fn contains_key(&self, op: &Operator) -> bool {
        self.map.contains_key(op)
    }

    #[inline]
    pub fn get(&self, op: &Operator) -> Option<&ConditionMap> {
        self.map.get(op)
    }

    /// The value of `key` under `op`, if present.
    pub fn get_value(&self, op: &Operator, key: &str) -> Option<&StringList> {
        self.map.get(op).and_then(|cmap| cmap.get(key))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Operator, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, Operator, ConditionMap> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn remove(&mut self, op: &Operator) -> Option<ConditionMap> {
        self.map.remove(op)
    }

    #[inline]
    pub fn values(&self) -> Values<'_, Operator, ConditionMap> {
        self.map.values()
    }
}

impl Default for Condition {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(Operator, ConditionMap)> for Condition {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (Operator, ConditionMap)>,
    {
        for (op, cmap) in iter {
            self.map.entry(op).or_default().extend(cmap);
        }
    }
}

impl<const N: usize> From<[(Operator, ConditionMap); N]> for Condition {
    #[inline]
    fn from(array: [(Operator, ConditionMap); N]) -> Self {
        Condition {
            map: BTreeMap::from(array),
        }
    }
}

impl FromIterator<(Operator, ConditionMap)> for Condition {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Operator, ConditionMap)>,
    {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Index<&Operator> for Condition {
    type Output = ConditionMap;

    fn index(&self, op: &Operator) -> &ConditionMap {
        self.map.index(op)
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a Operator, &'a ConditionMap);
    type IntoIter = Iter<'a, Operator, ConditionMap>;
    fn into_iter(self) -> Iter<'a, Operator, ConditionMap> {
        self.map.iter()
    }
}

impl IntoIterator for Condition {
    type Item = (Operator, ConditionMap);
    type IntoIter = IntoIter<Operator, ConditionMap>;
    fn into_iter(self) -> IntoIter<Operator, ConditionMap> {
        self.map.into_iter()
    }
}
