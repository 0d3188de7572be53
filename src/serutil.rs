use {
    log::debug,
    serde::{
        de::{self, value::SeqAccessDeserializer, Deserializer, SeqAccess, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        fmt::{Formatter, Result as FmtResult},
        ops::Index,
    },
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                match ::serde::Serialize::serialize(self, &mut ser) {
                    Ok(()) => (),
                    Err(e) => {
                        ::log::error!("Failed to serialize: {}", e);
                        return Err(::std::fmt::Error {});
                    }
                };
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => write!(f, "{}", s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// Implement FromStr for a given class by parsing it as JSON.
#[macro_export]
macro_rules! from_str_json {
    ($cls:ident) => {
        impl ::std::str::FromStr for $cls {
            type Err = ::serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match ::serde_json::from_str::<Self>(s) {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        ::log::debug!("Failed to parse: {}: {:?}", s, e);
                        Err(e)
                    }
                }
            }
        }
    };
}

/// StringList allows a JSON field to be a string or list of strings.
///
/// IAM accepts either form for actions, resources, principals, and condition values. A single accumulated value
/// renders as a bare string; anything else renders as an array.
#[derive(Clone, Debug)]
pub enum StringList {
    Single(String),
    List(Vec<String>),
}

impl StringList {
    /// Collapse a list of values into the most compact form: a bare string when there is exactly one value.
    pub fn compact(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            Self::Single(values.remove(0))
        } else {
            Self::List(values)
        }
    }

    pub fn to_vec(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::List(s_list) => s_list.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::List(s_list) => s_list.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(s_list) => s_list.len(),
        }
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

impl PartialEq<StringList> for StringList {
    fn eq(&self, other: &StringList) -> bool {
        match (self, other) {
            (Self::Single(my_el), Self::Single(other_el)) => my_el == other_el,
            (Self::Single(my_el), Self::List(other_el)) => other_el.len() == 1 && my_el == &other_el[0],
            (Self::List(my_el), Self::Single(other_el)) => my_el.len() == 1 && &my_el[0] == other_el,
            (Self::List(my_el), Self::List(other_el)) => my_el == other_el,
        }
    }
}

impl Eq for StringList {}

impl Index<usize> for StringList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Single(s) => {
                if index == 0 {
                    s
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index);
                }
            }
            Self::List(s_list) => &s_list[index],
        }
    }
}

impl From<&str> for StringList {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<&String> for StringList {
    fn from(s: &String) -> Self {
        Self::Single(s.clone())
    }
}

impl From<String> for StringList {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for StringList {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for StringList {
    fn from(v: &[&str]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StringList {
    fn from(v: [&str; N]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

// IAM accepts booleans and numbers as JSON scalars, but the console always writes them as strings. Do the same.
macro_rules! string_list_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StringList {
                fn from(v: $t) -> Self {
                    Self::Single(v.to_string())
                }
            }

            impl From<Vec<$t>> for StringList {
                fn from(v: Vec<$t>) -> Self {
                    Self::List(v.iter().map(|el| el.to_string()).collect())
                }
            }
        )*
    };
}

string_list_from_display!(bool, i32, i64, u32, u64, usize, f64);

struct StringListVisitor {}

impl<'de> Visitor<'de> for StringListVisitor {
    type Value = StringList;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string or list of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = SeqAccessDeserializer::new(access);
        match Vec::<String>::deserialize(deserializer) {
            Ok(l) => Ok(StringList::List(l)),
            Err(e) => {
                debug!("Failed to deserialize string list: {:?}", e);
                Err(<A::Error as de::Error>::invalid_value(Unexpected::Seq, &self))
            }
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringList::Single(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringListVisitor {})
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(v) => v.serialize(serializer),
            Self::List(v) => v.serialize(serializer),
        }
    }
}

/// Serde adapter for `Vec<String>` fields written as a string or list of strings.
pub(crate) mod string_or_vec {
    use {
        super::StringList,
        serde::{Deserialize, Deserializer, Serialize, Serializer},
    };

    pub(crate) fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        StringList::compact(values.to_vec()).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(StringList::deserialize(deserializer)?.into())
    }
}

impl From<StringList> for Vec<String> {
    fn from(sl: StringList) -> Self {
        match sl {
            StringList::Single(s) => vec![s],
            StringList::List(s_list) => s_list,
        }
    }
}
