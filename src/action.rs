use {
    crate::BuilderError,
    regex::RegexBuilder,
    serde::{Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The coarse classification AWS assigns to every action for policy review.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
    Tagging,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] =
        [Self::List, Self::Read, Self::Write, Self::PermissionsManagement, Self::Tagging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
            Self::Tagging => "Tagging",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|level| level.as_str() == s).ok_or_else(|| BuilderError::InvalidAccessLevel(s.to_string()))
    }
}

/// A resource type an action can be applied to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceTypeOnAction {
    pub name: &'static str,
    pub required: bool,
}

/// Reference data for a single API action of a service.
///
/// This is documentation, not enforcement: a [crate::PolicyStatement] accepts any action string regardless of
/// whether it appears in a table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ActionMetadata {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub access_level: AccessLevel,
    pub resource_types: &'static [ResourceTypeOnAction],
    pub condition_keys: &'static [&'static str],
    pub dependent_actions: &'static [&'static str],
}

impl ActionMetadata {
    /// The `service:Action` form of this action.
    pub fn qualified_name(&self, service_prefix: &str) -> String {
        qualify(service_prefix, self.name)
    }

    pub fn required_resource_types(&self) -> impl Iterator<Item = &'static str> {
        self.resource_types.iter().filter(|rt| rt.required).map(|rt| rt.name)
    }

    pub fn supports_condition_key(&self, key: &str) -> bool {
        self.condition_keys.iter().any(|k| *k == key)
    }
}

/// Prefix `name` with `service_prefix` unless it is already qualified.
pub(crate) fn qualify(service_prefix: &str, name: &str) -> String {
    if service_prefix.is_empty() || name.contains(':') {
        name.to_string()
    } else {
        format!("{}:{}", service_prefix, name)
    }
}

/// Convert an IAM glob (`*` matches any run of characters, `?` matches one) into an anchored regex.
pub(crate) fn regex_from_glob(s: &str) -> RegexBuilder {
    let mut pattern = String::with_capacity(2 + s.len());
    pattern.push('^');

    for c in s.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => {
                let escaped: String = regex::escape(&String::from(c));
                pattern.push_str(&escaped);
            }
        }
    }
    pattern.push('$');
    RegexBuilder::new(&pattern)
}
