use {
    crate::{
        action::regex_from_glob, condop, AccessLevel, ActionMetadata, Operator, ResourceTypeMetadata,
    },
    log::{debug, warn},
    serde::{Deserialize, Serialize},
};

/// The value type AWS documents for a condition key. It decides which operator a condition uses by default.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ConditionType {
    Arn,
    Binary,
    Bool,
    Date,
    IpAddress,
    Numeric,
    String,
}

impl ConditionType {
    pub fn default_operator(&self) -> Operator {
        match self {
            Self::Arn => condop::ArnLike,
            Self::Binary => condop::BinaryEquals,
            Self::Bool => condop::Bool,
            Self::Date => condop::DateEquals,
            Self::IpAddress => condop::IpAddress,
            Self::Numeric => condop::NumericEquals,
            Self::String => condop::StringLike,
        }
    }
}

/// Reference data for a condition key a service supports.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConditionKeyMetadata {
    /// The fully qualified key. Keys ending in a placeholder such as `s3:ExistingObjectTag/${Key}` describe a family
    /// of keys.
    pub key: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub value_type: ConditionType,
}

impl ConditionKeyMetadata {
    /// Indicates whether `key` is this condition key, or a member of the family of keys it describes.
    ///
    /// Condition keys are compared case-insensitively, as IAM does.
    pub fn matches(&self, key: &str) -> bool {
        match self.key.find("${") {
            None => self.key.eq_ignore_ascii_case(key),
            Some(pos) => {
                let prefix = &self.key[..pos];
                key.len() > prefix.len() && key.is_char_boundary(pos) && key[..pos].eq_ignore_ascii_case(prefix)
            }
        }
    }
}

/// The static reference table for one AWS service.
///
/// A [crate::PolicyStatement] created with [crate::PolicyStatement::for_service] uses the table to qualify action
/// names, expand access levels and globs, render resource ARNs and pick default condition operators.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ServiceMetadata {
    /// The action and condition key prefix, e.g. `s3`.
    pub prefix: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub actions: &'static [ActionMetadata],
    pub resource_types: &'static [ResourceTypeMetadata],
    pub condition_keys: &'static [ConditionKeyMetadata],
}

impl ServiceMetadata {
    /// Look up an action by its unqualified name. Action names are case-insensitive.
    pub fn action(&self, name: &str) -> Option<&ActionMetadata> {
        self.actions.iter().find(|action| action.name.eq_ignore_ascii_case(name))
    }

    pub fn resource_type(&self, name: &str) -> Option<&ResourceTypeMetadata> {
        let result = self.resource_types.iter().find(|rt| rt.name == name);
        if result.is_none() {
            debug!("Service {} has no resource type {}", self.prefix, name);
        }
        result
    }

    pub fn condition_key(&self, key: &str) -> Option<&ConditionKeyMetadata> {
        self.condition_keys.iter().find(|ck| ck.matches(key))
    }

    pub fn actions_with_access_level(&self, level: AccessLevel) -> impl Iterator<Item = &ActionMetadata> {
        self.actions.iter().filter(move |action| action.access_level == level)
    }

    /// Actions whose unqualified name matches `glob`, where `*` matches any run of characters and `?` matches a
    /// single character. Matching is case-insensitive.
    pub fn actions_matching(&self, glob: &str) -> Vec<&ActionMetadata> {
        let regex = match regex_from_glob(glob).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(e) => {
                warn!("Unable to build regex for action glob {}: {}", glob, e);
                return Vec::new();
            }
        };

        self.actions.iter().filter(|action| regex.is_match(action.name)).collect()
    }
}
