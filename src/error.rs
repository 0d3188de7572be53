use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Eq, PartialEq)]
pub enum BuilderError {
    InvalidAccessLevel(String),
    InvalidArnTemplate(String),
    InvalidConditionOperator(String),
    InvalidPolicyVersion(String),
    UnknownResourceType(String),

    /// A placeholder in an ARN template had neither a supplied value nor a configured default.
    UnresolvedArnPlaceholder {
        placeholder: String,
        template: String,
    },
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidAccessLevel(level) => write!(f, "Invalid access level: {}", level),
            Self::InvalidArnTemplate(template) => write!(f, "Invalid ARN template: {}", template),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPolicyVersion(version) => write!(f, "Invalid policy version: {}", version),
            Self::UnknownResourceType(resource_type) => write!(f, "Unknown resource type: {}", resource_type),
            Self::UnresolvedArnPlaceholder {
                placeholder,
                template,
            } => write!(f, "Unresolved ARN placeholder: ${{{}}} in {}", placeholder, template),
        }
    }
}

impl Error for BuilderError {}
