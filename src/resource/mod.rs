mod arn;

use {crate::BuilderError, std::str::FromStr};

pub use arn::ArnTemplate;

/// Reference data for a resource type defined by a service.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceTypeMetadata {
    /// The resource type name used by the service authorization reference, e.g. `bucket` or `table`.
    pub name: &'static str,
    pub url: &'static str,

    /// The ARN template for resources of this type.
    pub arn: &'static str,
    pub condition_keys: &'static [&'static str],
}

impl ResourceTypeMetadata {
    /// Parse the ARN template of this resource type.
    pub fn template(&self) -> Result<ArnTemplate, BuilderError> {
        ArnTemplate::from_str(self.arn)
    }
}
