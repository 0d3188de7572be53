use derive_builder::Builder;

pub(crate) const DEFAULT_PARTITION: &str = "aws";
pub(crate) const ANY: &str = "*";

/// Defaults applied when rendering ARN templates for a statement.
///
/// A configuration is fixed when the statement is created; nothing here is shared between statements or mutable after
/// construction.
#[derive(Builder, Clone, Debug, Eq, Hash, PartialEq)]
pub struct StatementConfig {
    /// The partition substituted for `${Partition}`. Defaults to `aws`.
    #[builder(setter(into), default = "DEFAULT_PARTITION.to_string()")]
    partition: String,

    /// The region substituted for `${Region}`. Defaults to `*`.
    #[builder(setter(into), default = "ANY.to_string()")]
    region: String,

    /// The account substituted for `${Account}` and `${AccountId}`. Defaults to `*`.
    #[builder(setter(into), default = "ANY.to_string()")]
    account: String,
}

impl StatementConfig {
    #[inline]
    pub fn builder() -> StatementConfigBuilder {
        StatementConfigBuilder::default()
    }

    /// The convention of older generated statement classes: region and account render as empty strings instead of
    /// `*`.
    pub fn legacy() -> Self {
        Self {
            partition: DEFAULT_PARTITION.to_string(),
            region: String::new(),
            account: String::new(),
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            partition: DEFAULT_PARTITION.to_string(),
            region: ANY.to_string(),
            account: ANY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {crate::StatementConfig, pretty_assertions::assert_eq};

    #[test_log::test]
    fn test_defaults() {
        let config = StatementConfig::default();
        assert_eq!(config.partition(), "aws");
        assert_eq!(config.region(), "*");
        assert_eq!(config.account(), "*");

        assert_eq!(StatementConfig::builder().build().unwrap(), config);
    }

    #[test_log::test]
    fn test_builder() {
        let config =
            StatementConfig::builder().partition("aws-us-gov").account("123456789012").build().unwrap();
        assert_eq!(config.partition(), "aws-us-gov");
        assert_eq!(config.region(), "*");
        assert_eq!(config.account(), "123456789012");
        assert_eq!(config.clone(), config);
    }

    #[test_log::test]
    fn test_legacy() {
        let config = StatementConfig::legacy();
        assert_eq!(config.partition(), "aws");
        assert_eq!(config.region(), "");
        assert_eq!(config.account(), "");
    }
}
