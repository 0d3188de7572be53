use {
    crate::{display_json, serutil::string_or_vec},
    derive_builder::Builder,
    log::trace,
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The principal namespaces IAM recognises.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PrincipalKind {
    Aws,
    CanonicalUser,
    Federated,
    Service,
}

impl Display for PrincipalKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Aws => f.write_str("AWS"),
            Self::CanonicalUser => f.write_str("CanonicalUser"),
            Self::Federated => f.write_str("Federated"),
            Self::Service => f.write_str("Service"),
        }
    }
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpecifiedPrincipal {
    #[builder(setter(into), default)]
    #[serde(rename = "AWS", default, skip_serializing_if = "Vec::is_empty", with = "string_or_vec")]
    aws: Vec<String>,

    #[builder(setter(into), default)]
    #[serde(rename = "CanonicalUser", default, skip_serializing_if = "Vec::is_empty", with = "string_or_vec")]
    canonical_user: Vec<String>,

    #[builder(setter(into), default)]
    #[serde(rename = "Federated", default, skip_serializing_if = "Vec::is_empty", with = "string_or_vec")]
    federated: Vec<String>,

    #[builder(setter(into), default)]
    #[serde(rename = "Service", default, skip_serializing_if = "Vec::is_empty", with = "string_or_vec")]
    service: Vec<String>,
}

display_json!(SpecifiedPrincipal);

impl SpecifiedPrincipal {
    #[inline]
    pub fn builder() -> SpecifiedPrincipalBuilder {
        SpecifiedPrincipalBuilder::default()
    }

    #[inline]
    pub fn aws(&self) -> &[String] {
        &self.aws
    }

    #[inline]
    pub fn canonical_user(&self) -> &[String] {
        &self.canonical_user
    }

    #[inline]
    pub fn federated(&self) -> &[String] {
        &self.federated
    }

    #[inline]
    pub fn service(&self) -> &[String] {
        &self.service
    }

    pub fn get(&self, kind: PrincipalKind) -> &[String] {
        match kind {
            PrincipalKind::Aws => &self.aws,
            PrincipalKind::CanonicalUser => &self.canonical_user,
            PrincipalKind::Federated => &self.federated,
            PrincipalKind::Service => &self.service,
        }
    }

    /// Add `value` under `kind`. Duplicates are ignored.
    pub fn add(&mut self, kind: PrincipalKind, value: String) {
        let values = match kind {
            PrincipalKind::Aws => &mut self.aws,
            PrincipalKind::CanonicalUser => &mut self.canonical_user,
            PrincipalKind::Federated => &mut self.federated,
            PrincipalKind::Service => &mut self.service,
        };

        if !values.contains(&value) {
            trace!("Adding {} principal {}", kind, value);
            values.push(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aws.is_empty() && self.canonical_user.is_empty() && self.federated.is_empty() && self.service.is_empty()
    }
}
