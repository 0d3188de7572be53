use {
    crate::{display_json, from_str_json, BuilderError, PolicyStatement, Statement},
    derive_builder::Builder,
    log::debug,
    serde::{
        de::{self, value::MapAccessDeserializer, value::SeqAccessDeserializer, Deserializer, MapAccess, SeqAccess, Visitor},
        ser::{SerializeMap, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Policy versions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PolicyVersion {
    #[default]
    None,
    V2008_10_17,
    V2012_10_17,
}

impl PolicyVersion {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Display for PolicyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => Ok(()),
            Self::V2008_10_17 => f.write_str("2008-10-17"),
            Self::V2012_10_17 => f.write_str("2012-10-17"),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match PolicyVersion::from_str(&value) {
            Ok(v) => Ok(v),
            Err(e) => Err(serde::de::Error::custom(e)),
        }
    }
}

impl FromStr for PolicyVersion {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-10-17" => Ok(Self::V2008_10_17),
            "2012-10-17" => Ok(Self::V2012_10_17),
            _ => Err(BuilderError::InvalidPolicyVersion(s.to_string())),
        }
    }
}

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// A policy document: a version, an optional identifier, and the statements it grants or denies.
///
/// This does not directly derive Deserialize/Serialize to prevent serde from allowing this to be represented as an
/// array.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    /// The version of the policy. Documents produced here use `2012-10-17`, which is required for policy variables
    /// such as `${aws:username}`. A parsed document that omits the version is [PolicyVersion::None].
    #[builder(setter(into), default = "PolicyVersion::V2012_10_17")]
    version: PolicyVersion,

    /// An optional identifier for the policy.
    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    /// The statements of the policy. Always rendered as a list; a single statement map is accepted when parsing.
    #[builder(setter(into), default)]
    statement: Vec<Statement>,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Wrap finished statements in a `2012-10-17` policy document.
    pub fn from_statements<I: IntoIterator<Item = Statement>>(statements: I) -> Self {
        Self {
            version: PolicyVersion::V2012_10_17,
            id: None,
            statement: statements.into_iter().collect(),
        }
    }

    /// Render each builder and wrap the results in a `2012-10-17` policy document.
    pub fn from_builders<'a, I: IntoIterator<Item = &'a PolicyStatement>>(builders: I) -> Self {
        Self::from_statements(builders.into_iter().map(PolicyStatement::build))
    }

    pub fn version(&self) -> PolicyVersion {
        self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &[Statement] {
        &self.statement
    }
}

display_json!(Policy);
from_str_json!(Policy);

struct StatementsVisitor;

impl<'de> Visitor<'de> for StatementsVisitor {
    type Value = Vec<Statement>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "Statement or list of Statement")
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = MapAccessDeserializer::new(access);
        Ok(vec![Statement::deserialize(deserializer)?])
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = SeqAccessDeserializer::new(access);
        match Vec::<Statement>::deserialize(deserializer) {
            Ok(statements) => Ok(statements),
            Err(e) => {
                debug!("Failed to deserialize statement list: {:?}", e);
                Err(e)
            }
        }
    }
}

struct Statements(Vec<Statement>);

impl<'de> Deserialize<'de> for Statements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StatementsVisitor).map(Statements)
    }
}

impl<'de> Visitor<'de> for PolicyBuilder {
    type Value = Policy;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("policy")
    }

    fn visit_map<A: MapAccess<'de>>(mut self, mut access: A) -> Result<Self::Value, A::Error> {
        let builder = &mut self;
        let mut version_seen = false;
        let mut id_seen = false;
        let mut statement_seen = false;

        builder.version(PolicyVersion::None);

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "Version" => {
                    if version_seen {
                        return Err(de::Error::duplicate_field("Version"));
                    }
                    version_seen = true;
                    builder.version(access.next_value::<PolicyVersion>()?);
                }
                "Id" => {
                    if id_seen {
                        return Err(de::Error::duplicate_field("Id"));
                    }
                    id_seen = true;
                    builder.id(access.next_value::<String>()?);
                }
                "Statement" => {
                    if statement_seen {
                        return Err(de::Error::duplicate_field("Statement"));
                    }
                    statement_seen = true;
                    builder.statement(access.next_value::<Statements>()?.0);
                }
                _ => return Err(de::Error::unknown_field(&key, &["Version", "Id", "Statement"])),
            }
        }

        if !statement_seen {
            return Err(de::Error::missing_field("Statement"));
        }

        self.build().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Policy, D::Error> {
        d.deserialize_map(PolicyBuilder::default())
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        if self.version.is_some() {
            state.serialize_entry("Version", &self.version)?;
        }
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{catalog, BuilderError, Effect, Policy, PolicyStatement, PolicyVersion, Statement},
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        std::{
            collections::hash_map::DefaultHasher,
            hash::{Hash, Hasher},
            str::FromStr,
        },
    };

    #[test_log::test]
    fn test_blank_policy_import() {
        let policy = Policy::from_str(indoc! { r#"
            {
                "Version": "2012-10-17",
                "Statement": []
            }"# })
        .unwrap();
        assert_eq!(policy.version(), PolicyVersion::V2012_10_17);
        assert!(policy.id().is_none());
        assert!(policy.statement().is_empty());

        assert_eq!(
            policy.to_string(),
            indoc! { r#"
            {
                "Version": "2012-10-17",
                "Statement": []
            }"#}
        );
    }

    #[test_log::test]
    fn test_from_statements() {
        let mut reader = PolicyStatement::for_service(&catalog::S3);
        reader.sid("Read").to("GetObject").on("arn:aws:s3:::my-bucket/*");
        let mut denier = PolicyStatement::new();
        denier.deny().add("s3:DeleteBucket");

        let policy = Policy::from_builders([&reader, &denier]);
        assert_eq!(policy, Policy::from_statements(vec![reader.build(), denier.build()]));
        assert_eq!(
            policy.to_string(),
            indoc! { r#"
            {
                "Version": "2012-10-17",
                "Statement": [
                    {
                        "Sid": "Read",
                        "Effect": "Allow",
                        "Action": "s3:GetObject",
                        "Resource": "arn:aws:s3:::my-bucket/*"
                    },
                    {
                        "Effect": "Deny",
                        "Action": "s3:DeleteBucket",
                        "Resource": "*"
                    }
                ]
            }"#}
        );

        let parsed = Policy::from_str(&policy.to_string()).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test_log::test]
    fn test_builder() {
        let statement = Statement::builder().effect(Effect::Allow).action("s3:ListBucket").build().unwrap();
        let policy = Policy::builder().id("PolicyId").statement(vec![statement.clone()]).build().unwrap();
        assert_eq!(policy.version(), PolicyVersion::V2012_10_17);
        assert_eq!(policy.id(), Some("PolicyId"));
        assert_eq!(policy.statement(), &[statement]);

        let old = Policy::builder().version(PolicyVersion::V2008_10_17).build().unwrap();
        assert_ne!(old, policy);
        assert!(old.to_string().contains(r#""Version": "2008-10-17""#));
    }

    #[test_log::test]
    fn test_single_statement_and_no_version() {
        let policy = Policy::from_str(indoc! { r#"
            {
                "Statement": {
                    "Effect": "Allow",
                    "Action": "s3:ListBucket",
                    "Resource": "arn:aws:s3:::my-bucket"
                }
            }"# })
        .unwrap();

        assert_eq!(policy.version(), PolicyVersion::None);
        assert_eq!(policy.statement().len(), 1);
        assert!(!policy.to_string().contains("Version"));
    }

    #[test_log::test]
    fn test_bad_documents() {
        let e = Policy::from_str(r#"{"Version": "2012-10-17", "Statement": "Deny"}"#).unwrap_err();
        assert!(e.to_string().starts_with(r#"invalid type: string "Deny", expected Statement or list of Statement"#));

        let e = Policy::from_str(r#"{"Version": "2012-10-17"}"#).unwrap_err();
        assert!(e.to_string().starts_with("missing field `Statement`"));

        let e = Policy::from_str(r#"{"Statement": [], "Statement": []}"#).unwrap_err();
        assert!(e.to_string().starts_with("duplicate field `Statement`"));

        let e = Policy::from_str(r#"{"Statement": [], "Test": true}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown field `Test`, expected one of `Version`, `Id`, `Statement`"));
    }

    #[test_log::test]
    fn test_policy_version() {
        assert_eq!(PolicyVersion::default(), PolicyVersion::None);

        assert_eq!(format!("{}", PolicyVersion::None), "");
        assert_eq!(format!("{}", PolicyVersion::V2008_10_17), "2008-10-17");
        assert_eq!(format!("{}", PolicyVersion::V2012_10_17), "2012-10-17");

        assert_eq!(format!("{:?}", PolicyVersion::None), "None");
        assert_eq!(format!("{:?}", PolicyVersion::V2012_10_17), "V2012_10_17");

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        PolicyVersion::V2008_10_17.hash(&mut h1);
        PolicyVersion::V2012_10_17.hash(&mut h2);
        assert_ne!(h1.finish(), h2.finish());

        assert_eq!(PolicyVersion::from_str("2008-10-17").unwrap(), PolicyVersion::V2008_10_17);
        assert_eq!(PolicyVersion::from_str("2012-10-17").unwrap(), PolicyVersion::V2012_10_17);
        assert_eq!(
            PolicyVersion::from_str("2012-10-18").unwrap_err(),
            BuilderError::InvalidPolicyVersion("2012-10-18".to_string())
        );

        let e = serde_json::from_str::<PolicyVersion>(r#""2012-10-18""#).unwrap_err();
        assert_eq!(e.to_string(), "Invalid policy version: 2012-10-18");

        let e = serde_json::from_str::<PolicyVersion>(r#"2012"#).unwrap_err();
        assert!(e.to_string().starts_with("invalid type: integer `2012`, expected a string"));
    }
}
