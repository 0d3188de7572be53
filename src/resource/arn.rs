use {
    crate::{BuilderError, StatementConfig},
    lazy_static::lazy_static,
    log::trace,
    regex::Regex,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

lazy_static! {
    static ref PLACEHOLDER_NAME: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// An ARN template from the service authorization reference, such as
/// `arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}`.
///
/// Placeholders are written `${Name}`. `${Partition}`, `${Region}`, `${Account}` and `${AccountId}` describe the
/// location of the resource and fall back to the [StatementConfig] defaults when the caller does not supply them.
/// Every other placeholder identifies the resource and must be supplied.
///
/// [ArnTemplate] objects are immutable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArnTemplate {
    template: String,
    segments: Vec<Segment>,
}

impl ArnTemplate {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// All placeholder names, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// The placeholders that must be supplied by the caller, in template order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.placeholders().filter(|name| !is_location(name))
    }

    /// Render the template into an ARN.
    ///
    /// `values` maps placeholder names (compared case-insensitively) to their values. Location placeholders that are
    /// absent or empty in `values` take their value from `config`. Any other placeholder without a value is an
    /// [BuilderError::UnresolvedArnPlaceholder] error; a partially rendered ARN is never returned.
    ///
    /// # Example
    /// ```
    /// # use iam_statement_builder::{ArnTemplate, StatementConfig};
    /// # use std::str::FromStr;
    /// let template = ArnTemplate::from_str("arn:${Partition}:svc:${Region}:${Account}:res/${Id}").unwrap();
    /// let arn = template.render(&[("Id", "abc")], &StatementConfig::default()).unwrap();
    /// assert_eq!(arn, "arn:aws:svc:*:*:res/abc");
    /// ```
    pub fn render(&self, values: &[(&str, &str)], config: &StatementConfig) -> Result<String, BuilderError> {
        let mut result = String::with_capacity(self.template.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => result.push_str(literal),
                Segment::Placeholder(name) => {
                    let supplied = values.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| *value);
                    let value = match location_default(name, config) {
                        Some(default) => supplied.filter(|value| !value.is_empty()).unwrap_or(default),
                        None => supplied.ok_or_else(|| BuilderError::UnresolvedArnPlaceholder {
                            placeholder: name.clone(),
                            template: self.template.clone(),
                        })?,
                    };
                    result.push_str(value);
                }
            }
        }

        trace!("Rendered ARN template {} -> {}", self.template, result);
        Ok(result)
    }
}

fn is_location(name: &str) -> bool {
    matches!(name, "Partition" | "Region" | "Account" | "AccountId")
}

fn location_default<'a>(name: &str, config: &'a StatementConfig) -> Option<&'a str> {
    match name {
        "Partition" => Some(config.partition()),
        "Region" => Some(config.region()),
        "Account" | "AccountId" => Some(config.account()),
        _ => None,
    }
}

impl FromStr for ArnTemplate {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut i = s.chars().peekable();

        while let Some(c) = i.next() {
            if c != '$' || i.peek() != Some(&'{') {
                literal.push(c);
                continue;
            }

            i.next();
            let mut name = String::new();
            loop {
                let c = i.next().ok_or_else(|| BuilderError::InvalidArnTemplate(s.to_string()))?;
                if c == '}' {
                    break;
                }

                name.push(c);
            }

            if !PLACEHOLDER_NAME.is_match(&name) {
                return Err(BuilderError::InvalidArnTemplate(s.to_string()));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            template: s.to_string(),
            segments,
        })
    }
}

impl Display for ArnTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ArnTemplate,
        crate::{BuilderError, StatementConfig},
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    const TABLE: &str = "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}";

    #[test_log::test]
    fn check_placeholders() {
        let t = ArnTemplate::from_str("arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}")
            .unwrap();
        assert_eq!(t.placeholders().collect::<Vec<_>>(), vec!["Partition", "Region", "Account", "TableName", "IndexName"]);
        assert_eq!(t.identifiers().collect::<Vec<_>>(), vec!["TableName", "IndexName"]);

        let t = ArnTemplate::from_str("arn:aws:s3:::fixed-bucket").unwrap();
        assert_eq!(t.placeholders().count(), 0);
        assert_eq!(t.to_string(), "arn:aws:s3:::fixed-bucket");
    }

    #[test_log::test]
    fn check_defaults() {
        let t = ArnTemplate::from_str("arn:${Partition}:svc:${Region}:${Account}:res/${Id}").unwrap();
        assert_eq!(t.render(&[("Id", "abc")], &StatementConfig::default()).unwrap(), "arn:aws:svc:*:*:res/abc");

        let legacy = StatementConfig::legacy();
        assert_eq!(t.render(&[("Id", "abc")], &legacy).unwrap(), "arn:aws:svc:::res/abc");

        let config = StatementConfig::builder().partition("aws-cn").region("cn-north-1").build().unwrap();
        assert_eq!(t.render(&[("Id", "abc")], &config).unwrap(), "arn:aws-cn:svc:cn-north-1:*:res/abc");
    }

    #[test_log::test]
    fn check_supplied_values() {
        let t = ArnTemplate::from_str(TABLE).unwrap();
        let config = StatementConfig::default();

        let arn = t
            .render(
                &[("TableName", "Music"), ("Account", "123456789012"), ("Region", "us-west-2"), ("Partition", "aws")],
                &config,
            )
            .unwrap();
        assert_eq!(arn, "arn:aws:dynamodb:us-west-2:123456789012:table/Music");

        // Names match case-insensitively, and empty location values fall back to the defaults.
        let arn = t.render(&[("tableName", "Music"), ("region", "")], &config).unwrap();
        assert_eq!(arn, "arn:aws:dynamodb:*:*:table/Music");

        let t = ArnTemplate::from_str("arn:${Partition}:iam::${AccountId}:role/${RoleNameWithPath}").unwrap();
        let arn = t.render(&[("RoleNameWithPath", "ops/deployer")], &config).unwrap();
        assert_eq!(arn, "arn:aws:iam::*:role/ops/deployer");
    }

    #[test_log::test]
    fn check_policy_variables_survive() {
        let t = ArnTemplate::from_str("arn:${Partition}:s3:::${BucketName}/${ObjectName}").unwrap();
        let arn =
            t.render(&[("BucketName", "home"), ("ObjectName", "${aws:username}/*")], &StatementConfig::default()).unwrap();
        assert_eq!(arn, "arn:aws:s3:::home/${aws:username}/*");
    }

    #[test_log::test]
    fn check_unresolved() {
        let t = ArnTemplate::from_str(TABLE).unwrap();
        let e = t.render(&[("Table", "Music")], &StatementConfig::default()).unwrap_err();
        assert_eq!(
            e,
            BuilderError::UnresolvedArnPlaceholder {
                placeholder: "TableName".to_string(),
                template: TABLE.to_string(),
            }
        );
        assert_eq!(e.to_string(), format!("Unresolved ARN placeholder: ${{TableName}} in {}", TABLE));
    }

    #[test_log::test]
    fn check_malformed() {
        for bad in ["arn:${Partition", "arn:${}:s3:::x", "arn:${Part ition}:s3:::x", "arn:${aws:username}"] {
            assert_eq!(ArnTemplate::from_str(bad).unwrap_err(), BuilderError::InvalidArnTemplate(bad.to_string()));
        }

        // A dollar sign that does not open a placeholder is literal text.
        let t = ArnTemplate::from_str("arn:aws:svc:::cost$center").unwrap();
        assert_eq!(t.render(&[], &StatementConfig::default()).unwrap(), "arn:aws:svc:::cost$center");
    }

    #[test_log::test]
    fn check_derived() {
        let t1a = ArnTemplate::from_str(TABLE).unwrap();
        let t1b = t1a.clone();
        let t2 = ArnTemplate::from_str("arn:${Partition}:s3:::${BucketName}").unwrap();
        assert_eq!(t1a, t1b);
        assert_ne!(t1a, t2);
        assert_eq!(t1a.as_str(), TABLE);
        let _ = format!("{:?}", t2);
    }
}
