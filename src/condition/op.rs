use {
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// A base IAM condition operator, without the `IfExists` suffix or a set qualifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConditionOp {
    ArnEquals,
    ArnLike,
    ArnNotEquals,
    ArnNotLike,
    BinaryEquals,
    Bool,
    DateEquals,
    DateGreaterThan,
    DateGreaterThanEquals,
    DateLessThan,
    DateLessThanEquals,
    DateNotEquals,
    IpAddress,
    NotIpAddress,
    Null,
    NumericEquals,
    NumericGreaterThan,
    NumericGreaterThanEquals,
    NumericLessThan,
    NumericLessThanEquals,
    NumericNotEquals,
    StringEquals,
    StringEqualsIgnoreCase,
    StringLike,
    StringNotEquals,
    StringNotEqualsIgnoreCase,
    StringNotLike,
}

impl ConditionOp {
    pub const ALL: [ConditionOp; 27] = [
        Self::ArnEquals,
        Self::ArnLike,
        Self::ArnNotEquals,
        Self::ArnNotLike,
        Self::BinaryEquals,
        Self::Bool,
        Self::DateEquals,
        Self::DateGreaterThan,
        Self::DateGreaterThanEquals,
        Self::DateLessThan,
        Self::DateLessThanEquals,
        Self::DateNotEquals,
        Self::IpAddress,
        Self::NotIpAddress,
        Self::Null,
        Self::NumericEquals,
        Self::NumericGreaterThan,
        Self::NumericGreaterThanEquals,
        Self::NumericLessThan,
        Self::NumericLessThanEquals,
        Self::NumericNotEquals,
        Self::StringEquals,
        Self::StringEqualsIgnoreCase,
        Self::StringLike,
        Self::StringNotEquals,
        Self::StringNotEqualsIgnoreCase,
        Self::StringNotLike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArnEquals => "ArnEquals",
            Self::ArnLike => "ArnLike",
            Self::ArnNotEquals => "ArnNotEquals",
            Self::ArnNotLike => "ArnNotLike",
            Self::BinaryEquals => "BinaryEquals",
            Self::Bool => "Bool",
            Self::DateEquals => "DateEquals",
            Self::DateGreaterThan => "DateGreaterThan",
            Self::DateGreaterThanEquals => "DateGreaterThanEquals",
            Self::DateLessThan => "DateLessThan",
            Self::DateLessThanEquals => "DateLessThanEquals",
            Self::DateNotEquals => "DateNotEquals",
            Self::IpAddress => "IpAddress",
            Self::NotIpAddress => "NotIpAddress",
            Self::Null => "Null",
            Self::NumericEquals => "NumericEquals",
            Self::NumericGreaterThan => "NumericGreaterThan",
            Self::NumericGreaterThanEquals => "NumericGreaterThanEquals",
            Self::NumericLessThan => "NumericLessThan",
            Self::NumericLessThanEquals => "NumericLessThanEquals",
            Self::NumericNotEquals => "NumericNotEquals",
            Self::StringEquals => "StringEquals",
            Self::StringEqualsIgnoreCase => "StringEqualsIgnoreCase",
            Self::StringLike => "StringLike",
            Self::StringNotEquals => "StringNotEquals",
            Self::StringNotEqualsIgnoreCase => "StringNotEqualsIgnoreCase",
            Self::StringNotLike => "StringNotLike",
        }
    }

    /// This operator with the `IfExists` suffix.
    #[inline]
    pub const fn if_exists(self) -> Operator {
        Operator::new(self).if_exists()
    }

    /// This operator qualified with `ForAnyValue:`.
    #[inline]
    pub const fn for_any_value(self) -> Operator {
        Operator::new(self).for_any_value()
    }

    /// This operator qualified with `ForAllValues:`.
    #[inline]
    pub const fn for_all_values(self) -> Operator {
        Operator::new(self).for_all_values()
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionOp {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|op| op.as_str() == s).ok_or_else(|| BuilderError::InvalidConditionOperator(s.to_string()))
    }
}

/// How a condition applies to a multivalued request key.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    ForAllValues,
    ForAnyValue,
}

impl SetQualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForAllValues => "ForAllValues",
            Self::ForAnyValue => "ForAnyValue",
        }
    }
}

/// A complete condition operator as it appears in a policy: an optional set qualifier, a base operator, and an
/// optional `IfExists` suffix, e.g. `ForAnyValue:StringEqualsIfExists`.
///
/// Operators order by base operator first, so the operators of a rendered condition block are grouped by type.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Operator {
    op: ConditionOp,
    if_exists: bool,
    qualifier: Option<SetQualifier>,
}

impl Operator {
    pub const fn new(op: ConditionOp) -> Self {
        Self {
            op,
            if_exists: false,
            qualifier: None,
        }
    }

    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub const fn for_any_value(mut self) -> Self {
        self.qualifier = Some(SetQualifier::ForAnyValue);
        self
    }

    pub const fn for_all_values(mut self) -> Self {
        self.qualifier = Some(SetQualifier::ForAllValues);
        self
    }

    #[inline]
    pub fn op(&self) -> ConditionOp {
        self.op
    }

    #[inline]
    pub fn is_if_exists(&self) -> bool {
        self.if_exists
    }

    #[inline]
    pub fn qualifier(&self) -> Option<SetQualifier> {
        self.qualifier
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self::new(op)
    }
}

impl PartialEq<str> for Operator {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(qualifier) = self.qualifier {
            write!(f, "{}:", qualifier.as_str())?;
        }

        f.write_str(self.op.as_str())?;

        if self.if_exists {
            f.write_str("IfExists")?;
        }

        Ok(())
    }
}

impl FromStr for Operator {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (qualifier, rest) = if let Some(rest) = s.strip_prefix("ForAnyValue:") {
            (Some(SetQualifier::ForAnyValue), rest)
        } else if let Some(rest) = s.strip_prefix("ForAllValues:") {
            (Some(SetQualifier::ForAllValues), rest)
        } else {
            (None, s)
        };

        let (if_exists, base) = match rest.strip_suffix("IfExists") {
            Some(base) => (true, base),
            None => (false, rest),
        };

        let op = ConditionOp::from_str(base).map_err(|_| BuilderError::InvalidConditionOperator(s.to_string()))?;
        Ok(Self {
            op,
            if_exists,
            qualifier,
        })
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// The `ArnEquals` operator.
pub const ArnEquals: Operator = Operator::new(ConditionOp::ArnEquals);

/// The `ArnLike` operator.
pub const ArnLike: Operator = Operator::new(ConditionOp::ArnLike);

/// The `ArnNotEquals` operator.
pub const ArnNotEquals: Operator = Operator::new(ConditionOp::ArnNotEquals);

/// The `ArnNotLike` operator.
pub const ArnNotLike: Operator = Operator::new(ConditionOp::ArnNotLike);

/// The `BinaryEquals` operator.
pub const BinaryEquals: Operator = Operator::new(ConditionOp::BinaryEquals);

/// The `Bool` operator.
pub const Bool: Operator = Operator::new(ConditionOp::Bool);

/// The `DateEquals` operator.
pub const DateEquals: Operator = Operator::new(ConditionOp::DateEquals);

/// The `DateGreaterThan` operator.
pub const DateGreaterThan: Operator = Operator::new(ConditionOp::DateGreaterThan);

/// The `DateGreaterThanEquals` operator.
pub const DateGreaterThanEquals: Operator = Operator::new(ConditionOp::DateGreaterThanEquals);

/// The `DateLessThan` operator.
pub const DateLessThan: Operator = Operator::new(ConditionOp::DateLessThan);

/// The `DateLessThanEquals` operator.
pub const DateLessThanEquals: Operator = Operator::new(ConditionOp::DateLessThanEquals);

/// The `DateNotEquals` operator.
pub const DateNotEquals: Operator = Operator::new(ConditionOp::DateNotEquals);

/// The `IpAddress` operator.
pub const IpAddress: Operator = Operator::new(ConditionOp::IpAddress);

/// The `NotIpAddress` operator.
pub const NotIpAddress: Operator = Operator::new(ConditionOp::NotIpAddress);

/// The `Null` operator.
pub const Null: Operator = Operator::new(ConditionOp::Null);

/// The `NumericEquals` operator.
pub const NumericEquals: Operator = Operator::new(ConditionOp::NumericEquals);

/// The `NumericGreaterThan` operator.
pub const NumericGreaterThan: Operator = Operator::new(ConditionOp::NumericGreaterThan);

/// The `NumericGreaterThanEquals` operator.
pub const NumericGreaterThanEquals: Operator = Operator::new(ConditionOp::NumericGreaterThanEquals);

/// The `NumericLessThan` operator.
pub const NumericLessThan: Operator = Operator::new(ConditionOp::NumericLessThan);

/// The `NumericLessThanEquals` operator.
pub const NumericLessThanEquals: Operator = Operator::new(ConditionOp::NumericLessThanEquals);

/// The `NumericNotEquals` operator.
pub const NumericNotEquals: Operator = Operator::new(ConditionOp::NumericNotEquals);

/// The `StringEquals` operator.
pub const StringEquals: Operator = Operator::new(ConditionOp::StringEquals);

/// The `StringEqualsIgnoreCase` operator.
pub const StringEqualsIgnoreCase: Operator = Operator::new(ConditionOp::StringEqualsIgnoreCase);

/// The `StringLike` operator.
pub const StringLike: Operator = Operator::new(ConditionOp::StringLike);

/// The `StringNotEquals` operator.
pub const StringNotEquals: Operator = Operator::new(ConditionOp::StringNotEquals);

/// The `StringNotEqualsIgnoreCase` operator.
pub const StringNotEqualsIgnoreCase: Operator = Operator::new(ConditionOp::StringNotEqualsIgnoreCase);

/// The `StringNotLike` operator.
pub const StringNotLike: Operator = Operator::new(ConditionOp::StringNotLike);
