use {
    crate::{display_json, from_str_json, serutil::StringList, Condition, Effect, Principal},
    derive_builder::Builder,
    serde::{
        de::{Deserializer, MapAccess, Visitor},
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// A finished IAM statement, ready to be placed in a policy document.
///
/// Statements are usually produced by [crate::PolicyStatement::build], but can also be assembled directly with
/// [Statement::builder] or parsed from JSON.
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct Statement {
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sid: Option<String>,

    pub(crate) effect: Effect,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) action: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) not_action: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) resource: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) not_resource: Option<StringList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) not_principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) condition: Option<Condition>,
}

impl Statement {
    pub fn builder() -> StatementBuilder {
        StatementBuilder::default()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn action(&self) -> Option<&StringList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&StringList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&StringList> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn not_resource(&self) -> Option<&StringList> {
        self.not_resource.as_ref()
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn not_principal(&self) -> Option<&Principal> {
        self.not_principal.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

display_json!(Statement);
from_str_json!(Statement);

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatementVisitor {})
    }
}

const FIELDS: &[&str] =
    &["Sid", "Effect", "Action", "NotAction", "Resource", "NotResource", "Principal", "NotPrincipal", "Condition"];

struct StatementVisitor;
impl<'de> Visitor<'de> for StatementVisitor {
    type Value = Statement;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("a map of statement properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Statement, A::Error> {
        let mut builder = Statement::builder();
        let mut seen = [false; 9];

        while let Some(key) = access.next_key::<String>()? {
            let index = match FIELDS.iter().position(|field| *field == key) {
                Some(index) => index,
                None => return Err(serde::de::Error::unknown_field(&key, FIELDS)),
            };

            if seen[index] {
                return Err(serde::de::Error::duplicate_field(FIELDS[index]));
            }
            seen[index] = true;

            match index {
                0 => builder.sid(access.next_value::<String>()?),
                1 => builder.effect(access.next_value::<Effect>()?),
                2 => builder.action(access.next_value::<StringList>()?),
                3 => builder.not_action(access.next_value::<StringList>()?),
                4 => builder.resource(access.next_value::<StringList>()?),
                5 => builder.not_resource(access.next_value::<StringList>()?),
                6 => builder.principal(access.next_value::<Principal>()?),
                7 => builder.not_principal(access.next_value::<Principal>()?),
                _ => builder.condition(access.next_value::<Condition>()?),
            };
        }

        builder.build().map_err(|e| match e {
            StatementBuilderError::ValidationError(s) => {
                let msg2 = s.replace('.', ";").trim_end_matches(|c| c == ';').to_string();
                serde::de::Error::custom(StatementBuilderError::ValidationError(msg2))
            }
            _ => serde::de::Error::custom(e),
        })
    }
}

impl StatementBuilder {
    fn validate(&self) -> Result<(), StatementBuilderError> {
        let mut errors = Vec::with_capacity(4);
        if self.effect.is_none() {
            errors.push("Effect must be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.action, &self.not_action) {
            errors.push("Action and NotAction cannot both be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.resource, &self.not_resource) {
            errors.push("Resource and NotResource cannot both be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.principal, &self.not_principal) {
            errors.push("Principal and NotPrincipal cannot both be set.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StatementBuilderError::ValidationError(errors.join(" ")))
        }
    }
}
