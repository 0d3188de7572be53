use {
    crate::{
        action::qualify, condop, display_json, serutil::StringList, AccessLevel, ArnTemplate, BuilderError, Condition,
        Effect, Operator, Principal, PrincipalKind, ServiceMetadata, SpecifiedPrincipal, Statement, StatementConfig,
    },
    log::{debug, trace},
    scratchstack_arn::Arn,
    serde::{Serialize, Serializer},
    std::str::FromStr,
};

/// A single IAM policy statement under construction.
///
/// Every mutation returns `&mut Self` so calls chain:
///
/// ```
/// # use iam_statement_builder::{catalog, PolicyStatement};
/// let mut ps = PolicyStatement::for_service(&catalog::S3);
/// ps.to("GetObject").on("arn:aws:s3:::my-bucket/*").if_aws_secure_transport(None);
/// let statement = ps.build();
/// assert_eq!(&statement.action().unwrap()[0], "s3:GetObject");
/// ```
///
/// The builder is permissive: any action, resource or condition key is accepted whether or not the service table
/// documents it. The only failures come from rendering ARN templates.
///
/// A statement may optionally carry a [ServiceMetadata] table. The table supplies the prefix used by [to][Self::to]
/// and for unqualified condition keys, the actions behind the access-level and glob helpers, the ARN templates used
/// by [on_resource][Self::on_resource], and the default operators of documented condition keys.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PolicyStatement {
    service: Option<&'static ServiceMetadata>,
    config: StatementConfig,
    sid: Option<String>,
    effect: Effect,
    actions: Vec<String>,
    resources: Vec<String>,
    principal: Option<Principal>,
    conditions: Condition,
    not_actions: bool,
    not_resources: bool,
    not_principals: bool,
}

impl PolicyStatement {
    /// Create an empty `Allow` statement with no service table and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sid<S: Into<String>>(sid: S) -> Self {
        Self {
            sid: Some(sid.into()),
            ..Self::default()
        }
    }

    pub fn with_config(config: StatementConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a statement for the service described by `service`.
    pub fn for_service(service: &'static ServiceMetadata) -> Self {
        Self::for_service_with_config(service, StatementConfig::default())
    }

    pub fn for_service_with_config(service: &'static ServiceMetadata, config: StatementConfig) -> Self {
        Self {
            service: Some(service),
            config,
            ..Self::default()
        }
    }

    pub fn sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn effect(&mut self, effect: Effect) -> &mut Self {
        self.effect = effect;
        self
    }

    #[inline]
    pub fn allow(&mut self) -> &mut Self {
        self.effect(Effect::Allow)
    }

    #[inline]
    pub fn deny(&mut self) -> &mut Self {
        self.effect(Effect::Deny)
    }

    /// Add a fully qualified action such as `s3:GetObject`. Adding an action that is already present has no effect.
    pub fn add<S: Into<String>>(&mut self, action: S) -> &mut Self {
        let action = action.into();
        if !self.actions.contains(&action) {
            trace!("Adding action {}", action);
            self.actions.push(action);
        }
        self
    }

    /// Add an action of this statement's service by its bare name. Names that already contain `:` are added as-is.
    pub fn to(&mut self, action: &str) -> &mut Self {
        let action = qualify(self.service_prefix().unwrap_or_default(), action);
        self.add(action)
    }

    /// Add every action of this statement's service (`<prefix>:*`).
    pub fn all_actions(&mut self) -> &mut Self {
        match self.service {
            Some(service) => self.add(format!("{}:*", service.prefix)),
            None => self.add("*"),
        }
    }

    /// Add every documented action whose name matches `glob`. See [ServiceMetadata::actions_matching].
    pub fn all_matching_actions(&mut self, glob: &str) -> &mut Self {
        let service = match self.service {
            Some(service) => service,
            None => {
                debug!("No service table for action glob {}; nothing added", glob);
                return self;
            }
        };

        for action in service.actions_matching(glob) {
            self.add(action.qualified_name(service.prefix));
        }
        self
    }

    /// Add every documented action with the given access level.
    pub fn to_access_level(&mut self, level: AccessLevel) -> &mut Self {
        let service = match self.service {
            Some(service) => service,
            None => {
                debug!("No service table for access level {}; nothing added", level);
                return self;
            }
        };

        for action in service.actions_with_access_level(level) {
            self.add(action.qualified_name(service.prefix));
        }
        self
    }

    #[inline]
    pub fn all_list_actions(&mut self) -> &mut Self {
        self.to_access_level(AccessLevel::List)
    }

    #[inline]
    pub fn all_read_actions(&mut self) -> &mut Self {
        self.to_access_level(AccessLevel::Read)
    }

    #[inline]
    pub fn all_write_actions(&mut self) -> &mut Self {
        self.to_access_level(AccessLevel::Write)
    }

    #[inline]
    pub fn all_permissions_management_actions(&mut self) -> &mut Self {
        self.to_access_level(AccessLevel::PermissionsManagement)
    }

    #[inline]
    pub fn all_tagging_actions(&mut self) -> &mut Self {
        self.to_access_level(AccessLevel::Tagging)
    }

    /// Add a rendered resource ARN. Adding a resource that is already present has no effect.
    pub fn on<S: Into<String>>(&mut self, resource: S) -> &mut Self {
        let resource = resource.into();
        if !self.resources.contains(&resource) {
            trace!("Adding resource {}", resource);
            self.resources.push(resource);
        }
        self
    }

    pub fn on_arn(&mut self, arn: &Arn) -> &mut Self {
        self.on(arn.to_string())
    }

    /// Render `template` with `values` and this statement's configuration, then add the result as a resource.
    ///
    /// On error the statement is left unchanged.
    pub fn on_template(&mut self, template: &str, values: &[(&str, &str)]) -> Result<&mut Self, BuilderError> {
        let arn = ArnTemplate::from_str(template)?.render(values, &self.config)?;
        Ok(self.on(arn))
    }

    /// Render the ARN template of the service's `resource_type` and add the result as a resource.
    ///
    /// `values` supplies the template identifiers, e.g. `[("BucketName", "my-bucket")]` for an S3 bucket. Location
    /// placeholders not supplied take their value from the statement's [StatementConfig].
    pub fn on_resource(&mut self, resource_type: &str, values: &[(&str, &str)]) -> Result<&mut Self, BuilderError> {
        let metadata = self
            .service
            .and_then(|service| service.resource_type(resource_type))
            .ok_or_else(|| BuilderError::UnknownResourceType(resource_type.to_string()))?;

        let arn = metadata.template()?.render(values, &self.config)?;
        Ok(self.on(arn))
    }

    /// Set a condition.
    ///
    /// Keys without a `:` are prefixed with this statement's service prefix. When `operator` is `None`, the operator
    /// is the default for the key's documented type if the service table lists the key, and `StringLike` otherwise.
    /// Setting a key again under the same operator replaces its value.
    pub fn if_condition<K: AsRef<str>, V: Into<StringList>>(
        &mut self,
        key: K,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let key = qualify(self.service_prefix().unwrap_or_default(), key.as_ref());
        let operator = operator.unwrap_or_else(|| self.default_operator(&key));
        let value = value.into();

        trace!("Setting condition {} {} = {:?}", operator, key, value);
        if let Some(previous) = self.conditions.insert(operator, key, value) {
            trace!("Replaced previous condition value {:?}", previous);
        }
        self
    }

    fn default_operator(&self, key: &str) -> Operator {
        self.service
            .and_then(|service| service.condition_key(key))
            .map(|ck| ck.value_type.default_operator())
            .unwrap_or(condop::StringLike)
    }

    /// Add a principal of the given kind.
    pub fn for_principal<S: Into<String>>(&mut self, kind: PrincipalKind, value: S) -> &mut Self {
        self.principal.get_or_insert_with(|| Principal::Specified(SpecifiedPrincipal::default())).add(kind, value.into());
        self
    }

    /// Add an account principal. `account` is a 12-digit account id, rendered as its root user ARN.
    pub fn for_account(&mut self, account: &str) -> &mut Self {
        let arn = format!("arn:{}:iam::{}:root", self.config.partition(), account);
        self.for_principal(PrincipalKind::Aws, arn)
    }

    pub fn for_user(&mut self, account: &str, user: &str) -> &mut Self {
        let arn = format!("arn:{}:iam::{}:user/{}", self.config.partition(), account, user);
        self.for_principal(PrincipalKind::Aws, arn)
    }

    pub fn for_role(&mut self, account: &str, role: &str) -> &mut Self {
        let arn = format!("arn:{}:iam::{}:role/{}", self.config.partition(), account, role);
        self.for_principal(PrincipalKind::Aws, arn)
    }

    pub fn for_assumed_role_session(&mut self, account: &str, role: &str, session: &str) -> &mut Self {
        let arn = format!("arn:{}:sts::{}:assumed-role/{}/{}", self.config.partition(), account, role, session);
        self.for_principal(PrincipalKind::Aws, arn)
    }

    /// Add a SAML identity provider as a federated principal.
    pub fn for_saml(&mut self, account: &str, provider: &str) -> &mut Self {
        let arn = format!("arn:{}:iam::{}:saml-provider/{}", self.config.partition(), account, provider);
        self.for_principal(PrincipalKind::Federated, arn)
    }

    /// Add a web identity provider such as `cognito-identity.amazonaws.com`.
    pub fn for_federated(&mut self, provider: &str) -> &mut Self {
        self.for_principal(PrincipalKind::Federated, provider)
    }

    /// Add an AWS service principal such as `lambda.amazonaws.com`.
    pub fn for_service_principal(&mut self, service: &str) -> &mut Self {
        self.for_principal(PrincipalKind::Service, service)
    }

    pub fn for_canonical_user(&mut self, id: &str) -> &mut Self {
        self.for_principal(PrincipalKind::CanonicalUser, id)
    }

    /// Make the statement apply to everyone (`"Principal": "*"`). Principals added afterwards are ignored.
    pub fn for_public(&mut self) -> &mut Self {
        self.principal = Some(Principal::Any);
        self
    }

    /// Render the actions as `NotAction`.
    pub fn not_actions(&mut self) -> &mut Self {
        self.not_actions = true;
        self
    }

    /// Render the resources as `NotResource`. With no resources the statement still renders `Resource: "*"`.
    pub fn not_resources(&mut self) -> &mut Self {
        self.not_resources = true;
        self
    }

    /// Render the principals as `NotPrincipal`.
    pub fn not_principals(&mut self) -> &mut Self {
        self.not_principals = true;
        self
    }

    #[inline]
    pub fn service(&self) -> Option<&'static ServiceMetadata> {
        self.service
    }

    #[inline]
    pub fn service_prefix(&self) -> Option<&'static str> {
        self.service.map(|service| service.prefix)
    }

    #[inline]
    pub fn config(&self) -> &StatementConfig {
        &self.config
    }

    #[inline]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn conditions(&self) -> &Condition {
        &self.conditions
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Render the accumulated state into a [Statement]. This does not modify the builder.
    ///
    /// A single action or resource renders as a bare string and several as a list. No resources renders
    /// `"Resource": "*"`; no actions omits `Action`; no conditions omits `Condition`.
    pub fn build(&self) -> Statement {
        let actions = (!self.actions.is_empty()).then(|| StringList::compact(self.actions.clone()));
        let (action, not_action) = if self.not_actions {
            (None, actions)
        } else {
            (actions, None)
        };

        let (resource, not_resource) = if self.resources.is_empty() {
            (Some(StringList::Single("*".to_string())), None)
        } else if self.not_resources {
            (None, Some(StringList::compact(self.resources.clone())))
        } else {
            (Some(StringList::compact(self.resources.clone())), None)
        };

        let (principal, not_principal) = if self.not_principals {
            (None, self.principal.clone())
        } else {
            (self.principal.clone(), None)
        };

        Statement {
            sid: self.sid.clone(),
            effect: self.effect,
            action,
            not_action,
            resource,
            not_resource,
            principal,
            not_principal,
            condition: self.has_conditions().then(|| self.conditions.clone()),
        }
    }
}

impl From<&PolicyStatement> for Statement {
    fn from(ps: &PolicyStatement) -> Self {
        ps.build()
    }
}

impl Serialize for PolicyStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}

display_json!(PolicyStatement);

#[cfg(test)]
mod tests;
