use crate::{condop, serutil::StringList, Operator, PolicyStatement};

// Each accessor applies its own default operator when the caller passes `None`.
macro_rules! global_condition {
    ($(#[$doc:meta])* $name:ident, $key:literal, $default:expr) => {
        $(#[$doc])*
        pub fn $name<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
            self.if_condition($key, value, Some(operator.unwrap_or($default)))
        }
    };
}

/// Global condition keys, available in every service.
impl PolicyStatement {
    global_condition!(
        /// `aws:CalledVia`: the services that made requests on the principal's behalf. Default `ForAnyValue:StringEquals`.
        if_aws_called_via,
        "aws:CalledVia",
        condop::StringEquals.for_any_value()
    );

    global_condition!(
        /// `aws:CalledViaFirst`: the first service in the `aws:CalledVia` chain.
        if_aws_called_via_first,
        "aws:CalledViaFirst",
        condop::StringLike
    );

    global_condition!(
        /// `aws:CalledViaLast`: the last service in the `aws:CalledVia` chain.
        if_aws_called_via_last,
        "aws:CalledViaLast",
        condop::StringLike
    );

    global_condition!(
        /// `aws:CurrentTime`. Accepts ISO 8601 strings or `DateTime<Utc>` values. Default `DateLessThanEquals`.
        if_aws_current_time,
        "aws:CurrentTime",
        condop::DateLessThanEquals
    );

    global_condition!(
        /// `aws:EpochTime`. Accepts seconds since the epoch, ISO 8601 strings or `DateTime<Utc>` values. Default
        /// `DateLessThanEquals`.
        if_aws_epoch_time,
        "aws:EpochTime",
        condop::DateLessThanEquals
    );

    global_condition!(
        /// `aws:MultiFactorAuthAge`, in seconds. Default `NumericLessThan`.
        if_aws_multi_factor_auth_age,
        "aws:MultiFactorAuthAge",
        condop::NumericLessThan
    );

    /// `aws:MultiFactorAuthPresent`, tested with `Bool`. `None` means `true`.
    ///
    /// The key is absent for requests made with long-term credentials; consider `BoolIfExists` through
    /// [PolicyStatement::if_condition] when that matters.
    pub fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(condop::Bool))
    }

    global_condition!(
        /// `aws:PrincipalAccount`: the account the requesting principal belongs to.
        if_aws_principal_account,
        "aws:PrincipalAccount",
        condop::StringLike
    );

    global_condition!(
        /// `aws:PrincipalArn`. Default `ArnLike`.
        if_aws_principal_arn,
        "aws:PrincipalArn",
        condop::ArnLike
    );

    global_condition!(if_aws_principal_org_id, "aws:PrincipalOrgID", condop::StringLike);

    global_condition!(
        /// `aws:PrincipalOrgPaths`. Multivalued; pair with a `ForAnyValue:` operator for more than one path.
        if_aws_principal_org_paths,
        "aws:PrincipalOrgPaths",
        condop::StringLike
    );

    /// `aws:PrincipalTag/<key>`: a tag attached to the requesting principal.
    pub fn if_aws_principal_tag<V: Into<StringList>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.if_condition(format!("aws:PrincipalTag/{}", key), value, Some(operator.unwrap_or(condop::StringLike)))
    }

    global_condition!(if_aws_principal_type, "aws:PrincipalType", condop::StringLike);

    global_condition!(if_aws_referer, "aws:Referer", condop::StringLike);

    global_condition!(if_aws_requested_region, "aws:RequestedRegion", condop::StringLike);

    /// `aws:RequestTag/<key>`: a tag passed in the request.
    pub fn if_aws_request_tag<V: Into<StringList>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.if_condition(format!("aws:RequestTag/{}", key), value, Some(operator.unwrap_or(condop::StringLike)))
    }

    /// `aws:ResourceTag/<key>`: a tag attached to the resource being accessed.
    pub fn if_aws_resource_tag<V: Into<StringList>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.if_condition(format!("aws:ResourceTag/{}", key), value, Some(operator.unwrap_or(condop::StringLike)))
    }

    /// `aws:SecureTransport`, tested with `Bool`. `None` means `true`.
    pub fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:SecureTransport", value.unwrap_or(true), Some(condop::Bool))
    }

    global_condition!(if_aws_source_account, "aws:SourceAccount", condop::StringLike);

    global_condition!(
        /// `aws:SourceArn`: the resource making a service-to-service request. Default `ArnLike`.
        if_aws_source_arn,
        "aws:SourceArn",
        condop::ArnLike
    );

    global_condition!(
        /// `aws:SourceIp`. Accepts CIDR strings or `IpNet` values. Default `IpAddress`.
        if_aws_source_ip,
        "aws:SourceIp",
        condop::IpAddress
    );

    global_condition!(if_aws_source_vpc, "aws:SourceVpc", condop::StringLike);

    global_condition!(if_aws_source_vpce, "aws:SourceVpce", condop::StringLike);

    global_condition!(
        /// `aws:TagKeys`: the tag keys present in the request.
        if_aws_tag_keys,
        "aws:TagKeys",
        condop::StringLike
    );

    global_condition!(
        /// `aws:TokenIssueTime`: when temporary credentials were issued. Default `DateGreaterThanEquals`.
        if_aws_token_issue_time,
        "aws:TokenIssueTime",
        condop::DateGreaterThanEquals
    );

    global_condition!(if_aws_user_agent, "aws:UserAgent", condop::StringLike);

    global_condition!(if_aws_userid, "aws:userid", condop::StringLike);

    global_condition!(if_aws_username, "aws:username", condop::StringLike);

    /// `aws:ViaAWSService`, tested with `Bool`. `None` means `true`.
    pub fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:ViaAWSService", value.unwrap_or(true), Some(condop::Bool))
    }

    global_condition!(
        /// `aws:VpcSourceIp`. Default `IpAddress`.
        if_aws_vpc_source_ip,
        "aws:VpcSourceIp",
        condop::IpAddress
    );
}
