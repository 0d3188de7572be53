use {
    crate::{
        catalog, condop, serutil::StringList, BuilderError, Effect, Policy, PolicyStatement, Principal, PrincipalKind,
        Statement, StatementConfig,
    },
    indoc::indoc,
    pretty_assertions::{assert_eq, assert_ne},
    scratchstack_arn::Arn,
    std::str::FromStr,
};

#[test_log::test]
fn test_duplicate_actions_collapse() {
    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.to("GetObject").add("s3:GetObject").to("GetObject");

    assert_eq!(ps.actions(), &["s3:GetObject".to_string()]);
    let statement = ps.build();
    assert_eq!(statement.action(), Some(&StringList::Single("s3:GetObject".to_string())));
    assert!(statement.action().unwrap().is_single());
}

#[test_log::test]
fn test_resources_keep_insertion_order() {
    let mut ps = PolicyStatement::new();
    ps.add("s3:GetObject").on("arn:aws:s3:::zeta").on("arn:aws:s3:::alpha").on("arn:aws:s3:::zeta");

    let statement = ps.build();
    assert_eq!(statement.resource(), Some(&StringList::from(vec!["arn:aws:s3:::zeta", "arn:aws:s3:::alpha"])));
}

#[test_log::test]
fn test_empty_statement() {
    let ps = PolicyStatement::new();
    let statement = ps.build();

    assert_eq!(statement.effect(), &Effect::Allow);
    assert!(statement.action().is_none());
    assert_eq!(statement.resource(), Some(&StringList::Single("*".to_string())));
    assert!(statement.condition().is_none());
    assert!(!ps.has_conditions());

    assert_eq!(
        ps.to_string(),
        indoc! { r#"
        {
            "Effect": "Allow",
            "Resource": "*"
        }"#}
    );
}

#[test_log::test]
fn test_condition_overwrite() {
    let mut ps = PolicyStatement::new();
    ps.if_aws_resource_tag("Team", "prod", Some(condop::StringEquals));
    ps.if_aws_resource_tag("Team", "dev", Some(condop::StringEquals));
    ps.if_aws_resource_tag("Env", "test", Some(condop::StringEquals));

    let values = &ps.conditions()[&condop::StringEquals];
    assert_eq!(values.len(), 2);
    assert_eq!(values["aws:ResourceTag/Team"], StringList::from("dev"));
    assert_eq!(values["aws:ResourceTag/Env"], StringList::from("test"));

    // A different operator keeps its own entry for the same key.
    ps.if_aws_resource_tag("Team", "ops", None);
    assert_eq!(ps.conditions().len(), 2);
    assert_eq!(ps.conditions().get_value(&condop::StringLike, "aws:ResourceTag/Team"), Some(&StringList::from("ops")));
    assert_eq!(
        ps.conditions().get_value(&condop::StringEquals, "aws:ResourceTag/Team"),
        Some(&StringList::from("dev"))
    );
}

#[test_log::test]
fn test_end_to_end() {
    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.to("GetObject")
        .to("PutObject")
        .on("arn:aws:s3:::bucket-one/*")
        .on("arn:aws:s3:::bucket-two/*")
        .if_aws_principal_tag("Team", "eng", Some(condop::StringEquals));

    let statement = ps.build();
    assert_eq!(statement.action(), Some(&StringList::from(vec!["s3:GetObject", "s3:PutObject"])));
    assert_eq!(
        statement.resource(),
        Some(&StringList::from(vec!["arn:aws:s3:::bucket-one/*", "arn:aws:s3:::bucket-two/*"]))
    );

    let expected = indoc! { r#"
        {
            "Effect": "Allow",
            "Action": [
                "s3:GetObject",
                "s3:PutObject"
            ],
            "Resource": [
                "arn:aws:s3:::bucket-one/*",
                "arn:aws:s3:::bucket-two/*"
            ],
            "Condition": {
                "StringEquals": {
                    "aws:PrincipalTag/Team": "eng"
                }
            }
        }"#};
    assert_eq!(ps.to_string(), expected);
    assert_eq!(statement.to_string(), expected);

    // Rendering is a pure read.
    assert_eq!(ps.build(), statement);
    assert_eq!(Statement::from_str(expected).unwrap(), statement);
}

#[test_log::test]
fn test_on_resource() {
    let mut ps = PolicyStatement::for_service(&catalog::DYNAMODB);
    ps.to("GetItem").on_resource("table", &[("TableName", "Music")]).unwrap();
    assert_eq!(ps.resources(), &["arn:aws:dynamodb:*:*:table/Music".to_string()]);

    let config = StatementConfig::builder().region("us-east-1").account("123456789012").build().unwrap();
    let mut ps = PolicyStatement::for_service_with_config(&catalog::DYNAMODB, config);
    ps.on_resource("table", &[("TableName", "Music")]).unwrap().on_resource("table", &[("TableName", "Books")]).unwrap();
    assert_eq!(
        ps.resources(),
        &[
            "arn:aws:dynamodb:us-east-1:123456789012:table/Music".to_string(),
            "arn:aws:dynamodb:us-east-1:123456789012:table/Books".to_string(),
        ]
    );

    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.on_resource("object", &[("BucketName", "home"), ("ObjectName", "${aws:username}/*")]).unwrap();
    assert_eq!(ps.resources(), &["arn:aws:s3:::home/${aws:username}/*".to_string()]);
}

#[test_log::test]
fn test_on_resource_errors() {
    let mut ps = PolicyStatement::for_service(&catalog::DYNAMODB);
    let e = ps.on_resource("table", &[("Table", "Music")]).unwrap_err();
    assert_eq!(
        e,
        BuilderError::UnresolvedArnPlaceholder {
            placeholder: "TableName".to_string(),
            template: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}".to_string(),
        }
    );
    assert!(ps.resources().is_empty());

    let e = ps.on_resource("bucket", &[("BucketName", "x")]).unwrap_err();
    assert_eq!(e, BuilderError::UnknownResourceType("bucket".to_string()));

    let mut ps = PolicyStatement::new();
    let e = ps.on_resource("table", &[("TableName", "Music")]).unwrap_err();
    assert_eq!(e.to_string(), "Unknown resource type: table");
}

#[test_log::test]
fn test_on_template_and_arn() {
    let mut ps = PolicyStatement::with_config(StatementConfig::legacy());
    ps.on_template("arn:${Partition}:svc:${Region}:${Account}:res/${Id}", &[("Id", "abc")]).unwrap();
    assert_eq!(ps.resources(), &["arn:aws:svc:::res/abc".to_string()]);

    let e = ps.on_template("arn:${Partition:svc", &[]).unwrap_err();
    assert_eq!(e, BuilderError::InvalidArnTemplate("arn:${Partition:svc".to_string()));

    let arn = Arn::from_str("arn:aws:sqs:us-west-2:123456789012:queue").unwrap();
    ps.on_arn(&arn);
    assert_eq!(ps.resources().len(), 2);
    assert_eq!(ps.resources()[1], "arn:aws:sqs:us-west-2:123456789012:queue");
}

#[test_log::test]
fn test_service_defaults() {
    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.if_condition("max-keys", 10, None)
        .if_condition("s3:x-amz-acl", "public-read", None)
        .if_condition("ExistingObjectTag/Team", "eng", None)
        .if_condition("s3:TlsVersion", 1.2, Some(condop::NumericGreaterThanEquals))
        .if_condition("ec2:Region", "us-east-1", None);

    let conditions = ps.conditions();
    assert_eq!(conditions.get_value(&condop::NumericEquals, "s3:max-keys"), Some(&StringList::from("10")));
    assert_eq!(conditions.get_value(&condop::StringLike, "s3:x-amz-acl"), Some(&StringList::from("public-read")));
    assert_eq!(conditions.get_value(&condop::StringLike, "s3:ExistingObjectTag/Team"), Some(&StringList::from("eng")));
    assert_eq!(conditions.get_value(&condop::NumericGreaterThanEquals, "s3:TlsVersion"), Some(&StringList::from("1.2")));
    assert_eq!(conditions.get_value(&condop::StringLike, "ec2:Region"), Some(&StringList::from("us-east-1")));

    let mut ps = PolicyStatement::for_service(&catalog::DYNAMODB);
    ps.if_condition("FullTableScan", false, None).if_condition("LeadingKeys", vec!["a", "b"], None);
    assert_eq!(ps.conditions().get_value(&condop::Bool, "dynamodb:FullTableScan"), Some(&StringList::from("false")));
    assert_eq!(
        ps.conditions().get_value(&condop::StringLike, "dynamodb:LeadingKeys"),
        Some(&StringList::from(vec!["a", "b"]))
    );

    // Without a service table, keys are left alone and the operator is StringLike.
    let mut ps = PolicyStatement::new();
    ps.if_condition("Team", "eng", None);
    assert_eq!(ps.conditions().get_value(&condop::StringLike, "Team"), Some(&StringList::from("eng")));
}

#[test_log::test]
fn test_access_levels_and_globs() {
    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.all_read_actions();
    assert_eq!(ps.actions(), &["s3:GetBucketPolicy", "s3:GetObject", "s3:GetObjectTagging"]);

    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.all_list_actions().all_permissions_management_actions();
    assert_eq!(
        ps.actions(),
        &["s3:ListAllMyBuckets", "s3:ListBucket", "s3:BypassGovernanceRetention", "s3:PutBucketPolicy"]
    );

    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.all_tagging_actions().all_write_actions();
    assert_eq!(ps.actions().len(), 6);
    assert!(ps.actions().contains(&"s3:PutObjectTagging".to_string()));
    assert!(ps.actions().contains(&"s3:AbortMultipartUpload".to_string()));

    let mut ps = PolicyStatement::for_service(&catalog::S3);
    ps.all_matching_actions("*Object").all_matching_actions("getobject");
    assert_eq!(ps.actions(), &["s3:DeleteObject", "s3:GetObject", "s3:PutObject"]);

    let mut ps = PolicyStatement::for_service(&catalog::DYNAMODB);
    ps.all_actions();
    assert_eq!(ps.actions(), &["dynamodb:*"]);

    // Without a service table the helpers add nothing.
    let mut ps = PolicyStatement::new();
    ps.all_read_actions().all_matching_actions("*");
    assert!(ps.actions().is_empty());
    ps.all_actions();
    assert_eq!(ps.actions(), &["*"]);
}

#[test_log::test]
fn test_principals() {
    let mut ps = PolicyStatement::new();
    ps.sid("CrossAccount")
        .add("sts:AssumeRole")
        .for_account("123456789012")
        .for_role("123456789012", "deployer")
        .for_account("123456789012")
        .for_service_principal("lambda.amazonaws.com");

    assert_eq!(
        ps.to_string(),
        indoc! { r#"
        {
            "Sid": "CrossAccount",
            "Effect": "Allow",
            "Action": "sts:AssumeRole",
            "Resource": "*",
            "Principal": {
                "AWS": [
                    "arn:aws:iam::123456789012:root",
                    "arn:aws:iam::123456789012:role/deployer"
                ],
                "Service": "lambda.amazonaws.com"
            }
        }"#}
    );

    let config = StatementConfig::builder().partition("aws-cn").build().unwrap();
    let mut ps = PolicyStatement::with_config(config);
    ps.for_user("123456789012", "alice")
        .for_assumed_role_session("123456789012", "ops", "bob")
        .for_saml("123456789012", "Okta")
        .for_federated("cognito-identity.amazonaws.com")
        .for_canonical_user("79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be");

    let principal = match ps.principal().unwrap() {
        Principal::Specified(specified) => specified,
        Principal::Any => panic!("Expected specified principal"),
    };
    assert_eq!(
        principal.aws(),
        &["arn:aws-cn:iam::123456789012:user/alice", "arn:aws-cn:sts::123456789012:assumed-role/ops/bob"]
    );
    assert_eq!(
        principal.get(PrincipalKind::Federated),
        &["arn:aws-cn:iam::123456789012:saml-provider/Okta", "cognito-identity.amazonaws.com"]
    );
    assert_eq!(principal.canonical_user().len(), 1);
    assert!(principal.service().is_empty());

    let mut ps = PolicyStatement::new();
    ps.for_public().for_account("123456789012");
    assert_eq!(ps.principal(), Some(&Principal::Any));
    assert!(ps.to_string().contains(r#""Principal": "*""#));
}

#[test_log::test]
fn test_negation() {
    let mut ps = PolicyStatement::with_sid("DenyOthers");
    ps.deny()
        .add("iam:*")
        .add("sts:*")
        .on("arn:aws:s3:::public")
        .not_actions()
        .not_resources()
        .for_account("123456789012")
        .not_principals()
        .if_aws_multi_factor_auth_present(Some(false));

    assert_eq!(
        ps.to_string(),
        indoc! { r#"
        {
            "Sid": "DenyOthers",
            "Effect": "Deny",
            "NotAction": [
                "iam:*",
                "sts:*"
            ],
            "NotResource": "arn:aws:s3:::public",
            "NotPrincipal": {
                "AWS": "arn:aws:iam::123456789012:root"
            },
            "Condition": {
                "Bool": {
                    "aws:MultiFactorAuthPresent": "false"
                }
            }
        }"#}
    );

    // An empty NotResource still renders the wildcard Resource.
    let mut ps = PolicyStatement::new();
    ps.add("s3:*").not_resources();
    let statement = ps.build();
    assert_eq!(statement.resource(), Some(&StringList::from("*")));
    assert!(statement.not_resource().is_none());
}

#[test_log::test]
fn test_effect_and_equality() {
    let mut ps1 = PolicyStatement::new();
    ps1.deny().allow();
    assert_eq!(ps1.build().effect(), &Effect::Allow);

    let mut ps2 = ps1.clone();
    assert_eq!(ps1, ps2);
    ps2.effect(Effect::Deny);
    assert_ne!(ps1, ps2);

    assert_eq!(Statement::from(&ps2).effect(), &Effect::Deny);
    assert_eq!(ps1.service_prefix(), None);
    assert_eq!(PolicyStatement::for_service(&catalog::S3).service_prefix(), Some("s3"));
    assert_eq!(PolicyStatement::for_service(&catalog::S3).service().unwrap().name, "Amazon S3");
    assert_eq!(ps1.config(), &StatementConfig::default());
}

#[test_log::test]
fn test_policy_document() {
    let mut ps = PolicyStatement::for_service(&catalog::DYNAMODB);
    ps.to("Query").on_resource("index", &[("TableName", "Music"), ("IndexName", "ByArtist")]).unwrap();

    let policy = Policy::from_builders([&ps]);
    assert_eq!(
        policy.to_string(),
        indoc! { r#"
        {
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Effect": "Allow",
                    "Action": "dynamodb:Query",
                    "Resource": "arn:aws:dynamodb:*:*:table/Music/index/ByArtist"
                }
            ]
        }"#}
    );
}
