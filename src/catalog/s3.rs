use crate::{
    AccessLevel, ActionMetadata, ConditionKeyMetadata, ConditionType, ResourceTypeMetadata, ResourceTypeOnAction,
    ServiceMetadata,
};

const BUCKET: ResourceTypeOnAction = ResourceTypeOnAction {
    name: "bucket",
    required: true,
};

const OBJECT: ResourceTypeOnAction = ResourceTypeOnAction {
    name: "object",
    required: true,
};

const COMMON_KEYS: &[&str] = &["s3:authType", "s3:signatureAge", "s3:signatureversion", "s3:TlsVersion"];

pub static S3: ServiceMetadata = ServiceMetadata {
    prefix: "s3",
    name: "Amazon S3",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazons3.html",
    actions: &[
        ActionMetadata {
            name: "AbortMultipartUpload",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_AbortMultipartUpload.html",
            description: "Grants permission to abort a multipart upload",
            access_level: AccessLevel::Write,
            resource_types: &[OBJECT],
            condition_keys: COMMON_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "BypassGovernanceRetention",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/object-lock-managing.html#object-lock-managing-bypass",
            description: "Grants permission to allow circumvention of governance-mode object retention settings",
            access_level: AccessLevel::PermissionsManagement,
            resource_types: &[OBJECT],
            condition_keys: &["s3:object-lock-retain-until-date", "s3:authType"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "CreateBucket",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html",
            description: "Grants permission to create a new bucket",
            access_level: AccessLevel::Write,
            resource_types: &[BUCKET],
            condition_keys: &["s3:locationconstraint", "s3:x-amz-acl", "s3:authType"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "DeleteObject",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html",
            description: "Grants permission to remove the null version of an object and insert a delete marker",
            access_level: AccessLevel::Write,
            resource_types: &[OBJECT],
            condition_keys: COMMON_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "DeleteObjectTagging",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjectTagging.html",
            description: "Grants permission to use the tagging subresource to remove the entire tag set from the \
                          specified object",
            access_level: AccessLevel::Tagging,
            resource_types: &[OBJECT],
            condition_keys: &["s3:ExistingObjectTag/${Key}", "s3:authType"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "GetBucketPolicy",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketPolicy.html",
            description: "Grants permission to return the policy of the specified bucket",
            access_level: AccessLevel::Read,
            resource_types: &[BUCKET],
            condition_keys: COMMON_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "GetObject",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html",
            description: "Grants permission to retrieve objects from Amazon S3",
            access_level: AccessLevel::Read,
            resource_types: &[OBJECT],
            condition_keys: &["s3:ExistingObjectTag/${Key}", "s3:authType", "s3:signatureAge", "s3:TlsVersion"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "GetObjectTagging",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectTagging.html",
            description: "Grants permission to return the tag set of an object",
            access_level: AccessLevel::Read,
            resource_types: &[OBJECT],
            condition_keys: &["s3:ExistingObjectTag/${Key}", "s3:authType"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "ListAllMyBuckets",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html",
            description: "Grants permission to list all buckets owned by the authenticated sender of the request",
            access_level: AccessLevel::List,
            resource_types: &[],
            condition_keys: COMMON_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "ListBucket",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html",
            description: "Grants permission to list some or all of the objects in an Amazon S3 bucket (up to 1000)",
            access_level: AccessLevel::List,
            resource_types: &[BUCKET],
            condition_keys: &["s3:delimiter", "s3:max-keys", "s3:prefix", "s3:authType"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "PutBucketPolicy",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketPolicy.html",
            description: "Grants permission to add or replace a bucket policy on a bucket",
            access_level: AccessLevel::PermissionsManagement,
            resource_types: &[BUCKET],
            condition_keys: COMMON_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "PutObject",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html",
            description: "Grants permission to add an object to a bucket",
            access_level: AccessLevel::Write,
            resource_types: &[OBJECT],
            condition_keys: &[
                "s3:RequestObjectTag/${Key}",
                "s3:object-lock-retain-until-date",
                "s3:x-amz-acl",
                "s3:authType",
                "s3:TlsVersion",
            ],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "PutObjectTagging",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectTagging.html",
            description: "Grants permission to set the supplied tag-set to an object that already exists in a bucket",
            access_level: AccessLevel::Tagging,
            resource_types: &[OBJECT],
            condition_keys: &["s3:ExistingObjectTag/${Key}", "s3:RequestObjectTag/${Key}", "s3:authType"],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMetadata {
            name: "accesspoint",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/access-points.html",
            arn: "arn:${Partition}:s3:${Region}:${Account}:accesspoint/${AccessPointName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "bucket",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/UsingBucket.html",
            arn: "arn:${Partition}:s3:::${BucketName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "object",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/UsingObjects.html",
            arn: "arn:${Partition}:s3:::${BucketName}/${ObjectName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "job",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/batch-ops-managing-jobs.html",
            arn: "arn:${Partition}:s3:${Region}:${Account}:job/${JobId}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[
        ConditionKeyMetadata {
            key: "s3:ExistingObjectTag/${Key}",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/object-tagging.html#tagging-and-policies",
            description: "Filters access by existing object tag key and value",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:RequestObjectTag/${Key}",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/object-tagging.html#tagging-and-policies",
            description: "Filters access by the tag keys and values to be added to objects",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:TlsVersion",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/bucket-policy-s3-sigv4-conditions.html",
            description: "Filters access by the TLS version used by the client",
            value_type: ConditionType::Numeric,
        },
        ConditionKeyMetadata {
            key: "s3:authType",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/bucket-policy-s3-sigv4-conditions.html",
            description: "Filters access by authentication method",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:delimiter",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/amazon-s3-policy-keys.html",
            description: "Filters access by delimiter parameter",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:locationconstraint",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/amazon-s3-policy-keys.html",
            description: "Filters access by a specific Region",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:max-keys",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/amazon-s3-policy-keys.html",
            description: "Filters access by maximum number of keys returned in a ListBucket request",
            value_type: ConditionType::Numeric,
        },
        ConditionKeyMetadata {
            key: "s3:object-lock-retain-until-date",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/object-lock-overview.html#object-lock-retention-periods",
            description: "Filters access by object retain-until date",
            value_type: ConditionType::Date,
        },
        ConditionKeyMetadata {
            key: "s3:prefix",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/amazon-s3-policy-keys.html",
            description: "Filters access by key name prefix",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:signatureAge",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/bucket-policy-s3-sigv4-conditions.html",
            description: "Filters access by the age in milliseconds of the request signature",
            value_type: ConditionType::Numeric,
        },
        ConditionKeyMetadata {
            key: "s3:signatureversion",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/API/bucket-policy-s3-sigv4-conditions.html",
            description: "Filters access by the version of AWS Signature used on the request",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "s3:x-amz-acl",
            url: "https://docs.aws.amazon.com/AmazonS3/latest/dev/acl-overview.html#permissions",
            description: "Filters access by canned ACL in the request's x-amz-acl header",
            value_type: ConditionType::String,
        },
    ],
};
