use crate::{
    AccessLevel, ActionMetadata, ConditionKeyMetadata, ConditionType, ResourceTypeMetadata, ResourceTypeOnAction,
    ServiceMetadata,
};

const TABLE: ResourceTypeOnAction = ResourceTypeOnAction {
    name: "table",
    required: true,
};

const ITEM_KEYS: &[&str] = &[
    "dynamodb:Attributes",
    "dynamodb:EnclosingOperation",
    "dynamodb:LeadingKeys",
    "dynamodb:ReturnConsumedCapacity",
];

pub static DYNAMODB: ServiceMetadata = ServiceMetadata {
    prefix: "dynamodb",
    name: "Amazon DynamoDB",
    url: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazondynamodb.html",
    actions: &[
        ActionMetadata {
            name: "BatchGetItem",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_BatchGetItem.html",
            description: "Returns the attributes of one or more items from one or more tables",
            access_level: AccessLevel::Read,
            resource_types: &[TABLE],
            condition_keys: ITEM_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "CreateTable",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_CreateTable.html",
            description: "The CreateTable operation adds a new table to your account",
            access_level: AccessLevel::Write,
            resource_types: &[TABLE],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "DeleteItem",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DeleteItem.html",
            description: "Deletes a single item in a table by primary key",
            access_level: AccessLevel::Write,
            resource_types: &[TABLE],
            condition_keys: ITEM_KEYS,
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "DescribeTable",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_DescribeTable.html",
            description: "Returns information about the table",
            access_level: AccessLevel::Read,
            resource_types: &[TABLE],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "GetItem",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_GetItem.html",
            description: "The GetItem operation returns a set of attributes for the item with the given primary key",
            access_level: AccessLevel::Read,
            resource_types: &[TABLE],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "ListTables",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_ListTables.html",
            description: "Returns an array of table names associated with the current account and endpoint",
            access_level: AccessLevel::List,
            resource_types: &[],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "PutItem",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_PutItem.html",
            description: "Creates a new item, or replaces an old item with a new item",
            access_level: AccessLevel::Write,
            resource_types: &[TABLE],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "Query",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_Query.html",
            description: "Uses the primary key of a table or a secondary index to directly access items from that \
                          table or index",
            access_level: AccessLevel::Read,
            resource_types: &[
                TABLE,
                ResourceTypeOnAction {
                    name: "index",
                    required: false,
                },
            ],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
                "dynamodb:Select",
            ],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "Scan",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_Scan.html",
            description: "Returns one or more items and item attributes by accessing every item in a table or a \
                          secondary index",
            access_level: AccessLevel::Read,
            resource_types: &[
                TABLE,
                ResourceTypeOnAction {
                    name: "index",
                    required: false,
                },
            ],
            condition_keys: &["dynamodb:Attributes", "dynamodb:ReturnConsumedCapacity", "dynamodb:Select"],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "TagResource",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_TagResource.html",
            description: "Associate a set of tags with an Amazon DynamoDB resource",
            access_level: AccessLevel::Tagging,
            resource_types: &[TABLE],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "UntagResource",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UntagResource.html",
            description: "Removes the association of tags from an Amazon DynamoDB resource",
            access_level: AccessLevel::Tagging,
            resource_types: &[TABLE],
            condition_keys: &[],
            dependent_actions: &[],
        },
        ActionMetadata {
            name: "UpdateItem",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_UpdateItem.html",
            description: "Edits an existing item's attributes, or adds a new item to the table if it does not \
                          already exist",
            access_level: AccessLevel::Write,
            resource_types: &[TABLE],
            condition_keys: &[
                "dynamodb:Attributes",
                "dynamodb:EnclosingOperation",
                "dynamodb:LeadingKeys",
                "dynamodb:ReturnConsumedCapacity",
                "dynamodb:ReturnValues",
            ],
            dependent_actions: &[],
        },
    ],
    resource_types: &[
        ResourceTypeMetadata {
            name: "index",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.html#HowItWorks.CoreComponents.PrimaryKey",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "stream",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.html#HowItWorks.CoreComponents.Streams",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/stream/${StreamLabel}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "table",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.CoreComponents.html#HowItWorks.CoreComponents.TablesItemsAttributes",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "backup",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/backuprestore_HowItWorks.html",
            arn: "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/backup/${BackupName}",
            condition_keys: &[],
        },
        ResourceTypeMetadata {
            name: "global-table",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/GlobalTables.html",
            arn: "arn:${Partition}:dynamodb::${Account}:global-table/${GlobalTableName}",
            condition_keys: &[],
        },
    ],
    condition_keys: &[
        ConditionKeyMetadata {
            key: "dynamodb:Attributes",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by attribute (field or column) names of the table",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "dynamodb:EnclosingOperation",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by blocking Transactions APIs calls and allow the non-Transaction APIs calls \
                          and vice-versa",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "dynamodb:FullTableScan",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by blocking full table scan",
            value_type: ConditionType::Bool,
        },
        ConditionKeyMetadata {
            key: "dynamodb:LeadingKeys",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by the partition key of the table",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "dynamodb:ReturnConsumedCapacity",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by the ReturnConsumedCapacity parameter of a request",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "dynamodb:ReturnValues",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by the ReturnValues parameter of request",
            value_type: ConditionType::String,
        },
        ConditionKeyMetadata {
            key: "dynamodb:Select",
            url: "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html#FGAC_DDB.ConditionKeys",
            description: "Filters access by the Select parameter of a Query or Scan request",
            value_type: ConditionType::String,
        },
    ],
};
