//! Compiled-in reference tables.
//!
//! Each table is a hand-maintained excerpt of the AWS service authorization reference. Statements never require a
//! table; they only use one for name qualification, access-level expansion and ARN rendering.

mod dynamodb;
mod s3;

pub use {dynamodb::DYNAMODB, s3::S3};

use crate::ServiceMetadata;

/// Every table in the catalog.
pub static ALL: [&ServiceMetadata; 2] = [&DYNAMODB, &S3];

/// Find a table by its service prefix.
pub fn service(prefix: &str) -> Option<&'static ServiceMetadata> {
    ALL.iter().copied().find(|service| service.prefix == prefix)
}
