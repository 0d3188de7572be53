#![warn(clippy::all)]
pub(crate) mod action;
pub(crate) mod builder;
pub mod catalog;
pub(crate) mod condition;
pub(crate) mod config;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod policy;
pub(crate) mod principal;
pub(crate) mod resource;
pub(crate) mod service;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    action::{AccessLevel, ActionMetadata, ResourceTypeOnAction},
    builder::PolicyStatement,
    condition::{op as condop, Condition, ConditionMap, ConditionOp, Operator, SetQualifier},
    config::{StatementConfig, StatementConfigBuilder, StatementConfigBuilderError},
    effect::Effect,
    error::BuilderError,
    policy::{Policy, PolicyBuilder, PolicyBuilderError, PolicyVersion},
    principal::{
        Principal, PrincipalKind, SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError,
    },
    resource::{ArnTemplate, ResourceTypeMetadata},
    serutil::StringList,
    service::{ConditionKeyMetadata, ConditionType, ServiceMetadata},
    statement::{Statement, StatementBuilder, StatementBuilderError},
};
