//! Correspondence Markup Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Correspondence
//! Markup parser and renderer. It includes:
//!
//! - **AST**: Immutable document nodes, from [`ast::Item`] up to [`ast::Translation`]
//! - **Identifiers**: Scope-aware resolution of item ids ([`identifier::resolve`])
//! - **Options**: Render option values and per-block broadcasting ([`options`] module)

pub mod ast;
pub mod identifier;
pub mod options;
