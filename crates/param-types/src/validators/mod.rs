//! Built-in validators
//!
//! Leaf checkers that look at a single value without descending into it:
//!
//! - **Kind**: [`array`], [`bool`], [`func`], [`number`], [`object`],
//!   [`string`], [`symbol`], [`date`], [`regexp`], [`kind_of`]
//! - **Anything**: [`any`]
//! - **Class membership**: [`instance_of`]
//! - **Enumeration**: [`one_of`]
//!
//! All of them let `null`/`undefined` through; chain `.required()` to
//! reject missing values.
//!
//! # Examples
//!
//! ```rust,ignore
//! use param_types::prelude::*;
//!
//! let name = string().required();
//! let level = one_of(["debug", "info"]);
//! let when = instance_of(Class::date()).nullable();
//! ```

pub mod enumeration;
pub mod instance;
pub mod primitive;

pub use enumeration::{OneOf, one_of};
pub use instance::{InstanceOf, instance_of};
pub use primitive::{
    Any, KindOf, any, array, bool, date, func, kind_of, number, object, regexp, string, symbol,
};
