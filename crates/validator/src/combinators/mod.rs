//! Validator combinators
//!
//! Every combinator is itself a [`Validate`](crate::foundation::Validate)
//! implementation, so they nest freely. Most are reached through the
//! [`ValidateExt`](crate::foundation::ValidateExt) methods rather than
//! constructed directly.
//!
//! | combinator | input | output |
//! |---|---|---|
//! | [`And`] | shared | right output |
//! | [`Or`] / [`OrAny`] | shared | first success |
//! | [`Pipe`] | first input | second output |
//! | [`Map`] | inner input | mapped value |
//! | [`Refine`] | inner input | inner output |
//! | [`WithMessage`] | inner input | inner output |
//! | [`Each`] | `[T]` | `Vec<_>` |
//! | [`Catch`] | inner input | inner output or fallback |

pub mod and;
pub mod catch;
pub mod each;
pub mod map;
pub mod message;
pub mod or;
pub mod pipe;
pub mod refine;

pub use and::{And, and};
pub use catch::Catch;
pub use each::{Each, each, each_fail_fast};
pub use map::{Map, map};
pub use message::{WithMessage, with_code, with_message};
pub use or::{Or, OrAny, or, or_any};
pub use pipe::{Pipe, pipe};
pub use refine::Refine;
