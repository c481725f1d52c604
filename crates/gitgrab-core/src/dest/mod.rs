//! Clone destination derivation.
//!
//! Turns the path component of a git URL into a relative directory under the
//! working directory, the way `git clone` names its target, and rejects any
//! path that would land outside that directory.

mod clean;
mod error;
mod sanitize;

pub use clean::clean;
pub use error::PathError;
pub use sanitize::{post_trim, pre_trim, sanitize, sanitize_in};
