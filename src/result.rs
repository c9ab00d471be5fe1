//! Result type used throughout grt.
//!
//! Everything that can fail returns [`Result`], a thin alias over
//! `color_eyre::eyre::Result`. Typed errors from [`crate::error`] convert
//! into it with `?`, and context is attached with `.wrap_err()`:
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! async fn changelog(manager: &ForgeManager) -> Result<String> {
//!     let issues = manager
//!         .list_milestone_issues(3)
//!         .await
//!         .wrap_err("listing issues")?;
//!     // ...
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout grt.
pub type Result<T> = EyreResult<T>;
