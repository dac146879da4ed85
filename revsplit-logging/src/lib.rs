// Copyright (c) 2021 MASSA LABS <info@massa.net>

//! Structured trace records shared by the ledgers.
//!
//! `revsplit_trace!("token.transfer", { "from": from.to_string() })` emits a
//! `tracing::trace!` record whose payload is a JSON object, so that traces
//! of committed calls can be collected and replayed by tooling.

// re-exported for the macro expansion
#[doc(hidden)]
pub use serde_json as __serde_json;
#[doc(hidden)]
pub use tracing as __tracing;

/// Emits a trace record `revsplit_trace:<event>:<json params>`
#[macro_export]
macro_rules! revsplit_trace {
    ($evt:expr, $params:tt) => {
        $crate::__tracing::trace!(
            "revsplit_trace:{}:{}",
            $evt,
            $crate::__serde_json::json!($params)
        );
    };
}
