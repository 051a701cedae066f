//! Service layer containing the call pipeline and side-effect helpers.
//!
//! ## Service map
//! - `api.rs` — request executor: build/sign/send with bounded 429 retry.
//! - `signing.rs` — HMAC-SHA256 request signing with a profile's access key.
//! - `input.rs` — request-body resolution (file or piped stdin).
//! - `output.rs` — response formatting per output mode.
//! - `report.rs` — cursor-paginated infringement report, CSV serialization.
//! - `password.rs` — hidden password prompt.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; services take explicit writers.
//! - Keep command handlers thin; delegate to services.

pub mod api;
pub mod input;
pub mod output;
pub mod password;
pub mod report;
pub mod signing;
