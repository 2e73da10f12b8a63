//! JSON-RPC 2.0 notifications from the intro to its host page.
//!
//! When the intro runs inside an iframe the embedding page is told about
//! phase changes and frame rate through `postMessage`:
//!
//! ```text
//! Host page (parent window)  <──postMessage──  Galaxy intro (iframe)
//!        │ <────────── {"method": "intro_phase", "params": {"phase": "revealed"}}
//!        │ <────────── {"method": "fps_update",  "params": {"fps": 60.0}}
//! ```
//!
//! Notifications carry no id and expect no response. Natively they are only
//! logged.

/// Outbound notification queue and the system that flushes it.
pub mod web_rpc;
