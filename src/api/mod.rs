//! RPC Client
//!
//! Remote-call plumbing for fetching KPI snapshots from the backend.

pub mod client;

pub use client::{call_kw, get_rpc_base, set_rpc_base, RpcTarget};
