//! dslog-protocol: Address helpers used by connection code that feeds dslog
//!
//! Nothing here touches the logger; it only derives the candidate robot
//! addresses a connection component walks through.

pub mod addresses;

pub use addresses::{candidate_addresses, static_ip, LOOPBACK};
