//! Leaf value types shared by every IR category

pub mod community;
pub mod error;
pub mod ip;
pub mod protocol;
pub mod sub_range;
pub mod tcp;

pub use community::StandardCommunity;
pub use error::{ModelError, ModelResult};
pub use ip::{IpWildcard, Prefix};
pub use protocol::{IpProtocol, RoutingProtocol};
pub use sub_range::SubRange;
pub use tcp::{TcpFlags, TcpFlagsMatch};
