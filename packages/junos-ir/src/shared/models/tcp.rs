//! TCP flag predicates

use serde::{Deserialize, Serialize};

/// Subset of TCP header flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TcpFlags {
    pub ack: bool,
    pub fin: bool,
    pub psh: bool,
    pub rst: bool,
    pub syn: bool,
    pub urg: bool,
}

impl TcpFlags {
    pub const NONE: TcpFlags = TcpFlags {
        ack: false,
        fin: false,
        psh: false,
        rst: false,
        syn: false,
        urg: false,
    };

    pub const ALL: TcpFlags = TcpFlags {
        ack: true,
        fin: true,
        psh: true,
        rst: true,
        syn: true,
        urg: true,
    };
}

/// Match on the flags selected by `mask`, which must equal `flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TcpFlagsMatch {
    pub flags: TcpFlags,
    pub mask: TcpFlags,
}

impl TcpFlagsMatch {
    pub fn new(flags: TcpFlags, mask: TcpFlags) -> Self {
        Self { flags, mask }
    }

    /// ACK set (one half of `tcp-established`)
    pub fn ack() -> Self {
        Self::new(
            TcpFlags {
                ack: true,
                ..TcpFlags::NONE
            },
            TcpFlags {
                ack: true,
                ..TcpFlags::NONE
            },
        )
    }

    /// RST set (the other half of `tcp-established`)
    pub fn rst() -> Self {
        Self::new(
            TcpFlags {
                rst: true,
                ..TcpFlags::NONE
            },
            TcpFlags {
                rst: true,
                ..TcpFlags::NONE
            },
        )
    }

    /// SYN set and ACK clear (`tcp-initial`)
    pub fn initial() -> Self {
        Self::new(
            TcpFlags {
                syn: true,
                ..TcpFlags::NONE
            },
            TcpFlags {
                syn: true,
                ack: true,
                ..TcpFlags::NONE
            },
        )
    }
}
