//! Firewall match conditions

use crate::features::applications::domain::ApplicationSetMember;
use crate::features::resolution::domain::PrefixListReference;
use crate::shared::models::{IpProtocol, IpWildcard, SubRange, TcpFlagsMatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirewallFrom {
    SourceAddress(IpWildcard),
    DestinationAddress(IpWildcard),
    /// Source or destination
    Address(IpWildcard),
    SourceAddressExcept(IpWildcard),
    DestinationAddressExcept(IpWildcard),
    SourcePrefixList(PrefixListReference),
    DestinationPrefixList(PrefixListReference),
    PrefixList(PrefixListReference),
    SourcePort(SubRange),
    DestinationPort(SubRange),
    Port(SubRange),
    Protocol(IpProtocol),
    IcmpType(SubRange),
    IcmpCode(SubRange),
    TcpFlags(TcpFlagsMatch),
    /// ACK or RST set
    TcpEstablished,
    /// SYN set, ACK clear
    TcpInitial,
    PacketLength {
        range: SubRange,
        #[serde(default)]
        except: bool,
    },
    FragmentOffset {
        range: SubRange,
        #[serde(default)]
        except: bool,
    },
    IsFragment,
    Application(ApplicationSetMember),
    Unsupported(String),
}
