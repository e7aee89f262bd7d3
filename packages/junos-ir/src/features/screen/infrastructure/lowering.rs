//! Screen lowering: one deny line per supported option, then permit-all

use crate::features::screen::domain::{Screen, ScreenAction, ScreenOption};
use crate::shared::diagnostics::Warnings;
use crate::shared::models::{IpProtocol, SubRange, TcpFlags, TcpFlagsMatch};
use crate::target::{AclLine, HeaderSpace, IpAccessList, LineAction};

/// ICMP packets above this size are "large"
const ICMP_LARGE_LENGTHS: SubRange = SubRange {
    start: 1025,
    end: 65535,
};

fn flags(set: TcpFlags, mask: TcpFlags) -> TcpFlagsMatch {
    TcpFlagsMatch::new(set, mask)
}

/// Header space denied by `option`, `None` for unsupported options
pub fn option_header_space(option: &ScreenOption) -> Option<HeaderSpace> {
    let mut hs = HeaderSpace::new();
    match option {
        ScreenOption::IcmpFragment => {
            hs.ip_protocols.insert(IpProtocol::Icmp);
            hs.fragments_only = true;
        }
        ScreenOption::IcmpLarge => {
            hs.ip_protocols.insert(IpProtocol::Icmp);
            hs.packet_lengths.insert(ICMP_LARGE_LENGTHS);
        }
        ScreenOption::TcpSynFin => {
            let syn_fin = TcpFlags {
                syn: true,
                fin: true,
                ..TcpFlags::NONE
            };
            hs.ip_protocols.insert(IpProtocol::Tcp);
            hs.tcp_flags.insert(flags(syn_fin, syn_fin));
        }
        ScreenOption::TcpFinNoAck => {
            hs.ip_protocols.insert(IpProtocol::Tcp);
            hs.tcp_flags.insert(flags(
                TcpFlags {
                    fin: true,
                    ..TcpFlags::NONE
                },
                TcpFlags {
                    fin: true,
                    ack: true,
                    ..TcpFlags::NONE
                },
            ));
        }
        ScreenOption::TcpNoFlag => {
            hs.ip_protocols.insert(IpProtocol::Tcp);
            hs.tcp_flags.insert(flags(TcpFlags::NONE, TcpFlags::ALL));
        }
        ScreenOption::TcpSynFrag => {
            let syn = TcpFlags {
                syn: true,
                ..TcpFlags::NONE
            };
            hs.ip_protocols.insert(IpProtocol::Tcp);
            hs.tcp_flags.insert(flags(syn, syn));
            hs.fragments_only = true;
        }
        ScreenOption::Unsupported(_) => return None,
    }
    Some(hs)
}

fn option_name(option: &ScreenOption) -> &str {
    match option {
        ScreenOption::IcmpFragment => "icmp fragment",
        ScreenOption::IcmpLarge => "icmp large",
        ScreenOption::TcpSynFin => "tcp syn-fin",
        ScreenOption::TcpFinNoAck => "tcp fin-no-ack",
        ScreenOption::TcpNoFlag => "tcp tcp-no-flag",
        ScreenOption::TcpSynFrag => "tcp syn-frag",
        ScreenOption::Unsupported(text) => text.as_str(),
    }
}

/// Lower a screen; alarm-only screens produce an empty list
pub fn lower_screen(screen: &Screen, warnings: &mut Warnings) -> IpAccessList {
    let mut lines = Vec::new();
    for option in &screen.options {
        match option_header_space(option) {
            Some(hs) => lines.push(AclLine::new(option_name(option), hs, LineAction::Deny)),
            None => warnings.unimplemented(format!(
                "screen option '{}' in screen '{}'",
                option_name(option),
                screen.name
            )),
        }
    }
    if screen.action == ScreenAction::AlarmWithoutDrop {
        return IpAccessList::new(screen.name.clone(), Vec::new());
    }
    lines.push(AclLine::new("permit-all", HeaderSpace::new(), LineAction::Permit));
    IpAccessList::new(screen.name.clone(), lines)
}
