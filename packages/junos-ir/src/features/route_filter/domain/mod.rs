pub mod line;
pub mod prefix_list;
pub mod store;

pub use line::{RouteFilterLine, RouteFilterLineKey, RouteFilterLineKind};
pub use prefix_list::PrefixList;
pub use store::{LineId, RouteFilter};
