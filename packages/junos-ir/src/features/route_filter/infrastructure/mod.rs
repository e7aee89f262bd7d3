pub mod lowering;

pub use lowering::{
    lower_prefix_list, lower_route_filter, lower_route_filter_line, per_line_list_name,
    prefix_ranges_for,
};
