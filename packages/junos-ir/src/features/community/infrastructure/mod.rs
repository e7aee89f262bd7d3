pub mod lowering;

pub use lowering::{
    as_path_regexes, checked_regex, community_matches, literal_communities,
    normalize_community_regex,
};
