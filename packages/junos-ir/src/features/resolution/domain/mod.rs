pub mod reference;

pub use reference::{
    undefined_reference_message, AddressReference, ApplicationOrSet, ApplicationOrSetReference,
    ApplicationReference, ApplicationSetReference, AsPathGroupReference, AsPathReference,
    CommunityReference, PolicyStatementReference, PoolReference, PrefixListReference,
    ReferenceKind, Resolve, RouteFilterReference, VlanReference,
};
