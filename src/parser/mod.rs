pub mod alias_matcher;
pub mod constant_matcher;
pub mod cursor;
pub mod struct_matcher;

pub use alias_matcher::{find_type_alias, match_type_alias};
pub use constant_matcher::ConstantMatcher;
pub use struct_matcher::{match_struct_field, match_struct_header, parse_struct_block};
