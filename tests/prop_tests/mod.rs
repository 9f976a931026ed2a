#[path = "prop_filter.rs"]
mod filter_props;
#[path = "prop_parse.rs"]
mod parse_props;
