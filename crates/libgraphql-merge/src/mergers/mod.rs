//! Mergers for each kind of schema node.
//!
//! Leaf mergers ([merge_directives], [merge_arguments], [merge_fields],
//! [merge_named_type_list], [merge_enum_values]) de-duplicate lists by name.
//! Entity mergers combine two partial definitions of one named entity: each
//! takes the `incoming` node, the already-collected node (if any) and a
//! [MergeConfig](crate::MergeConfig).

mod arguments;
mod directive_definition;
mod directives;
mod enum_type;
mod fields;
mod input_object_type;
mod interface_type;
mod named_type_list;
mod object_type;
mod scalar_type;
mod schema_definition;
mod type_compatibility;
mod union_type;

pub use arguments::merge_arguments;
pub use directive_definition::merge_directive_definition;
pub use directives::merge_directives;
pub use enum_type::merge_enum;
pub use enum_type::merge_enum_values;
pub use fields::merge_fields;
pub use fields::merge_input_fields;
pub use input_object_type::merge_input_object;
pub use interface_type::merge_interface;
pub use named_type_list::merge_named_type_list;
pub use object_type::merge_object_type;
pub use scalar_type::merge_scalar;
pub use schema_definition::merge_schema_definition;
pub use type_compatibility::print_type;
pub use union_type::merge_union;

#[cfg(test)]
mod tests;
