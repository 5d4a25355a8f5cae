mod merge_directives_tests;
mod merge_fields_tests;
mod merge_schema_definition_tests;
