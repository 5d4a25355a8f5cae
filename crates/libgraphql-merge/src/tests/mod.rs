mod compare_nodes_tests;
mod loader_tests;
