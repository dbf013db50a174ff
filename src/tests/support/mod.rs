pub mod app_state_builder;
pub mod in_memory_graph_store;
pub mod in_memory_post_store;
pub mod mock_db;
pub mod stubs;
