pub mod base_connection;
