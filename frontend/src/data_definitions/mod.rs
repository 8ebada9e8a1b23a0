pub mod signal_store;
