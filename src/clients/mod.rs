pub mod export_client;

pub use export_client::ExportClient;
