pub mod service;

pub use service::DataTransferService;
