pub mod method_override;
pub mod request_tracing;
