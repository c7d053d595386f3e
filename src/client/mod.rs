pub mod api_client;
pub mod source;

pub use api_client::ApiClient;
pub use source::VolumeSource;
