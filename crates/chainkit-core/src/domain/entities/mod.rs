pub mod generated_file;
pub mod import_request;
pub mod project_config;
pub mod writer_result;

pub use generated_file::GeneratedFile;
pub use import_request::ImportRequest;
pub use project_config::{CONFIG_FILE_NAME, ProjectConfig};
pub use writer_result::{AbiRecord, AddressRecord, WriterResult};
