mod bucket_name;
mod data_source_id;
mod index_id;
mod object_key;

pub use bucket_name::BucketName;
pub use data_source_id::DataSourceId;
pub use index_id::IndexId;
pub use object_key::ObjectKey;
