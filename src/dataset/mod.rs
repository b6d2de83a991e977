mod load;
mod record;
mod store;
mod validation;

pub use load::load_dataset;
pub use record::{AlbumType, Platform, TrackRecord};
pub use store::RecordStore;
pub use validation::{validate_record, SchemaError, SchemaResult};
