mod db_error;
mod record_status;

pub use db_error::is_unique_violation;
pub use record_status::RecordStatus;
