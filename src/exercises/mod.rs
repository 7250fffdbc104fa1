//! The small utilities exercised by the scenarios
//!
//! Every function here is pure. One of them is wrong on purpose.

mod average;
mod fibonacci;
mod grades;
mod max;
mod users;

pub use average::calculate_average;
pub use fibonacci::{fibonacci, Fibonacci};
pub use grades::Grade;
pub use max::find_max_value;
pub use users::{process_raw_users, process_user_data, DisplayRecord, Status, UserRecord, ADULT_AGE};
