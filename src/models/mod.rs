pub mod activity_log;
pub mod category;
pub mod day_key;
pub mod event;
pub mod event_type;
pub mod ledger;
pub mod planning;
pub mod range;
pub mod report;
