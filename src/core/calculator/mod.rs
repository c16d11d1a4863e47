pub mod collector;
pub mod details;
pub mod interruptions;
pub mod labels;
pub mod planning;
pub mod segmentation;
pub mod summary;
pub mod timeline;
