pub mod help;
pub mod invite;
pub mod report;
