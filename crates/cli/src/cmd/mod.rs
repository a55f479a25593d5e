pub mod classify;
pub mod doctor;
pub mod output;
pub mod parse;
pub mod scan;
