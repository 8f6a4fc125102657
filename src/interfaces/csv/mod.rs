pub mod batch;
pub mod form_reader;
