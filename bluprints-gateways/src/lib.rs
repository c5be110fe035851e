//! File and console gateways of bluprints.

pub mod console;
pub mod data_files;
pub mod json_file;
