// src/lib.rs - Runtime details reporter library
pub mod runtime_info;
pub mod system_info;

pub use crate::runtime_info::{
    ReportError, RuntimeDetails, format_timestamp, print_runtime_details, runtime_descriptor,
    write_runtime_details,
};
pub use crate::system_info::SystemInfo;
