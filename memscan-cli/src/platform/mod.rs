//! 平台输出适配

mod cli;

pub use cli::{print_error, print_file_result, print_json_report, print_reading, print_total};
