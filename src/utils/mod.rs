pub mod logging;
pub mod paths;

pub use logging::{LogConfig, init_tracing};
pub use paths::{PART_EXTENSION, format_path_with_tilde, output_location, part_file_name};
