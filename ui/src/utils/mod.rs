pub mod format;

pub use format::{
    format_duration, format_file_size, format_timestamp, format_vnd,
};
