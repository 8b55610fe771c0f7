pub mod io_utils;
pub mod logger_utils;
pub mod text_utils;
pub mod time_utils;
pub mod traits;
