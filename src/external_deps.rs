pub use chrono::{Datelike, NaiveDate};
pub use csv::{ReaderBuilder, StringRecord};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use futures::stream::{self, StreamExt};
pub use indexmap::IndexMap;
pub use once_cell::sync::Lazy as once_lazy;
pub use rand::{Rng, SeedableRng, rngs::StdRng};
pub use regex::Regex;
