pub use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::BTreeMap,
    env, fmt, fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{CopyGetters, Getters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
pub use thiserror::Error;
