use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}
