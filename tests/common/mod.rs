use chrono::{DateTime, Utc};
use recfile::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: u32,
    pub label: String,
}

impl Persistable for Widget {
    const NAME: &'static str = "Widget";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub handle: String,
    pub created: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Persistable for Profile {
    const NAME: &'static str = "Profile";
}
