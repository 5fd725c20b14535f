use serde::{Deserialize, Serialize};

/// Company and role pair; either half may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkProfile {
    pub company: Option<String>,
    pub role: Option<String>,
}
