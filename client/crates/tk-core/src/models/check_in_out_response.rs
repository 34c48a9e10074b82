use crate::{CheckAction, TimeRecord};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInOutResponse {
    pub success: bool,
    #[serde(default)]
    pub action: Option<CheckAction>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub record: Option<TimeRecord>,
}
