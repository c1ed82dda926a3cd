use serde::{Deserialize, Serialize};
use std::fmt;

/// The AND/OR join placed before a condition when it follows another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinator {
    And,
    Or,
}

impl Coordinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Coordinator::And => "and",
            Coordinator::Or => "or",
        }
    }
}

impl fmt::Display for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
