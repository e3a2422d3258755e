use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}

/// Root endpoint payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
