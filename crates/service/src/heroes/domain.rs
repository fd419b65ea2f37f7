use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single hero record. `id` is caller-supplied and is the unique key; all
/// fields are plain strings with no format validation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: String,
    pub name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub place: String,
}

/// What the create route does when the id already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    /// Silently overwrite the existing record (original behavior).
    #[default]
    Overwrite,
    /// Reject the request with a conflict.
    Reject,
}

impl FromStr for CreatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown create policy {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_uses_wire_field_names() {
        let hero = Hero {
            id: "1".into(),
            name: "SuperMan".into(),
            first_name: "Clark Joseph".into(),
            last_name: "Kent".into(),
            place: "Smallville".into(),
        };
        let json = serde_json::to_value(&hero).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "SuperMan",
                "firstName": "Clark Joseph",
                "lastName": "Kent",
                "place": "Smallville"
            })
        );
    }

    #[test]
    fn create_policy_parses_config_values() {
        assert_eq!("overwrite".parse::<CreatePolicy>(), Ok(CreatePolicy::Overwrite));
        assert_eq!("reject".parse::<CreatePolicy>(), Ok(CreatePolicy::Reject));
        assert!("merge".parse::<CreatePolicy>().is_err());
    }
}
