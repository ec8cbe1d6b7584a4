// src/models.rs
use serde::{Deserialize, Serialize};

/// One scheduled website. Serialized with the same field names the browser
/// extension uses in its storage area, so a persisted list is interchangeable
/// with what the extension would write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub url: String,
    pub time: String, // HH:MM, 24-hour
    pub enabled: bool,
    pub site_name: String,
}

impl ScheduleEntry {
    /// Display label, falling back to the URL when no site name was given.
    pub fn display_label(&self) -> &str {
        if self.site_name.is_empty() {
            &self.url
        } else {
            &self.site_name
        }
    }
}

/// The autofill record: one flat bag of free-form text fields. Union of the
/// base contact schema and the extended IRCTC credential/identity fields, so
/// records saved under either variant still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub irctc_username: String,
    pub irctc_password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub nationality: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            pincode: String::new(),
            irctc_username: String::new(),
            irctc_password: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            nationality: "Indian".to_string(),
        }
    }
}

impl ProfileRecord {
    /// Editable field names, in display order.
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "address",
        "city",
        "pincode",
        "irctc_username",
        "irctc_password",
        "date_of_birth",
        "gender",
        "nationality",
    ];

    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "city" => &self.city,
            "pincode" => &self.pincode,
            "irctc_username" => &self.irctc_username,
            "irctc_password" => &self.irctc_password,
            "date_of_birth" => &self.date_of_birth,
            "gender" => &self.gender,
            "nationality" => &self.nationality,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Sets a field by name. Returns false when the name is not part of the
    /// schema; values are never validated.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "pincode" => &mut self.pincode,
            "irctc_username" => &mut self.irctc_username,
            "irctc_password" => &mut self.irctc_password,
            "date_of_birth" => &mut self.date_of_birth,
            "gender" => &mut self.gender,
            "nationality" => &mut self.nationality,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// How many fields currently hold a non-empty value.
    pub fn filled_fields(&self) -> usize {
        Self::FIELDS
            .iter()
            .filter(|f| self.get(f).map_or(false, |v| !v.is_empty()))
            .count()
    }
}
