//! Workshop records shown on the list screens.

pub mod customer;
pub mod part;
pub mod sample;
pub mod service_ticket;
pub mod user;
pub mod vehicle;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

pub use customer::{Customer, CustomerQuery};
pub use part::{Part, PartQuery};
pub use service_ticket::{ServiceQuery, ServiceTicket};
pub use user::{NewUser, User, UserQuery};
pub use vehicle::{Vehicle, VehicleQuery};

/// Progress of a service job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Waiting,
    InProgress,
    Completed,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 3] = [
        ServiceStatus::Waiting,
        ServiceStatus::InProgress,
        ServiceStatus::Completed,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceStatus::Waiting => "⏳",
            ServiceStatus::InProgress => "🔧",
            ServiceStatus::Completed => "✅",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceStatus::Waiting => "Waiting",
            ServiceStatus::InProgress => "In Progress",
            ServiceStatus::Completed => "Completed",
        })
    }
}

impl FromStr for ServiceStatus {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "waiting" => Ok(ServiceStatus::Waiting),
            "inprogress" => Ok(ServiceStatus::InProgress),
            "completed" => Ok(ServiceStatus::Completed),
            _ => Err(CliError::InvalidArguments(format!(
                "Unknown status '{}': expected waiting, in-progress or completed",
                s
            ))),
        }
    }
}

/// Phone and email of the vehicle owner
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

/// Format an amount in whole lira
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("₺{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_accepts_variants() {
        assert_eq!("in-progress".parse::<ServiceStatus>().ok(), Some(ServiceStatus::InProgress));
        assert_eq!("In Progress".parse::<ServiceStatus>().ok(), Some(ServiceStatus::InProgress));
        assert_eq!("WAITING".parse::<ServiceStatus>().ok(), Some(ServiceStatus::Waiting));
        assert!("cancelled".parse::<ServiceStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&ServiceStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "₺0");
        assert_eq!(format_money(750), "₺750");
        assert_eq!(format_money(2500), "₺2.500");
        assert_eq!(format_money(1250000), "₺1.250.000");
    }
}
