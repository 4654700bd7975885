use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment state of a purchased line item.
///
/// Assigned once when the order data is produced; there are no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Confirmed,
    Cancelled,
    Pending,
    Shipped,
    #[serde(rename = "Arrived at Hub")]
    ArrivedAtHub,
    Processing,
}

/// Background/foreground colour pair used to render a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

const SUCCESS: StatusPalette = StatusPalette {
    background: "#e8f5e9",
    foreground: "#1b5e20",
};
const ERROR: StatusPalette = StatusPalette {
    background: "#ffebee",
    foreground: "#b71c1c",
};
const WARNING: StatusPalette = StatusPalette {
    background: "#fff8e1",
    foreground: "#e65100",
};
const INFO: StatusPalette = StatusPalette {
    background: "#e3f2fd",
    foreground: "#0d47a1",
};

impl OrderStatus {
    /// Label shown in tables and chips.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::ArrivedAtHub => "Arrived at Hub",
            OrderStatus::Processing => "Processing",
        }
    }

    /// All statuses in the order the generator draws them from.
    pub fn all() -> [OrderStatus; 6] {
        [
            OrderStatus::Confirmed,
            OrderStatus::Cancelled,
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::ArrivedAtHub,
            OrderStatus::Processing,
        ]
    }

    /// The single colour table every status view reads from.
    pub fn palette(&self) -> StatusPalette {
        match self {
            OrderStatus::Cancelled => ERROR,
            OrderStatus::Pending => WARNING,
            OrderStatus::Processing => INFO,
            OrderStatus::Shipped | OrderStatus::ArrivedAtHub | OrderStatus::Confirmed => SUCCESS,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            OrderStatus::all().iter().map(|s| s.display_name()).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(OrderStatus::ArrivedAtHub.to_string(), "Arrived at Hub");
    }

    #[test]
    fn test_palette_groups() {
        assert_eq!(OrderStatus::Cancelled.palette(), ERROR);
        assert_eq!(OrderStatus::Pending.palette(), WARNING);
        assert_eq!(OrderStatus::Processing.palette(), INFO);
        assert_eq!(OrderStatus::Shipped.palette(), SUCCESS);
        assert_eq!(OrderStatus::ArrivedAtHub.palette(), SUCCESS);
        assert_eq!(OrderStatus::Confirmed.palette(), SUCCESS);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&OrderStatus::ArrivedAtHub).unwrap();
        assert_eq!(json, "\"Arrived at Hub\"");
        let back: OrderStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(back, OrderStatus::Pending);
    }
}
