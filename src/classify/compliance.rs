//! Compliance-metric lookup table.
//!
//! Maps the regulatory/voluntary standard tier codes (1..5) to labels and
//! icon asset paths shown as image overlays in the compliance view.

use serde::Serialize;

/// Display attributes for one compliance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceClass {
    pub code: i64,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Known compliance tiers, weakest to strongest.
const CLASSES: &[ComplianceClass] = &[
    ComplianceClass {
        code: 1,
        label: "Building Regs",
        icon: "icons/compliance/building-regs.svg",
    },
    ComplianceClass {
        code: 2,
        label: "Future Homes",
        icon: "icons/compliance/future-homes.svg",
    },
    ComplianceClass {
        code: 3,
        label: "AECB Standard",
        icon: "icons/compliance/aecb.svg",
    },
    ComplianceClass {
        code: 4,
        label: "Passivhaus Classic",
        icon: "icons/compliance/passivhaus-classic.svg",
    },
    ComplianceClass {
        code: 5,
        label: "Passivhaus Plus",
        icon: "icons/compliance/passivhaus-plus.svg",
    },
];

/// Sentinel for codes outside 1..5.
pub const UNKNOWN: ComplianceClass = ComplianceClass {
    code: i64::MIN,
    label: "Unknown",
    icon: "icons/compliance/unknown.svg",
};

/// Look up the display class for a compliance tier code. Total: any code
/// outside 1..5 maps to [`UNKNOWN`].
pub fn compliance(code: i64) -> &'static ComplianceClass {
    CLASSES.iter().find(|c| c.code == code).unwrap_or(&UNKNOWN)
}
