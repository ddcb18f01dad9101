// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy readings reported by the `EnergyTotal` command.

use serde::{Deserialize, Serialize};

/// Energy consumption totals in kWh.
///
/// The mock device reports [`EnergyTotals::FIXED`] for its whole lifetime;
/// nothing is metered.
///
/// Field order matters on the wire: Tasmota emits `Total`, `Yesterday`,
/// then `Today`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnergyTotals {
    /// Total energy consumed in kWh.
    pub total: f64,
    /// Yesterday's energy consumption in kWh.
    pub yesterday: f64,
    /// Today's energy consumption in kWh.
    pub today: f64,
}

impl EnergyTotals {
    /// The readings every mock device reports.
    pub const FIXED: Self = Self {
        total: 5000.92,
        yesterday: 2.0,
        today: 2.2,
    };
}

impl Default for EnergyTotals {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_totals_serialize_in_tasmota_order() {
        let json = serde_json::to_string(&EnergyTotals::FIXED).unwrap();
        assert_eq!(json, r#"{"Total":5000.92,"Yesterday":2.0,"Today":2.2}"#);
    }

    #[test]
    fn default_is_fixed() {
        assert_eq!(EnergyTotals::default(), EnergyTotals::FIXED);
    }
}
