// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy total response body.

use serde::{Deserialize, Serialize};

use crate::types::EnergyTotals;

/// Response to the `EnergyTotal` command.
///
/// ```json
/// {"EnergyTotal": {"Total": 5000.92, "Yesterday": 2.0, "Today": 2.2}}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTotalResponse {
    #[serde(rename = "EnergyTotal")]
    energy_total: EnergyTotals,
}

impl EnergyTotalResponse {
    /// Wraps `totals` in the `EnergyTotal` envelope.
    #[must_use]
    pub const fn new(totals: EnergyTotals) -> Self {
        Self {
            energy_total: totals,
        }
    }

    /// Returns the reported totals.
    #[must_use]
    pub const fn totals(&self) -> &EnergyTotals {
        &self.energy_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_energy_total_response() {
        let json = r#"{"EnergyTotal": {"Total": 12.5, "Yesterday": 1.0, "Today": 0.25}}"#;
        let response: EnergyTotalResponse = serde_json::from_str(json).unwrap();

        let totals = response.totals();
        assert!((totals.total - 12.5).abs() < f64::EPSILON);
        assert!((totals.yesterday - 1.0).abs() < f64::EPSILON);
        assert!((totals.today - 0.25).abs() < f64::EPSILON);
    }
}
