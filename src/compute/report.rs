use std::fmt;

use itertools::izip;

use crate::compute::types::PowerReport;

impl fmt::Display for PowerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table.test_description)?;
        writeln!(f, "Observed power: {:.4}", self.observed_power)?;
        writeln!(f, "{:>6}  {:>11}  {:>11}", "power", "min n", "min effect")?;
        for (power, n, es) in izip!(
            &self.table.power_levels,
            &self.table.min_sample_sizes,
            &self.table.min_effect_sizes
        ) {
            writeln!(f, "{power:>6.2}  {n:>11}  {es:>11.4}")?;
        }
        if let Some(sim) = &self.simulation {
            writeln!(
                f,
                "Simulated power: {:.4} (IQR {:.4} to {:.4})",
                sim.mean_power, sim.iqr_low, sim.iqr_high
            )?;
        }
        for advisory in &self.advisories {
            writeln!(f, "warning: {advisory}")?;
        }
        Ok(())
    }
}
