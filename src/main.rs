use std::time::Instant;

use tracing_subscriber::EnvFilter;
use ttpower::compute::{Group, PowerSettings, SimSettings, compute_power};
use ttpower::error::TtpowerErr;

fn main() -> Result<(), TtpowerErr> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let group1 = Group::new(1.1, 0.1, 30)?;
    let group2 = Group::new(1.2, 0.3, 25)?;

    let start = Instant::now();
    let report = compute_power(group1, group2, &PowerSettings::default())?;
    println!("Analytical only ({:?}):", start.elapsed());
    println!("{report}");

    let settings = PowerSettings {
        simulation: Some(SimSettings::seeded(24601)),
        ..PowerSettings::default()
    };
    let start = Instant::now();
    let report = compute_power(group1, group2, &settings)?;
    println!("With simulation ({:?}):", start.elapsed());
    println!("{report}");

    println!("----------------------------------------");
    println!();

    // One-sample test against a fixed value, one-tailed
    let settings = PowerSettings {
        tails: 1,
        ..PowerSettings::default()
    };
    let report = compute_power(Group::new(1.1, 0.1, 12)?, 1.05, &settings)?;
    println!("{report}");

    Ok(())
}
