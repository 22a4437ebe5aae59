//! Lists the grids serialosc can see and exits.

use monome::{Monome, MonomeDeviceType};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let devices = Monome::enumerate_devices().map_err(|e| anyhow::anyhow!("{e}"))?;
    let grids: Vec<_> = devices
        .iter()
        .filter(|device| device.device_type() == MonomeDeviceType::Grid)
        .collect();

    if grids.is_empty() {
        println!("No grid found");
    }
    for grid in grids {
        println!("Found: {grid}");
    }

    Ok(())
}
