use super::{
    common::Geometry,
    engine::{KeyEvent, LedOutput},
    render::Frame,
};
use monome::{KeyDirection, Monome, MonomeDevice, MonomeDeviceType, MonomeEvent};

/// The surface the sequencer talks to. `NoOp` stands in when no grid is attached,
/// swallowing frames and never producing keys.
pub enum GridDevice {
    Real { grid: Monome, geometry: Geometry },
    NoOp { geometry: Geometry },
}

impl GridDevice {
    /// Connects to the first grid serialosc reports, whatever its model.
    pub fn open(prefix: &str) -> Self {
        match Monome::enumerate_devices() {
            Ok(devices) => match devices
                .iter()
                .find(|device| device.device_type() == MonomeDeviceType::Grid)
            {
                Some(device) => match Self::connect(device, prefix) {
                    Ok(real) => real,
                    Err(e) => {
                        log::warn!("could not open grid: {e:#}");
                        Self::no_op()
                    }
                },
                None => {
                    log::warn!("no monome grid detected, running without one");
                    Self::no_op()
                }
            },
            Err(e) => {
                log::warn!("serialosc enumeration failed: {e}");
                Self::no_op()
            }
        }
    }

    fn connect(device: &MonomeDevice, prefix: &str) -> anyhow::Result<Self> {
        let grid = Monome::from_device(device, prefix).map_err(|e| anyhow::anyhow!("{e}"))?;
        let geometry = Geometry::from_size(grid.size())?;
        log::info!(
            "using {}x{} grid",
            geometry.width(),
            geometry.height()
        );

        let mut device = Self::Real { grid, geometry };
        device.draw(&Frame::new(geometry));
        Ok(device)
    }

    pub fn no_op() -> Self {
        Self::NoOp {
            geometry: Geometry::default(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Real { geometry, .. } | Self::NoOp { geometry } => *geometry,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Real { .. })
    }

    pub fn poll(&mut self) -> Option<KeyEvent> {
        match self {
            Self::Real { grid, .. } => {
                while let Some(event) = grid.poll() {
                    match event {
                        MonomeEvent::GridKey { x, y, direction } if x >= 0 && y >= 0 => {
                            return Some(KeyEvent {
                                x: x as usize,
                                y: y as usize,
                                pressed: matches!(direction, KeyDirection::Down),
                            })
                        }
                        _ => log::trace!("ignoring non-key grid event"),
                    }
                }
                None
            }
            Self::NoOp { .. } => None,
        }
    }
}

impl LedOutput for GridDevice {
    fn draw(&mut self, frame: &Frame) {
        match self {
            Self::Real { grid, .. } => grid.set_all_intensity(frame.as_slice()),
            Self::NoOp { .. } => (),
        }
    }
}
