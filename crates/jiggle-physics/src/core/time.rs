/// Accumulates variable frame time into fixed simulation ticks.
///
/// The leftover fraction drives render interpolation of the mass positions
/// (`JiggleState::corners_lerped`).
#[derive(Debug, Clone)]
pub struct TickClock {
    dt: f32,
    carry: f32,
    max_ticks_per_frame: u32,
}

impl TickClock {
    /// Host tick length the force constants are tuned for.
    pub const DEFAULT_DT: f32 = 0.05;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            carry: 0.0,
            max_ticks_per_frame: 5,
        }
    }

    /// Feed one frame's elapsed time; returns how many fixed ticks to run.
    /// Carried time is capped so a long stall cannot snowball into an
    /// ever-growing tick backlog.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.carry += frame_dt.max(0.0);
        let cap = self.dt * self.max_ticks_per_frame as f32;
        if self.carry > cap {
            self.carry = cap;
        }
        let ticks = (self.carry / self.dt) as u32;
        self.carry -= ticks as f32 * self.dt;
        ticks
    }

    /// Sub-tick fraction in [0, 1) for interpolating between the previous
    /// and current mass positions.
    pub fn alpha(&self) -> f32 {
        self.carry / self.dt
    }

    /// The fixed tick length in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DT)
    }
}
