//! Simulation clock: pause flag plus a selectable time scale
//!
//! The time-scale table maps one real second to an amount of simulated
//! years. Selection moves along the table and clamps at both ends.

use log::info;

const DAYS_PER_YEAR: f64 = 365.25;

/// One entry of the time-scale table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub days: f64, // simulated days per real second
    pub label: &'static str,
}

impl TimeScale {
    /// Multiplier in simulated years per real second
    pub fn years_per_second(&self) -> f64 {
        self.days / DAYS_PER_YEAR
    }
}

/// Slowest first
pub const TIME_SCALES: [TimeScale; 13] = [
    TimeScale { days: 1.0 / 86_400.0, label: "1 second" },
    TimeScale { days: 1.0 / 1_440.0, label: "1 minute" },
    TimeScale { days: 1.0 / 24.0, label: "1 hour" },
    TimeScale { days: 1.0, label: "1 day" },
    TimeScale { days: 2.0, label: "2 days" },
    TimeScale { days: 3.0, label: "3 days" },
    TimeScale { days: 5.0, label: "5 days" },
    TimeScale { days: 7.0, label: "1 week" },
    TimeScale { days: 14.0, label: "2 weeks" },
    TimeScale { days: 28.0, label: "4 weeks" },
    TimeScale { days: DAYS_PER_YEAR / 4.0, label: "1/4 year" },
    TimeScale { days: DAYS_PER_YEAR / 2.0, label: "1/2 year" },
    TimeScale { days: DAYS_PER_YEAR, label: "1 year" },
];

/// Index of "1 day" in [`TIME_SCALES`]
pub const DEFAULT_SCALE_INDEX: usize = 3;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    paused: bool,
    index: usize,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            paused: false,
            index: DEFAULT_SCALE_INDEX,
        }
    }
}

impl SimulationClock {
    pub fn new(scale_index: i64, paused: bool) -> Self {
        let mut clock = Self { paused, index: 0 };
        clock.set_scale_index(scale_index);
        clock
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Select a table entry, clamped to the table bounds
    pub fn set_scale_index(&mut self, index: i64) {
        let last = (TIME_SCALES.len() - 1) as i64;
        self.index = index.clamp(0, last) as usize;
    }

    pub fn scale_index(&self) -> usize {
        self.index
    }

    pub fn faster(&mut self) {
        self.set_scale_index(self.index as i64 + 1);
        info!("time scale: {} per second", self.scale_label());
    }

    pub fn slower(&mut self) {
        self.set_scale_index(self.index as i64 - 1);
        info!("time scale: {} per second", self.scale_label());
    }

    pub fn scale(&self) -> TimeScale {
        TIME_SCALES[self.index]
    }

    pub fn scale_label(&self) -> &'static str {
        self.scale().label
    }

    pub fn years_per_second(&self) -> f64 {
        self.scale().years_per_second()
    }
}
