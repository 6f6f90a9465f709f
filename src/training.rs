//! Workout records and their distance, speed and calorie formulas.

use crate::types::{InfoMessage, WorkoutKind};

/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;
/// Distance covered by one swimming stroke, in meters.
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Common contract of every workout record.
///
/// `distance` and `mean_speed` have default formulas based on the step
/// length; `spent_calories` has none and every variant must provide it.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    /// Number of steps or strokes reported by the sensor.
    fn action(&self) -> f64;

    /// Session length in hours.
    fn duration(&self) -> f64;

    /// Body weight in kg.
    fn weight(&self) -> f64;

    fn step_len(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.action() * self.step_len() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().display_name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Parameters every sensor record starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    action: f64,
    duration: f64,
    weight: f64,
}

macro_rules! session_accessors {
    () => {
        fn action(&self) -> f64 {
            self.session.action
        }

        fn duration(&self) -> f64 {
            self.session.duration
        }

        fn weight(&self) -> f64 {
            self.session.weight
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            session: Session {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    session_accessors!();

    fn spent_calories(&self) -> f64 {
        (running::SPEED_MULTIPLIER * self.mean_speed() - running::SPEED_SHIFT) * self.weight()
            / M_IN_KM
            * self.duration()
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height: f64,
}

impl SportsWalking {
    pub const fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    session_accessors!();

    // The speed/height ratio is floor-divided, not divided. For realistic
    // inputs it truncates to zero and only the weight term remains.
    fn spent_calories(&self) -> f64 {
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (walking::WEIGHT_MULTIPLIER * self.weight()
            + speed_term * walking::SPEED_HEIGHT_MULTIPLIER * self.weight())
            * self.duration()
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub const fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            session: Session {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    session_accessors!();

    fn step_len(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration()
    }

    // Not scaled by duration: the speed term already carries it.
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * self.weight()
    }
}

/// Floor division with the remainder-based rounding used by the sensor
/// backend, so results stay identical near integer boundaries.
pub fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
