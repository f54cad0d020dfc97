use critters_data::Point;

/// A noise made by a critter. Heard everywhere until it fades.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub location: Point,
    /// Lifetime in ticks.
    pub volume: u32,
    pub text: String,
    pub age: u32,
}

impl Sound {
    #[must_use]
    pub fn new(location: Point, volume: u32, text: impl Into<String>) -> Self {
        Self {
            location,
            volume,
            text: text.into(),
            age: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    #[must_use]
    pub fn is_faded(&self) -> bool {
        self.age >= self.volume
    }

    /// Display radius: an expanding ring.
    #[must_use]
    pub fn radius(&self) -> f64 {
        f64::from(self.age)
    }
}
