use rand::Rng;

pub const FACTOR_MIN: f64 = 0.0;
pub const FACTOR_MAX: f64 = 2.0;
pub const FACTOR_DEFAULT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: &[Channel] = &[Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Index of this channel within an RGB pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Per-channel scale factors. Passed by value into the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFactors {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for ChannelFactors {
    fn default() -> Self {
        Self {
            red: FACTOR_DEFAULT,
            green: FACTOR_DEFAULT,
            blue: FACTOR_DEFAULT,
        }
    }
}

impl ChannelFactors {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Three independent uniform draws in [FACTOR_MIN, FACTOR_MAX].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            red: rng.random_range(FACTOR_MIN..=FACTOR_MAX),
            green: rng.random_range(FACTOR_MIN..=FACTOR_MAX),
            blue: rng.random_range(FACTOR_MIN..=FACTOR_MAX),
        }
    }

    /// Clamp every factor into the slider range. NaN falls back to the default.
    pub fn clamped(self) -> Self {
        Self {
            red: clamp_factor(self.red),
            green: clamp_factor(self.green),
            blue: clamp_factor(self.blue),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.red == FACTOR_DEFAULT && self.green == FACTOR_DEFAULT && self.blue == FACTOR_DEFAULT
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

pub fn clamp_factor(value: f64) -> f64 {
    if value.is_nan() {
        FACTOR_DEFAULT
    } else {
        value.clamp(FACTOR_MIN, FACTOR_MAX)
    }
}

/// Label text shown above a slider, e.g. `Red Factor (1.00)`.
pub fn factor_label(channel: Channel, value: f64) -> String {
    format!("{} Factor ({:.2})", channel.name(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_is_identity() {
        let f = ChannelFactors::default();
        assert_eq!(f.as_array(), [1.0, 1.0, 1.0]);
        assert!(f.is_identity());
        assert!(!ChannelFactors::new(1.0, 0.5, 1.0).is_identity());
    }

    #[test]
    fn clamped_limits_range_and_replaces_nan() {
        let f = ChannelFactors::new(-0.5, 3.0, f64::NAN).clamped();
        assert_eq!(f, ChannelFactors::new(0.0, 2.0, 1.0));

        let inside = ChannelFactors::new(0.25, 1.75, 2.0);
        assert_eq!(inside.clamped(), inside);
    }

    #[test]
    fn random_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let f = ChannelFactors::random(&mut rng);
            for v in f.as_array() {
                assert!((FACTOR_MIN..=FACTOR_MAX).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn random_channels_are_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let f = ChannelFactors::random(&mut rng);
        assert!(f.red != f.green || f.green != f.blue);
    }

    #[test]
    fn get_and_set_by_channel() {
        let mut f = ChannelFactors::default();
        f.set(Channel::Green, 0.3);
        assert_eq!(f.get(Channel::Green), 0.3);
        assert_eq!(f.get(Channel::Red), 1.0);
        assert_eq!(Channel::Blue.index(), 2);
    }

    #[test]
    fn labels_use_two_decimals() {
        assert_eq!(factor_label(Channel::Red, 1.0), "Red Factor (1.00)");
        assert_eq!(factor_label(Channel::Green, 0.456), "Green Factor (0.46)");
        assert_eq!(factor_label(Channel::Blue, 2.0), "Blue Factor (2.00)");
    }
}
