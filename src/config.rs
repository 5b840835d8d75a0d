use crate::{Error, Rule, board::MIN_SIDE, engine::check_probability};

/// Everything needed to start a [`Simulation`](crate::Simulation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub rule: Rule,
    /// Chance of each interior cell starting out alive
    pub live_probability: f64,
    pub seed: u64,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(Error::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        check_probability(self.live_probability)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            rule: Rule::CONWAY,
            live_probability: 0.05,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_first_problem() {
        let config = SimConfig {
            width: 3,
            height: 2,
            live_probability: 2.0,
            ..SimConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::GridTooSmall {
                width: 3,
                height: 2
            })
        );

        let config = SimConfig {
            live_probability: 2.0,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::LiveProbability(2.0)));
    }

    #[test]
    fn probability_bounds_are_inclusive() {
        for live_probability in [0.0, 1.0] {
            let config = SimConfig {
                live_probability,
                ..SimConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}
