//! Serializable automaton setup.

use serde::{Deserialize, Serialize};

use crate::domain::{Automaton, Rule, StepStrategy, check_dimensions};
use crate::error::{LifeError, Result};

fn default_rule() -> String {
    "B3/S23".to_string()
}

/// Everything needed to build and seed an [`Automaton`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomatonConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Rulestring such as `B3/S23`.
    #[serde(default = "default_rule")]
    pub rule: String,
    #[serde(default)]
    pub strategy: StepStrategy,
    /// Patterns stamped in order after construction.
    #[serde(default)]
    pub seeds: Vec<SeedConfig>,
}

/// A catalog pattern placed at an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub pattern: String,
    pub x: i64,
    pub y: i64,
}

impl Default for AutomatonConfig {
    /// 40x20 classic board with a glider near the bottom-left corner.
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            rule: default_rule(),
            strategy: StepStrategy::default(),
            seeds: vec![SeedConfig {
                pattern: "glider".to_string(),
                x: 0,
                y: 18,
            }],
        }
    }
}

impl AutomatonConfig {
    pub fn parse_rule(&self) -> Result<Rule> {
        self.rule.parse()
    }

    /// Check dimensions, rule and pattern names without allocating a grid.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        self.parse_rule()?;
        for seed in &self.seeds {
            crate::domain::patterns::lookup(&seed.pattern)?;
        }
        Ok(())
    }

    /// Construct the automaton and apply every seed in order.
    pub fn build(&self) -> Result<Automaton> {
        let rule = self.parse_rule()?;
        let mut automaton =
            Automaton::with_rule(self.width, self.height, rule)?.with_strategy(self.strategy);
        for seed in &self.seeds {
            automaton.seed_pattern(&seed.pattern, (seed.x, seed.y))?;
        }
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_glider_board() {
        let config = AutomatonConfig::default();
        assert!(config.validate().is_ok());

        let automaton = config.build().unwrap();
        assert_eq!((automaton.width(), automaton.height()), (40, 20));
        assert_eq!(automaton.rule(), &Rule::conway());
        assert_eq!(automaton.live_cell_count(), 5);
        assert!(automaton.get(0, 18));
    }

    #[test]
    fn test_json_defaults() {
        let config: AutomatonConfig = serde_json::from_str(r#"{"width": 8, "height": 6}"#).unwrap();
        assert_eq!(config.rule, "B3/S23");
        assert_eq!(config.strategy, StepStrategy::Serial);
        assert!(config.seeds.is_empty());
        assert_eq!(config.build().unwrap().live_cell_count(), 0);
    }

    #[test]
    fn test_json_full() {
        let json = r#"{
            "width": 30,
            "height": 30,
            "rule": "B36/S23",
            "strategy": "parallel",
            "seeds": [
                {"pattern": "block", "x": 1, "y": 1},
                {"pattern": "blinker", "x": 10, "y": 10}
            ]
        }"#;
        let config: AutomatonConfig = serde_json::from_str(json).unwrap();
        let automaton = config.build().unwrap();

        assert_eq!(automaton.rule(), &Rule::highlife());
        assert_eq!(automaton.strategy(), StepStrategy::Parallel);
        assert_eq!(automaton.live_cell_count(), 7);
    }

    #[test]
    fn test_round_trip() {
        let config = AutomatonConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AutomatonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AutomatonConfig {
            width: 0,
            ..AutomatonConfig::default()
        };
        assert!(matches!(config.validate(), Err(LifeError::InvalidDimension { .. })));
        assert!(matches!(config.build(), Err(LifeError::InvalidDimension { .. })));

        // validate and build agree on sizes build cannot allocate.
        config.width = usize::MAX;
        assert!(matches!(config.validate(), Err(LifeError::InvalidDimension { .. })));
        assert!(matches!(config.build(), Err(LifeError::InvalidDimension { .. })));
        config.width = 1 << 40;
        config.height = 1 << 40;
        assert!(matches!(config.validate(), Err(LifeError::InvalidDimension { .. })));

        config.width = 10;
        config.height = 20;
        config.rule = "23/3".to_string();
        assert!(matches!(config.validate(), Err(LifeError::InvalidRuleString(_))));

        config.rule = "B3/S23".to_string();
        config.seeds[0].pattern = "unicorn".to_string();
        assert_eq!(
            config.validate(),
            Err(LifeError::UnknownPattern("unicorn".to_string()))
        );
        assert!(config.build().is_err());
    }
}
