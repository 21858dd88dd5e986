// config.rs - Run configuration resolved from the command line

use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::error::{LifeError, Result};
use crate::grid::Board;
use crate::patterns;
use crate::seed;
use crate::simulation::DEFAULT_GENERATIONS;
use crate::stability::StabilityRule;

pub const USAGE: &str = "Please enter a file name and size of the board as command line argument. \
                         Example: life fileName.txt 5";

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Random { seed: Option<u64> },
    File(PathBuf),
    Pattern(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    StepOnInput,
    Auto(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub seed: SeedSource,
    pub generations: u64,
    pub pacing: Pacing,
    pub stop_when_stable: Option<StabilityRule>,
}

impl Config {
    /// Interprets the positional arguments: `<size>` or `<file> <size>`.
    ///
    /// `pattern` and `random_seed` only apply to the single-argument form, and
    /// `random_seed` only to a random board.
    pub fn from_positionals(
        positionals: &[String],
        pattern: Option<String>,
        random_seed: Option<u64>,
    ) -> Result<Self> {
        let (seed, size) = match (positionals, pattern) {
            ([size], None) => (SeedSource::Random { seed: random_seed }, size),
            ([size], Some(name)) => (SeedSource::Pattern(name), size),
            ([path, size], None) => (SeedSource::File(PathBuf::from(path)), size),
            ([_, _], Some(_)) => {
                return Err(LifeError::InvalidArguments(
                    "a pattern cannot be combined with a seed file".to_string(),
                ));
            }
            _ => return Err(LifeError::InvalidArguments(USAGE.to_string())),
        };

        if random_seed.is_some() && !matches!(seed, SeedSource::Random { .. }) {
            return Err(LifeError::InvalidArguments(
                "a random seed only applies to a random board".to_string(),
            ));
        }

        let size = size
            .trim()
            .parse::<usize>()
            .map_err(|_| LifeError::InvalidArguments(format!("board size `{size}` is not a number")))?;

        Ok(Self {
            size,
            seed,
            generations: DEFAULT_GENERATIONS,
            pacing: Pacing::StepOnInput,
            stop_when_stable: None,
        })
    }

    /// Allocates and seeds the initial board.
    pub fn build_board(&self) -> Result<Board> {
        let mut board = Board::new(self.size)?;
        match &self.seed {
            SeedSource::Random { seed } => {
                let seed = seed.unwrap_or_else(rand::random);
                info!(seed, "seeding randomly");
                seed::seed_random(&mut board, &mut StdRng::seed_from_u64(seed));
            }
            SeedSource::File(path) => {
                info!(path = %path.display(), "seeding from file");
                seed::seed_from_file(&mut board, path)?;
            }
            SeedSource::Pattern(name) => {
                info!(pattern = %name, "seeding from pattern");
                patterns::apply_centered(&mut board, patterns::find(name)?);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_argument_is_random_mode() {
        let config = Config::from_positionals(&args(&["12"]), None, Some(3)).unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.seed, SeedSource::Random { seed: Some(3) });
        assert_eq!(config.generations, DEFAULT_GENERATIONS);
        assert_eq!(config.pacing, Pacing::StepOnInput);
    }

    #[test]
    fn two_arguments_is_file_mode() {
        let config = Config::from_positionals(&args(&["board.txt", "5"]), None, None).unwrap();
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("board.txt")));
        assert_eq!(config.size, 5);
    }

    #[test]
    fn wrong_arity_is_invalid_arguments() {
        for list in [&[][..], &["a", "b", "c"][..]] {
            let err = Config::from_positionals(&args(list), None, None).unwrap_err();
            assert!(matches!(err, LifeError::InvalidArguments(ref m) if m == USAGE));
        }
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let err = Config::from_positionals(&args(&["ten"]), None, None).unwrap_err();
        assert!(matches!(err, LifeError::InvalidArguments(_)));
    }

    #[test]
    fn pattern_and_file_conflict() {
        let err = Config::from_positionals(&args(&["f.txt", "5"]), Some("glider".into()), None).unwrap_err();
        assert!(matches!(err, LifeError::InvalidArguments(_)));
    }

    #[test]
    fn random_seed_is_refused_outside_random_mode() {
        let err = Config::from_positionals(&args(&["f.txt", "5"]), None, Some(9)).unwrap_err();
        assert!(matches!(err, LifeError::InvalidArguments(_)));
        let err = Config::from_positionals(&args(&["9"]), Some("glider".into()), Some(9)).unwrap_err();
        assert!(matches!(err, LifeError::InvalidArguments(_)));
    }

    #[test]
    fn small_size_fails_when_building() {
        let config = Config::from_positionals(&args(&["2"]), None, Some(1)).unwrap();
        assert!(matches!(config.build_board(), Err(LifeError::InvalidSize { size: 2 })));
    }

    #[test]
    fn huge_size_fails_when_building() {
        let config = Config::from_positionals(&args(&["5000000000"]), None, None).unwrap();
        assert!(matches!(config.build_board(), Err(LifeError::BoardTooLarge { size: 5_000_000_000 })));
    }

    #[test]
    fn fixed_seed_builds_the_same_board() {
        let config = Config::from_positionals(&args(&["9"]), None, Some(42)).unwrap();
        assert_eq!(config.build_board().unwrap(), config.build_board().unwrap());
    }

    #[test]
    fn pattern_mode_uses_named_pattern() {
        let config = Config::from_positionals(&args(&["9"]), Some("glider".into()), None).unwrap();
        assert_eq!(config.build_board().unwrap().population(), 5);
    }
}
