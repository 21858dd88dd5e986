// simulation.rs - The render/step loop

use tracing::{debug, info};

use crate::error::Result;
use crate::grid::Board;
use crate::pacing::{Pace, Pacer};
use crate::render::render_frame;
use crate::screen::Screen;
use crate::stability::StabilityRule;
use crate::step::Stepper;

pub const DEFAULT_GENERATIONS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    InputClosed,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

pub struct Simulation {
    stepper: Stepper,
    generations: u64,
    stop_when_stable: Option<StabilityRule>,
}

impl Simulation {
    pub fn new(board: Board, generations: u64) -> Self {
        Self {
            stepper: Stepper::new(board),
            generations,
            stop_when_stable: None,
        }
    }

    /// Stop as soon as `rule` reports two successive generations as stable.
    pub fn stop_when_stable(mut self, rule: Option<StabilityRule>) -> Self {
        self.stop_when_stable = rule;
        self
    }

    pub fn board(&self) -> &Board {
        self.stepper.board()
    }

    /// Steps, shows and paces generations until the limit, end of input, or stability.
    ///
    /// Each frame is rendered, then the pacer waits, then the screen is cleared
    /// if another frame follows.
    pub fn run(&mut self, screen: &mut dyn Screen, pacer: &mut dyn Pacer) -> Result<RunSummary> {
        info!(
            size = self.stepper.board().size(),
            generations = self.generations,
            population = self.stepper.board().population(),
            stability = ?self.stop_when_stable,
            "starting simulation"
        );

        let mut reason = StopReason::GenerationLimit;
        while self.stepper.generation() < self.generations {
            let prior = self.stop_when_stable.map(|_| self.stepper.board().clone());

            self.stepper.advance();
            let generation = self.stepper.generation();
            let board = self.stepper.board();
            debug!(generation, population = board.population(), "generation");
            screen.render(&render_frame(generation, board))?;

            if pacer.wait(generation)? == Pace::Stop {
                reason = StopReason::InputClosed;
                break;
            }

            if let (Some(rule), Some(prior)) = (self.stop_when_stable, prior) {
                if rule.is_stable(&prior, self.stepper.board()) {
                    reason = StopReason::Stable;
                    break;
                }
            }

            if self.stepper.generation() < self.generations {
                screen.clear()?;
            }
        }

        let summary = RunSummary {
            generations: self.stepper.generation(),
            population: self.stepper.board().population(),
            reason,
        };
        info!(
            generations = summary.generations,
            population = summary.population,
            reason = ?summary.reason,
            "simulation finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::StepOnInput;
    use crate::patterns::{apply_pattern, find};
    use crate::screen::{RecordingScreen, ScreenEvent};

    struct Always;

    impl Pacer for Always {
        fn wait(&mut self, _generation: u64) -> std::io::Result<Pace> {
            Ok(Pace::Continue)
        }
    }

    fn blinker_board() -> Board {
        let mut board = Board::new(7).unwrap();
        apply_pattern(&mut board, find("blinker").unwrap(), (3, 2));
        board
    }

    #[test]
    fn runs_to_the_generation_limit() {
        let mut sim = Simulation::new(blinker_board(), 3);
        let mut screen = RecordingScreen::new();
        let summary = sim.run(&mut screen, &mut Always).unwrap();

        assert_eq!(summary, RunSummary { generations: 3, population: 3, reason: StopReason::GenerationLimit });
        assert_eq!(screen.events.len(), 5); // render, clear, render, clear, render
        assert_eq!(screen.events.last(), Some(&ScreenEvent::Render(render_frame(3, sim.board()))));
        let headers: Vec<_> = screen.frames().map(|f| f.lines().next().unwrap().to_string()).collect();
        assert_eq!(headers, [
            "Board after 1 iterations:",
            "Board after 2 iterations:",
            "Board after 3 iterations:",
        ]);
    }

    #[test]
    fn closed_input_stops_the_run() {
        let mut sim = Simulation::new(blinker_board(), DEFAULT_GENERATIONS);
        let mut screen = RecordingScreen::new();
        let mut pacer = StepOnInput::new("\n\n".as_bytes());
        let summary = sim.run(&mut screen, &mut pacer).unwrap();

        assert_eq!(summary.reason, StopReason::InputClosed);
        assert_eq!(summary.generations, 3);
        assert_eq!(screen.frames().count(), 3);
    }

    #[test]
    fn fixed_point_stops_with_strict_rule() {
        let mut board = Board::new(6).unwrap();
        apply_pattern(&mut board, find("block").unwrap(), (2, 2));
        let mut sim = Simulation::new(board, 100).stop_when_stable(Some(StabilityRule::AllCellsMatch));
        let summary = sim.run(&mut RecordingScreen::new(), &mut Always).unwrap();
        assert_eq!(summary.reason, StopReason::Stable);
        assert_eq!(summary.generations, 1);
    }

    #[test]
    fn oscillator_is_not_a_fixed_point() {
        let mut sim = Simulation::new(blinker_board(), 10).stop_when_stable(Some(StabilityRule::AllCellsMatch));
        let summary = sim.run(&mut RecordingScreen::new(), &mut Always).unwrap();
        assert_eq!(summary.reason, StopReason::GenerationLimit);
    }

    #[test]
    fn literal_rule_stops_almost_immediately() {
        let mut sim = Simulation::new(blinker_board(), 10).stop_when_stable(Some(StabilityRule::AnyCellMatches));
        let summary = sim.run(&mut RecordingScreen::new(), &mut Always).unwrap();
        assert_eq!(summary.reason, StopReason::Stable);
        assert_eq!(summary.generations, 1);
    }

    #[test]
    fn zero_generations_renders_nothing() {
        let mut sim = Simulation::new(blinker_board(), 0);
        let mut screen = RecordingScreen::new();
        let summary = sim.run(&mut screen, &mut Always).unwrap();
        assert_eq!(summary.generations, 0);
        assert!(screen.events.is_empty());
    }
}
