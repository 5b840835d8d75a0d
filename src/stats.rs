use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks generation throughput between reports
pub struct GenerationStats {
    generations: u64,
    alive: usize,
    gens_in_report: u64,
    last_report: Instant,
}
impl GenerationStats {
    pub fn new(alive: usize) -> Self {
        Self {
            generations: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.generations += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.generations, self.alive
        )
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_generations() {
        let mut stats = GenerationStats::new(10);
        stats.record(8);
        stats.record(5);

        let report = stats.report();
        assert!(report.ends_with("gens:2, alive:5"), "{}", report);
        assert_eq!(stats.generations(), 2);
        assert!(!stats.has_report());
    }
}
