use std::{
    io,
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use lifelike::{SimConfig, rule};

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    Invalid { name: &'static str, value: String },
    #[error("could not read terminal size: {0}")]
    Terminal(#[from] io::Error),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses `args`, returning [`None`] when only the help text was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("", "list-rules", "print the named rules and exit");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "count neighbours on all cores");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt(
            "r",
            "rule",
            "rule name or rule string, e.g. highlife or B36/S23",
            "RULE",
        );
        opts.optopt(
            "p",
            "probability",
            "chance of a cell starting alive",
            "P",
        );
        opts.optopt("s", "seed", "seed for the initial board", "SEED");
        opts.optopt(
            "S",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifelike [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, ArgsError> {
        match self.matches.opt_str(name) {
            Some(value) => match value.parse() {
                Ok(parsed) => Ok(Some(parsed)),
                Err(_) => Err(ArgsError::Invalid { name, value }),
            },
            None => Ok(None),
        }
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn list_rules(&self) -> bool {
        self.matches.opt_present("list-rules")
    }

    pub fn generations(&self) -> Result<Option<u64>, ArgsError> {
        self.get("gens")
    }
    pub fn sleep(&self) -> Result<Option<Duration>, ArgsError> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(40)),
            None => None,
        })
    }

    pub fn grid_size(&self) -> Result<(usize, usize), ArgsError> {
        let default = SimConfig::default();
        let (width, height) = if self.console() {
            // the footer takes the last row
            let (cols, rows) = crossterm::terminal::size()?;
            (cols as usize, (rows as usize).saturating_sub(1))
        } else {
            (default.width, default.height)
        };

        Ok((
            self.get("width")?.unwrap_or(width),
            self.get("height")?.unwrap_or(height),
        ))
    }

    /// The seed from the command line, or one derived from the clock
    pub fn seed(&self) -> Result<u64, ArgsError> {
        Ok(self.get("seed")?.unwrap_or_else(clock_seed))
    }

    pub fn config(&self) -> Result<SimConfig, ArgsError> {
        let (width, height) = self.grid_size()?;
        let rule = rule::resolve_rule(self.matches.opt_str("rule").as_deref().unwrap_or("conway"));
        Ok(SimConfig {
            width,
            height,
            rule,
            live_probability: self
                .get("probability")?
                .unwrap_or(SimConfig::default().live_probability),
            seed: self.seed()?,
        })
    }
}

fn clock_seed() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    elapsed.as_nanos() as u64
}
