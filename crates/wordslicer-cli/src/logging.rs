use stderrlog::{LogLevelNum, Timestamp};

/// Log level used without `-v`: build diagnostics at info.
pub const DEFAULT_VERBOSITY: u8 = 3;

/// Logging arg group; shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    quiet: bool,

    /// More log detail (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[clap(long, global = true)]
    ts: bool,
}

impl LogArgs {
    /// The `stderrlog` level for these flags.
    fn level(&self) -> LogLevelNum {
        match DEFAULT_VERBOSITY.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install `stderrlog` as the `log` backend.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = match self.ts {
            true => Timestamp::Millisecond,
            false => Timestamp::Off,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level())
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
