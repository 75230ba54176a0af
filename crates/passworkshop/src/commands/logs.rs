use crate::{
    helpers::messages::{info, success},
    Result,
};
use clap::Subcommand;
use pws_logs::Logger;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the log files and their sizes.
    Status,
    /// Delete log files from previous days.
    Clean,
}

/// Handle log file commands.
pub async fn run(logger: &Logger, cmd: Command) -> Result<()> {
    match cmd {
        Command::Status => {
            let status = logger.status()?;
            println!("{}", logger.logs_dir().display());
            for path in &status.log_files {
                let marker = if path == &status.current { "*" } else { " " };
                println!("{} {}", marker, path.display());
            }
            info(format!(
                "{} file(s), {} bytes",
                status.log_files.len(),
                status.total_size
            ));
        }
        Command::Clean => {
            let deleted = logger.delete_rotated()?;
            success(format!("deleted {} log file(s)", deleted));
        }
    }
    Ok(())
}
