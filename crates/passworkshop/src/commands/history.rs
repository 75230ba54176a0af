use crate::{
    helpers::{
        copy_text,
        messages::{info, success},
        strength_label,
    },
    Result, Session,
};
use clap::Subcommand;
use std::path::PathBuf;
use time::UtcOffset;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recently generated passwords.
    #[clap(alias = "ls")]
    List {
        /// Print as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Remove every history entry.
    Clear,
    /// Export the history to a text file.
    Export {
        /// File or directory to write; defaults to the
        /// current directory.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Copy a password from the history to the clipboard.
    Copy {
        /// Clear the clipboard after a number of seconds.
        #[clap(long, value_name = "SECONDS")]
        clear_after: Option<u16>,

        /// Position in the list, zero is the newest.
        index: usize,
    },
}

/// Handle history commands.
pub async fn run(session: &mut Session, cmd: Command) -> Result<()> {
    let language = session.language();
    match cmd {
        Command::List { json } => {
            if json {
                serde_json::to_writer_pretty(
                    std::io::stdout(),
                    session.history.entries(),
                )?;
                println!();
            } else if session.history.is_empty() {
                info(session.t("no_history"));
            } else {
                let offset = UtcOffset::current_local_offset()
                    .unwrap_or(UtcOffset::UTC);
                println!("{}", session.t("password_history"));
                for (index, entry) in
                    session.history.entries().iter().enumerate()
                {
                    let date = language
                        .format_date(&entry.timestamp.to_offset(offset))?;
                    println!(
                        "{:>2}  {}  {}: {}  {}  {}",
                        index,
                        entry.password,
                        session.t("length"),
                        entry.length,
                        date,
                        strength_label(language, entry.strength.level),
                    );
                }
            }
        }
        Command::Clear => {
            session.history.clear().await?;
            success(session.t("history_cleared"));
        }
        Command::Export { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let path = if output.is_dir() {
                session.history.export_dir(language, &output).await?
            } else {
                session.history.export_file(language, &output).await?;
                output
            };
            success(format!(
                "{}: {}",
                session.t("export_success"),
                path.display()
            ));
        }
        Command::Copy { index, clear_after } => {
            let entry = session.history.get(index)?;
            copy_text(&entry.password, clear_after).await?;
            success(session.t("copied"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn history_export_command() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut session = Session::open(dir.path(), None).await?;

        let result = run(
            &mut session,
            Command::Export {
                output: Some(dir.path().to_owned()),
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(crate::Error::History(pws_history::Error::NothingToExport))
        ));

        session.history.add("alpha-bravo").await?;
        session.history.add("charlie-delta").await?;

        let file = dir.path().join("export.txt");
        run(
            &mut session,
            Command::Export {
                output: Some(file.clone()),
            },
        )
        .await?;
        let text = tokio::fs::read_to_string(&file).await?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("charlie-delta ("));

        run(&mut session, Command::Clear).await?;
        assert!(session.history.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn history_copy_missing_entry() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut session = Session::open(dir.path(), None).await?;
        let result = run(
            &mut session,
            Command::Copy {
                index: 4,
                clear_after: None,
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(crate::Error::History(pws_history::Error::NoEntry(4)))
        ));
        Ok(())
    }
}
