use clap::{CommandFactory, Parser, Subcommand};
use pws_i18n::Language;
use pws_logs::Logger;
use pws_preferences::Theme;
use std::path::PathBuf;

use crate::{
    commands::{
        generate, history, logs, score, settings, GenerateArgs,
        HistoryCommand, LogsCommand, ScoreArgs, SettingsCommand,
    },
    helpers::{self, messages::warn},
    CommandTree, Error, Result, Session,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passworkshop {
    /// Directory for settings, history and logs.
    #[clap(long, global = true, env = "PWS_DATA_DIR", hide_env_values = true)]
    data_dir: Option<PathBuf>,

    /// Interface language for this command (zh or en).
    #[clap(long, global = true)]
    lang: Option<Language>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random passwords.
    #[clap(alias = "gen")]
    Generate(GenerateArgs),
    /// Score the strength of a password.
    Score(ScoreArgs),
    /// Recently generated passwords.
    History {
        #[clap(subcommand)]
        cmd: HistoryCommand,
    },
    /// View and reset stored settings.
    Settings {
        #[clap(subcommand)]
        cmd: SettingsCommand,
    },
    /// Change the interface language.
    #[clap(alias = "lang")]
    Language {
        /// Language tag, toggles when omitted.
        tag: Option<Language>,
    },
    /// Change the color theme.
    Theme {
        /// Theme name, toggles when omitted.
        name: Option<Theme>,
    },
    /// Inspect and clean log files.
    Logs {
        #[clap(subcommand)]
        cmd: LogsCommand,
    },
}

pub async fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PWS_CLI_JSON").ok().is_some() {
        let cmd = Passworkshop::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        println!();
        return Ok(());
    }

    let args = Passworkshop::parse();
    let data_dir = helpers::data_dir(args.data_dir)?;

    let logger = Logger::new(&data_dir);
    if let Err(e) = logger.init_file_subscriber(None) {
        warn(format!("logging disabled: {}", e));
    }

    let mut session = Session::open(&data_dir, args.lang).await?;
    let language = session.language();

    let result = match args.cmd {
        Command::Generate(args) => generate::run(&mut session, args).await,
        Command::Score(args) => score::run(&session, args).await,
        Command::History { cmd } => history::run(&mut session, cmd).await,
        Command::Settings { cmd } => settings::run(&mut session, cmd).await,
        Command::Language { tag } => {
            settings::language(&mut session, tag).await
        }
        Command::Theme { name } => settings::theme(&mut session, name).await,
        Command::Logs { cmd } => logs::run(&logger, cmd).await,
    };

    result.map_err(|e| {
        tracing::error!(error = %e, "command_failed");
        Error::Message(e.localized(language))
    })
}
