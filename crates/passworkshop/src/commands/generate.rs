use crate::{
    helpers::{
        copy_text,
        messages::{success, warn},
        strength_label,
    },
    Result, Session,
};
use clap::Args;
use pws_password::{GenerationConfig, StrengthResult};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::io::Write;

/// Options for generating passwords.
///
/// Options that are not given use the stored settings.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (4-128).
    #[clap(short, long)]
    pub length: Option<usize>,

    /// Include uppercase letters.
    #[clap(long, value_name = "BOOL")]
    pub upper: Option<bool>,

    /// Include lowercase letters.
    #[clap(long, value_name = "BOOL")]
    pub lower: Option<bool>,

    /// Include digits.
    #[clap(long, value_name = "BOOL")]
    pub numbers: Option<bool>,

    /// Include symbols.
    #[clap(long, value_name = "BOOL")]
    pub symbols: Option<bool>,

    /// Exclude characters that look alike.
    #[clap(long, value_name = "BOOL")]
    pub exclude_similar: Option<bool>,

    /// Exclude brackets, quotes and punctuation.
    #[clap(long, value_name = "BOOL")]
    pub exclude_ambiguous: Option<bool>,

    /// Avoid repeating characters.
    #[clap(long, value_name = "BOOL")]
    pub no_repeats: Option<bool>,

    /// Characters used for the symbol set.
    #[clap(long, value_name = "CHARS")]
    pub custom_symbols: Option<String>,

    /// Number of passwords (1-100).
    #[clap(short, long)]
    pub count: Option<usize>,

    /// Copy the first password to the clipboard.
    #[clap(long)]
    pub copy: bool,

    /// Clear the clipboard after a number of seconds.
    #[clap(long, requires = "copy", value_name = "SECONDS")]
    pub clear_after: Option<u16>,

    /// Store these options as the new defaults.
    #[clap(long)]
    pub save: bool,

    /// Do not record the passwords in the history.
    #[clap(long)]
    pub no_history: bool,

    /// Print as JSON.
    #[clap(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Apply the command line options to a configuration.
    pub fn apply(&self, config: GenerationConfig) -> GenerationConfig {
        let mut config = config;
        if let Some(length) = self.length {
            config = config.length(length);
        }
        if let Some(enabled) = self.upper {
            config = config.upper(enabled);
        }
        if let Some(enabled) = self.lower {
            config = config.lower(enabled);
        }
        if let Some(enabled) = self.numbers {
            config = config.digits(enabled);
        }
        if let Some(enabled) = self.symbols {
            config = config.symbols(enabled);
        }
        if let Some(enabled) = self.exclude_similar {
            config = config.exclude_similar(enabled);
        }
        if let Some(enabled) = self.exclude_ambiguous {
            config = config.exclude_ambiguous(enabled);
        }
        if let Some(enabled) = self.no_repeats {
            config = config.no_repeats(enabled);
        }
        if let Some(symbols) = &self.custom_symbols {
            config = config.custom_symbols(Some(symbols.clone()));
        }
        config
    }
}

#[derive(Serialize)]
struct GeneratedPassword<'a> {
    password: &'a str,
    #[serde(flatten)]
    strength: StrengthResult,
}

/// Generate passwords and print them to stdout.
pub async fn run(session: &mut Session, args: GenerateArgs) -> Result<()> {
    run_to(session, args, &mut std::io::stdout()).await
}

/// Generate passwords and write them to a writer.
///
/// With `--json` only the JSON document is written; status
/// messages go to stderr so the output stays parseable.
pub async fn run_to<W: Write>(
    session: &mut Session,
    args: GenerateArgs,
    out: &mut W,
) -> Result<()> {
    let language = session.language();
    let config = args.apply(session.settings.config.clone());
    let count = args.count.unwrap_or(session.settings.count);
    let notify = |msg: String| {
        if args.json {
            eprintln!("{}", msg);
        } else {
            success(msg);
        }
    };

    let results = config.many(count)?;
    tracing::info!(
        length = config.len(),
        count = results.len(),
        "generate",
    );

    if results.iter().any(|r| !r.secure_random) {
        warn(session.t("insecure_random"));
    }

    if args.json {
        let output: Vec<GeneratedPassword<'_>> = results
            .iter()
            .map(|r| GeneratedPassword {
                password: r.password.expose_secret(),
                strength: r.strength,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        for result in &results {
            writeln!(
                out,
                "{}  {} ({}: {}/{})",
                result.password.expose_secret(),
                strength_label(language, result.strength.level),
                session.t("score"),
                result.strength.score,
                pws_password::MAX_SCORE,
            )?;
        }
        if results.len() > 1 {
            notify(
                session
                    .t("generated_count")
                    .replace("{count}", &results.len().to_string()),
            );
        }
    }

    if !args.no_history {
        for result in &results {
            session.history.add(result.password.expose_secret()).await?;
        }
    }

    if args.save {
        session.settings.config = config;
        session.settings.count = count;
        session.save_settings().await?;
        notify(session.t("settings_saved").to_owned());
    }

    if args.copy {
        if let Some(first) = results.first() {
            copy_text(first.password.expose_secret(), args.clear_after)
                .await?;
            notify(session.t("copied").to_owned());
        }
    }

    Ok(())
}
