use crate::{helpers::strength_label, Result, Session};
use clap::Args;
use pws_password::{measure_entropy, score, StrengthResult, MAX_SCORE};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Options for scoring a password.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Password to score, read from stdin when omitted.
    pub password: Option<String>,

    /// Also show the zxcvbn estimate.
    #[clap(short, long)]
    pub entropy: bool,

    /// Print as JSON.
    #[clap(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntropyReport {
    score: u8,
    guesses_log10: f64,
}

#[derive(Serialize)]
struct ScoreReport {
    #[serde(flatten)]
    strength: StrengthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    entropy: Option<EntropyReport>,
}

fn read_password() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

/// Score a password and print the result to stdout.
pub async fn run(session: &Session, args: ScoreArgs) -> Result<()> {
    run_to(session, args, &mut std::io::stdout()).await
}

/// Score a password and write the result to a writer.
pub async fn run_to<W: Write>(
    session: &Session,
    args: ScoreArgs,
    out: &mut W,
) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };

    let strength = score(&password);
    let entropy = args.entropy.then(|| {
        let entropy = measure_entropy(&password, &[]);
        EntropyReport {
            score: u8::from(entropy.score()),
            guesses_log10: entropy.guesses_log10(),
        }
    });

    if args.json {
        let report = ScoreReport { strength, entropy };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} ({}: {}/{})",
            strength_label(session.language(), strength.level),
            session.t("score"),
            strength.score,
            MAX_SCORE,
        )?;
        if let Some(entropy) = entropy {
            writeln!(
                out,
                "zxcvbn: {}/4, log10(guesses) {:.2}",
                entropy.score, entropy.guesses_log10,
            )?;
        }
    }
    Ok(())
}
