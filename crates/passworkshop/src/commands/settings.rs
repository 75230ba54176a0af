use crate::{
    helpers::{
        flag_label,
        messages::{info, success},
    },
    Result, Session,
};
use clap::Subcommand;
use pws_i18n::Language;
use pws_password::Category;
use pws_preferences::Theme;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the stored settings.
    Show {
        /// Print as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Restore the default settings.
    Reset,
}

/// Handle settings commands.
pub async fn run(session: &mut Session, cmd: Command) -> Result<()> {
    match cmd {
        Command::Show { json } => {
            if json {
                serde_json::to_writer_pretty(
                    std::io::stdout(),
                    &session.settings,
                )?;
                println!();
            } else {
                print_settings(session);
            }
        }
        Command::Reset => {
            session.reset_settings().await?;
            success(session.t("settings_reset"));
        }
    }
    Ok(())
}

fn print_settings(session: &Session) {
    let language = session.language();
    let settings = &session.settings;
    let config = &settings.config;

    println!("{}", session.t("generation_settings"));
    println!("  {}: {}", session.t("password_length"), config.len());
    println!("  {}: {}", session.t("password_count"), settings.count);

    println!("{}", session.t("character_sets"));
    for (key, category) in [
        ("uppercase", Category::Upper),
        ("lowercase", Category::Lower),
        ("numbers", Category::Digits),
        ("symbols", Category::Symbols),
    ] {
        println!(
            "  {}: {}",
            session.t(key),
            flag_label(language, config.is_enabled(category))
        );
    }

    println!("{}", session.t("advanced_options"));
    for (key, value) in [
        ("exclude_similar", config.excludes_similar()),
        ("exclude_ambiguous", config.excludes_ambiguous()),
        ("no_repeats", config.avoids_repeats()),
    ] {
        println!("  {}: {}", session.t(key), flag_label(language, value));
    }

    println!("{}: {}", session.t("language"), settings.language);
    println!(
        "{}: {}",
        session.t("theme"),
        session.t(settings.theme.label_key())
    );
}

/// Show or change the interface language.
///
/// Without a language the stored language is toggled.
pub async fn language(
    session: &mut Session,
    language: Option<Language>,
) -> Result<()> {
    let language =
        language.unwrap_or_else(|| session.settings.language.toggle());
    session.set_language(language).await?;
    info(format!("{}: {}", session.t("language"), language));
    Ok(())
}

/// Show or change the color theme.
///
/// Without a theme the stored theme is toggled.
pub async fn theme(session: &mut Session, theme: Option<Theme>) -> Result<()> {
    let theme = theme.unwrap_or_else(|| session.settings.theme.toggle());
    session.settings.theme = theme;
    session.save_settings().await?;
    info(format!(
        "{}: {}",
        session.t("theme"),
        session.t(theme.label_key())
    ));
    Ok(())
}
