use anyhow::Result;
use pws_i18n::Language;
use pws_password::{Category, GenerationConfig, DEFAULT_LENGTH, MAX_COUNT};
use pws_preferences::{Preference, Settings, Theme};
use pws_unit_tests::{json_preferences, memory_preferences};

#[tokio::test]
async fn preferences_typed_access() -> Result<()> {
    let mut prefs = memory_preferences().await?;
    prefs.insert("mock.bool".to_owned(), true.into()).await?;
    prefs.insert("mock.number".to_owned(), 12i64.into()).await?;
    prefs
        .insert("mock.string".to_owned(), "dark".to_owned().into())
        .await?;

    assert_eq!(
        Some(&Preference::Bool(true)),
        prefs.get_bool("mock.bool")?
    );
    assert!(prefs.get_number("mock.bool").is_err());
    assert_eq!(
        Some(12.0),
        prefs.get_number("mock.number")?.and_then(Preference::as_number)
    );
    assert_eq!(3, prefs.len());

    prefs.remove("mock.bool").await?;
    assert_eq!(2, prefs.len());
    prefs.clear().await?;
    assert!(prefs.is_empty());
    Ok(())
}

#[tokio::test]
async fn settings_defaults() -> Result<()> {
    let prefs = memory_preferences().await?;
    let settings = Settings::load(&prefs);
    assert_eq!(DEFAULT_LENGTH, settings.config.len());
    for category in Category::ALL {
        assert!(settings.config.is_enabled(category));
    }
    assert!(!settings.config.excludes_similar());
    assert!(!settings.config.avoids_repeats());
    assert_eq!(1, settings.count);
    assert_eq!(Language::Zh, settings.language);
    assert_eq!(Theme::Light, settings.theme);
    Ok(())
}

#[tokio::test]
async fn settings_survive_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let expected = Settings {
        config: GenerationConfig::new(40)
            .lower(true)
            .digits(true)
            .exclude_similar(true)
            .no_repeats(true),
        count: 7,
        language: Language::En,
        theme: Theme::Dark,
    };
    {
        let mut prefs = json_preferences(dir.path()).await?;
        expected.save(&mut prefs).await?;
    }

    let mut prefs = json_preferences(dir.path()).await?;
    assert_eq!(expected, Settings::load(&prefs));

    Settings::reset(&mut prefs).await?;
    let prefs = json_preferences(dir.path()).await?;
    assert_eq!(Settings::default(), Settings::load(&prefs));
    Ok(())
}

#[tokio::test]
async fn settings_ignore_invalid_values() -> Result<()> {
    let mut prefs = memory_preferences().await?;
    prefs
        .insert("generator.length".to_owned(), "long".to_owned().into())
        .await?;
    prefs
        .insert("generator.uppercase".to_owned(), 1i64.into())
        .await?;
    prefs
        .insert("generator.count".to_owned(), 500i64.into())
        .await?;
    prefs
        .insert("ui.theme".to_owned(), "sepia".to_owned().into())
        .await?;

    let settings = Settings::load(&prefs);
    assert_eq!(DEFAULT_LENGTH, settings.config.len());
    assert!(settings.config.is_enabled(Category::Upper));
    assert_eq!(MAX_COUNT, settings.count);
    assert_eq!(Theme::Light, settings.theme);
    Ok(())
}

#[test]
fn theme_parse() -> Result<()> {
    assert_eq!(Theme::Dark, "Dark".parse()?);
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::Light, Theme::Dark.toggle());
    Ok(())
}
