use anyhow::Result;
use pws_history::{export_file_name, Error, HistoryEntry, MAX_HISTORY};
use pws_i18n::Language;
use pws_password::{GenerationConfig, StrengthLevel};
use pws_unit_tests::{json_history, memory_history};
use secrecy::ExposeSecret;
use time::{
    macros::{date, datetime},
    UtcOffset,
};

#[tokio::test]
async fn history_records_generated_passwords() -> Result<()> {
    let mut history = memory_history().await?;
    let config = GenerationConfig::new_ascii_printable(20);
    let results = config.many(3)?;
    for result in &results {
        history.add(result.password.expose_secret()).await?;
    }

    assert_eq!(3, history.len());
    let newest = history.get(0)?;
    assert_eq!(results[2].password.expose_secret(), newest.password);
    assert_eq!(20, newest.length);
    assert_eq!(results[2].strength, newest.strength);
    Ok(())
}

#[tokio::test]
async fn history_keeps_newest_ten() -> Result<()> {
    let mut history = memory_history().await?;
    for i in 0..(MAX_HISTORY * 2) {
        history.add(&format!("mock-password-{i:02}")).await?;
    }
    assert_eq!(MAX_HISTORY, history.len());
    assert_eq!("mock-password-19", history.get(0)?.password);
    assert_eq!("mock-password-10", history.get(MAX_HISTORY - 1)?.password);
    Ok(())
}

#[tokio::test]
async fn history_export_lines() -> Result<()> {
    let mut history = memory_history().await?;
    assert!(matches!(
        history.export(Language::Zh),
        Err(Error::NothingToExport)
    ));

    history
        .add_entry(HistoryEntry::new_at(
            "Tr0ub4dor&3",
            datetime!(2024-12-31 23:59 UTC),
        ))
        .await?;
    assert_eq!(StrengthLevel::Good, history.get(0)?.strength.level);

    let offset = UtcOffset::from_hms(8, 0, 0)?;
    let text = history.export_offset(Language::Zh, offset)?;
    assert_eq!("Tr0ub4dor&3 (长度: 11, 生成于: 1月01日 07:59)", text);

    let text = history.export_offset(Language::En, UtcOffset::UTC)?;
    assert_eq!(
        "Tr0ub4dor&3 (Length: 11, Generated at: Dec 31, 11:59 PM)",
        text
    );
    Ok(())
}

#[tokio::test]
async fn history_survives_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;
    {
        let mut history = json_history(dir.path()).await?;
        history.add("alpha-1").await?;
        history.add("bravo-2").await?;
        history.add("alpha-1").await?;
    }

    let history = json_history(dir.path()).await?;
    let passwords: Vec<&str> =
        history.entries().iter().map(|e| e.password.as_str()).collect();
    assert_eq!(vec!["alpha-1", "bravo-2"], passwords);

    let path = history.export_dir(Language::En, dir.path()).await?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    assert!(name.starts_with("passwords_") && name.ends_with(".txt"));
    Ok(())
}

#[test]
fn history_export_name() {
    assert_eq!(
        "passwords_2025-01-09.txt",
        export_file_name(date!(2025 - 01 - 09))
    );
}

#[test]
fn history_entry_json() -> Result<()> {
    let entry =
        HistoryEntry::new_at("alpha-1", datetime!(2024-03-07 14:05 UTC));
    let value = serde_json::to_value(&entry)?;
    assert_eq!("alpha-1", value["password"]);
    assert_eq!(7, value["length"]);
    let decoded: HistoryEntry = serde_json::from_value(value)?;
    assert_eq!(entry, decoded);
    Ok(())
}
