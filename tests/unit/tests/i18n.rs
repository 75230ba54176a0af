use anyhow::Result;
use pws_i18n::{translate, Language};
use time::macros::datetime;

#[test]
fn i18n_translate() {
    assert_eq!("复制密码", translate(Language::Zh, "copy_password"));
    assert_eq!("Copy Password", translate(Language::En, "copy_password"));
    assert_eq!("missing_key", translate(Language::En, "missing_key"));
    assert_eq!(
        "Generated 5 passwords",
        Language::En.t("generated_count").replace("{count}", "5")
    );
}

#[test]
fn i18n_language_tags() -> Result<()> {
    assert_eq!(Language::Zh, "zh-CN".parse()?);
    assert_eq!(Language::En, "en_US".parse()?);
    assert!("fr".parse::<Language>().is_err());
    assert_eq!("zh-CN", Language::Zh.html_lang());
    assert_eq!(Language::En, Language::Zh.toggle());
    Ok(())
}

#[test]
fn i18n_format_date() -> Result<()> {
    let date = datetime!(2024-11-02 00:30 UTC);
    assert_eq!("11月02日 00:30", Language::Zh.format_date(&date)?);
    assert_eq!("Nov 02, 12:30 AM", Language::En.format_date(&date)?);
    Ok(())
}
