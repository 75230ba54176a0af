pub(crate) const ZH: &[(&str, &str)] = &[
    ("title", "专业密码生成器"),
    ("subtitle", "创建安全、强壮的密码来保护您的账户"),
    ("copy_password", "复制密码"),
    ("regenerate", "重新生成"),
    ("strength_weak", "强度：弱"),
    ("strength_fair", "强度：一般"),
    ("strength_good", "强度：良好"),
    ("strength_strong", "强度：强"),
    ("generation_settings", "生成设置"),
    ("password_length", "密码长度"),
    ("character_sets", "字符集"),
    ("uppercase", "大写字母 (A-Z)"),
    ("lowercase", "小写字母 (a-z)"),
    ("numbers", "数字 (0-9)"),
    ("symbols", "特殊符号 (!@#$%^&*)"),
    ("advanced_options", "高级选项"),
    ("exclude_similar", "排除相似字符 (0,O,l,1)"),
    ("exclude_ambiguous", "排除易混淆符号 ({}[]()/\\'\"`~,;.<>)"),
    ("no_repeats", "不重复字符"),
    ("password_count", "生成数量"),
    ("passwords", "个密码"),
    ("password_history", "密码历史"),
    ("no_history", "暂无生成记录"),
    ("copied", "已复制到剪贴板"),
    ("export_success", "密码已导出"),
    ("history_cleared", "历史记录已清空"),
    ("no_passwords_generated", "暂无密码可导出"),
    ("select_character_set", "请至少选择一种字符集"),
    ("charset_exhausted", "排除后没有可用字符"),
    ("insecure_random", "安全随机数不可用，已回退到普通随机数"),
    ("generated_count", "生成了 {count} 个密码"),
    ("settings_saved", "设置已保存"),
    ("settings_reset", "设置已重置"),
    ("language", "语言"),
    ("theme", "主题"),
    ("theme_light", "浅色"),
    ("theme_dark", "深色"),
    ("score", "分数"),
    ("generated_at", "生成于"),
    ("length", "长度"),
    ("yes", "是"),
    ("no", "否"),
];

pub(crate) const EN: &[(&str, &str)] = &[
    ("title", "Professional Password Generator"),
    (
        "subtitle",
        "Create secure, strong passwords to protect your accounts",
    ),
    ("copy_password", "Copy Password"),
    ("regenerate", "Regenerate"),
    ("strength_weak", "Strength: Weak"),
    ("strength_fair", "Strength: Fair"),
    ("strength_good", "Strength: Good"),
    ("strength_strong", "Strength: Strong"),
    ("generation_settings", "Generation Settings"),
    ("password_length", "Password Length"),
    ("character_sets", "Character Sets"),
    ("uppercase", "Uppercase Letters (A-Z)"),
    ("lowercase", "Lowercase Letters (a-z)"),
    ("numbers", "Numbers (0-9)"),
    ("symbols", "Special Symbols (!@#$%^&*)"),
    ("advanced_options", "Advanced Options"),
    ("exclude_similar", "Exclude Similar Characters (0,O,l,1)"),
    (
        "exclude_ambiguous",
        "Exclude Ambiguous Symbols ({}[]()/\\'\"`~,;.<>)",
    ),
    ("no_repeats", "No Repeat Characters"),
    ("password_count", "Password Count"),
    ("passwords", "passwords"),
    ("password_history", "Password History"),
    ("no_history", "No generation records"),
    ("copied", "Copied to clipboard"),
    ("export_success", "Passwords exported"),
    ("history_cleared", "History cleared"),
    ("no_passwords_generated", "No passwords to export"),
    ("select_character_set", "Please select at least one character set"),
    ("charset_exhausted", "No characters left after exclusions"),
    (
        "insecure_random",
        "Secure randomness unavailable, using a fallback generator",
    ),
    ("generated_count", "Generated {count} passwords"),
    ("settings_saved", "Settings saved"),
    ("settings_reset", "Settings reset"),
    ("language", "Language"),
    ("theme", "Theme"),
    ("theme_light", "Light"),
    ("theme_dark", "Dark"),
    ("score", "Score"),
    ("generated_at", "Generated at"),
    ("length", "Length"),
    ("yes", "Yes"),
    ("no", "No"),
];
