pub mod generate;
pub mod history;
pub mod logs;
pub mod score;
pub mod settings;

pub use generate::GenerateArgs;
pub use history::Command as HistoryCommand;
pub use logs::Command as LogsCommand;
pub use score::ScoreArgs;
pub use settings::Command as SettingsCommand;
