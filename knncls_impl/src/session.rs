mod command;
mod confusion;
mod machine;
mod settings;

pub use command::{MenuChoice, MenuCommand};
pub use confusion::ConfusionMatrix;
pub use machine::Session;
pub use settings::Settings;
