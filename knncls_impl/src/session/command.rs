use crate::{KnnError, KnnResult};

/// The closed set of menu commands, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Upload,
    AlgorithmSettings,
    Classify,
    DisplayResults,
    DownloadResults,
    ConfusionMatrix,
}

impl MenuCommand {
    pub const ALL: [Self; 6] = [
        Self::Upload,
        Self::AlgorithmSettings,
        Self::Classify,
        Self::DisplayResults,
        Self::DownloadResults,
        Self::ConfusionMatrix,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Self::Upload => "upload an unclassified csv file",
            Self::AlgorithmSettings => "algorithm settings",
            Self::Classify => "classify data",
            Self::DisplayResults => "display results",
            Self::DownloadResults => "download results",
            Self::ConfusionMatrix => "display confusion matrix",
        }
    }
}

/// A parsed menu choice: one of the commands, or the exit option behind
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Command(MenuCommand),
    Exit,
}

impl MenuChoice {
    /// Interprets one prompt token. Non-numeric and out-of-range tokens are
    /// rejected with [`KnnError::InvalidCommand`].
    pub fn parse(token: &str) -> KnnResult<Self> {
        let choice: usize = token.parse().map_err(|_| KnnError::InvalidCommand)?;
        if choice == MenuCommand::ALL.len() + 1 {
            return Ok(Self::Exit);
        }
        match choice.checked_sub(1).and_then(|i| MenuCommand::ALL.get(i)) {
            Some(command) => Ok(Self::Command(*command)),
            None => Err(KnnError::InvalidCommand),
        }
    }
}
