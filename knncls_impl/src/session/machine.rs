use crate::{
    algo::classify,
    data::{DataPoint, DataSet},
    io::IoEndpoint,
    session::{ConfusionMatrix, MenuChoice, MenuCommand, Settings},
    DistanceMetric, KnnResult, MAX_K,
};

const TRAIN_FILE_PROMPT: &str = "Please upload your local train CSV file. (Enter ! to skip)\n";
const TEST_FILE_PROMPT: &str = "Please upload your local test CSV file.\n";
const RESULTS_PATH_PROMPT: &str = "Please type the path for saving the results.\n";
const NOT_CLASSIFIED: &str = "Haven't classified any data yet!";

/// One user's interaction from connect to orderly close.
///
/// Drives the numbered menu over an [`IoEndpoint`], against the shared
/// training set and its own [`Settings`].
#[derive(Debug)]
pub struct Session<'a, IO: IoEndpoint> {
    io: IO,
    shared: &'a DataSet,
    settings: Settings,
}

impl<'a, IO: IoEndpoint> Session<'a, IO> {
    pub fn new(io: IO, shared: &'a DataSet) -> Self {
        Self {
            io,
            shared,
            settings: Settings::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_io(self) -> IO {
        self.io
    }

    /// The menu loop. Returns when the user exits or the endpoint dies;
    /// per-command failures are reported and the loop continues.
    pub fn run(&mut self) -> KnnResult<()> {
        debug!(
            "Session started with K = {}, metric = {}",
            self.settings.k,
            self.settings.metric.key()
        );
        loop {
            self.render_menu()?;
            let token = self.io.prompt()?;
            match MenuChoice::parse(&token) {
                Ok(MenuChoice::Command(command)) => {
                    debug!("Executing {command:?}");
                    if let Err(error) = self.dispatch(command) {
                        if error.is_session_fatal() {
                            return Err(error);
                        }
                        self.display_error_line(&error.to_string())?;
                    }
                }
                Ok(MenuChoice::Exit) => {
                    debug!("Exit chosen");
                    self.io.terminate()?;
                    return Ok(());
                }
                Err(_) => self.display_error_line("Invalid Command")?,
            }
        }
    }

    fn render_menu(&mut self) -> KnnResult<()> {
        for (i, command) in MenuCommand::ALL.iter().enumerate() {
            self.io
                .display(&format!("{}.\t{}\n", i + 1, command.description()))?;
        }
        self.io
            .display(&format!("{}.\texit\n", MenuCommand::ALL.len() + 1))
    }

    fn dispatch(&mut self, command: MenuCommand) -> KnnResult<()> {
        match command {
            MenuCommand::Upload => self.upload(),
            MenuCommand::AlgorithmSettings => self.algorithm_settings(),
            MenuCommand::Classify => self.classify_data(),
            MenuCommand::DisplayResults => self.display_results(),
            MenuCommand::DownloadResults => self.download_results(),
            MenuCommand::ConfusionMatrix => self.confusion_matrix(),
        }
    }

    // Error lines are red (SGR 31;1) and newline-terminated.
    fn display_error_line(&mut self, message: &str) -> KnnResult<()> {
        self.io.display(&format!("\x1b[31;1m{message}\x1b[0m\n"))
    }

    fn upload(&mut self) -> KnnResult<()> {
        loop {
            self.io.display(TRAIN_FILE_PROMPT)?;
            let train_path = self.io.prompt()?;

            if train_path == "!" {
                // the sentinel keeps the previous overlay
                if self.settings.overlay.is_some() {
                    self.io.display("Leaving the train file unchanged...\n")?;
                    break;
                }
                self.display_error_line("You haven't uploaded a train file previously.")?;
                continue;
            }

            let overlay = self.read_training_set(&train_path)?;
            debug!("Overlay training set of {} points uploaded", overlay.len());
            self.settings.overlay = Some(overlay);
            self.io.display("Upload complete\n")?;
            break;
        }

        self.io.display(TEST_FILE_PROMPT)?;
        self.settings.test_path = self.io.prompt()?;
        self.io.display("Upload complete\n")?;
        self.settings.invalidate_results();
        Ok(())
    }

    // Reads the whole client-side file; the overlay is only replaced by the
    // caller once every row parsed.
    fn read_training_set(&mut self, path: &str) -> KnnResult<DataSet> {
        self.io.open_read(path)?;
        let outcome = self.read_rows();
        self.io.close_read()?;
        outcome
    }

    fn read_rows(&mut self) -> KnnResult<DataSet> {
        let mut data_set = DataSet::new();
        while let Some(line) = self.io.read_line()? {
            data_set.push(DataPoint::from_csv_row(&line)?)?;
        }
        Ok(data_set)
    }

    fn algorithm_settings(&mut self) -> KnnResult<()> {
        self.io.display(&format!(
            "The current KNN parameters are: K = {}, distance metric = {}\n",
            self.settings.k,
            self.settings.metric.key()
        ))?;

        loop {
            let k_token = self.io.prompt()?;
            let metric_token = self.io.prompt()?;

            let k = match k_token.parse::<usize>() {
                Ok(k) if (1..=MAX_K).contains(&k) => k,
                _ => {
                    self.display_error_line("Invalid value for K, please try again")?;
                    continue;
                }
            };

            let metric = match DistanceMetric::from_key(&metric_token) {
                Ok(metric) => metric,
                Err(_) => {
                    self.display_error_line("Invalid distance metric, please try again")?;
                    continue;
                }
            };

            debug!("Settings changed to K = {k}, metric = {}", metric.key());
            self.settings.k = k;
            self.settings.metric = metric;
            self.settings.invalidate_results();
            return Ok(());
        }
    }

    fn classify_data(&mut self) -> KnnResult<()> {
        if self.settings.test_path.is_empty() {
            self.display_error_line("Please upload a test file first.")?;
            return Ok(());
        }

        let test_path = self.settings.test_path.clone();
        self.io.open_read(&test_path)?;
        let outcome = self.classify_rows();
        self.io.close_read()?;

        // committed only on full success, a failed command leaves the
        // settings untouched
        let (true_labels, predicted_labels) = outcome?;
        debug!("Classified {} rows", predicted_labels.len());
        self.settings.true_labels = true_labels;
        self.settings.predicted_labels = predicted_labels;
        self.settings.is_classified = true;
        Ok(())
    }

    fn classify_rows(&mut self) -> KnnResult<(Vec<String>, Vec<String>)> {
        let mut true_labels = Vec::new();
        let mut predicted_labels = Vec::new();
        while let Some(line) = self.io.read_line()? {
            let row = DataPoint::from_csv_row(&line)?;
            let training = self.settings.overlay.as_ref().unwrap_or(self.shared);
            predicted_labels.push(classify(
                training,
                &row,
                self.settings.k,
                self.settings.metric,
            )?);
            true_labels.push(row.label().to_string());
        }
        Ok((true_labels, predicted_labels))
    }

    fn display_results(&mut self) -> KnnResult<()> {
        if !self.settings.is_classified {
            return self.display_error_line(NOT_CLASSIFIED);
        }

        for i in 0..self.settings.predicted_labels.len() {
            let line = format!("{}.\t{}\n", i + 1, self.settings.predicted_labels[i]);
            self.io.display(&line)?;
        }
        self.io.display("Done.\n")
    }

    fn download_results(&mut self) -> KnnResult<()> {
        if !self.settings.is_classified {
            return self.display_error_line(NOT_CLASSIFIED);
        }

        self.io.display(RESULTS_PATH_PROMPT)?;
        let path = self.io.prompt()?;
        self.io.open_write(&path)?;
        for i in 0..self.settings.predicted_labels.len() {
            let line = format!("{}.\t{}\n", i + 1, self.settings.predicted_labels[i]);
            self.io.write_line(&line)?;
        }
        self.io.close_write()
    }

    fn confusion_matrix(&mut self) -> KnnResult<()> {
        if !self.settings.is_classified {
            return self.display_error_line(NOT_CLASSIFIED);
        }

        let true_count = self.settings.true_labels.len();
        let predicted_count = self.settings.predicted_labels.len();
        let matrix = ConfusionMatrix::new(
            &self.settings.true_labels,
            &self.settings.predicted_labels,
        );

        if true_count != predicted_count {
            self.display_error_line(&format!(
                "Mismatch between number of classified and true classes. \
                 Have {predicted_count} and {true_count}."
            ))?;
        }

        for line in matrix.render() {
            self.io.display(&line)?;
        }
        Ok(())
    }
}
