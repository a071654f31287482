use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use std::{fs, path::PathBuf};

use skyglance_core::{
    CityStore, Config, FileCityStore, MemoryCityStore, Submission, ViewController,
    gateway_from_config, page,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyglance", version, about = "Current weather and a week's forecast for a city")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// State file holding the last searched city.
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Override the geocoding endpoint for this run.
    #[arg(long, global = true)]
    pub geocoding_url: Option<String>,

    /// Override the forecast endpoint for this run.
    #[arg(long, global = true)]
    pub forecast_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a city (defaults to the last one searched).
    Show {
        /// City name, e.g. "Paris" or "São Paulo".
        city: Option<String>,

        /// Also write the result as an HTML page.
        #[arg(long)]
        html: Option<PathBuf>,

        /// Don't remember this city for next time.
        #[arg(long)]
        no_save: bool,
    },

    /// Prompt for cities until Esc is pressed.
    Interactive {
        /// Don't remember searched cities for next time.
        #[arg(long)]
        no_save: bool,
    },

    /// Edit the API endpoints in the config file.
    Configure,

    /// Forget the last searched city.
    Forget,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Command::Show { city, html, no_save } => {
                let controller = self.controller(*no_save)?;

                let outcome = match city {
                    Some(city) => controller.submit(city).await,
                    None => controller.start().await,
                };

                let screen = controller.screen();
                if let Some(path) = html {
                    fs::write(path, page::to_html(&screen))
                        .with_context(|| format!("Failed to write HTML page: {}", path.display()))?;
                }

                match outcome {
                    Submission::Displayed { .. } => output::print_weather(&screen),
                    Submission::Failed(message) => return Err(anyhow!(message)),
                    Submission::Ignored if city.is_some() => bail!("City name must not be empty."),
                    Submission::Ignored => bail!(
                        "No city given and no previous search remembered.\n\
                         Hint: run `skyglance show <CITY>`."
                    ),
                    // Only one lookup is ever started here.
                    Submission::Superseded => {}
                }
            }
            Command::Interactive { no_save } => {
                let controller = self.controller(*no_save)?;
                interactive(&controller).await?;
            }
            Command::Configure => {
                let path = self.config_path()?;
                let current = Config::load_from(&path)?;

                let geocoding_url = Text::new("Geocoding endpoint:")
                    .with_default(&current.geocoding_url)
                    .prompt()?;
                let forecast_url = Text::new("Forecast endpoint:")
                    .with_default(&current.forecast_url)
                    .prompt()?;

                let updated = current.with_overrides(Some(geocoding_url), Some(forecast_url));
                updated.save_to(&path)?;
                println!("Saved configuration to {}", path.display());
            }
            Command::Forget => {
                self.file_store()?.clear()?;
                println!("Forgot the last searched city.");
            }
        }

        Ok(())
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    fn load_config(&self) -> Result<Config> {
        let config = Config::load_from(&self.config_path()?)?;
        Ok(config.with_overrides(self.geocoding_url.clone(), self.forecast_url.clone()))
    }

    fn file_store(&self) -> Result<FileCityStore> {
        match &self.state {
            Some(path) => Ok(FileCityStore::new(path)),
            None => FileCityStore::at_default_location(),
        }
    }

    fn controller(&self, no_save: bool) -> Result<ViewController> {
        let config = self.load_config()?;
        tracing::debug!(?config, "loaded configuration");

        let file_store = self.file_store()?;
        let store: Box<dyn CityStore> = if no_save {
            // Still start from the remembered city, but never write it back.
            match file_store.load() {
                Ok(Some(city)) => Box::new(MemoryCityStore::with_city(city)),
                Ok(None) => Box::new(MemoryCityStore::new()),
                Err(err) => {
                    tracing::warn!(error = %format!("{err:#}"), "could not read last city");
                    Box::new(MemoryCityStore::new())
                }
            }
        } else {
            Box::new(file_store)
        };

        Ok(ViewController::new(gateway_from_config(&config), store))
    }
}

async fn interactive(controller: &ViewController) -> Result<()> {
    if let Submission::Displayed { .. } = controller.start().await {
        output::print_screen(&controller.screen());
    }

    loop {
        let last = controller.last_city().unwrap_or_default();
        let answer = Text::new("City:")
            .with_initial_value(&last)
            .with_help_message("Enter to search, Esc to quit")
            .prompt_skippable();

        let input = match answer {
            Ok(Some(input)) => input,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match controller.submit(&input).await {
            Submission::Ignored | Submission::Superseded => continue,
            Submission::Displayed { .. } | Submission::Failed(_) => {
                output::print_screen(&controller.screen());
            }
        }
    }

    Ok(())
}
