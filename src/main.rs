use anyhow::Result;
use clap::Parser;
use outfit_core::{App, AppError};
use outfit_weather::{render_failure, render_report, LocationQuery, Preference, WeatherError};

/// Today's outfit for a city or a coordinate pair
#[derive(Debug, Parser)]
#[command(name = "outfit", version, about)]
struct Cli {
    /// Temperature preference: cold, normal or hot (unknown values mean normal)
    #[arg(long = "pref", value_name = "PREFERENCE", value_parser = parse_preference)]
    preference: Option<Preference>,

    /// Latitude in degrees
    #[arg(
        long = "lat",
        value_name = "LAT",
        requires = "longitude",
        allow_hyphen_values = true
    )]
    latitude: Option<String>,

    /// Longitude in degrees
    #[arg(
        long = "lon",
        value_name = "LON",
        requires = "latitude",
        allow_hyphen_values = true
    )]
    longitude: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// City name; several words are joined with spaces
    #[arg(value_name = "CITY", conflicts_with_all = ["latitude", "longitude"])]
    city: Vec<String>,
}

fn parse_preference(label: &str) -> Result<Preference, std::convert::Infallible> {
    Ok(Preference::from_label(label))
}

impl Cli {
    /// The location given on the command line, if any. Validation failures
    /// carry the message shown to the user.
    fn query(&self) -> Result<Option<LocationQuery>, WeatherError> {
        match (&self.latitude, &self.longitude) {
            (Some(lat), Some(lon)) => LocationQuery::parse_coordinates(lat, lon).map(Some),
            _ if self.city.is_empty() => Ok(None),
            _ => LocationQuery::city(&self.city.join(" ")).map(Some),
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let query = cli.query()?;
    let app = App::new()?;

    let report = app.recommend(query, cli.preference).await?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
        println!("{}", json);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    outfit_core::init()?;

    let cli = Cli::parse();

    tracing::info!("Outfit started");

    if let Err(e) = run(cli).await {
        tracing::error!("Recommendation failed: {}", e);
        println!("{}", render_failure(&e.user_message()));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(raw: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("outfit").chain(raw.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_uses_config() {
        let parsed = cli(&[]).unwrap();
        assert_eq!(parsed.preference, None);
        assert!(!parsed.json);
        assert_eq!(parsed.query().unwrap(), None);
    }

    #[test]
    fn test_multi_word_city() {
        let parsed = cli(&["--pref", "cold", "New", "York"]).unwrap();
        assert_eq!(parsed.preference, Some(Preference::Cold));
        assert_eq!(
            parsed.query().unwrap(),
            Some(LocationQuery::City("New York".to_string()))
        );
    }

    #[test]
    fn test_coordinates() {
        let parsed = cli(&["--lat", "47.6", "--lon", "-122.3", "--json"]).unwrap();
        assert!(parsed.json);
        assert_eq!(
            parsed.query().unwrap(),
            Some(LocationQuery::Coordinates {
                latitude: 47.6,
                longitude: -122.3
            })
        );
    }

    #[test]
    fn test_unknown_preference_is_normal() {
        let parsed = cli(&["--pref", "lukewarm", "Oslo"]).unwrap();
        assert_eq!(parsed.preference, Some(Preference::Normal));
    }

    #[test]
    fn test_rejects_bad_combinations() {
        assert!(cli(&["--lat", "1.0"]).is_err());
        assert!(cli(&["--lon", "1.0"]).is_err());
        assert!(cli(&["Oslo", "--lat", "1", "--lon", "2"]).is_err());
        assert!(cli(&["--verbose"]).is_err());
        assert!(cli(&["--pref"]).is_err());
    }

    #[test]
    fn test_non_numeric_coordinates_fail_with_user_message() {
        let parsed = cli(&["--lat", "north", "--lon", "2"]).unwrap();
        let err: AppError = parsed.query().unwrap_err().into();
        assert_eq!(
            err.user_message(),
            "Please provide numeric latitude and longitude"
        );
        assert!(render_failure(&err.user_message())
            .starts_with("Error\nPlease provide numeric latitude and longitude\n"));
    }

    #[test]
    fn test_blank_city_fails_with_user_message() {
        let parsed = cli(&["  "]).unwrap();
        let err: AppError = parsed.query().unwrap_err().into();
        assert_eq!(err.user_message(), "Please enter a city name");
    }

    #[tokio::test]
    async fn test_invalid_input_fails_before_loading_config() {
        let parsed = cli(&["--lat", "95", "--lon", "0"]).unwrap();
        let err = run(parsed).await.unwrap_err();
        assert!(matches!(err, AppError::Weather(WeatherError::InvalidInput(_))));
    }
}
