use easytrip::client::{parse_coordinates, FilterForm, Paginator, RecommendClient, ResultsPresenter};
use easytrip::constants::{DEFAULT_CLIENT_TIMEOUT_SECONDS, DEFAULT_SERVER_URL};
use easytrip::models::{Activity, ClimateCode, CostLevel, CountryScope, DistanceBucket, Season};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: recommend --lat=LAT --lng=LNG [OPTIONS]

Options:
  --server=URL          Recommendation service (default: {DEFAULT_SERVER_URL})
  --city=NAME           Departure city (informational)
  --country=NAME        Departure country, used for domestic/international
  --season=LABEL        Season to match climate in: Mar-May, Jun-Aug, Sep-Nov, Dec-Feb (repeatable)
  --climate=CODE        0 Cold, 1 Mild, 2 Warm, 3 Hot (repeatable)
  --budget=LEVEL        0 Low, 1 Mid-Low, 2 Mid-High, 3 High (repeatable)
  --pref=ACTIVITY       culture, adventure, nature, beach, nightlife, cuisine,
                        wellness, urban, seclusion (repeatable)
  --scope=SCOPE         domestic | international
  --distance=BUCKET     0 <2h, 1 2-4h, 2 4-6h, 3 6-8h, 4 8h+ (repeatable)
  --page=N              Results page to print (default: 1)
  --timeout=SECONDS     Request timeout (default: {DEFAULT_CLIENT_TIMEOUT_SECONDS})
  --help                Show this help message"
    );
}

/// Every value given for a repeatable `--name=` flag, comma lists flattened.
fn values<'a>(args: &'a [String], name: &str) -> Vec<&'a str> {
    let prefix = format!("--{}=", name);
    args.iter()
        .filter_map(|a| a.strip_prefix(prefix.as_str()))
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
}

/// The value of a single-valued `--name=` flag, taken as given.
fn single<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("--{}=", name);
    args.iter()
        .find_map(|a| a.strip_prefix(prefix.as_str()))
        .map(str::trim)
}

fn parse_single<T: FromStr>(args: &[String], name: &str, default: T) -> Result<T, String> {
    match single(args, name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("Invalid --{} value '{}'", name, raw)),
        None => Ok(default),
    }
}

fn parse_all<T: FromStr>(args: &[String], name: &str) -> Result<Vec<T>, String> {
    values(args, name)
        .into_iter()
        .map(|v| v.parse::<T>().map_err(|_| format!("Invalid --{} value '{}'", name, v)))
        .collect()
}

fn parse_codes<T>(args: &[String], name: &str, make: fn(u8) -> Option<T>) -> Result<Vec<T>, String> {
    parse_all::<u8>(args, name)?
        .into_iter()
        .map(|code| make(code).ok_or_else(|| format!("Invalid --{} value '{}'", name, code)))
        .collect()
}

fn build_form(args: &[String]) -> Result<FilterForm, String> {
    let (Some(lat), Some(lng)) = (single(args, "lat"), single(args, "lng")) else {
        return Err("--lat and --lng are required".to_string());
    };
    let origin = parse_coordinates(lat, lng).map_err(|e| e.to_string())?;

    let scope = match single(args, "scope") {
        Some(raw) => Some(raw.parse::<CountryScope>()?),
        None => None,
    };

    Ok(FilterForm::new(
        single(args, "city").unwrap_or_default(),
        single(args, "country").unwrap_or_default(),
        origin,
    )
    .with_seasons(parse_all::<Season>(args, "season")?)
    .with_climates(parse_codes(args, "climate", ClimateCode::new)?)
    .with_budgets(parse_codes(args, "budget", CostLevel::new)?)
    .with_preferences(parse_all::<Activity>(args, "pref")?)
    .with_scope(scope)
    .with_distances(parse_codes(args, "distance", DistanceBucket::new)?))
}

/// Where and how to submit, and which page to print.
#[derive(Debug, PartialEq)]
struct Options {
    server: String,
    timeout: Duration,
    page: usize,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    Ok(Options {
        server: single(args, "server").unwrap_or(DEFAULT_SERVER_URL).to_string(),
        timeout: Duration::from_secs(parse_single(args, "timeout", DEFAULT_CLIENT_TIMEOUT_SECONDS)?),
        page: parse_single(args, "page", 1)?,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easytrip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }

    let parsed = build_form(&args).and_then(|form| Ok((form, parse_options(&args)?)));
    let (form, options) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            print_help();
            return ExitCode::from(2);
        }
    };

    let client = RecommendClient::with_timeout(options.server, options.timeout);
    let results = match client.recommend(&form).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut pager = Paginator::new(results);
    pager.set_page(options.page);

    let presenter = ResultsPresenter::new(form.seasons.first().copied());
    println!("{}", presenter.render(&pager));

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn country_with_comma_is_kept_whole() {
        let form = build_form(&args(&[
            "--lat=37.5",
            "--lng=127.0",
            "--city=Seoul",
            "--country=Korea, Republic of",
            "--scope=domestic",
        ]))
        .unwrap();

        assert_eq!(form.country, "Korea, Republic of");
        assert_eq!(form.city, "Seoul");
        assert_eq!(form.scope, Some(CountryScope::Domestic));
        assert_eq!(form.to_request().country, "domestic");
    }

    #[test]
    fn list_flags_repeat_and_split_on_commas() {
        let form = build_form(&args(&[
            "--lat=37.5",
            "--lng=127.0",
            "--climate=0,1",
            "--climate=3",
            "--budget=2",
            "--season=Dec-Feb,Jun-Aug",
            "--pref=beaches",
            "--pref=culture",
            "--distance=0, 4",
        ]))
        .unwrap();

        let request = form.to_request();
        assert_eq!(request.climate, vec![0, 1, 3]);
        assert_eq!(request.budget, vec![2]);
        assert_eq!(request.vacation_time, vec!["Dec-Feb", "Jun-Aug"]);
        assert_eq!(request.preferences, vec!["beach", "culture"]);
        assert_eq!(request.distance, vec![0, 4]);
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        let base = ["--lat=37.5", "--lng=127.0"];
        for bad in ["--climate=4", "--budget=9", "--distance=5", "--climate=-1"] {
            let mut list = base.to_vec();
            list.push(bad);
            let err = build_form(&args(&list)).unwrap_err();
            assert!(err.starts_with("Invalid --"), "{}: {}", bad, err);
        }

        let err = build_form(&args(&["--lat=37.5", "--lng=127.0", "--scope=abroad"])).unwrap_err();
        assert!(err.contains("abroad"));
    }

    #[test]
    fn coordinates_are_required_and_validated() {
        let err = build_form(&args(&["--lat=37.5"])).unwrap_err();
        assert!(err.contains("--lat and --lng are required"));

        assert!(build_form(&args(&["--lng=127.0"])).is_err());
        assert!(build_form(&args(&["--lat=north", "--lng=127.0"])).is_err());
        assert!(build_form(&args(&["--lat=95", "--lng=127.0"])).is_err());
    }

    #[test]
    fn options_default_when_absent() {
        let options = parse_options(&args(&[])).unwrap();
        assert_eq!(
            options,
            Options {
                server: DEFAULT_SERVER_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECONDS),
                page: 1,
            }
        );

        let options =
            parse_options(&args(&["--server=http://trip.test", "--timeout=3", "--page=2"])).unwrap();
        assert_eq!(options.server, "http://trip.test");
        assert_eq!(options.timeout, Duration::from_secs(3));
        assert_eq!(options.page, 2);
    }

    #[test]
    fn bad_timeout_or_page_is_reported() {
        let err = parse_options(&args(&["--timeout=abc"])).unwrap_err();
        assert_eq!(err, "Invalid --timeout value 'abc'");

        let err = parse_options(&args(&["--page=x"])).unwrap_err();
        assert_eq!(err, "Invalid --page value 'x'");
    }
}
