use crate::error::{AppError, Result};
use crate::models::{
    Activity, ActivityRatings, BudgetLevel, Coordinates, Destination, MonthlyTemperatures,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = [
    "city",
    "country",
    "latitude",
    "longitude",
    "budget_level",
    "avg_temp_monthly",
];

/// Raw CSV fields, before validation. `into_destination()` applies the
/// shared normalisation rules. Unreadable rating cells read as empty.
#[derive(Debug, Deserialize)]
pub(super) struct RawDestinationRow {
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub budget_level: String,
    #[serde(default)]
    pub avg_temp_monthly: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub culture: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub adventure: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub nature: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub beaches: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub nightlife: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub cuisine: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub wellness: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub urban: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub seclusion: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MonthlyStats {
    avg: Option<f64>,
}

impl RawDestinationRow {
    /// Returns `None` when the row cannot be placed on the map.
    pub fn into_destination(self, id: usize) -> Option<Destination> {
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => match Coordinates::new(lat, lng) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!("Skipping '{}' (row {}): {}", self.city, id, e);
                    return None;
                }
            },
            _ => {
                tracing::warn!("Skipping '{}' (row {}): missing coordinates", self.city, id);
                return None;
            }
        };

        let budget_level = match self.budget_level.parse::<BudgetLevel>() {
            Ok(level) => Some(level),
            Err(e) => {
                tracing::warn!("{} for '{}' (row {}), treating as 0", e, self.city, id);
                None
            }
        };

        let temperatures = parse_monthly(&self.avg_temp_monthly).unwrap_or_else(|e| {
            tracing::warn!(
                "Unreadable avg_temp_monthly for '{}' (row {}): {}",
                self.city,
                id,
                e
            );
            MonthlyTemperatures::default()
        });

        let activities = [
            (Activity::Culture, self.culture),
            (Activity::Adventure, self.adventure),
            (Activity::Nature, self.nature),
            (Activity::Beach, self.beaches),
            (Activity::Nightlife, self.nightlife),
            (Activity::Cuisine, self.cuisine),
            (Activity::Wellness, self.wellness),
            (Activity::Urban, self.urban),
            (Activity::Seclusion, self.seclusion),
        ]
        .into_iter()
        .fold(ActivityRatings::default(), |ratings, (activity, rating)| {
            ratings.with(activity, rating.unwrap_or(0.0))
        });

        Some(Destination::new(
            id,
            self.city.trim(),
            self.country.trim(),
            coordinates,
            budget_level,
            temperatures,
            activities,
        ))
    }
}

/// Parse `{"1": {"avg": 3.2, ...}, ..., "12": {...}}`. An empty cell yields
/// no monthly data; keys outside 1-12 are ignored.
fn parse_monthly(cell: &str) -> std::result::Result<MonthlyTemperatures, serde_json::Error> {
    let mut temps = MonthlyTemperatures::default();
    if cell.trim().is_empty() {
        return Ok(temps);
    }

    let raw: HashMap<String, MonthlyStats> = serde_json::from_str(cell)?;
    for (month, stats) in raw {
        if let (Ok(month), Some(avg)) = (month.trim().parse::<u32>(), stats.avg) {
            temps.set(month, avg);
        }
    }
    Ok(temps)
}

/// Load destinations from any CSV reader. Row ids follow source row order,
/// so skipped rows leave gaps rather than shifting later ids.
pub fn load_destinations<R: Read>(reader: R) -> Result<Vec<Destination>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let required = REQUIRED_COLUMNS
        .iter()
        .copied()
        .chain(Activity::ALL.iter().map(|a| a.column()));
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::DataLoad(format!(
                "travel dataset is missing column '{}'",
                column
            )));
        }
    }

    let mut destinations = Vec::new();
    for (id, record) in rdr.deserialize::<RawDestinationRow>().enumerate() {
        match record {
            Ok(row) => destinations.extend(row.into_destination(id)),
            Err(e) => tracing::warn!("Skipping malformed row {}: {}", id, e),
        }
    }

    Ok(destinations)
}

/// Load the dataset file. A missing file is a startup error.
pub fn load_destinations_from_path(path: &Path) -> Result<Vec<Destination>> {
    if !path.exists() {
        return Err(AppError::DataLoad(format!(
            "travel dataset not found: {}",
            path.display()
        )));
    }

    let file = std::fs::File::open(path)?;
    let destinations = load_destinations(file)?;
    if destinations.is_empty() {
        return Err(AppError::DataLoad(format!(
            "travel dataset has no usable rows: {}",
            path.display()
        )));
    }

    tracing::info!(
        rows = destinations.len(),
        path = %path.display(),
        "Loaded {} destinations from {}",
        destinations.len(),
        path.display()
    );
    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClimateCode, Season};
    use std::io::Write;

    const HEADER: &str = "city,country,latitude,longitude,budget_level,avg_temp_monthly,culture,adventure,nature,beaches,nightlife,cuisine,wellness,urban,seclusion\n";

    fn monthly(temps: [f64; 12]) -> String {
        let body: Vec<String> = temps
            .iter()
            .enumerate()
            .map(|(i, t)| format!("\"\"{}\"\": {{\"\"avg\"\": {}, \"\"max\"\": {}}}", i + 1, t, t + 4.0))
            .collect();
        format!("\"{{{}}}\"", body.join(", "))
    }

    #[test]
    fn parses_rows_in_order() {
        let csv = format!(
            "{HEADER}Busan,\"Korea, Republic of\",35.1796,129.0756,Mid-range,{},4,3,4,5,4,5,3,4,2\n\
             Bangkok,Thailand,13.7563,100.5018,Budget,{},5,3,2,1,5,5,4,5,1\n",
            monthly([3.0, 5.0, 9.0, 14.0, 18.0, 21.0, 25.0, 26.0, 22.0, 17.0, 11.0, 5.0]),
            monthly([27.0; 12]),
        );

        let destinations = load_destinations(csv.as_bytes()).unwrap();
        assert_eq!(destinations.len(), 2);

        let busan = &destinations[0];
        assert_eq!(busan.id, 0);
        assert_eq!(busan.country, "Korea, Republic of");
        assert_eq!(busan.budget_level, Some(BudgetLevel::MID_RANGE));
        assert_eq!(busan.activities.get(Activity::Beach), 5.0);
        assert_eq!(busan.season_code(Season::DecFeb), ClimateCode::COLD);
        // (21 + 25 + 26) / 3 = 24
        assert_eq!(busan.season_code(Season::JunAug), ClimateCode::WARM);

        let bangkok = &destinations[1];
        assert_eq!(bangkok.id, 1);
        assert_eq!(bangkok.budget_level, Some(BudgetLevel::BUDGET));
        assert_eq!(bangkok.season_code(Season::DecFeb), ClimateCode::HOT);
    }

    #[test]
    fn tolerates_bad_cells() {
        let csv = format!(
            "{HEADER}Nowhere,Atlantis,,,Budget,,1,1,1,1,1,1,1,1,1\n\
             Oddity,Elsewhere,10.0,20.0,Royal,not json,,,,,,,,,\n\
             Fine,Elsewhere,11.0,21.0,Luxury,,1,1,1,1,1,1,1,1,1\n"
        );

        let destinations = load_destinations(csv.as_bytes()).unwrap();
        assert_eq!(destinations.len(), 2);

        let oddity = &destinations[0];
        assert_eq!(oddity.id, 1);
        assert_eq!(oddity.budget_level, None);
        assert_eq!(oddity.activities.get(Activity::Culture), 0.0);
        assert_eq!(oddity.season_code(Season::JunAug), ClimateCode::COLD);

        assert_eq!(destinations[1].id, 2);
        assert_eq!(destinations[1].budget_level, Some(BudgetLevel::LUXURY));
    }

    #[test]
    fn unreadable_rating_counts_as_zero() {
        let csv = format!(
            "{HEADER}Hanoi,Vietnam,21.0278,105.8342,Budget,,n/a,3,3,1,4.5,five,3,4,2\n"
        );

        let destinations = load_destinations(csv.as_bytes()).unwrap();
        assert_eq!(destinations.len(), 1);

        let hanoi = &destinations[0];
        assert_eq!(hanoi.activities.get(Activity::Culture), 0.0);
        assert_eq!(hanoi.activities.get(Activity::Cuisine), 0.0);
        assert_eq!(hanoi.activities.get(Activity::Nightlife), 4.5);
        assert!(hanoi.activities.is_strong(Activity::Nightlife));
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "city,country,latitude,longitude\nSeoul,Korea,37.5,127.0\n";
        let err = load_destinations(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::DataLoad(ref m) if m.contains("budget_level")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_destinations_from_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, AppError::DataLoad(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{HEADER}Tokyo,Japan,35.6762,139.6503,Luxury,{},5,3,3,2,5,5,4,5,1\n",
            monthly([6.0, 7.0, 10.0, 15.0, 19.0, 22.0, 26.0, 27.0, 24.0, 18.0, 13.0, 8.0])
        )
        .unwrap();

        let destinations = load_destinations_from_path(file.path()).unwrap();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].city, "Tokyo");
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}").unwrap();
        let err = load_destinations_from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::DataLoad(_)));
    }
}
