use celestial_catalog::query::{cone_search, CatalogMatch, ConeSearchParams, NearestMatcher};
use celestial_catalog::{Catalog, CatalogObject};
use celestial_core::angle::{DmsFmt, HmsFmt};
use celestial_core::Angle;
use celestial_coords::{EquatorialPosition, J2000};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "messier-query")]
#[command(about = "Query the built-in Messier catalog")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nearest object to a J2000 position
    Nearest {
        /// Right ascension (degrees)
        #[arg(allow_negative_numbers = true)]
        ra: f64,
        /// Declination (degrees)
        #[arg(allow_negative_numbers = true)]
        dec: f64,
        /// Acceptance threshold in degrees
        #[arg(long, default_value_t = celestial_catalog::query::DEFAULT_THRESHOLD_DEG)]
        threshold: f64,
    },
    /// All objects within a radius of a J2000 position
    Cone {
        #[arg(allow_negative_numbers = true)]
        ra: f64,
        #[arg(allow_negative_numbers = true)]
        dec: f64,
        /// Search radius in degrees
        #[arg(long, default_value = "5.0")]
        radius: f64,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the whole catalog
    List,
    /// Print one object by id (e.g. m31)
    Show { id: String },
}

#[derive(serde::Serialize)]
struct JsonObject<'a> {
    id: &'a str,
    name: &'a str,
    ra_deg: f64,
    dec_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_deg: Option<f64>,
    reference_link: &'a str,
}

impl<'a> JsonObject<'a> {
    fn new(object: &'a CatalogObject, distance_deg: Option<f64>) -> Self {
        Self {
            id: object.id(),
            name: object.name(),
            ra_deg: object.position().ra().degrees(),
            dec_deg: object.position().dec().degrees(),
            distance_deg,
            reference_link: object.reference_link(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::messier();

    let rows: Vec<(&CatalogObject, Option<f64>)> = match &cli.command {
        Commands::Nearest { ra, dec, threshold } => {
            let target = EquatorialPosition::<J2000>::try_from_degrees(*ra, *dec)?;
            let matcher =
                NearestMatcher::new(catalog.clone(), Angle::from_degrees(*threshold));
            match matcher.find(&target) {
                CatalogMatch::Found { object, separation } => {
                    let object = catalog
                        .by_id(object.id())
                        .ok_or_else(|| anyhow::anyhow!("unknown object {}", object.id()))?;
                    vec![(object, Some(separation.degrees()))]
                }
                CatalogMatch::NoMatch => Vec::new(),
            }
        }
        Commands::Cone {
            ra,
            dec,
            radius,
            limit,
        } => {
            EquatorialPosition::<J2000>::try_from_degrees(*ra, *dec)?;
            let params = ConeSearchParams {
                ra_deg: *ra,
                dec_deg: *dec,
                radius_deg: *radius,
                max_results: *limit,
            };
            cone_search(&catalog, &params)
                .into_iter()
                .map(|r| (r.object, Some(r.distance_deg)))
                .collect()
        }
        Commands::List => catalog.iter().map(|o| (o, None)).collect(),
        Commands::Show { id } => {
            let object = catalog
                .by_id(id)
                .ok_or_else(|| anyhow::anyhow!("no catalog object with id '{id}'"))?;
            vec![(object, None)]
        }
    };

    match cli.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows)?,
    }

    Ok(())
}

fn print_table(rows: &[(&CatalogObject, Option<f64>)]) {
    let hms = HmsFmt::default();
    let dms = DmsFmt::default();

    for (object, distance) in rows {
        let position = object.position();
        let distance = distance
            .map(|d| format!(" Dist={d:.3}°"))
            .unwrap_or_default();
        println!(
            "{:>5} RA={} Dec={}{} {}",
            object.designation(),
            hms.fmt(position.ra()),
            dms.fmt(position.dec()),
            distance,
            object.name()
        );
    }

    if rows.is_empty() {
        println!("No objects found matching the search criteria.");
    } else if rows.len() > 1 {
        println!("\nTotal results: {}", rows.len());
    }
}

fn print_json(rows: &[(&CatalogObject, Option<f64>)]) -> anyhow::Result<()> {
    let objects: Vec<JsonObject<'_>> = rows
        .iter()
        .map(|(object, distance)| JsonObject::new(object, *distance))
        .collect();
    println!("{}", serde_json::to_string_pretty(&objects)?);
    Ok(())
}
