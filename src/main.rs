use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

mod errors;
mod filter;
mod format;
mod geo;
mod locations;

use geo::Point;
use locations::NamedLocation;

#[derive(Parser, Debug)]
#[command(name = "nearby")]
#[command(about = "List the named locations within a radius (meters) of a center point.", long_about = None)]
struct Cli {
    /// Center latitude in degrees
    #[arg(long, default_value_t = 11.1848505, allow_negative_numbers = true)]
    lat: f64,

    /// Center longitude in degrees
    #[arg(long, default_value_t = 75.8435999, allow_negative_numbers = true)]
    lon: f64,

    /// Search radius in meters
    #[arg(short, long, default_value_t = 1500.0, allow_negative_numbers = true)]
    radius: f64,

    /// CSV file (name,latitude,longitude). If omitted, the built-in locations are used.
    #[arg(short, long)]
    locations: Option<String>,

    /// Reject coordinates outside [-90, 90] / [-180, 180] instead of computing with them
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn center_point(cli: &Cli) -> Result<Point> {
    if cli.strict {
        Point::validated(cli.lat, cli.lon).context("center point")
    } else {
        Ok(Point::new(cli.lat, cli.lon))
    }
}

fn check_locations(data: &[NamedLocation], strict: bool) -> Result<()> {
    for location in data {
        if strict {
            location
                .validate()
                .with_context(|| format!("location {:?}", location.name))?;
        } else if !location.point.is_in_range() {
            warn!(
                "{} has out-of-range coordinates ({}, {})",
                location.name, location.point.lat, location.point.lon
            );
        }
    }
    Ok(())
}

fn render(found: &[NamedLocation], center: Point) -> Vec<String> {
    found
        .iter()
        .map(|location| format::render_line(&location.name, geo::distance(center, location.point)))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    let center = center_point(&cli)?;

    let data = match &cli.locations {
        Some(path) => locations::from_path(path).with_context(|| format!("reading {}", path))?,
        None => locations::reference_dataset(),
    };
    check_locations(&data, cli.strict)?;

    info!(
        "Center ({}, {}), radius {} m, {} candidate locations",
        center.lat,
        center.lon,
        cli.radius,
        data.len()
    );

    let found = filter::within_radius(&data, center, cli.radius);
    info!("{} locations within radius", found.len());

    for line in render(&found, center) {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_reference_run() {
        let cli = Cli::parse_from(["nearby"]);
        assert_eq!(cli.lat, 11.1848505);
        assert_eq!(cli.lon, 75.8435999);
        assert_eq!(cli.radius, 1500.0);
        assert!(cli.locations.is_none());
        assert!(!cli.strict);

        let data = locations::reference_dataset();
        let center = center_point(&cli).unwrap();
        let lines = render(&filter::within_radius(&data, center, cli.radius), center);
        assert_eq!(
            lines,
            vec!["Home: 0 meters", "Grand Bakes: 111 meters", "Grand Hotel: 331 meters"]
        );
    }

    #[test]
    fn wider_radius_shows_kilometers() {
        let cli = Cli::parse_from(["nearby", "--radius", "3000"]);
        let data = locations::reference_dataset();
        let center = center_point(&cli).unwrap();
        let lines = render(&filter::within_radius(&data, center, cli.radius), center);
        assert_eq!(lines.last().map(String::as_str), Some("Ramanattukara: 2.5 km"));
    }

    #[test]
    fn strict_rejects_bad_center() {
        let cli = Cli::parse_from(["nearby", "--strict", "--lat", "-95"]);
        assert!(center_point(&cli).is_err());

        let cli = Cli::parse_from(["nearby", "--lat", "-95"]);
        assert!(center_point(&cli).is_ok());
    }

    #[test]
    fn strict_rejects_bad_location() {
        let data = vec![NamedLocation::new("Nowhere", 0.0, 200.0)];
        assert!(check_locations(&data, true).is_err());
        assert!(check_locations(&data, false).is_ok());
        assert!(check_locations(&locations::reference_dataset(), true).is_ok());
    }
}
