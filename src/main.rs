use clap::Parser;
use geolocator::GeoLocator;

/// Geolocate an IP address or hostname via ip-api.com.
///
/// Examples:
///   geolocate              (locate this machine's public address)
///   geolocate 8.8.8.8
///   geolocate example.com
#[derive(Parser)]
#[command(name = "geolocate", version, about, long_about = None)]
struct Cli {
    /// IP address or hostname to locate. Omit to locate the caller.
    #[arg(index = 1)]
    target: Option<String>,

    /// Print the raw response as pretty JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let locator = GeoLocator::new();
    let result = match cli.target.as_deref() {
        Some(target) => locator.lookup(target),
        None => locator.lookup_self(),
    };

    let location = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&location).unwrap());
    } else {
        println!("{}", location);
    }
}
