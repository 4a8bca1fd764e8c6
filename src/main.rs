//! cascada CLI - cascading panel picker demo and tooling
//!
//! Usage: cascada <COMMAND>
//!
//! Commands:
//!   browse   Interactive search-bar demo (location/type/characteristics)
//!   inspect  Parse catalogs and show forest statistics
//!   encode   Flatten an amenity JSON object into filter strings
//!   decode   Rebuild an amenity JSON object from filter strings

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cascada::config::Config;
use cascada::model::{self, HierarchyNode};
use cascada::picker::Size;
use cascada::ui;

/// cascada - cascading multi-column panel picker
#[derive(Parser, Debug)]
#[command(name = "cascada")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive search-bar demo with three coexisting pickers
    Browse {
        /// Path to the location catalog (JSON)
        #[arg(long, default_value = "demos/locations.json")]
        locations: PathBuf,

        /// Path to the characteristic catalog (JSON)
        #[arg(long, default_value = "demos/characteristics.json")]
        characteristics: PathBuf,

        /// Path to the property-type catalog (JSON)
        #[arg(long, default_value = "demos/property_types.json")]
        property_types: PathBuf,

        /// Path to cascada.toml (defaults to ./cascada.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse catalogs and display forest statistics
    Inspect {
        /// Path to the location catalog (JSON)
        #[arg(long, default_value = "demos/locations.json")]
        locations: PathBuf,

        /// Path to the characteristic catalog (JSON)
        #[arg(long, default_value = "demos/characteristics.json")]
        characteristics: PathBuf,

        /// Path to the property-type catalog (JSON)
        #[arg(long, default_value = "demos/property_types.json")]
        property_types: PathBuf,
    },

    /// Flatten an amenity JSON object into filter strings
    Encode {
        /// Amenity set as JSON, e.g. '{"bedrooms":["3+"],"area_m2":{"min":"100"}}'
        amenities: String,
    },

    /// Rebuild an amenity JSON object from filter strings
    Decode {
        /// Filter strings, e.g. bedrooms:3+ area_m2:100-200
        filters: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            locations,
            characteristics,
            property_types,
            config,
        } => cmd_browse(&locations, &characteristics, &property_types, config.as_deref(), cli.json),
        Commands::Inspect {
            locations,
            characteristics,
            property_types,
        } => cmd_inspect(&locations, &characteristics, &property_types, cli.json),
        Commands::Encode { amenities } => cmd_encode(&amenities, cli.json),
        Commands::Decode { filters } => cmd_decode(&filters, cli.json),
    }
}

fn load_forests(
    locations: &std::path::Path,
    characteristics: &std::path::Path,
    property_types: &std::path::Path,
) -> Result<(Vec<HierarchyNode>, Vec<HierarchyNode>, Vec<HierarchyNode>)> {
    let location_tree = model::location_forest(&model::load_locations(locations)?);
    let characteristic_tree =
        model::characteristics_forest(&model::load_characteristics(characteristics)?);
    let type_tree = model::property_type_forest(&model::load_property_types(property_types)?);
    Ok((location_tree, type_tree, characteristic_tree))
}

fn cmd_browse(
    locations: &std::path::Path,
    characteristics: &std::path::Path,
    property_types: &std::path::Path,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let caps = ui::detect_capabilities();
    if !caps.is_tty {
        return Err(cascada::CascadaError::NotATerminal.into());
    }

    let (config, warnings) = Config::load_or_default(config_path);
    let unicode = config.output.unicode.unwrap_or(caps.supports_unicode);
    let glyphs = ui::Glyphs::new(unicode);

    for warning in &warnings {
        let mut message = format!(
            "{} unknown config key '{}' in {}",
            glyphs.warning,
            warning.key,
            warning.file.display()
        );
        if let Some(line) = warning.line {
            message.push_str(&format!(" (line {line})"));
        }
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" - did you mean '{suggestion}'?"));
        }
        eprintln!("{message}");
    }

    let (location_tree, type_tree, characteristic_tree) =
        load_forests(locations, characteristics, property_types)?;

    let viewport = Size {
        width: i32::from(caps.width),
        height: i32::from(caps.height),
    };
    let mut app = ui::BrowseApp::new(location_tree, type_tree, characteristic_tree, config, viewport);

    let summary = ui::run_interactive(&mut app, &glyphs, caps.supports_color)?;

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("🔎 Search selection");
        if summary.location_labels.is_empty() {
            println!("  Location: (none)");
        } else {
            println!("  Location: {}", summary.location_labels.join(" › "));
        }
        if summary.property_types.is_empty() {
            println!("  Types: (none)");
        } else {
            println!("  Types: {}", summary.property_types.join(", "));
        }
        if summary.filters.is_empty() {
            println!("  Filters: (none)");
        } else {
            for filter in &summary.filters {
                println!("  Filter: {filter}");
            }
        }
    }

    Ok(())
}

fn cmd_inspect(
    locations: &std::path::Path,
    characteristics: &std::path::Path,
    property_types: &std::path::Path,
    json: bool,
) -> Result<()> {
    let (location_tree, type_tree, characteristic_tree) =
        load_forests(locations, characteristics, property_types)?;

    let forests = [
        ("locations", &location_tree),
        ("property-types", &type_tree),
        ("characteristics", &characteristic_tree),
    ];

    if json {
        for (name, forest) in forests {
            let mut leaves = Vec::new();
            model::collect_leaves(forest, &mut leaves);
            let output = serde_json::json!({
                "event": "forest",
                "catalog": name,
                "roots": forest.len(),
                "nodes": model::node_count(forest),
                "leaves": leaves.len(),
                "depth": model::max_depth(forest),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("🔍 Catalog forests\n");
        for (name, forest) in forests {
            let mut leaves = Vec::new();
            model::collect_leaves(forest, &mut leaves);
            println!("┌─ {name}");
            println!("│  Roots: {}", forest.len());
            println!("│  Nodes: {}", model::node_count(forest));
            println!("│  Leaves: {}", leaves.len());
            println!("│  Depth: {}", model::max_depth(forest));
            println!("└─");
        }
    }

    Ok(())
}

fn cmd_encode(amenities: &str, json: bool) -> Result<()> {
    let set: cascada::AmenitySet =
        serde_json::from_str(amenities).map_err(|e| cascada::CascadaError::InvalidAmenitySet {
            message: e.to_string(),
        })?;
    let filters = cascada::amenity::encode(&set);

    if json {
        let output = serde_json::json!({ "event": "encode", "filters": filters });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for filter in filters {
            println!("{filter}");
        }
    }

    Ok(())
}

fn cmd_decode(filters: &[String], json: bool) -> Result<()> {
    let set = cascada::amenity::parse(filters.iter().map(String::as_str));

    if json {
        let output = serde_json::json!({ "event": "decode", "amenities": set });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&set)?);
    }

    Ok(())
}
