use clap::Parser;
use itemtags::application::{init::init, ConfigService, Schema, ValidatePayloadService};
use itemtags::cli::{format_config, format_schema_list, render_json, Cli, Commands};
use itemtags::error::ItemTagsError;
use itemtags::infrastructure::{logging, Config, OutputStyle, PayloadSource};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ItemTagsError> {
    let config_path = Config::locate(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate {
            schema,
            file,
            compact,
        } => {
            let config = Config::load(&config_path)?;
            logging::init(&config.log_level);

            let schema = Schema::from_str(&schema)?;
            let source = PayloadSource::from_arg(file.as_deref());
            let normalized = ValidatePayloadService::new(schema).execute(&source)?;

            let style = if compact {
                OutputStyle::Compact
            } else {
                config.output
            };
            println!("{}", render_json(&normalized, style)?);
            Ok(())
        }
        Commands::Schemas => {
            print!("{}", format_schema_list(&Schema::ALL));
            Ok(())
        }
        Commands::Init { path } => {
            let target = cli.config.unwrap_or(path);
            let written = init(&target)?;
            println!("Wrote default config to {}", written.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_path);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: itemtags config [--list | <key> [<value>]]");
                println!("Valid keys: output, log_level");
                Ok(())
            }
        }
    }
}
