//! CLI tool for generating the Vuetify configuration module
use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use vuetify_configuration::{
    diagnostic, logging, ConfigError, PluginContainer, PluginOptions,
    VIRTUAL_VUETIFY_CONFIGURATION,
};

/// Generate the `virtual:vuetify-configuration` module from plugin options
#[derive(Parser, Debug)]
#[command(name = "vuetify-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plugin options JSON file, or `-` to read from stdin
    #[arg(value_name = "CONFIG")]
    config: String,

    /// Export `isDev` as true regardless of the options file
    #[arg(long)]
    dev: bool,

    /// Module id to import through the plugin chain
    #[arg(long, value_name = "ID", default_value = VIRTUAL_VUETIFY_CONFIGURATION)]
    id: String,

    /// Write the module to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

async fn read_config(config: &str) -> Result<String, ConfigError> {
    if config == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|source| ConfigError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        Ok(buffer)
    } else {
        tokio::fs::read_to_string(config)
            .await
            .map_err(|source| ConfigError::Io {
                path: PathBuf::from(config),
                source,
            })
    }
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    let source_name = if cli.config == "-" {
        "<stdin>"
    } else {
        cli.config.as_str()
    };

    let source = read_config(&cli.config).await.unwrap_or_else(|e| {
        eprint!("{}", diagnostic::report_config_error(source_name, "", &e));
        process::exit(1);
    });

    let options = PluginOptions::from_json_str(&source).unwrap_or_else(|e| {
        eprint!("{}", diagnostic::report_config_error(source_name, &source, &e));
        process::exit(1);
    });
    let options = if cli.dev { options.with_dev(true) } else { options };

    let plugin = options.into_plugin().unwrap_or_else(|e| {
        eprint!(
            "{}",
            diagnostic::report_configuration_error(source_name, &source, &e)
        );
        process::exit(1);
    });

    let container = PluginContainer::new().with_plugin(Arc::new(plugin));
    debug!(plugins = ?container.plugin_names(), id = %cli.id, "importing module");

    let module = container.import(&cli.id).await.unwrap_or_else(|e| {
        eprint!("{}", diagnostic::report_load_error(&e));
        process::exit(1);
    });

    match cli.out {
        Some(path) => {
            if let Err(e) = tokio::fs::write(&path, &module).await {
                eprintln!("Error writing '{}': {}", path.display(), e);
                process::exit(1);
            }
            info!(path = %path.display(), bytes = module.len(), "wrote module");
        }
        None => print!("{}", module),
    }
}
