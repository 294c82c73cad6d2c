use clap::{Parser, Subcommand};
use orbit::{Category, Theme};
use orbit_showcase::commands;
use orbit_showcase::config::ComponentKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orbit-showcase")]
#[command(about = "Resolve Orbit style props and build the component showcase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a JSON props object into utility classes
    Resolve {
        #[arg(long, short, value_enum, default_value = "box")]
        component: ComponentKind,

        /// Print the rendered element instead of the class string
        #[arg(long)]
        html: bool,

        props: String,
    },
    /// List tokens and the classes they emit
    Tokens {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Print every class the theme can emit, for the CSS framework's safelist
    Safelist,
    /// Render the showcase site described by a config file
    Build {
        #[arg(long, short, default_value = "orbit.toml")]
        config: PathBuf,

        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn run(cli: Cli, theme: &Theme) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve {
            component,
            html,
            props,
        } => {
            println!("{}", commands::resolve_props(theme, component, &props, html)?);
        }
        Commands::Tokens { category } => {
            print!("{}", commands::list_tokens(theme, category));
        }
        Commands::Safelist => {
            print!("{}", commands::safelist(theme));
        }
        Commands::Build { config, out } => {
            let target = commands::build_site(theme, &config, out.as_deref())?;
            println!("{}", target.display());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let theme = Theme::orbit();

    if let Err(e) = run(cli, &theme) {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }
}
