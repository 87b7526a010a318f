use clap::{Parser, Subcommand};
use orst_term::{BenchArgs, VisualizeArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a sorting algorithm work through a random array
    Visualize(VisualizeArgs),

    /// Count the comparisons and swaps every algorithm makes on the same arrays
    Bench(BenchArgs),

    /// List the available algorithms
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Visualize(visualize_args) => visualize_args.run().await,
        Commands::Bench(bench_args) => bench_args.run().await,
        Commands::List => {
            orst_term::print_algorithms();
            Ok(())
        }
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_visualize_flags() {
    let cli = Cli::try_parse_from(["orst", "visualize", "-a", "heap", "-n", "80", "--speed", "5"]);
    assert!(matches!(cli, Ok(Cli { commands: Commands::Visualize(_) })));

    let cli = Cli::try_parse_from(["orst", "visualize", "--size", "500"]);
    assert!(cli.is_err());
}
