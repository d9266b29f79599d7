use crate::demo::{run_demo, run_predict, run_upload, DemoArgs, PredictArgs, UploadArgs};
use crate::server;
use attrition_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AttritionAI",
    about = "Score employee attrition risk and explain the contributing factors",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single employee entered on the command line
    Predict(PredictArgs),
    /// Score every row of an employee CSV export
    Upload(UploadArgs),
    /// Score the built-in sample batch for stakeholder demos
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Upload(args) => run_upload(args),
        Command::Demo(args) => run_demo(args),
    }
}
