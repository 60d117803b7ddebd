use anyhow::Result;
use clap::Parser;
use plantrec::api::PlantApiClient;
use plantrec::commands::{self, diagnostics, plants, questions, recommendations, study};
use plantrec::config::ApiConfig;
use plantrec::model::{AnswerSelection, RecommendationCounts};
use serde_json::Value;
use std::path::PathBuf;

/// plantrec - plant recommendation client
///
/// Talks to the plant recommendation backend and prints its JSON responses.
///
/// The backend address defaults to the one chosen at build time
/// (PLANTREC_API_BASE_URL) and can be overridden with --api-url or the
/// PLANTREC_API_URL environment variable.
///
/// Examples:
///   plantrec plants list --limit 10
///   plantrec questions submit --answer 1:2 --answer 2:4
///   plantrec recommendations rate 42 5
#[derive(Parser, Debug)]
#[command(author, version = env!("PLANTREC_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides the build-time default)
    #[arg(
        long = "api-url",
        env = "PLANTREC_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Browse, search and like plants
    #[command(subcommand)]
    Plants(PlantsCommand),

    /// Fetch the questionnaire and submit answers for recommendations
    #[command(subcommand)]
    Questions(QuestionsCommand),

    /// Fetch and submit the user study
    #[command(subcommand)]
    Study(StudyCommand),

    /// Rate and list received recommendations
    #[command(subcommand)]
    Recommendations(RecommendationsCommand),

    /// Backend connectivity checks
    #[command(subcommand)]
    Diag(DiagCommand),
}

#[derive(clap::Subcommand, Debug)]
enum PlantsCommand {
    /// List plants (defaults to skip 0, limit 600)
    List(PageArgs),
    /// Filter plants by name
    Filter {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Like a plant
    Like(PlantIdArgs),
    /// Remove a like from a plant
    Unlike(PlantIdArgs),
    /// List liked plants
    Likes,
}

#[derive(clap::Args, Debug)]
pub struct PageArgs {
    /// Number of entries to skip
    #[arg(long)]
    pub skip: Option<u32>,

    /// Number of entries to return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct PlantIdArgs {
    #[arg(value_name = "PLANT_ID", value_parser = clap::value_parser!(u32).range(1..))]
    pub plant_id: u32,
}

#[derive(clap::Subcommand, Debug)]
enum QuestionsCommand {
    /// List questions with their answer options
    List,
    /// Submit questionnaire answers and receive recommendations
    Submit(SubmitArgs),
    /// Describe what you are looking for and receive recommendations
    FreeText {
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        counts: CountArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    /// Answer as QUESTION_ID:ANSWER_ID (repeatable)
    #[arg(long = "answer", short = 'a', value_name = "Q:A", required = true)]
    pub answers: Vec<AnswerSelection>,

    /// Additional free text sent along with the answers
    #[arg(long)]
    pub free_text: Option<String>,

    #[command(flatten)]
    pub counts: CountArgs,
}

#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// Number of perfect fits to receive (default 3)
    #[arg(long = "perfect", value_name = "N")]
    pub perfect: Option<u32>,

    /// Number of good fits to receive (default 3)
    #[arg(long = "good", value_name = "N")]
    pub good: Option<u32>,

    /// Number of mismatches to receive (default 3)
    #[arg(long = "bad", value_name = "N")]
    pub bad: Option<u32>,
}

impl From<CountArgs> for RecommendationCounts {
    fn from(args: CountArgs) -> Self {
        RecommendationCounts::new(args.perfect, args.good, args.bad)
    }
}

#[derive(clap::Subcommand, Debug)]
enum StudyCommand {
    /// Fetch the user study questions
    Questions,
    /// Submit user study answers from a JSON file ("-" reads stdin)
    Submit {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(clap::Subcommand, Debug)]
enum RecommendationsCommand {
    /// Rate a recommendation from 1 to 5
    Rate {
        #[arg(value_name = "SUBMISSION_ID", value_parser = clap::value_parser!(u32).range(1..))]
        submission_id: u32,

        #[arg(value_name = "RATING", value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// List all received recommendations
    List {
        /// Only show recommendations that have been rated
        #[arg(long)]
        rated_only: bool,
    },
    /// Delete all stored submissions, recommendations and likes
    Clear,
}

#[derive(clap::Subcommand, Debug)]
enum DiagCommand {
    /// Call the backend test endpoint
    Test,
    /// Show the dataset column names
    Columns,
}

async fn dispatch(api: &PlantApiClient, command: Commands) -> Result<Value> {
    match command {
        Commands::Plants(cmd) => match cmd {
            PlantsCommand::List(page) => plants::list(api, page.skip, page.limit).await,
            PlantsCommand::Filter { name } => plants::filter(api, &name).await,
            PlantsCommand::Like(args) => plants::like(api, args.plant_id).await,
            PlantsCommand::Unlike(args) => plants::unlike(api, args.plant_id).await,
            PlantsCommand::Likes => plants::likes(api).await,
        },
        Commands::Questions(cmd) => match cmd {
            QuestionsCommand::List => questions::list(api).await,
            QuestionsCommand::Submit(args) => {
                questions::submit(api, args.answers, args.free_text, args.counts.into()).await
            }
            QuestionsCommand::FreeText { text, counts } => {
                questions::free_text(api, &text, counts.into()).await
            }
        },
        Commands::Study(cmd) => match cmd {
            StudyCommand::Questions => study::questions(api).await,
            StudyCommand::Submit { file } => study::submit(api, &file).await,
        },
        Commands::Recommendations(cmd) => match cmd {
            RecommendationsCommand::Rate {
                submission_id,
                rating,
            } => recommendations::rate(api, submission_id, rating).await,
            RecommendationsCommand::List { rated_only } => {
                recommendations::list(api, rated_only).await
            }
            RecommendationsCommand::Clear => recommendations::clear(api).await,
        },
        Commands::Diag(cmd) => match cmd {
            DiagCommand::Test => diagnostics::test(api).await,
            DiagCommand::Columns => diagnostics::columns(api).await,
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = ApiConfig::resolve(cli.api_url.as_deref())?;
    let api = PlantApiClient::new(config)?;

    let response = dispatch(&api, cli.command).await?;
    commands::print_json(&response)
}
