use clap::{Parser, Subcommand};

use crate::browse::SortMode;
use crate::client::ApiClient;
use crate::commands::{self, ThreadActions};
use crate::error::CliError;
use crate::fallback::FallbackAnswers;

#[derive(Debug, Parser)]
#[command(name = "devqa")]
#[command(about = "Ask technical questions and browse the community Q&A")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Backend API base URL (overrides DEVQA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Seed for demo answers used when the backend is unreachable
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask the AI a technical question
    Ask {
        question: String,

        /// Route the question to community experts after answering
        #[arg(long)]
        escalate: bool,
    },

    /// Browse asked questions
    List {
        /// Filter by question text or tag
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = SortMode::Trending)]
        sort: SortMode,
    },

    /// Show a question with its community thread
    Show {
        id: String,

        /// Post a community answer
        #[arg(long)]
        answer: Option<String>,

        /// Upvote a community answer (repeatable)
        #[arg(long, value_name = "ANSWER_ID")]
        upvote: Vec<String>,

        /// Downvote a community answer (repeatable)
        #[arg(long, value_name = "ANSWER_ID")]
        downvote: Vec<String>,

        /// Mark a community answer as accepted
        #[arg(long, value_name = "ANSWER_ID")]
        accept: Option<String>,
    },

    /// Show version information
    Version,
}

impl Cli {
    fn client(&self) -> ApiClient {
        let fallback = match self.seed {
            Some(seed) => FallbackAnswers::seeded(seed),
            None => FallbackAnswers::from_entropy(),
        };
        ApiClient::new(self.api_url.clone(), fallback)
    }

    pub async fn run(&self) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Ask { question, escalate }) => {
                commands::ask_question(&self.client(), question, *escalate).await
            }
            Some(Commands::List { search, sort }) => {
                commands::list_questions(&self.client(), search.as_deref(), *sort).await
            }
            Some(Commands::Show {
                id,
                answer,
                upvote,
                downvote,
                accept,
            }) => {
                let actions = ThreadActions {
                    answer: answer.clone(),
                    upvote: upvote.clone(),
                    downvote: downvote.clone(),
                    accept: accept.clone(),
                };
                commands::show_question(&self.client(), id, &actions).await
            }
            Some(Commands::Version) => {
                println!("devqa CLI version: {}", env!("CARGO_PKG_VERSION"));
                println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
                Ok(())
            }
            None => {
                println!("devqa - AI answers for developer questions, with community escalation");
                println!("Run 'devqa --help' for usage information.");
                Ok(())
            }
        }
    }
}
