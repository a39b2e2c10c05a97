use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use scaffold_publish::commands::validators;
use scaffold_publish::{commands::*, config::PublishConfig, constants};

#[derive(Parser)]
#[command(name = "scaffold-publish")]
#[command(about = "Clone, publish and open pull requests for scaffolded repositories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand
#[derive(Args)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// Git token sent as a bearer header (falls back to GIT_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Git username (falls back to GIT_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Git password (falls back to GIT_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Azure DevOps personal access token (falls back to AZURE_DEVOPS_TOKEN)
    #[arg(long)]
    ado_token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the configured repository and check out its branch
    Clone {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Commit all changes in the working directory and push the publish branch
    Push {
        #[command(flatten)]
        common: CommonArgs,

        /// Branch to publish to (overrides publish.branch)
        #[arg(long)]
        branch: Option<String>,

        /// Commit message (overrides publish.commit_message)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Open the configured pull request on Azure DevOps
    Pr {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Clone, push and open a pull request, stopping at the first failure
    Publish {
        #[command(flatten)]
        common: CommonArgs,

        /// Publish into an existing checkout instead of cloning
        #[arg(long)]
        skip_clone: bool,
    },
}

fn build_context(common: CommonArgs) -> Result<CommandContext> {
    let config = PublishConfig::load(&common.config)?;
    let git_credentials =
        validators::resolve_git_credentials(common.token, common.username, common.password)?;
    let ado_token = validators::resolve_ado_token(common.ado_token);

    Ok(CommandContext::new(config, git_credentials, ado_token))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clone { common } => {
            let context = build_context(common)?;
            CloneCommand.execute(&context).await?;
        }
        Commands::Push {
            common,
            branch,
            message,
        } => {
            validators::validate_branch_name(&branch)?;
            validators::validate_commit_message(&message)?;

            let context = build_context(common)?;
            PushCommand { branch, message }.execute(&context).await?;
        }
        Commands::Pr { common } => {
            let context = build_context(common)?;
            PrCommand.execute(&context).await?;
        }
        Commands::Publish { common, skip_clone } => {
            let context = build_context(common)?;
            PublishCommand { skip_clone }.execute(&context).await?;
        }
    }

    Ok(())
}
