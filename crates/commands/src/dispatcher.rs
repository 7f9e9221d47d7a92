//! The CLI dispatcher: one subcommand in, at most one network call out.

use workflows::{
    ActionsGateway, AuthToken, BranchName, CommandError, DeployEnvironment, Speaker,
    WorkflowFileName,
};

use crate::render::{run_line, workflow_line};

/// Usage block printed for an unrecognised or missing subcommand.
pub const USAGE: &str = "
🎙️ vocat - GitHub Actions Manager

Usage: vocat <command>

Commands:
  vocat run <workflow>   Trigger a workflow
  vocat deploy <env>     Deploy to environment
  vocat status           Check workflow status
  vocat list             List available workflows

Setup:
  export GITHUB_TOKEN=your_token
  export GITHUB_OWNER=your-username
  export GITHUB_REPO=your-repo
";

/// Executes one CLI invocation against the two ports.
///
/// Holds the resolved token rather than handing it to the gateway up front:
/// the missing-token check must short-circuit *before* a request is even
/// constructed, and every networked command shares that policy.
pub struct Dispatcher<G, S> {
    gateway: G,
    speaker: S,
    token: Option<AuthToken>,
}

impl<G, S> Dispatcher<G, S>
where
    G: ActionsGateway,
    S: Speaker,
{
    /// Creates a dispatcher over the given ports and resolved credential.
    pub fn new(gateway: G, speaker: S, token: Option<AuthToken>) -> Self {
        Self {
            gateway,
            speaker,
            token,
        }
    }

    /// Runs one invocation to completion.
    ///
    /// Prints the banner, speaks the command name, executes the subcommand,
    /// and prints (never propagates) any resulting error. The process exit
    /// code is unaffected by anything that happens here.
    pub async fn run(&self, args: &[String]) {
        let command = args.first().map(String::as_str).unwrap_or("help");

        println!("🎙️ vocat: {command}");
        self.announce(&format!("{command} command")).await;

        let outcome = match command {
            "run" => self.trigger(requested_workflow(args.get(1)), BranchName::main()).await,
            "deploy" => self.deploy(args.get(1).map(String::as_str).unwrap_or("")).await,
            "status" => self.status().await,
            "list" => self.list().await,
            _ => {
                println!("{USAGE}");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            eprintln!("❌ {err}");
        }
    }

    /// Dispatches `workflow` on `branch` and confirms aloud.
    pub async fn trigger(
        &self,
        workflow: WorkflowFileName,
        branch: BranchName,
    ) -> Result<(), CommandError> {
        let token = self.credentials()?;

        self.gateway
            .dispatch_workflow(token, &workflow, &branch)
            .await?;

        println!("✅ Triggered workflow: {workflow}");
        self.announce(&format!("Triggered {workflow}")).await;
        Ok(())
    }

    /// Resolves a deployment alias and delegates to [`Self::trigger`].
    pub async fn deploy(&self, environment: &str) -> Result<(), CommandError> {
        let environment: DeployEnvironment =
            environment
                .parse()
                .map_err(|()| CommandError::UnknownEnvironment {
                    name: environment.to_string(),
                })?;

        self.trigger(environment.workflow_file(), BranchName::main())
            .await
    }

    /// Prints every workflow the repository defines, in API order.
    pub async fn list(&self) -> Result<(), CommandError> {
        let token = self.credentials()?;
        let listed = self.gateway.list_workflows(token).await?;

        println!("📋 Available Workflows:");
        for workflow in &listed {
            println!("{}", workflow_line(workflow));
        }
        Ok(())
    }

    /// Prints the most recent workflow runs, in API order.
    pub async fn status(&self) -> Result<(), CommandError> {
        let token = self.credentials()?;
        let runs = self.gateway.recent_runs(token).await?;

        println!("📊 Recent Workflow Runs:");
        for run in &runs {
            println!("{}", run_line(run));
        }
        Ok(())
    }

    fn credentials(&self) -> Result<&AuthToken, CommandError> {
        self.token.as_ref().ok_or(CommandError::MissingCredentials)
    }

    async fn announce(&self, message: &str) {
        if let Err(err) = self.speaker.speak(message).await {
            tracing::debug!(error = %err, "speech synthesis unavailable");
        }
    }
}

/// The `run` subcommand's workflow argument, defaulting to `test` when the
/// argument is absent or empty.
fn requested_workflow(arg: Option<&String>) -> WorkflowFileName {
    arg.and_then(|name| WorkflowFileName::new(name.as_str()))
        .unwrap_or_else(WorkflowFileName::default_for_run)
}
