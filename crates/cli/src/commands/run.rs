use std::sync::Arc;

use anyhow::Context;
use clap::{ArgGroup, Args};
use stackhook_aws::AwsConnector;
use stackhook_core::{DeploymentContext, HookArgument, HookError};
use stackhook_hooks::{CloudConnector, DryRunConnector, HookContext, HookRegistry};
use tracing::info;

use crate::config::RunnerConfig;

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("hook_argument")
        .required(true)
        .args(["argument", "argument_yaml"])
))]
pub struct RunArgs {
    /// Hook name, e.g. `asg_scaling_processes`.
    pub hook: String,
    /// Hook argument as a plain string, e.g. `suspend::ScheduledActions`.
    #[arg(long)]
    pub argument: Option<String>,
    /// Hook argument as a YAML value, the way it appears in stack config.
    #[arg(long)]
    pub argument_yaml: Option<String>,
    /// Project code (overrides `project_code` in the config file).
    #[arg(long, env = "STACKHOOK_PROJECT_CODE")]
    pub project_code: Option<String>,
    /// Environment path, e.g. `dev/eu-west-1`.
    #[arg(long)]
    pub environment_path: String,
    /// Stack name within the environment.
    #[arg(long)]
    pub stack_name: String,
    /// AWS region (overrides the config file).
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,
    /// AWS endpoint URL override, e.g. for `LocalStack`.
    #[arg(long)]
    pub endpoint_url: Option<String>,
    /// IAM role ARN to assume.
    #[arg(long)]
    pub role_arn: Option<String>,
    /// Resolve target groups but do not change them.
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// The untyped hook argument, as a host would hand it to the hook.
    pub fn hook_argument(&self) -> anyhow::Result<HookArgument> {
        match (&self.argument, &self.argument_yaml) {
            (Some(raw), _) => Ok(HookArgument::String(raw.clone())),
            (None, Some(yaml)) => {
                serde_yaml_ng::from_str(yaml).context("--argument-yaml is not valid YAML")
            }
            (None, None) => anyhow::bail!("one of --argument or --argument-yaml is required"),
        }
    }

    /// Build the deployment identity from flags, falling back to the config file.
    pub fn deployment(&self, config: &RunnerConfig) -> anyhow::Result<DeploymentContext> {
        let project_code = self
            .project_code
            .clone()
            .or_else(|| config.project_code.clone())
            .context(
                "no project code: pass --project-code or set project_code in the config file",
            )?;
        Ok(DeploymentContext::new(
            project_code,
            &self.environment_path,
            &self.stack_name,
        ))
    }
}

pub async fn run(config: &RunnerConfig, args: &RunArgs) -> anyhow::Result<()> {
    let registry = HookRegistry::with_builtin_hooks();
    let hook = registry
        .get(&args.hook)
        .ok_or_else(|| HookError::UnknownHook(args.hook.clone()))?;

    let argument = args.hook_argument()?;
    let deployment = args.deployment(config)?;

    let mut aws = config.aws.clone();
    if let Some(region) = &args.region {
        aws.region.clone_from(region);
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        aws.endpoint_url = Some(endpoint_url.clone());
    }
    if let Some(role_arn) = &args.role_arn {
        aws.role_arn = Some(role_arn.clone());
    }

    let aws_connector = AwsConnector::new(aws).await;
    let connector: Arc<dyn CloudConnector> = if args.dry_run {
        Arc::new(DryRunConnector::new(aws_connector))
    } else {
        Arc::new(aws_connector)
    };

    info!(
        hook = %args.hook,
        stack = %deployment.full_stack_name(),
        dry_run = args.dry_run,
        "running hook"
    );

    let ctx = HookContext::new(deployment, connector);
    hook.run(&argument, &ctx).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        run: RunArgs,
    }

    fn parse(args: &[&str]) -> Result<RunArgs, clap::Error> {
        let mut argv = vec!["stackhook", "asg_scaling_processes"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).map(|cli| cli.run)
    }

    const STACK: [&str; 4] = ["--environment-path", "dev/east", "--stack-name", "app"];

    #[test]
    fn plain_argument_is_a_string() {
        let mut args = vec!["--argument", "suspend::Launch"];
        args.extend(STACK);
        let run = parse(&args).unwrap();
        assert_eq!(
            run.hook_argument().unwrap(),
            serde_json::json!("suspend::Launch")
        );
    }

    #[test]
    fn yaml_argument_keeps_its_type() {
        let mut args = vec!["--argument-yaml", "42"];
        args.extend(STACK);
        let run = parse(&args).unwrap();
        assert_eq!(run.hook_argument().unwrap(), serde_json::json!(42));
    }

    #[test]
    fn argument_is_required() {
        assert!(parse(&STACK).is_err());
    }

    #[test]
    fn argument_forms_are_exclusive() {
        let mut args = vec!["--argument", "a::b", "--argument-yaml", "a::b"];
        args.extend(STACK);
        assert!(parse(&args).is_err());
    }

    #[test]
    fn project_code_falls_back_to_config() {
        let mut args = vec!["--argument", "resume::Launch"];
        args.extend(STACK);
        let run = parse(&args).unwrap();

        let config = RunnerConfig {
            project_code: Some("proj".to_owned()),
            ..RunnerConfig::default()
        };
        // The flag may also be set through the environment; only assert the
        // fallback when it is not.
        if run.project_code.is_none() {
            let deployment = run.deployment(&config).unwrap();
            assert_eq!(deployment.full_stack_name(), "proj-dev-east-app");
        }
    }

    #[test]
    fn project_code_flag_wins() {
        let mut args = vec!["--argument", "resume::Launch", "--project-code", "flag"];
        args.extend(STACK);
        let run = parse(&args).unwrap();

        let config = RunnerConfig {
            project_code: Some("file".to_owned()),
            ..RunnerConfig::default()
        };
        assert_eq!(
            run.deployment(&config).unwrap().full_stack_name(),
            "flag-dev-east-app"
        );
    }
}
