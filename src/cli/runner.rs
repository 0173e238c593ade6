use crate::{
    applier::{install_config, ApplyOptions},
    cli::Args,
    error::{Error, Result},
    ioutils::ensure_writable,
    logger::Logger,
    template::{CollisionPolicy, OutputTree},
};
use std::path::PathBuf;
use std::time::Duration;

/// Main CLI runner that checks the options and applies the templates
pub struct Runner<'a> {
    args: Args,
    logger: &'a dyn Logger,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, logger: &'a dyn Logger) -> Self {
        Self { args, logger }
    }

    /// Executes the complete apply workflow
    ///
    /// A failure is reported through the logger before it is returned.
    pub fn run(self) -> Result<OutputTree> {
        self.apply().inspect_err(|err| self.logger.error(&err.to_string()))
    }

    fn apply(&self) -> Result<OutputTree> {
        let template_root = self.template_root()?;
        ensure_writable(&self.args.output)?;

        let tree = install_config(
            &self.args.metadata,
            template_root,
            &self.args.output,
            self.args.validate,
            &self.options(),
            self.logger,
        )?;

        self.logger.info("success");
        Ok(tree)
    }

    fn template_root(&self) -> Result<&PathBuf> {
        self.args
            .templates
            .as_ref()
            .ok_or_else(|| Error::MissingOption { option: "--templates".to_string() })
    }

    fn options(&self) -> ApplyOptions {
        let collision_policy = if self.args.strict_collisions {
            CollisionPolicy::Reject
        } else {
            CollisionPolicy::Overwrite
        };
        ApplyOptions { collision_policy, timeout: self.args.timeout.map(Duration::from_secs) }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args, logger: &dyn Logger) -> Result<OutputTree> {
    let runner = Runner::new(args, logger);
    runner.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemoryLogger;
    use clap::Parser;

    #[test]
    fn missing_templates_option_is_reported() {
        let args = Args::parse_from(["os-config-applier", "-o", "/tmp"]);
        let err = run(args, &MemoryLogger::new()).unwrap_err();
        assert_eq!(err.to_string(), "missing option --templates");
    }

    #[test]
    fn failures_are_logged_at_error_level() {
        let args = Args::parse_from(["os-config-applier", "-o", "/tmp"]);
        let logger = MemoryLogger::new();
        run(args, &logger).unwrap_err();
        assert_eq!(logger.lines(), vec!["[ERROR] missing option --templates".to_string()]);
    }

    #[test]
    fn strict_collisions_flag_selects_reject_policy() {
        let args =
            Args::parse_from(["os-config-applier", "-t", "tpl", "--strict-collisions"]);
        let logger = MemoryLogger::new();
        let runner = Runner::new(args, &logger);
        assert_eq!(runner.options().collision_policy, CollisionPolicy::Reject);
        assert_eq!(runner.options().timeout, None);
    }

    #[test]
    fn timeout_is_converted_to_seconds() {
        let args = Args::parse_from(["os-config-applier", "-t", "tpl", "--timeout", "5"]);
        let logger = MemoryLogger::new();
        let runner = Runner::new(args, &logger);
        assert_eq!(runner.options().timeout, Some(Duration::from_secs(5)));
    }
}
