use dtgen_props::BuildProp;
use std::path::PathBuf;
use tracing::info;

/// Strategy for verifying a build.prop file is complete.
///
/// Parsing either fully succeeds or stops at the first missing required
/// property; the failure message names that property and the process
/// exits nonzero.
#[derive(Debug, Clone, Copy)]
pub struct CheckStrategy;

impl super::CommandStrategy for CheckStrategy {
    type Input = PathBuf;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("checking {}", input.display());
        let props = BuildProp::from_file(&input)?;
        let device = props.info();
        println!("ok: {} ({})", device.codename, device.arch);
        Ok(())
    }
}
