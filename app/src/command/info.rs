use dtgen_props::BuildProp;
use std::path::PathBuf;
use tracing::info;

/// Strategy for displaying the device record from a build.prop file.
///
/// Output is sectioned for humans by default; `--json` prints the serde
/// rendering of the record instead, for consumption by other tooling.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

/// Input for [`InfoStrategy`].
pub struct InfoInput {
    pub build_prop: PathBuf,
    pub json: bool,
}

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("loading build.prop from {}", input.build_prop.display());
        let props = BuildProp::from_file(&input.build_prop)?;
        let device = props.info();

        if input.json {
            println!("{}", serde_json::to_string_pretty(device)?);
            return Ok(());
        }

        println!("=== Device ===\n");
        println!("Codename: {}", device.codename);
        println!("Manufacturer: {}", device.manufacturer);
        println!("Brand: {}", device.brand);
        println!("Model: {}", device.model);
        println!("Platform: {}", device.platform);
        println!();

        println!("Architecture:");
        println!("  Arch: {}", device.arch);
        println!("  64-bit: {}", device.device_has_64bit_arch);
        println!("  A/B updates: {}", device.device_is_ab);

        if let Some(release) = props.get("ro.build.version.release") {
            println!();
            println!("Build:");
            println!("  Android: {release}");
            if let Some(sdk) = props.get("ro.build.version.sdk") {
                println!("  SDK: {sdk}");
            }
        }

        Ok(())
    }
}
