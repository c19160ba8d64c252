use nemaki_config::NemakiConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `NEMAKI_*`), then apply
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NemakiConfig> {
    let mut config = NemakiConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut NemakiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(server) = &flags.server {
        config.server.base_url.clone_from(server);
        config.server.validate()?;
    }
    Ok(())
}
