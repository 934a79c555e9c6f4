use anyhow::Context;
use todo_config::TodoConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, files, `TODO_*` env) and apply CLI flags.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TodoConfig> {
    let mut config = TodoConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_flags(&mut config, flags);
    Ok(config)
}

fn apply_flags(config: &mut TodoConfig, flags: &GlobalFlags) {
    if let Some(file) = &flags.file {
        config.store.path.clone_from(file);
    }
    if let Some(format) = flags.log_format {
        config.log.format = format.into();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use todo_config::LogFormat;

    use super::*;
    use crate::cli::LogFormatArg;

    #[test]
    fn flags_override_config() {
        let mut config = TodoConfig::default();
        let flags = GlobalFlags {
            file: Some("mine.json".to_string()),
            log_format: Some(LogFormatArg::Text),
            ..GlobalFlags::default()
        };

        apply_flags(&mut config, &flags);

        assert_eq!(config.store.resolved_path(), PathBuf::from("out/mine.json"));
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = TodoConfig::default();
        apply_flags(&mut config, &GlobalFlags::default());
        assert_eq!(config.store.path, "out/todos.json");
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
