use figment::Jail;
use pretty_assertions::assert_eq;
use todo_config::{LogFormat, StoreKind, TodoConfig};

fn isolate_home(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("HOME", &dir);
    jail.set_env("XDG_CONFIG_HOME", &dir);
}

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("TODO_STORE__PATH", "env.json");
        jail.set_env("TODO_STORE__KIND", "file");
        jail.set_env("TODO_SERVER__ADDR", "127.0.0.1:3000");
        jail.set_env("TODO_LOG__FORMAT", "text");

        let config = TodoConfig::load().expect("config loads");
        assert_eq!(config.store.path, "env.json");
        assert_eq!(config.store.kind, StoreKind::File);
        assert_eq!(config.server.addr, "127.0.0.1:3000");
        assert_eq!(config.log.format, LogFormat::Text);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "todo.toml",
            r#"
[store]
path = "from-file.json"

[server]
addr = "127.0.0.1:1111"
"#,
        )?;
        jail.set_env("TODO_STORE__PATH", "from-env.json");

        let config = TodoConfig::load().expect("config loads");
        assert_eq!(config.store.path, "from-env.json");
        assert_eq!(config.server.addr, "127.0.0.1:1111");
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_collide_with_log_section() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("TODO_LOG_FILTER", "todo_store=trace");

        let config = TodoConfig::load().expect("config loads");
        assert_eq!(config.log.level, "info");
        Ok(())
    });
}
