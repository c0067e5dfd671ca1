use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use starter_shell::frontend::app::App;
use starter_shell::frontend::services::context::ShellContext;
use starter_shell::utils::config::ShellConfig;

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let config = rt.block_on(ShellConfig::load())?;
    // Background tasks spawned from the UI thread land on this runtime
    let _guard = rt.enter();
    log::info!(
        "Starting {} against {} ({:?})",
        config.project_name,
        config.server_url,
        config.build_profile()
    );

    let title = config.project_name.clone();
    let shell = ShellContext::new(config)?;

    let size = LogicalSize::new(1280.0, 832.0);
    let window_config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(360.0, 640.0)),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window_config)
        .with_context(shell)
        .launch(App);
    Ok(())
}
