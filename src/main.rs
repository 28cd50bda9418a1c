use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    let root_dir = config::resolve_root_dir()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg, root_dir))
}

async fn async_main(
    cfg: config::Config,
    root_dir: std::path::PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    let ctx = Arc::new(config::ServerContext::new(cfg, root_dir));
    logger::log_server_start(&addr, &ctx.root_dir);

    let signals = Arc::new(server::signal::SignalHandler::new());
    server::signal::start_signal_handler(Arc::clone(&signals));

    server::server_loop::run(listener, ctx, Arc::clone(&signals.shutdown)).await
}
