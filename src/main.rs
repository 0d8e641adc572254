mod app;
mod cli;
mod commands;
mod configuration;
mod context;
mod prompt;
mod storage;
mod tracing;
mod types;

fn main() -> anyhow::Result<()> {
    app::run()
}
