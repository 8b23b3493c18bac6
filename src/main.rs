mod app;
mod audio;
mod config;
mod library;
mod likes;
mod logging;
mod lyrics;
mod mpris;
mod runtime;
mod selection;
mod transport;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
