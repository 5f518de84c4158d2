use clap::Parser;
use once_cell::sync::Lazy;

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), hash)
    }
});

#[derive(Parser, Debug)]
#[command(name = "staffdir")]
#[command(about = "Interactive, in-memory employee directory", long_about = None)]
#[command(version, long_version = LONG_VERSION.as_str())]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Start with a few sample records
    #[arg(long)]
    pub demo: bool,
}
