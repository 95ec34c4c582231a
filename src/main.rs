use anyhow::Result;
use fasthash::{harness, Options};

fn main() -> Result<()> {
    env_logger::init();

    let stdout = std::io::stdout();
    harness::run(&Options::default(), &mut stdout.lock())?;
    Ok(())
}
